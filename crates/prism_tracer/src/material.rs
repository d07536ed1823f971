//! Surface material for Phong-style shading.

use prism_math::Vec3;

/// Color type alias (linear RGB, nominally 0-1 but never clamped while shading)
pub type Color = Vec3;

/// Shading coefficients and base color of a surface.
///
/// Attached to exactly one primitive when the scene is built and never
/// changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Weight of the mirror reflection (0 = none, 1 = perfect mirror)
    pub reflect: f32,
    /// Weight of the N·L diffuse term
    pub diffuse: f32,
    /// Weight of the Phong highlight
    pub specular: f32,
    /// Base color; also the emitted color for lights
    pub color: Color,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            reflect: 0.0,
            diffuse: 1.0,
            specular: 1.0,
            color: Color::ONE,
        }
    }
}

impl Material {
    /// Create a default (diffuse + specular, non-reflective) material with the given color.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// A perfect mirror: no diffuse term, full reflection, default highlight.
    pub fn mirror() -> Self {
        Self {
            reflect: 1.0,
            diffuse: 0.0,
            ..Default::default()
        }
    }

    /// Set the reflection weight.
    pub fn with_reflect(mut self, reflect: f32) -> Self {
        self.reflect = reflect;
        self
    }

    /// Set the diffuse weight.
    pub fn with_diffuse(mut self, diffuse: f32) -> Self {
        self.diffuse = diffuse;
        self
    }

    /// Set the specular weight.
    pub fn with_specular(mut self, specular: f32) -> Self {
        self.specular = specular;
        self
    }
}
