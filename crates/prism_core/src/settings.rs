//! Render settings.
//!
//! Everything the image driver needs besides the scene: output resolution,
//! reflection depth cap, background color and the fixed pinhole mapping from
//! pixel coordinates to the image plane. Settings can be read from JSON; any
//! field left out keeps its default.

use std::path::Path;

use prism_math::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while reading settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid settings: {0}")]
    Invalid(String),
}

/// Pixel-to-image-plane mapping for the camera.
///
/// Pixel (x, y) maps to the plane point
/// `(x * pixel_scale + plane_offset.x, y * pixel_scale + plane_offset.y, plane_z)`
/// and the camera ray runs from `eye` through that point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Eye position
    pub eye: Vec3,
    /// World units per pixel on the image plane
    pub pixel_scale: f32,
    /// Image-plane coordinates of pixel (0, 0)
    pub plane_offset: Vec2,
    /// Z coordinate of the image plane
    pub plane_z: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, -5.0),
            pixel_scale: 0.01,
            plane_offset: Vec2::new(-4.0, -4.0),
            plane_z: 0.0,
        }
    }
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Maximum number of reflection bounces
    pub max_depth: u32,
    /// Color returned when a ray hits nothing
    pub background: Vec3,
    /// Camera mapping
    pub camera: CameraSettings,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            max_depth: 3,
            background: Vec3::ZERO,
            camera: CameraSettings::default(),
        }
    }
}

impl RenderSettings {
    /// Parse settings from a JSON string and validate them.
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: RenderSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        log::info!(
            "Loaded settings from {}: {}x{}, max depth {}",
            path.display(),
            settings.width,
            settings.height,
            settings.max_depth
        );
        Ok(settings)
    }

    /// Reject settings the driver cannot render.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.width == 0 || self.height == 0 {
            return Err(SettingsError::Invalid(format!(
                "image size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.camera.pixel_scale.is_finite() && self.camera.pixel_scale > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "pixel_scale must be positive, got {}",
                self.camera.pixel_scale
            )));
        }
        Ok(())
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the reflection depth cap.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
