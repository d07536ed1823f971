//! Intersect trait and the Primitive type stored in a scene.

use crate::{Material, Plane, Ray, Sphere, Triangle};
use prism_math::Vec3;

/// Trait for shapes that can be hit by rays.
pub trait Intersect {
    /// Distance along the ray to the intersection, or `None` for a miss.
    fn raycast(&self, ray: &Ray) -> Option<f32>;

    /// Unit surface normal at a point on the shape.
    fn normal_at(&self, point: Vec3) -> Vec3;
}

/// The geometric part of a primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
    Triangle(Triangle),
}

impl Intersect for Shape {
    #[inline]
    fn raycast(&self, ray: &Ray) -> Option<f32> {
        match self {
            Shape::Sphere(s) => s.raycast(ray),
            Shape::Plane(p) => p.raycast(ray),
            Shape::Triangle(t) => t.raycast(ray),
        }
    }

    #[inline]
    fn normal_at(&self, point: Vec3) -> Vec3 {
        match self {
            Shape::Sphere(s) => s.normal_at(point),
            Shape::Plane(p) => p.normal_at(point),
            Shape::Triangle(t) => t.normal_at(point),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<Plane> for Shape {
    fn from(plane: Plane) -> Self {
        Shape::Plane(plane)
    }
}

impl From<Triangle> for Shape {
    fn from(triangle: Triangle) -> Self {
        Shape::Triangle(triangle)
    }
}

/// A renderable shape with its material, optional name and light flag.
///
/// A light-flagged primitive illuminates the others and is itself drawn with
/// its unshaded material color.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub shape: Shape,
    pub material: Material,
    pub name: Option<String>,
    pub is_light: bool,
}

impl Primitive {
    /// Create a primitive with the default material.
    pub fn new(shape: impl Into<Shape>) -> Self {
        Self {
            shape: shape.into(),
            material: Material::default(),
            name: None,
            is_light: false,
        }
    }

    /// Create a sphere primitive.
    pub fn sphere(center: Vec3, radius: f32) -> Self {
        Self::new(Sphere::new(center, radius))
    }

    /// Create a plane primitive `normal · p = offset`.
    pub fn plane(normal: Vec3, offset: f32) -> Self {
        Self::new(Plane::new(normal, offset))
    }

    /// Create a triangle primitive.
    pub fn triangle(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        Self::new(Triangle::new(v0, v1, v2))
    }

    /// Set the material.
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Flag the primitive as a light source.
    pub fn as_light(mut self) -> Self {
        self.is_light = true;
        self
    }

    /// Display name, or a placeholder for unnamed primitives.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }

    /// Point that shadow rays aim at when this primitive acts as a light.
    ///
    /// Spheres emit from their center and triangles from their centroid.
    /// Planes have no position and cast no light.
    pub fn light_position(&self) -> Option<Vec3> {
        match &self.shape {
            Shape::Sphere(s) => Some(s.center()),
            Shape::Triangle(t) => Some(t.centroid()),
            Shape::Plane(_) => None,
        }
    }
}

impl Intersect for Primitive {
    #[inline]
    fn raycast(&self, ray: &Ray) -> Option<f32> {
        self.shape.raycast(ray)
    }

    #[inline]
    fn normal_at(&self, point: Vec3) -> Vec3 {
        self.shape.normal_at(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn test_shape_dispatch() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let sphere: Shape = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0).into();
        let plane: Shape = Plane::new(Vec3::Z, -3.0).into();

        assert!((sphere.raycast(&ray).unwrap() - 4.0).abs() < 1e-5);
        assert!((plane.raycast(&ray).unwrap() - 3.0).abs() < 1e-5);
        assert_eq!(plane.normal_at(Vec3::ZERO), Vec3::Z);
    }

    #[test]
    fn test_primitive_builders() {
        let p = Primitive::sphere(Vec3::new(2.0, 5.0, 1.0), 0.1)
            .with_material(Material::new(Color::new(0.7, 0.7, 0.9)))
            .with_name("key light")
            .as_light();

        assert!(p.is_light);
        assert_eq!(p.display_name(), "key light");
        assert_eq!(p.material.color, Color::new(0.7, 0.7, 0.9));
        assert_eq!(p.light_position(), Some(Vec3::new(2.0, 5.0, 1.0)));
    }

    #[test]
    fn test_primitive_defaults() {
        let p = Primitive::plane(Vec3::Y, -4.0);

        assert!(!p.is_light);
        assert_eq!(p.name, None);
        assert_eq!(p.display_name(), "<unnamed>");
        assert_eq!(p.material, Material::default());
        assert_eq!(p.light_position(), None);
    }

    #[test]
    fn test_triangle_light_position_is_centroid() {
        let p = Primitive::triangle(
            Vec3::ZERO,
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(0.0, 3.0, 0.0),
        );

        assert_eq!(p.light_position(), Some(Vec3::new(1.0, 1.0, 0.0)));
    }
}
