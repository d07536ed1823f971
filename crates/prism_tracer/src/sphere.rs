//! Sphere primitive for ray tracing.

use crate::{Intersect, Ray};
use prism_math::Vec3;

/// A sphere given by center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius_sq: f32,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius_sq: radius * radius,
        }
    }

    /// Get the sphere center.
    pub fn center(&self) -> Vec3 {
        self.center
    }
}

impl Intersect for Sphere {
    /// Geometric ray-sphere test.
    ///
    /// Spheres whose center lies behind the ray origin are never hit, even when
    /// the origin is inside the sphere. For an origin inside the sphere with the
    /// center ahead, the near root is returned as is (zero or negative).
    fn raycast(&self, ray: &Ray) -> Option<f32> {
        let l = self.center - ray.origin();
        let dist_to_center = l.dot(ray.direction());
        if dist_to_center < 0.0 {
            return None;
        }

        // Squared distance from the center to the ray line
        let perp_sq = l.dot(l) - dist_to_center * dist_to_center;
        if perp_sq > self.radius_sq {
            return None;
        }

        Some(dist_to_center - (self.radius_sq - perp_sq).sqrt())
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize()
    }
}
