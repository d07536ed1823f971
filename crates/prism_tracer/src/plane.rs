//! Infinite plane primitive.

use crate::{Intersect, Ray};
use prism_math::Vec3;

/// An infinite plane `normal · p = offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal
    normal: Vec3,
    /// Signed distance from the origin along the normal
    offset: f32,
}

impl Plane {
    /// Create a new plane. The normal is normalized here.
    pub fn new(normal: Vec3, offset: f32) -> Self {
        Self {
            normal: normal.normalize(),
            offset,
        }
    }

    /// Get the plane normal.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Intersect for Plane {
    fn raycast(&self, ray: &Ray) -> Option<f32> {
        let d_dot_n = self.normal.dot(ray.direction());

        // Ray is parallel to the plane
        if d_dot_n == 0.0 {
            return None;
        }

        let t = (self.offset - self.normal.dot(ray.origin())) / d_dot_n;
        (t > 0.0).then_some(t)
    }

    fn normal_at(&self, _point: Vec3) -> Vec3 {
        self.normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> Plane {
        Plane::new(Vec3::Y, -4.0)
    }

    #[test]
    fn test_plane_hit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0));

        let t = floor().raycast(&ray).unwrap();
        assert!((t - 4.0).abs() < 1e-6);
        assert!((ray.at(t).y - (-4.0)).abs() < 1e-6);
    }

    #[test]
    fn test_plane_hit_from_below() {
        // The plane is two-sided for intersection purposes
        let ray = Ray::new(Vec3::new(0.0, -10.0, 0.0), Vec3::Y);

        let t = floor().raycast(&ray).unwrap();
        assert!((t - 6.0).abs() < 1e-6);
    }

    #[test]
    fn test_plane_parallel() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert_eq!(floor().raycast(&ray), None);
    }

    #[test]
    fn test_plane_behind() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert_eq!(floor().raycast(&ray), None);
    }

    #[test]
    fn test_plane_normal_is_constant() {
        let plane = Plane::new(Vec3::new(0.0, 2.0, 0.0), 1.0);

        assert_eq!(plane.normal(), Vec3::Y);
        assert_eq!(plane.normal_at(Vec3::new(5.0, 1.0, -3.0)), Vec3::Y);
    }
}
