//! Fixed pinhole camera for ray generation.

use crate::Ray;
use prism_core::CameraSettings;
use prism_math::{Vec2, Vec3};

/// Camera that maps pixel coordinates linearly onto an axis-aligned image
/// plane and shoots normalized rays from a fixed eye point through it.
///
/// There is no field of view or view transform: pixel (x, y) lands on
/// `(x * pixel_scale + plane_offset.x, y * pixel_scale + plane_offset.y, plane_z)`.
/// Larger `y` means higher up in the world, so row 0 is the bottom of the
/// image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    eye: Vec3,
    pixel_scale: f32,
    plane_offset: Vec2,
    plane_z: f32,
}

impl Camera {
    /// Create a camera from its settings.
    pub fn new(settings: &CameraSettings) -> Self {
        Self {
            eye: settings.eye,
            pixel_scale: settings.pixel_scale,
            plane_offset: settings.plane_offset,
            plane_z: settings.plane_z,
        }
    }

    /// Get the eye position.
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Image-plane point for pixel (x, y).
    pub fn plane_point(&self, x: u32, y: u32) -> Vec3 {
        Vec3::new(
            x as f32 * self.pixel_scale + self.plane_offset.x,
            y as f32 * self.pixel_scale + self.plane_offset.y,
            self.plane_z,
        )
    }

    /// Generate the primary ray for pixel (x, y).
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        Ray::through(self.eye, self.plane_point(x, y))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(&CameraSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mapping() {
        let camera = Camera::default();

        assert_eq!(camera.eye(), Vec3::new(0.0, 0.0, -5.0));
        assert_eq!(camera.plane_point(0, 0), Vec3::new(-4.0, -4.0, 0.0));
        assert!((camera.plane_point(400, 400) - Vec3::ZERO).length() < 1e-5);
    }

    #[test]
    fn test_ray_direction_is_normalized() {
        let camera = Camera::default();

        for (x, y) in [(0, 0), (400, 300), (799, 599)] {
            let ray = camera.get_ray(x, y);
            assert!((ray.direction().length() - 1.0).abs() < 1e-5);
            assert_eq!(ray.origin(), camera.eye());
            assert!(ray.direction().z > 0.0);
        }
    }

    #[test]
    fn test_rows_go_up() {
        let camera = Camera::default();

        let low = camera.get_ray(400, 0);
        let high = camera.get_ray(400, 599);
        assert!(low.direction().y < high.direction().y);
    }

    #[test]
    fn test_custom_settings() {
        let settings = CameraSettings {
            eye: Vec3::new(0.0, 1.0, -2.0),
            pixel_scale: 0.5,
            plane_offset: Vec2::new(-1.0, 0.0),
            plane_z: 1.0,
        };
        let camera = Camera::new(&settings);

        assert_eq!(camera.plane_point(2, 4), Vec3::new(0.0, 2.0, 1.0));
    }
}
