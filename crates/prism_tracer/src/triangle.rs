//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use crate::{Intersect, Ray};
use prism_math::Vec3;

/// Determinants smaller than this are treated as parallel rays.
const DET_EPSILON: f32 = 1e-4;

/// Hits closer than this are discarded to avoid self-intersection.
const HIT_EPSILON: f32 = 1e-4;

/// A flat-shaded triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First vertex
    v0: Vec3,
    /// Edges v1 - v0 and v2 - v0
    edge1: Vec3,
    edge2: Vec3,
    /// Pre-computed face normal (unit length)
    normal: Vec3,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// The face normal follows the winding order: `(v1 - v0) × (v2 - v0)`.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;

        Self {
            v0,
            edge1,
            edge2,
            normal: edge1.cross(edge2).normalize(),
        }
    }

    /// Get the three vertices.
    pub fn vertices(&self) -> [Vec3; 3] {
        [self.v0, self.v0 + self.edge1, self.v0 + self.edge2]
    }

    /// Get the face normal.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Get the centroid.
    pub fn centroid(&self) -> Vec3 {
        self.v0 + (self.edge1 + self.edge2) / 3.0
    }

    /// True if the triangle has zero area (its normal is undefined).
    pub fn is_degenerate(&self) -> bool {
        !self.normal.is_finite()
    }
}

impl Intersect for Triangle {
    /// Möller-Trumbore ray-triangle intersection algorithm.
    fn raycast(&self, ray: &Ray) -> Option<f32> {
        let p = ray.direction().cross(self.edge2);
        let det = self.edge1.dot(p);

        // Ray is parallel to triangle
        if det.abs() < DET_EPSILON {
            return None;
        }

        let inv_det = 1.0 / det;
        let s = ray.origin() - self.v0;
        let u = s.dot(p) * inv_det;

        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(self.edge1);
        let v = ray.direction().dot(q) * inv_det;

        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = self.edge2.dot(q) * inv_det;
        (t > HIT_EPSILON).then_some(t)
    }

    fn normal_at(&self, _point: Vec3) -> Vec3 {
        self.normal
    }
}
