use crate::Vec3;

/// A half-line in 3D space with an origin and a unit direction.
///
/// Rays are created per camera pixel and per shadow/reflection bounce and are
/// never mutated afterwards. The direction is expected to be unit length;
/// callers normalize camera rays explicitly, and secondary rays are built from
/// vectors that are already normalized.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray. `direction` must already be normalized.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray from `origin` through `target`, normalizing the direction.
    #[inline]
    pub fn through(origin: Vec3, target: Vec3) -> Self {
        Self::new(origin, (target - origin).normalize())
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at distance t.
    ///
    /// Returns: origin + direction * t
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Reflect `v` about the normal `n`.
///
/// Both vectors are expected to be unit length; the result is then unit length
/// as well.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - n * 2.0 * v.dot(n)
}
