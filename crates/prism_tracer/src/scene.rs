//! Scene container and ray-cast queries.
//!
//! The scene owns its primitives in insertion order. Queries are a linear scan
//! with no acceleration structure; insertion order only matters for exact
//! distance ties, where the earlier primitive wins.

use crate::{Intersect, Material, Primitive, Ray, Shape, Triangle};
use prism_core::Mesh;

/// Result of a nearest-intersection query.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// The primitive that was hit
    pub primitive: &'a Primitive,
    /// Index of the primitive in the scene
    pub index: usize,
    /// Distance along the ray
    pub distance: f32,
}

/// An ordered collection of primitives, built once and then only queried.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    primitives: Vec<Primitive>,
    /// Indices of light-flagged primitives, in insertion order
    lights: Vec<usize>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a primitive and return its index.
    pub fn push(&mut self, primitive: Primitive) -> usize {
        let index = self.primitives.len();

        if primitive.is_light {
            if primitive.light_position().is_none() {
                log::warn!(
                    "Light '{}' is a plane and has no position; it will not illuminate the scene",
                    primitive.display_name()
                );
            }
            self.lights.push(index);
        }

        self.primitives.push(primitive);
        index
    }

    /// Add every triangle of a mesh with a shared material.
    ///
    /// Consecutive index triples become triangles; zero-area triangles are
    /// skipped since no ray can hit them. Returns the number of triangles added.
    pub fn add_mesh(&mut self, mesh: &Mesh, material: Material) -> usize {
        let mut added = 0;
        let mut degenerate = 0;

        for [v0, v1, v2] in mesh.triangles() {
            let triangle = Triangle::new(v0, v1, v2);
            if triangle.is_degenerate() {
                degenerate += 1;
                continue;
            }
            self.push(Primitive::new(triangle).with_material(material));
            added += 1;
        }

        if degenerate > 0 {
            log::warn!("Skipped {} degenerate mesh triangles", degenerate);
        }
        log::debug!("Added {} mesh triangles", added);

        added
    }

    /// Get the number of primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Get a primitive by index.
    pub fn get(&self, index: usize) -> Option<&Primitive> {
        self.primitives.get(index)
    }

    /// All primitives in insertion order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Light-flagged primitives in insertion order.
    pub fn lights(&self) -> impl Iterator<Item = &Primitive> + '_ {
        self.lights.iter().map(move |&i| &self.primitives[i])
    }

    /// Get the number of lights.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Find the closest primitive along a ray.
    ///
    /// Uses a strict less-than comparison, so among primitives at exactly the
    /// same distance the first one inserted is reported.
    pub fn find_nearest(&self, ray: &Ray) -> Option<Hit<'_>> {
        let mut nearest: Option<Hit<'_>> = None;
        let mut closest_so_far = f32::MAX;

        for (index, primitive) in self.primitives.iter().enumerate() {
            if let Some(distance) = primitive.raycast(ray) {
                if distance < closest_so_far {
                    closest_so_far = distance;
                    nearest = Some(Hit {
                        primitive,
                        index,
                        distance,
                    });
                }
            }
        }

        nearest
    }

    /// True if any non-light primitive reports a hit along the ray.
    ///
    /// Any reported hit counts, including hits beyond the light the ray is
    /// aimed at.
    pub fn is_occluded(&self, ray: &Ray) -> bool {
        self.primitives
            .iter()
            .filter(|p| !p.is_light)
            .any(|p| p.raycast(ray).is_some())
    }

    /// Count primitives of each shape, as (spheres, planes, triangles).
    pub fn shape_counts(&self) -> (usize, usize, usize) {
        self.primitives
            .iter()
            .fold((0, 0, 0), |(s, p, t), prim| match prim.shape {
                Shape::Sphere(_) => (s + 1, p, t),
                Shape::Plane(_) => (s, p + 1, t),
                Shape::Triangle(_) => (s, p, t + 1),
            })
    }
}

impl FromIterator<Primitive> for Scene {
    fn from_iter<I: IntoIterator<Item = Primitive>>(iter: I) -> Self {
        let mut scene = Scene::new();
        scene.extend(iter);
        scene
    }
}

impl Extend<Primitive> for Scene {
    fn extend<I: IntoIterator<Item = Primitive>>(&mut self, iter: I) {
        for primitive in iter {
            self.push(primitive);
        }
    }
}
