//! Recursive Whitted-style shading.
//!
//! Color at a hit point is the sum of, per light:
//! - a diffuse N·L term
//! - a Phong highlight with a fixed exponent
//!
//! both zeroed when the light is blocked, plus a mirror reflection traced
//! recursively until the depth cap is reached.

use crate::{Color, Hit, Intersect, Ray, Scene};
use prism_math::{reflect, Vec3};

/// Phong exponent of the specular highlight.
pub const SPECULAR_EXPONENT: f32 = 20.0;

/// Offset of shadow ray origins along the light direction.
pub const SHADOW_EPSILON: f32 = 0.01;

/// Default reflection depth cap.
pub const DEFAULT_MAX_DEPTH: u32 = 3;

/// Shades rays against a borrowed, read-only scene.
#[derive(Debug, Clone, Copy)]
pub struct Tracer<'a> {
    scene: &'a Scene,
    max_depth: u32,
    background: Color,
}

impl<'a> Tracer<'a> {
    /// Create a tracer with the default depth cap and a black background.
    pub fn new(scene: &'a Scene) -> Self {
        Self {
            scene,
            max_depth: DEFAULT_MAX_DEPTH,
            background: Color::ZERO,
        }
    }

    /// Set the reflection depth cap.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the color returned for rays that hit nothing.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Compute the color seen along a ray.
    ///
    /// `depth` is the number of reflection bounces already taken; primary
    /// rays start at 0. The result is linear and unclamped.
    pub fn shade(&self, ray: &Ray, depth: u32) -> Color {
        let Some(hit) = self.scene.find_nearest(ray) else {
            return self.background;
        };

        let primitive = hit.primitive;
        if primitive.is_light {
            return primitive.material.color;
        }

        let point = ray.at(hit.distance);
        let normal = primitive.normal_at(point);

        let mut color = self.direct_lighting(ray, &hit, point, normal);

        let material = &primitive.material;
        if material.reflect > 0.0 && depth < self.max_depth {
            let reflected = Ray::new(point, reflect(ray.direction(), normal));
            let reflected_color = self.shade(&reflected, depth + 1);
            color += reflected_color * material.color * material.reflect;
        }

        color
    }

    /// Sum of diffuse and specular terms from every light.
    ///
    /// N·L is deliberately not clamped, so lights behind the surface subtract
    /// color.
    fn direct_lighting(&self, ray: &Ray, hit: &Hit<'_>, point: Vec3, normal: Vec3) -> Color {
        let material = &hit.primitive.material;
        let mut color = Color::ZERO;

        for light in self.scene.lights() {
            let Some(light_pos) = light.light_position() else {
                continue;
            };

            let to_light = (light_pos - point).normalize();
            let shadow_ray = Ray::new(point + to_light * SHADOW_EPSILON, to_light);
            let shade = if self.scene.is_occluded(&shadow_ray) {
                0.0
            } else {
                1.0
            };

            let light_color = light.material.color;

            if material.diffuse > 0.0 {
                let diffuse = normal.dot(to_light) * material.diffuse;
                color += light_color * material.color * diffuse * shade;
            }

            if material.specular > 0.0 {
                let r = reflect(to_light, normal);
                let dot = ray.direction().dot(r);
                if dot > 0.0 {
                    color += light_color
                        * material.color
                        * dot.powf(SPECULAR_EXPONENT)
                        * material.specular
                        * shade;
                }
            }
        }

        color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, Primitive};

    fn light(pos: Vec3, color: Color) -> Primitive {
        Primitive::sphere(pos, 0.1)
            .with_material(Material::new(color))
            .with_name("light")
            .as_light()
    }

    // Floor at y = 0 seen from (3, 1, 0), hit exactly at the origin.
    fn floor_ray() -> Ray {
        Ray::through(Vec3::new(3.0, 1.0, 0.0), Vec3::ZERO)
    }

    fn matte_floor() -> Primitive {
        Primitive::plane(Vec3::Y, 0.0)
            .with_material(Material::new(Color::ONE).with_specular(0.0))
    }

    #[test]
    fn test_miss_returns_background() {
        let scene = Scene::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        assert_eq!(Tracer::new(&scene).shade(&ray, 0), Color::ZERO);

        let blue = Color::new(0.1, 0.2, 0.9);
        let tracer = Tracer::new(&scene).with_background(blue);
        assert_eq!(tracer.shade(&ray, 0), blue);
    }

    #[test]
    fn test_light_is_unshaded() {
        let color = Color::new(0.7, 0.7, 0.9);
        let scene: Scene = [
            light(Vec3::new(0.0, 0.0, -5.0), color),
            light(Vec3::new(0.0, 3.0, -5.0), Color::ONE),
            Primitive::plane(Vec3::Y, -4.0).with_material(Material::mirror()),
        ]
        .into_iter()
        .collect();

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(Tracer::new(&scene).shade(&ray, 0), color);
    }

    #[test]
    fn test_diffuse_term() {
        let light_color = Color::new(0.5, 0.25, 1.0);
        let scene: Scene = [matte_floor(), light(Vec3::new(0.0, 5.0, 0.0), light_color)]
            .into_iter()
            .collect();

        let color = Tracer::new(&scene).shade(&floor_ray(), 0);

        // Light straight above: N·L = 1
        assert!((color - light_color).length() < 1e-4);
    }

    #[test]
    fn test_occluded_point_is_black() {
        let mut scene: Scene = [
            Primitive::plane(Vec3::Y, 0.0),
            light(Vec3::new(0.0, 5.0, 0.0), Color::ONE),
        ]
        .into_iter()
        .collect();

        let lit = Tracer::new(&scene).shade(&floor_ray(), 0);
        assert!(lit.length() > 0.5);

        // Blocker between the floor point and the light
        scene.push(Primitive::sphere(Vec3::new(0.0, 2.5, 0.0), 1.0));
        let shadowed = Tracer::new(&scene).shade(&floor_ray(), 0);
        assert!(shadowed.length() < 1e-6, "got {shadowed:?}");
    }

    #[test]
    fn test_back_facing_light_subtracts() {
        // Floor normal points down, light is above: N·L = -1
        let scene: Scene = [
            Primitive::plane(-Vec3::Y, 0.0)
                .with_material(Material::new(Color::ONE).with_specular(0.0)),
            light(Vec3::new(0.0, 5.0, 0.0), Color::ONE),
        ]
        .into_iter()
        .collect();

        let color = Tracer::new(&scene).shade(&floor_ray(), 0);
        assert!((color - Color::splat(-1.0)).length() < 1e-4, "got {color:?}");
    }

    #[test]
    fn test_specular_highlight() {
        // Mirror-aligned view: the light reflects straight into the viewer
        let scene: Scene = [
            Primitive::plane(Vec3::Y, 0.0)
                .with_material(Material::new(Color::ONE).with_diffuse(0.0)),
            light(Vec3::new(-3.0, 1.0, 0.0), Color::ONE),
        ]
        .into_iter()
        .collect();

        let color = Tracer::new(&scene).shade(&floor_ray(), 0);

        // R = reflect(L) equals the view direction, so dot = 1
        assert!((color - Color::ONE).length() < 1e-3, "got {color:?}");
    }

    #[test]
    fn test_occluded_highlight_is_black() {
        let mut scene: Scene = [
            Primitive::plane(Vec3::Y, 0.0)
                .with_material(Material::new(Color::ONE).with_diffuse(0.0)),
            light(Vec3::new(-3.0, 1.0, 0.0), Color::ONE),
        ]
        .into_iter()
        .collect();

        let lit = Tracer::new(&scene).shade(&floor_ray(), 0);
        assert!((lit - Color::ONE).length() < 1e-3, "got {lit:?}");

        // Halfway along the shadow ray, clear of the view ray
        scene.push(Primitive::sphere(Vec3::new(-1.5, 0.5, 0.0), 0.2));
        let shadowed = Tracer::new(&scene).shade(&floor_ray(), 0);
        assert_eq!(shadowed, Color::ZERO);
    }

    #[test]
    fn test_reflection_picks_up_light_color() {
        let light_color = Color::new(0.2, 0.9, 0.4);
        let scene: Scene = [
            Primitive::sphere(Vec3::ZERO, 1.0)
                .with_material(Material::mirror().with_specular(0.0)),
            // Behind the eye, only reachable by the reflected ray
            light(Vec3::new(0.0, 0.0, 10.0), light_color),
        ]
        .into_iter()
        .collect();

        // Head-on hit at (0, 0, 1) bounces straight back to the light
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let color = Tracer::new(&scene).shade(&ray, 0);
        assert!((color - light_color).length() < 1e-5, "got {color:?}");

        // At the depth cap the reflection is skipped entirely
        let capped = Tracer::new(&scene).shade(&ray, DEFAULT_MAX_DEPTH);
        assert!(capped.length() < 1e-6, "got {capped:?}");
    }
}
