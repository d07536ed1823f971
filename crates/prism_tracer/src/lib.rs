//! Prism Tracer - recursive CPU ray tracing.
//!
//! A Whitted-style ray tracer: camera rays are intersected against a flat list
//! of primitives and shaded with diffuse and Phong terms per light, hard
//! shadows, and mirror reflections up to a fixed depth.

mod camera;
mod framebuffer;
mod material;
mod plane;
mod primitive;
mod renderer;
mod scene;
mod shading;
mod sphere;
mod triangle;

pub use camera::Camera;
pub use framebuffer::{clamp_01, color_to_rgb8, Framebuffer, Rgb8};
pub use material::{Color, Material};
pub use plane::Plane;
pub use primitive::{Intersect, Primitive, Shape};
pub use renderer::{render, render_pixel};
pub use scene::{Hit, Scene};
pub use shading::{Tracer, DEFAULT_MAX_DEPTH, SHADOW_EPSILON, SPECULAR_EXPONENT};
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export Vec3 and Ray from prism_math
pub use prism_math::{Ray, Vec3};
