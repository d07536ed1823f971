//! Prism Core - renderer-agnostic scene data.
//!
//! This crate provides:
//!
//! - **Mesh geometry**: `Mesh`, parallel vertex/UV/normal/index arrays
//! - **OBJ support**: loading Wavefront OBJ files into a `Mesh`
//! - **Render settings**: image size, recursion depth and camera mapping,
//!   loadable from JSON
//!
//! # Example
//!
//! ```ignore
//! use prism_core::{load_obj, RenderSettings};
//!
//! let settings = RenderSettings::load("render.json")?;
//! let mesh = load_obj("bunny.obj")?;
//! println!("{}x{}, {} triangles",
//!     settings.width,
//!     settings.height,
//!     mesh.triangle_count());
//! ```

pub mod mesh;
pub mod obj;
pub mod settings;

// Re-export commonly used types
pub use mesh::Mesh;
pub use obj::{load_obj, load_obj_from_str, LoadError, LoadResult};
pub use settings::{CameraSettings, RenderSettings, SettingsError};
