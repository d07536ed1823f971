//! Wavefront OBJ loading.
//!
//! Parsing is delegated to `tobj`. Every model in the file is merged into a
//! single [`Mesh`]; polygons are triangulated (a quad becomes two triangles
//! sharing its first vertex) and attributes are re-indexed so positions, UVs
//! and normals are parallel arrays.
//!
//! Unlike a "best effort" loader, failures are surfaced: an unreadable file, a
//! malformed file, or a file without any triangles is an error rather than an
//! empty mesh.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use prism_math::{Vec2, Vec3};
use thiserror::Error;

use crate::mesh::Mesh;

/// Errors that can occur during OBJ loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("OBJ parse error: {0}")]
    Obj(#[from] tobj::LoadError),

    #[error("No geometry found in OBJ file")]
    NoGeometry,

    #[error("Triangle index {index} out of range for {vertex_count} vertices")]
    InvalidIndex { index: u32, vertex_count: usize },
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        single_index: true,
        triangulate: true,
        ..Default::default()
    }
}

/// Load an OBJ file from disk.
///
/// Material libraries referenced by the file are ignored.
///
/// # Example
///
/// ```ignore
/// use prism_core::load_obj;
///
/// let mesh = load_obj("models/teapot.obj")?;
/// println!("Loaded {} triangles", mesh.triangle_count());
/// ```
pub fn load_obj<P: AsRef<Path>>(path: P) -> LoadResult<Mesh> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let mesh = load_obj_buf(&mut reader)?;

    log::info!(
        "Loaded {} triangles ({} vertices) from {}",
        mesh.triangle_count(),
        mesh.vertex_count(),
        path.display()
    );

    Ok(mesh)
}

/// Load OBJ data from an in-memory string.
pub fn load_obj_from_str(source: &str) -> LoadResult<Mesh> {
    let mut reader = source.as_bytes();
    load_obj_buf(&mut reader)
}

fn load_obj_buf<R: BufRead>(reader: &mut R) -> LoadResult<Mesh> {
    let (models, _materials) = tobj::load_obj_buf(reader, &load_options(), |_| {
        Err(tobj::LoadError::OpenFileFailed)
    })?;

    let model_count = models.len();
    let mut mesh = Mesh::default();
    for model in models {
        log::debug!(
            "OBJ model '{}': {} indices",
            model.name,
            model.mesh.indices.len()
        );
        mesh.append(convert_mesh(model.mesh));
    }

    if mesh.is_empty() {
        return Err(LoadError::NoGeometry);
    }

    if let Some(index) = mesh.first_invalid_index() {
        return Err(LoadError::InvalidIndex {
            index,
            vertex_count: mesh.vertex_count(),
        });
    }

    if mesh.indices.len() % 3 != 0 {
        log::warn!(
            "Index count {} is not a multiple of 3, trailing indices ignored",
            mesh.indices.len()
        );
    }

    log::debug!("Merged {} OBJ models", model_count);

    Ok(mesh)
}

/// Convert a `tobj` mesh into flat Vec3/Vec2 attribute arrays.
fn convert_mesh(source: tobj::Mesh) -> Mesh {
    let positions: Vec<Vec3> = source
        .positions
        .chunks_exact(3)
        .map(|p| Vec3::new(p[0], p[1], p[2]))
        .collect();

    let mut normals: Vec<Vec3> = source
        .normals
        .chunks_exact(3)
        .map(|n| Vec3::new(n[0], n[1], n[2]))
        .collect();

    let mut uvs: Vec<Vec2> = source
        .texcoords
        .chunks_exact(2)
        .map(|t| Vec2::new(t[0], t[1]))
        .collect();

    // Attributes are only meaningful when they line up with positions.
    if normals.len() != positions.len() {
        if !normals.is_empty() {
            log::warn!(
                "Normal count ({}) doesn't match vertex count ({}), dropping normals",
                normals.len(),
                positions.len()
            );
        }
        normals.clear();
    }
    if uvs.len() != positions.len() {
        if !uvs.is_empty() {
            log::warn!(
                "UV count ({}) doesn't match vertex count ({}), dropping UVs",
                uvs.len(),
                positions.len()
            );
        }
        uvs.clear();
    }

    Mesh::new(positions, source.indices)
        .with_normals(normals)
        .with_uvs(uvs)
}
