//! Mesh geometry representation.
//!
//! A mesh is the hand-off format between file loaders and the tracer's scene
//! builder: parallel arrays of per-vertex attributes plus a flat triangle index
//! list where every three indices form one triangle.

use prism_math::{Vec2, Vec3};

/// A triangle mesh stored as parallel attribute arrays.
///
/// `uvs` and `normals` are either empty or have one entry per position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions (one Vec3 per vertex)
    pub positions: Vec<Vec3>,

    /// Texture coordinates (empty if the source had none)
    pub uvs: Vec<Vec2>,

    /// Vertex normals (empty if the source had none)
    pub normals: Vec<Vec3>,

    /// Triangle indices (every 3 indices form a triangle)
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a new mesh from positions and indices.
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self {
            positions,
            indices,
            ..Default::default()
        }
    }

    /// Attach texture coordinates.
    pub fn with_uvs(mut self, uvs: Vec<Vec2>) -> Self {
        self.uvs = uvs;
        self
    }

    /// Attach vertex normals.
    pub fn with_normals(mut self, normals: Vec<Vec3>) -> Self {
        self.normals = normals;
        self
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// True if the mesh has no triangles to render.
    pub fn is_empty(&self) -> bool {
        self.triangle_count() == 0
    }

    /// Check if the mesh has UV coordinates.
    pub fn has_uvs(&self) -> bool {
        !self.uvs.is_empty()
    }

    /// Check if the mesh has normals.
    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty()
    }

    /// Return the first index that does not refer to an existing vertex.
    pub fn first_invalid_index(&self) -> Option<u32> {
        let count = self.positions.len();
        self.indices.iter().copied().find(|&i| i as usize >= count)
    }

    /// Append another mesh, offsetting its indices past this mesh's vertices.
    ///
    /// Optional attributes survive only if both meshes carry them.
    pub fn append(&mut self, other: Mesh) {
        let offset = self.positions.len() as u32;
        let (keep_uvs, keep_normals) = if offset == 0 {
            (other.has_uvs(), other.has_normals())
        } else {
            (
                self.has_uvs() && other.has_uvs(),
                self.has_normals() && other.has_normals(),
            )
        };

        self.positions.extend(other.positions);
        self.indices.extend(other.indices.into_iter().map(|i| i + offset));

        if keep_uvs {
            self.uvs.extend(other.uvs);
        } else {
            self.uvs.clear();
        }
        if keep_normals {
            self.normals.extend(other.normals);
        } else {
            self.normals.clear();
        }
    }

    /// Iterate triangle corner positions, one `[v0, v1, v2]` per index triple.
    ///
    /// A trailing partial triple and triples with out-of-range indices are
    /// skipped.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).filter_map(move |face| {
            let i0 = face[0] as usize;
            let i1 = face[1] as usize;
            let i2 = face[2] as usize;

            if i0 >= self.positions.len() || i1 >= self.positions.len() || i2 >= self.positions.len()
            {
                log::warn!(
                    "Invalid triangle indices: [{}, {}, {}], vertex count: {}",
                    i0,
                    i1,
                    i2,
                    self.positions.len()
                );
                return None;
            }

            Some([self.positions[i0], self.positions[i1], self.positions[i2]])
        })
    }
}
