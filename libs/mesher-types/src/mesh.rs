//! # Mesh Record
//!
//! Triangulated surface described by flat vertex/index/normal/UV buffers.
//! The field layout mirrors the JSON wire shape exactly; geometry helpers
//! convert into `glam` vectors at the point of use.

use crate::metadata::MeshMetadata;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A triangle mesh value.
///
/// Immutable once produced by a pipeline stage: the validator never repairs
/// a mesh, and every optimizer stage returns a freshly constructed value
/// instead of mutating its input.
///
/// # Example
///
/// ```rust
/// use mesher_types::{Mesh, MeshMetadata, Provenance, ResolvedOptions};
///
/// let mesh = Mesh {
///     id: "mesh-1".into(),
///     vertices: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
///     indices: vec![0, 1, 2],
///     normals: vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
///     uvs: vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
///     material_id: None,
///     metadata: MeshMetadata::new(
///         Provenance::Text { description: "triangle".into() },
///         0.0,
///         ResolvedOptions::default(),
///     ),
/// };
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mesh {
    /// Opaque identifier, unique per generation call.
    pub id: String,
    /// Vertex positions, flat x,y,z triples.
    pub vertices: Vec<f64>,
    /// Triangle list, three indices per face.
    pub indices: Vec<u32>,
    /// Vertex-averaged normals, flat x,y,z triples.
    pub normals: Vec<f64>,
    /// Texture coordinates, flat u,v pairs.
    pub uvs: Vec<f64>,
    /// Optional material reference, not modeled further here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_id: Option<String>,
    /// Typed provenance and processing metadata.
    pub metadata: MeshMetadata,
}

impl Mesh {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the vertex at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= vertex_count()`. Callers working with
    /// unvalidated meshes must bounds-check indices first.
    #[inline]
    pub fn vertex(&self, index: usize) -> DVec3 {
        DVec3::new(
            self.vertices[index * 3],
            self.vertices[index * 3 + 1],
            self.vertices[index * 3 + 2],
        )
    }

    /// Returns the index triple of the given face.
    #[inline]
    pub fn triangle(&self, face: usize) -> [u32; 3] {
        [
            self.indices[face * 3],
            self.indices[face * 3 + 1],
            self.indices[face * 3 + 2],
        ]
    }

    /// Returns the three corner positions of the given face.
    pub fn triangle_vertices(&self, face: usize) -> [DVec3; 3] {
        let [a, b, c] = self.triangle(face);
        [
            self.vertex(a as usize),
            self.vertex(b as usize),
            self.vertex(c as usize),
        ]
    }
}
