//! # Mesh Validation
//!
//! Structural and geometric integrity checks.
//!
//! Checks run in a fixed order and the first failure is returned; nothing
//! is accumulated and nothing is silently repaired. A mesh that fails
//! validation is rejected as-is; correctness issues must be fixed upstream,
//! never patched over by later stages.

use crate::error::ValidationError;
use config::constants::{DEGENERATE_AREA_EPSILON, NORMAL_UNIT_TOLERANCE};
use mesher_geometry::{triangle_area, vertex_at};
use mesher_types::{Mesh, Provenance};
use std::collections::BTreeMap;

/// Validates a mesh.
///
/// Check order: id → vertices → indices → normals → uvs → metadata →
/// degenerate faces → manifold edges. Returns the first failure.
///
/// # Example
///
/// ```rust,ignore
/// if let Err(error) = mesher_pipeline::validate(&mesh) {
///     eprintln!("rejected: {error}");
/// }
/// ```
pub fn validate(mesh: &Mesh) -> Result<(), ValidationError> {
    if mesh.id.is_empty() {
        return Err(ValidationError::MissingId);
    }

    validate_vertices(&mesh.vertices)?;
    let vertex_count = mesh.vertices.len() / 3;

    validate_indices(&mesh.indices, vertex_count)?;
    validate_normals(&mesh.normals, vertex_count)?;
    validate_uvs(&mesh.uvs, vertex_count)?;
    validate_metadata(&mesh.metadata.provenance)?;
    check_degenerate_faces(mesh)?;
    check_manifold_edges(&mesh.indices)?;

    Ok(())
}

fn validate_vertices(vertices: &[f64]) -> Result<(), ValidationError> {
    if vertices.is_empty() {
        return Err(ValidationError::EmptyVertices);
    }
    if vertices.len() % 3 != 0 {
        return Err(ValidationError::VerticesNotTriples(vertices.len()));
    }
    for (index, value) in vertices.iter().enumerate() {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteVertex { index });
        }
    }
    Ok(())
}

fn validate_indices(indices: &[u32], vertex_count: usize) -> Result<(), ValidationError> {
    if indices.is_empty() {
        return Err(ValidationError::EmptyIndices);
    }
    if indices.len() % 3 != 0 {
        return Err(ValidationError::IndicesNotTriples(indices.len()));
    }
    for (index, &value) in indices.iter().enumerate() {
        if value as usize >= vertex_count {
            return Err(ValidationError::IndexOutOfBounds {
                index,
                value,
                vertex_count,
            });
        }
    }
    Ok(())
}

fn validate_normals(normals: &[f64], vertex_count: usize) -> Result<(), ValidationError> {
    if normals.len() != vertex_count * 3 {
        return Err(ValidationError::NormalCountMismatch {
            expected: vertex_count * 3,
            actual: normals.len(),
        });
    }
    for (index, value) in normals.iter().enumerate() {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteNormal { index });
        }
    }
    for vertex in 0..vertex_count {
        let length = vertex_at(normals, vertex).length();
        if (length - 1.0).abs() > NORMAL_UNIT_TOLERANCE {
            return Err(ValidationError::NonUnitNormal { vertex, length });
        }
    }
    Ok(())
}

fn validate_uvs(uvs: &[f64], vertex_count: usize) -> Result<(), ValidationError> {
    if uvs.len() != vertex_count * 2 {
        return Err(ValidationError::UvCountMismatch {
            expected: vertex_count * 2,
            actual: uvs.len(),
        });
    }
    for (index, value) in uvs.iter().enumerate() {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteUv { index });
        }
    }
    Ok(())
}

/// Typed analogue of the required-metadata-keys check: the record is always
/// structurally present, so what remains is internal coherence per modality.
fn validate_metadata(provenance: &Provenance) -> Result<(), ValidationError> {
    match provenance {
        Provenance::Images {
            image_count,
            image_uris,
        } => {
            if *image_count != image_uris.len() {
                return Err(ValidationError::inconsistent_metadata(format!(
                    "image count {} does not match {} uris",
                    image_count,
                    image_uris.len()
                )));
            }
        }
        Provenance::PointCloud { point_count } => {
            if *point_count == 0 {
                return Err(ValidationError::inconsistent_metadata(
                    "point count cannot be zero",
                ));
            }
        }
        Provenance::Text { description } => {
            if description.trim().is_empty() {
                return Err(ValidationError::inconsistent_metadata(
                    "text description cannot be empty",
                ));
            }
        }
    }
    Ok(())
}

fn check_degenerate_faces(mesh: &Mesh) -> Result<(), ValidationError> {
    for face in 0..mesh.face_count() {
        let [v0, v1, v2] = mesh.triangle_vertices(face);
        let area = triangle_area(v0, v1, v2);
        if area < DEGENERATE_AREA_EPSILON {
            return Err(ValidationError::DegenerateFace { face, area });
        }
    }
    Ok(())
}

/// Edge-manifoldness parity check.
///
/// In a closed, properly stitched surface every interior edge is shared by
/// exactly two triangles, so every undirected edge must have even incidence.
/// An odd count signals an open boundary or a topology defect. This check
/// assumes closed watertight meshes and rejects legitimate open meshes with
/// boundary loops; that is the documented contract, not an oversight.
fn check_manifold_edges(indices: &[u32]) -> Result<(), ValidationError> {
    let mut incidence: BTreeMap<(u32, u32), usize> = BTreeMap::new();

    for triangle in indices.chunks_exact(3) {
        let edges = [
            (triangle[0], triangle[1]),
            (triangle[1], triangle[2]),
            (triangle[2], triangle[0]),
        ];
        for (a, b) in edges {
            let key = if a < b { (a, b) } else { (b, a) };
            *incidence.entry(key).or_insert(0) += 1;
        }
    }

    for (&(a, b), &count) in &incidence {
        if count % 2 == 1 {
            return Err(ValidationError::NonManifoldEdge { a, b, count });
        }
    }
    Ok(())
}
