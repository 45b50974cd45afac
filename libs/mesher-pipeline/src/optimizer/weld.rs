//! # Vertex Welding
//!
//! Merges vertices that quantize to the same spatial grid cell and remaps
//! triangle indices onto the deduplicated vertex list.

use config::constants::VERTEX_WELD_EPSILON;
use glam::DVec3;
use mesher_types::Mesh;
use std::collections::HashMap;

/// Spatial key: each coordinate rounded to the weld grid.
#[inline]
fn weld_key(position: DVec3) -> (i64, i64, i64) {
    (
        (position.x / VERTEX_WELD_EPSILON).round() as i64,
        (position.y / VERTEX_WELD_EPSILON).round() as i64,
        (position.z / VERTEX_WELD_EPSILON).round() as i64,
    )
}

/// Welds duplicate vertices into canonical ones.
///
/// The first vertex seen for a grid cell becomes canonical and keeps its
/// normal and UV; later occurrences map onto it. Indices are rebuilt
/// against the deduplicated list. Triangles referencing an index outside
/// the original vertex range are dropped; that cannot happen for meshes
/// that passed validation, the guard only keeps the remap total.
pub(crate) fn weld_vertices(mesh: &Mesh) -> Mesh {
    let vertex_count = mesh.vertex_count();
    let mut cell_to_canonical: HashMap<(i64, i64, i64), u32> = HashMap::with_capacity(vertex_count);
    let mut remap: Vec<u32> = Vec::with_capacity(vertex_count);

    let mut vertices = Vec::with_capacity(mesh.vertices.len());
    let mut normals = Vec::with_capacity(mesh.normals.len());
    let mut uvs = Vec::with_capacity(mesh.uvs.len());

    for index in 0..vertex_count {
        let key = weld_key(mesh.vertex(index));
        let canonical = *cell_to_canonical.entry(key).or_insert_with(|| {
            let next = (vertices.len() / 3) as u32;
            vertices.extend_from_slice(&mesh.vertices[index * 3..index * 3 + 3]);
            normals.extend_from_slice(&mesh.normals[index * 3..index * 3 + 3]);
            uvs.extend_from_slice(&mesh.uvs[index * 2..index * 2 + 2]);
            next
        });
        remap.push(canonical);
    }

    let mut indices = Vec::with_capacity(mesh.indices.len());
    for triangle in mesh.indices.chunks_exact(3) {
        if triangle.iter().any(|&index| index as usize >= remap.len()) {
            continue;
        }
        indices.extend([
            remap[triangle[0] as usize],
            remap[triangle[1] as usize],
            remap[triangle[2] as usize],
        ]);
    }

    Mesh {
        id: mesh.id.clone(),
        vertices,
        indices,
        normals,
        uvs,
        material_id: mesh.material_id.clone(),
        metadata: mesh.metadata.clone(),
    }
}
