//! # Coordinate Quantization
//!
//! Snaps vertex coordinates onto a fixed per-axis grid to reduce
//! positional entropy for storage and transmission.

use mesher_geometry::bounding_box;
use mesher_types::Mesh;

/// Quantizes vertex coordinates to `precision_bits` per axis.
///
/// Derives a per-axis scale `(2^bits - 1) / (max - min)` from the mesh
/// bounding box, snaps each coordinate to the nearest grid point, and maps
/// back into original units. Axes with zero extent pass through unchanged.
/// The bounding box moves by less than one grid step per axis.
pub(crate) fn quantize_vertices(mesh: &Mesh, precision_bits: u32) -> Mesh {
    let aabb = bounding_box(&mesh.vertices);
    let extent = aabb.extent();
    let steps = ((1u64 << precision_bits) - 1) as f64;

    let scale = [
        if extent.x > 0.0 { steps / extent.x } else { 0.0 },
        if extent.y > 0.0 { steps / extent.y } else { 0.0 },
        if extent.z > 0.0 { steps / extent.z } else { 0.0 },
    ];
    let min = [aabb.min.x, aabb.min.y, aabb.min.z];

    let vertices = mesh
        .vertices
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let axis = index % 3;
            if scale[axis] == 0.0 {
                value
            } else {
                min[axis] + ((value - min[axis]) * scale[axis]).round() / scale[axis]
            }
        })
        .collect();

    Mesh {
        id: mesh.id.clone(),
        vertices,
        indices: mesh.indices.clone(),
        normals: mesh.normals.clone(),
        uvs: mesh.uvs.clone(),
        material_id: mesh.material_id.clone(),
        metadata: mesh.metadata.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesher_types::{MeshMetadata, Provenance, ResolvedOptions};

    fn mesh_with_vertices(vertices: Vec<f64>) -> Mesh {
        let vertex_count = vertices.len() / 3;
        Mesh {
            id: "mesh-quantize".into(),
            vertices,
            indices: vec![0, 1, 2],
            normals: vec![0.0; vertex_count * 3],
            uvs: vec![0.0; vertex_count * 2],
            material_id: None,
            metadata: MeshMetadata::new(
                Provenance::Text {
                    description: "quantize fixture".into(),
                },
                0.0,
                ResolvedOptions::default(),
            ),
        }
    }

    #[test]
    fn test_bounding_box_is_stable() {
        let mesh = mesh_with_vertices(vec![
            -1.0, -1.0, -1.0, //
            1.0, 1.0, 1.0, //
            0.3333333, -0.777777, 0.123456,
        ]);
        let before = bounding_box(&mesh.vertices);
        let quantized = quantize_vertices(&mesh, 16);
        let after = bounding_box(&quantized.vertices);

        let min_drift = (after.min - before.min).abs();
        let max_drift = (after.max - before.max).abs();
        assert!(min_drift.max_element() < 1e-3);
        assert!(max_drift.max_element() < 1e-3);
    }

    #[test]
    fn test_extremes_snap_exactly() {
        // min and max land exactly on grid points 0 and 2^bits - 1.
        let mesh = mesh_with_vertices(vec![
            -1.0, -1.0, -1.0, //
            1.0, 1.0, 1.0, //
            0.5, 0.5, 0.5,
        ]);
        let quantized = quantize_vertices(&mesh, 16);
        assert_eq!(quantized.vertices[0], -1.0);
        assert_eq!(quantized.vertices[3], 1.0);
    }

    #[test]
    fn test_interior_coordinates_move_less_than_a_step() {
        let mesh = mesh_with_vertices(vec![
            0.0, 0.0, 0.0, //
            2.0, 2.0, 2.0, //
            0.7071067, 1.4142135, 0.5772156,
        ]);
        let quantized = quantize_vertices(&mesh, 16);
        let step = 2.0 / 65535.0;
        for (before, after) in mesh.vertices.iter().zip(&quantized.vertices) {
            assert!((before - after).abs() <= step);
        }
    }

    #[test]
    fn test_flat_axis_passes_through() {
        // All z coordinates equal: zero extent on that axis.
        let mesh = mesh_with_vertices(vec![
            0.0, 0.0, 0.25, //
            1.0, 0.5, 0.25, //
            0.5, 1.0, 0.25,
        ]);
        let quantized = quantize_vertices(&mesh, 8);
        assert_eq!(quantized.vertices[2], 0.25);
        assert_eq!(quantized.vertices[5], 0.25);
        assert_eq!(quantized.vertices[8], 0.25);
    }
}
