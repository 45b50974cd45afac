//! # Mesh Statistics
//!
//! Descriptive statistics over a mesh: counts, bounding volume, surface
//! area, and an estimated compression ratio.

use config::constants::{ASSUMED_COMPRESSION_FACTOR, BYTES_PER_FLOAT, BYTES_PER_INDEX};
use mesher_geometry::{bounding_box, tetrahedron_signed_volume, triangle_area};
use mesher_types::{Mesh, MeshStatistics};

/// Computes descriptive statistics for a mesh.
///
/// `volume` is the absolute value of the signed-tetrahedron sum relative to
/// the origin; it is only mathematically correct for closed, consistently
/// wound meshes and silently produces a meaningless number for open ones.
/// `compression_ratio` divides the estimated raw buffer size (8 bytes per
/// float entry, 4 per index) by an assumed 50%-compressed size.
pub fn mesh_statistics(mesh: &Mesh) -> MeshStatistics {
    let mut volume = 0.0;
    let mut surface_area = 0.0;
    for face in 0..mesh.face_count() {
        let [v0, v1, v2] = mesh.triangle_vertices(face);
        volume += tetrahedron_signed_volume(v0, v1, v2);
        surface_area += triangle_area(v0, v1, v2);
    }

    MeshStatistics {
        vertex_count: mesh.vertex_count(),
        face_count: mesh.face_count(),
        bounding_box: bounding_box(&mesh.vertices),
        volume: volume.abs(),
        surface_area,
        compression_ratio: compression_ratio(mesh),
    }
}

/// Estimated raw byte size of the mesh buffers.
pub(crate) fn estimated_buffer_bytes(float_entries: usize, index_entries: usize) -> usize {
    float_entries * BYTES_PER_FLOAT + index_entries * BYTES_PER_INDEX
}

fn compression_ratio(mesh: &Mesh) -> f64 {
    let raw = estimated_buffer_bytes(
        mesh.vertices.len() + mesh.normals.len() + mesh.uvs.len(),
        mesh.indices.len(),
    );
    if raw == 0 {
        return 0.0;
    }
    let compressed = raw as f64 * ASSUMED_COMPRESSION_FACTOR;
    raw as f64 / compressed
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::DVec3;
    use mesher_geometry::accumulate_vertex_normals;
    use mesher_types::{MeshMetadata, Provenance, ResolvedOptions};

    /// Axis-aligned cube of side 2 centered at the origin, outward wound.
    fn cube2() -> Mesh {
        #[rustfmt::skip]
        let vertices = vec![
            -1.0, -1.0, -1.0,
             1.0, -1.0, -1.0,
             1.0,  1.0, -1.0,
            -1.0,  1.0, -1.0,
            -1.0, -1.0,  1.0,
             1.0, -1.0,  1.0,
             1.0,  1.0,  1.0,
            -1.0,  1.0,  1.0,
        ];
        #[rustfmt::skip]
        let indices = vec![
            0, 2, 1,  0, 3, 2,
            4, 5, 6,  4, 6, 7,
            0, 1, 5,  0, 5, 4,
            2, 3, 7,  2, 7, 6,
            3, 0, 4,  3, 4, 7,
            1, 2, 6,  1, 6, 5,
        ];
        let normals = accumulate_vertex_normals(&vertices, &indices);
        Mesh {
            id: "mesh-cube2".into(),
            vertices,
            indices,
            normals,
            uvs: vec![0.0; 16],
            material_id: None,
            metadata: MeshMetadata::new(
                Provenance::Text {
                    description: "cube".into(),
                },
                0.0,
                ResolvedOptions::default(),
            ),
        }
    }

    #[test]
    fn test_cube_volume_and_bounds() {
        let stats = mesh_statistics(&cube2());
        assert_eq!(stats.vertex_count, 8);
        assert_eq!(stats.face_count, 12);
        assert_relative_eq!(stats.volume, 8.0, epsilon = 1e-9);
        assert_eq!(stats.bounding_box.min, DVec3::splat(-1.0));
        assert_eq!(stats.bounding_box.max, DVec3::splat(1.0));
    }

    #[test]
    fn test_cube_surface_area() {
        // 6 faces of a side-2 cube: 6 * 4.
        let stats = mesh_statistics(&cube2());
        assert_relative_eq!(stats.surface_area, 24.0, epsilon = 1e-9);
    }

    #[test]
    fn test_compression_ratio_matches_size_model() {
        let stats = mesh_statistics(&cube2());
        assert_relative_eq!(stats.compression_ratio, 2.0);
    }
}
