//! # Vertex Normal Synthesis
//!
//! Vertex-averaged normals via face-normal accumulation. Used by the
//! generator for freshly synthesized geometry and by the optimizer to
//! recompute normals after welding.

use crate::kernel::{face_normal, vertex_at};
use glam::DVec3;

/// Computes vertex-averaged normals for a flat vertex/index buffer pair.
///
/// For each triangle the unnormalized face normal is computed, normalized,
/// and added into the accumulator of all three corner vertices. After all
/// triangles are processed each accumulator is renormalized. An accumulator
/// of exactly zero length (isolated vertex, or cancelling faces) is left as
/// a zero vector rather than renormalized.
///
/// Triangles with a zero-length face normal contribute nothing; such faces
/// are rejected by validation as degenerate anyway.
///
/// # Returns
///
/// A flat x,y,z buffer with one normal per vertex,
/// `vertices.len()` entries long.
pub fn accumulate_vertex_normals(vertices: &[f64], indices: &[u32]) -> Vec<f64> {
    let vertex_count = vertices.len() / 3;
    let mut accumulators = vec![DVec3::ZERO; vertex_count];

    for triangle in indices.chunks_exact(3) {
        let v0 = vertex_at(vertices, triangle[0] as usize);
        let v1 = vertex_at(vertices, triangle[1] as usize);
        let v2 = vertex_at(vertices, triangle[2] as usize);

        let normal = face_normal(v0, v1, v2);
        let length = normal.length();
        if length == 0.0 {
            continue;
        }
        let normal = normal / length;

        accumulators[triangle[0] as usize] += normal;
        accumulators[triangle[1] as usize] += normal;
        accumulators[triangle[2] as usize] += normal;
    }

    let mut normals = Vec::with_capacity(vertices.len());
    for accumulator in accumulators {
        let length = accumulator.length();
        let normal = if length == 0.0 {
            DVec3::ZERO
        } else {
            accumulator / length
        };
        normals.extend([normal.x, normal.y, normal.z]);
    }
    normals
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_flat_quad_normals_point_up() {
        // Two triangles in the z = 0 plane, both wound counter-clockwise.
        let vertices = vec![
            0.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, //
            1.0, 1.0, 0.0, //
            0.0, 1.0, 0.0,
        ];
        let indices = vec![0, 1, 2, 0, 2, 3];

        let normals = accumulate_vertex_normals(&vertices, &indices);
        assert_eq!(normals.len(), vertices.len());
        for vertex in 0..4 {
            assert_relative_eq!(normals[vertex * 3], 0.0);
            assert_relative_eq!(normals[vertex * 3 + 1], 0.0);
            assert_relative_eq!(normals[vertex * 3 + 2], 1.0);
        }
    }

    #[test]
    fn test_isolated_vertex_keeps_zero_normal() {
        let vertices = vec![
            0.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            5.0, 5.0, 5.0, // not referenced by any triangle
        ];
        let indices = vec![0, 1, 2];

        let normals = accumulate_vertex_normals(&vertices, &indices);
        assert_eq!(&normals[9..12], &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_accumulated_normals_are_unit() {
        // Corner of a cube: three mutually perpendicular faces meet at
        // vertex 0; the accumulated normal must still renormalize to 1.
        let vertices = vec![
            0.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            0.0, 0.0, 1.0,
        ];
        let indices = vec![0, 2, 1, 0, 1, 3, 0, 3, 2];

        let normals = accumulate_vertex_normals(&vertices, &indices);
        let length = (normals[0] * normals[0] + normals[1] * normals[1] + normals[2] * normals[2])
            .sqrt();
        assert_relative_eq!(length, 1.0, epsilon = 1e-12);
    }
}
