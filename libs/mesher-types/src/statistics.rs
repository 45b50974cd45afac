//! # Mesh Statistics
//!
//! Descriptive statistics computed by the validator.

use crate::bounds::Aabb;
use serde::{Deserialize, Serialize};

/// Descriptive statistics for a mesh.
///
/// `volume` is the absolute signed-tetrahedron sum relative to the origin,
/// which is only meaningful for closed, consistently wound meshes.
/// `compression_ratio` is an estimate against an assumed compressed size,
/// not a measured figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshStatistics {
    pub vertex_count: usize,
    pub face_count: usize,
    pub bounding_box: Aabb,
    pub volume: f64,
    pub surface_area: f64,
    pub compression_ratio: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn test_wire_field_names() {
        let stats = MeshStatistics {
            vertex_count: 8,
            face_count: 12,
            bounding_box: Aabb::new(DVec3::splat(-1.0), DVec3::splat(1.0)),
            volume: 8.0,
            surface_area: 24.0,
            compression_ratio: 2.0,
        };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["vertexCount"], 8);
        assert_eq!(json["faceCount"], 12);
        assert_eq!(json["boundingBox"]["min"][0], -1.0);
        assert_eq!(json["surfaceArea"], 24.0);
        assert_eq!(json["compressionRatio"], 2.0);
    }
}
