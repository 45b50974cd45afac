//! # Generation Inputs
//!
//! Input records accepted by the three generator operations.

use serde::{Deserialize, Serialize};

/// One source image for image-based generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageInput {
    /// Location of the image (URL or opaque reference).
    pub uri: String,
}

impl ImageInput {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }
}

/// Point cloud input: flat x,y,z triples with optional per-point normals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointCloudInput {
    /// Point positions, flat x,y,z triples.
    pub points: Vec<f64>,
    /// Optional per-point normals, same layout as `points`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normals: Option<Vec<f64>>,
}

impl PointCloudInput {
    /// Number of points in the cloud.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len() / 3
    }
}
