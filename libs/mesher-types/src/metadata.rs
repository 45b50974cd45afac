//! # Mesh Metadata
//!
//! Typed provenance and processing metadata attached to every mesh.
//! Provenance is a tagged union per source modality instead of an open
//! key/value bag, so downstream consumers get typed fields while the
//! `source` tag keeps the record extensible.

use crate::options::ResolvedOptions;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-modality provenance record, tagged by `source` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source")]
pub enum Provenance {
    /// Generated from a set of input images.
    #[serde(rename = "images", rename_all = "camelCase")]
    Images {
        image_count: usize,
        image_uris: Vec<String>,
    },
    /// Generated from a point cloud.
    #[serde(rename = "point-cloud", rename_all = "camelCase")]
    PointCloud { point_count: usize },
    /// Generated from a text description.
    #[serde(rename = "text", rename_all = "camelCase")]
    Text { description: String },
}

impl Provenance {
    /// Wire value of the `source` tag.
    pub fn source(&self) -> &'static str {
        match self {
            Provenance::Images { .. } => "images",
            Provenance::PointCloud { .. } => "point-cloud",
            Provenance::Text { .. } => "text",
        }
    }
}

/// Metadata stamped by the generator and extended by the optimizer.
///
/// The provenance record is flattened on the wire, so the serialized form
/// carries `source`, the modality-specific fields, `generatedAt`,
/// `generationTimeMs`, the echoed `options`, and (after optimization) an
/// `optimization` stamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshMetadata {
    #[serde(flatten)]
    pub provenance: Provenance,
    /// Generation timestamp (UTC).
    pub generated_at: DateTime<Utc>,
    /// Wall-clock duration of the generation call in milliseconds.
    pub generation_time_ms: f64,
    /// Options snapshot the mesh was generated with.
    pub options: ResolvedOptions,
    /// Present once the mesh has passed through the optimizer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimization: Option<OptimizationStamp>,
}

impl MeshMetadata {
    /// Creates generation metadata stamped with the current time.
    pub fn new(provenance: Provenance, generation_time_ms: f64, options: ResolvedOptions) -> Self {
        Self {
            provenance,
            generated_at: Utc::now(),
            generation_time_ms,
            options,
            optimization: None,
        }
    }
}

/// Record of an optimization pass, stamped into mesh metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationStamp {
    /// Always true; kept so wire consumers can test a single flag.
    pub optimized: bool,
    /// Optimization timestamp (UTC).
    pub optimized_at: DateTime<Utc>,
    /// Wall-clock duration of the optimization pass in milliseconds.
    pub optimization_time_ms: f64,
    /// Options snapshot the optimizer ran with.
    pub options: ResolvedOptions,
    pub vertices_before: usize,
    pub vertices_after: usize,
    pub faces_before: usize,
    pub faces_after: usize,
    /// Estimated before/after buffer size ratio.
    pub compression_ratio: f64,
}
