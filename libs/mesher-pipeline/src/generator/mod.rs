//! # Mesh Generation
//!
//! The three-operation generation contract and its reference backend.
//!
//! Real reconstruction backends (multi-view stereo, point-cloud surface
//! fitting, text-to-3D inference) plug in behind [`GeneratorBackend`];
//! the [`PlaceholderGenerator`] reference implementation synthesizes a
//! canonical placeholder solid so the downstream validator and optimizer
//! stages have a stable fixture.

pub mod placeholder;

pub use placeholder::PlaceholderGenerator;

use crate::error::GenerateError;
use chrono::Utc;
use mesher_types::{ImageInput, Mesh, PointCloudInput, ResolvedOptions};

/// Asynchronous generation contract.
///
/// Every operation receives the merged options snapshot, synthesizes
/// geometry, and attaches provenance metadata describing the input
/// modality, generation time, and echoed options. Entry points are async
/// because real backends are I/O-bound (image decode, network fetch,
/// model inference); the reference backend resolves immediately.
#[allow(async_fn_in_trait)]
pub trait GeneratorBackend {
    /// Generates a mesh from a set of input images.
    async fn from_images(
        &self,
        images: &[ImageInput],
        options: &ResolvedOptions,
    ) -> Result<Mesh, GenerateError>;

    /// Generates a mesh from a point cloud.
    async fn from_point_cloud(
        &self,
        cloud: &PointCloudInput,
        options: &ResolvedOptions,
    ) -> Result<Mesh, GenerateError>;

    /// Generates a mesh from a text description.
    async fn from_text(
        &self,
        description: &str,
        options: &ResolvedOptions,
    ) -> Result<Mesh, GenerateError>;
}

/// Produces a mesh id unique per generation call.
pub(crate) fn next_mesh_id() -> String {
    format!(
        "mesh-{}-{:08x}",
        Utc::now().timestamp_millis(),
        rand::random::<u32>()
    )
}
