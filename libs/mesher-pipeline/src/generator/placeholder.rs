//! # Placeholder Generator
//!
//! Reference backend emitting a canonical placeholder solid.
//!
//! Every operation synthesizes the same unit cube regardless of input;
//! this is an explicit placeholder, not a claim of reconstruction
//! fidelity. It exists so the validator and optimizer stages have a
//! stable, well-formed fixture, and so callers can exercise the full
//! pipeline before a real backend is plugged in.

use crate::error::GenerateError;
use crate::generator::{next_mesh_id, GeneratorBackend};
use mesher_geometry::accumulate_vertex_normals;
use mesher_types::{
    ImageInput, Mesh, MeshMetadata, PointCloudInput, Provenance, ResolvedOptions,
};
use std::time::Instant;

/// Backend that resolves immediately with a unit cube.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderGenerator;

impl PlaceholderGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl GeneratorBackend for PlaceholderGenerator {
    async fn from_images(
        &self,
        images: &[ImageInput],
        options: &ResolvedOptions,
    ) -> Result<Mesh, GenerateError> {
        if images.is_empty() {
            return Err(GenerateError::invalid_input(
                "image set cannot be empty",
            ));
        }
        let started = Instant::now();
        log::debug!("generating placeholder solid from {} images", images.len());

        let provenance = Provenance::Images {
            image_count: images.len(),
            image_uris: images.iter().map(|image| image.uri.clone()).collect(),
        };
        Ok(placeholder_solid(provenance, options, started))
    }

    async fn from_point_cloud(
        &self,
        cloud: &PointCloudInput,
        options: &ResolvedOptions,
    ) -> Result<Mesh, GenerateError> {
        if cloud.points.is_empty() {
            return Err(GenerateError::invalid_input("point cloud cannot be empty"));
        }
        if cloud.points.len() % 3 != 0 {
            return Err(GenerateError::invalid_input(format!(
                "point buffer length must be a multiple of 3 (got {})",
                cloud.points.len()
            )));
        }
        let started = Instant::now();
        log::debug!(
            "generating placeholder solid from {} points",
            cloud.point_count()
        );

        let provenance = Provenance::PointCloud {
            point_count: cloud.point_count(),
        };
        Ok(placeholder_solid(provenance, options, started))
    }

    async fn from_text(
        &self,
        description: &str,
        options: &ResolvedOptions,
    ) -> Result<Mesh, GenerateError> {
        if description.trim().is_empty() {
            return Err(GenerateError::invalid_input(
                "text description cannot be empty",
            ));
        }
        let started = Instant::now();
        log::debug!("generating placeholder solid from text {description:?}");

        let provenance = Provenance::Text {
            description: description.to_owned(),
        };
        Ok(placeholder_solid(provenance, options, started))
    }
}

/// Builds the canonical placeholder solid: a unit cube centered at the
/// origin with 8 vertices and 12 counter-clockwise, outward-wound
/// triangles (2 per face).
///
/// Vertex normals come from the shared accumulate-and-renormalize
/// synthesis; UVs are a simple box projection of the x/y coordinates.
fn placeholder_solid(
    provenance: Provenance,
    options: &ResolvedOptions,
    started: Instant,
) -> Mesh {
    let half = 0.5;

    // 8 corners, bottom face first (z = -half), then top (z = +half).
    #[rustfmt::skip]
    let vertices = vec![
        -half, -half, -half, // 0: left-front-bottom
         half, -half, -half, // 1: right-front-bottom
         half,  half, -half, // 2: right-back-bottom
        -half,  half, -half, // 3: left-back-bottom
        -half, -half,  half, // 4: left-front-top
         half, -half,  half, // 5: right-front-top
         half,  half,  half, // 6: right-back-top
        -half,  half,  half, // 7: left-back-top
    ];

    // 2 triangles per face, wound counter-clockwise seen from outside.
    #[rustfmt::skip]
    let indices = vec![
        0, 2, 1,  0, 3, 2, // bottom
        4, 5, 6,  4, 6, 7, // top
        0, 1, 5,  0, 5, 4, // front
        2, 3, 7,  2, 7, 6, // back
        3, 0, 4,  3, 4, 7, // left
        1, 2, 6,  1, 6, 5, // right
    ];

    let normals = accumulate_vertex_normals(&vertices, &indices);

    let mut uvs = Vec::with_capacity(vertices.len() / 3 * 2);
    for vertex in vertices.chunks_exact(3) {
        uvs.push(vertex[0] + half);
        uvs.push(vertex[1] + half);
    }

    let generation_time_ms = started.elapsed().as_secs_f64() * 1000.0;
    Mesh {
        id: next_mesh_id(),
        vertices,
        indices,
        normals,
        uvs,
        material_id: None,
        metadata: MeshMetadata::new(provenance, generation_time_ms, *options),
    }
}
