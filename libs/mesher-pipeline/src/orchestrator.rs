//! # Pipeline Orchestration
//!
//! Sequences generator → validator → optimizer into a single call and
//! converts every stage failure into one uniform error shape.
//!
//! The orchestrator's only state is its immutable default options,
//! resolved once at construction. Callers wanting different defaults
//! construct a new instance or pass per-call overrides; independent calls
//! share nothing and may run fully in parallel.

use crate::error::{MesherError, ValidationError};
use crate::generator::{GeneratorBackend, PlaceholderGenerator};
use crate::optimizer::MeshOptimizer;
use crate::statistics::mesh_statistics;
use crate::validator::validate;
use mesher_types::{
    ImageInput, Mesh, MeshStatistics, MesherOptions, PointCloudInput, ResolvedOptions,
};

/// Orchestrator over a generation backend.
///
/// # Example
///
/// ```rust
/// use mesher_pipeline::Mesher;
/// use mesher_types::{MesherOptions, MeshResponse, Quality};
///
/// # async fn run() {
/// let mesher = Mesher::new(MesherOptions::default());
/// let options = MesherOptions {
///     quality: Some(Quality::Medium),
///     ..Default::default()
/// };
/// let response = MeshResponse::from_result(
///     mesher.generate_from_text("a box", options).await,
/// );
/// assert!(response.success);
/// # }
/// ```
pub struct Mesher<B: GeneratorBackend = PlaceholderGenerator> {
    backend: B,
    optimizer: MeshOptimizer,
    defaults: ResolvedOptions,
}

impl Mesher {
    /// Orchestrator over the placeholder reference backend.
    pub fn new(defaults: MesherOptions) -> Self {
        Self::with_backend(PlaceholderGenerator::new(), defaults)
    }
}

impl Default for Mesher {
    fn default() -> Self {
        Self::new(MesherOptions::default())
    }
}

impl<B: GeneratorBackend> Mesher<B> {
    /// Orchestrator over a caller-supplied backend.
    pub fn with_backend(backend: B, defaults: MesherOptions) -> Self {
        Self {
            backend,
            optimizer: MeshOptimizer::new(),
            defaults: defaults.resolve(),
        }
    }

    /// Defaults this orchestrator was constructed with, fully resolved.
    pub fn defaults(&self) -> &ResolvedOptions {
        &self.defaults
    }

    /// Generates, validates, and optimizes a mesh from images.
    pub async fn generate_from_images(
        &self,
        images: &[ImageInput],
        options: MesherOptions,
    ) -> Result<Mesh, MesherError> {
        let options = self.defaults.with_overrides(&options);
        let mesh = self.backend.from_images(images, &options).await?;
        self.finish(mesh, &options)
    }

    /// Generates, validates, and optimizes a mesh from a point cloud.
    pub async fn generate_from_point_cloud(
        &self,
        cloud: &PointCloudInput,
        options: MesherOptions,
    ) -> Result<Mesh, MesherError> {
        let options = self.defaults.with_overrides(&options);
        let mesh = self.backend.from_point_cloud(cloud, &options).await?;
        self.finish(mesh, &options)
    }

    /// Generates, validates, and optimizes a mesh from a text description.
    pub async fn generate_from_text(
        &self,
        description: &str,
        options: MesherOptions,
    ) -> Result<Mesh, MesherError> {
        let options = self.defaults.with_overrides(&options);
        let mesh = self.backend.from_text(description, &options).await?;
        self.finish(mesh, &options)
    }

    /// Validates a mesh obtained elsewhere (e.g. deserialized from the
    /// wire).
    pub fn validate_mesh(&self, mesh: &Mesh) -> Result<(), ValidationError> {
        validate(mesh)
    }

    /// Optimizes a mesh obtained elsewhere.
    ///
    /// The mesh must already have passed validation; see the optimizer's
    /// documented precondition.
    pub fn optimize_mesh(&self, mesh: &Mesh, options: MesherOptions) -> Mesh {
        let options = self.defaults.with_overrides(&options);
        self.optimizer.optimize(mesh, &options)
    }

    /// Computes descriptive statistics for a mesh.
    pub fn mesh_statistics(&self, mesh: &Mesh) -> MeshStatistics {
        mesh_statistics(mesh)
    }

    /// Shared tail of every generation call: limits, validation,
    /// optimization. Fail-fast: an invalid mesh is rejected as-is, never
    /// partially returned.
    fn finish(&self, mesh: Mesh, options: &ResolvedOptions) -> Result<Mesh, MesherError> {
        if mesh.vertex_count() > options.max_vertices {
            return Err(MesherError::TooManyVertices {
                count: mesh.vertex_count(),
                max: options.max_vertices,
            });
        }
        if mesh.face_count() > options.max_faces {
            return Err(MesherError::TooManyFaces {
                count: mesh.face_count(),
                max: options.max_faces,
            });
        }

        if let Err(error) = validate(&mesh) {
            log::warn!("validation failed for mesh {}: {error}", mesh.id);
            return Err(error.into());
        }

        Ok(self.optimizer.optimize(&mesh, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerateError;
    use mesher_types::Quality;

    #[tokio::test]
    async fn test_generate_from_text_runs_full_pipeline() {
        let mesher = Mesher::default();
        let mesh = mesher
            .generate_from_text("a box", MesherOptions::default())
            .await
            .unwrap();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.face_count(), 12);
        assert!(mesh.metadata.optimization.is_some());
    }

    #[tokio::test]
    async fn test_per_call_options_override_defaults() {
        let defaults = MesherOptions {
            quality: Some(Quality::Low),
            resolution: Some(32),
            ..Default::default()
        };
        let mesher = Mesher::new(defaults);
        let call = MesherOptions {
            quality: Some(Quality::High),
            ..Default::default()
        };
        let mesh = mesher.generate_from_text("a box", call).await.unwrap();
        let echoed = mesh.metadata.optimization.as_ref().unwrap().options;
        assert_eq!(echoed.quality, Quality::High);
        // Unset call fields keep the instance defaults.
        assert_eq!(echoed.resolution, 32);
    }

    #[tokio::test]
    async fn test_vertex_limit_rejects_before_validation() {
        let call = MesherOptions {
            max_vertices: Some(4),
            ..Default::default()
        };
        let result = Mesher::default().generate_from_text("a box", call).await;
        assert_eq!(
            result.unwrap_err(),
            MesherError::TooManyVertices { count: 8, max: 4 }
        );
    }

    #[tokio::test]
    async fn test_backend_error_surfaces_as_generation_error() {
        struct FailingBackend;
        impl GeneratorBackend for FailingBackend {
            async fn from_images(
                &self,
                _images: &[ImageInput],
                _options: &ResolvedOptions,
            ) -> Result<Mesh, GenerateError> {
                Err(GenerateError::backend("image decode failed"))
            }
            async fn from_point_cloud(
                &self,
                _cloud: &PointCloudInput,
                _options: &ResolvedOptions,
            ) -> Result<Mesh, GenerateError> {
                Err(GenerateError::backend("unreachable"))
            }
            async fn from_text(
                &self,
                _description: &str,
                _options: &ResolvedOptions,
            ) -> Result<Mesh, GenerateError> {
                Err(GenerateError::backend("inference timed out"))
            }
        }

        let mesher = Mesher::with_backend(FailingBackend, MesherOptions::default());
        let error = mesher
            .generate_from_text("a box", MesherOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(error, MesherError::Generation(_)));
        assert!(error.to_string().contains("inference timed out"));
    }

    #[tokio::test]
    async fn test_invalid_backend_mesh_is_rejected_not_repaired() {
        /// Backend producing a mesh with an out-of-bounds index.
        struct BrokenBackend;
        impl GeneratorBackend for BrokenBackend {
            async fn from_images(
                &self,
                _images: &[ImageInput],
                _options: &ResolvedOptions,
            ) -> Result<Mesh, GenerateError> {
                unimplemented!()
            }
            async fn from_point_cloud(
                &self,
                _cloud: &PointCloudInput,
                _options: &ResolvedOptions,
            ) -> Result<Mesh, GenerateError> {
                unimplemented!()
            }
            async fn from_text(
                &self,
                description: &str,
                options: &ResolvedOptions,
            ) -> Result<Mesh, GenerateError> {
                let mut mesh = PlaceholderGenerator::new()
                    .from_text(description, options)
                    .await?;
                mesh.indices[0] = 99;
                Ok(mesh)
            }
        }

        let mesher = Mesher::with_backend(BrokenBackend, MesherOptions::default());
        let error = mesher
            .generate_from_text("a box", MesherOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(
            error,
            MesherError::Validation(ValidationError::IndexOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_defaults_resolved_once() {
        let mesher = Mesher::new(MesherOptions {
            max_faces: Some(42),
            ..Default::default()
        });
        assert_eq!(mesher.defaults().max_faces, 42);
        assert_eq!(mesher.defaults().resolution, 128);
    }
}
