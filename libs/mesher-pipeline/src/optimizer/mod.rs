//! # Mesh Optimization
//!
//! Transforms a mesh into a smaller, cleaner equivalent through a fixed
//! five-stage pipeline: weld duplicate vertices, simplify, reorder indices,
//! recompute normals, stamp metadata. Each stage consumes the previous
//! stage's output and returns a new mesh value; the caller's mesh is never
//! mutated.
//!
//! The optimizer assumes its input already passed validation. It performs
//! no bounds or NaN checking and must not be handed unvalidated meshes
//! from untrusted sources; that precondition is documented, not enforced.

pub mod quantize;
pub mod simplify;
pub mod weld;

pub use simplify::{NoopSimplifier, Simplifier};

use crate::optimizer::quantize::quantize_vertices;
use crate::optimizer::simplify::target_vertex_count;
use crate::optimizer::weld::weld_vertices;
use crate::statistics::estimated_buffer_bytes;
use chrono::Utc;
use config::constants::DEFAULT_QUANTIZE_BITS;
use mesher_geometry::accumulate_vertex_normals;
use mesher_types::{Mesh, OptimizationStamp, ResolvedOptions};
use std::time::Instant;

/// Mesh optimizer with a pluggable simplification strategy.
#[derive(Debug, Clone, Default)]
pub struct MeshOptimizer<S: Simplifier = NoopSimplifier> {
    simplifier: S,
}

impl MeshOptimizer {
    /// Optimizer with the reference (no-op) simplifier.
    pub fn new() -> Self {
        Self {
            simplifier: NoopSimplifier,
        }
    }
}

impl<S: Simplifier> MeshOptimizer<S> {
    /// Optimizer with a caller-supplied simplification strategy.
    pub fn with_simplifier(simplifier: S) -> Self {
        Self { simplifier }
    }

    /// Runs the five-stage optimization pipeline.
    pub fn optimize(&self, mesh: &Mesh, options: &ResolvedOptions) -> Mesh {
        let started = Instant::now();
        log::info!(
            "optimizing mesh {} with quality {:?}",
            mesh.id,
            options.quality
        );
        let vertices_before = mesh.vertex_count();
        let faces_before = mesh.face_count();

        // 1. Weld duplicate vertices.
        let welded = weld_vertices(mesh);

        // 2. Simplify toward the quality target.
        let target = target_vertex_count(welded.vertex_count(), options.quality);
        let simplified = if welded.vertex_count() <= target {
            welded
        } else {
            self.simplifier.reduce(&welded, target)
        };

        // 3. Reorder indices for cache locality.
        let reordered = reorder_indices(simplified);

        // 4. Recompute normals over the final triangulation.
        let normals = accumulate_vertex_normals(&reordered.vertices, &reordered.indices);

        // 5. Stamp optimization metadata.
        let mut optimized = Mesh { normals, ..reordered };
        let stamp = OptimizationStamp {
            optimized: true,
            optimized_at: Utc::now(),
            optimization_time_ms: started.elapsed().as_secs_f64() * 1000.0,
            options: *options,
            vertices_before,
            vertices_after: optimized.vertex_count(),
            faces_before,
            faces_after: optimized.face_count(),
            compression_ratio: count_compression_ratio(
                vertices_before,
                faces_before,
                optimized.vertex_count(),
                optimized.face_count(),
            ),
        };
        log::debug!(
            "optimized mesh {}: {} -> {} vertices, {} -> {} faces",
            optimized.id,
            stamp.vertices_before,
            stamp.vertices_after,
            stamp.faces_before,
            stamp.faces_after
        );
        optimized.metadata.optimization = Some(stamp);
        optimized
    }

    /// Quantizes vertex coordinates to `precision_bits` per axis.
    ///
    /// Derives a per-axis scale from the mesh bounding box, snaps each
    /// coordinate to the grid, and maps back into original units. The
    /// bounding box moves by less than one grid step per axis.
    pub fn quantize(&self, mesh: &Mesh, precision_bits: u32) -> Mesh {
        quantize_vertices(mesh, precision_bits)
    }

    /// Quantizes at the default precision.
    pub fn quantize_default(&self, mesh: &Mesh) -> Mesh {
        self.quantize(mesh, DEFAULT_QUANTIZE_BITS)
    }
}

/// Index reordering for post-transform cache locality.
///
/// Placeholder: returns the mesh unchanged. A real implementation would
/// apply a vertex-cache-aware ordering (e.g. Forsyth's algorithm) here
/// without affecting any other stage.
fn reorder_indices(mesh: Mesh) -> Mesh {
    mesh
}

/// Before/after buffer size ratio under the shared byte model.
fn count_compression_ratio(
    vertices_before: usize,
    faces_before: usize,
    vertices_after: usize,
    faces_after: usize,
) -> f64 {
    let before = estimated_buffer_bytes(vertices_before * 8, faces_before * 3);
    let after = estimated_buffer_bytes(vertices_after * 8, faces_after * 3);
    if after == 0 {
        return 0.0;
    }
    before as f64 / after as f64
}
