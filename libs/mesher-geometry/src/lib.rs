//! # Mesher Geometry
//!
//! Shared numeric routines used by the validator and optimizer. All math
//! runs in f64 via `glam::DVec3`; flat wire buffers are converted to
//! vectors at the call site.
//!
//! ## Contents
//!
//! - Per-face cross products, triangle area, signed tetrahedron volume
//! - Axis-aligned bounding box over a flat vertex buffer
//! - The accumulate-and-renormalize vertex-normal synthesis shared by the
//!   generator and the optimizer's recompute stage

pub mod kernel;
pub mod normals;

pub use kernel::{bounding_box, face_normal, tetrahedron_signed_volume, triangle_area, vertex_at};
pub use normals::accumulate_vertex_normals;
