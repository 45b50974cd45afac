//! # Mesher Pipeline
//!
//! Generation, validation, and optimization of triangulated surface meshes.
//!
//! ## Architecture
//!
//! ```text
//! GeneratorBackend → validator → optimizer
//!          └──── Mesher (orchestrator) ────┘
//! ```
//!
//! The orchestrator merges caller options with its immutable defaults,
//! invokes the generator, validates the result (fail-fast on invalid
//! geometry), optimizes, and returns the mesh or a structured failure.
//! Every stage is a pure function over value meshes; generator entry
//! points are async to accommodate I/O-bound backends.
//!
//! ## Usage
//!
//! ```rust
//! use mesher_pipeline::Mesher;
//! use mesher_types::MesherOptions;
//!
//! # async fn run() {
//! let mesher = Mesher::new(MesherOptions::default());
//! let mesh = mesher
//!     .generate_from_text("a box", MesherOptions::default())
//!     .await
//!     .unwrap();
//! assert_eq!(mesh.vertex_count(), 8);
//! # }
//! ```

pub mod error;
pub mod generator;
pub mod optimizer;
pub mod orchestrator;
pub mod statistics;
pub mod validator;

pub use error::{GenerateError, MesherError, ValidationError};
pub use generator::{GeneratorBackend, PlaceholderGenerator};
pub use optimizer::{MeshOptimizer, NoopSimplifier, Simplifier};
pub use orchestrator::Mesher;
pub use statistics::mesh_statistics;
pub use validator::validate;
