//! # Config Crate
//!
//! Centralized configuration constants for the mesher pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, VERTEX_WELD_EPSILON};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! let is_zero = value.abs() < EPSILON;
//! assert!(is_zero);
//!
//! // Use the weld epsilon for vertex deduplication keys
//! let grid_cell = (0.25_f64 / VERTEX_WELD_EPSILON).round() as i64;
//! assert_eq!(grid_cell, 250_000);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Plain constants, usable from every crate
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
