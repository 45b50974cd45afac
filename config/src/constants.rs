//! # Configuration Constants
//!
//! Centralized constants for the mesher pipeline. All geometry tolerances,
//! default generation options, and size-estimate parameters are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison and welding tolerances
//! - **Validation**: Thresholds for geometric sanity checks
//! - **Defaults**: Default mesher options
//! - **Size model**: Byte assumptions behind compression estimates

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance. This value is chosen to balance precision with
/// robustness against floating-point errors.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Epsilon for vertex welding.
///
/// Each vertex coordinate is snapped to a grid of this spacing to build the
/// spatial key used for deduplication. Two vertices landing in the same grid
/// cell are merged into one canonical vertex.
///
/// # Example
///
/// ```rust
/// use config::constants::VERTEX_WELD_EPSILON;
///
/// fn weld_cell(coordinate: f64) -> i64 {
///     (coordinate / VERTEX_WELD_EPSILON).round() as i64
/// }
///
/// assert_eq!(weld_cell(1.0), weld_cell(1.0 + 1e-9));
/// ```
pub const VERTEX_WELD_EPSILON: f64 = 1e-6;

// =============================================================================
// VALIDATION CONSTANTS
// =============================================================================

/// Area threshold below which a triangle is considered degenerate.
///
/// Faces with an area under this value are rejected during validation;
/// they carry no usable surface and break downstream normal synthesis.
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-6;

/// Maximum deviation from unit length allowed for a vertex normal.
///
/// Validation rejects any normal whose length differs from 1.0 by more
/// than this tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::NORMAL_UNIT_TOLERANCE;
///
/// let length: f64 = 1.05;
/// assert!((length - 1.0).abs() <= NORMAL_UNIT_TOLERANCE);
/// ```
pub const NORMAL_UNIT_TOLERANCE: f64 = 0.1;

// =============================================================================
// DEFAULT MESHER OPTIONS
// =============================================================================

/// Default reconstruction density for generation backends.
pub const DEFAULT_RESOLUTION: u32 = 128;

/// Default maximum number of vertices accepted from a generation backend.
pub const DEFAULT_MAX_VERTICES: usize = 100_000;

/// Default maximum number of faces accepted from a generation backend.
pub const DEFAULT_MAX_FACES: usize = 200_000;

/// Default coordinate quantization precision in bits per axis.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_QUANTIZE_BITS;
///
/// let steps = (1u32 << DEFAULT_QUANTIZE_BITS) - 1;
/// assert_eq!(steps, 65_535);
/// ```
pub const DEFAULT_QUANTIZE_BITS: u32 = 16;

// =============================================================================
// SIMPLIFICATION CONSTANTS
// =============================================================================

/// Fraction of vertices kept when simplifying at low quality.
pub const SIMPLIFY_FRACTION_LOW: f64 = 0.3;

/// Fraction of vertices kept when simplifying at medium quality.
pub const SIMPLIFY_FRACTION_MEDIUM: f64 = 0.6;

/// Fraction of vertices kept when simplifying at high quality.
pub const SIMPLIFY_FRACTION_HIGH: f64 = 0.9;

/// Minimum vertex count a simplification target is clamped to.
///
/// A triangulated solid cannot drop below a tetrahedron.
pub const SIMPLIFY_MIN_VERTICES: usize = 4;

// =============================================================================
// SIZE MODEL CONSTANTS
// =============================================================================

/// Bytes per float-valued buffer entry in the raw size estimate.
pub const BYTES_PER_FLOAT: usize = 8;

/// Bytes per index entry in the raw size estimate.
pub const BYTES_PER_INDEX: usize = 4;

/// Assumed compressed fraction of the raw buffer size.
///
/// The compression ratio reported in statistics and optimization stamps is
/// an estimate against this assumed factor, not a measured figure.
///
/// # Example
///
/// ```rust
/// use config::constants::ASSUMED_COMPRESSION_FACTOR;
///
/// let raw_bytes = 1024.0;
/// let compressed = raw_bytes * ASSUMED_COMPRESSION_FACTOR;
/// assert_eq!(raw_bytes / compressed, 2.0);
/// ```
pub const ASSUMED_COMPRESSION_FACTOR: f64 = 0.5;
