//! # Pipeline Errors
//!
//! Error types for mesh generation, validation, and orchestration.
//!
//! Validation errors are returned as values, never panicked, so the
//! orchestrator can branch without unwinding. Generation errors are
//! converted at the orchestrator boundary into the same failure shape.

use thiserror::Error;

/// Errors reported by mesh validation.
///
/// Checks run in a fixed order and the first failure is returned; each
/// variant names the offending index where applicable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    // Structural errors
    /// Mesh id is empty
    #[error("mesh id cannot be empty")]
    MissingId,

    /// Vertex buffer is empty
    #[error("vertices array cannot be empty")]
    EmptyVertices,

    /// Vertex buffer length is not a multiple of 3
    #[error("vertices array length must be a multiple of 3 (got {0})")]
    VerticesNotTriples(usize),

    /// Index buffer is empty
    #[error("indices array cannot be empty")]
    EmptyIndices,

    /// Index buffer length is not a multiple of 3
    #[error("indices array length must be a multiple of 3 (got {0})")]
    IndicesNotTriples(usize),

    /// Normal buffer length does not match the vertex count
    #[error("normals array length must match vertex count (expected {expected}, got {actual})")]
    NormalCountMismatch { expected: usize, actual: usize },

    /// UV buffer length does not match the vertex count
    #[error("uvs array length must match vertex count (expected {expected}, got {actual})")]
    UvCountMismatch { expected: usize, actual: usize },

    /// Provenance fields are internally inconsistent
    #[error("metadata is inconsistent: {message}")]
    InconsistentMetadata { message: String },

    // Bounds errors
    /// A triangle references a non-existent vertex
    #[error("index out of bounds at index {index}: {value} (vertex count: {vertex_count})")]
    IndexOutOfBounds {
        index: usize,
        value: u32,
        vertex_count: usize,
    },

    // Geometric errors
    /// NaN or infinite vertex coordinate
    #[error("invalid vertex value at index {index}")]
    NonFiniteVertex { index: usize },

    /// NaN or infinite normal component
    #[error("invalid normal value at index {index}")]
    NonFiniteNormal { index: usize },

    /// Normal length deviates from 1.0 beyond tolerance
    #[error("normal at vertex {vertex} is not unit length (length {length})")]
    NonUnitNormal { vertex: usize, length: f64 },

    /// NaN or infinite UV component
    #[error("invalid uv value at index {index}")]
    NonFiniteUv { index: usize },

    /// Triangle area below the degeneracy threshold
    #[error("degenerate face at index {face} (area {area})")]
    DegenerateFace { face: usize, area: f64 },

    /// Undirected edge with odd triangle incidence
    #[error("non-manifold edge ({a}, {b}) with incidence count {count}")]
    NonManifoldEdge { a: u32, b: u32, count: usize },
}

impl ValidationError {
    /// Creates an inconsistent-metadata error.
    pub fn inconsistent_metadata(message: impl Into<String>) -> Self {
        Self::InconsistentMetadata {
            message: message.into(),
        }
    }
}

/// Errors reported by generation backends.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerateError {
    /// Input rejected before synthesis started
    #[error("invalid generation input: {message}")]
    InvalidInput { message: String },

    /// Backend failed during synthesis (I/O, decode, inference)
    #[error("generation backend failed: {message}")]
    Backend { message: String },
}

impl GenerateError {
    /// Creates an invalid-input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates a backend failure error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

/// Orchestrator-level error: any stage failure, reported once in one shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MesherError {
    /// Generation error from the backend
    #[error("Generation error: {0}")]
    Generation(#[from] GenerateError),

    /// Validation error from the validator
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Generated mesh exceeds the vertex limit
    #[error("too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Generated mesh exceeds the face limit
    #[error("too many faces: {count} (max: {max})")]
    TooManyFaces { count: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_message_names_offender() {
        let error = ValidationError::IndexOutOfBounds {
            index: 4,
            value: 9,
            vertex_count: 8,
        };
        let message = error.to_string();
        assert!(message.contains("out of bounds"));
        assert!(message.contains('9'));
        assert!(message.contains('8'));
    }

    #[test]
    fn test_mesher_error_wraps_stages() {
        let error: MesherError = ValidationError::EmptyVertices.into();
        assert!(error.to_string().starts_with("Validation error:"));

        let error: MesherError = GenerateError::backend("decode failed").into();
        assert!(error.to_string().starts_with("Generation error:"));
    }
}
