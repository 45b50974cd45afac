//! # Response Envelope
//!
//! Uniform success/error record returned at the pipeline boundary.
//! Every stage failure, whether from generation or validation, surfaces
//! through this one shape.

use crate::mesh::Mesh;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Wire envelope: `{ success, mesh?, error? }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesh: Option<Mesh>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MeshResponse {
    /// Successful envelope carrying a mesh.
    pub fn ok(mesh: Mesh) -> Self {
        Self {
            success: true,
            mesh: Some(mesh),
            error: None,
        }
    }

    /// Failed envelope carrying an error message; never a partial mesh.
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            mesh: None,
            error: Some(message.into()),
        }
    }

    /// Converts a pipeline result into the envelope.
    pub fn from_result<E: Display>(result: Result<Mesh, E>) -> Self {
        match result {
            Ok(mesh) => Self::ok(mesh),
            Err(error) => Self::err(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_err_envelope_has_no_mesh() {
        let response = MeshResponse::err("Validation error: empty vertices");
        assert!(!response.success);
        assert!(response.mesh.is_none());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], false);
        assert!(json.get("mesh").is_none());
        assert_eq!(json["error"], "Validation error: empty vertices");
    }

    #[test]
    fn test_from_result_err() {
        let result: Result<Mesh, String> = Err("backend unreachable".into());
        let response = MeshResponse::from_result(result);
        assert_eq!(response.error.as_deref(), Some("backend unreachable"));
    }
}
