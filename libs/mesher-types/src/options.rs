//! # Mesher Options
//!
//! Caller-supplied generation options with shallow merge semantics.
//! Absent fields fall back to system defaults; call-site options override
//! instance defaults field-by-field.

use config::constants::{
    DEFAULT_MAX_FACES, DEFAULT_MAX_VERTICES, DEFAULT_RESOLUTION, SIMPLIFY_FRACTION_HIGH,
    SIMPLIFY_FRACTION_LOW, SIMPLIFY_FRACTION_MEDIUM,
};
use serde::{Deserialize, Serialize};

/// Target quality for simplification and future reconstruction backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    /// Aggressive reduction, smallest output.
    Low,
    /// Balanced reduction.
    #[default]
    Medium,
    /// Conservative reduction, most detail kept.
    High,
}

impl Quality {
    /// Fraction of vertices a simplification pass targets to keep.
    pub fn target_fraction(self) -> f64 {
        match self {
            Quality::Low => SIMPLIFY_FRACTION_LOW,
            Quality::Medium => SIMPLIFY_FRACTION_MEDIUM,
            Quality::High => SIMPLIFY_FRACTION_HIGH,
        }
    }
}

/// Wire-shape options record. All fields optional; see [`ResolvedOptions`]
/// for the defaults applied to absent fields.
///
/// # Example
///
/// ```rust
/// use mesher_types::{MesherOptions, Quality};
///
/// let options = MesherOptions {
///     quality: Some(Quality::High),
///     ..Default::default()
/// };
/// let resolved = options.resolve();
/// assert_eq!(resolved.quality, Quality::High);
/// assert_eq!(resolved.resolution, 128);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MesherOptions {
    /// Reconstruction density for generation backends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<u32>,
    /// Simplification aggressiveness.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<Quality>,
    /// Maximum vertex count accepted from a backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_vertices: Option<usize>,
    /// Maximum face count accepted from a backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_faces: Option<usize>,
}

impl MesherOptions {
    /// Shallow field-by-field merge; `overrides` wins where set.
    pub fn merge(&self, overrides: &MesherOptions) -> MesherOptions {
        MesherOptions {
            resolution: overrides.resolution.or(self.resolution),
            quality: overrides.quality.or(self.quality),
            max_vertices: overrides.max_vertices.or(self.max_vertices),
            max_faces: overrides.max_faces.or(self.max_faces),
        }
    }

    /// Resolves against system defaults.
    pub fn resolve(&self) -> ResolvedOptions {
        ResolvedOptions::default().with_overrides(self)
    }
}

/// Fully-resolved options snapshot. Every stage receives one of these;
/// it is also echoed into mesh metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedOptions {
    pub resolution: u32,
    pub quality: Quality,
    pub max_vertices: usize,
    pub max_faces: usize,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            quality: Quality::Medium,
            max_vertices: DEFAULT_MAX_VERTICES,
            max_faces: DEFAULT_MAX_FACES,
        }
    }
}

impl ResolvedOptions {
    /// Applies set fields of a wire options record over this snapshot.
    pub fn with_overrides(&self, overrides: &MesherOptions) -> ResolvedOptions {
        ResolvedOptions {
            resolution: overrides.resolution.unwrap_or(self.resolution),
            quality: overrides.quality.unwrap_or(self.quality),
            max_vertices: overrides.max_vertices.unwrap_or(self.max_vertices),
            max_faces: overrides.max_faces.unwrap_or(self.max_faces),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_applies_defaults() {
        let resolved = MesherOptions::default().resolve();
        assert_eq!(resolved.resolution, 128);
        assert_eq!(resolved.quality, Quality::Medium);
        assert_eq!(resolved.max_vertices, 100_000);
        assert_eq!(resolved.max_faces, 200_000);
    }

    #[test]
    fn test_merge_call_site_wins() {
        let defaults = MesherOptions {
            resolution: Some(64),
            quality: Some(Quality::Low),
            ..Default::default()
        };
        let call = MesherOptions {
            quality: Some(Quality::High),
            ..Default::default()
        };
        let merged = defaults.merge(&call);
        assert_eq!(merged.resolution, Some(64));
        assert_eq!(merged.quality, Some(Quality::High));
        assert_eq!(merged.max_vertices, None);
    }

    #[test]
    fn test_with_overrides_is_field_by_field() {
        let base = ResolvedOptions::default();
        let overrides = MesherOptions {
            max_vertices: Some(10),
            ..Default::default()
        };
        let resolved = base.with_overrides(&overrides);
        assert_eq!(resolved.max_vertices, 10);
        assert_eq!(resolved.max_faces, 200_000);
    }

    #[test]
    fn test_quality_fractions() {
        assert!(Quality::Low.target_fraction() < Quality::Medium.target_fraction());
        assert!(Quality::Medium.target_fraction() < Quality::High.target_fraction());
    }

    #[test]
    fn test_wire_field_names() {
        let options = MesherOptions {
            resolution: Some(256),
            quality: Some(Quality::Medium),
            max_vertices: Some(1000),
            max_faces: Some(2000),
        };
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["resolution"], 256);
        assert_eq!(json["quality"], "medium");
        assert_eq!(json["maxVertices"], 1000);
        assert_eq!(json["maxFaces"], 2000);
    }

    #[test]
    fn test_unrecognized_fields_are_ignored_and_absent_ones_fall_back() {
        let options: MesherOptions =
            serde_json::from_str(r#"{"quality":"low","unknownKnob":7}"#).unwrap();
        let resolved = options.resolve();
        assert_eq!(resolved.quality, Quality::Low);
        assert_eq!(resolved.resolution, 128);
    }
}
