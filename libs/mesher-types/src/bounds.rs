//! # Axis-Aligned Bounding Box
//!
//! Component-wise min/max bounds over vertex positions.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box.
///
/// Serializes as `{ "min": [x, y, z], "max": [x, y, z] }` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Component-wise minimum corner.
    pub min: DVec3,
    /// Component-wise maximum corner.
    pub max: DVec3,
}

impl Aabb {
    /// Empty box at the origin, used for meshes with no vertices.
    pub const ZERO: Aabb = Aabb {
        min: DVec3::ZERO,
        max: DVec3::ZERO,
    };

    /// Creates a bounding box from min/max corners.
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Grows the box to include a point.
    pub fn include(&mut self, point: DVec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Size of the box along each axis.
    #[inline]
    pub fn extent(&self) -> DVec3 {
        self.max - self.min
    }
}
