//! Axis-aligned bounding boxes and advisory overlap queries.
//!
//! Queries are purely boolean: no penetration depth, no resolution.
//! Consumers (gameplay layers outside this workspace) decide what to do
//! with a positive result.

use serde::{Deserialize, Serialize};

use flotilla_core::config::ObstacleConfig;
use flotilla_core::types::{Extent, Position};

/// Axis-aligned box in simulation space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Position,
    pub max: Position,
}

impl Aabb {
    pub fn new(min: Position, max: Position) -> Self {
        Self { min, max }
    }

    /// Box centered at `center` with full spans on each axis.
    pub fn from_center_spans(center: Position, x_span: f64, y_span: f64, z_span: f64) -> Self {
        Self {
            min: Position::new(
                center.x - x_span / 2.0,
                center.y - y_span / 2.0,
                center.z - z_span / 2.0,
            ),
            max: Position::new(
                center.x + x_span / 2.0,
                center.y + y_span / 2.0,
                center.z + z_span / 2.0,
            ),
        }
    }

    /// Box around `center` for an extent (x = length, y = height, z = width).
    pub fn from_center_extent(center: Position, extent: &Extent) -> Self {
        Self::from_center_spans(center, extent.length, extent.height, extent.width)
    }

    /// True iff the boxes overlap on all three axes. Touching faces count.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }
}

/// Advisory overlap test between two boxes.
pub fn check_collision(a: &Aabb, b: &Aabb) -> bool {
    a.intersects(b)
}

/// A static obstacle (island).
///
/// The bounding box is computed once at creation; the object never moves,
/// so recomputing would yield the same box.
#[derive(Debug, Clone)]
pub struct Obstacle {
    position: Position,
    size: Extent,
    collider: Aabb,
}

impl Obstacle {
    pub fn new(position: Position, size: Extent) -> Self {
        let collider = Aabb::from_center_extent(position, &size);
        Self {
            position,
            size,
            collider,
        }
    }

    pub fn from_config(config: &ObstacleConfig) -> Self {
        Self::new(config.position, config.size)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn size(&self) -> Extent {
        self.size
    }

    pub fn collider(&self) -> &Aabb {
        &self.collider
    }

    pub fn check_collision(&self, other: &Aabb) -> bool {
        self.collider.intersects(other)
    }
}
