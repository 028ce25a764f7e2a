//! World state snapshot — the read-only surface produced after each tick.
//!
//! Rendering, camera, and minimap layers consume these views; they feed
//! back only through `WorldCommand`s.

use serde::{Deserialize, Serialize};

use crate::enums::VesselClass;
use crate::events::SimEvent;
use crate::types::{Position, SimTime, VesselId};

/// Complete visible state after one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub time: SimTime,
    pub vessels: Vec<VesselView>,
    pub events: Vec<SimEvent>,
}

/// One vessel's pose as of the end of the tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VesselView {
    pub id: VesselId,
    pub class: VesselClass,
    pub position: Position,
    /// Heading in radians (0 = +z axis); equals the yaw.
    pub heading: f64,
    /// Signed forward speed (units per tick).
    pub speed: f64,
    pub pitch: f64,
    pub roll: f64,
}
