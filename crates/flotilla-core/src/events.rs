//! Informational events emitted during a tick.
//!
//! Collected by the engine and carried on the snapshot; consumers
//! (UI, gameplay layers) decide what to do with them.

use serde::{Deserialize, Serialize};

use crate::types::VesselId;

/// Something noteworthy that happened during the tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimEvent {
    /// An autopilot vessel reached a waypoint; it now steers for
    /// `waypoint_index`.
    WaypointReached {
        vessel: VesselId,
        waypoint_index: usize,
    },
    /// The drift schedule perturbed this vessel's heading or speed.
    HeadingDrift { vessel: VesselId },
}
