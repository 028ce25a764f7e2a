//! Commands applied at tick boundaries.
//!
//! External collaborators (input wiring, UI timers) never mutate vessels
//! mid-tick. They queue commands; the simulator drains the queue at the
//! start of the next tick, so every tick observes fully materialized state.

use serde::{Deserialize, Serialize};

use crate::config::{MovementConfig, VesselConfig};
use crate::types::{InputState, VesselId};

/// A deferred mutation of the world or of one vessel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WorldCommand {
    /// Register a new vessel before the next update pass.
    AddVessel(VesselConfig),
    /// Drop a vessel from the update list.
    RemoveVessel { vessel: VesselId },
    /// Set a vessel's heading directly (radians, 0 = +z axis).
    SetHeading { vessel: VesselId, heading: f64 },
    /// Set a vessel's signed forward speed.
    SetSpeed { vessel: VesselId, speed: f64 },
    /// Replace the helm input flags of a manually driven vessel.
    /// Ignored for vessels without a manual strategy.
    SetHelmInput { vessel: VesselId, input: InputState },
    /// Replace the vessel's movement strategy.
    AssignStrategy {
        vessel: VesselId,
        movement: MovementConfig,
    },
    /// Remove the strategy; the vessel falls back to dead reckoning.
    ClearStrategy { vessel: VesselId },
}
