//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Vessel hull class.
///
/// The physics core is class-independent: the class only selects
/// construction presets and tells the rendering layer which mesh to build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VesselClass {
    /// Plain hull with neutral response factors.
    #[default]
    Standard,
    /// Fast patrol boat: high buoyancy, sensitive pitch.
    Patrol,
    /// Heavy cargo vessel: slow, damped response.
    Cargo,
    /// Sailing ship: pronounced roll.
    Sailing,
    /// Attack drone boat: fast and stable.
    Drone,
}
