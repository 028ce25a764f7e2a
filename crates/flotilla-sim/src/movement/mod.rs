//! Pluggable per-tick movement strategies.
//!
//! A closed set of variants behind a single `drive` operation. Strategies
//! mutate heading, speed, and horizontal position only; vertical position
//! and attitude belong to the vessel's physics step.

mod autopilot;
mod manual;

pub use autopilot::Autopilot;
pub use manual::ManualHelm;

use flotilla_core::config::MovementConfig;

use crate::vessel::Kinematics;

/// Raised by a strategy during `drive`; the engine attaches the vessel id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyEvent {
    /// Arrived at a waypoint; now steering for `waypoint_index`.
    WaypointReached { waypoint_index: usize },
}

/// A per-tick motion policy.
#[derive(Debug, Clone)]
pub enum MovementStrategy {
    Manual(ManualHelm),
    Auto(Autopilot),
}

impl MovementStrategy {
    /// Advance one tick of horizontal motion.
    ///
    /// `t` is the simulation clock; the built-in strategies integrate per
    /// tick and ignore it.
    pub fn drive(&mut self, kin: &mut Kinematics, _t: f64) -> Option<StrategyEvent> {
        match self {
            MovementStrategy::Manual(helm) => {
                helm.drive(kin);
                None
            }
            MovementStrategy::Auto(autopilot) => autopilot.drive(kin),
        }
    }
}

/// Build a strategy from its configuration record.
///
/// An unrecognized kind is not an error: a warning is logged and no
/// strategy is assigned, leaving the vessel on straight-line dead reckoning.
pub fn build_strategy(config: &MovementConfig) -> Option<MovementStrategy> {
    match config.kind.to_ascii_lowercase().as_str() {
        "manual" => Some(MovementStrategy::Manual(ManualHelm::from_config(config))),
        "auto" => Some(MovementStrategy::Auto(Autopilot::from_config(config))),
        other => {
            tracing::warn!(kind = other, "unknown movement kind, no strategy assigned");
            None
        }
    }
}
