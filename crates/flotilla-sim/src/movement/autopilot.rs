//! Waypoint-following autopilot.

use std::f64::consts::{PI, TAU};

use glam::DVec2;

use flotilla_core::config::MovementConfig;
use flotilla_core::constants::{
    AUTOPILOT_ARRIVAL_THRESHOLD, AUTOPILOT_CRUISE_SPEED, AUTOPILOT_HEADING_DEADBAND,
    AUTOPILOT_ROTATION_SPEED,
};

use crate::movement::StrategyEvent;
use crate::vessel::Kinematics;

/// Movement strategy that steers through an ordered waypoint sequence.
///
/// Waypoints are horizontal-plane (x, z) coordinates. While the sequence is
/// non-empty `current_index` stays in bounds. In loop mode the circuit runs
/// indefinitely; otherwise the vessel ends up holding near the final
/// waypoint, re-aiming at it whenever it drifts out of the threshold.
#[derive(Debug, Clone)]
pub struct Autopilot {
    waypoints: Vec<DVec2>,
    current_index: usize,
    loop_mode: bool,
    cruise_speed: f64,
    rotation_speed: f64,
    arrival_threshold: f64,
}

impl Autopilot {
    pub fn new(waypoints: Vec<DVec2>) -> Self {
        Self {
            waypoints,
            current_index: 0,
            loop_mode: true,
            cruise_speed: AUTOPILOT_CRUISE_SPEED,
            rotation_speed: AUTOPILOT_ROTATION_SPEED,
            arrival_threshold: AUTOPILOT_ARRIVAL_THRESHOLD,
        }
    }

    pub fn from_config(config: &MovementConfig) -> Self {
        Self {
            waypoints: config
                .waypoints
                .iter()
                .map(|&[x, z]| DVec2::new(x, z))
                .collect(),
            current_index: 0,
            loop_mode: config.loop_mode,
            cruise_speed: config.speed.unwrap_or(AUTOPILOT_CRUISE_SPEED),
            rotation_speed: config.rotation_speed.unwrap_or(AUTOPILOT_ROTATION_SPEED),
            arrival_threshold: config.waypoint_threshold.unwrap_or(AUTOPILOT_ARRIVAL_THRESHOLD),
        }
    }

    pub fn add_waypoint(&mut self, x: f64, z: f64) {
        self.waypoints.push(DVec2::new(x, z));
    }

    /// Replace the route and restart from its first waypoint.
    pub fn set_waypoints(&mut self, waypoints: Vec<DVec2>) {
        self.waypoints = waypoints;
        self.current_index = 0;
    }

    pub fn current_waypoint(&self) -> Option<DVec2> {
        self.waypoints.get(self.current_index).copied()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn loop_mode(&self) -> bool {
        self.loop_mode
    }

    /// Step to the next waypoint: wrap when looping, clamp at the last
    /// index otherwise.
    fn advance_waypoint(&mut self) {
        if self.waypoints.is_empty() {
            return;
        }
        self.current_index += 1;
        if self.current_index >= self.waypoints.len() {
            self.current_index = if self.loop_mode {
                0
            } else {
                self.waypoints.len() - 1
            };
        }
    }

    pub fn drive(&mut self, kin: &mut Kinematics) -> Option<StrategyEvent> {
        let target = self.current_waypoint()?;
        let to_target = target - DVec2::new(kin.position.x, kin.position.z);

        // Arrival consumes the tick: retarget, no motion.
        if to_target.length() < self.arrival_threshold {
            let previous = self.current_index;
            self.advance_waypoint();
            if self.current_index != previous {
                return Some(StrategyEvent::WaypointReached {
                    waypoint_index: self.current_index,
                });
            }
            return None;
        }

        // Waypoints are (x, z); heading 0 points along +z.
        let target_heading = to_target.x.atan2(to_target.y);
        let mut diff = target_heading - kin.heading;
        while diff > PI {
            diff -= TAU;
        }
        while diff < -PI {
            diff += TAU;
        }

        if diff.abs() > AUTOPILOT_HEADING_DEADBAND {
            kin.heading += diff.signum() * self.rotation_speed.min(diff.abs());
        }

        kin.position.x += kin.heading.sin() * self.cruise_speed;
        kin.position.z += kin.heading.cos() * self.cruise_speed;
        None
    }
}
