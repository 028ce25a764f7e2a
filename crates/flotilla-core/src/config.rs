//! Construction-time configuration objects.
//!
//! These are the options records consumed when building vessels, obstacles,
//! and whole scenarios. Fields left `None` fall back to the class preset.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::VesselClass;
use crate::types::{Extent, Position};

/// A configuration value was out of its documented range.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("vessel physical factor `{name}` must be positive, got {value}")]
    NonPositiveFactor { name: &'static str, value: f64 },
    #[error("obstacle extent must have positive spans")]
    DegenerateExtent,
}

/// Options for creating a vessel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VesselConfig {
    pub class: VesselClass,
    pub position: Position,
    /// Hull spans; `None` uses the class preset.
    pub size: Option<Extent>,
    /// Hull color (0xRRGGBB). Rendering-only; the core carries but ignores it.
    pub color: u32,
    /// Initial signed forward speed; `None` uses the class preset.
    pub speed: Option<f64>,
    /// Initial heading in radians (0 = +z axis).
    pub direction: f64,
    pub buoyancy_factor: Option<f64>,
    pub pitch_factor: Option<f64>,
    pub roll_factor: Option<f64>,
    /// Movement strategy selection; `None` means straight-line dead reckoning.
    pub movement: Option<MovementConfig>,
}

impl Default for VesselConfig {
    fn default() -> Self {
        Self {
            class: VesselClass::default(),
            position: Position::default(),
            size: None,
            color: 0xAAAAAA,
            speed: None,
            direction: 0.0,
            buoyancy_factor: None,
            pitch_factor: None,
            roll_factor: None,
            movement: None,
        }
    }
}

impl VesselConfig {
    /// Check the physical factors that must stay positive multipliers.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("buoyancy_factor", self.buoyancy_factor),
            ("pitch_factor", self.pitch_factor),
            ("roll_factor", self.roll_factor),
        ] {
            if let Some(value) = value {
                if value <= 0.0 {
                    return Err(ConfigError::NonPositiveFactor { name, value });
                }
            }
        }
        Ok(())
    }
}

/// Movement-strategy selection: a string key plus strategy options.
///
/// `kind` is `"manual"` or `"auto"`; an unrecognized key logs a warning and
/// assigns no strategy (the vessel dead-reckons).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    pub kind: String,
    /// Autopilot route: horizontal-plane (x, z) pairs in visit order.
    pub waypoints: Vec<[f64; 2]>,
    /// Autopilot cruise speed.
    pub speed: Option<f64>,
    pub rotation_speed: Option<f64>,
    pub waypoint_threshold: Option<f64>,
    /// Wrap to the first waypoint after the last (autopilot only).
    pub loop_mode: bool,
    /// Manual helm tuning.
    pub acceleration: Option<f64>,
    pub max_speed: Option<f64>,
    pub decay: Option<f64>,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            kind: String::new(),
            waypoints: Vec::new(),
            speed: None,
            rotation_speed: None,
            waypoint_threshold: None,
            loop_mode: true,
            acceleration: None,
            max_speed: None,
            decay: None,
        }
    }
}

impl MovementConfig {
    /// Manual helm with default tuning.
    pub fn manual() -> Self {
        Self {
            kind: "manual".to_string(),
            ..Self::default()
        }
    }

    /// Looping autopilot over the given route.
    pub fn auto(waypoints: Vec<[f64; 2]>) -> Self {
        Self {
            kind: "auto".to_string(),
            waypoints,
            ..Self::default()
        }
    }
}

/// Wave field parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct OceanConfig {
    /// Radius beyond which waves are fully damped to 30% amplitude.
    pub radius: f64,
    /// Base wave height.
    pub amplitude: f64,
    /// Base phase speed.
    pub speed: f64,
}

impl Default for OceanConfig {
    fn default() -> Self {
        Self {
            radius: crate::constants::OCEAN_RADIUS,
            amplitude: crate::constants::OCEAN_AMPLITUDE,
            speed: crate::constants::OCEAN_SPEED,
        }
    }
}

/// A static obstacle (island) placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleConfig {
    pub position: Position,
    pub size: Extent,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            position: Position::default(),
            size: Extent::new(50.0, 50.0, 20.0),
        }
    }
}

impl ObstacleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size.length <= 0.0 || self.size.width <= 0.0 || self.size.height <= 0.0 {
            return Err(ConfigError::DegenerateExtent);
        }
        Ok(())
    }
}

/// Periodic random perturbation of strategy-less vessels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftConfig {
    pub interval_secs: f64,
    pub heading_chance: f64,
    pub speed_chance: f64,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            interval_secs: crate::constants::DRIFT_INTERVAL_SECS,
            heading_chance: crate::constants::DRIFT_HEADING_CHANCE,
            speed_chance: crate::constants::DRIFT_SPEED_CHANCE,
        }
    }
}

/// A complete world description, loadable from JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// `None` runs the degraded mode: vessels move but never bob or tilt.
    pub ocean: Option<OceanConfig>,
    pub vessels: Vec<VesselConfig>,
    pub obstacles: Vec<ObstacleConfig>,
    pub drift: Option<DriftConfig>,
}
