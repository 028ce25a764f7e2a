//! Scenario definitions — JSON-loadable world descriptions plus a
//! built-in demo scene.

use std::f64::consts::FRAC_PI_4;

use thiserror::Error;

use flotilla_core::config::{
    ConfigError, DriftConfig, MovementConfig, ObstacleConfig, ScenarioConfig, VesselConfig,
};
use flotilla_core::enums::VesselClass;
use flotilla_core::types::{Extent, Position};

use crate::engine::{SimConfig, Simulator};

/// A scenario description failed to load.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to parse scenario: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid scenario entry: {0}")]
    Config(#[from] ConfigError),
}

/// Parse a scenario description from JSON.
pub fn load_scenario(json: &str) -> Result<ScenarioConfig, ScenarioError> {
    let scenario: ScenarioConfig = serde_json::from_str(json)?;
    for vessel in &scenario.vessels {
        vessel.validate()?;
    }
    for obstacle in &scenario.obstacles {
        obstacle.validate()?;
    }
    Ok(scenario)
}

/// Build a simulator from a scenario description.
pub fn build(scenario: ScenarioConfig, seed: u64) -> Simulator {
    let mut sim = Simulator::new(SimConfig {
        seed,
        ocean: scenario.ocean,
        drift: scenario.drift,
    });
    for obstacle in scenario.obstacles {
        sim.add_obstacle(obstacle);
    }
    for vessel in scenario.vessels {
        sim.add_vessel(vessel);
    }
    sim
}

/// Built-in demo: a crewed vessel near the origin, a looping patrol
/// circuit, four drifting escorts, and a pair of islands.
pub fn harbor_patrol() -> ScenarioConfig {
    let mut vessels = vec![
        // Flagship under manual helm.
        VesselConfig {
            position: Position::new(0.0, 0.0, 0.0),
            size: Some(Extent::new(15.0, 7.0, 5.0)),
            color: 0xDD4444,
            direction: FRAC_PI_4,
            buoyancy_factor: Some(1.2),
            pitch_factor: Some(1.2),
            roll_factor: Some(1.3),
            movement: Some(MovementConfig::manual()),
            ..Default::default()
        },
        // Patrol boat running a square circuit around the harbor.
        VesselConfig {
            class: VesselClass::Patrol,
            position: Position::new(120.0, 0.0, 0.0),
            color: 0x3388DD,
            movement: Some(MovementConfig::auto(vec![
                [120.0, 0.0],
                [120.0, 120.0],
                [-120.0, 120.0],
                [-120.0, 0.0],
            ])),
            ..Default::default()
        },
    ];

    // Drifting escorts, left to the drift schedule.
    let escort_colors = [0x3388DD, 0x55AA33, 0x997722, 0xAA5500];
    let escort_spots = [(40.0, 25.0), (-35.0, 40.0), (-45.0, -30.0), (30.0, -45.0)];
    for (&color, &(x, z)) in escort_colors.iter().zip(&escort_spots) {
        vessels.push(VesselConfig {
            class: VesselClass::Sailing,
            position: Position::new(x, 0.0, z),
            color,
            speed: Some(0.1),
            direction: (x + z) * 0.05,
            ..Default::default()
        });
    }

    ScenarioConfig {
        ocean: Some(Default::default()),
        vessels,
        obstacles: vec![
            ObstacleConfig {
                position: Position::new(250.0, 0.0, 180.0),
                size: Extent::new(60.0, 60.0, 25.0),
            },
            ObstacleConfig {
                position: Position::new(-300.0, 0.0, -150.0),
                size: Extent::new(40.0, 40.0, 18.0),
            },
        ],
        drift: Some(DriftConfig::default()),
    }
}
