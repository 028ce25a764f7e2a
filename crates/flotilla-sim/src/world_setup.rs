//! Vessel construction presets and fleet placement.

use std::f64::consts::TAU;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use flotilla_core::config::VesselConfig;
use flotilla_core::enums::VesselClass;
use flotilla_core::types::{Extent, Position, VesselId};

use crate::movement;
use crate::vessel::Vessel;

/// Default hull parameters per class: (size, speed, buoyancy, pitch, roll).
pub fn class_preset(class: VesselClass) -> (Extent, f64, f64, f64, f64) {
    match class {
        VesselClass::Standard => (Extent::new(10.0, 5.0, 3.0), 0.0, 1.2, 1.0, 1.0),
        VesselClass::Patrol => (Extent::new(15.0, 6.0, 4.0), 0.5, 1.3, 1.4, 1.2),
        VesselClass::Cargo => (Extent::new(25.0, 10.0, 8.0), 0.08, 1.1, 0.8, 0.7),
        VesselClass::Sailing => (Extent::new(20.0, 6.0, 5.0), 0.12, 1.25, 1.3, 1.5),
        VesselClass::Drone => (Extent::new(12.0, 6.0, 3.0), 0.2, 1.2, 0.9, 0.8),
    }
}

/// Build a vessel from its configuration, filling gaps from the class preset.
pub fn build_vessel(id: VesselId, config: &VesselConfig) -> Vessel {
    let (size, speed, buoyancy, pitch, roll) = class_preset(config.class);
    let strategy = config.movement.as_ref().and_then(movement::build_strategy);

    let mut vessel = Vessel::new(
        id,
        config.class,
        config.position,
        config.size.unwrap_or(size),
        config.color,
        config.buoyancy_factor.unwrap_or(buoyancy),
        config.pitch_factor.unwrap_or(pitch),
        config.roll_factor.unwrap_or(roll),
    );
    vessel.set_direction(config.direction);
    vessel.set_speed(config.speed.unwrap_or(speed));
    vessel.set_movement_strategy(strategy);
    vessel
}

/// Generate vessel configs placed in a ring around `center`, at a random
/// distance between half and full `radius`, with random initial headings.
/// A class of `None` draws a random class per vessel (mixed fleet).
pub fn fleet_configs(
    rng: &mut ChaCha8Rng,
    class: Option<VesselClass>,
    count: usize,
    center: (f64, f64),
    radius: f64,
) -> Vec<VesselConfig> {
    const MIXED: [VesselClass; 4] = [
        VesselClass::Patrol,
        VesselClass::Cargo,
        VesselClass::Sailing,
        VesselClass::Drone,
    ];

    (0..count)
        .map(|i| {
            let angle = i as f64 / count as f64 * TAU;
            let distance = radius * (0.5 + rng.gen::<f64>() * 0.5);
            let x = center.0 + angle.cos() * distance;
            let z = center.1 + angle.sin() * distance;

            VesselConfig {
                class: class.unwrap_or_else(|| MIXED[rng.gen_range(0..MIXED.len())]),
                position: Position::new(x, 0.0, z),
                direction: rng.gen::<f64>() * TAU,
                ..Default::default()
            }
        })
        .collect()
}
