//! Manual helm: externally supplied input flags drive thrust and turning.

use flotilla_core::config::MovementConfig;
use flotilla_core::constants::{
    HELM_ACCELERATION, HELM_DECAY, HELM_MAX_SPEED, HELM_ROTATION_SPEED, HELM_SPEED_EPSILON,
};
use flotilla_core::types::InputState;

use crate::vessel::Kinematics;

/// Movement strategy driven by helm input flags.
///
/// The input record is replaced wholesale between ticks (via
/// `WorldCommand::SetHelmInput`); the strategy keeps no other state.
#[derive(Debug, Clone)]
pub struct ManualHelm {
    input: InputState,
    acceleration: f64,
    max_speed: f64,
    rotation_speed: f64,
    /// Per-tick speed multiplier applied while no thrust flag is held.
    decay: f64,
}

impl Default for ManualHelm {
    fn default() -> Self {
        Self {
            input: InputState::default(),
            acceleration: HELM_ACCELERATION,
            max_speed: HELM_MAX_SPEED,
            rotation_speed: HELM_ROTATION_SPEED,
            decay: HELM_DECAY,
        }
    }
}

impl ManualHelm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &MovementConfig) -> Self {
        Self {
            input: InputState::default(),
            acceleration: config.acceleration.unwrap_or(HELM_ACCELERATION),
            max_speed: config.max_speed.unwrap_or(HELM_MAX_SPEED),
            rotation_speed: config.rotation_speed.unwrap_or(HELM_ROTATION_SPEED),
            decay: config.decay.unwrap_or(HELM_DECAY),
        }
    }

    pub fn set_input(&mut self, input: InputState) {
        self.input = input;
    }

    pub fn input(&self) -> InputState {
        self.input
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    pub fn drive(&mut self, kin: &mut Kinematics) {
        if self.input.forward {
            kin.speed = (kin.speed + self.acceleration).min(self.max_speed);
        } else if self.input.backward {
            kin.speed = (kin.speed - self.acceleration).max(-self.max_speed / 2.0);
        } else {
            kin.speed *= self.decay;
            if kin.speed.abs() < HELM_SPEED_EPSILON {
                kin.speed = 0.0;
            }
        }

        // Faster vessel, wider turn radius.
        if self.input.left {
            kin.heading += self.turn_rate(kin.speed);
        }
        if self.input.right {
            kin.heading -= self.turn_rate(kin.speed);
        }

        if kin.speed != 0.0 {
            kin.position.x += kin.heading.sin() * kin.speed;
            kin.position.z += kin.heading.cos() * kin.speed;
        }
    }

    fn turn_rate(&self, speed: f64) -> f64 {
        self.rotation_speed * (1.0 - speed.abs() / self.max_speed * 0.5)
    }
}
