//! Scheduled drift perturbation for strategy-less vessels.
//!
//! The original host fired an uncoordinated wall-clock timer that reassigned
//! headings between frames. Here the perturbation runs at the tick boundary
//! under the engine's seeded rng, so ticks stay deterministic and testable.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use flotilla_core::config::DriftConfig;
use flotilla_core::constants::{
    DRIFT_HEADING_JITTER, DRIFT_SPEED_MIN, DRIFT_SPEED_SPAN, TICK_RATE,
};
use flotilla_core::events::SimEvent;

use crate::vessel::Vessel;

/// Periodic random heading/speed changes for vessels without a strategy.
#[derive(Debug, Clone, Copy)]
pub struct DriftSchedule {
    interval_ticks: u64,
    heading_chance: f64,
    speed_chance: f64,
}

impl DriftSchedule {
    pub fn from_config(config: &DriftConfig) -> Self {
        let interval_ticks = (config.interval_secs * TICK_RATE as f64).round() as u64;
        Self {
            interval_ticks: interval_ticks.max(1),
            heading_chance: config.heading_chance,
            speed_chance: config.speed_chance,
        }
    }

    pub fn interval_ticks(&self) -> u64 {
        self.interval_ticks
    }

    /// Apply due perturbations. Runs only when `tick` lands on the interval.
    pub fn run(
        &self,
        vessels: &mut [Vessel],
        rng: &mut ChaCha8Rng,
        tick: u64,
        events: &mut Vec<SimEvent>,
    ) {
        if tick == 0 || tick % self.interval_ticks != 0 {
            return;
        }

        for vessel in vessels.iter_mut().filter(|v| !v.has_strategy()) {
            let mut drifted = false;

            if rng.gen::<f64>() < self.heading_chance {
                let jitter = (rng.gen::<f64>() - 0.5) * DRIFT_HEADING_JITTER;
                vessel.set_direction(vessel.heading() + jitter);
                drifted = true;
            }

            if rng.gen::<f64>() < self.speed_chance {
                vessel.set_speed(DRIFT_SPEED_MIN + rng.gen::<f64>() * DRIFT_SPEED_SPAN);
                drifted = true;
            }

            if drifted {
                events.push(SimEvent::HeadingDrift {
                    vessel: vessel.id(),
                });
            }
        }
    }
}
