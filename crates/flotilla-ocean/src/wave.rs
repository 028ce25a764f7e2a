//! Analytic wave field: height and slope at any point and time.

use serde::{Deserialize, Serialize};

use flotilla_core::config::OceanConfig;
use flotilla_core::constants::*;

/// Stateless ocean surface: three traveling plane waves with distinct
/// spatial frequencies and phase speeds, damped radially so the sea
/// flattens away from the center.
///
/// Identical inputs always yield identical outputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveField {
    radius: f64,
    amplitude: f64,
    speed: f64,
}

/// Approximate surface gradient at a point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WaveSlope {
    pub slope_x: f64,
    pub slope_z: f64,
}

impl Default for WaveField {
    fn default() -> Self {
        Self::from_config(&OceanConfig::default())
    }
}

impl WaveField {
    pub fn new(radius: f64, amplitude: f64, speed: f64) -> Self {
        Self {
            radius,
            amplitude,
            speed,
        }
    }

    pub fn from_config(config: &OceanConfig) -> Self {
        Self::new(config.radius, config.amplitude, config.speed)
    }

    /// Base wave height.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Surface height at (x, z) at time `t` seconds.
    ///
    /// Bounded by ±1.3 × amplitude.
    pub fn height(&self, x: f64, z: f64, t: f64) -> f64 {
        let wf = self.wave_factor(x, z);
        (x * WAVE_FREQ_X + t * self.speed).sin() * self.amplitude * WAVE_WEIGHT_X * wf
            + (z * WAVE_FREQ_Z + t * self.speed * WAVE_PHASE_Z).sin()
                * self.amplitude
                * WAVE_WEIGHT_Z
                * wf
            + ((x + z) * WAVE_FREQ_DIAG + t * self.speed * WAVE_PHASE_DIAG).sin()
                * self.amplitude
                * WAVE_WEIGHT_DIAG
                * wf
    }

    /// Approximate surface slope at (x, z) at time `t` seconds.
    ///
    /// Uses the cosine counterparts of the dominant height terms with fixed
    /// magnitude constants. This is a visual tuning, intentionally not the
    /// true partial derivative of `height` — keep the constants as they are.
    pub fn slope(&self, x: f64, z: f64, t: f64) -> WaveSlope {
        let wf = self.wave_factor(x, z);
        let diagonal = ((x + z) * WAVE_FREQ_DIAG + t * self.speed * WAVE_PHASE_DIAG).cos()
            * self.amplitude
            * WAVE_SLOPE_DIAG
            * wf;

        let slope_x = (x * WAVE_FREQ_X + t * self.speed).cos() * self.amplitude * WAVE_SLOPE_MAIN * wf
            + diagonal;
        let slope_z = (z * WAVE_FREQ_Z + t * self.speed * WAVE_PHASE_Z).cos()
            * self.amplitude
            * WAVE_SLOPE_MAIN
            * wf
            + diagonal;

        WaveSlope { slope_x, slope_z }
    }

    /// Radial damping: 1.0 at the center, down to 0.3 at and beyond `radius`.
    fn wave_factor(&self, x: f64, z: f64) -> f64 {
        let distance = (x * x + z * z).sqrt();
        1.0 - WAVE_RADIAL_DAMPING * (distance / self.radius).min(1.0)
    }
}
