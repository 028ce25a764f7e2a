//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz) — matched to the host display cadence.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Ocean defaults ---

/// Default radius of the animated ocean disc (world units).
pub const OCEAN_RADIUS: f64 = 1000.0;

/// Default base wave height.
pub const OCEAN_AMPLITUDE: f64 = 5.0;

/// Default wave phase speed.
pub const OCEAN_SPEED: f64 = 1.2;

// --- Wave shape ---
//
// Three traveling plane waves summed per point. The slope constants are a
// visual tuning and deliberately do NOT match the true height gradient.

/// Spatial frequency of the x-axis wave term.
pub const WAVE_FREQ_X: f64 = 0.07;

/// Spatial frequency of the z-axis wave term.
pub const WAVE_FREQ_Z: f64 = 0.05;

/// Spatial frequency of the diagonal (x+z) wave term.
pub const WAVE_FREQ_DIAG: f64 = 0.04;

/// Phase-speed multiplier of the z-axis wave term.
pub const WAVE_PHASE_Z: f64 = 0.9;

/// Phase-speed multiplier of the diagonal wave term.
pub const WAVE_PHASE_DIAG: f64 = 1.3;

/// Amplitude weight of the x-axis wave term.
pub const WAVE_WEIGHT_X: f64 = 0.6;

/// Amplitude weight of the z-axis wave term.
pub const WAVE_WEIGHT_Z: f64 = 0.4;

/// Amplitude weight of the diagonal wave term.
/// The weights bound |height| at (0.6 + 0.4 + 0.3) = 1.3 × amplitude.
pub const WAVE_WEIGHT_DIAG: f64 = 0.3;

/// Waves flatten toward the rim: factor = 1 − 0.7 · min(1, dist / radius).
pub const WAVE_RADIAL_DAMPING: f64 = 0.7;

/// Slope magnitude of the two axis-aligned cosine terms.
pub const WAVE_SLOPE_MAIN: f64 = 0.03;

/// Slope magnitude of the diagonal cosine term.
pub const WAVE_SLOPE_DIAG: f64 = 0.015;

// --- Vessel attitude response ---

/// Gain from wave slope to pitch/roll.
pub const TILT_GAIN: f64 = 0.8;

/// Angular rate of the cosmetic roll wobble (rad/s of elapsed time).
pub const WOBBLE_RATE: f64 = 2.5;

/// Amplitude of the cosmetic roll wobble (radians).
pub const WOBBLE_AMPLITUDE: f64 = 0.02;

// --- Manual helm defaults ---

/// Speed gained per tick while the forward/backward flag is held.
pub const HELM_ACCELERATION: f64 = 0.05;

/// Forward speed cap. Reverse is capped at half of this.
pub const HELM_MAX_SPEED: f64 = 0.4;

/// Heading change per tick at zero speed (halved at full speed).
pub const HELM_ROTATION_SPEED: f64 = 0.03;

/// Per-tick speed multiplier while no thrust flag is held.
/// An earlier revision shipped 0.98; treat as tuning, not law.
pub const HELM_DECAY: f64 = 0.995;

/// Speeds below this snap to zero during decay.
pub const HELM_SPEED_EPSILON: f64 = 1e-4;

// --- Autopilot defaults ---

/// Cruise speed (units per tick).
pub const AUTOPILOT_CRUISE_SPEED: f64 = 0.1;

/// Maximum heading change per tick.
pub const AUTOPILOT_ROTATION_SPEED: f64 = 0.02;

/// Distance below which a waypoint counts as reached.
pub const AUTOPILOT_ARRIVAL_THRESHOLD: f64 = 5.0;

/// Heading differences below this are not corrected.
pub const AUTOPILOT_HEADING_DEADBAND: f64 = 0.01;

// --- Drift schedule defaults ---

/// Seconds between drift evaluations.
pub const DRIFT_INTERVAL_SECS: f64 = 5.0;

/// Chance per evaluation that a drifting vessel changes heading.
pub const DRIFT_HEADING_CHANCE: f64 = 0.3;

/// Full span of the random heading change (centered on zero).
pub const DRIFT_HEADING_JITTER: f64 = std::f64::consts::FRAC_PI_2;

/// Chance per evaluation that a drifting vessel changes speed.
pub const DRIFT_SPEED_CHANCE: f64 = 0.2;

/// Lower bound of the re-rolled drift speed.
pub const DRIFT_SPEED_MIN: f64 = 0.05;

/// Span added above `DRIFT_SPEED_MIN` for the re-rolled drift speed.
pub const DRIFT_SPEED_SPAN: f64 = 0.15;
