//! Vessel state and per-tick pose response.
//!
//! Each tick a vessel delegates horizontal motion to its movement strategy
//! (or dead-reckons without one), then applies buoyancy and attitude from
//! the wave field. Vertical position and tilt are owned here; strategies
//! only ever touch heading, speed, and horizontal position.

use flotilla_core::constants::{TILT_GAIN, WOBBLE_AMPLITUDE, WOBBLE_RATE};
use flotilla_core::enums::VesselClass;
use flotilla_core::types::{Attitude, Extent, InputState, Position, VesselId};
use flotilla_ocean::WaveField;

use crate::collider::Aabb;
use crate::movement::{MovementStrategy, StrategyEvent};

/// Horizontal-motion state mutated by movement strategies.
#[derive(Debug, Clone, Copy, Default)]
pub struct Kinematics {
    pub position: Position,
    /// Heading in radians; 0 points along +z.
    pub heading: f64,
    /// Signed forward speed in units per tick (negative = reverse).
    pub speed: f64,
}

/// A mobile entity riding the wave field.
#[derive(Debug)]
pub struct Vessel {
    id: VesselId,
    class: VesselClass,
    kinematics: Kinematics,
    size: Extent,
    color: u32,
    buoyancy_factor: f64,
    pitch_factor: f64,
    roll_factor: f64,
    attitude: Attitude,
    strategy: Option<MovementStrategy>,
}

impl Vessel {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: VesselId,
        class: VesselClass,
        position: Position,
        size: Extent,
        color: u32,
        buoyancy_factor: f64,
        pitch_factor: f64,
        roll_factor: f64,
    ) -> Self {
        Self {
            id,
            class,
            kinematics: Kinematics {
                position,
                heading: 0.0,
                speed: 0.0,
            },
            size,
            color,
            buoyancy_factor,
            pitch_factor,
            roll_factor,
            attitude: Attitude::default(),
            strategy: None,
        }
    }

    pub fn id(&self) -> VesselId {
        self.id
    }

    pub fn class(&self) -> VesselClass {
        self.class
    }

    pub fn position(&self) -> Position {
        self.kinematics.position
    }

    pub fn heading(&self) -> f64 {
        self.kinematics.heading
    }

    pub fn speed(&self) -> f64 {
        self.kinematics.speed
    }

    pub fn size(&self) -> Extent {
        self.size
    }

    /// Hull color (0xRRGGBB), carried for the rendering layer.
    pub fn color(&self) -> u32 {
        self.color
    }

    pub fn attitude(&self) -> Attitude {
        self.attitude
    }

    pub fn buoyancy_factor(&self) -> f64 {
        self.buoyancy_factor
    }

    pub fn has_strategy(&self) -> bool {
        self.strategy.is_some()
    }

    pub fn strategy(&self) -> Option<&MovementStrategy> {
        self.strategy.as_ref()
    }

    /// Set the heading directly; the yaw follows.
    pub fn set_direction(&mut self, heading: f64) {
        self.kinematics.heading = heading;
        self.attitude.yaw = heading;
    }

    /// Set the signed forward speed (negative = reverse).
    pub fn set_speed(&mut self, speed: f64) {
        self.kinematics.speed = speed;
    }

    /// Replace the active strategy. The previous one is discarded;
    /// there is no transition callback.
    pub fn set_movement_strategy(&mut self, strategy: Option<MovementStrategy>) {
        self.strategy = strategy;
    }

    /// Replace the helm input flags. Ignored unless the active strategy
    /// is the manual helm.
    pub fn set_helm_input(&mut self, input: InputState) {
        if let Some(MovementStrategy::Manual(helm)) = &mut self.strategy {
            helm.set_input(input);
        }
    }

    /// Advance one tick: strategy (or dead reckoning), then ocean physics.
    ///
    /// Without a wave field the physics step is skipped entirely — the
    /// vessel still moves horizontally but never bobs or tilts. That is a
    /// documented degraded mode, not an error.
    pub fn update(&mut self, t: f64, ocean: Option<&WaveField>) -> Option<StrategyEvent> {
        let event = match self.strategy.as_mut() {
            Some(strategy) => strategy.drive(&mut self.kinematics, t),
            None => {
                self.dead_reckon();
                None
            }
        };

        if let Some(ocean) = ocean {
            self.apply_ocean_physics(t, ocean);
        }
        event
    }

    /// Straight-line motion along the current heading.
    fn dead_reckon(&mut self) {
        let kin = &mut self.kinematics;
        if kin.speed != 0.0 {
            kin.position.x += kin.heading.sin() * kin.speed;
            kin.position.z += kin.heading.cos() * kin.speed;
        }
    }

    /// Buoyancy and attitude response at the current position.
    fn apply_ocean_physics(&mut self, t: f64, ocean: &WaveField) {
        let pos = self.kinematics.position;

        let height = ocean.height(pos.x, pos.z, t);
        self.kinematics.position.y = height * self.buoyancy_factor + self.size.height / 2.0;

        // Tilt with the wave slope while keeping the yaw on the heading.
        let slope = ocean.slope(pos.x, pos.z, t);
        self.attitude.pitch = slope.slope_z * TILT_GAIN * self.pitch_factor;
        self.attitude.roll = -slope.slope_x * TILT_GAIN * self.roll_factor;
        self.attitude.yaw = self.kinematics.heading;

        // Cosmetic wobble, independent of position.
        self.attitude.roll += (t * WOBBLE_RATE).sin() * WOBBLE_AMPLITUDE * self.roll_factor;
    }

    /// Conservative bounding box for overlap queries: the horizontal
    /// footprint uses the larger of length and width on both axes so the
    /// box covers the hull at any heading.
    pub fn collider(&self) -> Aabb {
        let span = self.size.length.max(self.size.width);
        Aabb::from_center_spans(self.kinematics.position, span, self.size.height, span)
    }
}
