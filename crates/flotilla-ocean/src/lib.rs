//! Procedural ocean surface for the FLOTILLA simulation.
//!
//! The wave field is a closed-form decorative approximation, not a fluid
//! solver: height and slope are pure functions of (x, z, t), so the surface
//! can be queried from any number of vessels within a tick.

mod wave;

pub use wave::{WaveField, WaveSlope};
