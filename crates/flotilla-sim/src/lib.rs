//! Simulation engine for FLOTILLA.
//!
//! Owns the wave field, vessel list, and static obstacles; advances the
//! world one tick at a time and produces WorldSnapshots for consumers.

pub mod collider;
pub mod engine;
pub mod movement;
pub mod scenario;
pub mod scheduler;
pub mod snapshot;
pub mod vessel;
pub mod world_setup;

pub use engine::Simulator;
pub use flotilla_core as core;
