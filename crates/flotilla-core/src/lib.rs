//! Core types and definitions for the FLOTILLA simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometric types, configuration objects, commands, events, state
//! snapshots, and constants. It has no dependency on any runtime framework.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
