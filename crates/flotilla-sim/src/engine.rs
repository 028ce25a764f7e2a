//! Simulation engine — the world loop.
//!
//! `Simulator` owns the wave field, the vessel list, and the static
//! obstacles. One `tick` drains queued commands, runs the drift schedule,
//! advances the clock, and updates vessels in insertion order. Everything
//! is single-threaded and deterministic for a fixed seed and command
//! sequence; state is fully materialized between ticks.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use flotilla_core::commands::WorldCommand;
use flotilla_core::config::{DriftConfig, ObstacleConfig, OceanConfig, VesselConfig};
use flotilla_core::enums::VesselClass;
use flotilla_core::events::SimEvent;
use flotilla_core::state::WorldSnapshot;
use flotilla_core::types::{SimTime, VesselId};
use flotilla_ocean::WaveField;

use crate::collider::Obstacle;
use crate::movement::{self, StrategyEvent};
use crate::scheduler::DriftSchedule;
use crate::snapshot;
use crate::vessel::Vessel;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// `None` runs without an ocean: vessels move but never bob or tilt.
    pub ocean: Option<OceanConfig>,
    /// Periodic perturbation of strategy-less vessels, off by default.
    pub drift: Option<DriftConfig>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            ocean: Some(OceanConfig::default()),
            drift: None,
        }
    }
}

/// The world loop. Owns all simulation state.
pub struct Simulator {
    ocean: Option<WaveField>,
    vessels: Vec<Vessel>,
    obstacles: Vec<Obstacle>,
    time: SimTime,
    command_queue: VecDeque<WorldCommand>,
    drift: Option<DriftSchedule>,
    rng: ChaCha8Rng,
    next_vessel_id: u32,
    events: Vec<SimEvent>,
}

impl Simulator {
    /// Create a new simulator with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            ocean: config.ocean.as_ref().map(WaveField::from_config),
            vessels: Vec::new(),
            obstacles: Vec::new(),
            time: SimTime::default(),
            command_queue: VecDeque::new(),
            drift: config.drift.as_ref().map(DriftSchedule::from_config),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_vessel_id: 0,
            events: Vec::new(),
        }
    }

    /// Register a vessel. Insertion order is update order.
    ///
    /// Must be called between ticks; to add a vessel from an asynchronous
    /// collaborator, queue `WorldCommand::AddVessel` instead.
    pub fn add_vessel(&mut self, config: VesselConfig) -> VesselId {
        let id = VesselId(self.next_vessel_id);
        self.next_vessel_id += 1;
        self.vessels.push(world_setup::build_vessel(id, &config));
        tracing::debug!(vessel = id.0, "vessel added");
        id
    }

    /// Drop a vessel from the update list. Returns false if unknown.
    pub fn remove_vessel(&mut self, id: VesselId) -> bool {
        let before = self.vessels.len();
        self.vessels.retain(|v| v.id() != id);
        self.vessels.len() != before
    }

    /// Register a static obstacle. Its bounding box is computed here, once.
    pub fn add_obstacle(&mut self, config: ObstacleConfig) {
        self.obstacles.push(Obstacle::from_config(&config));
    }

    /// Spawn `count` vessels in a ring around `center` using the engine rng.
    /// A class of `None` mixes classes.
    pub fn spawn_fleet(
        &mut self,
        class: Option<VesselClass>,
        count: usize,
        center: (f64, f64),
        radius: f64,
    ) -> Vec<VesselId> {
        let configs = world_setup::fleet_configs(&mut self.rng, class, count, center, radius);
        configs.into_iter().map(|c| self.add_vessel(c)).collect()
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: WorldCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = WorldCommand>) {
        self.command_queue.extend(commands);
    }

    pub fn vessel(&self, id: VesselId) -> Option<&Vessel> {
        self.vessels.iter().find(|v| v.id() == id)
    }

    pub fn vessel_mut(&mut self, id: VesselId) -> Option<&mut Vessel> {
        self.vessels.iter_mut().find(|v| v.id() == id)
    }

    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn ocean(&self) -> Option<&WaveField> {
        self.ocean.as_ref()
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Advisory query: does the vessel's bounding box overlap any static
    /// obstacle right now? No response is applied.
    pub fn check_obstacle_collisions(&self, id: VesselId) -> bool {
        let Some(vessel) = self.vessel(id) else {
            return false;
        };
        let hull = vessel.collider();
        self.obstacles.iter().any(|o| o.check_collision(&hull))
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> WorldSnapshot {
        self.process_commands();

        if let Some(drift) = self.drift {
            drift.run(
                &mut self.vessels,
                &mut self.rng,
                self.time.tick,
                &mut self.events,
            );
        }

        self.time.advance();
        let t = self.time.elapsed_secs;
        let ocean = self.ocean;

        for vessel in &mut self.vessels {
            if let Some(StrategyEvent::WaypointReached { waypoint_index }) =
                vessel.update(t, ocean.as_ref())
            {
                self.events.push(SimEvent::WaypointReached {
                    vessel: vessel.id(),
                    waypoint_index,
                });
            }
        }

        let events = std::mem::take(&mut self.events);
        snapshot::build_snapshot(&self.time, &self.vessels, events)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single queued command.
    fn handle_command(&mut self, command: WorldCommand) {
        match command {
            WorldCommand::AddVessel(config) => {
                self.add_vessel(config);
            }
            WorldCommand::RemoveVessel { vessel } => {
                self.remove_vessel(vessel);
            }
            WorldCommand::SetHeading { vessel, heading } => {
                if let Some(vessel) = self.vessel_mut(vessel) {
                    vessel.set_direction(heading);
                }
            }
            WorldCommand::SetSpeed { vessel, speed } => {
                if let Some(vessel) = self.vessel_mut(vessel) {
                    vessel.set_speed(speed);
                }
            }
            WorldCommand::SetHelmInput { vessel, input } => {
                if let Some(vessel) = self.vessel_mut(vessel) {
                    vessel.set_helm_input(input);
                }
            }
            WorldCommand::AssignStrategy { vessel, movement } => {
                if let Some(vessel) = self.vessel_mut(vessel) {
                    vessel.set_movement_strategy(movement::build_strategy(&movement));
                }
            }
            WorldCommand::ClearStrategy { vessel } => {
                if let Some(vessel) = self.vessel_mut(vessel) {
                    vessel.set_movement_strategy(None);
                }
            }
        }
    }
}
