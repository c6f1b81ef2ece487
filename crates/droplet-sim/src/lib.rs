//! Simulation engine for Droplet.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the host.

pub mod engine;
pub mod signals;
pub mod spatial;
pub mod systems;
pub mod world_setup;

pub use droplet_core as core;
pub use engine::SimulationEngine;
