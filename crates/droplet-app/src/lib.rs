//! Droplet headless host.
//!
//! Runs the simulation engine on its own thread, feeds it commands over a
//! channel and hands snapshots back to whoever drives the run.

pub mod autopilot;
pub mod cli;
pub mod game_loop;
pub mod state;

pub use droplet_core as core;
