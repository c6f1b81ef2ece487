//! Core types and definitions for the droplet survival simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, signals, state snapshots, configuration and constants.
//! It has no dependency on the ECS or on any runtime host.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
