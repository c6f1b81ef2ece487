//! Game rules for Droplet.
//!
//! Combat resolution, progression, upgrades, enemy templates and steering,
//! wave arithmetic, and weapon geometry. No ECS dependency; operates on
//! plain data, with randomness injected by the caller.

pub mod combat;
pub mod enemy_types;
pub mod progression;
pub mod steering;
pub mod upgrades;
pub mod waves;
pub mod weapons;

pub use droplet_core as core;
