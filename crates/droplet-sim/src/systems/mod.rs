//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions that take `&mut World` plus the explicit
//! context they need. State outside the world is owned by the engine and
//! passed in.

pub mod casualties;
pub mod cleanup;
pub mod enemy_ai;
pub mod pickups;
pub mod player;
pub mod projectiles;
pub mod snapshot;
pub mod spawn_director;
pub mod weapons;
