//! Cleanup system: removes spent projectiles, collected pickups and dead enemies.

use hecs::{Entity, World};

use droplet_core::components::{Enemy, PickupRecord, Projectile};
use droplet_core::enums::AttractionState;

/// Despawn everything whose lifecycle ended this tick.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, projectile) in world.query_mut::<&Projectile>() {
        if projectile.consumed || projectile.lifetime_remaining_secs <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for (entity, pickup) in world.query_mut::<&PickupRecord>() {
        if pickup.state == AttractionState::Collected {
            despawn_buffer.push(entity);
        }
    }

    for (entity, enemy) in world.query_mut::<&Enemy>() {
        if enemy.removed {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
