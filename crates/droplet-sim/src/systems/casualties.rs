//! Enemy death handling: drop a pickup, leave the live population once.

use hecs::World;

use droplet_core::components::{Enemy, StatBlock};
use droplet_core::enums::EffectKind;
use droplet_core::events::{EffectRequest, Signal};
use droplet_core::types::Position;

use crate::signals::TickEvents;
use crate::systems::spawn_director::SpawnDirector;
use crate::world_setup;

/// Process every enemy that died this tick. Returns the number processed.
pub fn run(world: &mut World, director: &mut SpawnDirector, events: &mut TickEvents) -> u32 {
    let mut dead = Vec::new();
    for (entity, (enemy, pos, stats)) in world.query_mut::<(&mut Enemy, &Position, &StatBlock)>() {
        if enemy.removed || stats.is_alive() {
            continue;
        }
        enemy.removed = true;
        dead.push((entity, enemy.kind, pos.0, enemy.experience_value));
    }
    dead.sort_by_key(|(entity, ..)| entity.id());

    let mut processed = 0;
    for (entity, kind, position, experience_value) in dead {
        if !director.remove_enemy(entity) {
            tracing::debug!(id = entity.id(), "dead enemy was not tracked by the director");
        }
        world_setup::spawn_pickup(world, position, experience_value);
        events.signal(Signal::EnemyKilled { kind, position });
        events.effect(EffectRequest::at(EffectKind::Death, position));
        tracing::debug!(?kind, id = entity.id(), "enemy killed");
        processed += 1;
    }
    processed
}
