//! Projectile flight and contact.
//!
//! A projectile is marked consumed on its first contact, before damage is
//! applied; cleanup removes consumed and expired projectiles later in the tick.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;

use droplet_core::components::{Projectile, StatBlock};
use droplet_core::constants::PROJECTILE_HIT_RADIUS;
use droplet_core::enums::EffectKind;
use droplet_core::events::EffectRequest;
use droplet_core::types::{Position, Velocity};
use droplet_rules::combat;

use crate::signals::TickEvents;
use crate::spatial::{EnemyIndex, SpatialQuery};

pub fn run<R: Rng + ?Sized>(world: &mut World, dt: f32, rng: &mut R, events: &mut TickEvents) {
    let mut in_flight: Vec<(Entity, Vec2)> = Vec::new();
    for (entity, (projectile, pos, vel)) in
        world.query_mut::<(&mut Projectile, &mut Position, &Velocity)>()
    {
        if projectile.consumed {
            continue;
        }
        pos.0 += vel.0 * dt;
        projectile.lifetime_remaining_secs -= dt;
        if projectile.lifetime_remaining_secs > 0.0 {
            in_flight.push((entity, pos.0));
        }
    }
    in_flight.sort_by_key(|(entity, _)| entity.id());

    let index = EnemyIndex::build(world);
    for (entity, pos) in in_flight {
        // Nearest living enemy in contact; earlier hits this phase may have
        // killed the indexed ones.
        let target = index
            .query_in_radius(pos, PROJECTILE_HIT_RADIUS)
            .into_iter()
            .find(|e| {
                world
                    .get::<&StatBlock>(*e)
                    .map(|s| s.is_alive())
                    .unwrap_or(false)
            });
        let Some(target) = target else {
            continue;
        };

        let damage = {
            let Ok(mut projectile) = world.get::<&mut Projectile>(entity) else {
                continue;
            };
            if projectile.consumed {
                continue;
            }
            projectile.consumed = true;
            projectile.damage
        };

        if let Ok(mut stats) = world.get::<&mut StatBlock>(target) {
            let outcome = combat::apply_damage(&mut stats, damage, rng);
            if outcome.applied > 0.0 {
                events.effect(EffectRequest::at(EffectKind::HitFlash, pos));
            }
        }
    }
}
