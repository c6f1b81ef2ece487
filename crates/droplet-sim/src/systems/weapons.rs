//! Weapon activation: cooldowns, targeting, and immediate-hit damage.
//!
//! Ranged weapons resolve damage at fire time and hand it to a projectile;
//! melee and aura weapons apply it on the spot.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;

use droplet_core::components::{Arsenal, PlayerMotion, StatBlock, WeaponParams, WeaponState};
use droplet_core::enums::{EffectKind, WeaponKind};
use droplet_core::events::EffectRequest;
use droplet_core::types::Position;
use droplet_rules::combat;
use droplet_rules::weapons;

use crate::signals::TickEvents;
use crate::spatial::{EnemyIndex, SpatialQuery};
use crate::world_setup;

struct ProjectileSpawn {
    velocity: Vec2,
    damage: f32,
    lifetime_secs: f32,
    source: WeaponKind,
}

/// Tick every weapon the player owns.
pub fn run<R: Rng + ?Sized>(
    world: &mut World,
    player: Entity,
    dt: f32,
    rng: &mut R,
    events: &mut TickEvents,
) {
    let Ok((pos, motion, stats, arsenal)) =
        world.query_one_mut::<(&Position, &PlayerMotion, &StatBlock, &mut Arsenal)>(player)
    else {
        return;
    };
    if !stats.is_alive() {
        return;
    }
    let origin = pos.0;
    let aim = motion.last_move_direction;
    let owner = stats.clone();
    let mut loadout = std::mem::take(&mut arsenal.weapons);

    let index = EnemyIndex::build(world);
    let mut projectiles = Vec::new();

    for weapon in &mut loadout {
        weapons::advance_orbit(weapon, dt);
        if !weapons::tick_cooldown(weapon, &owner, dt) {
            continue;
        }
        fire(world, weapon, &owner, origin, aim, &index, rng, events, &mut projectiles);
    }

    for shot in projectiles {
        world_setup::spawn_projectile(
            world,
            origin,
            shot.velocity,
            shot.damage,
            shot.lifetime_secs,
            shot.source,
        );
    }

    if let Ok(mut arsenal) = world.get::<&mut Arsenal>(player) {
        arsenal.weapons = loadout;
    }
}

#[allow(clippy::too_many_arguments)]
fn fire<R: Rng + ?Sized>(
    world: &World,
    weapon: &WeaponState,
    owner: &StatBlock,
    origin: Vec2,
    aim: Vec2,
    index: &EnemyIndex,
    rng: &mut R,
    events: &mut TickEvents,
    projectiles: &mut Vec<ProjectileSpawn>,
) {
    match weapon.params {
        WeaponParams::SingleShot {
            projectile_speed,
            projectile_lifetime_secs,
            max_range,
        } => {
            let Some(direction) = nearest_direction(index, origin, max_range) else {
                return;
            };
            projectiles.push(ProjectileSpawn {
                velocity: direction * projectile_speed,
                damage: combat::resolve_damage(owner, weapon.base_damage, rng),
                lifetime_secs: projectile_lifetime_secs,
                source: weapon.kind,
            });
        }
        WeaponParams::Spread {
            projectile_speed,
            projectile_lifetime_secs,
            max_range,
            spread_deg,
        } => {
            let Some(direction) = nearest_direction(index, origin, max_range) else {
                return;
            };
            for barrel in weapons::spread_directions(direction, spread_deg) {
                projectiles.push(ProjectileSpawn {
                    velocity: barrel * projectile_speed,
                    damage: combat::resolve_damage(owner, weapon.base_damage, rng),
                    lifetime_secs: projectile_lifetime_secs,
                    source: weapon.kind,
                });
            }
        }
        WeaponParams::MeleeArc { radius, arc_deg } => {
            let aim = if aim == Vec2::ZERO { Vec2::X } else { aim };
            events.effect(EffectRequest {
                kind: EffectKind::Slash,
                position: origin,
                angle: aim.y.atan2(aim.x),
            });
            for target in index.query_in_radius(origin, radius) {
                let Some(target_pos) = index.position_of(target) else {
                    continue;
                };
                if weapons::within_arc(aim, target_pos - origin, arc_deg) {
                    strike(world, target, target_pos, weapon, owner, rng, events);
                }
            }
        }
        WeaponParams::Aura { radius, .. } => {
            for target in index.query_in_radius(origin, radius) {
                if let Some(target_pos) = index.position_of(target) {
                    strike(world, target, target_pos, weapon, owner, rng, events);
                }
            }
        }
    }
}

fn nearest_direction(index: &EnemyIndex, origin: Vec2, max_range: f32) -> Option<Vec2> {
    let target = index.query_nearest(origin, max_range)?;
    let direction = (index.position_of(target)? - origin).normalize_or_zero();
    if direction == Vec2::ZERO {
        Some(Vec2::X)
    } else {
        Some(direction)
    }
}

/// Resolve and apply one immediate hit.
fn strike<R: Rng + ?Sized>(
    world: &World,
    target: Entity,
    target_pos: Vec2,
    weapon: &WeaponState,
    owner: &StatBlock,
    rng: &mut R,
    events: &mut TickEvents,
) {
    let Ok(mut stats) = world.get::<&mut StatBlock>(target) else {
        return;
    };
    let raw = combat::resolve_damage(owner, weapon.base_damage, rng);
    let outcome = combat::apply_damage(&mut stats, raw, rng);
    if outcome.applied > 0.0 {
        events.effect(EffectRequest::at(EffectKind::HitFlash, target_pos));
    }
}
