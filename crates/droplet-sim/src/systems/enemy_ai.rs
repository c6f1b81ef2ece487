//! Enemy chase and contact attacks.
//!
//! Intents are computed from a positions snapshot first, then applied, so
//! every enemy steers against the same neighbor set regardless of order.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;

use droplet_core::components::{Enemy, PlayerMotion, StatBlock};
use droplet_core::config::EnemyAiTuning;
use droplet_core::enums::EffectKind;
use droplet_core::events::{EffectRequest, Signal};
use droplet_core::types::{Position, Velocity};
use droplet_rules::combat;
use droplet_rules::steering::{self, EnemyIntent, SteeringParams};

use crate::signals::TickEvents;
use crate::spatial::EnemyIndex;

struct Attacker {
    entity: Entity,
    damage: f32,
    stats: StatBlock,
}

/// Move enemies and resolve their attacks on the player. Returns true if the
/// player died during this phase.
pub fn run<R: Rng + ?Sized>(
    world: &mut World,
    player: Entity,
    tuning: &EnemyAiTuning,
    now_secs: f64,
    dt: f32,
    rng: &mut R,
    events: &mut TickEvents,
) -> bool {
    let Ok(player_pos) = world.get::<&Position>(player).map(|p| p.0) else {
        return false;
    };

    let index = EnemyIndex::build(world);
    let neighbors = index.positions();
    let params = SteeringParams {
        detection_range: tuning.detection_range,
        attack_range: tuning.attack_range,
        avoidance_radius: tuning.avoidance_radius,
        separation_weight: tuning.separation_weight,
    };

    let mut attackers = Vec::new();
    for (entity, (enemy, pos, vel, stats)) in
        world.query_mut::<(&mut Enemy, &mut Position, &mut Velocity, &StatBlock)>()
    {
        if enemy.removed || !stats.is_alive() {
            vel.0 = Vec2::ZERO;
            continue;
        }
        match steering::evaluate(pos.0, player_pos, &neighbors, &params) {
            EnemyIntent::Idle => vel.0 = Vec2::ZERO,
            EnemyIntent::Chase(direction) => {
                vel.0 = direction * stats.move_speed();
                pos.0 += vel.0 * dt;
            }
            EnemyIntent::Attack => {
                vel.0 = Vec2::ZERO;
                if steering::attack_ready(enemy.last_attack_secs, now_secs, enemy.attack_cooldown_secs) {
                    enemy.last_attack_secs = Some(now_secs);
                    attackers.push(Attacker {
                        entity,
                        damage: enemy.attack_damage,
                        stats: stats.clone(),
                    });
                }
            }
        }
    }

    if attackers.is_empty() {
        return false;
    }
    attackers.sort_by_key(|a| a.entity.id());

    let dashing = world
        .get::<&PlayerMotion>(player)
        .map(|m| m.dash.is_dashing())
        .unwrap_or(false);
    if dashing {
        return false;
    }

    let Ok(mut player_stats) = world.get::<&mut StatBlock>(player) else {
        return false;
    };
    let mut died = false;
    for attacker in &attackers {
        let raw = combat::resolve_damage(&attacker.stats, attacker.damage, rng);
        let outcome = combat::apply_damage(&mut player_stats, raw, rng);
        if outcome.applied > 0.0 {
            events.signal(Signal::HealthChanged {
                current: player_stats.current_health,
                max: player_stats.max_health,
            });
            events.effect(EffectRequest::at(EffectKind::HitFlash, player_pos));
        }
        if outcome.died {
            events.signal(Signal::Death);
            died = true;
        }
        if !player_stats.is_alive() {
            break;
        }
    }
    died
}
