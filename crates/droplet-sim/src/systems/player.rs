//! Player locomotion, dash, and health regeneration.

use glam::Vec2;
use hecs::{Entity, World};

use droplet_core::components::{PlayerMotion, StatBlock};
use droplet_core::config::PlayerTuning;
use droplet_core::constants::MOVE_INTENT_DEADZONE;
use droplet_core::enums::EffectKind;
use droplet_core::events::{EffectRequest, Signal};
use droplet_core::types::{Position, Velocity};
use droplet_rules::combat;
use droplet_rules::steering::move_towards;

use crate::signals::TickEvents;

/// Store the latest movement intent, clamped to unit length.
pub fn set_move_intent(world: &mut World, player: Entity, intent: Vec2) {
    if let Ok(mut motion) = world.get::<&mut PlayerMotion>(player) {
        motion.move_intent = intent.clamp_length_max(1.0);
    }
}

/// Start a dash if the cooldown allows it. Returns true when a dash began.
pub fn trigger_dash(
    world: &mut World,
    player: Entity,
    direction: Vec2,
    tuning: &PlayerTuning,
    events: &mut TickEvents,
) -> bool {
    let direction = direction.normalize_or_zero();
    if direction == Vec2::ZERO {
        return false;
    }
    let Ok((motion, pos)) = world.query_one_mut::<(&mut PlayerMotion, &Position)>(player) else {
        return false;
    };
    if motion.dash.is_dashing() || motion.dash.cooldown_secs > 0.0 {
        return false;
    }

    motion.dash.direction = direction;
    motion.dash.remaining_secs = tuning.dash_duration_secs;
    motion.dash.cooldown_secs = tuning.dash_cooldown_secs;
    motion.last_move_direction = direction;
    events.effect(EffectRequest {
        kind: EffectKind::DashTrail,
        position: pos.0,
        angle: direction.y.atan2(direction.x),
    });
    true
}

/// Steer, dash, integrate position and regenerate health.
pub fn run(world: &mut World, player: Entity, tuning: &PlayerTuning, dt: f32, events: &mut TickEvents) {
    let Ok((motion, pos, vel, stats)) = world
        .query_one_mut::<(&mut PlayerMotion, &mut Position, &mut Velocity, &mut StatBlock)>(player)
    else {
        return;
    };
    if !stats.is_alive() {
        vel.0 = Vec2::ZERO;
        return;
    }

    motion.dash.cooldown_secs = (motion.dash.cooldown_secs - dt).max(0.0);

    if motion.dash.is_dashing() {
        vel.0 = motion.dash.direction * tuning.dash_speed;
        motion.dash.remaining_secs = (motion.dash.remaining_secs - dt).max(0.0);
    } else {
        let intent = motion.move_intent;
        if intent.length() > MOVE_INTENT_DEADZONE {
            motion.last_move_direction = intent.normalize_or_zero();
            let target = intent * stats.move_speed();
            vel.0 = move_towards(vel.0, target, tuning.acceleration * dt);
        } else {
            vel.0 = move_towards(vel.0, Vec2::ZERO, tuning.deceleration * dt);
        }
    }

    pos.0 += vel.0 * dt;

    if combat::regenerate(stats, dt) > 0.0 {
        events.signal(Signal::HealthChanged {
            current: stats.current_health,
            max: stats.max_health,
        });
    }
}
