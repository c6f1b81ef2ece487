//! Entity spawn factories for the simulation world.

use glam::Vec2;
use hecs::{Entity, World};

use droplet_core::components::*;
use droplet_core::config::{EnemyTypeDefinition, PlayerTuning};
use droplet_core::enums::{AttractionState, WeaponKind};
use droplet_core::types::{Position, Velocity};
use droplet_rules::weapons::default_weapon;

/// Spawn the player at the origin with its starting stats and weapons.
pub fn spawn_player(world: &mut World, tuning: &PlayerTuning, weapons: &[WeaponKind]) -> Entity {
    let arsenal = Arsenal {
        weapons: weapons.iter().map(|&kind| default_weapon(kind)).collect(),
    };
    let motion = PlayerMotion {
        last_move_direction: Vec2::X,
        ..PlayerMotion::default()
    };

    world.spawn((
        Player,
        Position::default(),
        Velocity::default(),
        tuning.stats.clone(),
        motion,
        arsenal,
    ))
}

/// Spawn an enemy from its template. `health_multiplier` scales max health
/// for wave difficulty.
pub fn spawn_enemy(
    world: &mut World,
    template: &EnemyTypeDefinition,
    position: Vec2,
    health_multiplier: f32,
) -> Entity {
    let stats = StatBlock::enemy(template.max_health * health_multiplier, template.move_speed);
    let enemy = Enemy {
        kind: template.kind,
        attack_damage: template.damage,
        attack_cooldown_secs: template.attack_cooldown_secs,
        experience_value: template.experience_value,
        last_attack_secs: None,
        removed: false,
    };
    world.spawn((enemy, Position(position), Velocity::default(), stats))
}

/// Drop an idle experience orb.
pub fn spawn_pickup(world: &mut World, position: Vec2, experience_value: u32) -> Entity {
    world.spawn((
        PickupRecord {
            experience_value,
            state: AttractionState::Idle,
        },
        Position(position),
    ))
}

pub fn spawn_projectile(
    world: &mut World,
    position: Vec2,
    velocity: Vec2,
    damage: f32,
    lifetime_secs: f32,
    source: WeaponKind,
) -> Entity {
    world.spawn((
        Projectile {
            damage,
            lifetime_remaining_secs: lifetime_secs,
            source,
            consumed: false,
        },
        Position(position),
        Velocity(velocity),
    ))
}
