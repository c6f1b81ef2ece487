//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! Read-only: never modifies the world.

use hecs::{Entity, World};

use droplet_core::components::*;
use droplet_core::enums::GamePhase;
use droplet_core::events::UpgradeChoiceView;
use droplet_core::state::*;
use droplet_core::types::{Position, SimTime, Velocity};
use droplet_rules::weapons::weapon_orbs;

use crate::engine::ScoreState;
use crate::signals::TickEvents;
use crate::systems::spawn_director::SpawnDirector;

/// Build a complete GameStateSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    player: Option<Entity>,
    time: &SimTime,
    phase: GamePhase,
    director: &SpawnDirector,
    upgrade_menu: Option<Vec<UpgradeChoiceView>>,
    dash_cooldown_secs: f32,
    events: TickEvents,
    score: &ScoreState,
) -> GameStateSnapshot {
    let player_view = player
        .and_then(|p| build_player(world, p, dash_cooldown_secs))
        .unwrap_or_default();

    GameStateSnapshot {
        time: *time,
        phase,
        wave: director.view(),
        weapons: player
            .map(|p| build_weapons(world, p, player_view.position))
            .unwrap_or_default(),
        player: player_view,
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        pickups: build_pickups(world),
        upgrade_menu,
        signals: events.signals,
        effects: events.effects,
        score: ScoreView {
            enemies_killed: score.enemies_killed,
            total_experience: score.total_experience,
            survival_secs: time.elapsed_secs,
        },
    }
}

fn build_player(world: &World, player: Entity, dash_cooldown_secs: f32) -> Option<PlayerView> {
    let mut query = world
        .query_one::<(&Position, &Velocity, &StatBlock, &PlayerMotion)>(player)
        .ok()?;
    let (pos, vel, stats, motion) = query.get()?;
    let dash_ready_fraction = if dash_cooldown_secs > 0.0 {
        (1.0 - motion.dash.cooldown_secs / dash_cooldown_secs).clamp(0.0, 1.0)
    } else {
        1.0
    };
    Some(PlayerView {
        position: pos.0,
        velocity: vel.0,
        stats: stats.clone(),
        dashing: motion.dash.is_dashing(),
        dash_ready_fraction,
    })
}

fn build_weapons(world: &World, player: Entity, center: glam::Vec2) -> Vec<WeaponView> {
    let Ok(arsenal) = world.get::<&Arsenal>(player) else {
        return Vec::new();
    };
    arsenal
        .weapons
        .iter()
        .map(|w| WeaponView {
            kind: w.kind,
            level: w.level,
            base_damage: w.base_damage,
            cooldown_remaining_secs: w.cooldown_remaining_secs.max(0.0),
            orbs: weapon_orbs(w, center),
        })
        .collect()
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position, &StatBlock)>()
        .iter()
        .filter(|(_, (enemy, _, _))| !enemy.removed)
        .map(|(entity, (enemy, pos, stats))| EnemyView {
            id: entity.id(),
            kind: enemy.kind,
            position: pos.0,
            current_health: stats.current_health,
            max_health: stats.max_health,
        })
        .collect();
    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position, &Velocity)>()
        .iter()
        .filter(|(_, (projectile, _, _))| !projectile.consumed)
        .map(|(entity, (_, pos, vel))| ProjectileView {
            id: entity.id(),
            position: pos.0,
            velocity: vel.0,
        })
        .collect();
    projectiles.sort_by_key(|p| p.id);
    projectiles
}

fn build_pickups(world: &World) -> Vec<PickupView> {
    let mut pickups: Vec<PickupView> = world
        .query::<(&PickupRecord, &Position)>()
        .iter()
        .map(|(entity, (pickup, pos))| PickupView {
            id: entity.id(),
            position: pos.0,
            experience_value: pickup.experience_value,
            state: pickup.state,
        })
        .collect();
    pickups.sort_by_key(|p| p.id);
    pickups
}
