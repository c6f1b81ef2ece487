//! Game state snapshot: the complete visible state handed to the host each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::StatBlock;
use crate::enums::*;
use crate::events::{EffectRequest, Signal, UpgradeChoiceView};
use crate::types::SimTime;

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub wave: WaveView,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub pickups: Vec<PickupView>,
    pub weapons: Vec<WeaponView>,
    /// Open upgrade menu, if any.
    pub upgrade_menu: Option<Vec<UpgradeChoiceView>>,
    /// Signals emitted during this tick, in emission order.
    pub signals: Vec<Signal>,
    /// Effect requests issued during this tick.
    pub effects: Vec<EffectRequest>,
    pub score: ScoreView,
}

/// Spawn director state for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    pub wave_number: u32,
    pub enemies_per_wave: u32,
    pub enemies_spawned_this_wave: u32,
    pub active_enemy_count: u32,
    pub spawn_interval_secs: f32,
    pub boss_wave: bool,
}

/// The player for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub velocity: Vec2,
    pub stats: StatBlock,
    pub dashing: bool,
    /// 0.0 just after a dash, 1.0 when the next dash is available.
    pub dash_ready_fraction: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub kind: EnemyKind,
    pub position: Vec2,
    pub current_health: f32,
    pub max_health: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub position: Vec2,
    pub velocity: Vec2,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupView {
    pub id: u32,
    pub position: Vec2,
    pub experience_value: u32,
    pub state: AttractionState,
}

/// Weapon status for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponView {
    pub kind: WeaponKind,
    pub level: u32,
    pub base_damage: f32,
    pub cooldown_remaining_secs: f32,
    /// Satellite positions for the aura, empty otherwise.
    pub orbs: Vec<Vec2>,
}

/// Running score for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub enemies_killed: u32,
    pub total_experience: u32,
    pub survival_secs: f64,
}
