//! ECS components for hecs entities.
//!
//! Components are plain data. Game rules live in `droplet-rules` and the
//! systems in `droplet-sim`; the few methods here are derived reads.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::*;

/// Numeric attribute record of one actor (player or enemy).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatBlock {
    pub max_health: f32,
    /// Always within `0.0..=max_health`.
    pub current_health: f32,
    pub damage_multiplier: f32,
    pub attack_speed_multiplier: f32,
    /// Probability in `0.0..=1.0`.
    pub crit_chance: f32,
    pub crit_damage_multiplier: f32,
    /// Non-negative; see `droplet_rules::combat::mitigate`.
    pub armor: f32,
    /// Probability in `0.0..=1.0`.
    pub dodge_chance: f32,
    pub base_move_speed: f32,
    pub move_speed_bonus: f32,
    pub health_regen_per_second: f32,
    /// Starts at 1.
    pub level: u32,
    pub experience: u32,
    pub experience_to_next_level: u32,
}

impl StatBlock {
    /// Starting stats of the player.
    pub fn player() -> Self {
        Self {
            max_health: PLAYER_MAX_HEALTH,
            current_health: PLAYER_MAX_HEALTH,
            damage_multiplier: 1.0,
            attack_speed_multiplier: 1.0,
            crit_chance: PLAYER_CRIT_CHANCE,
            crit_damage_multiplier: PLAYER_CRIT_DAMAGE,
            armor: 0.0,
            dodge_chance: 0.0,
            base_move_speed: PLAYER_BASE_MOVE_SPEED,
            move_speed_bonus: PLAYER_MOVE_SPEED_BONUS,
            health_regen_per_second: 0.0,
            level: 1,
            experience: 0,
            experience_to_next_level: EXPERIENCE_PER_LEVEL,
        }
    }

    /// Plain stats for an enemy: no crits, no armor, no dodge.
    pub fn enemy(max_health: f32, move_speed: f32) -> Self {
        Self {
            max_health,
            current_health: max_health,
            damage_multiplier: 1.0,
            attack_speed_multiplier: 1.0,
            crit_chance: 0.0,
            crit_damage_multiplier: 1.0,
            armor: 0.0,
            dodge_chance: 0.0,
            base_move_speed: move_speed,
            move_speed_bonus: 0.0,
            health_regen_per_second: 0.0,
            level: 1,
            experience: 0,
            experience_to_next_level: EXPERIENCE_PER_LEVEL,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current_health > 0.0
    }

    /// Effective movement speed including the bonus.
    pub fn move_speed(&self) -> f32 {
        self.base_move_speed * (1.0 + self.move_speed_bonus)
    }
}

impl Default for StatBlock {
    fn default() -> Self {
        Self::player()
    }
}

/// Marks the player entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Player locomotion state fed by the input collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerMotion {
    /// Latest movement intent (normalized or zero).
    pub move_intent: Vec2,
    /// Last non-idle movement direction; melee aim.
    pub last_move_direction: Vec2,
    pub dash: DashState,
}

/// Dash timers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashState {
    pub direction: Vec2,
    /// Seconds of dash left; > 0 while dashing.
    pub remaining_secs: f32,
    /// Seconds until the next dash is allowed.
    pub cooldown_secs: f32,
}

impl DashState {
    pub fn is_dashing(&self) -> bool {
        self.remaining_secs > 0.0
    }
}

/// Per-enemy behavior record. Starting values come from its `EnemyTypeDefinition`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub attack_damage: f32,
    pub attack_cooldown_secs: f32,
    pub experience_value: u32,
    /// Simulation time of the last landed attack attempt.
    pub last_attack_secs: Option<f64>,
    /// Set once the death has been processed; guards against double removal.
    pub removed: bool,
}

/// Experience orb dropped by a dead enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupRecord {
    pub experience_value: u32,
    pub state: AttractionState,
}

/// Player projectile carrying pre-resolved damage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub damage: f32,
    pub lifetime_remaining_secs: f32,
    pub source: WeaponKind,
    /// Set on first contact; a consumed projectile never hits again.
    pub consumed: bool,
}

/// Per-kind weapon parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WeaponParams {
    SingleShot {
        projectile_speed: f32,
        projectile_lifetime_secs: f32,
        max_range: f32,
    },
    Spread {
        projectile_speed: f32,
        projectile_lifetime_secs: f32,
        max_range: f32,
        spread_deg: f32,
    },
    MeleeArc {
        radius: f32,
        arc_deg: f32,
    },
    Aura {
        radius: f32,
        rotation_deg_per_sec: f32,
        orb_count: u32,
        max_orbs: u32,
        radius_step: f32,
        /// Current orbit angle (degrees, 0..360).
        rotation_deg: f32,
    },
}

/// Runtime state of one weapon owned by the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponState {
    pub kind: WeaponKind,
    pub level: u32,
    pub base_damage: f32,
    /// Activations per second before attack-speed upgrades.
    pub fire_rate: f32,
    pub cooldown_remaining_secs: f32,
    pub params: WeaponParams,
}

/// The player's weapons, in unlock order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Arsenal {
    pub weapons: Vec<WeaponState>,
}

impl Arsenal {
    pub fn has(&self, kind: WeaponKind) -> bool {
        self.weapons.iter().any(|w| w.kind == kind)
    }

    pub fn get_mut(&mut self, kind: WeaponKind) -> Option<&mut WeaponState> {
        self.weapons.iter_mut().find(|w| w.kind == kind)
    }
}
