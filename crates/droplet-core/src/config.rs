//! Simulation configuration.
//!
//! Every section defaults to the values in `constants`, and every field is
//! `#[serde(default)]`, so a JSON file only needs the keys it overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::StatBlock;
use crate::constants::*;
use crate::enums::{EnemyKind, WeaponKind};

/// Errors raised while loading or validating a `SimConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Immutable template for one enemy kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyTypeDefinition {
    pub kind: EnemyKind,
    pub name: String,
    pub max_health: f32,
    pub damage: f32,
    pub move_speed: f32,
    pub experience_value: u32,
    #[serde(default = "default_attack_cooldown")]
    pub attack_cooldown_secs: f32,
}

fn default_attack_cooldown() -> f32 {
    ENEMY_ATTACK_COOLDOWN_SECS
}

impl EnemyTypeDefinition {
    /// The three regular kinds with their stock balance values.
    pub fn standard_set() -> Vec<EnemyTypeDefinition> {
        vec![
            EnemyTypeDefinition {
                kind: EnemyKind::Square,
                name: "Square".into(),
                max_health: SQUARE_HEALTH,
                damage: SQUARE_DAMAGE,
                move_speed: SQUARE_SPEED,
                experience_value: SQUARE_EXPERIENCE,
                attack_cooldown_secs: ENEMY_ATTACK_COOLDOWN_SECS,
            },
            EnemyTypeDefinition {
                kind: EnemyKind::Triangle,
                name: "Triangle".into(),
                max_health: TRIANGLE_HEALTH,
                damage: TRIANGLE_DAMAGE,
                move_speed: TRIANGLE_SPEED,
                experience_value: TRIANGLE_EXPERIENCE,
                attack_cooldown_secs: ENEMY_ATTACK_COOLDOWN_SECS,
            },
            EnemyTypeDefinition {
                kind: EnemyKind::Round,
                name: "Round".into(),
                max_health: ROUND_HEALTH,
                damage: ROUND_DAMAGE,
                move_speed: ROUND_SPEED,
                experience_value: ROUND_EXPERIENCE,
                attack_cooldown_secs: ENEMY_ATTACK_COOLDOWN_SECS,
            },
        ]
    }
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    pub player: PlayerTuning,
    pub spawn: SpawnTuning,
    pub enemy_ai: EnemyAiTuning,
    pub pickups: PickupTuning,
    pub progression: ProgressionTuning,
    /// Enemy templates. A kind without a template is never spawned.
    pub enemies: Vec<EnemyTypeDefinition>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            player: PlayerTuning::default(),
            spawn: SpawnTuning::default(),
            enemy_ai: EnemyAiTuning::default(),
            pickups: PickupTuning::default(),
            progression: ProgressionTuning::default(),
            enemies: EnemyTypeDefinition::standard_set(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Stats the player starts each run with.
    pub stats: StatBlock,
    pub acceleration: f32,
    pub deceleration: f32,
    pub radius: f32,
    pub dash_speed: f32,
    pub dash_duration_secs: f32,
    pub dash_cooldown_secs: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            stats: StatBlock::player(),
            acceleration: PLAYER_ACCELERATION,
            deceleration: PLAYER_DECELERATION,
            radius: PLAYER_RADIUS,
            dash_speed: DASH_SPEED,
            dash_duration_secs: DASH_DURATION_SECS,
            dash_cooldown_secs: DASH_COOLDOWN_SECS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnTuning {
    pub spawn_radius: f32,
    pub spawn_radius_jitter: f32,
    pub spawn_interval_secs: f32,
    pub spawn_interval_decay: f32,
    pub spawn_interval_floor_secs: f32,
    pub initial_enemies_per_wave: u32,
    pub wave_scaling: f64,
    pub max_active_enemies: usize,
    pub boss_wave_interval: u32,
    pub boss_spawn_distance: f32,
    pub difficulty_scaling: f32,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            spawn_radius: SPAWN_RADIUS,
            spawn_radius_jitter: SPAWN_RADIUS_JITTER,
            spawn_interval_secs: SPAWN_INTERVAL_SECS,
            spawn_interval_decay: SPAWN_INTERVAL_DECAY,
            spawn_interval_floor_secs: SPAWN_INTERVAL_FLOOR_SECS,
            initial_enemies_per_wave: INITIAL_ENEMIES_PER_WAVE,
            wave_scaling: WAVE_SCALING,
            max_active_enemies: MAX_ACTIVE_ENEMIES,
            boss_wave_interval: BOSS_WAVE_INTERVAL,
            boss_spawn_distance: BOSS_SPAWN_DISTANCE,
            difficulty_scaling: DIFFICULTY_SCALING,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyAiTuning {
    pub detection_range: f32,
    pub attack_range: f32,
    pub avoidance_radius: f32,
    pub separation_weight: f32,
}

impl Default for EnemyAiTuning {
    fn default() -> Self {
        Self {
            detection_range: ENEMY_DETECTION_RANGE,
            attack_range: ENEMY_ATTACK_RANGE,
            avoidance_radius: ENEMY_AVOIDANCE_RADIUS,
            separation_weight: ENEMY_SEPARATION_WEIGHT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PickupTuning {
    pub attraction_range: f32,
    pub attraction_speed: f32,
    pub pickup_range: f32,
}

impl Default for PickupTuning {
    fn default() -> Self {
        Self {
            attraction_range: PICKUP_ATTRACTION_RANGE,
            attraction_speed: PICKUP_ATTRACTION_SPEED,
            pickup_range: PICKUP_RANGE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionTuning {
    pub upgrade_choices: usize,
    pub starting_weapons: Vec<WeaponKind>,
    /// (level, weapon) pairs unlocked on reaching that level.
    pub weapon_unlocks: Vec<(u32, WeaponKind)>,
}

impl Default for ProgressionTuning {
    fn default() -> Self {
        Self {
            upgrade_choices: UPGRADE_CHOICES_PER_LEVEL,
            starting_weapons: vec![WeaponKind::Gun],
            weapon_unlocks: vec![
                (SWORD_UNLOCK_LEVEL, WeaponKind::Sword),
                (ADVANCED_WEAPONS_UNLOCK_LEVEL, WeaponKind::DoubleBarrel),
                (ADVANCED_WEAPONS_UNLOCK_LEVEL, WeaponKind::EnergyAura),
            ],
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let stats = &self.player.stats;
        probability("player.stats.crit_chance", stats.crit_chance)?;
        probability("player.stats.dodge_chance", stats.dodge_chance)?;
        non_negative("player.stats.armor", stats.armor)?;
        positive("player.stats.max_health", stats.max_health)?;
        positive("player.stats.current_health", stats.current_health)?;
        if stats.current_health > stats.max_health {
            return Err(invalid(
                "player.stats.current_health",
                format!("{} is above max {}", stats.current_health, stats.max_health),
            ));
        }
        if stats.level == 0 {
            return Err(invalid("player.stats.level", "level starts at 1".into()));
        }
        let threshold = stats.level.saturating_mul(EXPERIENCE_PER_LEVEL);
        if stats.experience_to_next_level < threshold {
            return Err(invalid(
                "player.stats.experience_to_next_level",
                format!(
                    "{} is below {threshold} for level {}",
                    stats.experience_to_next_level, stats.level
                ),
            ));
        }

        let spawn = &self.spawn;
        non_negative("spawn.spawn_radius", spawn.spawn_radius)?;
        non_negative("spawn.spawn_radius_jitter", spawn.spawn_radius_jitter)?;
        positive("spawn.spawn_interval_floor_secs", spawn.spawn_interval_floor_secs)?;
        if spawn.spawn_interval_secs < spawn.spawn_interval_floor_secs {
            return Err(invalid(
                "spawn.spawn_interval_secs",
                format!(
                    "{} is below the floor {}",
                    spawn.spawn_interval_secs, spawn.spawn_interval_floor_secs
                ),
            ));
        }
        if !(spawn.spawn_interval_decay > 0.0 && spawn.spawn_interval_decay <= 1.0) {
            return Err(invalid(
                "spawn.spawn_interval_decay",
                format!("{} is outside (0, 1]", spawn.spawn_interval_decay),
            ));
        }
        if !(spawn.wave_scaling > 0.0 && spawn.wave_scaling.is_finite()) {
            return Err(invalid(
                "spawn.wave_scaling",
                format!("{} must be positive", spawn.wave_scaling),
            ));
        }
        if spawn.initial_enemies_per_wave == 0 {
            return Err(invalid(
                "spawn.initial_enemies_per_wave",
                "a wave needs at least one enemy".into(),
            ));
        }
        if spawn.boss_wave_interval == 0 {
            return Err(invalid(
                "spawn.boss_wave_interval",
                "interval must be at least 1".into(),
            ));
        }
        positive("spawn.difficulty_scaling", spawn.difficulty_scaling)?;

        non_negative("enemy_ai.detection_range", self.enemy_ai.detection_range)?;
        non_negative("enemy_ai.attack_range", self.enemy_ai.attack_range)?;
        non_negative("enemy_ai.avoidance_radius", self.enemy_ai.avoidance_radius)?;

        non_negative("pickups.attraction_range", self.pickups.attraction_range)?;
        non_negative("pickups.attraction_speed", self.pickups.attraction_speed)?;
        non_negative("pickups.pickup_range", self.pickups.pickup_range)?;
        if self.pickups.pickup_range > self.pickups.attraction_range {
            return Err(invalid(
                "pickups.pickup_range",
                format!(
                    "{} exceeds the attraction range {}",
                    self.pickups.pickup_range, self.pickups.attraction_range
                ),
            ));
        }

        for template in &self.enemies {
            positive("enemies[].max_health", template.max_health)?;
            non_negative("enemies[].damage", template.damage)?;
            non_negative("enemies[].move_speed", template.move_speed)?;
            non_negative("enemies[].attack_cooldown_secs", template.attack_cooldown_secs)?;
        }

        if self.time_scale < 0.0 {
            return Err(invalid("time_scale", format!("{} is negative", self.time_scale)));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

fn probability(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, format!("{value} is outside 0..=1")))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("{value} is negative")))
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("{value} must be positive")))
    }
}
