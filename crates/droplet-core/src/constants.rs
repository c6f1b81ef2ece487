//! Simulation constants and tuning defaults.
//!
//! These seed `SimConfig::default()`; a config file may override any of them.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Player ---

pub const PLAYER_MAX_HEALTH: f32 = 100.0;
pub const PLAYER_CRIT_CHANCE: f32 = 0.1;
pub const PLAYER_CRIT_DAMAGE: f32 = 1.5;
pub const PLAYER_BASE_MOVE_SPEED: f32 = 5.0;

/// Flat bonus on top of base move speed (+25%).
pub const PLAYER_MOVE_SPEED_BONUS: f32 = 0.25;

/// Body radius used for pickup contact.
pub const PLAYER_RADIUS: f32 = 0.5;

/// Velocity change per second while steering toward the move intent.
pub const PLAYER_ACCELERATION: f32 = 20.0;

/// Velocity change per second while coasting to a stop.
pub const PLAYER_DECELERATION: f32 = 15.0;

/// Intent magnitude below which the player counts as idle.
pub const MOVE_INTENT_DEADZONE: f32 = 0.1;

// --- Dash ---

pub const DASH_SPEED: f32 = 15.0;
pub const DASH_DURATION_SECS: f32 = 0.3;
pub const DASH_COOLDOWN_SECS: f32 = 1.5;

// --- Progression ---

/// Experience needed per level: threshold(level) = level * this.
pub const EXPERIENCE_PER_LEVEL: u32 = 2;

/// Upgrade options offered per level-up.
pub const UPGRADE_CHOICES_PER_LEVEL: usize = 3;

/// Player level at which the sword unlocks.
pub const SWORD_UNLOCK_LEVEL: u32 = 5;

/// Player level at which the double barrel and energy aura unlock.
pub const ADVANCED_WEAPONS_UNLOCK_LEVEL: u32 = 10;

// --- Armor ---

/// Armor value that halves incoming damage: reduction = a / (a + K).
pub const ARMOR_MITIGATION_CONSTANT: f32 = 100.0;

// --- Spawning ---

/// Radius of the spawn ring around the player.
pub const SPAWN_RADIUS: f32 = 15.0;

/// Maximum extra distance added to the spawn ring.
pub const SPAWN_RADIUS_JITTER: f32 = 2.0;

pub const SPAWN_INTERVAL_SECS: f32 = 2.0;
pub const SPAWN_INTERVAL_DECAY: f32 = 0.95;
pub const SPAWN_INTERVAL_FLOOR_SECS: f32 = 0.5;
pub const INITIAL_ENEMIES_PER_WAVE: u32 = 5;
pub const WAVE_SCALING: f64 = 1.2;
pub const MAX_ACTIVE_ENEMIES: usize = 50;

/// Every Nth wave is a boss wave.
pub const BOSS_WAVE_INTERVAL: u32 = 5;

/// Distance from the player at which a boss appears.
pub const BOSS_SPAWN_DISTANCE: f32 = 20.0;

/// Per-wave growth of enemy max health.
pub const DIFFICULTY_SCALING: f32 = 1.1;

// --- Enemy AI ---

pub const ENEMY_DETECTION_RANGE: f32 = 15.0;
pub const ENEMY_ATTACK_RANGE: f32 = 1.0;
pub const ENEMY_AVOIDANCE_RADIUS: f32 = 0.5;
pub const ENEMY_SEPARATION_WEIGHT: f32 = 0.3;
pub const ENEMY_ATTACK_COOLDOWN_SECS: f32 = 1.0;

// --- Enemy templates ---

pub const SQUARE_HEALTH: f32 = 100.0;
pub const SQUARE_DAMAGE: f32 = 33.0;
pub const SQUARE_SPEED: f32 = 2.5;
pub const SQUARE_EXPERIENCE: u32 = 1;

pub const TRIANGLE_HEALTH: f32 = 80.0;
pub const TRIANGLE_DAMAGE: f32 = 30.0;
pub const TRIANGLE_SPEED: f32 = 3.0;
pub const TRIANGLE_EXPERIENCE: u32 = 1;

pub const ROUND_HEALTH: f32 = 120.0;
pub const ROUND_DAMAGE: f32 = 35.0;
pub const ROUND_SPEED: f32 = 2.0;
pub const ROUND_EXPERIENCE: u32 = 2;

// --- Pickups ---

pub const PICKUP_ATTRACTION_RANGE: f32 = 3.0;
pub const PICKUP_ATTRACTION_SPEED: f32 = 5.0;
pub const PICKUP_RANGE: f32 = 0.5;

// --- Weapons ---

/// Per-level base damage multiplier.
pub const WEAPON_LEVEL_DAMAGE_FACTOR: f32 = 1.1;

/// Radius within which a projectile connects with an enemy.
pub const PROJECTILE_HIT_RADIUS: f32 = 0.5;

pub const GUN_DAMAGE: f32 = 15.0;
pub const GUN_FIRE_RATE: f32 = 1.0;
pub const GUN_PROJECTILE_SPEED: f32 = 10.0;
pub const GUN_PROJECTILE_LIFETIME_SECS: f32 = 3.0;
pub const GUN_MAX_RANGE: f32 = 15.0;

pub const DOUBLE_BARREL_DAMAGE: f32 = 20.0;
pub const DOUBLE_BARREL_FIRE_RATE: f32 = 0.8;
pub const DOUBLE_BARREL_PROJECTILE_SPEED: f32 = 12.0;
pub const DOUBLE_BARREL_PROJECTILE_LIFETIME_SECS: f32 = 3.0;
pub const DOUBLE_BARREL_MAX_RANGE: f32 = 20.0;

/// Angle between the two barrels (degrees).
pub const DOUBLE_BARREL_SPREAD_DEG: f32 = 15.0;

pub const SWORD_DAMAGE: f32 = 25.0;
pub const SWORD_FIRE_RATE: f32 = 1.5;
pub const SWORD_RADIUS: f32 = 2.0;

/// Full width of the slash cone (degrees).
pub const SWORD_ARC_DEG: f32 = 90.0;

pub const AURA_DAMAGE: f32 = 15.0;
pub const AURA_FIRE_RATE: f32 = 2.0;
pub const AURA_RADIUS: f32 = 3.0;
pub const AURA_ROTATION_DEG_PER_SEC: f32 = 180.0;
pub const AURA_INITIAL_ORBS: u32 = 3;
pub const AURA_MAX_ORBS: u32 = 6;
pub const AURA_RADIUS_STEP: f32 = 0.5;
