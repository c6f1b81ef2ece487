//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy kind tag used to look up an `EnemyTypeDefinition`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Baseline chaser.
    Square,
    /// Fast and fragile.
    Triangle,
    /// Slow and tanky; weighted up in later waves.
    Round,
    /// Boss-wave enemy. Only spawns when a template is registered.
    Boss,
}

impl EnemyKind {
    /// Kinds drawn by the regular spawn cadence.
    pub const REGULAR: [EnemyKind; 3] = [EnemyKind::Square, EnemyKind::Triangle, EnemyKind::Round];
}

/// Player stat an upgrade mutates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatTarget {
    Attack,
    AttackSpeed,
    Armor,
    /// Raises max health and fully heals.
    MaxHealth,
    MoveSpeed,
    CritChance,
    CritDamage,
    HealthRegen,
}

/// Experience pickup behavior phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttractionState {
    /// Resting until the player comes within attraction range.
    #[default]
    Idle,
    /// Homing on the player.
    Attracted,
    /// Granted to the player. Terminal.
    Collected,
}

/// Weapon variant attached to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WeaponKind {
    /// Single projectile at the nearest enemy.
    Gun,
    /// Two projectiles split around the aim direction.
    DoubleBarrel,
    /// Melee cone along the last movement direction.
    Sword,
    /// Orbiting satellites damaging everything within a radius.
    EnergyAura,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    /// Paused by the player.
    Paused,
    /// Paused on level-up until an upgrade is chosen or dismissed.
    UpgradeMenu,
    GameOver,
}

/// Visual effect kinds handed to the effects collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    DashTrail,
    HitFlash,
    Slash,
    Death,
}
