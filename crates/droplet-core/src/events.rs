//! Signals emitted by the simulation for the UI layer, and effect requests
//! for the effects collaborator.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// State-change notification published to UI subscribers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Signal {
    /// Player health changed.
    HealthChanged { current: f32, max: f32 },
    /// Player reached a new level. One per level gained, ascending.
    LevelUp { level: u32 },
    /// Player died. Emitted exactly once per run.
    Death,
    /// A new wave started.
    WaveChanged { wave: u32 },
    /// Experience was credited to the player.
    ExperienceGained { amount: u32, total: u32 },
    /// Upgrade menu opened; the simulation is paused until it closes.
    UpgradeMenuOpened { choices: Vec<UpgradeChoiceView> },
    /// Upgrade menu closed; the simulation resumes unless another menu is queued.
    UpgradeMenuClosed,
    /// An enemy died.
    EnemyKilled { kind: EnemyKind, position: Vec2 },
    /// A weapon was added to the player's arsenal.
    WeaponUnlocked { kind: WeaponKind },
}

/// One upgrade option as shown in the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeChoiceView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub target: StatTarget,
}

/// Fire-and-forget request to play a visual effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectRequest {
    pub kind: EffectKind,
    pub position: Vec2,
    /// Facing in radians, counter-clockwise from +X.
    pub angle: f32,
}

impl EffectRequest {
    pub fn at(kind: EffectKind, position: Vec2) -> Self {
        Self {
            kind,
            position,
            angle: 0.0,
        }
    }
}
