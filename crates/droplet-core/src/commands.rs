//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary, including
//! while the simulation is paused.

use serde::{Deserialize, Serialize};

use crate::enums::WeaponKind;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Input collaborator ---
    /// Per-tick movement intent (normalized 2D direction, zero for idle).
    SetMoveIntent { x: f32, y: f32 },
    /// Dash trigger in the given direction.
    Dash { x: f32, y: f32 },

    // --- Upgrade menu ---
    /// Pick the option at `index` in the open menu.
    ChooseUpgrade { index: usize },
    /// Close the open menu without applying anything.
    DismissUpgradeMenu,
    /// Level up an owned weapon.
    UpgradeWeapon { kind: WeaponKind },

    // --- Simulation control ---
    /// Start a new run from the main menu or after game over.
    StartRun,
    /// Set time scale (1.0 = normal). Only affects host pacing.
    SetTimeScale { scale: f64 },
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
