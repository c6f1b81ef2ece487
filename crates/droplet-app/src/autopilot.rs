//! A simple automatic player for headless runs.
//!
//! Kites away from nearby enemies while orbiting so the weapons keep
//! getting targets, and always takes the first upgrade offered.

use glam::Vec2;

use droplet_core::commands::PlayerCommand;
use droplet_core::events::Signal;
use droplet_core::state::GameStateSnapshot;

/// Enemies closer than this push the player away.
const THREAT_RANGE: f32 = 4.0;

/// Commands to send in response to one snapshot.
pub fn respond(snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
    let mut commands: Vec<PlayerCommand> = snapshot
        .signals
        .iter()
        .filter(|s| matches!(s, Signal::UpgradeMenuOpened { .. }))
        .map(|_| PlayerCommand::ChooseUpgrade { index: 0 })
        .collect();

    let intent = move_intent(snapshot);
    commands.push(PlayerCommand::SetMoveIntent {
        x: intent.x,
        y: intent.y,
    });
    commands
}

/// Away from close enemies plus a tangential drift around their centroid.
pub fn move_intent(snapshot: &GameStateSnapshot) -> Vec2 {
    let me = snapshot.player.position;
    let mut away = Vec2::ZERO;
    let mut centroid = Vec2::ZERO;
    for enemy in &snapshot.enemies {
        centroid += enemy.position;
        let offset = me - enemy.position;
        let d = offset.length();
        if d > 0.0 && d < THREAT_RANGE {
            away += offset / d * (THREAT_RANGE - d) / THREAT_RANGE;
        }
    }
    if snapshot.enemies.is_empty() {
        return Vec2::ZERO;
    }

    centroid /= snapshot.enemies.len() as f32;
    let tangent = (me - centroid).perp().normalize_or_zero();
    (away * 2.0 + tangent * 0.5).clamp_length_max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use droplet_core::enums::EnemyKind;
    use droplet_core::state::EnemyView;

    fn enemy_at(id: u32, x: f32, y: f32) -> EnemyView {
        EnemyView {
            id,
            kind: EnemyKind::Square,
            position: Vec2::new(x, y),
            current_health: 100.0,
            max_health: 100.0,
        }
    }

    #[test]
    fn test_idle_without_enemies() {
        let snapshot = GameStateSnapshot::default();
        assert_eq!(move_intent(&snapshot), Vec2::ZERO);
    }

    #[test]
    fn test_flees_close_enemy() {
        let snapshot = GameStateSnapshot {
            enemies: vec![enemy_at(1, 1.0, 0.0)],
            ..Default::default()
        };
        let intent = move_intent(&snapshot);
        assert!(intent.x < 0.0);
        assert!(intent.length() <= 1.0 + 1e-6);
    }

    #[test]
    fn test_picks_first_upgrade_per_menu() {
        let snapshot = GameStateSnapshot {
            signals: vec![
                Signal::UpgradeMenuClosed,
                Signal::UpgradeMenuOpened {
                    choices: Vec::new(),
                },
            ],
            ..Default::default()
        };
        let commands = respond(&snapshot);
        assert_eq!(commands.len(), 2);
        assert!(matches!(
            commands[0],
            PlayerCommand::ChooseUpgrade { index: 0 }
        ));
    }
}
