#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::components::StatBlock;
    use crate::config::{ConfigError, SimConfig};
    use crate::enums::*;
    use crate::events::Signal;
    use crate::state::GameStateSnapshot;
    use crate::types::{Position, SimTime};

    #[test]
    fn test_player_command_tagged_json() {
        let json = r#"{"type":"ChooseUpgrade","index":2}"#;
        let cmd: PlayerCommand = serde_json::from_str(json).unwrap();
        assert!(matches!(cmd, PlayerCommand::ChooseUpgrade { index: 2 }));

        let json = r#"{"type":"UpgradeWeapon","kind":"EnergyAura"}"#;
        let cmd: PlayerCommand = serde_json::from_str(json).unwrap();
        assert!(matches!(
            cmd,
            PlayerCommand::UpgradeWeapon {
                kind: WeaponKind::EnergyAura
            }
        ));
    }

    #[test]
    fn test_signal_serializes_with_type_tag() {
        let json = serde_json::to_string(&Signal::LevelUp { level: 3 }).unwrap();
        assert_eq!(json, r#"{"type":"LevelUp","level":3}"#);

        let json = serde_json::to_string(&Signal::Death).unwrap();
        assert_eq!(json, r#"{"type":"Death"}"#);
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::MainMenu);
        assert!(back.upgrade_menu.is_none());
    }

    #[test]
    fn test_player_stats_defaults() {
        let stats = StatBlock::player();
        assert_eq!(stats.level, 1);
        assert_eq!(stats.experience, 0);
        assert_eq!(stats.experience_to_next_level, 2);
        assert_eq!(stats.current_health, stats.max_health);
        assert!(stats.is_alive());
        // 5.0 base * 1.25
        assert!((stats.move_speed() - 6.25).abs() < 1e-6);
    }

    #[test]
    fn test_position_helpers() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-6);
        let dir = a.direction_to(&b);
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert_eq!(a.direction_to(&a), glam::Vec2::ZERO);
        assert!((a.bearing_to(&Position::new(0.0, 1.0)) - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..crate::constants::TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, crate::constants::TICK_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    // ---- Config ----

    #[test]
    fn test_default_config_is_valid() {
        let config = SimConfig::default();
        config.validate().unwrap();
        assert_eq!(config.enemies.len(), 3);
        assert!(config.enemies.iter().all(|e| e.kind != EnemyKind::Boss));
    }

    #[test]
    fn test_partial_json_overrides_only_named_fields() {
        let config = SimConfig::from_json_str(
            r#"{ "seed": 7, "spawn": { "max_active_enemies": 10 }, "player": { "stats": { "armor": 50.0 } } }"#,
        )
        .unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.spawn.max_active_enemies, 10);
        assert_eq!(config.spawn.initial_enemies_per_wave, 5);
        assert_eq!(config.player.stats.armor, 50.0);
        assert_eq!(config.player.stats.max_health, 100.0);
        assert_eq!(config.enemies.len(), 3);
    }

    #[test]
    fn test_boss_template_from_json() {
        let config = SimConfig::from_json_str(
            r#"{ "enemies": [
                { "kind": "Square", "name": "Square", "max_health": 100.0, "damage": 33.0, "move_speed": 2.5, "experience_value": 1 },
                { "kind": "Boss", "name": "Boss", "max_health": 800.0, "damage": 50.0, "move_speed": 1.5, "experience_value": 10 }
            ] }"#,
        )
        .unwrap();
        assert_eq!(config.enemies.len(), 2);
        assert_eq!(config.enemies[1].kind, EnemyKind::Boss);
        assert_eq!(config.enemies[1].attack_cooldown_secs, 1.0);
    }

    #[test]
    fn test_invalid_probability_rejected() {
        let err = SimConfig::from_json_str(r#"{ "player": { "stats": { "dodge_chance": 1.5 } } }"#)
            .unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "player.stats.dodge_chance"),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_dead_starting_player_rejected() {
        let err = SimConfig::from_json_str(r#"{ "player": { "stats": { "current_health": 0.0 } } }"#)
            .unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "player.stats.current_health"),
            other => panic!("expected Invalid, got {other:?}"),
        }

        let mut config = SimConfig::default();
        config.player.stats.current_health = config.player.stats.max_health + 1.0;
        assert!(config.validate().is_err());
        config.player.stats.current_health = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_nan_wave_scaling_rejected() {
        let mut config = SimConfig::default();
        config.spawn.wave_scaling = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "spawn.wave_scaling", .. })
        ));
        config.spawn.wave_scaling = f64::INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_pickup_range_beyond_attraction_rejected() {
        let err = SimConfig::from_json_str(
            r#"{ "pickups": { "attraction_range": 1.0, "pickup_range": 2.0 } }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { field: "pickups.pickup_range", .. }
        ));
    }

    #[test]
    fn test_experience_threshold_below_level_rejected() {
        let mut config = SimConfig::default();
        config.player.stats.level = 3;
        config.player.stats.experience_to_next_level = 4;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "player.stats.experience_to_next_level", .. })
        ));
        config.player.stats.experience_to_next_level = 6;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_spawn_interval_below_floor_rejected() {
        let err = SimConfig::from_json_str(
            r#"{ "spawn": { "spawn_interval_secs": 0.2, "spawn_interval_floor_secs": 0.5 } }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "spawn.spawn_interval_secs",
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = SimConfig::from_json_str("{ seed: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SimConfig::load("/nonexistent/droplet-config.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("droplet-config.json"));
    }
}
