//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use droplet_core::commands::PlayerCommand;
use droplet_core::components::{Arsenal, StatBlock};
use droplet_core::config::{ConfigError, SimConfig};
use droplet_core::constants::DT;
use droplet_core::enums::{GamePhase, StatTarget, WeaponKind};
use droplet_core::events::{EffectRequest, Signal};
use droplet_core::state::GameStateSnapshot;
use droplet_core::types::{Position, SimTime};
use droplet_rules::enemy_types::EnemyRegistry;
use droplet_rules::upgrades::{self, UpgradeCatalog, UpgradeDefinition};
use droplet_rules::weapons;

use crate::signals::{SignalBus, Subscription, SubscriptionId, TickEvents};
use crate::systems;
use crate::systems::spawn_director::{SpawnDirector, WaveState};
use crate::world_setup;

/// Running totals for the current run.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub enemies_killed: u32,
    pub total_experience: u32,
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    config: SimConfig,
    registry: EnemyRegistry,
    catalog: UpgradeCatalog,
    director: SpawnDirector,
    player: Option<Entity>,
    score: ScoreState,

    // Upgrade menu: the open one, plus level-ups still waiting for theirs.
    upgrade_menu: Option<Vec<UpgradeDefinition>>,
    pending_menus: u32,

    events: TickEvents,
    signal_bus: SignalBus<Signal>,
    effect_bus: SignalBus<EffectRequest>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            registry: EnemyRegistry::from_definitions(&config.enemies),
            catalog: UpgradeCatalog::standard(),
            director: SpawnDirector::new(&config.spawn),
            player: None,
            score: ScoreState::default(),
            upgrade_menu: None,
            pending_menus: 0,
            events: TickEvents::default(),
            signal_bus: SignalBus::new(),
            effect_bus: SignalBus::new(),
            config,
        }
    }

    /// Validate the config first.
    pub fn try_new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Replace the upgrade catalog (defaults to the standard eight).
    pub fn with_catalog(mut self, catalog: UpgradeCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        self.signal_bus.publish_all(&events.signals);
        self.effect_bus.publish_all(&events.effects);

        let menu: Option<Vec<_>> = self
            .upgrade_menu
            .as_ref()
            .map(|choices| choices.iter().map(UpgradeDefinition::view).collect());
        systems::snapshot::build_snapshot(
            &self.world,
            self.player,
            &self.time,
            self.phase,
            &self.director,
            menu,
            self.config.player.dash_cooldown_secs,
            events,
            &self.score,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn wave(&self) -> &WaveState {
        self.director.state()
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// The player entity, once a run has started.
    pub fn player(&self) -> Option<Entity> {
        self.player
    }

    pub fn player_stats(&self) -> Option<StatBlock> {
        let player = self.player?;
        self.world.get::<&StatBlock>(player).ok().map(|s| (*s).clone())
    }

    /// Choices of the open upgrade menu.
    pub fn upgrade_menu(&self) -> Option<&[UpgradeDefinition]> {
        self.upgrade_menu.as_deref()
    }

    pub fn subscribe_signals(&mut self) -> Subscription<Signal> {
        self.signal_bus.subscribe()
    }

    pub fn subscribe_effects(&mut self) -> Subscription<EffectRequest> {
        self.effect_bus.subscribe()
    }

    pub fn unsubscribe_signals(&mut self, id: SubscriptionId) -> bool {
        self.signal_bus.unsubscribe(id)
    }

    pub fn unsubscribe_effects(&mut self, id: SubscriptionId) -> bool {
        self.effect_bus.unsubscribe(id)
    }

    /// Spawn an enemy from its template at a fixed position (for testing).
    #[cfg(test)]
    pub fn spawn_test_enemy(
        &mut self,
        kind: droplet_core::enums::EnemyKind,
        position: Vec2,
    ) -> Option<Entity> {
        let template = self.registry.get(kind)?;
        let entity = world_setup::spawn_enemy(&mut self.world, template, position, 1.0);
        self.director.register(entity);
        Some(entity)
    }

    /// Drop an experience orb at a fixed position (for testing).
    #[cfg(test)]
    pub fn spawn_test_pickup(&mut self, position: Vec2, experience_value: u32) -> Entity {
        world_setup::spawn_pickup(&mut self.world, position, experience_value)
    }

    /// Teleport the player (for testing).
    #[cfg(test)]
    pub fn set_player_position(&mut self, position: Vec2) {
        if let Some(player) = self.player {
            if let Ok(mut pos) = self.world.get::<&mut Position>(player) {
                pos.0 = position;
            }
        }
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartRun => {
                if matches!(self.phase, GamePhase::MainMenu | GamePhase::GameOver) {
                    self.start_run();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, 4.0);
            }
            PlayerCommand::SetMoveIntent { x, y } => {
                if let Some(player) = self.player {
                    systems::player::set_move_intent(&mut self.world, player, Vec2::new(x, y));
                }
            }
            PlayerCommand::Dash { x, y } => {
                if let (GamePhase::Active, Some(player)) = (self.phase, self.player) {
                    systems::player::trigger_dash(
                        &mut self.world,
                        player,
                        Vec2::new(x, y),
                        &self.config.player,
                        &mut self.events,
                    );
                }
            }
            PlayerCommand::ChooseUpgrade { index } => self.choose_upgrade(index),
            PlayerCommand::DismissUpgradeMenu => {
                if self.upgrade_menu.is_some() {
                    tracing::info!("upgrade menu dismissed");
                    self.close_menu();
                }
            }
            PlayerCommand::UpgradeWeapon { kind } => self.upgrade_weapon(kind),
        }
    }

    fn start_run(&mut self) {
        self.world.clear();
        let player = world_setup::spawn_player(
            &mut self.world,
            &self.config.player,
            &self.config.progression.starting_weapons,
        );
        self.player = Some(player);
        self.director = SpawnDirector::new(&self.config.spawn);
        self.time = SimTime::default();
        self.score = ScoreState::default();
        self.upgrade_menu = None;
        self.pending_menus = 0;
        self.phase = GamePhase::Active;

        let stats = &self.config.player.stats;
        self.events.signal(Signal::HealthChanged {
            current: stats.current_health,
            max: stats.max_health,
        });
        self.events.signal(Signal::WaveChanged {
            wave: self.director.state().wave_number,
        });
        tracing::info!(seed = self.config.seed, "run started");
    }

    fn choose_upgrade(&mut self, index: usize) {
        let Some(choice) = self
            .upgrade_menu
            .as_ref()
            .and_then(|choices| choices.get(index))
            .copied()
        else {
            tracing::warn!(index, "no upgrade choice at that index");
            return;
        };
        let Some(player) = self.player else {
            return;
        };

        if let Ok(mut stats) = self.world.get::<&mut StatBlock>(player) {
            upgrades::apply(&mut stats, &choice);
            if choice.target == StatTarget::MaxHealth {
                self.events.signal(Signal::HealthChanged {
                    current: stats.current_health,
                    max: stats.max_health,
                });
            }
        }
        tracing::info!(upgrade = choice.id, "upgrade applied");
        self.close_menu();
    }

    fn upgrade_weapon(&mut self, kind: WeaponKind) {
        let Some(player) = self.player else {
            return;
        };
        let Ok(mut arsenal) = self.world.get::<&mut Arsenal>(player) else {
            return;
        };
        match arsenal.get_mut(kind) {
            Some(weapon) => {
                weapons::level_up(weapon);
                tracing::info!(?kind, level = weapon.level, "weapon upgraded");
            }
            None => tracing::warn!(?kind, "cannot upgrade a weapon the player does not own"),
        }
    }

    /// Unlock weapons for each level reached and queue one menu per level.
    fn handle_level_ups(&mut self, levels: &[u32]) {
        if levels.is_empty() {
            return;
        }
        let Some(player) = self.player else {
            return;
        };

        if let Ok(mut arsenal) = self.world.get::<&mut Arsenal>(player) {
            for &level in levels {
                for &(unlock_level, kind) in &self.config.progression.weapon_unlocks {
                    if unlock_level == level && !arsenal.has(kind) {
                        arsenal.weapons.push(weapons::default_weapon(kind));
                        self.events.signal(Signal::WeaponUnlocked { kind });
                        tracing::info!(?kind, level, "weapon unlocked");
                    }
                }
            }
        }

        self.pending_menus += levels.len() as u32;
        self.open_next_menu();
    }

    /// Open the next queued menu, pausing the simulation.
    fn open_next_menu(&mut self) {
        if self.upgrade_menu.is_some() || self.pending_menus == 0 {
            return;
        }
        let choices = self
            .catalog
            .draw_choices(self.config.progression.upgrade_choices, &mut self.rng);
        if choices.is_empty() {
            tracing::debug!("upgrade catalog is empty, no menu offered");
            self.pending_menus = 0;
            return;
        }

        self.events.signal(Signal::UpgradeMenuOpened {
            choices: choices.iter().map(UpgradeDefinition::view).collect(),
        });
        self.upgrade_menu = Some(choices);
        self.phase = GamePhase::UpgradeMenu;
    }

    /// Close the open menu; resume unless another one is queued.
    fn close_menu(&mut self) {
        if self.upgrade_menu.take().is_none() {
            return;
        }
        self.pending_menus = self.pending_menus.saturating_sub(1);
        self.events.signal(Signal::UpgradeMenuClosed);
        self.open_next_menu();
        if self.upgrade_menu.is_none() && self.phase == GamePhase::UpgradeMenu {
            self.phase = GamePhase::Active;
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let Some(player) = self.player else {
            tracing::debug!("no player entity, tick skipped");
            return;
        };

        // 1. Player input, movement, dash, regeneration
        systems::player::run(
            &mut self.world,
            player,
            &self.config.player,
            DT,
            &mut self.events,
        );
        let center = self
            .world
            .get::<&Position>(player)
            .map(|p| p.0)
            .unwrap_or_default();
        // 2. Spawning
        self.director.update(
            &mut self.world,
            &mut self.rng,
            &self.registry,
            center,
            DT,
            &mut self.events,
        );
        // 3. Enemy AI and contact attacks
        let player_died = systems::enemy_ai::run(
            &mut self.world,
            player,
            &self.config.enemy_ai,
            self.time.elapsed_secs,
            DT,
            &mut self.rng,
            &mut self.events,
        );
        if player_died {
            self.phase = GamePhase::GameOver;
            tracing::info!(
                survived_secs = self.time.elapsed_secs,
                killed = self.score.enemies_killed,
                "player died"
            );
            systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
            return;
        }
        // 4. Weapons
        systems::weapons::run(&mut self.world, player, DT, &mut self.rng, &mut self.events);
        // 5. Projectile flight and contact
        systems::projectiles::run(&mut self.world, DT, &mut self.rng, &mut self.events);
        // 6. Enemy deaths
        self.score.enemies_killed +=
            systems::casualties::run(&mut self.world, &mut self.director, &mut self.events);
        // 7. Pickups and progression
        let collection = systems::pickups::run(
            &mut self.world,
            player,
            &self.config.pickups,
            self.config.player.radius,
            DT,
            &mut self.score.total_experience,
            &mut self.events,
        );
        // 8. Upgrade check
        self.handle_level_ups(&collection.levels);
        // 9. Cleanup
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }
}
