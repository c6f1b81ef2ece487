//! Spawn director: wave state, spawn cadence, population cap.
//!
//! Waves advance on spawn count: once `enemies_per_wave` enemies have been
//! created the wave number increments, the wave size grows geometrically and
//! the spawn interval decays toward its floor. Elapsed time plays no part.

use std::f32::consts::TAU;

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;

use droplet_core::config::SpawnTuning;
use droplet_core::enums::EnemyKind;
use droplet_core::events::Signal;
use droplet_core::state::WaveView;
use droplet_rules::enemy_types::{select_kind, EnemyRegistry};
use droplet_rules::waves;

use crate::signals::TickEvents;
use crate::world_setup;

/// Wave bookkeeping. Mutated only by `SpawnDirector`.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveState {
    pub wave_number: u32,
    pub spawn_interval_secs: f32,
    pub enemies_per_wave: u32,
    pub enemies_spawned_this_wave: u32,
    pub boss_wave: bool,
}

/// Owns the wave state and the handles of every live enemy it created.
#[derive(Debug, Clone)]
pub struct SpawnDirector {
    state: WaveState,
    tuning: SpawnTuning,
    spawn_timer: f32,
    boss_pending: bool,
    active: Vec<Entity>,
}

impl SpawnDirector {
    pub fn new(tuning: &SpawnTuning) -> Self {
        let boss_wave = waves::is_boss_wave(1, tuning.boss_wave_interval);
        Self {
            state: WaveState {
                wave_number: 1,
                spawn_interval_secs: tuning.spawn_interval_secs,
                enemies_per_wave: waves::enemies_per_wave(
                    tuning.initial_enemies_per_wave,
                    tuning.wave_scaling,
                    1,
                ),
                enemies_spawned_this_wave: 0,
                boss_wave,
            },
            tuning: tuning.clone(),
            // Start due, so the first enemy appears on the first tick.
            spawn_timer: tuning.spawn_interval_secs,
            boss_pending: boss_wave,
            active: Vec::new(),
        }
    }

    pub fn state(&self) -> &WaveState {
        &self.state
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn active_enemies(&self) -> &[Entity] {
        &self.active
    }

    /// Track an enemy created outside the regular cadence.
    pub fn register(&mut self, entity: Entity) {
        if !self.active.contains(&entity) {
            self.active.push(entity);
        }
    }

    /// Drop an enemy from the live population. Returns false if it was not
    /// tracked, so a second removal is a no-op.
    pub fn remove_enemy(&mut self, entity: Entity) -> bool {
        match self.active.iter().position(|e| *e == entity) {
            Some(index) => {
                self.active.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn view(&self) -> WaveView {
        WaveView {
            wave_number: self.state.wave_number,
            enemies_per_wave: self.state.enemies_per_wave,
            enemies_spawned_this_wave: self.state.enemies_spawned_this_wave,
            active_enemy_count: self.active.len() as u32,
            spawn_interval_secs: self.state.spawn_interval_secs,
            boss_wave: self.state.boss_wave,
        }
    }

    /// One spawn-phase step around `center` (the player's position).
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        world: &mut World,
        rng: &mut R,
        registry: &EnemyRegistry,
        center: Vec2,
        dt: f32,
        events: &mut TickEvents,
    ) {
        if self.boss_pending && self.has_room() {
            self.spawn_boss(world, rng, registry, center);
        }

        self.spawn_timer += dt;
        if !self.has_room() || self.spawn_timer < self.state.spawn_interval_secs {
            return;
        }

        let angle = rng.gen_range(0.0..TAU);
        let radius = self.tuning.spawn_radius + rng.gen::<f32>() * self.tuning.spawn_radius_jitter;
        let kind = select_kind(self.state.wave_number, rng.gen::<f32>());

        let Some(template) = registry.get(kind) else {
            tracing::debug!(?kind, wave = self.state.wave_number, "no template, spawn skipped");
            return;
        };

        let position = center + Vec2::from_angle(angle) * radius;
        let multiplier =
            waves::difficulty_multiplier(self.tuning.difficulty_scaling, self.state.wave_number);
        let entity = world_setup::spawn_enemy(world, template, position, multiplier);
        self.active.push(entity);
        self.state.enemies_spawned_this_wave += 1;
        self.spawn_timer = 0.0;
        tracing::debug!(?kind, id = entity.id(), x = position.x, y = position.y, "enemy spawned");

        if self.state.enemies_spawned_this_wave >= self.state.enemies_per_wave {
            self.advance_wave(events);
        }
    }

    fn has_room(&self) -> bool {
        self.active.len() < self.tuning.max_active_enemies
    }

    fn advance_wave(&mut self, events: &mut TickEvents) {
        let state = &mut self.state;
        state.wave_number += 1;
        state.enemies_spawned_this_wave = 0;
        state.enemies_per_wave = waves::enemies_per_wave(
            self.tuning.initial_enemies_per_wave,
            self.tuning.wave_scaling,
            state.wave_number,
        );
        state.spawn_interval_secs = waves::next_spawn_interval(
            state.spawn_interval_secs,
            self.tuning.spawn_interval_decay,
            self.tuning.spawn_interval_floor_secs,
        );
        state.boss_wave = waves::is_boss_wave(state.wave_number, self.tuning.boss_wave_interval);
        self.boss_pending = state.boss_wave;

        tracing::info!(
            wave = state.wave_number,
            enemies = state.enemies_per_wave,
            interval = state.spawn_interval_secs,
            boss = state.boss_wave,
            "wave advanced"
        );
        events.signal(Signal::WaveChanged {
            wave: state.wave_number,
        });
    }

    /// One attempt per boss wave; without a Boss template it is dropped.
    fn spawn_boss<R: Rng + ?Sized>(
        &mut self,
        world: &mut World,
        rng: &mut R,
        registry: &EnemyRegistry,
        center: Vec2,
    ) {
        self.boss_pending = false;
        let Some(template) = registry.get(EnemyKind::Boss) else {
            tracing::debug!(wave = self.state.wave_number, "no boss template, boss skipped");
            return;
        };
        let angle = rng.gen_range(0.0..TAU);
        let position = center + Vec2::from_angle(angle) * self.tuning.boss_spawn_distance;
        let multiplier =
            waves::difficulty_multiplier(self.tuning.difficulty_scaling, self.state.wave_number);
        let entity = world_setup::spawn_enemy(world, template, position, multiplier);
        self.active.push(entity);
        tracing::info!(wave = self.state.wave_number, id = entity.id(), "boss spawned");
    }
}
