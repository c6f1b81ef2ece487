//! Spatial queries over living enemies.
//!
//! `EnemyIndex` is a flat snapshot of enemy positions taken at the start of a
//! tick phase. Lookups are linear scans; the population cap keeps n small.

use glam::Vec2;
use hecs::{Entity, World};

use droplet_core::components::{Enemy, StatBlock};
use droplet_core::types::Position;

/// Proximity capability used by targeting, avoidance and area effects.
pub trait SpatialQuery {
    /// Every entity within `radius` of `point`, nearest first.
    fn query_in_radius(&self, point: Vec2, radius: f32) -> Vec<Entity>;

    /// The closest entity within `max_range` of `point`.
    fn query_nearest(&self, point: Vec2, max_range: f32) -> Option<Entity>;
}

/// Positions of living enemies, ordered by entity id.
#[derive(Debug, Clone, Default)]
pub struct EnemyIndex {
    entries: Vec<(Entity, Vec2)>,
}

impl EnemyIndex {
    pub fn build(world: &World) -> Self {
        let mut entries: Vec<(Entity, Vec2)> = world
            .query::<(&Enemy, &Position, &StatBlock)>()
            .iter()
            .filter(|(_, (enemy, _, stats))| !enemy.removed && stats.is_alive())
            .map(|(entity, (_, pos, _))| (entity, pos.0))
            .collect();
        entries.sort_by_key(|(entity, _)| entity.id());
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn positions(&self) -> Vec<Vec2> {
        self.entries.iter().map(|(_, pos)| *pos).collect()
    }

    pub fn position_of(&self, entity: Entity) -> Option<Vec2> {
        self.entries
            .iter()
            .find(|(e, _)| *e == entity)
            .map(|(_, pos)| *pos)
    }
}

impl SpatialQuery for EnemyIndex {
    fn query_in_radius(&self, point: Vec2, radius: f32) -> Vec<Entity> {
        let mut hits: Vec<(Entity, f32)> = self
            .entries
            .iter()
            .map(|(entity, pos)| (*entity, pos.distance(point)))
            .filter(|(_, d)| *d <= radius)
            .collect();
        hits.sort_by(|a, b| a.1.total_cmp(&b.1));
        hits.into_iter().map(|(entity, _)| entity).collect()
    }

    fn query_nearest(&self, point: Vec2, max_range: f32) -> Option<Entity> {
        let mut best: Option<(Entity, f32)> = None;
        for (entity, pos) in &self.entries {
            let d = pos.distance(point);
            if d > max_range {
                continue;
            }
            match best {
                Some((_, best_d)) if best_d <= d => {}
                _ => best = Some((*entity, d)),
            }
        }
        best.map(|(entity, _)| entity)
    }
}
