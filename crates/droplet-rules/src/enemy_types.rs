//! Enemy templates looked up by kind, and wave-banded kind selection.

use std::collections::HashMap;

use droplet_core::config::EnemyTypeDefinition;
use droplet_core::enums::EnemyKind;

/// Read-only template table keyed by kind tag.
#[derive(Debug, Clone, Default)]
pub struct EnemyRegistry {
    templates: HashMap<EnemyKind, EnemyTypeDefinition>,
}

impl EnemyRegistry {
    /// Build from a template list. A later entry for the same kind replaces
    /// an earlier one.
    pub fn from_definitions(definitions: &[EnemyTypeDefinition]) -> Self {
        let templates = definitions
            .iter()
            .map(|def| (def.kind, def.clone()))
            .collect();
        Self { templates }
    }

    pub fn standard() -> Self {
        Self::from_definitions(&EnemyTypeDefinition::standard_set())
    }

    /// Template for `kind`, or `None` when it is not registered.
    pub fn get(&self, kind: EnemyKind) -> Option<&EnemyTypeDefinition> {
        self.templates.get(&kind)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Probability mass for (Square, Triangle, Round) in a wave's band.
pub fn wave_weights(wave: u32) -> [f32; 3] {
    match wave {
        0..=2 => [0.7, 0.2, 0.1],
        3..=5 => [0.4, 0.3, 0.3],
        _ => [0.3, 0.2, 0.5],
    }
}

/// Pick a regular kind from a uniform `roll` in `[0, 1)` against the band
/// for `wave`.
pub fn select_kind(wave: u32, roll: f32) -> EnemyKind {
    let weights = wave_weights(wave);
    let mut cumulative = 0.0;
    for (kind, weight) in EnemyKind::REGULAR.iter().zip(weights) {
        cumulative += weight;
        if roll < cumulative {
            return *kind;
        }
    }
    // Rounding in the cumulative sum can leave a sliver below 1.0.
    EnemyKind::REGULAR[EnemyKind::REGULAR.len() - 1]
}
