//! Upgrade catalog, level-up draws, and applying a chosen upgrade.

use rand::seq::SliceRandom;
use rand::Rng;

use droplet_core::components::StatBlock;
use droplet_core::enums::StatTarget;
use droplet_core::events::UpgradeChoiceView;

/// One permanent upgrade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpgradeDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub target: StatTarget,
    /// Meaning depends on `target`: a multiplier step for Attack, AttackSpeed
    /// and MaxHealth, a flat addition otherwise.
    pub magnitude: f32,
}

impl UpgradeDefinition {
    pub fn view(&self) -> UpgradeChoiceView {
        UpgradeChoiceView {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            target: self.target,
        }
    }
}

const STANDARD_UPGRADES: [UpgradeDefinition; 8] = [
    UpgradeDefinition {
        id: "attack",
        name: "Attack Up",
        description: "+10% damage",
        target: StatTarget::Attack,
        magnitude: 0.1,
    },
    UpgradeDefinition {
        id: "attack_speed",
        name: "Attack Speed Up",
        description: "+10% attack speed",
        target: StatTarget::AttackSpeed,
        magnitude: 0.1,
    },
    UpgradeDefinition {
        id: "armor",
        name: "Armor Up",
        description: "+0.25 armor",
        target: StatTarget::Armor,
        magnitude: 0.25,
    },
    UpgradeDefinition {
        id: "max_health",
        name: "Health Up",
        description: "+10% max health, fully healed",
        target: StatTarget::MaxHealth,
        magnitude: 0.1,
    },
    UpgradeDefinition {
        id: "move_speed",
        name: "Speed Up",
        description: "+10% move speed",
        target: StatTarget::MoveSpeed,
        magnitude: 0.1,
    },
    UpgradeDefinition {
        id: "crit_chance",
        name: "Critical Chance Up",
        description: "+5% critical chance",
        target: StatTarget::CritChance,
        magnitude: 0.05,
    },
    UpgradeDefinition {
        id: "crit_damage",
        name: "Critical Damage Up",
        description: "+25% critical damage",
        target: StatTarget::CritDamage,
        magnitude: 0.25,
    },
    UpgradeDefinition {
        id: "health_regen",
        name: "Regeneration",
        description: "+1 health per second",
        target: StatTarget::HealthRegen,
        magnitude: 1.0,
    },
];

/// Fixed list of upgrades offered on level-up.
#[derive(Debug, Clone)]
pub struct UpgradeCatalog {
    entries: Vec<UpgradeDefinition>,
}

impl UpgradeCatalog {
    /// The stock eight upgrades.
    pub fn standard() -> Self {
        Self::from_entries(STANDARD_UPGRADES.to_vec())
    }

    pub fn from_entries(entries: Vec<UpgradeDefinition>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[UpgradeDefinition] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sample `count` distinct entries uniformly at random. A catalog smaller
    /// than `count` yields every entry; an empty catalog yields nothing.
    pub fn draw_choices<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<UpgradeDefinition> {
        self.entries.choose_multiple(rng, count).copied().collect()
    }
}

impl Default for UpgradeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Mutate `stats` according to the upgrade's target.
pub fn apply(stats: &mut StatBlock, upgrade: &UpgradeDefinition) {
    let m = upgrade.magnitude;
    match upgrade.target {
        StatTarget::Attack => stats.damage_multiplier *= 1.0 + m,
        StatTarget::AttackSpeed => stats.attack_speed_multiplier *= 1.0 + m,
        StatTarget::Armor => stats.armor += m,
        StatTarget::MaxHealth => {
            stats.max_health *= 1.0 + m;
            stats.current_health = stats.max_health;
        }
        StatTarget::MoveSpeed => stats.move_speed_bonus += m,
        StatTarget::CritChance => stats.crit_chance = (stats.crit_chance + m).min(1.0),
        StatTarget::CritDamage => stats.crit_damage_multiplier += m,
        StatTarget::HealthRegen => stats.health_regen_per_second += m,
    }
}
