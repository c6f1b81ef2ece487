//! Combat resolution: outgoing damage, mitigation, dodge, healing.
//!
//! Pure functions over `StatBlock`. Every random branch draws from the
//! caller's RNG so outcomes replay exactly under a fixed seed.

use rand::Rng;

use droplet_core::components::StatBlock;
use droplet_core::constants::ARMOR_MITIGATION_CONSTANT;

/// Result of applying one hit to a defender.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DamageOutcome {
    /// Health actually removed (after mitigation and the zero clamp).
    pub applied: f32,
    pub dodged: bool,
    /// True only on the hit that took the defender from alive to dead.
    pub died: bool,
}

/// Outgoing damage: `base * damage_multiplier`, times the crit multiplier when
/// a uniform draw lands under `crit_chance`.
pub fn resolve_damage<R: Rng + ?Sized>(attacker: &StatBlock, base_damage: f32, rng: &mut R) -> f32 {
    let damage = base_damage * attacker.damage_multiplier;
    if rng.gen::<f32>() < attacker.crit_chance {
        damage * attacker.crit_damage_multiplier
    } else {
        damage
    }
}

/// Fraction of damage removed by armor, in `[0, 1)`.
pub fn armor_reduction(armor: f32) -> f32 {
    let armor = armor.max(0.0);
    armor / (armor + ARMOR_MITIGATION_CONSTANT)
}

/// Damage left after armor: `raw * (1 - armor / (armor + 100))`.
pub fn mitigate(raw_damage: f32, armor: f32) -> f32 {
    raw_damage * (1.0 - armor_reduction(armor))
}

/// Apply a hit to `defender`.
///
/// A dead defender is left untouched and no random draw is made. Otherwise a
/// dodge roll comes first and short-circuits mitigation entirely.
pub fn apply_damage<R: Rng + ?Sized>(
    defender: &mut StatBlock,
    raw_damage: f32,
    rng: &mut R,
) -> DamageOutcome {
    if !defender.is_alive() {
        return DamageOutcome::default();
    }

    if rng.gen::<f32>() < defender.dodge_chance {
        return DamageOutcome {
            dodged: true,
            ..DamageOutcome::default()
        };
    }

    let mitigated = mitigate(raw_damage.max(0.0), defender.armor);
    let before = defender.current_health;
    defender.current_health = (before - mitigated).max(0.0);

    DamageOutcome {
        applied: before - defender.current_health,
        dodged: false,
        died: defender.current_health <= 0.0,
    }
}

/// Restore health up to the maximum. Returns the amount actually healed;
/// zero for a dead actor.
pub fn heal(stats: &mut StatBlock, amount: f32) -> f32 {
    if !stats.is_alive() || amount <= 0.0 {
        return 0.0;
    }
    let before = stats.current_health;
    stats.current_health = (before + amount).min(stats.max_health);
    stats.current_health - before
}

/// Per-tick regeneration.
pub fn regenerate(stats: &mut StatBlock, dt: f32) -> f32 {
    if stats.health_regen_per_second <= 0.0 || stats.current_health >= stats.max_health {
        return 0.0;
    }
    heal(stats, stats.health_regen_per_second * dt)
}
