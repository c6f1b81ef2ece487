//! Weapon defaults, cooldown cadence, and firing geometry.

use glam::Vec2;

use droplet_core::components::{StatBlock, WeaponParams, WeaponState};
use droplet_core::constants::*;
use droplet_core::enums::WeaponKind;

/// Level-1 state of a freshly unlocked weapon. Cooldown starts at zero so it
/// activates on its first tick.
pub fn default_weapon(kind: WeaponKind) -> WeaponState {
    let (base_damage, fire_rate, params) = match kind {
        WeaponKind::Gun => (
            GUN_DAMAGE,
            GUN_FIRE_RATE,
            WeaponParams::SingleShot {
                projectile_speed: GUN_PROJECTILE_SPEED,
                projectile_lifetime_secs: GUN_PROJECTILE_LIFETIME_SECS,
                max_range: GUN_MAX_RANGE,
            },
        ),
        WeaponKind::DoubleBarrel => (
            DOUBLE_BARREL_DAMAGE,
            DOUBLE_BARREL_FIRE_RATE,
            WeaponParams::Spread {
                projectile_speed: DOUBLE_BARREL_PROJECTILE_SPEED,
                projectile_lifetime_secs: DOUBLE_BARREL_PROJECTILE_LIFETIME_SECS,
                max_range: DOUBLE_BARREL_MAX_RANGE,
                spread_deg: DOUBLE_BARREL_SPREAD_DEG,
            },
        ),
        WeaponKind::Sword => (
            SWORD_DAMAGE,
            SWORD_FIRE_RATE,
            WeaponParams::MeleeArc {
                radius: SWORD_RADIUS,
                arc_deg: SWORD_ARC_DEG,
            },
        ),
        WeaponKind::EnergyAura => (
            AURA_DAMAGE,
            AURA_FIRE_RATE,
            WeaponParams::Aura {
                radius: AURA_RADIUS,
                rotation_deg_per_sec: AURA_ROTATION_DEG_PER_SEC,
                orb_count: AURA_INITIAL_ORBS,
                max_orbs: AURA_MAX_ORBS,
                radius_step: AURA_RADIUS_STEP,
                rotation_deg: 0.0,
            },
        ),
    };

    WeaponState {
        kind,
        level: 1,
        base_damage,
        fire_rate,
        cooldown_remaining_secs: 0.0,
        params,
    }
}

/// Activations per second after the owner's attack-speed multiplier.
pub fn effective_fire_rate(weapon: &WeaponState, owner: &StatBlock) -> f32 {
    weapon.fire_rate * owner.attack_speed_multiplier
}

/// Advance the cooldown by `dt`. Returns true when the weapon activates this
/// tick, in which case the cooldown is reset to one full period whether or
/// not the activation finds a target.
pub fn tick_cooldown(weapon: &mut WeaponState, owner: &StatBlock, dt: f32) -> bool {
    if weapon.cooldown_remaining_secs <= 0.0 {
        let rate = effective_fire_rate(weapon, owner);
        weapon.cooldown_remaining_secs = if rate > 0.0 { 1.0 / rate } else { f32::INFINITY };
        true
    } else {
        weapon.cooldown_remaining_secs -= dt;
        false
    }
}

/// Level the weapon: +1 level, base damage x1.1. The aura also gains an orb
/// on even levels while under its cap, and radius otherwise.
pub fn level_up(weapon: &mut WeaponState) {
    weapon.level += 1;
    weapon.base_damage *= WEAPON_LEVEL_DAMAGE_FACTOR;

    if let WeaponParams::Aura {
        radius,
        orb_count,
        max_orbs,
        radius_step,
        ..
    } = &mut weapon.params
    {
        if weapon.level % 2 == 0 && *orb_count < *max_orbs {
            *orb_count += 1;
        } else {
            *radius += *radius_step;
        }
    }
}

/// The two barrel directions, `aim` rotated by plus and minus half the spread.
pub fn spread_directions(aim: Vec2, spread_deg: f32) -> [Vec2; 2] {
    let half = (spread_deg * 0.5).to_radians();
    [
        Vec2::from_angle(half).rotate(aim),
        Vec2::from_angle(-half).rotate(aim),
    ]
}

/// Whether `to_target` lies within half of `arc_deg` of `aim`. A target at the
/// origin of the arc counts as inside.
pub fn within_arc(aim: Vec2, to_target: Vec2, arc_deg: f32) -> bool {
    let aim = aim.normalize_or_zero();
    let dir = to_target.normalize_or_zero();
    if dir == Vec2::ZERO {
        return true;
    }
    if aim == Vec2::ZERO {
        return false;
    }
    let angle = aim.dot(dir).clamp(-1.0, 1.0).acos().to_degrees();
    angle <= arc_deg * 0.5
}

/// Advance the aura rotation by `dt`, wrapped to `[0, 360)`.
pub fn advance_orbit(weapon: &mut WeaponState, dt: f32) {
    if let WeaponParams::Aura {
        rotation_deg,
        rotation_deg_per_sec,
        ..
    } = &mut weapon.params
    {
        *rotation_deg = (*rotation_deg + *rotation_deg_per_sec * dt).rem_euclid(360.0);
    }
}

/// Satellite positions evenly spaced around `center`.
pub fn orbit_positions(center: Vec2, radius: f32, rotation_deg: f32, count: u32) -> Vec<Vec2> {
    if count == 0 {
        return Vec::new();
    }
    let step = 360.0 / count as f32;
    (0..count)
        .map(|i| {
            let angle = (rotation_deg + step * i as f32).to_radians();
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

/// Orb positions for an aura weapon, empty for every other kind.
pub fn weapon_orbs(weapon: &WeaponState, center: Vec2) -> Vec<Vec2> {
    match weapon.params {
        WeaponParams::Aura {
            radius,
            orb_count,
            rotation_deg,
            ..
        } => orbit_positions(center, radius, rotation_deg, orb_count),
        _ => Vec::new(),
    }
}
