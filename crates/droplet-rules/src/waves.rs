//! Wave arithmetic: size scaling, spawn cadence decay, boss cadence,
//! difficulty growth.

/// Enemies in `wave` (1-based): `round(initial * scaling^(wave - 1))`.
pub fn enemies_per_wave(initial: u32, scaling: f64, wave: u32) -> u32 {
    let exponent = wave.saturating_sub(1) as i32;
    let count = (initial as f64 * scaling.powi(exponent)).round();
    if count >= u32::MAX as f64 {
        u32::MAX
    } else {
        count.max(0.0) as u32
    }
}

/// Interval after one wave advance, never below `floor`.
pub fn next_spawn_interval(current: f32, decay: f32, floor: f32) -> f32 {
    (current * decay).max(floor)
}

pub fn is_boss_wave(wave: u32, interval: u32) -> bool {
    interval > 0 && wave > 0 && wave % interval == 0
}

/// Max-health multiplier for enemies spawned in `wave`.
pub fn difficulty_multiplier(scaling: f32, wave: u32) -> f32 {
    scaling.powi(wave.saturating_sub(1) as i32)
}
