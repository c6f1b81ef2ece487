//! Enemy chase/attack decisions and steering.
//!
//! Pure functions over positions. The sim feeds in neighbor positions from
//! its spatial index and applies the returned direction.

use glam::Vec2;

/// What an enemy does this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnemyIntent {
    /// Player out of detection range; stand still.
    Idle,
    /// Move along this unit direction.
    Chase(Vec2),
    /// Within attack range; halt and try to attack.
    Attack,
}

/// Ranges an enemy reacts at.
#[derive(Debug, Clone, Copy)]
pub struct SteeringParams {
    pub detection_range: f32,
    pub attack_range: f32,
    pub avoidance_radius: f32,
    pub separation_weight: f32,
}

/// Decide the enemy's intent given its neighbors (other enemies' positions,
/// which may include its own; coincident points are ignored).
pub fn evaluate(
    enemy: Vec2,
    player: Vec2,
    neighbors: &[Vec2],
    params: &SteeringParams,
) -> EnemyIntent {
    let distance = enemy.distance(player);
    if distance > params.detection_range {
        return EnemyIntent::Idle;
    }
    if distance <= params.attack_range {
        return EnemyIntent::Attack;
    }

    let toward = (player - enemy).normalize_or_zero();
    let away = separation(enemy, neighbors, params.avoidance_radius);
    let blended = (toward + away * params.separation_weight).normalize_or_zero();
    if blended == Vec2::ZERO {
        EnemyIntent::Chase(toward)
    } else {
        EnemyIntent::Chase(blended)
    }
}

/// Sum of unit away-vectors from every neighbor within `radius`.
pub fn separation(from: Vec2, neighbors: &[Vec2], radius: f32) -> Vec2 {
    neighbors
        .iter()
        .filter(|&&other| {
            let d = from.distance(other);
            d > 0.0 && d < radius
        })
        .map(|&other| (from - other).normalize_or_zero())
        .sum()
}

/// Whether an attack may land now, given the time of the last one.
pub fn attack_ready(last_attack_secs: Option<f64>, now_secs: f64, cooldown_secs: f32) -> bool {
    match last_attack_secs {
        None => true,
        Some(last) => now_secs >= last + cooldown_secs as f64,
    }
}

/// Step from `from` toward `to` by at most `max_step`, never overshooting.
pub fn move_towards(from: Vec2, to: Vec2, max_step: f32) -> Vec2 {
    let delta = to - from;
    let distance = delta.length();
    if distance <= max_step || distance == 0.0 {
        to
    } else {
        from + delta / distance * max_step
    }
}
