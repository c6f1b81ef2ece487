//! Experience and leveling.

use droplet_core::components::StatBlock;
use droplet_core::constants::EXPERIENCE_PER_LEVEL;

/// Experience needed to leave `level`.
pub fn experience_threshold(level: u32) -> u32 {
    level.max(1).saturating_mul(EXPERIENCE_PER_LEVEL)
}

/// Credit experience and roll over into as many levels as it covers.
///
/// Returns the levels reached, ascending. One large grant may cross several
/// thresholds; each crossing recomputes the threshold from the new level.
pub fn add_experience(stats: &mut StatBlock, amount: u32) -> Vec<u32> {
    let mut gained = Vec::new();
    stats.experience = stats.experience.saturating_add(amount);

    while stats.experience_to_next_level > 0 && stats.experience >= stats.experience_to_next_level {
        stats.experience -= stats.experience_to_next_level;
        stats.level += 1;
        stats.experience_to_next_level = experience_threshold(stats.level);
        gained.push(stats.level);
    }

    gained
}
