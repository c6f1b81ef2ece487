//! Experience orbs: Idle -> Attracted -> Collected.

use glam::Vec2;
use hecs::{Entity, World};

use droplet_core::components::{PickupRecord, StatBlock};
use droplet_core::config::PickupTuning;
use droplet_core::enums::AttractionState;
use droplet_core::events::Signal;
use droplet_core::types::Position;
use droplet_rules::progression;
use droplet_rules::steering::move_towards;

use crate::signals::TickEvents;

/// Experience handed to the player this phase.
#[derive(Debug, Default)]
pub struct Collection {
    pub experience: u32,
    /// Levels reached, ascending.
    pub levels: Vec<u32>,
}

/// Advance every pickup and credit collected ones to the player.
/// `total_experience` is the run's running total.
pub fn run(
    world: &mut World,
    player: Entity,
    tuning: &PickupTuning,
    contact_radius: f32,
    dt: f32,
    total_experience: &mut u32,
    events: &mut TickEvents,
) -> Collection {
    let mut collection = Collection::default();
    let Ok(player_pos) = world.get::<&Position>(player).map(|p| p.0) else {
        return collection;
    };

    let mut collected = Vec::new();
    for (entity, (pickup, pos)) in world.query_mut::<(&mut PickupRecord, &mut Position)>() {
        if step(pickup, &mut pos.0, player_pos, tuning, contact_radius, dt) {
            collected.push((entity, pickup.experience_value));
        }
    }
    collected.sort_by_key(|(entity, _)| entity.id());

    let Ok(mut stats) = world.get::<&mut StatBlock>(player) else {
        return collection;
    };
    for (_, value) in collected {
        collection.experience += value;
        *total_experience = total_experience.saturating_add(value);
        events.signal(Signal::ExperienceGained {
            amount: value,
            total: *total_experience,
        });
        let levels = progression::add_experience(&mut stats, value);
        for &level in &levels {
            tracing::info!(level, "level up");
            events.signal(Signal::LevelUp { level });
        }
        collection.levels.extend(levels);
    }
    collection
}

/// Advance one pickup. Returns true on the tick it becomes Collected.
fn step(
    pickup: &mut PickupRecord,
    pos: &mut Vec2,
    player: Vec2,
    tuning: &PickupTuning,
    contact_radius: f32,
    dt: f32,
) -> bool {
    if pickup.state == AttractionState::Collected {
        return false;
    }

    let distance = pos.distance(player);
    if distance <= contact_radius {
        pickup.state = AttractionState::Collected;
        return true;
    }

    if pickup.state == AttractionState::Idle && distance <= tuning.attraction_range {
        pickup.state = AttractionState::Attracted;
    }
    if pickup.state == AttractionState::Attracted {
        *pos = move_towards(*pos, player, tuning.attraction_speed * dt);
        if pos.distance(player) <= tuning.pickup_range {
            pickup.state = AttractionState::Collected;
            return true;
        }
    }
    false
}
