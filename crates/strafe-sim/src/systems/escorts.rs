//! Escort formation: wingmen orbiting the player.
//!
//! Escort positions are a pure function of the player position and the
//! simulation clock, recomputed every tick.

use std::f64::consts::TAU;

use strafe_core::components::Escort;
use strafe_core::constants::{ESCORT_ORBIT_RADIUS, ESCORT_ORBIT_RATE};
use strafe_core::types::Position;

use crate::registry::EntityRegistry;

/// Where escort `slot` of `count` sits at `elapsed_secs`.
pub fn orbit_position(center: &Position, slot: usize, count: usize, elapsed_secs: f64) -> Position {
    let spacing = if count == 0 { 0.0 } else { TAU / count as f64 };
    let angle = elapsed_secs * ESCORT_ORBIT_RATE + slot as f64 * spacing;

    let mut position = *center;
    position.0.x += angle.cos() * ESCORT_ORBIT_RADIUS;
    position.0.z += angle.sin() * ESCORT_ORBIT_RADIUS;
    position
}

/// Snap every escort to its orbit slot around the player.
pub fn run(registry: &mut EntityRegistry, player_position: &Position, elapsed_secs: f64) {
    let world = registry.world_mut();
    let count = world.query_mut::<&Escort>().into_iter().count();

    for (_entity, (escort, pos)) in world.query_mut::<(&Escort, &mut Position)>() {
        *pos = orbit_position(player_position, escort.slot, count, elapsed_secs);
    }
}

/// Current escort positions, ordered by formation slot.
pub fn positions(registry: &EntityRegistry) -> Vec<Position> {
    let mut escorts: Vec<(usize, Position)> = registry
        .world()
        .query::<(&Escort, &Position)>()
        .iter()
        .map(|(_, (escort, pos))| (escort.slot, *pos))
        .collect();
    escorts.sort_by_key(|(slot, _)| *slot);
    escorts.into_iter().map(|(_, pos)| pos).collect()
}
