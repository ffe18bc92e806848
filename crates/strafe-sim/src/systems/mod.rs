//! Systems that operate on the simulation state each tick.
//!
//! Systems are free functions over the registry and the pieces of state they
//! touch. They never despawn directly; removals go through
//! `EntityRegistry::mark_for_removal` and are compacted by `cleanup`.

pub mod cleanup;
pub mod collision;
pub mod damage;
pub mod enemy_ai;
pub mod escorts;
pub mod missile_kinematics;
pub mod movement;
pub mod snapshot;
pub mod weapons;
