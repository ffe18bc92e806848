//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::visuals::VisualKind;

/// Marks an entity as a hostile unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub archetype: EnemyArchetype,
}

/// Hit points. Never increases; the owner is removed once it reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub hp: i32,
}

/// Timers driving a shooter's wander/pause and firing loops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShooterState {
    pub phase: ShooterPhase,
    /// Seconds left in the current pause (0 while wandering).
    pub pause_remaining_secs: f64,
    /// Seconds until the next volley.
    pub fire_cooldown_secs: f64,
}

/// Straight-line projectile. Direction is a unit vector fixed at creation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    pub side: Side,
    pub direction: DVec3,
    /// Units per tick.
    pub speed: f64,
}

/// Homing projectile chasing a live enemy.
#[derive(Debug, Clone, Copy)]
pub struct HomingMissile {
    /// Weak reference into the registry; re-acquired when stale or depleted.
    pub target: Option<hecs::Entity>,
    /// Units per tick.
    pub speed: f64,
}

/// Render hint attached to every registered entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Visual {
    pub kind: VisualKind,
}

/// Wingman orbiting the player. Never takes damage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Escort {
    /// Position in the formation, 0-based.
    pub slot: usize,
}
