//! Events emitted by the simulation for the renderer and HUD.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;
use crate::visuals::{VisualId, VisualKind};

/// Scene-graph changes the renderer must mirror.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneEvent {
    /// A new entity entered the registry; create its mesh.
    Added {
        id: VisualId,
        visual: VisualKind,
        position: Position,
    },
    /// An entity left the registry; drop its mesh.
    Removed { id: VisualId },
}

/// Gameplay events for HUD and audio feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Weapon selection changed.
    WeaponChanged { mode: WeaponMode },
    /// The player lost health.
    PlayerDamaged {
        amount: i32,
        health: i32,
        source: DamageSource,
    },
    /// An enemy was removed after its health ran out.
    EnemyDestroyed {
        id: VisualId,
        archetype: EnemyArchetype,
    },
    /// A homing missile left the rails.
    MissileLaunched { id: VisualId },
    /// A homing missile self-destructed with no target left.
    MissileExpended { id: VisualId },
    /// Player health reached zero.
    MatchEnded { tick: u64 },
}
