//! Frame snapshot: the complete visible state handed to collaborators each tick.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{GameEvent, SceneEvent};
use crate::types::{Position, SimTime};
use crate::visuals::VisualId;

/// Complete frame state published after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: MatchPhase,
    pub player: PlayerView,
    pub weapon: WeaponMode,
    pub escorts: Vec<EscortView>,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    /// Mesh additions/removals since the previous snapshot.
    pub scene_events: Vec<SceneEvent>,
    /// Gameplay events since the previous snapshot.
    pub events: Vec<GameEvent>,
    pub hud: HudView,
}

/// Player pose and vitals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub view_direction: DVec3,
    pub health: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EscortView {
    pub id: VisualId,
    pub slot: usize,
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: VisualId,
    pub archetype: EnemyArchetype,
    pub position: Position,
    pub health: i32,
    /// Only set for shooters.
    pub shooter_phase: Option<ShooterPhase>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: VisualId,
    pub kind: ProjectileKind,
    pub position: Position,
}

/// Plain-text HUD contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HudView {
    pub weapon_label: String,
    pub health: i32,
}
