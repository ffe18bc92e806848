//! Simulation state aggregate.
//!
//! Everything a tick mutates lives here and is owned by the frame driver;
//! systems receive the pieces they need by reference.

use glam::DVec3;

use strafe_core::constants::PLAYER_MAX_HEALTH;
use strafe_core::enums::{MatchPhase, WeaponMode};
use strafe_core::events::GameEvent;
use strafe_core::input::InputState;
use strafe_core::types::{Position, SimTime};

use crate::registry::EntityRegistry;

/// The player's pose and vitals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    /// Eye position; the implicit reference frame for range checks.
    pub position: Position,
    /// Unit look direction.
    pub view_direction: DVec3,
    /// 0..=100, only ever lowered by damage.
    pub health: i32,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            position: Position::default(),
            view_direction: DVec3::NEG_Z,
            health: PLAYER_MAX_HEALTH,
        }
    }
}

#[derive(Default)]
pub struct SimulationState {
    pub registry: EntityRegistry,
    pub player: PlayerState,
    pub weapon: WeaponMode,
    pub phase: MatchPhase,
    pub time: SimTime,
    /// Input held on the previous tick, for edge-triggered actions.
    pub previous_input: InputState,
    /// Gameplay events accumulated since the last snapshot.
    pub events: Vec<GameEvent>,
}

impl SimulationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every entity and return the player to a fresh start.
    /// Scene removals stay queued so the renderer can tear meshes down.
    pub fn reset(&mut self) {
        self.registry.despawn_all();
        self.player = PlayerState::default();
        self.weapon = WeaponMode::default();
        self.phase = MatchPhase::Running;
        self.time = SimTime::default();
        self.previous_input = InputState::default();
        self.events.clear();
    }
}
