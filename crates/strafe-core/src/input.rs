//! Logical input model sampled once per tick.
//!
//! The input collaborator maps physical devices to these actions; the
//! simulation only sees which actions are held this frame.

use std::fmt;
use std::str::FromStr;

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Logical input names understood by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputAction {
    Forward,
    Back,
    Left,
    Right,
    PrimaryFire,
    #[serde(rename = "weapon-1")]
    Weapon1,
    #[serde(rename = "weapon-2")]
    Weapon2,
    LaunchMissile,
}

impl InputAction {
    pub const ALL: [InputAction; 8] = [
        InputAction::Forward,
        InputAction::Back,
        InputAction::Left,
        InputAction::Right,
        InputAction::PrimaryFire,
        InputAction::Weapon1,
        InputAction::Weapon2,
        InputAction::LaunchMissile,
    ];

    pub fn name(self) -> &'static str {
        match self {
            InputAction::Forward => "forward",
            InputAction::Back => "back",
            InputAction::Left => "left",
            InputAction::Right => "right",
            InputAction::PrimaryFire => "primary-fire",
            InputAction::Weapon1 => "weapon-1",
            InputAction::Weapon2 => "weapon-2",
            InputAction::LaunchMissile => "launch-missile",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for InputAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing an unrecognized input name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown input action: {0}")]
pub struct UnknownInputAction(pub String);

impl FromStr for InputAction {
    type Err = UnknownInputAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InputAction::ALL
            .into_iter()
            .find(|action| action.name() == s)
            .ok_or_else(|| UnknownInputAction(s.to_string()))
    }
}

/// Set of actions held during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    held: u8,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: hold `action`.
    pub fn with(mut self, action: InputAction) -> Self {
        self.press(action);
        self
    }

    pub fn press(&mut self, action: InputAction) {
        self.held |= action.bit();
    }

    pub fn release(&mut self, action: InputAction) {
        self.held &= !action.bit();
    }

    pub fn set(&mut self, action: InputAction, held: bool) {
        if held {
            self.press(action);
        } else {
            self.release(action);
        }
    }

    pub fn is_held(&self, action: InputAction) -> bool {
        self.held & action.bit() != 0
    }

    /// Held now but not in `previous`.
    pub fn just_pressed(&self, previous: &InputState, action: InputAction) -> bool {
        self.is_held(action) && !previous.is_held(action)
    }

    pub fn held_actions(&self) -> impl Iterator<Item = InputAction> + '_ {
        InputAction::ALL
            .into_iter()
            .filter(move |action| self.is_held(*action))
    }
}

/// Everything the simulation samples from the outside world for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    pub held: InputState,
    /// Camera look direction from the external controls, if it changed.
    pub view_direction: Option<DVec3>,
}

impl FrameInput {
    pub fn holding(held: InputState) -> Self {
        Self {
            held,
            view_direction: None,
        }
    }
}
