//! Scripted input for headless demo runs.
//!
//! Stands in for the keyboard and mouse: aims at the closest enemy, keeps the
//! trigger held, picks the laser for distant targets and taps the missile key
//! on a fixed cadence.

use strafe_core::input::{FrameInput, InputAction, InputState};
use strafe_core::state::{EnemyView, FrameSnapshot};

/// Refreshes between missile key taps.
pub const MISSILE_CADENCE: u64 = 120;
/// Beyond this range the laser is selected.
pub const LASER_RANGE: f64 = 30.0;

#[derive(Debug, Default)]
pub struct Autopilot {
    frames: u64,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input for the next frame given the latest snapshot.
    pub fn next_input(&mut self, snapshot: Option<&FrameSnapshot>) -> FrameInput {
        self.frames += 1;

        let mut held = InputState::new();
        let mut view_direction = None;

        if let Some(snapshot) = snapshot {
            if let Some((target, range)) = closest_enemy(snapshot) {
                held.press(InputAction::PrimaryFire);
                let aim = snapshot.player.position.direction_to(&target.position);
                if aim != glam::DVec3::ZERO {
                    view_direction = Some(aim);
                }
                if range > LASER_RANGE {
                    held.press(InputAction::Weapon2);
                } else {
                    held.press(InputAction::Weapon1);
                }
                if self.frames % MISSILE_CADENCE == 0 {
                    held.press(InputAction::LaunchMissile);
                }
            }
        }

        FrameInput {
            held,
            view_direction,
        }
    }
}

fn closest_enemy(snapshot: &FrameSnapshot) -> Option<(&EnemyView, f64)> {
    snapshot
        .enemies
        .iter()
        .map(|enemy| (enemy, snapshot.player.position.range_to(&enemy.position)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
}
