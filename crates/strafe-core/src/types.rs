//! Fundamental geometric and simulation types.
//!
//! Vector arithmetic is delegated to `glam`. Coordinates follow the usual
//! right-handed scene convention: y = up, -z = "ahead" of the arena origin.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// 3D position in arena space (world units).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec3);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds (sum of nominal tick durations).
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// Straight-line distance to another position.
    pub fn range_to(&self, other: &Position) -> f64 {
        self.0.distance(other.0)
    }

    /// Distance on the horizontal (x/z) plane, ignoring height.
    pub fn horizontal_range_to(&self, other: &Position) -> f64 {
        let mut offset = other.0 - self.0;
        offset.y = 0.0;
        offset.length()
    }

    /// Unit vector pointing at `other`. Zero when both positions coincide.
    pub fn direction_to(&self, other: &Position) -> DVec3 {
        (other.0 - self.0).normalize_or_zero()
    }

    /// Unit vector pointing at `other` with the vertical component dropped.
    pub fn horizontal_direction_to(&self, other: &Position) -> DVec3 {
        let mut offset = other.0 - self.0;
        offset.y = 0.0;
        offset.normalize_or_zero()
    }

    /// Move `distance` units along `direction`.
    pub fn advance(&mut self, direction: DVec3, distance: f64) {
        self.0 += direction * distance;
    }
}

impl From<DVec3> for Position {
    fn from(v: DVec3) -> Self {
        Self(v)
    }
}

impl SimTime {
    /// Advance by one tick of `dt` nominal seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
