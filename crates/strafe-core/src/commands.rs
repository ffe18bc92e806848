//! Match-control commands sent to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.
//! Per-frame input (movement, firing) travels separately as `FrameInput`.

use serde::{Deserialize, Serialize};

/// Match-level actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    /// Freeze a running match.
    Pause,
    /// Continue a paused match.
    Resume,
    /// Tear the match down and start a fresh one from the same config.
    Restart,
}
