//! Simulation core for STRAFE.
//!
//! Owns the entity registry, runs systems once per tick in a fixed order,
//! and produces FrameSnapshots for the renderer and HUD.

pub mod config;
pub mod engine;
pub mod registry;
pub mod state;
pub mod systems;
pub mod world_setup;

pub use config::{ConfigError, SimConfig, WaveEntry};
pub use engine::SimulationEngine;
pub use strafe_core as core;

#[cfg(test)]
mod tests;
