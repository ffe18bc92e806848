//! STRAFE headless application.
//!
//! Wires the simulation engine to a fixed-rate game loop thread and hands
//! each frame to the renderer and HUD collaborators.

pub mod autopilot;
pub mod game_loop;
pub mod presenter;
pub mod state;

pub use strafe_core as core;
