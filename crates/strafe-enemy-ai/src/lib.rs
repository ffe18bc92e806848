//! Enemy AI for STRAFE.
//!
//! Implements the per-archetype movement and firing policies as pure
//! functions over plain data. Randomness is injected so callers control
//! determinism.

pub mod fsm;
pub mod profiles;

pub use strafe_core as core;
