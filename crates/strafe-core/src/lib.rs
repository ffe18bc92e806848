//! Core types and definitions for the STRAFE arena shooter.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, input, commands, snapshots, events, render hints and constants.
//! It has no dependency on any renderer or runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod state;
pub mod types;
pub mod visuals;
