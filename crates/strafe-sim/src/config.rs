//! Simulation configuration.
//!
//! Everything has a default so a bare `{}` is a valid config file. Gameplay
//! tuning that is not expected to vary per match stays in
//! `strafe_core::constants`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use strafe_core::constants::*;
use strafe_core::enums::EnemyArchetype;

/// Errors raised while loading a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// One line of the opening wave: spawn `count` enemies of `archetype`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveEntry {
    pub archetype: EnemyArchetype,
    pub count: u32,
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same inputs = same match.
    pub seed: u64,
    /// Nominal seconds per tick. Constant, not measured.
    pub delta: f64,
    /// Wingmen flying with the player.
    pub escort_count: usize,
    /// Enemies spawned when a match starts.
    pub initial_wave: Vec<WaveEntry>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            delta: DEFAULT_DELTA,
            escort_count: DEFAULT_ESCORT_COUNT,
            initial_wave: vec![
                WaveEntry {
                    archetype: EnemyArchetype::Charger,
                    count: INITIAL_CHARGERS,
                },
                WaveEntry {
                    archetype: EnemyArchetype::Shooter,
                    count: INITIAL_SHOOTERS,
                },
            ],
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.delta.is_finite() || self.delta <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "delta must be a positive number of seconds, got {}",
                self.delta
            )));
        }
        Ok(())
    }

    /// Total enemies in the opening wave.
    pub fn initial_enemy_count(&self) -> u32 {
        self.initial_wave.iter().map(|entry| entry.count).sum()
    }
}
