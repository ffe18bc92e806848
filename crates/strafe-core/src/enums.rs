//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy archetype. Each archetype has its own movement policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnemyArchetype {
    /// Runs straight at the player and strikes once in melee range.
    Charger,
    /// Wanders, pauses, and lobs bullets at the player on a cooldown.
    Shooter,
}

/// Player weapon mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeaponMode {
    /// High rate of fire, low damage, jittered aim.
    #[default]
    Machine,
    /// Low rate of fire, high damage, exact aim.
    Laser,
}

impl WeaponMode {
    /// Text shown on the HUD.
    pub fn label(self) -> &'static str {
        match self {
            WeaponMode::Machine => "Machine Gun",
            WeaponMode::Laser => "Laser",
        }
    }
}

/// Which side fired a bullet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Friendly,
    Hostile,
}

/// Shooter movement state. Firing runs independently of this.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShooterPhase {
    /// Stepping in a fresh random horizontal direction every tick.
    #[default]
    Wandering,
    /// Standing still until the pause timer runs out.
    Paused,
}

/// Projectile family, as reported to the renderer and snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileKind {
    FriendlyBullet,
    HostileBullet,
    Missile,
}

/// What inflicted damage on the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageSource {
    HostileBullet,
    ChargerMelee,
}

/// Match lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    #[default]
    Running,
    /// Ticks are ignored until resumed.
    Paused,
    /// Player health reached zero. Terminal until a restart.
    Ended,
}
