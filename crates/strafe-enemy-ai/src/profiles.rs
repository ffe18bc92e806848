//! Archetype-specific behavioral profiles.
//!
//! Consolidates per-archetype parameters for the enemy FSM.

use strafe_core::enums::EnemyArchetype;

/// Behavioral profile for an enemy archetype.
pub struct EnemyBehaviorProfile {
    /// Distance covered per tick while moving.
    pub step: f64,
    /// Whether movement heads for the player or wanders randomly.
    pub pursues_player: bool,
    /// Melee strike `(range, damage)`, None for ranged archetypes.
    pub melee: Option<(f64, i32)>,
    /// Seconds between volleys, None for archetypes that never shoot.
    pub fire_cooldown_secs: Option<f64>,
    /// Per-tick chance to stop and pause while wandering.
    pub pause_chance: f64,
    /// Pause duration range in seconds (inclusive).
    pub pause_secs: (f64, f64),
}

/// Get the behavioral profile for a given archetype.
pub fn get_profile(archetype: EnemyArchetype) -> EnemyBehaviorProfile {
    use strafe_core::constants::*;

    match archetype {
        EnemyArchetype::Charger => EnemyBehaviorProfile {
            step: CHARGER_SPEED,
            pursues_player: true,
            melee: Some((CHARGER_MELEE_RANGE, CHARGER_MELEE_DAMAGE)),
            fire_cooldown_secs: None,
            pause_chance: 0.0,
            pause_secs: (0.0, 0.0),
        },
        EnemyArchetype::Shooter => EnemyBehaviorProfile {
            step: SHOOTER_STEP,
            pursues_player: false,
            melee: None,
            fire_cooldown_secs: Some(SHOOTER_FIRE_COOLDOWN_SECS),
            pause_chance: SHOOTER_PAUSE_CHANCE,
            pause_secs: (SHOOTER_PAUSE_MIN_SECS, SHOOTER_PAUSE_MAX_SECS),
        },
    }
}
