//! Health bookkeeping shared by every system that deals damage.

use tracing::debug;

use strafe_core::enums::DamageSource;
use strafe_core::events::GameEvent;

use crate::state::PlayerState;

/// Subtract `amount` from `hp`, flooring at zero.
/// Already-depleted health is left untouched and reported as `false`.
pub fn apply_damage(hp: &mut i32, amount: i32) -> bool {
    if *hp <= 0 {
        return false;
    }
    *hp = (*hp - amount).max(0);
    true
}

/// Damage the player and emit the matching HUD event.
pub fn damage_player(
    player: &mut PlayerState,
    amount: i32,
    source: DamageSource,
    events: &mut Vec<GameEvent>,
) {
    if !apply_damage(&mut player.health, amount) {
        return;
    }

    debug!(amount, health = player.health, ?source, "player damaged");
    events.push(GameEvent::PlayerDamaged {
        amount,
        health: player.health,
        source,
    });
}
