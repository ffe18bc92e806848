//! Snapshot system: queries the world and builds a complete FrameSnapshot.
//!
//! Read-only with respect to entities; it only drains the pending event queues.

use hecs::World;

use strafe_core::components::*;
use strafe_core::enums::*;
use strafe_core::state::*;
use strafe_core::types::Position;
use strafe_core::visuals::VisualId;

use crate::state::SimulationState;

/// Build a complete FrameSnapshot from the current simulation state.
pub fn build_snapshot(state: &mut SimulationState) -> FrameSnapshot {
    let scene_events = state.registry.drain_scene_events();
    let events = std::mem::take(&mut state.events);
    let world = state.registry.world();

    FrameSnapshot {
        time: state.time,
        phase: state.phase,
        player: PlayerView {
            position: state.player.position,
            view_direction: state.player.view_direction,
            health: state.player.health,
        },
        weapon: state.weapon,
        escorts: build_escorts(world),
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        scene_events,
        events,
        hud: HudView {
            weapon_label: state.weapon.label().to_string(),
            health: state.player.health,
        },
    }
}

fn build_escorts(world: &World) -> Vec<EscortView> {
    let mut escorts: Vec<EscortView> = world
        .query::<(&Escort, &Position)>()
        .iter()
        .map(|(entity, (escort, pos))| EscortView {
            id: VisualId::from_entity(entity),
            slot: escort.slot,
            position: *pos,
        })
        .collect();
    escorts.sort_by_key(|e| e.slot);
    escorts
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Health, &Position, Option<&ShooterState>)>()
        .iter()
        .map(|(entity, (enemy, health, pos, shooter))| EnemyView {
            id: VisualId::from_entity(entity),
            archetype: enemy.archetype,
            position: *pos,
            health: health.hp,
            shooter_phase: shooter.map(|s| s.phase),
        })
        .collect();
    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Bullet, &Position)>()
        .iter()
        .map(|(entity, (bullet, pos))| ProjectileView {
            id: VisualId::from_entity(entity),
            kind: match bullet.side {
                Side::Friendly => ProjectileKind::FriendlyBullet,
                Side::Hostile => ProjectileKind::HostileBullet,
            },
            position: *pos,
        })
        .collect();

    projectiles.extend(
        world
            .query::<(&HomingMissile, &Position)>()
            .iter()
            .map(|(entity, (_, pos))| ProjectileView {
                id: VisualId::from_entity(entity),
                kind: ProjectileKind::Missile,
                position: *pos,
            }),
    );

    projectiles.sort_by_key(|p| p.id);
    projectiles
}
