//! Tests for the simulation engine, registry, weapons, homing and damage resolution.

use glam::DVec3;
use rand::rngs::mock::StepRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use strafe_core::commands::SimCommand;
use strafe_core::components::{Health, HomingMissile};
use strafe_core::enums::*;
use strafe_core::events::{GameEvent, SceneEvent};
use strafe_core::input::{FrameInput, InputAction, InputState};
use strafe_core::state::FrameSnapshot;
use strafe_core::types::Position;
use strafe_core::visuals::VisualKind;

use crate::config::{ConfigError, SimConfig, WaveEntry};
use crate::engine::SimulationEngine;
use crate::registry::EntityRegistry;
use crate::state::PlayerState;
use crate::systems::{collision, movement, weapons};
use crate::world_setup;

/// No opening wave and no escorts: scenario tests place what they need.
fn empty_arena() -> SimConfig {
    SimConfig {
        escort_count: 0,
        initial_wave: Vec::new(),
        ..Default::default()
    }
}

fn idle() -> FrameInput {
    FrameInput::default()
}

fn holding(actions: &[InputAction]) -> FrameInput {
    let mut held = InputState::new();
    for action in actions {
        held.press(*action);
    }
    FrameInput::holding(held)
}

fn count_events(snapshot: &FrameSnapshot, pred: impl Fn(&GameEvent) -> bool) -> usize {
    snapshot.events.iter().filter(|&e| pred(e)).count()
}

fn friendly_bullets_added(snapshot: &FrameSnapshot) -> usize {
    snapshot
        .scene_events
        .iter()
        .filter(|e| {
            matches!(
                e,
                SceneEvent::Added {
                    visual: VisualKind::FriendlyBullet,
                    ..
                }
            )
        })
        .count()
}

fn enemy_hp(engine: &SimulationEngine, enemy: hecs::Entity) -> Option<i32> {
    engine
        .state()
        .registry
        .world()
        .get::<&Health>(enemy)
        .ok()
        .map(|h| h.hp)
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = SimulationEngine::new(SimConfig {
        seed: 12345,
        ..Default::default()
    });
    let mut engine_b = SimulationEngine::new(SimConfig {
        seed: 12345,
        ..Default::default()
    });
    let input = holding(&[InputAction::PrimaryFire]);

    for _ in 0..300 {
        let json_a = serde_json::to_string(&engine_a.tick(&input)).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick(&input)).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = SimulationEngine::new(SimConfig {
        seed: 111,
        ..Default::default()
    });
    let mut engine_b = SimulationEngine::new(SimConfig {
        seed: 222,
        ..Default::default()
    });

    // Spawn positions come from the RNG, so the very first frame differs.
    let json_a = serde_json::to_string(&engine_a.tick(&idle())).unwrap();
    let json_b = serde_json::to_string(&engine_b.tick(&idle())).unwrap();
    assert_ne!(json_a, json_b);
}

// ---- Match setup ----

#[test]
fn test_default_match_setup() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let snap = engine.tick(&idle());

    assert_eq!(snap.phase, MatchPhase::Running);
    assert_eq!(snap.escorts.len(), 2);
    assert_eq!(snap.enemies.len(), 10);
    let chargers = snap
        .enemies
        .iter()
        .filter(|e| e.archetype == EnemyArchetype::Charger)
        .count();
    assert_eq!(chargers, 5);
    assert_eq!(snap.player.health, 100);
    assert_eq!(snap.hud.weapon_label, "Machine Gun");
    // Escorts + enemies were announced to the renderer.
    let announced = snap
        .scene_events
        .iter()
        .filter(|e| {
            matches!(
                e,
                SceneEvent::Added {
                    visual: VisualKind::Escort | VisualKind::Charger | VisualKind::Shooter,
                    ..
                }
            )
        })
        .count();
    assert_eq!(announced, 12);
}

#[test]
fn test_enemies_spawn_in_far_band() {
    let engine = SimulationEngine::new(SimConfig::default());
    let world = engine.state().registry.world();
    for (_, (_, pos)) in world.query::<(&strafe_core::components::Enemy, &Position)>().iter() {
        assert!(pos.0.x >= -25.0 && pos.0.x < 25.0);
        assert!(pos.0.z <= -50.0 && pos.0.z > -100.0);
        assert_eq!(pos.0.y, 0.5);
    }
}

#[test]
fn test_escorts_orbit_player() {
    let mut engine = SimulationEngine::new(SimConfig {
        initial_wave: Vec::new(),
        ..Default::default()
    });
    for _ in 0..50 {
        let snap = engine.tick(&holding(&[InputAction::Forward]));
        for escort in &snap.escorts {
            let range = escort.position.range_to(&snap.player.position);
            assert!((range - 1.5).abs() < 1.0, "escort drifted: {range}");
        }
    }
    let snap = engine.tick(&idle());
    for escort in &snap.escorts {
        assert!((escort.position.range_to(&snap.player.position) - 1.5).abs() < 1e-9);
    }
}

// ---- Player movement ----

#[test]
fn test_forward_moves_along_view() {
    let mut engine = SimulationEngine::new(empty_arena());
    let snap = engine.tick(&holding(&[InputAction::Forward]));
    assert!((snap.player.position.0.z - -1.0).abs() < 1e-9);
    assert!(snap.player.position.0.x.abs() < 1e-9);

    let turn = FrameInput {
        held: InputState::new().with(InputAction::Forward),
        view_direction: Some(DVec3::X * 3.0),
    };
    let snap = engine.tick(&turn);
    assert!((snap.player.position.0.x - 1.0).abs() < 1e-9);
    assert_eq!(snap.player.view_direction, DVec3::X);
}

// ---- Charger melee ----

#[test]
fn test_charger_strike_scenario() {
    let mut engine = SimulationEngine::new(empty_arena());
    let charger = engine.spawn_enemy_at(EnemyArchetype::Charger, Position::new(0.0, 0.0, -2.0));

    let mut struck = false;
    for _ in 0..100 {
        let snap = engine.tick(&idle());
        if snap.player.health < 100 {
            assert_eq!(snap.player.health, 90);
            assert!(snap.enemies.is_empty(), "charger must leave in the strike tick");
            assert!(!engine.state().registry.world().contains(charger));
            assert_eq!(
                count_events(&snap, |e| matches!(
                    e,
                    GameEvent::PlayerDamaged {
                        amount: 10,
                        source: DamageSource::ChargerMelee,
                        ..
                    }
                )),
                1
            );
            struck = true;
            break;
        }
        let range = snap.enemies[0].position.range_to(&snap.player.position);
        assert!(range >= 1.0);
    }
    assert!(struck, "charger never reached the player");

    let snap = engine.tick(&idle());
    assert_eq!(snap.player.health, 90);
}

// ---- Weapons ----

#[test]
fn test_laser_volley_one_bullet_per_shooter() {
    let mut registry = EntityRegistry::new();
    let player = PlayerState::default();
    world_setup::spawn_escorts(&mut registry, 2, &player);

    let fired = weapons::run(&mut registry, &mut StepRng::new(0, 0), WeaponMode::Laser, &player);
    assert_eq!(fired, 3);
    assert_eq!(registry.bullet_count(Side::Friendly), 3);

    let world = registry.world();
    for (_, bullet) in world.query::<&strafe_core::components::Bullet>().iter() {
        assert_eq!(bullet.direction, player.view_direction);
        assert_eq!(bullet.speed, 2.0);
    }
}

#[test]
fn test_trigger_gate_closed_fires_nothing() {
    let mut registry = EntityRegistry::new();
    let player = PlayerState::default();
    world_setup::spawn_escorts(&mut registry, 2, &player);

    let mut never = StepRng::new(u64::MAX, 0);
    assert_eq!(weapons::run(&mut registry, &mut never, WeaponMode::Machine, &player), 0);
    assert_eq!(weapons::run(&mut registry, &mut never, WeaponMode::Laser, &player), 0);
    assert_eq!(registry.bullet_count(Side::Friendly), 0);
}

#[test]
fn test_machine_jitter_stays_small() {
    let mut registry = EntityRegistry::new();
    let player = PlayerState::default();

    let fired = weapons::run(&mut registry, &mut StepRng::new(0, 0), WeaponMode::Machine, &player);
    assert_eq!(fired, 1);
    for (_, bullet) in registry.world().query::<&strafe_core::components::Bullet>().iter() {
        assert!((bullet.direction.length() - 1.0).abs() < 1e-9);
        assert!(bullet.direction.angle_between(player.view_direction) < 0.1);
        assert_eq!(bullet.speed, 1.5);
    }
}

#[test]
fn test_machine_volley_shares_one_aim() {
    let mut registry = EntityRegistry::new();
    let player = PlayerState::default();
    world_setup::spawn_escorts(&mut registry, 2, &player);
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let mut fired = 0;
    for _ in 0..64 {
        fired = weapons::run(&mut registry, &mut rng, WeaponMode::Machine, &player);
        if fired > 0 {
            break;
        }
    }
    assert_eq!(fired, 3);

    let directions: Vec<DVec3> = registry
        .world()
        .query::<&strafe_core::components::Bullet>()
        .iter()
        .map(|(_, bullet)| bullet.direction)
        .collect();
    assert_eq!(directions.len(), 3);
    assert!(directions.iter().all(|d| *d == directions[0]), "{directions:?}");
}

#[test]
fn test_fire_with_zero_escorts() {
    let mut registry = EntityRegistry::new();
    let player = PlayerState::default();
    let fired = weapons::run(&mut registry, &mut StepRng::new(0, 0), WeaponMode::Laser, &player);
    assert_eq!(fired, 1);
}

#[test]
fn test_laser_held_fire_emits_full_volleys() {
    let mut engine = SimulationEngine::new(SimConfig {
        initial_wave: Vec::new(),
        ..Default::default()
    });
    let input = holding(&[InputAction::Weapon2, InputAction::PrimaryFire]);

    let mut volleys = 0;
    for _ in 0..300 {
        let snap = engine.tick(&input);
        let added = friendly_bullets_added(&snap);
        assert!(added == 0 || added == 3, "partial volley of {added}");
        if added == 3 {
            volleys += 1;
        }
    }
    assert!(volleys >= 1);
    assert_eq!(engine.weapon(), WeaponMode::Laser);
}

#[test]
fn test_weapon_change_event_once() {
    let mut engine = SimulationEngine::new(empty_arena());
    let laser = holding(&[InputAction::Weapon2]);

    let snap = engine.tick(&laser);
    assert_eq!(
        snap.events,
        vec![GameEvent::WeaponChanged {
            mode: WeaponMode::Laser
        }]
    );
    assert_eq!(snap.hud.weapon_label, "Laser");

    let snap = engine.tick(&laser);
    assert!(snap.events.is_empty());

    let snap = engine.tick(&holding(&[InputAction::Weapon1]));
    assert_eq!(snap.weapon, WeaponMode::Machine);
    assert_eq!(snap.hud.weapon_label, "Machine Gun");
}

// ---- Bullet lifetime ----

#[test]
fn test_bullet_range_boundary() {
    let mut registry = EntityRegistry::new();
    let player = Position::default();

    let at_limit = registry.spawn_bullet(Side::Friendly, Position::new(0.0, 0.0, -99.0), DVec3::NEG_Z, 1.0);
    let beyond = registry.spawn_bullet(Side::Friendly, Position::new(0.0, 0.0, -99.5), DVec3::NEG_Z, 1.0);
    // Hostile rounds that overshot the player, flying away behind it.
    let hostile_at_limit = registry.spawn_bullet(Side::Hostile, Position::new(0.0, 0.0, 99.0), DVec3::Z, 1.0);
    let hostile_beyond = registry.spawn_bullet(Side::Hostile, Position::new(0.0, 0.0, 99.5), DVec3::Z, 1.0);

    movement::run(&mut registry, &player);

    assert!(!registry.is_marked(at_limit), "exactly 100 units stays live");
    assert!(registry.is_marked(beyond));
    assert!(!registry.is_marked(hostile_at_limit));
    assert!(registry.is_marked(hostile_beyond));
    assert_eq!(registry.compact(), 2);
    assert!(registry.world().contains(at_limit));
    assert!(registry.world().contains(hostile_at_limit));
    assert_eq!(registry.bullet_count(Side::Hostile), 1);
}

#[test]
fn test_bullets_expire_in_engine() {
    let mut engine = SimulationEngine::new(empty_arena());
    let fire = holding(&[InputAction::PrimaryFire]);
    for _ in 0..20 {
        engine.tick(&fire);
    }
    assert!(engine.state().registry.bullet_count(Side::Friendly) > 0);

    // Machine bullets cover 1.5 units per tick.
    for _ in 0..80 {
        engine.tick(&idle());
    }
    assert_eq!(engine.state().registry.bullet_count(Side::Friendly), 0);
}

// ---- Shooter fire ----

#[test]
fn test_shooter_fires_at_player_on_cooldown() {
    let mut engine = SimulationEngine::new(empty_arena());
    let shooter = engine.spawn_enemy_at(EnemyArchetype::Shooter, Position::new(0.0, 0.5, -60.0));

    // First tick: the cooldown starts empty, so the shooter opens fire at once.
    let snap = engine.tick(&idle());
    let added: Vec<hecs::Entity> = engine
        .state()
        .registry
        .world()
        .query::<&strafe_core::components::Bullet>()
        .iter()
        .filter(|(_, bullet)| bullet.side == Side::Hostile)
        .map(|(entity, _)| entity)
        .collect();
    assert_eq!(added.len(), 1);

    let shooter_pos = *engine.state().registry.world().get::<&Position>(shooter).unwrap();
    let world = engine.state().registry.world();
    let bullet = *world.get::<&strafe_core::components::Bullet>(added[0]).unwrap();
    let bullet_pos = *world.get::<&Position>(added[0]).unwrap();
    assert_eq!(bullet.speed, 1.0);
    assert_eq!(bullet_pos, shooter_pos, "fired from the shooter's own position");
    assert_eq!(bullet.direction, shooter_pos.direction_to(&snap.player.position));
    assert!(bullet.direction.z > 0.99, "aimed back toward the player");

    // The next volley follows the 2 s cooldown (20 ticks of 0.1 s).
    let mut volley_ticks = vec![snap.time.tick];
    for _ in 0..45 {
        let snap = engine.tick(&idle());
        let hostile_added = snap
            .scene_events
            .iter()
            .filter(|e| {
                matches!(
                    e,
                    SceneEvent::Added {
                        visual: VisualKind::HostileBullet,
                        ..
                    }
                )
            })
            .count();
        assert!(hostile_added <= 1);
        if hostile_added == 1 {
            volley_ticks.push(snap.time.tick);
        }
    }
    assert_eq!(volley_ticks[0], 1);
    assert!(volley_ticks.len() >= 3);
    for pair in volley_ticks.windows(2) {
        let gap = pair[1] - pair[0];
        assert!((20..=21).contains(&gap), "volley gap {gap} ticks");
    }
}

// ---- Homing missiles ----

#[test]
fn test_two_missile_impacts_destroy_enemy() {
    let mut engine = SimulationEngine::new(empty_arena());
    let enemy = engine.spawn_enemy_at(EnemyArchetype::Charger, Position::new(0.0, 0.0, -10.0));
    let launch = holding(&[InputAction::LaunchMissile]);

    let snap = engine.tick(&launch);
    assert_eq!(count_events(&snap, |e| matches!(e, GameEvent::MissileLaunched { .. })), 1);
    for _ in 0..100 {
        if engine.state().registry.missile_count() == 0 {
            break;
        }
        engine.tick(&idle());
    }
    assert_eq!(engine.state().registry.missile_count(), 0);
    assert_eq!(enemy_hp(&engine, enemy), Some(10));

    engine.tick(&launch);
    for _ in 0..100 {
        if engine.state().registry.missile_count() == 0 {
            break;
        }
        engine.tick(&idle());
    }
    assert_eq!(enemy_hp(&engine, enemy), None, "enemy removed after second impact");
    assert_eq!(engine.state().registry.enemy_count(), 0);
    assert_eq!(engine.state().registry.missile_count(), 0);
    assert_eq!(engine.player().health, 100);
}

#[test]
fn test_missile_expends_without_targets() {
    let mut engine = SimulationEngine::new(empty_arena());
    let snap = engine.tick(&holding(&[InputAction::LaunchMissile]));

    assert_eq!(count_events(&snap, |e| matches!(e, GameEvent::MissileLaunched { .. })), 1);
    assert_eq!(count_events(&snap, |e| matches!(e, GameEvent::MissileExpended { .. })), 1);
    assert_eq!(engine.state().registry.missile_count(), 0);
    assert!(snap.projectiles.is_empty());
}

#[test]
fn test_missile_reacquires_when_target_spent() {
    let mut engine = SimulationEngine::new(empty_arena());
    let left = engine.spawn_enemy_at(EnemyArchetype::Charger, Position::new(-5.0, 0.0, -30.0));
    let right = engine.spawn_enemy_at(EnemyArchetype::Charger, Position::new(5.0, 0.0, -30.0));

    engine.tick(&holding(&[InputAction::LaunchMissile]));
    let first = missile_target(&engine).expect("missile should hold a target");
    assert!(first == left || first == right);

    // Spend the current target outside of combat.
    let mut health = engine
        .state_mut()
        .registry
        .world_mut()
        .get::<&mut Health>(first)
        .unwrap();
    health.hp = 0;
    drop(health);

    engine.tick(&idle());
    let second = missile_target(&engine).expect("missile should re-acquire");
    assert_ne!(second, first);
    assert!(!engine.state().registry.world().contains(first));
}

fn missile_target(engine: &SimulationEngine) -> Option<hecs::Entity> {
    engine
        .state()
        .registry
        .world()
        .query::<&HomingMissile>()
        .iter()
        .next()
        .and_then(|(_, missile)| missile.target)
}

#[test]
fn test_missile_launch_is_edge_triggered() {
    let mut engine = SimulationEngine::new(empty_arena());
    engine.spawn_enemy_at(EnemyArchetype::Charger, Position::new(0.0, 0.0, -90.0));
    let launch = holding(&[InputAction::LaunchMissile]);

    let mut launched = 0;
    for _ in 0..10 {
        let snap = engine.tick(&launch);
        launched += count_events(&snap, |e| matches!(e, GameEvent::MissileLaunched { .. }));
    }
    assert_eq!(launched, 1, "holding the key launches once");

    engine.tick(&idle());
    let snap = engine.tick(&launch);
    assert_eq!(count_events(&snap, |e| matches!(e, GameEvent::MissileLaunched { .. })), 1);
    assert_eq!(engine.state().registry.missile_count(), 2);
}

// ---- Collision & damage ----

#[test]
fn test_friendly_damage_follows_current_mode() {
    let mut engine = SimulationEngine::new(empty_arena());
    let spot = Position::new(0.0, 0.0, -50.0);
    let enemy = engine.spawn_enemy_at(EnemyArchetype::Charger, spot);

    engine
        .state_mut()
        .registry
        .spawn_bullet(Side::Friendly, spot, DVec3::ZERO, 0.0);
    engine.tick(&idle());
    assert_eq!(enemy_hp(&engine, enemy), Some(18));
    assert_eq!(engine.state().registry.bullet_count(Side::Friendly), 0);

    // Fired under machine, resolved after switching to laser.
    let spot = engine.state().registry.world().get::<&Position>(enemy).map(|p| *p).unwrap();
    engine
        .state_mut()
        .registry
        .spawn_bullet(Side::Friendly, spot, DVec3::ZERO, 0.0);
    engine.tick(&holding(&[InputAction::Weapon2]));
    assert_eq!(enemy_hp(&engine, enemy), Some(13));
}

#[test]
fn test_bullet_hits_overlapping_enemies_once() {
    let mut registry = EntityRegistry::new();
    let spot = Position::new(3.0, 0.5, -20.0);
    let a = world_setup::spawn_enemy_at(&mut registry, EnemyArchetype::Shooter, spot);
    let b = world_setup::spawn_enemy_at(&mut registry, EnemyArchetype::Charger, spot);
    let bullet = registry.spawn_bullet(Side::Friendly, spot, DVec3::NEG_Z, 2.0);

    collision::resolve_friendly_hits(&mut registry, WeaponMode::Laser);

    for enemy in [a, b] {
        assert_eq!(registry.world().get::<&Health>(enemy).unwrap().hp, 15);
    }
    assert!(registry.is_marked(bullet));
    assert_eq!(registry.compact(), 1);
}

#[test]
fn test_hostile_hit_ends_match_once() {
    let mut engine = SimulationEngine::new(empty_arena());
    engine.set_player_health(5);
    let spot = Position::new(0.0, 0.0, -0.2);
    for _ in 0..2 {
        engine
            .state_mut()
            .registry
            .spawn_bullet(Side::Hostile, spot, DVec3::ZERO, 0.0);
    }

    let snap = engine.tick(&idle());
    assert_eq!(snap.player.health, 0);
    assert_eq!(snap.phase, MatchPhase::Ended);
    assert_eq!(count_events(&snap, |e| matches!(e, GameEvent::MatchEnded { .. })), 1);
    assert_eq!(count_events(&snap, |e| matches!(e, GameEvent::PlayerDamaged { .. })), 1);
    assert_eq!(engine.state().registry.bullet_count(Side::Hostile), 0);

    let tick = snap.time.tick;
    for _ in 0..5 {
        let snap = engine.tick(&holding(&[InputAction::PrimaryFire]));
        assert!(snap.events.is_empty());
        assert_eq!(snap.time.tick, tick, "ended match must not advance");
    }
}

#[test]
fn test_damage_on_depleted_health_is_noop() {
    let mut hp = 3;
    assert!(crate::systems::damage::apply_damage(&mut hp, 5));
    assert_eq!(hp, 0);
    assert!(!crate::systems::damage::apply_damage(&mut hp, 5));
    assert_eq!(hp, 0);
}

#[test]
fn test_health_never_rises_and_dead_never_linger() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let input = holding(&[InputAction::PrimaryFire, InputAction::Forward]);

    let mut last_health = engine.player().health;
    for _ in 0..1000 {
        let snap = engine.tick(&input);
        assert!(snap.player.health <= last_health);
        last_health = snap.player.health;
        assert!(snap.enemies.iter().all(|e| e.health > 0));
        if snap.phase == MatchPhase::Ended {
            break;
        }
    }
}

// ---- Match lifecycle ----

#[test]
fn test_pause_stops_simulation() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.tick(&idle());
    engine.queue_command(SimCommand::Pause);
    let paused = engine.tick(&holding(&[InputAction::Forward]));
    assert_eq!(paused.phase, MatchPhase::Paused);

    let tick = paused.time.tick;
    let snap = engine.tick(&holding(&[InputAction::Forward]));
    assert_eq!(snap.time.tick, tick);
    assert_eq!(snap.player.position, Position::default());

    engine.queue_command(SimCommand::Resume);
    let snap = engine.tick(&idle());
    assert_eq!(snap.phase, MatchPhase::Running);
    assert_eq!(snap.time.tick, tick + 1);
}

#[test]
fn test_restart_rebuilds_match() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    for _ in 0..30 {
        engine.tick(&holding(&[InputAction::Forward, InputAction::Weapon2]));
    }
    engine.set_player_health(0);
    engine.tick(&idle());
    assert_eq!(engine.phase(), MatchPhase::Ended);

    engine.queue_command(SimCommand::Restart);
    let snap = engine.tick(&idle());
    assert_eq!(snap.phase, MatchPhase::Running);
    assert_eq!(snap.time.tick, 1);
    assert_eq!(snap.player.health, 100);
    assert_eq!(snap.weapon, WeaponMode::Machine);
    assert_eq!(snap.enemies.len(), 10);
    assert_eq!(snap.escorts.len(), 2);
    assert!(snap
        .scene_events
        .iter()
        .any(|e| matches!(e, SceneEvent::Removed { .. })));
}

// ---- Registry ----

#[test]
fn test_mark_for_removal_is_idempotent() {
    let mut registry = EntityRegistry::new();
    let bullet = registry.spawn_bullet(Side::Hostile, Position::default(), DVec3::Z, 1.0);
    registry.drain_scene_events();

    assert!(registry.mark_for_removal(bullet));
    assert!(!registry.mark_for_removal(bullet));
    assert_eq!(registry.compact(), 1);
    assert!(!registry.mark_for_removal(bullet), "stale handles are ignored");
    assert_eq!(registry.compact(), 0);
    assert_eq!(registry.drain_scene_events().len(), 1);
}

#[test]
fn test_snapshot_projectile_kinds() {
    let mut engine = SimulationEngine::new(empty_arena());
    engine.spawn_enemy_at(EnemyArchetype::Charger, Position::new(0.0, 0.0, -80.0));
    engine
        .state_mut()
        .registry
        .spawn_bullet(Side::Hostile, Position::new(10.0, 0.0, -10.0), DVec3::X, 0.1);
    let snap = engine.tick(&holding(&[InputAction::LaunchMissile]));

    let kinds: Vec<ProjectileKind> = snap.projectiles.iter().map(|p| p.kind).collect();
    assert!(kinds.contains(&ProjectileKind::HostileBullet));
    assert!(kinds.contains(&ProjectileKind::Missile));
}

// ---- Config ----

#[test]
fn test_config_defaults_from_empty_json() {
    let config = SimConfig::from_json_str("{}").unwrap();
    assert_eq!(config, SimConfig::default());
    assert_eq!(config.initial_enemy_count(), 10);
}

#[test]
fn test_config_partial_override() {
    let config = SimConfig::from_json_str(
        r#"{"seed": 7, "escort_count": 4, "initial_wave": [{"archetype": "shooter", "count": 3}]}"#,
    )
    .unwrap();
    assert_eq!(config.seed, 7);
    assert_eq!(config.escort_count, 4);
    assert_eq!(
        config.initial_wave,
        vec![WaveEntry {
            archetype: EnemyArchetype::Shooter,
            count: 3
        }]
    );
    assert_eq!(config.delta, 0.1);
}

#[test]
fn test_config_rejects_bad_delta() {
    let err = SimConfig::from_json_str(r#"{"delta": 0.0}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_config_parse_and_io_errors() {
    assert!(matches!(
        SimConfig::from_json_str("{not json"),
        Err(ConfigError::Parse(_))
    ));
    let missing = std::path::Path::new("/definitely/not/here/strafe.json");
    assert!(matches!(SimConfig::load(missing), Err(ConfigError::Io { .. })));
}
