//! Simulation engine: the frame driver of a match.
//!
//! `SimulationEngine` owns the simulation state aggregate, processes match
//! commands, runs all systems once per tick in a fixed order and produces
//! `FrameSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use strafe_core::commands::SimCommand;
use strafe_core::enums::{MatchPhase, WeaponMode};
use strafe_core::events::GameEvent;
use strafe_core::input::{FrameInput, InputAction};
use strafe_core::state::FrameSnapshot;
use strafe_core::types::SimTime;

use crate::config::SimConfig;
use crate::state::{PlayerState, SimulationState};
use crate::systems;
use crate::world_setup;

/// The simulation engine. Owns all match state and the RNG stream.
pub struct SimulationEngine {
    config: SimConfig,
    state: SimulationState,
    rng: ChaCha8Rng,
    command_queue: VecDeque<SimCommand>,
}

impl SimulationEngine {
    /// Create an engine and set up the opening of a match.
    pub fn new(config: SimConfig) -> Self {
        let mut engine = Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            state: SimulationState::new(),
            command_queue: VecDeque::new(),
        };
        engine.setup_match();
        engine
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SimCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    /// Outside `Running` only commands are processed.
    pub fn tick(&mut self, input: &FrameInput) -> FrameSnapshot {
        self.process_commands();

        if self.state.phase == MatchPhase::Running {
            self.apply_input(input);
            self.run_systems(input);
            self.state.time.advance(self.config.delta);
            self.check_match_end();
        }

        self.state.previous_input = input.held;
        systems::snapshot::build_snapshot(&mut self.state)
    }

    pub fn phase(&self) -> MatchPhase {
        self.state.phase
    }

    pub fn time(&self) -> SimTime {
        self.state.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Read-only view of the whole simulation state.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn player(&self) -> &PlayerState {
        &self.state.player
    }

    pub fn weapon(&self) -> WeaponMode {
        self.state.weapon
    }

    #[cfg(test)]
    pub fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    /// Spawn an enemy at an exact spot (for scenario tests).
    #[cfg(test)]
    pub fn spawn_enemy_at(
        &mut self,
        archetype: strafe_core::enums::EnemyArchetype,
        position: strafe_core::types::Position,
    ) -> hecs::Entity {
        world_setup::spawn_enemy_at(&mut self.state.registry, archetype, position)
    }

    #[cfg(test)]
    pub fn set_player_health(&mut self, health: i32) {
        self.state.player.health = health;
    }

    fn setup_match(&mut self) {
        world_setup::setup_match(
            &mut self.state.registry,
            &mut self.rng,
            &self.config,
            &self.state.player,
        );
        info!(
            seed = self.config.seed,
            escorts = self.config.escort_count,
            enemies = self.config.initial_enemy_count(),
            "match started"
        );
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: SimCommand) {
        match command {
            SimCommand::Pause => {
                if self.state.phase == MatchPhase::Running {
                    self.state.phase = MatchPhase::Paused;
                }
            }
            SimCommand::Resume => {
                if self.state.phase == MatchPhase::Paused {
                    self.state.phase = MatchPhase::Running;
                }
            }
            SimCommand::Restart => {
                // The RNG stream carries on, so a restart is a fresh match.
                self.state.reset();
                self.setup_match();
            }
        }
    }

    /// Sample view direction, weapon selection and the missile key.
    fn apply_input(&mut self, input: &FrameInput) {
        if let Some(view) = input.view_direction.and_then(|v| v.try_normalize()) {
            self.state.player.view_direction = view;
        }

        let selected = if input.held.is_held(InputAction::Weapon1) {
            Some(WeaponMode::Machine)
        } else if input.held.is_held(InputAction::Weapon2) {
            Some(WeaponMode::Laser)
        } else {
            None
        };
        if let Some(mode) = selected {
            if mode != self.state.weapon {
                self.state.weapon = mode;
                debug!(?mode, "weapon changed");
                self.state.events.push(GameEvent::WeaponChanged { mode });
            }
        }

        if input
            .held
            .just_pressed(&self.state.previous_input, InputAction::LaunchMissile)
        {
            systems::weapons::launch_missile(
                &mut self.state.registry,
                &self.state.player,
                &mut self.state.events,
            );
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, input: &FrameInput) {
        let delta = self.config.delta;
        let state = &mut self.state;

        // 1. Player locomotion, then escorts follow.
        systems::movement::move_player(&mut state.player, &input.held, delta);
        let elapsed = state.time.elapsed_secs;
        systems::escorts::run(&mut state.registry, &state.player.position, elapsed);

        // 2. Weapon fire.
        if input.held.is_held(InputAction::PrimaryFire) {
            systems::weapons::run(&mut state.registry, &mut self.rng, state.weapon, &state.player);
        }

        // 3. Projectile kinematics: bullets, then homing missiles.
        systems::movement::run(&mut state.registry, &state.player.position);
        systems::missile_kinematics::run(&mut state.registry, &mut state.events);

        // 4. Enemy AI.
        systems::enemy_ai::run(
            &mut state.registry,
            &mut self.rng,
            &mut state.player,
            delta,
            &mut state.events,
        );

        // 5. Collisions and damage.
        systems::collision::run(
            &mut state.registry,
            &mut state.player,
            state.weapon,
            &mut state.events,
        );

        // 6. Sweep the dead and compact.
        systems::cleanup::run(&mut state.registry, &mut state.events);
    }

    /// Enter `Ended` the first tick the player has no health left.
    fn check_match_end(&mut self) {
        if self.state.player.health > 0 || self.state.phase == MatchPhase::Ended {
            return;
        }
        self.state.phase = MatchPhase::Ended;
        let tick = self.state.time.tick;
        info!(tick, "match ended, player destroyed");
        self.state.events.push(GameEvent::MatchEnded { tick });
    }
}
