//! Simulation constants and tuning parameters.
//!
//! Speeds are expressed in world units per tick: kinematics integrate a fixed
//! step each frame rather than scaling by elapsed time. Timers are expressed in
//! nominal seconds and count down by the configured tick `delta`.

/// Display refresh rate the frame driver is paced at (Hz).
pub const REFRESH_RATE: u32 = 60;

/// Nominal seconds consumed by one tick, independent of the refresh rate.
pub const DEFAULT_DELTA: f64 = 0.1;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;

// --- Player ---

/// Starting (and maximum) player health.
pub const PLAYER_MAX_HEALTH: i32 = 100;

/// Walk speed in units per nominal second (1 unit per tick at the default delta).
pub const PLAYER_MOVE_SPEED: f64 = 10.0;

// --- Escorts ---

/// Number of wingmen flying with the player.
pub const DEFAULT_ESCORT_COUNT: usize = 2;

/// Orbit radius around the player on the horizontal plane.
pub const ESCORT_ORBIT_RADIUS: f64 = 1.5;

/// Orbit angular rate (radians per nominal second).
/// 2 rad per wall-clock second at 60 Hz with a 0.1 s nominal delta.
pub const ESCORT_ORBIT_RATE: f64 = 1.0 / 3.0;

// --- Spawner ---

/// Health every enemy starts with.
pub const ENEMY_MAX_HEALTH: i32 = 20;

/// Half-width of the horizontal spawn band (x in [-w, w]).
pub const SPAWN_HALF_WIDTH: f64 = 25.0;

/// Fixed spawn height (half of a unit cube resting on the ground).
pub const SPAWN_HEIGHT: f64 = 0.5;

/// Nearest spawn depth ahead of the arena origin (spawned at z = -depth).
pub const SPAWN_DEPTH_NEAR: f64 = 50.0;

/// Farthest spawn depth ahead of the arena origin.
pub const SPAWN_DEPTH_FAR: f64 = 100.0;

/// Chargers in the opening wave.
pub const INITIAL_CHARGERS: u32 = 5;

/// Shooters in the opening wave.
pub const INITIAL_SHOOTERS: u32 = 5;

// --- Weapons ---

/// Per-tick emission chance while the machine gun trigger is held.
pub const MACHINE_TRIGGER_CHANCE: f64 = 0.5;

/// Machine gun bullet speed (units per tick).
pub const MACHINE_BULLET_SPEED: f64 = 1.5;

/// Maximum aim jitter applied to the x and y components of a machine gun volley.
pub const MACHINE_JITTER: f64 = 0.05;

/// Damage per machine gun hit.
pub const MACHINE_DAMAGE: i32 = 2;

/// Per-tick emission chance while the laser trigger is held.
pub const LASER_TRIGGER_CHANCE: f64 = 0.1;

/// Laser bolt speed (units per tick).
pub const LASER_BULLET_SPEED: f64 = 2.0;

/// Damage per laser hit.
pub const LASER_DAMAGE: i32 = 5;

/// Homing missile speed (units per tick).
pub const MISSILE_SPEED: f64 = 0.5;

/// Damage dealt by a homing missile impact.
pub const MISSILE_DAMAGE: i32 = 10;

/// Proximity at which a missile detonates on its target.
pub const MISSILE_HIT_RADIUS: f64 = 0.5;

// --- Bullets ---

/// Bullets farther than this from the player are despawned.
pub const BULLET_RANGE: f64 = 100.0;

/// Proximity at which a bullet hits its target.
pub const BULLET_HIT_RADIUS: f64 = 0.5;

/// Hostile bullet speed (units per tick).
pub const HOSTILE_BULLET_SPEED: f64 = 1.0;

/// Damage a hostile bullet deals to the player.
pub const HOSTILE_BULLET_DAMAGE: i32 = 5;

// --- Enemy AI ---

/// Charger approach speed (units per tick).
pub const CHARGER_SPEED: f64 = 0.05;

/// Distance at which a charger strikes the player.
pub const CHARGER_MELEE_RANGE: f64 = 1.0;

/// Damage a charger's strike deals to the player.
pub const CHARGER_MELEE_DAMAGE: i32 = 10;

/// Shooter wander step (units per tick).
pub const SHOOTER_STEP: f64 = 0.05;

/// Per-tick chance a wandering shooter stops to pause.
pub const SHOOTER_PAUSE_CHANCE: f64 = 0.02;

/// Shortest pause (seconds).
pub const SHOOTER_PAUSE_MIN_SECS: f64 = 1.0;

/// Longest pause (seconds).
pub const SHOOTER_PAUSE_MAX_SECS: f64 = 3.0;

/// Delay between shooter volleys (seconds).
pub const SHOOTER_FIRE_COOLDOWN_SECS: f64 = 2.0;
