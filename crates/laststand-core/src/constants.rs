//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Play area ---

/// Play area width in pixels.
pub const SCREEN_WIDTH: f64 = 800.0;

/// Play area height in pixels.
pub const SCREEN_HEIGHT: f64 = 600.0;

/// Edge length of the default square hitbox, and the spawn offset outside the play area.
pub const TILE_SIZE: f64 = 32.0;

// --- Clock ---

/// Game minutes that pass per real (simulated) second.
pub const GAME_MINUTES_PER_SECOND: f64 = 60.0;

/// Minutes in one in-game day.
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Night begins after this minute of the day (20:00).
pub const NIGHT_START_MINUTE: f64 = 1200.0;

/// Night ends at this minute of the day (06:00).
pub const NIGHT_END_MINUTE: f64 = 360.0;

// --- Player ---

/// Player movement speed (px/s), axial and diagonal.
pub const PLAYER_SPEED: f64 = 150.0;

/// Player starting and maximum health.
pub const PLAYER_MAX_HEALTH: f64 = 100.0;

// --- Zombies ---

/// Starting health of every zombie tier.
pub const ZOMBIE_MAX_HEALTH: f64 = 50.0;

/// Pursuit speed of a tier-0 zombie (px/s).
pub const ZOMBIE_BASE_SPEED: f64 = 50.0;

/// Extra pursuit speed per tier step (px/s).
pub const ZOMBIE_TIER_SPEED_STEP: f64 = 25.0;

/// Health drained from the player per second per overlapping zombie.
pub const ZOMBIE_CONTACT_DPS: f64 = 5.0;

/// Relative spawn weights for tiers 0, 1 and 2.
pub const ZOMBIE_TIER_WEIGHTS: [f64; 3] = [0.7, 0.2, 0.1];

// --- Spawning ---

/// Per-tick probability of a trickle spawn batch.
pub const TRICKLE_SPAWN_CHANCE: f64 = 0.01;

/// Batch size multiplier applied at night.
pub const NIGHT_SPAWN_MULTIPLIER: u32 = 3;

/// Zombies spawned when a trickle session starts.
pub const INITIAL_ZOMBIES: u32 = 5;

/// Zombies per wave index under the wave policy.
pub const WAVE_BASE_RATE: u32 = 5;

/// Loot crates placed at session start.
pub const INITIAL_PICKUPS: u32 = 3;

/// Ammunition granted by an ammunition crate.
pub const AMMO_CRATE_AMOUNT: i64 = 20;

// --- Bullets ---

/// Edge length of a bullet hitbox.
pub const BULLET_SIZE: f64 = 8.0;

/// Seconds a bullet lives before it expires.
pub const BULLET_MAX_LIFETIME_SECS: f64 = 2.0;

// --- Resources ---

pub const STARTING_FOOD: i64 = 100;
pub const STARTING_MATERIALS: i64 = 100;
pub const STARTING_AMMUNITION: i64 = 50;
pub const STARTING_MEDICINE: i64 = 20;

// --- Crash screen ---

/// Characters per line when the crash message is wrapped for display.
pub const CRASH_MESSAGE_WRAP_WIDTH: usize = 60;
