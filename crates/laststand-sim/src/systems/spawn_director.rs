//! Spawn director: decides when, how many and where zombies and loot appear.
//!
//! Two policies, selected by configuration:
//!
//! - **Edge trickle**: every tick a small chance of a batch; batches are
//!   larger at night.
//! - **Waves**: when the last zombie dies the wave index goes up and
//!   `base_rate * wave` zombies arrive at once.
//!
//! Zombies always appear one tile outside a uniformly chosen screen edge.
//! Every failure (bad weights, bad probability, overflowing wave size) is
//! returned to the caller; there is no fallback count.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use laststand_core::components::{PickupKind, Zombie};
use laststand_core::constants::*;
use laststand_core::enums::{Edge, WeaponKind, ZombieTier};
use laststand_core::events::GameEvent;
use laststand_core::types::{PlayBounds, Position};

use crate::error::SimError;
use crate::session::WorldState;
use crate::world_setup;

/// Spawn policy for a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnPolicy {
    /// Continuous low-probability spawning.
    EdgeTrickle {
        /// Per-tick probability of a batch.
        chance: f64,
        /// Batch size multiplier at night.
        night_multiplier: u32,
        /// Zombies placed when the session starts.
        initial_count: u32,
    },
    /// Discrete waves triggered by clearing the field.
    Wave {
        /// Zombies per wave index.
        base_rate: u32,
    },
}

impl Default for SpawnPolicy {
    fn default() -> Self {
        SpawnPolicy::EdgeTrickle {
            chance: TRICKLE_SPAWN_CHANCE,
            night_multiplier: NIGHT_SPAWN_MULTIPLIER,
            initial_count: INITIAL_ZOMBIES,
        }
    }
}

impl SpawnPolicy {
    /// Wave policy with the reference base rate.
    pub fn waves() -> Self {
        SpawnPolicy::Wave {
            base_rate: WAVE_BASE_RATE,
        }
    }
}

/// Spawn tuning shared by both policies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnConfig {
    pub policy: SpawnPolicy,
    /// Relative weights for tiers 0, 1, 2.
    pub tier_weights: [f64; 3],
    /// Loot crates placed at session start.
    pub initial_pickups: u32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            policy: SpawnPolicy::default(),
            tier_weights: ZOMBIE_TIER_WEIGHTS,
            initial_pickups: INITIAL_PICKUPS,
        }
    }
}

/// Populate a fresh session: the opening zombies and the loot crates.
pub fn initial_spawn(
    state: &mut WorldState,
    rng: &mut ChaCha8Rng,
    config: &SpawnConfig,
) -> Result<u32, SimError> {
    let count = match config.policy {
        SpawnPolicy::EdgeTrickle { initial_count, .. } => initial_count,
        SpawnPolicy::Wave { base_rate } => wave_size(base_rate, state.wave)?,
    };
    spawn_zombies(state, rng, &config.tier_weights, count)?;
    state.events.push(GameEvent::WaveStarted {
        wave: state.wave,
        count,
    });

    for _ in 0..config.initial_pickups {
        let kind = roll_pickup(rng);
        let position = interior_position(rng, &state.bounds);
        world_setup::spawn_pickup(state, kind, position)?;
    }

    Ok(count)
}

/// Per-tick spawning. Returns the number of zombies spawned.
pub fn run(state: &mut WorldState, rng: &mut ChaCha8Rng, config: &SpawnConfig) -> Result<u32, SimError> {
    match config.policy {
        SpawnPolicy::EdgeTrickle {
            chance,
            night_multiplier,
            ..
        } => {
            if !(0.0..=1.0).contains(&chance) {
                return Err(SimError::InvalidSpawnChance(chance));
            }
            if !rng.gen_bool(chance) {
                return Ok(0);
            }
            let count = if state.clock.is_night() {
                night_multiplier
            } else {
                1
            };
            spawn_zombies(state, rng, &config.tier_weights, count)?;
            debug!(count, night = state.clock.is_night(), "trickle batch");
            Ok(count)
        }
        SpawnPolicy::Wave { base_rate } => {
            if live_zombies(state) > 0 {
                return Ok(0);
            }
            let next_wave = state.wave.checked_add(1).ok_or(SimError::SpawnCount {
                wave: state.wave,
                base_rate,
            })?;
            let count = wave_size(base_rate, next_wave)?;
            state.wave = next_wave;
            spawn_zombies(state, rng, &config.tier_weights, count)?;
            state.events.push(GameEvent::WaveStarted { wave: next_wave, count });
            info!(wave = next_wave, count, "wave started");
            Ok(count)
        }
    }
}

/// Zombies in wave `wave`: `base_rate * wave`.
pub fn wave_size(base_rate: u32, wave: u32) -> Result<u32, SimError> {
    base_rate
        .checked_mul(wave)
        .ok_or(SimError::SpawnCount { wave, base_rate })
}

/// Number of zombies currently alive.
pub fn live_zombies(state: &WorldState) -> usize {
    state.world.query::<&Zombie>().iter().count()
}

/// Spawn `count` zombies with weighted random tiers on random edges.
pub fn spawn_zombies(
    state: &mut WorldState,
    rng: &mut ChaCha8Rng,
    tier_weights: &[f64; 3],
    count: u32,
) -> Result<(), SimError> {
    if count == 0 {
        return Ok(());
    }
    let tiers = WeightedIndex::new(tier_weights).map_err(|source| SimError::InvalidTierWeights { source })?;

    for _ in 0..count {
        let (_edge, position) = edge_position(rng, &state.bounds);
        let tier = tier_for_index(tiers.sample(rng))?;
        world_setup::spawn_zombie(state, tier, position)?;
    }
    Ok(())
}

/// Map a sampled weight index to its tier.
pub fn tier_for_index(index: usize) -> Result<ZombieTier, SimError> {
    ZombieTier::from_index(index).ok_or(SimError::UnknownTier(index))
}

/// Pick a uniform edge and place a point one tile outside it.
///
/// The coordinate along the edge is uniform within the play area.
pub fn edge_position(rng: &mut ChaCha8Rng, bounds: &PlayBounds) -> (Edge, Position) {
    let edge = Edge::ALL[rng.gen_range(0..Edge::ALL.len())];
    let position = match edge {
        Edge::Top => Position::new(rng.gen_range(0.0..=bounds.width), -TILE_SIZE),
        Edge::Right => Position::new(bounds.width + TILE_SIZE, rng.gen_range(0.0..=bounds.height)),
        Edge::Bottom => Position::new(rng.gen_range(0.0..=bounds.width), bounds.height + TILE_SIZE),
        Edge::Left => Position::new(-TILE_SIZE, rng.gen_range(0.0..=bounds.height)),
    };
    (edge, position)
}

/// Uniform position with the whole crate at least one tile from every edge.
fn interior_position(rng: &mut ChaCha8Rng, bounds: &PlayBounds) -> Position {
    let max_x = (bounds.width - 2.0 * TILE_SIZE).max(TILE_SIZE);
    let max_y = (bounds.height - 2.0 * TILE_SIZE).max(TILE_SIZE);
    Position::new(rng.gen_range(TILE_SIZE..=max_x), rng.gen_range(TILE_SIZE..=max_y))
}

/// Loot table: one of the non-starting weapons, or an ammunition crate.
fn roll_pickup(rng: &mut ChaCha8Rng) -> PickupKind {
    match rng.gen_range(0..4) {
        0 => PickupKind::Weapon(WeaponKind::Shotgun),
        1 => PickupKind::Weapon(WeaponKind::Rifle),
        2 => PickupKind::Weapon(WeaponKind::Smg),
        _ => PickupKind::Ammunition(AMMO_CRATE_AMOUNT),
    }
}
