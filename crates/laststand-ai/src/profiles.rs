//! Tier-specific behavioural profiles.

use laststand_core::constants::ZOMBIE_MAX_HEALTH;
use laststand_core::enums::ZombieTier;

/// Behavioural profile for a zombie tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZombieProfile {
    /// Pursuit speed (px/s).
    pub speed: f64,
    /// Health at spawn.
    pub max_health: f64,
}

/// Get the behavioural profile for a given tier.
pub fn get_profile(tier: ZombieTier) -> ZombieProfile {
    ZombieProfile {
        speed: tier.speed(),
        max_health: ZOMBIE_MAX_HEALTH,
    }
}
