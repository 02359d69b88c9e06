//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::{ZOMBIE_BASE_SPEED, ZOMBIE_TIER_SPEED_STEP};

/// Top-level game mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Menu,
    Playing,
    Paused,
    GameOver,
    /// Recoverable internal fault; only a restart leaves this mode.
    Crashed,
}

/// Entity kind tag, as reported to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Zombie,
    Bullet,
    Pickup,
}

/// Zombie class. Higher tiers are faster and rarer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZombieTier {
    #[default]
    Shambler,
    Runner,
    Sprinter,
}

/// Weapons the player can hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    #[default]
    Pistol,
    Shotgun,
    Rifle,
    Smg,
}

/// Screen edge used for spawn placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl ZombieTier {
    pub const ALL: [ZombieTier; 3] = [ZombieTier::Shambler, ZombieTier::Runner, ZombieTier::Sprinter];

    /// Numeric tier (0, 1, 2).
    pub fn index(self) -> u8 {
        match self {
            ZombieTier::Shambler => 0,
            ZombieTier::Runner => 1,
            ZombieTier::Sprinter => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Pursuit speed: base + tier * step.
    pub fn speed(self) -> f64 {
        ZOMBIE_BASE_SPEED + ZOMBIE_TIER_SPEED_STEP * f64::from(self.index())
    }
}

impl WeaponKind {
    pub fn name(self) -> &'static str {
        match self {
            WeaponKind::Pistol => "Pistol",
            WeaponKind::Shotgun => "Shotgun",
            WeaponKind::Rifle => "Rifle",
            WeaponKind::Smg => "SMG",
        }
    }
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];
}
