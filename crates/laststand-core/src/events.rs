//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::components::{EntityId, PickupKind};
use crate::enums::*;

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new wave (or the opening batch) arrived.
    WaveStarted { wave: u32, count: u32 },
    /// A zombie's health reached zero.
    ZombieKilled { id: EntityId, tier: ZombieTier },
    /// The player fired a shot.
    ShotFired { weapon: WeaponKind },
    /// The player walked over a loot crate.
    PickupCollected { kind: PickupKind },
    /// Player health reached zero.
    PlayerDowned,
}
