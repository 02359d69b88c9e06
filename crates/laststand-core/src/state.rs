//! World snapshot: the complete visible state handed to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::components::{EntityId, PickupKind};
use crate::constants::*;
use crate::enums::*;
use crate::events::GameEvent;
use crate::types::Position;

/// Survival stockpile. Not clamped at zero; balancing is left to the game rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    pub food: i64,
    pub materials: i64,
    pub ammunition: i64,
    pub medicine: i64,
}

impl Default for Resources {
    fn default() -> Self {
        Self {
            food: STARTING_FOOD,
            materials: STARTING_MATERIALS,
            ammunition: STARTING_AMMUNITION,
            medicine: STARTING_MEDICINE,
        }
    }
}

/// Complete read-only state given to the renderer after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub mode: GameMode,
    pub day: u32,
    /// Minute of the current day, in [0, 1440).
    pub minute: f64,
    /// "HH:MM".
    pub clock_label: String,
    pub is_night: bool,
    pub resources: Resources,
    /// Empty unless the mode is Crashed.
    pub error_message: String,
    pub wave: u32,
    pub score: ScoreView,
    /// All live entities, sorted by id.
    pub entities: Vec<EntityView>,
    pub events: Vec<GameEvent>,
}

/// One live entity on the play field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityView {
    pub id: EntityId,
    pub kind: EntityKind,
    pub position: Position,
    pub width: f64,
    pub height: f64,
    /// Present for players and zombies.
    pub health: Option<f64>,
    pub tier: Option<ZombieTier>,
    pub weapon: Option<WeaponKind>,
    pub pickup: Option<PickupKind>,
}

/// Running score for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView {
    pub zombies_killed: u32,
    pub shots_fired: u32,
    pub pickups_collected: u32,
}

impl WorldSnapshot {
    pub fn player(&self) -> Option<&EntityView> {
        self.entities.iter().find(|e| e.kind == EntityKind::Player)
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.entities.iter().filter(|e| e.kind == kind).count()
    }

    /// Crash message split into display lines.
    pub fn crash_lines(&self) -> Vec<String> {
        wrap_message(&self.error_message, CRASH_MESSAGE_WRAP_WIDTH)
    }
}

/// Split `message` into chunks of at most `width` characters.
///
/// Always returns at least one line, so an empty message yields `[""]`.
pub fn wrap_message(message: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let chars: Vec<char> = message.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}
