//! Per-tick input handed to the simulation by the input collaborator.
//!
//! The core treats this as an opaque snapshot: device decoding happens
//! outside the simulation.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Discrete input events, processed at the next tick boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    /// End the host loop at the next iteration boundary.
    Quit,
    /// Toggle between Playing and Paused.
    TogglePause,
    /// Start from the menu, or restart after game over or a crash.
    Start,
    /// Fire the held weapon toward the cursor.
    Fire,
}

/// Movement keys currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Everything the input collaborator reports for one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputFrame {
    pub keys: MovementKeys,
    /// Pointer position in screen space.
    pub cursor: Position,
    pub events: Vec<InputEvent>,
}

impl InputFrame {
    /// A frame carrying only the given events.
    pub fn with_events(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn has_event(&self, event: InputEvent) -> bool {
        self.events.contains(&event)
    }
}
