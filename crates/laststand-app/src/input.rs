//! Input sources for the host loop.
//!
//! The simulation consumes an opaque `InputFrame` per tick. Device decoding
//! happens here; the headless binary uses `AutopilotInput`.

use std::collections::VecDeque;

use laststand_core::commands::{InputEvent, InputFrame, MovementKeys};
use laststand_core::constants::TICK_RATE;
use laststand_core::enums::{EntityKind, GameMode};
use laststand_core::state::{EntityView, WorldSnapshot};
use laststand_core::types::Position;

/// Frames the autopilot lingers on the game-over and crash screens.
pub const RESTART_DELAY_FRAMES: u64 = 2 * TICK_RATE as u64;

/// Produces one input frame per loop iteration.
pub trait InputSource {
    /// Input for the next tick, given the snapshot of the previous one.
    fn poll(&mut self, last: &WorldSnapshot) -> InputFrame;
}

/// A scripted player: restarts, kites the nearest zombie and shoots it.
pub struct AutopilotInput {
    max_frames: Option<u64>,
    frame: u64,
    mode: GameMode,
    frames_in_mode: u64,
}

impl AutopilotInput {
    pub fn new(max_frames: Option<u64>) -> Self {
        Self {
            max_frames,
            frame: 0,
            mode: GameMode::Menu,
            frames_in_mode: 0,
        }
    }
}

impl InputSource for AutopilotInput {
    fn poll(&mut self, last: &WorldSnapshot) -> InputFrame {
        self.frame += 1;
        if last.mode == self.mode {
            self.frames_in_mode += 1;
        } else {
            self.mode = last.mode;
            self.frames_in_mode = 1;
        }

        if self.max_frames.is_some_and(|max| self.frame > max) {
            return InputFrame::with_events([InputEvent::Quit]);
        }

        match last.mode {
            GameMode::Menu => InputFrame::with_events([InputEvent::Start]),
            GameMode::GameOver | GameMode::Crashed => {
                if self.frames_in_mode >= RESTART_DELAY_FRAMES {
                    InputFrame::with_events([InputEvent::Start])
                } else {
                    InputFrame::default()
                }
            }
            GameMode::Paused => InputFrame::with_events([InputEvent::TogglePause]),
            GameMode::Playing => kite(last),
        }
    }
}

/// Move away from the nearest zombie while firing at it.
fn kite(snapshot: &WorldSnapshot) -> InputFrame {
    let Some(player) = snapshot.player() else {
        return InputFrame::default();
    };
    let me = center(player);

    let nearest = snapshot
        .entities
        .iter()
        .filter(|e| e.kind == EntityKind::Zombie)
        .min_by(|a, b| {
            center(a)
                .distance_to(&me)
                .total_cmp(&center(b).distance_to(&me))
        });
    let Some(zombie) = nearest else {
        return InputFrame::default();
    };
    let target = center(zombie);

    InputFrame {
        keys: MovementKeys {
            up: target.y > me.y,
            down: target.y < me.y,
            left: target.x > me.x,
            right: target.x < me.x,
        },
        cursor: target,
        events: vec![InputEvent::Fire],
    }
}

fn center(entity: &EntityView) -> Position {
    Position::new(
        entity.position.x + entity.width / 2.0,
        entity.position.y + entity.height / 2.0,
    )
}

/// Replays fixed frames, then quits.
pub struct ScriptedInput {
    frames: VecDeque<InputFrame>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = InputFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _last: &WorldSnapshot) -> InputFrame {
        self.frames
            .pop_front()
            .unwrap_or_else(|| InputFrame::with_events([InputEvent::Quit]))
    }
}
