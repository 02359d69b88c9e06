//! Top-level mode transitions.
//!
//! A pure transition table: the engine feeds it mode events and applies the
//! resulting `Transition`. Simulation systems run only in `Playing`.

use laststand_core::enums::GameMode;

/// Something that may move the game between modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeEvent {
    /// Start or restart command.
    Start,
    /// Pause toggle command.
    TogglePause,
    /// Combat reported player health at or below zero.
    PlayerDied,
    /// The crash guard caught a fault.
    Fault,
}

/// What the engine must do in response to a mode event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Ignore the event.
    Stay,
    /// Switch mode, keeping the current session.
    Enter(GameMode),
    /// Replace the session with a fresh one and enter `Playing`.
    Initialize,
}

/// Resolve `event` in `mode`.
pub fn transition(mode: GameMode, event: ModeEvent) -> Transition {
    use GameMode::*;

    match (mode, event) {
        // A fault wins from every mode, including Crashed itself.
        (_, ModeEvent::Fault) => Transition::Enter(Crashed),

        (Menu | GameOver | Crashed, ModeEvent::Start) => Transition::Initialize,
        (Playing | Paused, ModeEvent::Start) => Transition::Stay,

        (Playing, ModeEvent::TogglePause) => Transition::Enter(Paused),
        (Paused, ModeEvent::TogglePause) => Transition::Enter(Playing),
        (Menu | GameOver | Crashed, ModeEvent::TogglePause) => Transition::Stay,

        (Playing, ModeEvent::PlayerDied) => Transition::Enter(GameOver),
        (_, ModeEvent::PlayerDied) => Transition::Stay,
    }
}

/// Whether simulation systems run in this mode.
pub fn simulates(mode: GameMode) -> bool {
    mode == GameMode::Playing
}

/// Whether fire requests are honoured in this mode.
pub fn accepts_fire(mode: GameMode) -> bool {
    mode == GameMode::Playing
}
