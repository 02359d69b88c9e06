//! Rendering collaborators.
//!
//! A renderer gets a read-only snapshot once per frame and redraws the full
//! scene from it. Failures are returned to the loop, which logs them; they
//! never touch the simulation.

use std::io::{self, Write};

use tracing::info;

use laststand_core::enums::{EntityKind, GameMode};
use laststand_core::state::WorldSnapshot;

/// Single line shown when even the crash screen cannot be drawn.
pub const FALLBACK_MESSAGE: &str = "CRITICAL ERROR - See Console";
pub const RESTART_PROMPT: &str = "Press Start to restart";

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to write frame: {0}")]
    Io(#[from] io::Error),

    #[error("renderer unavailable: {0}")]
    Unavailable(String),
}

/// Draws snapshots.
pub trait Renderer {
    fn draw(&mut self, snapshot: &WorldSnapshot) -> Result<(), RenderError>;

    /// Minimal frame used when `draw` failed in the Crashed mode.
    fn draw_fallback(&mut self, message: &str) -> Result<(), RenderError>;
}

/// Text renderer: a HUD log line once per simulated second and on every
/// mode change, plus the crash screen written to `out`.
pub struct ConsoleRenderer<W: Write> {
    out: W,
    tick_rate: u64,
    last_mode: Option<GameMode>,
    last_second: Option<u64>,
}

impl ConsoleRenderer<io::Stdout> {
    pub fn stdout(tick_rate: u32) -> Self {
        Self::new(io::stdout(), tick_rate)
    }
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, tick_rate: u32) -> Self {
        Self {
            out,
            tick_rate: u64::from(tick_rate.max(1)),
            last_mode: None,
            last_second: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw_crash_screen(&mut self, snapshot: &WorldSnapshot) -> io::Result<()> {
        writeln!(self.out, "=== CRASHED ===")?;
        for line in snapshot.crash_lines() {
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out, "{RESTART_PROMPT}")?;
        self.out.flush()
    }

    fn draw_game_over(&mut self, snapshot: &WorldSnapshot) -> io::Result<()> {
        writeln!(
            self.out,
            "=== GAME OVER === survived to day {} {}, {} zombies killed",
            snapshot.day, snapshot.clock_label, snapshot.score.zombies_killed
        )?;
        writeln!(self.out, "{RESTART_PROMPT}")?;
        self.out.flush()
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn draw(&mut self, snapshot: &WorldSnapshot) -> Result<(), RenderError> {
        let mode_changed = self.last_mode != Some(snapshot.mode);
        let second = snapshot.tick / self.tick_rate;

        if mode_changed {
            match snapshot.mode {
                GameMode::Crashed => self.draw_crash_screen(snapshot)?,
                GameMode::GameOver => self.draw_game_over(snapshot)?,
                _ => {}
            }
        }

        if mode_changed || self.last_second != Some(second) {
            let health = snapshot.player().and_then(|p| p.health).unwrap_or(0.0);
            info!(
                mode = ?snapshot.mode,
                day = snapshot.day,
                clock = %snapshot.clock_label,
                night = snapshot.is_night,
                health = health.round(),
                ammo = snapshot.resources.ammunition,
                food = snapshot.resources.food,
                wave = snapshot.wave,
                zombies = snapshot.count(EntityKind::Zombie),
                kills = snapshot.score.zombies_killed,
                "hud"
            );
        }

        self.last_mode = Some(snapshot.mode);
        self.last_second = Some(second);
        Ok(())
    }

    fn draw_fallback(&mut self, message: &str) -> Result<(), RenderError> {
        writeln!(self.out, "{message}")?;
        self.out.flush()?;
        Ok(())
    }
}
