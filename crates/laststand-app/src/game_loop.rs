//! Game loop: runs the simulation engine at a fixed rate on the calling thread.
//!
//! One iteration is one frame: poll input, advance one tick, draw the
//! snapshot, then sleep until the next deadline. A panic while ticking is
//! caught here and forces the Crashed mode; render failures and renderer
//! panics are logged, fall back to a single line and never reach the
//! simulation.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use tracing::{error, info, warn};

use laststand_core::constants::TICK_RATE;
use laststand_core::enums::GameMode;
use laststand_core::state::WorldSnapshot;
use laststand_sim::engine::SimulationEngine;

use crate::input::InputSource;
use crate::render::{Renderer, FALLBACK_MESSAGE};

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Message recorded when a frame panics.
pub const PANIC_MESSAGE: &str = "Critical error";

/// Frame duration for a given tick rate.
pub fn tick_duration(tick_rate: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(tick_rate.max(1)))
}

/// How a loop run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSummary {
    pub frames: u64,
    pub final_mode: GameMode,
    pub panics: u32,
}

/// The game loop. Runs until the engine has processed a quit event.
pub fn run_game_loop(
    engine: &mut SimulationEngine,
    input: &mut dyn InputSource,
    renderer: &mut dyn Renderer,
    frame_duration: Duration,
) -> LoopSummary {
    let mut last = engine.snapshot();
    let mut next_tick_time = Instant::now();
    let mut frames = 0;
    let mut panics = 0;

    while !engine.quit_requested() {
        // 1. Poll input and advance one tick
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let frame = input.poll(&last);
            engine.tick(&frame)
        }));
        frames += 1;

        // 2. Draw
        match result {
            Ok(snapshot) => {
                let drawn = panic::catch_unwind(AssertUnwindSafe(|| present(renderer, &snapshot)));
                if let Err(payload) = drawn {
                    panics += 1;
                    error!(frame = frames, panic = %panic_message(payload.as_ref()), "renderer panicked");
                    draw_fallback(renderer);
                }
                last = snapshot;
            }
            Err(payload) => {
                panics += 1;
                error!(frame = frames, panic = %panic_message(payload.as_ref()), "frame panicked");
                engine.force_crash(PANIC_MESSAGE);
                draw_fallback(renderer);
                last = engine.snapshot();
            }
        }

        // 3. Sleep until next tick
        next_tick_time += frame_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > frame_duration * 2 {
            // Too far behind, reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }

    info!(frames, sessions = engine.sessions_started(), "game loop finished");
    LoopSummary {
        frames,
        final_mode: engine.mode(),
        panics,
    }
}

/// Draw one frame. A failed crash screen falls back to a single line.
fn present(renderer: &mut dyn Renderer, snapshot: &WorldSnapshot) {
    if let Err(err) = renderer.draw(snapshot) {
        warn!(%err, mode = ?snapshot.mode, "render failed");
        if snapshot.mode == GameMode::Crashed {
            draw_fallback(renderer);
        }
    }
}

/// Draw the fallback line. Errors and panics are logged and swallowed.
fn draw_fallback(renderer: &mut dyn Renderer) {
    match panic::catch_unwind(AssertUnwindSafe(|| renderer.draw_fallback(FALLBACK_MESSAGE))) {
        Ok(Ok(())) => {}
        Ok(Err(err)) => error!(%err, "fallback frame failed"),
        Err(payload) => error!(panic = %panic_message(payload.as_ref()), "fallback frame panicked"),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic"
    }
}
