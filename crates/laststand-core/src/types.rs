//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{
    GAME_MINUTES_PER_SECOND, MINUTES_PER_DAY, NIGHT_END_MINUTE, NIGHT_START_MINUTE,
    SCREEN_HEIGHT, SCREEN_WIDTH,
};

/// 2D position in screen space (pixels). x grows right, y grows down.
/// For entities this is the top-left corner of the hitbox.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in screen space (px/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// The rectangle entities live in. Only the player is clamped to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayBounds {
    pub width: f64,
    pub height: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each playing tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

/// Day/night clock. `minute` is the minute of the current day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameClock {
    pub day: u32,
    pub minute: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        (other.to_dvec2() - self.to_dvec2()).length()
    }

    pub fn to_dvec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Speed magnitude (px/s).
    pub fn speed(&self) -> f64 {
        self.to_dvec2().length()
    }

    pub fn to_dvec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<DVec2> for Velocity {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl Default for PlayBounds {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}

impl PlayBounds {
    /// Whether a point lies inside the play area (edges inclusive).
    pub fn contains(&self, pos: &Position) -> bool {
        pos.x >= 0.0 && pos.x <= self.width && pos.y >= 0.0 && pos.y <= self.height
    }

    /// Midpoint of the play area, rounded down to whole pixels.
    pub fn center(&self) -> Position {
        Position::new((self.width / 2.0).floor(), (self.height / 2.0).floor())
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    ///
    /// Elapsed time is derived from the tick count so that it never drifts
    /// from `tick * dt`.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs = self.tick as f64 * dt;
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self { day: 1, minute: 0.0 }
    }
}

impl GameClock {
    /// Advance the clock by `dt_secs` of simulated time.
    ///
    /// Every full day contained in the accumulated minutes increments `day`,
    /// so a single large step can cross several midnights. Negative and
    /// non-finite steps are ignored.
    pub fn advance(&mut self, dt_secs: f64) {
        if !dt_secs.is_finite() || dt_secs <= 0.0 {
            return;
        }
        self.minute += dt_secs * GAME_MINUTES_PER_SECOND;

        let whole_days = (self.minute / MINUTES_PER_DAY).floor();
        if whole_days >= 1.0 {
            self.day = self.day.saturating_add(whole_days as u32);
            self.minute -= whole_days * MINUTES_PER_DAY;
        }
        // Rounding can leave exactly MINUTES_PER_DAY behind.
        while self.minute >= MINUTES_PER_DAY {
            self.minute -= MINUTES_PER_DAY;
            self.day = self.day.saturating_add(1);
        }
        if self.minute < 0.0 {
            self.minute = 0.0;
        }
    }

    /// Night is after 20:00 or before 06:00.
    pub fn is_night(&self) -> bool {
        self.minute > NIGHT_START_MINUTE || self.minute < NIGHT_END_MINUTE
    }

    pub fn hour(&self) -> u32 {
        (self.minute / 60.0) as u32
    }

    pub fn minute_of_hour(&self) -> u32 {
        (self.minute % 60.0) as u32
    }

    /// "HH:MM" label for the HUD.
    pub fn label(&self) -> String {
        format!("{:02}:{:02}", self.hour(), self.minute_of_hour())
    }
}
