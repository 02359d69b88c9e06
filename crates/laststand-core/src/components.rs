//! ECS components for hecs entities.
//!
//! Components are plain data structs. Game logic lives in systems;
//! the few methods here are pure lookups or geometry.

use serde::{Deserialize, Serialize};

use crate::constants::TILE_SIZE;
use crate::enums::*;
use crate::types::{Position, Velocity};

/// Session-unique entity identifier. Issued at spawn, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Hit points for players and zombies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

/// Axis-aligned hitbox anchored at the entity's `Position` (top-left).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    pub width: f64,
    pub height: f64,
}

/// A held weapon and its cooldown state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    pub kind: WeaponKind,
    /// Damage dealt by each bullet.
    pub damage: f64,
    /// Minimum seconds between two shots.
    pub cooldown_secs: f64,
    /// Bullet travel speed (px/s).
    pub bullet_speed: f64,
    /// Tick of the last honoured shot.
    pub last_shot_tick: Option<u64>,
}

/// Marks the player entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Movement speed (px/s).
    pub speed: f64,
    pub weapon: Weapon,
}

/// Marks a zombie entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Zombie {
    pub tier: ZombieTier,
}

/// A fired bullet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    pub damage: f64,
    /// Unit vector of travel.
    pub direction: Velocity,
    pub speed: f64,
    /// Seconds since the bullet was fired.
    pub age_secs: f64,
    pub max_lifetime_secs: f64,
}

/// What a pickup does when the player walks over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    /// Replaces the player's weapon.
    Weapon(WeaponKind),
    /// Adds ammunition to the stockpile.
    Ammunition(i64),
}

/// A non-hostile loot crate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pickup {
    pub kind: PickupKind,
}

impl Health {
    pub fn full(max: f64) -> Self {
        Self { current: max, max }
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }
}

impl Default for Hitbox {
    fn default() -> Self {
        Self::square(TILE_SIZE)
    }
}

impl Hitbox {
    pub fn square(size: f64) -> Self {
        Self {
            width: size,
            height: size,
        }
    }

    /// Centre of this hitbox when anchored at `pos`.
    pub fn center(&self, pos: &Position) -> Position {
        Position::new(pos.x + self.width / 2.0, pos.y + self.height / 2.0)
    }
}

/// Strict AABB overlap test. Boxes that only touch do not overlap.
pub fn overlaps(a_pos: &Position, a_box: &Hitbox, b_pos: &Position, b_box: &Hitbox) -> bool {
    a_pos.x < b_pos.x + b_box.width
        && b_pos.x < a_pos.x + a_box.width
        && a_pos.y < b_pos.y + b_box.height
        && b_pos.y < a_pos.y + a_box.height
}

impl Weapon {
    /// Factory stats for a weapon kind.
    pub fn new(kind: WeaponKind) -> Self {
        let (damage, cooldown_secs, bullet_speed) = match kind {
            WeaponKind::Pistol => (25.0, 0.5, 600.0),
            WeaponKind::Shotgun => (45.0, 0.9, 500.0),
            WeaponKind::Rifle => (40.0, 0.35, 800.0),
            WeaponKind::Smg => (15.0, 0.1, 650.0),
        };
        Self {
            kind,
            damage,
            cooldown_secs,
            bullet_speed,
            last_shot_tick: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Cooldown rounded up to whole ticks of `dt` seconds.
    pub fn cooldown_ticks(&self, dt: f64) -> u64 {
        if dt <= 0.0 || !dt.is_finite() {
            return 0;
        }
        // Absorb the rounding error of cooldown / dt before taking the ceiling.
        (self.cooldown_secs / dt - 1e-9).ceil().max(0.0) as u64
    }

    /// Whether the cooldown has elapsed at tick `now_tick`.
    pub fn is_ready(&self, now_tick: u64, dt: f64) -> bool {
        match self.last_shot_tick {
            None => true,
            Some(last) => now_tick.saturating_sub(last) >= self.cooldown_ticks(dt),
        }
    }
}
