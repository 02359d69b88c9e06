//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick: position += velocity * dt.
//! The player's velocity comes from the held movement keys and the player
//! alone is clamped to the play area.

use std::f64::consts::FRAC_1_SQRT_2;

use hecs::World;

use laststand_core::commands::MovementKeys;
use laststand_core::components::{Bullet, EntityId, Hitbox, Player};
use laststand_core::types::{PlayBounds, Position, Velocity};

use crate::error::SimError;

/// Derive the player velocity from the held keys.
///
/// Down beats up and right beats left when both are held. Diagonals are
/// scaled by 1/sqrt(2) so they are as fast as axial movement.
pub fn player_velocity(keys: &MovementKeys, speed: f64) -> Velocity {
    let mut vx = 0.0;
    let mut vy = 0.0;
    if keys.up {
        vy = -speed;
    }
    if keys.down {
        vy = speed;
    }
    if keys.left {
        vx = -speed;
    }
    if keys.right {
        vx = speed;
    }
    if vx != 0.0 && vy != 0.0 {
        vx *= FRAC_1_SQRT_2;
        vy *= FRAC_1_SQRT_2;
    }
    Velocity::new(vx, vy)
}

/// Set the player's velocity from input.
pub fn steer_player(world: &mut World, keys: &MovementKeys) {
    for (_entity, (player, vel)) in world.query_mut::<(&Player, &mut Velocity)>() {
        *vel = player_velocity(keys, player.speed);
    }
}

/// Integrate every moving entity, age bullets, and clamp the player.
pub fn run(world: &mut World, dt: f64, bounds: &PlayBounds) -> Result<(), SimError> {
    for (_entity, (id, pos, vel)) in world.query_mut::<(&EntityId, &mut Position, &Velocity)>() {
        pos.x += vel.x * dt;
        pos.y += vel.y * dt;
        if !pos.is_finite() {
            return Err(SimError::NonFinitePosition { id: *id });
        }
    }

    for (_entity, bullet) in world.query_mut::<&mut Bullet>() {
        bullet.age_secs += dt;
    }

    for (_entity, (_player, pos, hitbox)) in world.query_mut::<(&Player, &mut Position, &Hitbox)>() {
        clamp_to_bounds(pos, hitbox, bounds);
    }

    Ok(())
}

/// Keep a hitbox fully inside the play area.
pub fn clamp_to_bounds(pos: &mut Position, hitbox: &Hitbox, bounds: &PlayBounds) {
    pos.x = pos.x.clamp(0.0, (bounds.width - hitbox.width).max(0.0));
    pos.y = pos.y.clamp(0.0, (bounds.height - hitbox.height).max(0.0));
}
