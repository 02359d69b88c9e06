//! Weapon firing.
//!
//! A fire request is honoured only when the held weapon's cooldown has
//! elapsed and there is ammunition left. Otherwise it is a no-op.
//! Cooldowns are counted in whole ticks so the check never depends on
//! floating-point differences of elapsed times.

use tracing::debug;

use laststand_core::components::{Hitbox, Player};
use laststand_core::constants::BULLET_SIZE;
use laststand_core::events::GameEvent;
use laststand_core::types::{Position, Velocity};

use crate::error::SimError;
use crate::session::WorldState;
use crate::world_setup;

/// What happened to a fire request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireResult {
    Fired(hecs::Entity),
    CoolingDown,
    NoAmmunition,
    /// Cursor sits on the player's centre; there is no direction to shoot.
    NoAim,
}

/// Fire the player's weapon toward `cursor` at tick `now_tick`, where one
/// tick lasts `dt` seconds.
pub fn fire(state: &mut WorldState, cursor: Position, now_tick: u64, dt: f64) -> Result<FireResult, SimError> {
    let player = state.player_entity()?;

    let (origin, direction, weapon) = {
        let pos = state.world.get::<&Position>(player)?;
        let hitbox = state.world.get::<&Hitbox>(player)?;
        let player_data = state.world.get::<&Player>(player)?;

        if !player_data.weapon.is_ready(now_tick, dt) {
            return Ok(FireResult::CoolingDown);
        }
        if state.resources.ammunition <= 0 {
            return Ok(FireResult::NoAmmunition);
        }

        let center = hitbox.center(&pos);
        let aim = cursor.to_dvec2() - center.to_dvec2();
        let length = aim.length();
        if length == 0.0 || !length.is_finite() {
            return Ok(FireResult::NoAim);
        }
        let origin = Position::new(center.x - BULLET_SIZE / 2.0, center.y - BULLET_SIZE / 2.0);
        (origin, Velocity::from(aim / length), player_data.weapon.clone())
    };

    let bullet = world_setup::spawn_bullet(state, &weapon, origin, direction)?;

    state.world.get::<&mut Player>(player)?.weapon.last_shot_tick = Some(now_tick);
    state.resources.ammunition -= 1;
    state.score.shots_fired += 1;
    state.events.push(GameEvent::ShotFired { weapon: weapon.kind });
    debug!(weapon = weapon.name(), ammunition = state.resources.ammunition, "shot fired");

    Ok(FireResult::Fired(bullet))
}
