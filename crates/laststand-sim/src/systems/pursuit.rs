//! Pursuit AI system: steers every zombie toward the player.
//!
//! Calls the pursuit rule from laststand-ai and writes the result into
//! each zombie's Velocity.

use laststand_ai::profiles::get_profile;
use laststand_ai::pursuit::{evaluate, PursuitContext};
use laststand_core::components::{EntityId, Zombie};
use laststand_core::types::{Position, Velocity};

use crate::error::SimError;
use crate::session::WorldState;

/// Run the pursuit system. Any AI fault aborts the tick.
pub fn run(state: &mut WorldState) -> Result<(), SimError> {
    let player = state.player_entity()?;
    let target = *state.world.get::<&Position>(player)?;

    for (_entity, (id, zombie, pos, vel)) in state
        .world
        .query_mut::<(&EntityId, &Zombie, &Position, &mut Velocity)>()
    {
        let ctx = PursuitContext {
            position: *pos,
            target,
            speed: get_profile(zombie.tier).speed,
        };
        *vel = evaluate(&ctx).map_err(|source| SimError::Pursuit { id: *id, source })?;
    }

    Ok(())
}
