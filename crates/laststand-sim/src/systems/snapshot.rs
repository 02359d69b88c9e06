//! Snapshot system: queries the world and builds a complete WorldSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use laststand_core::components::*;
use laststand_core::enums::{EntityKind, GameMode};
use laststand_core::events::GameEvent;
use laststand_core::state::{EntityView, WorldSnapshot};
use laststand_core::types::Position;

use crate::session::WorldState;

/// Build a complete WorldSnapshot from the current session state.
pub fn build_snapshot(state: &WorldState, events: Vec<GameEvent>) -> WorldSnapshot {
    WorldSnapshot {
        tick: state.time.tick,
        mode: state.mode,
        day: state.clock.day,
        minute: state.clock.minute,
        clock_label: state.clock.label(),
        is_night: state.clock.is_night(),
        resources: state.resources,
        error_message: if state.mode == GameMode::Crashed {
            state.error_message.clone()
        } else {
            String::new()
        },
        wave: state.wave,
        score: state.score,
        entities: build_entities(&state.world),
        events,
    }
}

/// Build the entity list, sorted by id.
fn build_entities(world: &World) -> Vec<EntityView> {
    let mut views: Vec<EntityView> = world
        .query::<(&EntityId, &Position, &Hitbox)>()
        .iter()
        .filter_map(|(entity, (id, pos, hitbox))| {
            let entity_ref = world.entity(entity).ok()?;
            let health = entity_ref.get::<&Health>().map(|h| h.current);

            let (kind, tier, weapon, pickup) = if let Some(player) = entity_ref.get::<&Player>() {
                (EntityKind::Player, None, Some(player.weapon.kind), None)
            } else if let Some(zombie) = entity_ref.get::<&Zombie>() {
                (EntityKind::Zombie, Some(zombie.tier), None, None)
            } else if entity_ref.has::<Bullet>() {
                (EntityKind::Bullet, None, None, None)
            } else if let Some(crate_) = entity_ref.get::<&Pickup>() {
                (EntityKind::Pickup, None, None, Some(crate_.kind))
            } else {
                return None;
            };

            Some(EntityView {
                id: *id,
                kind,
                position: *pos,
                width: hitbox.width,
                height: hitbox.height,
                health,
                tier,
                weapon,
                pickup,
            })
        })
        .collect();

    views.sort_by_key(|v| v.id);
    views
}
