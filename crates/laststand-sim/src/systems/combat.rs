//! Combat resolution: contact damage, bullet hits, removals and pickups.
//!
//! Steps run in a fixed order every tick so that outcomes never depend on
//! entity id or storage order:
//!
//! 1. zombie contact drains player health (additive per overlapping zombie)
//! 2. each bullet damages the first zombie it overlaps and is spent
//! 3. zombies at or below zero health are marked for removal
//! 4. bullets outside the play area or past their lifetime are marked
//! 5. pickups touching the player are consumed
//!
//! Marked entities are despawned later by the cleanup system. The caller
//! turns `CombatReport::player_dead` into the GameOver transition.

use hecs::Entity;
use tracing::info;

use laststand_core::components::*;
use laststand_core::constants::ZOMBIE_CONTACT_DPS;
use laststand_core::events::GameEvent;
use laststand_core::types::{PlayBounds, Position};

use crate::error::SimError;
use crate::session::WorldState;

/// Summary of one combat pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CombatReport {
    /// Zombies overlapping the player this tick.
    pub contacts: u32,
    pub zombies_killed: u32,
    pub pickups_collected: u32,
    /// Player health is at or below zero.
    pub player_dead: bool,
}

/// Run all combat steps for one tick of `dt` seconds.
pub fn run(state: &mut WorldState, dt: f64, despawn_buffer: &mut Vec<Entity>) -> Result<CombatReport, SimError> {
    let player = state.player_entity()?;
    let player_pos = *state.world.get::<&Position>(player)?;
    let player_box = *state.world.get::<&Hitbox>(player)?;

    let mut report = CombatReport::default();

    // 1. Player-zombie contact.
    report.contacts = count_contacts(&state.world, &player_pos, &player_box);
    let player_health = {
        let mut health = state.world.get::<&mut Health>(player)?;
        health.current -= ZOMBIE_CONTACT_DPS * dt * f64::from(report.contacts);
        health.current
    };

    // 2. Bullet-zombie hits.
    resolve_bullet_hits(&mut state.world, despawn_buffer);

    // 3. Dead zombies.
    for (entity, (id, zombie, health)) in state.world.query_mut::<(&EntityId, &Zombie, &Health)>() {
        if health.is_depleted() {
            despawn_buffer.push(entity);
            report.zombies_killed += 1;
            state.events.push(GameEvent::ZombieKilled { id: *id, tier: zombie.tier });
        }
    }
    state.score.zombies_killed += report.zombies_killed;

    // 4. Stray and expired bullets.
    mark_stray_bullets(&mut state.world, &state.bounds, despawn_buffer);

    // 5. Pickups.
    report.pickups_collected = collect_pickups(state, player, &player_pos, &player_box, despawn_buffer)?;

    if player_health <= 0.0 {
        report.player_dead = true;
        state.events.push(GameEvent::PlayerDowned);
    }

    Ok(report)
}

/// Number of zombies whose hitbox overlaps the player's.
pub fn count_contacts(world: &hecs::World, player_pos: &Position, player_box: &Hitbox) -> u32 {
    let mut query = world.query::<(&Zombie, &Position, &Hitbox)>();
    query
        .iter()
        .filter(|(_, (_, pos, hitbox))| overlaps(player_pos, player_box, pos, hitbox))
        .count() as u32
}

/// Each bullet damages the first overlapping zombie found, then is spent.
fn resolve_bullet_hits(world: &mut hecs::World, despawn_buffer: &mut Vec<Entity>) {
    let zombies: Vec<(Entity, Position, Hitbox)> = world
        .query::<(&Zombie, &Position, &Hitbox)>()
        .iter()
        .map(|(entity, (_, pos, hitbox))| (entity, *pos, *hitbox))
        .collect();

    let mut hits: Vec<(Entity, Entity, f64)> = Vec::new();
    for (bullet_entity, (bullet, pos, hitbox)) in world.query::<(&Bullet, &Position, &Hitbox)>().iter() {
        let target = zombies
            .iter()
            .find(|(_, z_pos, z_box)| overlaps(pos, hitbox, z_pos, z_box));
        if let Some((zombie_entity, _, _)) = target {
            hits.push((bullet_entity, *zombie_entity, bullet.damage));
        }
    }

    for (bullet_entity, zombie_entity, damage) in hits {
        if let Ok(mut health) = world.get::<&mut Health>(zombie_entity) {
            health.current -= damage;
        }
        despawn_buffer.push(bullet_entity);
    }
}

/// Mark bullets whose position left the play area or that outlived their lifetime.
fn mark_stray_bullets(world: &mut hecs::World, bounds: &PlayBounds, despawn_buffer: &mut Vec<Entity>) {
    for (entity, (bullet, pos)) in world.query_mut::<(&Bullet, &Position)>() {
        if !bounds.contains(pos) || bullet.age_secs > bullet.max_lifetime_secs {
            despawn_buffer.push(entity);
        }
    }
}

/// Consume every pickup the player touches and apply its effect.
fn collect_pickups(
    state: &mut WorldState,
    player: Entity,
    player_pos: &Position,
    player_box: &Hitbox,
    despawn_buffer: &mut Vec<Entity>,
) -> Result<u32, SimError> {
    let touched: Vec<(Entity, PickupKind)> = state
        .world
        .query::<(&Pickup, &Position, &Hitbox)>()
        .iter()
        .filter(|(_, (_, pos, hitbox))| overlaps(player_pos, player_box, pos, hitbox))
        .map(|(entity, (pickup, _, _))| (entity, pickup.kind))
        .collect();

    for &(entity, kind) in &touched {
        match kind {
            PickupKind::Weapon(weapon) => {
                state.world.get::<&mut Player>(player)?.weapon = Weapon::new(weapon);
            }
            PickupKind::Ammunition(amount) => {
                state.resources.ammunition += amount;
            }
        }
        info!(?kind, "pickup collected");
        despawn_buffer.push(entity);
        state.events.push(GameEvent::PickupCollected { kind });
    }

    let collected = touched.len() as u32;
    state.score.pickups_collected += collected;
    Ok(collected)
}
