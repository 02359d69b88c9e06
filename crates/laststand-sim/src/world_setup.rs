//! Entity spawn factories.
//!
//! Creates the player, zombies, bullets and loot crates with their
//! component bundles. Every factory issues a fresh `EntityId`.

use laststand_ai::profiles::get_profile;
use laststand_core::components::*;
use laststand_core::constants::*;
use laststand_core::enums::*;
use laststand_core::types::{Position, Velocity};

use crate::error::SimError;
use crate::session::WorldState;

/// Spawn the player at the centre of the play area with the starting weapon.
pub fn spawn_player(state: &mut WorldState) -> Result<hecs::Entity, SimError> {
    let id = state.allocate_id()?;
    let position = state.bounds.center();
    let entity = state.world.spawn((
        id,
        Player {
            speed: PLAYER_SPEED,
            weapon: Weapon::new(WeaponKind::Pistol),
        },
        position,
        Velocity::zero(),
        Health::full(PLAYER_MAX_HEALTH),
        Hitbox::default(),
    ));
    state.player = Some(entity);
    Ok(entity)
}

/// Spawn a zombie of the given tier at `position`, initially at rest.
pub fn spawn_zombie(
    state: &mut WorldState,
    tier: ZombieTier,
    position: Position,
) -> Result<hecs::Entity, SimError> {
    let id = state.allocate_id()?;
    let profile = get_profile(tier);
    Ok(state.world.spawn((
        id,
        Zombie { tier },
        position,
        Velocity::zero(),
        Health::full(profile.max_health),
        Hitbox::default(),
    )))
}

/// Spawn a bullet at `position` travelling along the unit vector `direction`.
pub fn spawn_bullet(
    state: &mut WorldState,
    weapon: &Weapon,
    position: Position,
    direction: Velocity,
) -> Result<hecs::Entity, SimError> {
    let id = state.allocate_id()?;
    let bullet = Bullet {
        damage: weapon.damage,
        direction,
        speed: weapon.bullet_speed,
        age_secs: 0.0,
        max_lifetime_secs: BULLET_MAX_LIFETIME_SECS,
    };
    let velocity = Velocity::new(direction.x * bullet.speed, direction.y * bullet.speed);
    Ok(state.world.spawn((
        id,
        bullet,
        position,
        velocity,
        Hitbox::square(BULLET_SIZE),
    )))
}

/// Spawn a loot crate at `position`.
pub fn spawn_pickup(
    state: &mut WorldState,
    kind: PickupKind,
    position: Position,
) -> Result<hecs::Entity, SimError> {
    let id = state.allocate_id()?;
    Ok(state.world.spawn((
        id,
        Pickup { kind },
        position,
        Velocity::zero(),
        Hitbox::default(),
    )))
}
