//! ECS systems that operate on the session world each tick.
//!
//! Systems are free functions over `WorldState` (or `&mut World`).
//! They do not own state; everything lives in the session.

pub mod cleanup;
pub mod combat;
pub mod movement;
pub mod pursuit;
pub mod snapshot;
pub mod spawn_director;
pub mod weapons;
