//! Zombie AI for LAST STAND.
//!
//! Pure pursuit steering and tier-driven behaviour profiles. No ECS
//! dependency: everything here operates on plain data.

pub mod profiles;
pub mod pursuit;

pub use laststand_core as core;

#[cfg(test)]
mod tests;
