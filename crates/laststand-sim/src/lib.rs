//! Simulation engine for Last Stand.
//!
//! Owns the session world (a hecs ECS world plus clock and resources), runs
//! systems at a fixed tick rate behind a crash guard, and produces
//! WorldSnapshots for the host.

pub mod crash_guard;
pub mod engine;
pub mod error;
pub mod session;
pub mod state_machine;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use error::SimError;
pub use laststand_core as core;

#[cfg(test)]
mod tests;
