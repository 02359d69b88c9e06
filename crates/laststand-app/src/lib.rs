//! LAST STAND host application.
//!
//! Wires the simulation engine to an input source and a renderer and runs
//! the fixed-rate game loop.

pub mod config;
pub mod game_loop;
pub mod input;
pub mod render;

pub use laststand_core as core;
