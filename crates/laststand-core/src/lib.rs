//! Core types and definitions for the LAST STAND simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, input commands, state snapshots, events, and constants.
//! It has no dependency on any windowing, audio, or input framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
