//! Core types and definitions for the TANKARENA simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! vectors, components, intents, events, state snapshots, and constants.
//! It has no dependency on the ECS runtime or any frontend.

pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
pub mod vec2;

pub use error::ArenaError;
pub use vec2::Vec2;
