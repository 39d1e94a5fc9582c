//! Simulation engine for TANKARENA.
//!
//! Owns the hecs ECS world, runs systems in a fixed order once per tick,
//! and produces ArenaSnapshots for controllers and renderers.

pub mod controller;
pub mod engine;
pub mod systems;
pub mod world_setup;

pub use controller::Controller;
pub use engine::{ArenaEngine, SimConfig};
pub use tankarena_core as core;
