//! ECS systems that operate on the arena world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! They do not own state; everything lives in components or the engine.

pub mod bounds;
pub mod collision;
pub mod kinematics;
pub mod projectiles;
pub mod snapshot;
