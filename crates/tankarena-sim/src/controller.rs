//! Controller capability: per-robot behavior invoked before each step.
//!
//! A controller sees a read-only view of its own robot and may write only
//! that robot's intents. It never touches the world directly.

use tankarena_core::components::Intent;
use tankarena_core::events::ArenaEvent;
use tankarena_core::state::RobotView;

/// Drives one robot.
pub trait Controller: Send {
    /// Display name, used as the robot's name when attached at spawn.
    fn name(&self) -> &str;

    /// Called once per event concerning this robot, before `control`, with
    /// the events of the previous tick.
    fn on_event(&mut self, _event: &ArenaEvent) {}

    /// Write this tick's intents.
    fn control(&mut self, view: &RobotView, intent: &mut Intent);
}
