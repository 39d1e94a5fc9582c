//! Snapshot system: queries the ECS world and builds an ArenaSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use tankarena_core::components::{Bullet, Chassis, Robot};
use tankarena_core::events::ArenaEvent;
use tankarena_core::state::{ArenaSnapshot, BulletView, RobotView};
use tankarena_core::types::SimTime;
use tankarena_core::Vec2;

/// Build a complete snapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    size: Vec2,
    events: Vec<ArenaEvent>,
) -> ArenaSnapshot {
    ArenaSnapshot {
        time: *time,
        size,
        robots: build_robots(world),
        bullets: build_bullets(world),
        events,
    }
}

/// All robots, sorted by id.
pub fn build_robots(world: &World) -> Vec<RobotView> {
    let mut robots: Vec<RobotView> = world
        .query::<(&Robot, &Chassis)>()
        .iter()
        .map(|(_, (robot, chassis))| RobotView::new(robot, chassis))
        .collect();
    robots.sort_by_key(|r| r.id);
    robots
}

/// All live bullets, sorted by id.
pub fn build_bullets(world: &World) -> Vec<BulletView> {
    let mut bullets: Vec<BulletView> = world
        .query::<&Bullet>()
        .iter()
        .map(|(_, bullet)| BulletView::from(bullet))
        .collect();
    bullets.sort_by_key(|b| b.id);
    bullets
}
