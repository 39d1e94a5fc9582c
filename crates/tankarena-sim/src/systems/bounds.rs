//! Arena boundary check for robots, run after the robot advance.

use hecs::World;
use tracing::warn;

use tankarena_core::components::{Chassis, Robot};
use tankarena_core::constants::*;
use tankarena_core::enums::WallPolicy;
use tankarena_core::events::ArenaEvent;
use tankarena_core::Vec2;

use crate::systems::collision::out_of_bounds;

/// Wall damage for a robot hitting the edge at `speed`.
pub fn wall_damage(speed: f64) -> f64 {
    (speed.abs() * WALL_DAMAGE_PER_SPEED - WALL_DAMAGE_OFFSET).max(0.0)
}

/// True when a robot's center is within the wall-hit distance of an edge.
/// Touching the limit still counts as inside.
pub fn hits_wall(center: Vec2, size: Vec2) -> bool {
    let inside_x = WALL_HIT_DISTANCE <= center.x && center.x <= size.x - WALL_HIT_DISTANCE;
    let inside_y = WALL_HIT_DISTANCE <= center.y && center.y <= size.y - WALL_HIT_DISTANCE;
    !(inside_x && inside_y)
}

/// Check every robot's body against the arena edges.
///
/// A body crossing the edge is always reported. Under the contain policy a
/// robot that [`hits_wall`] is also clamped back inside, stopped, and damaged.
pub fn run(world: &mut World, size: Vec2, policy: WallPolicy, events: &mut Vec<ArenaEvent>) {
    for (_entity, (robot, chassis)) in world.query_mut::<(&mut Robot, &mut Chassis)>() {
        if !out_of_bounds(chassis.position, ROBOT_RADIUS, size) {
            continue;
        }

        warn!(robot = %robot.id, position = %chassis.position, "robot out of bounds");
        events.push(ArenaEvent::RobotOutOfBounds {
            robot: robot.id,
            position: chassis.position,
        });

        if policy == WallPolicy::Contain && hits_wall(chassis.position, size) {
            let inset = ROBOT_RADIUS + WALL_MARGIN;
            let damage = wall_damage(chassis.speed);
            chassis
                .position
                .clip(Vec2::new(inset, inset), Vec2::new(size.x - inset, size.y - inset));
            chassis.speed = 0.0;
            robot.drain(damage);
            events.push(ArenaEvent::RobotHitWall {
                robot: robot.id,
                damage,
            });
        }
    }
}
