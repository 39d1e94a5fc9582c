//! Entity spawn factories for populating the arena world.

use std::f64::consts::PI;

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use tankarena_core::components::{Bullet, Chassis, Intent, Robot};
use tankarena_core::constants::*;
use tankarena_core::types::{BulletId, RobotId};
use tankarena_core::vec2::{clip, wrap_angle};
use tankarena_core::Vec2;

/// Spawn a robot with full energy and idle intents.
pub fn spawn_robot(world: &mut World, id: RobotId, name: &str, chassis: Chassis) -> Entity {
    world.spawn((Robot::new(id, name), chassis, Intent::default()))
}

/// A random starting chassis inside the arena, clear of the walls, with the
/// turret and radar aligned to a random base heading.
pub fn random_chassis(rng: &mut ChaCha8Rng, size: Vec2) -> Chassis {
    let inset = ROBOT_RADIUS + WALL_MARGIN;
    let position = Vec2::random_in(
        rng,
        Vec2::new(inset, inset),
        Vec2::new(size.x - inset, size.y - inset),
    );
    let heading = wrap_angle(rng.gen_range(-PI..PI));
    Chassis::at(position, heading)
}

/// Spawn a bullet, clamping its power into the live range.
pub fn spawn_bullet(
    world: &mut World,
    id: BulletId,
    owner: RobotId,
    position: Vec2,
    velocity: Vec2,
    power: f64,
) -> Entity {
    world.spawn((Bullet {
        id,
        owner,
        position,
        velocity,
        power: clip(power, BULLET_MIN_POWER, BULLET_MAX_POWER),
    },))
}
