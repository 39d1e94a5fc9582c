//! Robot advance: drive, the base/turret/radar rotation cascade, and firing.
//!
//! `step` and `fire` are pure state transitions on plain components; `run`
//! applies them to every robot in the world.

use hecs::{Entity, World};
use tracing::debug;

use tankarena_core::components::{Bullet, Chassis, Intent, Robot};
use tankarena_core::constants::*;
use tankarena_core::enums::Move;
use tankarena_core::events::ArenaEvent;
use tankarena_core::types::{BulletId, RobotId};
use tankarena_core::vec2::{clip, wrap_angle, Vec2};

/// Forward acceleration from the current speed and drive intent.
///
/// A decision table, not a smooth function: braking (-2 / +2) is stronger
/// than accelerating (+1 / -1), and a robot at rest always starts with +1.
pub fn acceleration(speed: f64, moving: Move) -> f64 {
    let moving = moving.signum();
    if speed > 0.0 {
        if moving > 0 {
            ACCELERATION
        } else {
            -DECELERATION
        }
    } else if speed < 0.0 {
        if moving < 0 {
            -ACCELERATION
        } else {
            DECELERATION
        }
    } else if moving != 0 {
        ACCELERATION
    } else {
        0.0
    }
}

/// Base turn rate at `speed`: 5°/tick at rest, 0.75°/tick slower per unit
/// of speed, never negative.
pub fn base_turn_rate(speed: f64) -> f64 {
    (BASE_ROT_RAD - BASE_ROT_DEC_RAD * speed.abs()).max(0.0)
}

/// Advance a chassis by one tick.
pub fn step(chassis: &mut Chassis, intent: &Intent) {
    let accel = acceleration(chassis.speed, intent.moving);
    chassis.speed = clip(chassis.speed + accel, -MAX_SPEED, MAX_SPEED);
    chassis.position += Vec2::from_rads(chassis.base_rotation) * chassis.speed;

    // Each stage inherits the angular velocity of the stage it is mounted on.
    let base_velocity = base_turn_rate(chassis.speed) * intent.base_turning.factor();
    chassis.base_rotation = wrap_angle(chassis.base_rotation + base_velocity);

    let turret_velocity = TURRET_ROT_RAD * intent.turret_turning.factor() + base_velocity;
    chassis.turret_rotation = wrap_angle(chassis.turret_rotation + turret_velocity);

    let radar_velocity = RADAR_ROT_RAD * intent.radar_turning.factor() + turret_velocity;
    chassis.radar_rotation = wrap_angle(chassis.radar_rotation + radar_velocity);
}

/// Take the shot requested in `intent` and return the new bullet.
///
/// Heat becomes `1 + power / 5`, energy drops by the requested power, and the
/// fire flag is cleared. Muzzle speed falls as power rises (`20 - 3 * power`).
/// The bullet's power is clamped to `[0.1, 3.0]`; the other terms use the
/// power as requested.
pub fn fire(robot: &mut Robot, chassis: &Chassis, intent: &mut Intent, id: BulletId) -> Bullet {
    let fire_power = intent.fire_power;
    robot.heat = FIRE_HEAT_BASE + fire_power / FIRE_HEAT_POWER_DIVISOR;
    robot.drain(fire_power);
    intent.should_fire = false;

    let turret_direction = Vec2::from_rads(chassis.turret_rotation);
    Bullet {
        id,
        owner: robot.id,
        position: chassis.position + turret_direction * FIRE_OFFSET,
        velocity: turret_direction * (BULLET_BASE_SPEED - BULLET_SPEED_PER_POWER * fire_power),
        power: clip(fire_power, BULLET_MIN_POWER, BULLET_MAX_POWER),
    }
}

/// Advance every robot, then fire for robots that asked to.
///
/// With `gun_cooling` set, heat decays by that much per tick and a robot can
/// only fire once its heat is back to zero. Shots are taken in ascending
/// robot id order so bullet ids are reproducible. New bullets are spawned
/// after the pass and first collide on the next tick.
pub fn run(
    world: &mut World,
    gun_cooling: Option<f64>,
    next_bullet_id: &mut u64,
    events: &mut Vec<ArenaEvent>,
) {
    let mut shooters: Vec<(RobotId, Entity)> = Vec::new();

    for (entity, (robot, chassis, intent)) in
        world.query_mut::<(&mut Robot, &mut Chassis, &Intent)>()
    {
        step(chassis, intent);

        if let Some(rate) = gun_cooling {
            robot.heat = (robot.heat - rate).max(0.0);
        }

        let gun_ready = gun_cooling.is_none() || robot.heat <= 0.0;
        if intent.should_fire && gun_ready {
            shooters.push((robot.id, entity));
        }
    }

    shooters.sort_by_key(|(id, _)| *id);

    let mut fired = Vec::with_capacity(shooters.len());
    for (_, entity) in shooters {
        let Ok((robot, chassis, intent)) =
            world.query_one_mut::<(&mut Robot, &Chassis, &mut Intent)>(entity)
        else {
            continue;
        };

        let id = BulletId(*next_bullet_id);
        *next_bullet_id += 1;

        let bullet = fire(robot, chassis, intent, id);
        debug!(bullet = %bullet.id, owner = %bullet.owner, power = bullet.power, "fired");
        events.push(ArenaEvent::BulletFired {
            bullet: bullet.id,
            owner: bullet.owner,
            power: bullet.power,
        });
        fired.push(bullet);
    }

    for bullet in fired {
        world.spawn((bullet,));
    }
}
