//! Collision pass: removes bullets that left the arena and applies bullet
//! hits to robots.
//!
//! Runs against pre-advance positions. Removals go through the despawn
//! buffer and are applied after the scan.

use hecs::{Entity, World};
use tracing::debug;

use tankarena_core::components::{Bullet, Chassis, Robot};
use tankarena_core::constants::*;
use tankarena_core::enums::DamageModel;
use tankarena_core::events::ArenaEvent;
use tankarena_core::types::RobotId;
use tankarena_core::Vec2;

/// True unless the circle lies strictly inside the arena:
/// `!(r < x < w - r && r < y < h - r)`.
pub fn out_of_bounds(center: Vec2, radius: f64, size: Vec2) -> bool {
    let inside_x = radius < center.x && center.x < size.x - radius;
    let inside_y = radius < center.y && center.y < size.y - radius;
    !(inside_x && inside_y)
}

/// Circle-circle overlap on squared distances. Touching counts.
pub fn circles_overlap(c1: Vec2, r1: f64, c2: Vec2, r2: f64) -> bool {
    let reach = r1 + r2;
    (c1 - c2).length_squared() <= reach * reach
}

/// Energy a bullet of `power` removes from the robot it hits.
pub fn bullet_damage(power: f64, model: DamageModel) -> f64 {
    match model {
        // 4 * [power >= 1] * 2 * (power - 1)
        DamageModel::Reference if power >= 1.0 => {
            BULLET_DAMAGE_PER_POWER * BULLET_BONUS_DAMAGE * (power - 1.0)
        }
        DamageModel::Reference => 0.0,
        DamageModel::Classic => {
            let mut damage = BULLET_DAMAGE_PER_POWER * power;
            if power > 1.0 {
                damage += BULLET_BONUS_DAMAGE * (power - 1.0);
            }
            damage
        }
    }
}

/// Flags every bullet that touches at least one other bullet.
pub fn clashing_bullets(positions: &[Vec2]) -> Vec<bool> {
    let mut clashed = vec![false; positions.len()];
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            if circles_overlap(positions[i], BULLET_RADIUS, positions[j], BULLET_RADIUS) {
                clashed[i] = true;
                clashed[j] = true;
            }
        }
    }
    clashed
}

/// Run the collision pass over every live bullet.
///
/// Each bullet is either removed for leaving the arena, removed after
/// striking the first robot it overlaps (ascending id order), or kept.
/// Under classic rules bullets touching each other are removed first, a
/// bullet never strikes its owner, and the owner regains energy on a hit
/// while it still has energy left.
pub fn run(
    world: &mut World,
    size: Vec2,
    damage_model: DamageModel,
    events: &mut Vec<ArenaEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();
    let classic = damage_model == DamageModel::Classic;

    let mut targets: Vec<(RobotId, Entity, Vec2)> = world
        .query::<(&Robot, &Chassis)>()
        .iter()
        .map(|(entity, (robot, chassis))| (robot.id, entity, chassis.position))
        .collect();
    targets.sort_by_key(|(id, _, _)| *id);

    let mut bullets: Vec<(Entity, Bullet)> = world
        .query::<&Bullet>()
        .iter()
        .map(|(entity, bullet)| (entity, *bullet))
        .collect();
    bullets.sort_by_key(|(_, bullet)| bullet.id);

    let clashed = if classic {
        let positions: Vec<Vec2> = bullets.iter().map(|(_, b)| b.position).collect();
        clashing_bullets(&positions)
    } else {
        vec![false; bullets.len()]
    };

    for ((entity, bullet), clashed) in bullets.iter().zip(clashed) {
        if out_of_bounds(bullet.position, BULLET_RADIUS, size) {
            despawn_buffer.push(*entity);
            events.push(ArenaEvent::BulletExpired {
                bullet: bullet.id,
                owner: bullet.owner,
            });
            continue;
        }

        if clashed {
            debug!(bullet = %bullet.id, owner = %bullet.owner, "bullet intercepted");
            despawn_buffer.push(*entity);
            events.push(ArenaEvent::BulletIntercepted {
                bullet: bullet.id,
                owner: bullet.owner,
            });
            continue;
        }

        let struck = targets.iter().find(|(id, _, position)| {
            !(classic && *id == bullet.owner)
                && circles_overlap(bullet.position, BULLET_RADIUS, *position, ROBOT_RADIUS)
        });

        if let Some(&(victim, victim_entity, _)) = struck {
            let damage = bullet_damage(bullet.power, damage_model);
            if let Ok(mut robot) = world.get::<&mut Robot>(victim_entity) {
                robot.drain(damage);
            }
            if classic {
                reward_owner(world, &targets, bullet);
            }
            debug!(bullet = %bullet.id, owner = %bullet.owner, %victim, damage, "bullet hit");
            despawn_buffer.push(*entity);
            events.push(ArenaEvent::BulletHit {
                bullet: bullet.id,
                owner: bullet.owner,
                victim,
                damage,
            });
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Credit the shooter for a hit. Owners that were removed or have no
/// energy left get nothing.
fn reward_owner(world: &World, targets: &[(RobotId, Entity, Vec2)], bullet: &Bullet) {
    let Some(&(_, owner_entity, _)) = targets.iter().find(|(id, _, _)| *id == bullet.owner) else {
        return;
    };
    if let Ok(mut owner) = world.get::<&mut Robot>(owner_entity) {
        if owner.is_alive() {
            owner.energy += BULLET_HIT_REWARD_PER_POWER * bullet.power;
        }
    }
}
