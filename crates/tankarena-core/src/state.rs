//! Arena snapshot: the read-only state exported after each tick.

use serde::{Deserialize, Serialize};

use crate::components::{Bullet, Chassis, Robot};
use crate::events::ArenaEvent;
use crate::types::{BulletId, RobotId, SimTime};
use crate::vec2::Vec2;

/// Complete arena state after a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArenaSnapshot {
    pub time: SimTime,
    pub size: Vec2,
    /// Sorted by id.
    pub robots: Vec<RobotView>,
    /// Sorted by id.
    pub bullets: Vec<BulletView>,
    pub events: Vec<ArenaEvent>,
}

/// Read-only view of one robot. Also what controllers see.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotView {
    pub id: RobotId,
    pub name: String,
    pub position: Vec2,
    pub speed: f64,
    pub base_rotation: f64,
    pub turret_rotation: f64,
    pub radar_rotation: f64,
    pub energy: f64,
    pub heat: f64,
}

/// Read-only view of one bullet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulletView {
    pub id: BulletId,
    pub owner: RobotId,
    pub position: Vec2,
    pub velocity: Vec2,
    pub power: f64,
}

impl RobotView {
    pub fn new(robot: &Robot, chassis: &Chassis) -> Self {
        Self {
            id: robot.id,
            name: robot.name.clone(),
            position: chassis.position,
            speed: chassis.speed,
            base_rotation: chassis.base_rotation,
            turret_rotation: chassis.turret_rotation,
            radar_rotation: chassis.radar_rotation,
            energy: robot.energy,
            heat: robot.heat,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.energy > 0.0
    }
}

impl From<&Bullet> for BulletView {
    fn from(bullet: &Bullet) -> Self {
        Self {
            id: bullet.id,
            owner: bullet.owner,
            position: bullet.position,
            velocity: bullet.velocity,
            power: bullet.power,
        }
    }
}

impl ArenaSnapshot {
    /// Robots with energy left.
    pub fn alive_robots(&self) -> impl Iterator<Item = &RobotView> {
        self.robots.iter().filter(|r| r.is_alive())
    }
}
