//! ECS components for hecs entities.
//!
//! Components are plain data structs. Intent has a few validated setters
//! for callers writing from outside the engine; all game logic lives in
//! the simulation systems.

use serde::{Deserialize, Serialize};

use crate::constants::ROBOT_START_ENERGY;
use crate::enums::{Move, Turn};
use crate::error::ArenaError;
use crate::types::{BulletId, RobotId};
use crate::vec2::Vec2;

/// Robot identity and combat state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Robot {
    pub id: RobotId,
    pub name: String,
    /// Never negative. A robot at 0 is disabled but stays in the arena
    /// until something outside the core removes it.
    pub energy: f64,
    /// Set on firing to `1 + fire_power / 5`.
    pub heat: f64,
}

/// Robot physical state: position, speed, and the three stacked rotations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Chassis {
    pub position: Vec2,
    /// Signed speed along the base heading, within `[-8, 8]`.
    pub speed: f64,
    /// Base heading in radians, within `(-π, π]`.
    pub base_rotation: f64,
    /// Turret heading in radians (absolute, not relative to the base).
    pub turret_rotation: f64,
    /// Radar heading in radians (absolute).
    pub radar_rotation: f64,
}

/// Control intents written by the controller before each step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    pub moving: Move,
    pub base_turning: Turn,
    pub turret_turning: Turn,
    pub radar_turning: Turn,
    /// Cleared by the engine when the shot is taken.
    pub should_fire: bool,
    /// Clamped only when the bullet is created.
    pub fire_power: f64,
}

/// A projectile in flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub id: BulletId,
    /// Attribution only. The owner may have been removed since firing.
    pub owner: RobotId,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Within `[0.1, 3.0]`.
    pub power: f64,
}

impl Robot {
    /// A fresh robot with full energy and a cold gun.
    pub fn new(id: RobotId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            energy: ROBOT_START_ENERGY,
            heat: 0.0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.energy > 0.0
    }

    /// Deduct energy, never going below zero.
    pub fn drain(&mut self, amount: f64) {
        self.energy = (self.energy - amount).max(0.0);
    }
}

impl Chassis {
    /// A stationary chassis with turret and radar aligned to the base.
    pub fn at(position: Vec2, heading: f64) -> Self {
        Self {
            position,
            speed: 0.0,
            base_rotation: heading,
            turret_rotation: heading,
            radar_rotation: heading,
        }
    }
}

impl Intent {
    /// Request a shot this tick. Rejects NaN, infinite, and negative power.
    pub fn fire(&mut self, power: f64) -> Result<(), ArenaError> {
        if !power.is_finite() || power < 0.0 {
            return Err(ArenaError::InvalidFirePower(power));
        }
        self.should_fire = true;
        self.fire_power = power;
        Ok(())
    }

    /// Set the drive intent from a raw -1/0/1 value.
    pub fn set_moving(&mut self, value: i8) -> Result<(), ArenaError> {
        self.moving = Move::try_from(value)?;
        Ok(())
    }

    /// Set base, turret, and radar turn intents from raw -1/0/1 values.
    pub fn set_turning(&mut self, base: i8, turret: i8, radar: i8) -> Result<(), ArenaError> {
        let base = Turn::try_from(base)?;
        let turret = Turn::try_from(turret)?;
        let radar = Turn::try_from(radar)?;
        self.base_turning = base;
        self.turret_turning = turret;
        self.radar_turning = radar;
        Ok(())
    }

    /// Drop every intent back to idle.
    pub fn clear(&mut self) {
        *self = Intent::default();
    }
}
