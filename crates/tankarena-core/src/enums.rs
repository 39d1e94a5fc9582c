//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::error::ArenaError;

/// Drive intent: reverse, stop, or forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Back,
    #[default]
    Stop,
    Forward,
}

/// Turn intent for the base, turret, or radar. Left is the positive angular
/// direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    Right,
    #[default]
    None,
    Left,
}

/// How bullet hits are resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageModel {
    /// `4 * [power >= 1] * 2 * (power - 1)`. Shots below power 1 deal nothing.
    #[default]
    Reference,
    /// Classic rules. Damage is `4 * power`, plus `2 * (power - 1)` above 1.
    /// A robot is never hit by its own bullets, the shooter regains
    /// `3 * power` energy per hit, and bullets that touch each other are
    /// both destroyed.
    Classic,
}

/// What the engine does with a robot whose body crosses the arena edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallPolicy {
    /// Report only. Position and speed are left untouched.
    #[default]
    Observe,
    /// Push the robot back inside, stop it, and apply wall damage.
    Contain,
}

impl Move {
    /// Signed value: -1, 0, or 1.
    pub fn signum(self) -> i8 {
        match self {
            Move::Back => -1,
            Move::Stop => 0,
            Move::Forward => 1,
        }
    }
}

impl Turn {
    /// Signed value: -1, 0, or 1.
    pub fn signum(self) -> i8 {
        match self {
            Turn::Right => -1,
            Turn::None => 0,
            Turn::Left => 1,
        }
    }

    /// Signed value as a float multiplier for turn rates.
    pub fn factor(self) -> f64 {
        f64::from(self.signum())
    }
}

impl TryFrom<i8> for Move {
    type Error = ArenaError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Move::Back),
            0 => Ok(Move::Stop),
            1 => Ok(Move::Forward),
            other => Err(ArenaError::InvalidIntent {
                field: "moving",
                value: other,
            }),
        }
    }
}

impl TryFrom<i8> for Turn {
    type Error = ArenaError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Turn::Right),
            0 => Ok(Turn::None),
            1 => Ok(Turn::Left),
            other => Err(ArenaError::InvalidIntent {
                field: "turning",
                value: other,
            }),
        }
    }
}
