//! Simulation constants and tuning parameters.
//!
//! These values must match exactly for behavior parity between arenas.

use std::f64::consts::PI;

// --- Arena ---

/// Default arena width.
pub const DEFAULT_ARENA_WIDTH: f64 = 600.0;

/// Default arena height.
pub const DEFAULT_ARENA_HEIGHT: f64 = 400.0;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;

// --- Robot ---

/// Collision radius of a robot.
pub const ROBOT_RADIUS: f64 = 24.0;

/// Energy a robot enters the match with.
pub const ROBOT_START_ENERGY: f64 = 100.0;

/// Maximum absolute robot speed (units per tick).
pub const MAX_SPEED: f64 = 8.0;

/// Acceleration while speeding up in the current direction of travel.
pub const ACCELERATION: f64 = 1.0;

/// Deceleration while braking or reversing. Braking is stronger than accelerating.
pub const DECELERATION: f64 = 2.0;

/// Base turn rate at rest: 5 degrees per tick.
pub const BASE_ROT_RAD: f64 = 5.0 * PI / 180.0;

/// Base turn rate lost per unit of speed: 0.75 degrees per tick.
pub const BASE_ROT_DEC_RAD: f64 = 0.75 * PI / 180.0;

/// Turret turn rate relative to the base: 5 degrees per tick.
pub const TURRET_ROT_RAD: f64 = 5.0 * PI / 180.0;

/// Radar turn rate relative to the turret: 5 degrees per tick.
pub const RADAR_ROT_RAD: f64 = 5.0 * PI / 180.0;

/// Extra margin past the robot radius used when containing a robot at a wall.
pub const WALL_MARGIN: f64 = 4.0;

/// Under the contain policy, a robot hits the wall once its center is closer
/// than this to an edge.
pub const WALL_HIT_DISTANCE: f64 = 20.0;

/// Wall damage per unit of speed on impact (before the flat offset).
pub const WALL_DAMAGE_PER_SPEED: f64 = 0.5;

/// Flat amount subtracted from wall damage; slow bumps are free.
pub const WALL_DAMAGE_OFFSET: f64 = 1.0;

// --- Gun ---

/// Distance ahead of the robot center, along the turret, where bullets spawn.
pub const FIRE_OFFSET: f64 = 30.0;

/// Muzzle speed of a zero-power shot.
pub const BULLET_BASE_SPEED: f64 = 20.0;

/// Muzzle speed lost per unit of fire power. Heavier shots travel slower.
pub const BULLET_SPEED_PER_POWER: f64 = 3.0;

/// Heat added by any shot, before the power-dependent part.
pub const FIRE_HEAT_BASE: f64 = 1.0;

/// Fire power divided by this is added to heat.
pub const FIRE_HEAT_POWER_DIVISOR: f64 = 5.0;

/// Heat shed per tick when gun cooling is enabled (the classic rate).
pub const CLASSIC_GUN_COOLING_RATE: f64 = 0.1;

// --- Bullet ---

/// Collision radius of a bullet.
pub const BULLET_RADIUS: f64 = 3.0;

/// Lowest power a live bullet can carry.
pub const BULLET_MIN_POWER: f64 = 0.1;

/// Highest power a live bullet can carry.
pub const BULLET_MAX_POWER: f64 = 3.0;

/// Damage per unit of power.
pub const BULLET_DAMAGE_PER_POWER: f64 = 4.0;

/// Bonus damage per unit of power above 1.
pub const BULLET_BONUS_DAMAGE: f64 = 2.0;

/// Energy returned to the shooter per unit of power on a hit (classic rules).
pub const BULLET_HIT_REWARD_PER_POWER: f64 = 3.0;

// --- Engine ---

/// Events kept between drains. Beyond this the oldest are dropped.
pub const MAX_PENDING_EVENTS: usize = 4096;
