//! 2D vector primitive used for positions, velocities, and arena sizes.
//!
//! Screen-style coordinates: x grows to the right, y grows downward, and
//! angles are measured in radians from the +x axis.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Two-component floating point vector. Pure value type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `rads`: `(cos θ, sin θ)`.
    pub fn from_rads(rads: f64) -> Self {
        let (sin, cos) = rads.sin_cos();
        Self { x: cos, y: sin }
    }

    /// Sample both components uniformly from `[low, high)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> Self {
        Self {
            x: sample(rng, low, high),
            y: sample(rng, low, high),
        }
    }

    /// Sample a point uniformly inside the box spanned by `min` and `max`.
    pub fn random_in<R: Rng + ?Sized>(rng: &mut R, min: Vec2, max: Vec2) -> Self {
        Self {
            x: sample(rng, min.x, max.x),
            y: sample(rng, min.y, max.y),
        }
    }

    /// Element-wise power.
    pub fn pow(self, exponent: f64) -> Self {
        Self {
            x: self.x.powf(exponent),
            y: self.y.powf(exponent),
        }
    }

    /// Sum of the components.
    pub fn sum(self) -> f64 {
        self.x + self.y
    }

    /// Squared Euclidean length. Use for comparisons to skip the square root.
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn length(self) -> f64 {
        self.pow(2.0).sum().sqrt()
    }

    /// Clamp in place to the box spanned by `min` and `max`.
    pub fn clip(&mut self, min: Vec2, max: Vec2) {
        self.x = clip(self.x, min.x, max.x);
        self.y = clip(self.y, min.y, max.y);
    }

    /// Clamp in place to four edges. `top` bounds y from above and `bottom`
    /// from below.
    pub fn clip_edges(&mut self, top: f64, left: f64, bottom: f64, right: f64) {
        self.x = clip(self.x, left, right);
        self.y = clip(self.y, bottom, top);
    }
}

/// Clamp a scalar to `[min, max]`. Unlike `f64::clamp` this never panics
/// when the bounds are inverted; `min` wins.
pub fn clip(value: f64, min: f64, max: f64) -> f64 {
    min.max(max.min(value))
}

/// Normalize an angle into `(-π, π]`.
pub fn wrap_angle(rads: f64) -> f64 {
    use std::f64::consts::{PI, TAU};

    let wrapped = rads - TAU * (rads / TAU).round();
    if wrapped <= -PI {
        wrapped + TAU
    } else if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

fn sample<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    if high > low {
        rng.gen_range(low..high)
    } else {
        low
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, scalar: f64) -> Vec2 {
        Vec2::new(self.x * scalar, self.y * scalar)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, other: Vec2) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, other: Vec2) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
