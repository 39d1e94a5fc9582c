//! Bot behaviors.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tankarena_core::components::Intent;
use tankarena_core::enums::{Move, Turn};
use tankarena_core::events::ArenaEvent;
use tankarena_core::state::RobotView;
use tankarena_core::types::RobotId;
use tankarena_sim::Controller;

/// Does nothing. Useful as a target.
pub struct Idle;

impl Controller for Idle {
    fn name(&self) -> &str {
        "idle"
    }

    fn control(&mut self, _view: &RobotView, intent: &mut Intent) {
        intent.clear();
    }
}

// --- Spinner ---

/// Ticks between spinner shots.
pub const SPINNER_FIRE_INTERVAL: u64 = 20;

/// Turns on the spot and fires full power shots at a fixed interval.
#[derive(Default)]
pub struct Spinner {
    ticks: u64,
}

impl Controller for Spinner {
    fn name(&self) -> &str {
        "spinner"
    }

    fn control(&mut self, _view: &RobotView, intent: &mut Intent) {
        intent.moving = Move::Stop;
        intent.base_turning = Turn::Left;
        if self.ticks % SPINNER_FIRE_INTERVAL == 0 {
            intent.should_fire = true;
            intent.fire_power = 3.0;
        }
        self.ticks += 1;
    }
}

// --- Rambler ---

/// Wanders in random legs: drive forward for a random number of ticks while
/// turning left for another random number, then roll again. Each leg fires a
/// random-power shot half the time.
pub struct Rambler {
    rng: ChaCha8Rng,
    drive_left: u32,
    turn_left: u32,
}

impl Rambler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            drive_left: 0,
            turn_left: 0,
        }
    }

    fn plan_leg(&mut self, intent: &mut Intent) {
        self.drive_left = self.rng.gen_range(0..=20);
        self.turn_left = self.rng.gen_range(0..=10);
        if self.rng.gen_bool(0.5) {
            intent.should_fire = true;
            intent.fire_power = f64::from(self.rng.gen_range(1..=3u8));
        }
    }
}

impl Controller for Rambler {
    fn name(&self) -> &str {
        "rambler"
    }

    fn control(&mut self, _view: &RobotView, intent: &mut Intent) {
        if self.drive_left == 0 && self.turn_left == 0 {
            self.plan_leg(intent);
        }

        intent.moving = if self.drive_left > 0 {
            self.drive_left -= 1;
            Move::Forward
        } else {
            Move::Stop
        };
        intent.base_turning = if self.turn_left > 0 {
            self.turn_left -= 1;
            Turn::Left
        } else {
            Turn::None
        };
    }
}

// --- Charger ---

/// Ticks between charger shots.
pub const CHARGER_FIRE_INTERVAL: u64 = 10;

/// Drives forward in a wide circle, firing light shots.
#[derive(Default)]
pub struct Charger {
    ticks: u64,
}

impl Controller for Charger {
    fn name(&self) -> &str {
        "charger"
    }

    fn control(&mut self, _view: &RobotView, intent: &mut Intent) {
        intent.moving = Move::Forward;
        intent.base_turning = Turn::Left;
        if self.ticks % CHARGER_FIRE_INTERVAL == 0 {
            intent.should_fire = true;
            intent.fire_power = 1.0;
        }
        self.ticks += 1;
    }
}

// --- Sentry ---

/// Ticks between sentry shots.
pub const SENTRY_FIRE_INTERVAL: u64 = 8;

/// Ticks the sentry spends on one sweep direction.
pub const SENTRY_SWEEP_TICKS: u64 = 36;

/// Ticks the sentry drives away after being hit.
pub const SENTRY_EVADE_TICKS: u32 = 12;

/// Holds position sweeping its turret back and forth and firing medium
/// shots. Backs off for a moment whenever it is hit.
#[derive(Default)]
pub struct Sentry {
    id: Option<RobotId>,
    ticks: u64,
    evading: u32,
}

impl Sentry {
    pub fn is_evading(&self) -> bool {
        self.evading > 0
    }
}

impl Controller for Sentry {
    fn name(&self) -> &str {
        "sentry"
    }

    fn on_event(&mut self, event: &ArenaEvent) {
        if let ArenaEvent::BulletHit { victim, .. } = event {
            if Some(*victim) == self.id {
                self.evading = SENTRY_EVADE_TICKS;
            }
        }
    }

    fn control(&mut self, view: &RobotView, intent: &mut Intent) {
        self.id = Some(view.id);

        if self.evading > 0 {
            self.evading -= 1;
            intent.moving = Move::Back;
        } else {
            intent.moving = Move::Stop;
        }

        intent.turret_turning = if (self.ticks / SENTRY_SWEEP_TICKS) % 2 == 0 {
            Turn::Left
        } else {
            Turn::Right
        };
        intent.radar_turning = Turn::None;

        if self.ticks % SENTRY_FIRE_INTERVAL == 0 {
            intent.should_fire = true;
            intent.fire_power = 2.0;
        }
        self.ticks += 1;
    }
}
