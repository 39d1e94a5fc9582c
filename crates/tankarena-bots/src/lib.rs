//! Stock robot controllers for TANKARENA.
//!
//! Each bot is a small state machine over its own tick counter and the
//! read-only view of its robot. Bots write intents and nothing else.

pub mod bots;

pub use tankarena_sim::core;

use tankarena_sim::Controller;

use crate::bots::{Charger, Idle, Rambler, Sentry, Spinner};

/// Names accepted by [`by_name`].
pub const STOCK_BOTS: &[&str] = &["idle", "spinner", "rambler", "charger", "sentry"];

/// Build a stock bot by name. `seed` feeds bots that roll dice.
pub fn by_name(name: &str, seed: u64) -> Option<Box<dyn Controller>> {
    let bot: Box<dyn Controller> = match name {
        "idle" => Box::new(Idle),
        "spinner" => Box::new(Spinner::default()),
        "rambler" => Box::new(Rambler::new(seed)),
        "charger" => Box::new(Charger::default()),
        "sentry" => Box::new(Sentry::default()),
        _ => return None,
    };
    Some(bot)
}

#[cfg(test)]
mod tests;
