#[cfg(test)]
mod tests {
    use tankarena_core::components::Intent;
    use tankarena_core::enums::{Move, Turn};
    use tankarena_core::events::ArenaEvent;
    use tankarena_core::state::RobotView;
    use tankarena_core::types::{BulletId, RobotId};
    use tankarena_core::Vec2;
    use tankarena_sim::{ArenaEngine, Controller, SimConfig};

    use crate::bots::*;
    use crate::{by_name, STOCK_BOTS};

    fn view(id: u32) -> RobotView {
        RobotView {
            id: RobotId(id),
            name: "bot".into(),
            position: Vec2::new(100.0, 100.0),
            speed: 0.0,
            base_rotation: 0.0,
            turret_rotation: 0.0,
            radar_rotation: 0.0,
            energy: 100.0,
            heat: 0.0,
        }
    }

    #[test]
    fn test_registry_builds_every_stock_bot() {
        for name in STOCK_BOTS {
            let bot = by_name(name, 1).unwrap();
            assert_eq!(bot.name(), *name);
        }
        assert!(by_name("nonsense", 1).is_none());
    }

    #[test]
    fn test_idle_clears_intents() {
        let mut intent = Intent {
            moving: Move::Forward,
            should_fire: true,
            ..Default::default()
        };
        Idle.control(&view(1), &mut intent);
        assert_eq!(intent, Intent::default());
    }

    #[test]
    fn test_spinner_turns_and_fires_on_interval() {
        let mut bot = Spinner::default();
        let mut shots = 0;
        for _ in 0..SPINNER_FIRE_INTERVAL * 3 {
            let mut intent = Intent::default();
            bot.control(&view(1), &mut intent);
            assert_eq!(intent.base_turning, Turn::Left);
            assert_eq!(intent.moving, Move::Stop);
            if intent.should_fire {
                assert_eq!(intent.fire_power, 3.0);
                shots += 1;
            }
        }
        assert_eq!(shots, 3);
    }

    #[test]
    fn test_charger_drives_forward() {
        let mut bot = Charger::default();
        let mut intent = Intent::default();
        bot.control(&view(1), &mut intent);
        assert_eq!(intent.moving, Move::Forward);
        assert_eq!(intent.base_turning, Turn::Left);
        assert!(intent.should_fire);
        assert_eq!(intent.fire_power, 1.0);
    }

    #[test]
    fn test_rambler_is_seeded() {
        let record = |seed: u64| {
            let mut bot = Rambler::new(seed);
            (0..200)
                .map(|_| {
                    let mut intent = Intent::default();
                    bot.control(&view(1), &mut intent);
                    intent
                })
                .collect::<Vec<_>>()
        };
        let a = record(5);
        assert_eq!(a, record(5));
        assert!(a.iter().any(|i| i.moving == Move::Forward));
        for intent in a.iter().filter(|i| i.should_fire) {
            assert!((1.0..=3.0).contains(&intent.fire_power));
        }
    }

    #[test]
    fn test_sentry_evades_when_hit() {
        let mut bot = Sentry::default();
        let mut intent = Intent::default();
        bot.control(&view(4), &mut intent);
        assert_eq!(intent.moving, Move::Stop);

        // Hits on other robots are ignored.
        bot.on_event(&ArenaEvent::BulletHit {
            bullet: BulletId(1),
            owner: RobotId(2),
            victim: RobotId(3),
            damage: 8.0,
        });
        assert!(!bot.is_evading());

        bot.on_event(&ArenaEvent::BulletHit {
            bullet: BulletId(2),
            owner: RobotId(2),
            victim: RobotId(4),
            damage: 8.0,
        });
        assert!(bot.is_evading());

        for _ in 0..SENTRY_EVADE_TICKS {
            bot.control(&view(4), &mut intent);
            assert_eq!(intent.moving, Move::Back);
        }
        bot.control(&view(4), &mut intent);
        assert_eq!(intent.moving, Move::Stop);
    }

    #[test]
    fn test_sentry_sweeps_both_ways() {
        let mut bot = Sentry::default();
        let mut intent = Intent::default();
        let mut turns = Vec::new();
        for _ in 0..SENTRY_SWEEP_TICKS * 2 {
            bot.control(&view(1), &mut intent);
            turns.push(intent.turret_turning);
        }
        assert!(turns.contains(&Turn::Left));
        assert!(turns.contains(&Turn::Right));
    }

    #[test]
    fn test_stock_battle_is_deterministic() {
        let battle = || {
            let mut engine = ArenaEngine::new(SimConfig::default()).unwrap();
            for (i, name) in STOCK_BOTS.iter().enumerate() {
                engine.add_controlled_robot(by_name(name, i as u64).unwrap());
            }
            let mut last = None;
            for _ in 0..600 {
                let snapshot = engine.tick();
                for robot in &snapshot.robots {
                    assert!(robot.speed.abs() <= 8.0);
                    assert!(robot.energy >= 0.0);
                }
                last = Some(snapshot);
            }
            last.unwrap()
        };
        assert_eq!(battle(), battle());
    }
}
