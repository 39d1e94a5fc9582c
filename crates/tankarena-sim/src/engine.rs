//! Simulation engine: the core of the arena.
//!
//! `ArenaEngine` owns the hecs ECS world, the id allocators, the RNG and the
//! controllers. A tick is a control phase (controllers write intents) followed
//! by the simulation phase (`step`). Completely headless, enabling
//! deterministic testing.

use std::collections::{BTreeMap, BTreeSet};

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use tankarena_core::components::{Bullet, Chassis, Intent, Robot};
use tankarena_core::constants::*;
use tankarena_core::enums::{DamageModel, WallPolicy};
use tankarena_core::error::ArenaError;
use tankarena_core::events::ArenaEvent;
use tankarena_core::state::{ArenaSnapshot, BulletView, RobotView};
use tankarena_core::types::{BulletId, RobotId, SimTime};
use tankarena_core::vec2::wrap_angle;
use tankarena_core::Vec2;

use crate::controller::Controller;
use crate::systems;
use crate::world_setup;

/// Configuration for a new arena.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Arena width and height. Used by every out-of-bounds test.
    pub size: Vec2,
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub damage_model: DamageModel,
    pub wall_policy: WallPolicy,
    /// Heat shed per tick. `None` disables cooling and the heat gate, so a
    /// robot fires whenever it asks to.
    pub gun_cooling: Option<f64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            size: Vec2::new(DEFAULT_ARENA_WIDTH, DEFAULT_ARENA_HEIGHT),
            seed: DEFAULT_SEED,
            damage_model: DamageModel::default(),
            wall_policy: WallPolicy::default(),
            gun_cooling: None,
        }
    }
}

impl SimConfig {
    /// Reject arenas and cooling rates that would make the simulation
    /// meaningless.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if !(self.size.x.is_finite() && self.size.y.is_finite()) {
            return Err(ArenaError::InvalidConfig("arena size must be finite"));
        }
        if self.size.x <= 0.0 || self.size.y <= 0.0 {
            return Err(ArenaError::InvalidConfig("arena size must be positive"));
        }
        if let Some(rate) = self.gun_cooling {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(ArenaError::InvalidConfig("gun cooling must be positive"));
            }
        }
        Ok(())
    }
}

/// The arena engine. Owns the ECS world and all simulation state.
pub struct ArenaEngine {
    world: World,
    config: SimConfig,
    time: SimTime,
    rng: ChaCha8Rng,
    next_robot_id: u32,
    next_bullet_id: u64,
    roster: BTreeMap<RobotId, Entity>,
    controllers: BTreeMap<RobotId, Box<dyn Controller>>,
    disabled: BTreeSet<RobotId>,
    despawn_buffer: Vec<Entity>,
    /// Events produced since the last drain.
    events: Vec<ArenaEvent>,
    /// Events of the previous tick, delivered at the next control phase.
    last_events: Vec<ArenaEvent>,
}

impl ArenaEngine {
    /// Create an empty arena.
    pub fn new(config: SimConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        Ok(Self {
            world: World::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            time: SimTime::default(),
            next_robot_id: 1,
            next_bullet_id: 1,
            roster: BTreeMap::new(),
            controllers: BTreeMap::new(),
            disabled: BTreeSet::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            last_events: Vec::new(),
        })
    }

    // --- Membership ---

    /// Add a robot at a random spot inside the arena with a random heading.
    pub fn add_robot(&mut self, name: &str) -> RobotId {
        let chassis = world_setup::random_chassis(&mut self.rng, self.config.size);
        self.spawn_robot(name, chassis)
    }

    /// Add a robot at a chosen position and heading (radians).
    pub fn add_robot_at(&mut self, name: &str, position: Vec2, heading: f64) -> RobotId {
        self.spawn_robot(name, Chassis::at(position, wrap_angle(heading)))
    }

    /// Add a robot driven by `controller`, named after it.
    pub fn add_controlled_robot(&mut self, controller: Box<dyn Controller>) -> RobotId {
        let id = self.add_robot(controller.name());
        self.controllers.insert(id, controller);
        id
    }

    /// Attach (or replace) the controller of an existing robot.
    pub fn attach_controller(
        &mut self,
        id: RobotId,
        controller: Box<dyn Controller>,
    ) -> Result<(), ArenaError> {
        if !self.roster.contains_key(&id) {
            return Err(ArenaError::UnknownRobot(id));
        }
        self.controllers.insert(id, controller);
        Ok(())
    }

    /// Remove a robot. Bullets it fired stay live and keep its id as owner.
    pub fn remove_robot(&mut self, id: RobotId) -> Result<(), ArenaError> {
        let entity = self.roster.remove(&id).ok_or(ArenaError::UnknownRobot(id))?;
        self.controllers.remove(&id);
        self.disabled.remove(&id);
        let _ = self.world.despawn(entity);
        debug!(robot = %id, "robot removed");
        Ok(())
    }

    /// Put a bullet into the arena. The engine assigns its id and clamps
    /// its power into `[0.1, 3.0]`.
    pub fn add_bullet(
        &mut self,
        owner: RobotId,
        position: Vec2,
        velocity: Vec2,
        power: f64,
    ) -> BulletId {
        let id = BulletId(self.next_bullet_id);
        self.next_bullet_id += 1;
        world_setup::spawn_bullet(&mut self.world, id, owner, position, velocity, power);
        id
    }

    // --- Intents ---

    /// Current intents of a robot.
    pub fn intent(&self, id: RobotId) -> Result<Intent, ArenaError> {
        let entity = self.entity(id)?;
        self.world
            .get::<&Intent>(entity)
            .map(|intent| *intent)
            .map_err(|_| ArenaError::UnknownRobot(id))
    }

    /// Overwrite the intents of a robot that has no controller, or adjust
    /// one before stepping manually.
    pub fn set_intent(&mut self, id: RobotId, intent: Intent) -> Result<(), ArenaError> {
        let entity = self.entity(id)?;
        let mut slot = self
            .world
            .get::<&mut Intent>(entity)
            .map_err(|_| ArenaError::UnknownRobot(id))?;
        *slot = intent;
        Ok(())
    }

    // --- Stepping ---

    /// Advance the arena by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> ArenaSnapshot {
        self.run_controllers();
        self.step();

        let events = std::mem::take(&mut self.events);
        self.last_events = events.clone();
        systems::snapshot::build_snapshot(&self.world, &self.time, self.config.size, events)
    }

    /// The simulation phase: collision pass, projectile advance, robot
    /// advance (including firing), then the boundary check. The order is
    /// fixed; collisions see pre-advance positions.
    ///
    /// Events accumulate until `drain_events` (or `tick`) takes them. Callers
    /// driving the engine with `step` alone should drain regularly; past
    /// `MAX_PENDING_EVENTS` the oldest are dropped.
    pub fn step(&mut self) {
        // 1. Collision pass
        systems::collision::run(
            &mut self.world,
            self.config.size,
            self.config.damage_model,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 2. Projectile advance
        systems::projectiles::run(&mut self.world);
        // 3. Robot advance and firing
        systems::kinematics::run(
            &mut self.world,
            self.config.gun_cooling,
            &mut self.next_bullet_id,
            &mut self.events,
        );
        // 4. Boundary check
        systems::bounds::run(
            &mut self.world,
            self.config.size,
            self.config.wall_policy,
            &mut self.events,
        );
        // 5. Eliminations
        self.mark_disabled();

        self.trim_events();
        self.time.advance();
    }

    /// Take the events produced since the last drain (or tick).
    pub fn drain_events(&mut self) -> Vec<ArenaEvent> {
        std::mem::take(&mut self.events)
    }

    // --- Queries ---

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn size(&self) -> Vec2 {
        self.config.size
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn robot(&self, id: RobotId) -> Option<RobotView> {
        let entity = *self.roster.get(&id)?;
        let robot = self.world.get::<&Robot>(entity).ok()?;
        let chassis = self.world.get::<&Chassis>(entity).ok()?;
        Some(RobotView::new(&robot, &chassis))
    }

    /// All robots, sorted by id.
    pub fn robots(&self) -> Vec<RobotView> {
        systems::snapshot::build_robots(&self.world)
    }

    /// All live bullets, sorted by id.
    pub fn bullets(&self) -> Vec<BulletView> {
        systems::snapshot::build_bullets(&self.world)
    }

    /// Snapshot of the current state without consuming pending events.
    pub fn snapshot(&self) -> ArenaSnapshot {
        systems::snapshot::build_snapshot(&self.world, &self.time, self.config.size, Vec::new())
    }

    pub fn robot_count(&self) -> usize {
        self.roster.len()
    }

    pub fn bullet_count(&self) -> usize {
        self.world.query::<&Bullet>().iter().count()
    }

    /// Ids of robots with energy left, ascending.
    pub fn alive_robots(&self) -> Vec<RobotId> {
        let mut alive: Vec<RobotId> = self
            .world
            .query::<&Robot>()
            .iter()
            .filter(|(_, robot)| robot.is_alive())
            .map(|(_, robot)| robot.id)
            .collect();
        alive.sort();
        alive
    }

    /// The round is over once at most one robot has energy left.
    pub fn is_finished(&self) -> bool {
        self.alive_robots().len() <= 1
    }

    /// The last robot standing, if exactly one has energy left.
    pub fn winner(&self) -> Option<RobotId> {
        match self.alive_robots().as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    // --- Internals ---

    fn entity(&self, id: RobotId) -> Result<Entity, ArenaError> {
        self.roster
            .get(&id)
            .copied()
            .ok_or(ArenaError::UnknownRobot(id))
    }

    fn spawn_robot(&mut self, name: &str, chassis: Chassis) -> RobotId {
        let id = RobotId(self.next_robot_id);
        self.next_robot_id += 1;
        let entity = world_setup::spawn_robot(&mut self.world, id, name, chassis);
        self.roster.insert(id, entity);
        debug!(robot = %id, name, position = %chassis.position, "robot spawned");
        id
    }

    /// Control phase. Controllers run in id order; disabled robots are skipped.
    fn run_controllers(&mut self) {
        for (id, controller) in self.controllers.iter_mut() {
            let Some(&entity) = self.roster.get(id) else {
                continue;
            };

            let view = match self.world.query_one_mut::<(&Robot, &Chassis)>(entity) {
                Ok((robot, chassis)) => RobotView::new(robot, chassis),
                Err(_) => continue,
            };
            if !view.is_alive() {
                continue;
            }

            for event in self.last_events.iter().filter(|e| e.involves(*id)) {
                controller.on_event(event);
            }

            if let Ok(intent) = self.world.query_one_mut::<&mut Intent>(entity) {
                controller.control(&view, intent);
            }
        }
    }

    /// Drop the oldest pending events beyond `MAX_PENDING_EVENTS`.
    fn trim_events(&mut self) {
        let excess = self.events.len().saturating_sub(MAX_PENDING_EVENTS);
        if excess > 0 {
            debug!(dropped = excess, "pending events not drained; dropping oldest");
            self.events.drain(..excess);
        }
    }

    /// Emit `RobotDisabled` once per robot whose energy reached zero and
    /// clear its intents so it coasts to a stop.
    fn mark_disabled(&mut self) {
        let mut newly_disabled = Vec::new();
        for (_entity, (robot, intent)) in self.world.query_mut::<(&Robot, &mut Intent)>() {
            if robot.is_alive() || self.disabled.contains(&robot.id) {
                continue;
            }
            intent.clear();
            info!(robot = %robot.id, name = %robot.name, "robot disabled");
            newly_disabled.push(robot.id);
        }

        newly_disabled.sort();
        for robot in newly_disabled {
            self.disabled.insert(robot);
            self.events.push(ArenaEvent::RobotDisabled { robot });
        }
    }
}
