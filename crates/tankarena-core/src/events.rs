//! Events emitted by the simulation for controllers, logs, and the frontend.

use serde::{Deserialize, Serialize};

use crate::types::{BulletId, RobotId};
use crate::vec2::Vec2;

/// Something observable that happened during a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ArenaEvent {
    /// A robot fired.
    BulletFired {
        bullet: BulletId,
        owner: RobotId,
        power: f64,
    },
    /// A bullet struck a robot and was removed.
    BulletHit {
        bullet: BulletId,
        owner: RobotId,
        victim: RobotId,
        damage: f64,
    },
    /// A bullet left the arena and was removed.
    BulletExpired { bullet: BulletId, owner: RobotId },
    /// A bullet touched another bullet and was removed (classic rules).
    BulletIntercepted { bullet: BulletId, owner: RobotId },
    /// A robot's body crossed the arena edge. Diagnostic only under the
    /// observe policy.
    RobotOutOfBounds { robot: RobotId, position: Vec2 },
    /// A robot was pushed back inside the arena and took wall damage.
    RobotHitWall { robot: RobotId, damage: f64 },
    /// A robot's energy reached zero.
    RobotDisabled { robot: RobotId },
}

impl ArenaEvent {
    /// Robots this event concerns, for routing to controllers.
    pub fn involves(&self, robot: RobotId) -> bool {
        match self {
            ArenaEvent::BulletFired { owner, .. }
            | ArenaEvent::BulletExpired { owner, .. }
            | ArenaEvent::BulletIntercepted { owner, .. } => *owner == robot,
            ArenaEvent::BulletHit { owner, victim, .. } => *owner == robot || *victim == robot,
            ArenaEvent::RobotOutOfBounds { robot: r, .. }
            | ArenaEvent::RobotHitWall { robot: r, .. } => *r == robot,
            // Everyone hears about eliminations.
            ArenaEvent::RobotDisabled { .. } => true,
        }
    }
}
