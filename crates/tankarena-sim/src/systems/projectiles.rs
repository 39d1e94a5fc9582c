//! Projectile advance: every live bullet moves by its velocity.

use hecs::World;

use tankarena_core::components::Bullet;

/// Advance one bullet by one tick. No drag, no gravity.
pub fn step(bullet: &mut Bullet) {
    bullet.position += bullet.velocity;
}

/// Advance all bullets.
pub fn run(world: &mut World) {
    for (_entity, bullet) in world.query_mut::<&mut Bullet>() {
        step(bullet);
    }
}
