//! Bullet simulation system.
//!
//! Each frame, every live (non-dormant) bullet integrates its position from
//! the per-axis speed components fixed at fire time and accumulates its age.
//! Once the age exceeds the bullet's lifetime the entity is parked back in
//! the pool by inserting [`Dormant`]; it is never despawned, only recycled
//! by the next fire.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::projectile::{Dormant, Projectile};
use crate::resources::worldtime::WorldTime;

pub fn projectile_system(
    time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Projectile, &mut MapPosition), Without<Dormant>>,
    mut commands: Commands,
) {
    let dt = time.delta;
    for (entity, mut projectile, mut position) in query.iter_mut() {
        position.pos.x += projectile.velocity.x * dt;
        position.pos.y += projectile.velocity.y * dt;

        projectile.born += dt;
        if projectile.expired() {
            commands.entity(entity).insert(Dormant);
        }
    }
}
