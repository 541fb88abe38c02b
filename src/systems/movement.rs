//! Movement integration system.
//!
//! Each frame, for every entity with a body: acceleration is integrated into
//! velocity, per-axis drag pulls the velocity toward zero on axes without
//! acceleration input, and the velocity is integrated into the position.
//! Entities marked [`Confined`] are clamped to the [`WorldBounds`] rectangle
//! with the touching velocity axis zeroed, so they stop at the playfield
//! edge instead of sliding along it forever.

use bevy_ecs::prelude::*;

use crate::components::confined::Confined;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldbounds::WorldBounds;
use crate::resources::worldtime::WorldTime;

/// Drag never reverses the sign of the velocity, it only decays it to zero.
fn apply_drag(velocity: f32, drag: f32, dt: f32) -> f32 {
    if velocity > 0.0 {
        (velocity - drag * dt).max(0.0)
    } else {
        (velocity + drag * dt).min(0.0)
    }
}

pub fn movement(
    mut query: Query<(&mut MapPosition, &mut RigidBody, Option<&Confined>)>,
    time: Res<WorldTime>,
    bounds: Option<Res<WorldBounds>>,
) {
    let dt = time.delta;
    for (mut position, mut rigidbody, confined) in query.iter_mut() {
        let acceleration = rigidbody.acceleration;
        rigidbody.velocity.x += acceleration.x * dt;
        rigidbody.velocity.y += acceleration.y * dt;

        if acceleration.x == 0.0 && rigidbody.drag.x > 0.0 {
            rigidbody.velocity.x = apply_drag(rigidbody.velocity.x, rigidbody.drag.x, dt);
        }
        if acceleration.y == 0.0 && rigidbody.drag.y > 0.0 {
            rigidbody.velocity.y = apply_drag(rigidbody.velocity.y, rigidbody.drag.y, dt);
        }

        position.pos.x += rigidbody.velocity.x * dt;
        position.pos.y += rigidbody.velocity.y * dt;

        if let (Some(_), Some(bounds)) = (confined, bounds.as_deref()) {
            if position.pos.x < bounds.min.x {
                position.pos.x = bounds.min.x;
                rigidbody.velocity.x = 0.0;
            } else if position.pos.x > bounds.max.x {
                position.pos.x = bounds.max.x;
                rigidbody.velocity.x = 0.0;
            }
            if position.pos.y < bounds.min.y {
                position.pos.y = bounds.min.y;
                rigidbody.velocity.y = 0.0;
            } else if position.pos.y > bounds.max.y {
                position.pos.y = bounds.max.y;
                rigidbody.velocity.y = 0.0;
            }
        }
    }
}
