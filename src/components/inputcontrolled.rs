//! Input-driven movement intent.
//!
//! [`AccelerationControlled`] describes how an entity's
//! [`RigidBody`](super::rigidbody::RigidBody) acceleration responds to the
//! four directional inputs. The observer in
//! [`crate::systems::inputaccelerationcontroller`] applies these values on
//! discrete key transitions.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Acceleration applied for each directional input.
///
/// Each field stores the acceleration to set on a key-down of the matching
/// direction. Key-up handling (including the opposing-key hold guard) lives
/// in the observer, not here.
#[derive(Component, Clone, Copy, Debug)]
pub struct AccelerationControlled {
    pub up_acceleration: Vector2,
    pub down_acceleration: Vector2,
    pub left_acceleration: Vector2,
    pub right_acceleration: Vector2,
}

impl AccelerationControlled {
    pub fn new(up: Vector2, down: Vector2, left: Vector2, right: Vector2) -> Self {
        Self {
            up_acceleration: up,
            down_acceleration: down,
            left_acceleration: left,
            right_acceleration: right,
        }
    }

    /// Symmetric WASD setup: `magnitude` units/s² on the pressed axis.
    pub fn symmetric(magnitude: f32) -> Self {
        Self::new(
            Vector2 {
                x: 0.0,
                y: -magnitude,
            },
            Vector2 {
                x: 0.0,
                y: magnitude,
            },
            Vector2 {
                x: -magnitude,
                y: 0.0,
            },
            Vector2 {
                x: magnitude,
                y: 0.0,
            },
        )
    }
}
