//! Kinematic body component.
//!
//! The [`RigidBody`] component stores velocity, acceleration, and a per-axis
//! linear drag. The movement system integrates acceleration into velocity,
//! applies drag on axes without acceleration input, and integrates velocity
//! into [`MapPosition`](super::mapposition::MapPosition).
//!
//! [`RigidBody::clamp_speed`] caps the speed of a body while preserving its
//! direction of travel. It is pure over the velocity pair and is applied by
//! the per-frame game update to the player.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Kinematic body storing velocity, acceleration, and per-axis drag.
///
/// # Fields
/// - `velocity` - current velocity in world units per second
/// - `acceleration` - current acceleration in world units per second squared
/// - `drag` - per-axis deceleration applied toward zero velocity while the
///   matching acceleration axis is zero; never reverses the sign of the
///   velocity
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    pub velocity: Vector2,
    pub acceleration: Vector2,
    pub drag: Vector2,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a body at rest with no drag.
    pub fn new() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
            acceleration: Vector2 { x: 0.0, y: 0.0 },
            drag: Vector2 { x: 0.0, y: 0.0 },
        }
    }

    /// Create a body at rest with the given per-axis drag.
    pub fn with_drag(dx: f32, dy: f32) -> Self {
        Self {
            drag: Vector2 { x: dx, y: dy },
            ..Self::new()
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    /// Squared speed. Cheaper than a full magnitude when only comparing.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn speed_sq(&self) -> f32 {
        self.velocity.x * self.velocity.x + self.velocity.y * self.velocity.y
    }

    /// Cap the speed at `max_speed` while preserving the direction of travel.
    ///
    /// If the squared magnitude of the velocity exceeds the squared maximum,
    /// the vector is rebuilt from its angle at exactly `max_speed`; otherwise
    /// the velocity is left untouched.
    pub fn clamp_speed(&mut self, max_speed: f32) {
        let vx = self.velocity.x;
        let vy = self.velocity.y;
        if vx * vx + vy * vy > max_speed * max_speed {
            let angle = vy.atan2(vx);
            self.velocity.x = angle.cos() * max_speed;
            self.velocity.y = angle.sin() * max_speed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vector2, b: Vector2) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
    }

    #[test]
    fn test_rigidbody_new() {
        let rb = RigidBody::new();
        assert!(vec_approx_eq(rb.velocity, Vector2 { x: 0.0, y: 0.0 }));
        assert!(vec_approx_eq(rb.acceleration, Vector2 { x: 0.0, y: 0.0 }));
        assert!(vec_approx_eq(rb.drag, Vector2 { x: 0.0, y: 0.0 }));
    }

    #[test]
    fn test_rigidbody_with_drag() {
        let rb = RigidBody::with_drag(500.0, 500.0);
        assert!(approx_eq(rb.drag.x, 500.0));
        assert!(approx_eq(rb.drag.y, 500.0));
        assert!(vec_approx_eq(rb.velocity, Vector2 { x: 0.0, y: 0.0 }));
    }

    #[test]
    fn test_set_velocity() {
        let mut rb = RigidBody::new();
        rb.set_velocity(Vector2 { x: 100.0, y: 200.0 });
        assert!(vec_approx_eq(rb.velocity, Vector2 { x: 100.0, y: 200.0 }));
    }

    #[test]
    fn test_speed_sq() {
        let mut rb = RigidBody::new();
        rb.velocity = Vector2 { x: 3.0, y: 4.0 };
        assert!(approx_eq(rb.speed_sq(), 25.0));
    }

    #[test]
    fn test_clamp_speed_identity_below_max() {
        let mut rb = RigidBody::new();
        rb.velocity = Vector2 { x: 3.0, y: 4.0 }; // magnitude 5
        rb.clamp_speed(10.0);
        assert!(vec_approx_eq(rb.velocity, Vector2 { x: 3.0, y: 4.0 }));
    }

    #[test]
    fn test_clamp_speed_identity_at_max() {
        let mut rb = RigidBody::new();
        rb.velocity = Vector2 { x: 3.0, y: 4.0 };
        rb.clamp_speed(5.0);
        assert!(vec_approx_eq(rb.velocity, Vector2 { x: 3.0, y: 4.0 }));
    }

    #[test]
    fn test_clamp_speed_rescales_to_exactly_max() {
        let mut rb = RigidBody::new();
        rb.velocity = Vector2 { x: 30.0, y: 40.0 }; // magnitude 50
        rb.clamp_speed(5.0);
        assert!(approx_eq(rb.speed_sq().sqrt(), 5.0));
        // Direction preserved: (0.6, 0.8) * 5 = (3, 4)
        assert!(approx_eq(rb.velocity.x, 3.0));
        assert!(approx_eq(rb.velocity.y, 4.0));
    }

    #[test]
    fn test_clamp_speed_preserves_angle() {
        let mut rb = RigidBody::new();
        rb.velocity = Vector2 { x: -120.0, y: 90.0 };
        let angle_before = rb.velocity.y.atan2(rb.velocity.x);
        rb.clamp_speed(10.0);
        let angle_after = rb.velocity.y.atan2(rb.velocity.x);
        assert!(approx_eq(angle_before, angle_after));
        assert!(approx_eq(rb.speed_sq().sqrt(), 10.0));
    }

    #[test]
    fn test_clamp_speed_negative_quadrant() {
        let mut rb = RigidBody::new();
        rb.velocity = Vector2 { x: -30.0, y: -40.0 };
        rb.clamp_speed(5.0);
        assert!(approx_eq(rb.velocity.x, -3.0));
        assert!(approx_eq(rb.velocity.y, -4.0));
    }

    #[test]
    fn test_clamp_speed_zero_velocity_untouched() {
        let mut rb = RigidBody::new();
        rb.clamp_speed(5.0);
        assert!(vec_approx_eq(rb.velocity, Vector2 { x: 0.0, y: 0.0 }));
    }
}
