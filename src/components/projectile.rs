//! Recyclable bullet components.
//!
//! Bullets live in a fixed-capacity pool: they are spawned once during scene
//! creation with a [`Dormant`] marker and are never despawned afterwards.
//! Firing removes the marker and resets the trajectory; the projectile
//! system reinserts it once the bullet's lifetime elapses. Dormant bullets
//! are skipped by simulation and rendering.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Marker for pooled entities that are currently out of play.
///
/// Present on every bullet between expiry and the next fire. The renderer
/// and the projectile system filter on its absence.
#[derive(Component, Clone, Copy, Debug)]
pub struct Dormant;

/// Trajectory and lifecycle state of one pooled bullet.
#[derive(Component, Clone, Copy, Debug)]
pub struct Projectile {
    /// Scalar speed in world units per second.
    pub speed: f32,
    /// Trajectory angle in radians, measured from the +y axis toward +x.
    pub direction: f32,
    /// Per-axis speed components derived from `direction`.
    pub velocity: Vector2,
    /// Seconds since this bullet was last fired.
    pub born: f32,
    /// Seconds a fired bullet stays live before going dormant.
    pub lifetime: f32,
}

impl Projectile {
    pub fn new(speed: f32, lifetime: f32) -> Self {
        Self {
            speed,
            direction: 0.0,
            velocity: Vector2 { x: 0.0, y: 0.0 },
            born: 0.0,
            lifetime,
        }
    }

    /// Aim this bullet from `from` toward `target` and reset its age.
    ///
    /// The angle is taken with `atan2(dx, dy)` so the trajectory is defined
    /// for every geometry, including `target.y == from.y`, and the velocity
    /// decomposes as `speed * (sin, cos)` which points at the target in all
    /// four quadrants.
    pub fn fire(&mut self, from: Vector2, target: Vector2) {
        self.direction = (target.x - from.x).atan2(target.y - from.y);
        self.velocity = Vector2 {
            x: self.speed * self.direction.sin(),
            y: self.speed * self.direction.cos(),
        };
        self.born = 0.0;
    }

    /// Whether this bullet has outlived its lifetime.
    pub fn expired(&self) -> bool {
        self.born > self.lifetime
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn fired(from: (f32, f32), target: (f32, f32)) -> Projectile {
        let mut p = Projectile::new(1000.0, 1.8);
        p.fire(
            Vector2 {
                x: from.0,
                y: from.1,
            },
            Vector2 {
                x: target.0,
                y: target.1,
            },
        );
        p
    }

    #[test]
    fn test_fire_toward_target_below_has_positive_y_speed() {
        let p = fired((800.0, 600.0), (800.0, 700.0));
        assert!(p.velocity.y > 0.0);
        assert!(approx_eq(p.velocity.x, 0.0));
    }

    #[test]
    fn test_fire_toward_target_above_has_negative_y_speed() {
        let p = fired((800.0, 600.0), (820.0, 500.0));
        assert!(p.velocity.y < 0.0);
        assert!(p.velocity.x > 0.0);
    }

    #[test]
    fn test_fire_speed_magnitude_is_configured_speed() {
        let p = fired((0.0, 0.0), (123.0, -456.0));
        let mag = (p.velocity.x * p.velocity.x + p.velocity.y * p.velocity.y).sqrt();
        assert!(approx_eq(mag, 1000.0));
    }

    #[test]
    fn test_fire_points_at_target() {
        let p = fired((100.0, 100.0), (400.0, 500.0));
        // Velocity direction must match the from->target direction.
        let dx = 300.0f32;
        let dy = 400.0f32;
        let len = (dx * dx + dy * dy).sqrt();
        assert!(approx_eq(p.velocity.x, 1000.0 * dx / len));
        assert!(approx_eq(p.velocity.y, 1000.0 * dy / len));
    }

    #[test]
    fn test_fire_same_y_is_defined_and_horizontal() {
        // dy == 0 must still produce a finite, full-speed, horizontal
        // trajectory.
        let p = fired((800.0, 600.0), (900.0, 600.0));
        assert!(p.direction.is_finite());
        assert!(p.velocity.x.is_finite() && p.velocity.y.is_finite());
        assert!(approx_eq(p.velocity.x, 1000.0));
        assert!(approx_eq(p.velocity.y, 0.0));

        let p = fired((800.0, 600.0), (700.0, 600.0));
        assert!(approx_eq(p.velocity.x, -1000.0));
        assert!(approx_eq(p.velocity.y, 0.0));
    }

    #[test]
    fn test_fire_resets_born() {
        let mut p = Projectile::new(1000.0, 1.8);
        p.born = 5.0;
        p.fire(Vector2 { x: 0.0, y: 0.0 }, Vector2 { x: 1.0, y: 1.0 });
        assert!(approx_eq(p.born, 0.0));
    }

    #[test]
    fn test_expired_threshold() {
        let mut p = Projectile::new(1000.0, 1.8);
        p.born = 1.8;
        assert!(!p.expired());
        p.born = 1.8001;
        assert!(p.expired());
    }
}
