use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Marker and clamp window for the aiming reticle.
///
/// While the pointer is captured, the reticle accumulates raw mouse deltas;
/// its offset from the player is then clamped to ±`range` on each axis so it
/// can never leave the visible play window.
#[derive(Component, Clone, Copy, Debug)]
pub struct Reticle {
    pub range: Vector2,
}

impl Reticle {
    pub fn new(range_x: f32, range_y: f32) -> Self {
        Self {
            range: Vector2 {
                x: range_x,
                y: range_y,
            },
        }
    }
}
