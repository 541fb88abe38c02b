//! Playfield rectangle resource.
//!
//! Entities marked [`Confined`](crate::components::confined::Confined) are
//! clamped to this rectangle by the movement system.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// Axis-aligned world rectangle in world units.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldBounds {
    pub min: Vector2,
    pub max: Vector2,
}

impl WorldBounds {
    /// Bounds spanning (0,0) to (width,height).
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            min: Vector2 { x: 0.0, y: 0.0 },
            max: Vector2 {
                x: width,
                y: height,
            },
        }
    }
}
