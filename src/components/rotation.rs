use bevy_ecs::prelude::Component;

/// Rotation of an entity around its sprite origin.
///
/// Stored in radians because everything that produces a rotation here does it
/// with `atan2`. Rendering converts to degrees at the draw call.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Rotation {
    pub radians: f32,
}

impl Rotation {
    pub fn new(radians: f32) -> Self {
        Self { radians }
    }

    /// Angle in degrees, for raylib draw calls.
    pub fn degrees(&self) -> f32 {
        self.radians.to_degrees()
    }
}
