use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Sprite identified by a texture key, its source frame size and an offset if
/// the texture is a spritesheet. The offset selects the frame inside the
/// sheet. The origin is the pivot point (in source pixels) relative to the
/// frame's top-left, used for placement and rotation when rendering.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub offset: Vector2,
    pub origin: Vector2,
}

impl Sprite {
    /// Sprite covering a whole texture frame with a centered pivot.
    pub fn centered(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            offset: Vector2 { x: 0.0, y: 0.0 },
            origin: Vector2 {
                x: width * 0.5,
                y: height * 0.5,
            },
        }
    }
}
