//! Render systems.
//!
//! [`render_system`] is the per-frame draw pass: it temporarily takes the
//! raylib handles out of the world, opens the drawing scopes, renders the
//! world in camera space, then the debug overlay in screen space, and puts
//! the handles back. Dormant pooled entities are not drawn.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::projectile::Dormant;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::debugmode::DebugMode;
use crate::resources::input::PointerState;
use crate::resources::texturestore::TextureStore;
use crate::resources::windowsize::WindowSize;

/// Exclusive per-frame render entry point.
pub fn render_system(world: &mut World) {
    let mut rl = world
        .remove_non_send_resource::<RaylibHandle>()
        .expect("RaylibHandle missing from world");
    let thread = world
        .remove_non_send_resource::<RaylibThread>()
        .expect("RaylibThread missing from world");

    {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);

        let camera = world.resource::<Camera2DRes>().0;
        {
            let mut d2 = d.begin_mode2D(camera);
            render_pass(world, &mut d2);
        }
        render_debug_ui(world, &mut d);
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
}

/// Draw all visible sprites in camera space, z-sorted and view-culled.
///
/// For culling we compute the world-rect visible by the camera using
/// screen-to-world corner transforms and do AABB intersection against each
/// sprite's scaled bounds. Rotation may cull a sprite a frame early at the
/// view edge; nothing here is large enough for that to show.
pub fn render_pass(world: &mut World, d2: &mut RaylibMode2D<RaylibDrawHandle>) {
    let cam = world.resource::<Camera2DRes>().0;
    let window = *world.resource::<WindowSize>();

    let tl = d2.get_screen_to_world2D(Vector2 { x: 0.0, y: 0.0 }, cam);
    let br = d2.get_screen_to_world2D(
        Vector2 {
            x: window.w as f32,
            y: window.h as f32,
        },
        cam,
    );
    let view_min = Vector2 {
        x: tl.x.min(br.x),
        y: tl.y.min(br.y),
    };
    let view_max = Vector2 {
        x: tl.x.max(br.x),
        y: tl.y.max(br.y),
    };

    // Collect visible sprites, sort by z, then draw.
    let mut to_draw: Vec<(Sprite, MapPosition, Vector2, f32, ZIndex)> = {
        let mut q = world.query_filtered::<(
            &Sprite,
            &MapPosition,
            Option<&Scale>,
            Option<&Rotation>,
            &ZIndex,
        ), Without<Dormant>>();
        q.iter(world)
            .filter_map(|(sprite, position, scale, rotation, z)| {
                let scale = scale.map(|s| s.scale).unwrap_or(Vector2 { x: 1.0, y: 1.0 });
                let rotation = rotation.map(|r| r.degrees()).unwrap_or(0.0);

                // Scaled world-space AABB with MapPosition as the pivot.
                let min = Vector2 {
                    x: position.pos.x - sprite.origin.x * scale.x,
                    y: position.pos.y - sprite.origin.y * scale.y,
                };
                let max = Vector2 {
                    x: min.x + sprite.width * scale.x,
                    y: min.y + sprite.height * scale.y,
                };

                let overlap = !(max.x < view_min.x
                    || min.x > view_max.x
                    || max.y < view_min.y
                    || min.y > view_max.y);
                if overlap {
                    Some((sprite.clone(), *position, scale, rotation, *z))
                } else {
                    None
                }
            })
            .collect()
    };

    to_draw.sort_by_key(|(_, _, _, _, z)| *z);

    let textures = world.resource::<TextureStore>();

    for (sprite, position, scale, rotation, _z) in to_draw.iter() {
        if let Some(tex) = textures.get(&sprite.tex_key) {
            // Source rect selects a frame from the spritesheet.
            let src = Rectangle {
                x: sprite.offset.x,
                y: sprite.offset.y,
                width: sprite.width,
                height: sprite.height,
            };

            // Destination places the sprite so that MapPosition is the pivot;
            // origin is given in destination pixels, so it scales too.
            let dest = Rectangle {
                x: position.pos.x,
                y: position.pos.y,
                width: sprite.width * scale.x,
                height: sprite.height * scale.y,
            };
            let origin = Vector2 {
                x: sprite.origin.x * scale.x,
                y: sprite.origin.y * scale.y,
            };

            d2.draw_texture_pro(tex, src, dest, origin, *rotation, Color::WHITE);
        }
    }

    if world.contains_resource::<DebugMode>() {
        // Draw a small cross at every pivot of a live entity.
        let mut positions = world.query_filtered::<&MapPosition, Without<Dormant>>();
        for position in positions.iter(world) {
            d2.draw_line(
                position.pos.x as i32 - 5,
                position.pos.y as i32,
                position.pos.x as i32 + 5,
                position.pos.y as i32,
                Color::GREEN,
            );
            d2.draw_line(
                position.pos.x as i32,
                position.pos.y as i32 - 5,
                position.pos.x as i32,
                position.pos.y as i32 + 5,
                Color::GREEN,
            );
        }
    }
}

/// Screen-space diagnostics, drawn only while `DebugMode` is present.
pub fn render_debug_ui(world: &mut World, d: &mut RaylibDrawHandle) {
    if world.contains_resource::<DebugMode>() {
        let fps = d.get_fps();
        let text = format!("DEBUG MODE (press F11 to toggle) | FPS: {}", fps);
        d.draw_text(&text, 10, 10, 10, Color::WHITE);

        let entity_count = world.iter_entities().count();
        let text = format!("Entities: {}", entity_count);
        d.draw_text(&text, 10, 30, 10, Color::WHITE);

        let cam = world.resource::<Camera2DRes>().0;
        let cam_text = format!(
            "Camera pos: ({:.1}, {:.1}) Zoom: {:.2}",
            cam.target.x, cam.target.y, cam.zoom
        );
        d.draw_text(&cam_text, 10, 50, 10, Color::WHITE);

        let pointer = *world.resource::<PointerState>();
        let pointer_text = format!(
            "Pointer locked: {} delta: ({:.1}, {:.1})",
            pointer.locked, pointer.delta.x, pointer.delta.y
        );
        d.draw_text(&pointer_text, 10, 70, 10, Color::WHITE);
    }
}
