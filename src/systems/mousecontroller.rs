//! Reticle tracking system.
//!
//! While the cursor is captured, the reticle accumulates the raw per-frame
//! mouse delta from [`PointerState`] (captured cursors report relative
//! motion only, so absolute reads would be meaningless). The accumulated
//! position is then clamped so the reticle's offset from the player never
//! exceeds the window stored on the [`Reticle`] component.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::reticle::Reticle;
use crate::resources::input::PointerState;

/// Clamp `pos` into the ±`range` window around `center`, per axis.
pub fn clamp_to_window(pos: Vector2, center: Vector2, range: Vector2) -> Vector2 {
    Vector2 {
        x: pos.x.clamp(center.x - range.x, center.x + range.x),
        y: pos.y.clamp(center.y - range.y, center.y + range.y),
    }
}

/// Accumulate pointer deltas into the reticle position and keep it inside
/// its window around the player.
pub fn mouse_controller(
    pointer: Res<PointerState>,
    player_query: Query<&MapPosition, (With<Player>, Without<Reticle>)>,
    mut reticle_query: Query<(&Reticle, &mut MapPosition), Without<Player>>,
) {
    let Ok(player_pos) = player_query.single() else {
        return;
    };
    for (reticle, mut position) in reticle_query.iter_mut() {
        if pointer.locked {
            position.pos.x += pointer.delta.x;
            position.pos.y += pointer.delta.y;
        }
        position.pos = clamp_to_window(position.pos, player_pos.pos, reticle.range);
    }
}
