//! Per-frame input resources.
//!
//! [`InputState`] captures the subset of keyboard state the game cares about
//! with WASD bindings for movement. [`PointerState`] mirrors the captured
//! (locked) cursor: while captured, raylib reports relative motion only, so
//! the per-frame delta is stored here for the reticle controller.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

/// Boolean key state with an associated keyboard binding.
#[derive(Debug, Clone, Copy)]
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key went down this frame.
    pub just_pressed: bool,
    /// Whether the key went up this frame.
    pub just_released: bool,
    /// The key bound to this action. Immutable after creation.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    fn bound_to(key: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: key,
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
///
/// Movement uses WASD; Q releases the pointer capture, Escape requests quit,
/// F11 toggles the debug overlay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub maindirection_up: BoolState,
    pub maindirection_left: BoolState,
    pub maindirection_down: BoolState,
    pub maindirection_right: BoolState,
    pub pointer_release: BoolState,
    pub action_back: BoolState,
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            maindirection_up: BoolState::bound_to(KeyboardKey::KEY_W),
            maindirection_left: BoolState::bound_to(KeyboardKey::KEY_A),
            maindirection_down: BoolState::bound_to(KeyboardKey::KEY_S),
            maindirection_right: BoolState::bound_to(KeyboardKey::KEY_D),
            pointer_release: BoolState::bound_to(KeyboardKey::KEY_Q),
            action_back: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
        }
    }
}

/// Captured-cursor state: the desktop analogue of browser pointer lock.
///
/// While `locked`, the OS cursor is hidden and confined and only relative
/// motion is meaningful; `delta` holds this frame's raw mouse movement.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PointerState {
    pub locked: bool,
    pub delta: Vector2,
}
