//! Input systems.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame and
//! writes the results into [`InputState`] and [`PointerState`]. Discrete
//! transitions are emitted as events so gameplay observers react to edges
//! instead of polling:
//!
//! - WASD press/release → [`InputEvent`](crate::events::input::InputEvent)
//! - left click → cursor capture (the pointer-lock analogue) + [`FireEvent`]
//! - Q → cursor release while captured
//! - F11 → [`SwitchDebugEvent`]
//! - Escape → request the `Quitting` state

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::events::fire::FireEvent;
use crate::events::input::{InputAction, InputEvent};
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::input::{InputState, PointerState};

/// Poll Raylib for keyboard/mouse input and update the input resources.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    mut pointer: ResMut<PointerState>,
    mut next_state: ResMut<NextGameState>,
    mut rl: NonSendMut<RaylibHandle>,
    mut commands: Commands,
) {
    // Held state for the movement keys; the acceleration observer reads
    // these when deciding whether a release may zero an axis.
    input.maindirection_up.active = rl.is_key_down(input.maindirection_up.key_binding);
    input.maindirection_left.active = rl.is_key_down(input.maindirection_left.key_binding);
    input.maindirection_down.active = rl.is_key_down(input.maindirection_down.key_binding);
    input.maindirection_right.active = rl.is_key_down(input.maindirection_right.key_binding);
    input.pointer_release.active = rl.is_key_down(input.pointer_release.key_binding);
    input.action_back.active = rl.is_key_down(input.action_back.key_binding);
    input.mode_debug.active = rl.is_key_down(input.mode_debug.key_binding);

    // Movement key edges become InputEvents.
    let directions = [
        (InputAction::MainDirectionUp, input.maindirection_up.key_binding),
        (
            InputAction::MainDirectionDown,
            input.maindirection_down.key_binding,
        ),
        (
            InputAction::MainDirectionLeft,
            input.maindirection_left.key_binding,
        ),
        (
            InputAction::MainDirectionRight,
            input.maindirection_right.key_binding,
        ),
    ];
    for (action, key) in directions {
        if rl.is_key_pressed(key) {
            commands.trigger(InputEvent {
                action,
                pressed: true,
            });
        }
        if rl.is_key_released(key) {
            commands.trigger(InputEvent {
                action,
                pressed: false,
            });
        }
    }
    input.maindirection_up.just_pressed = rl.is_key_pressed(input.maindirection_up.key_binding);
    input.maindirection_up.just_released = rl.is_key_released(input.maindirection_up.key_binding);
    input.maindirection_down.just_pressed = rl.is_key_pressed(input.maindirection_down.key_binding);
    input.maindirection_down.just_released =
        rl.is_key_released(input.maindirection_down.key_binding);
    input.maindirection_left.just_pressed = rl.is_key_pressed(input.maindirection_left.key_binding);
    input.maindirection_left.just_released =
        rl.is_key_released(input.maindirection_left.key_binding);
    input.maindirection_right.just_pressed =
        rl.is_key_pressed(input.maindirection_right.key_binding);
    input.maindirection_right.just_released =
        rl.is_key_released(input.maindirection_right.key_binding);

    if rl.is_key_pressed(input.mode_debug.key_binding) {
        input.mode_debug.just_pressed = true;
        commands.trigger(SwitchDebugEvent {});
    } else {
        input.mode_debug.just_pressed = false;
    }

    // Left click captures the cursor on first use and fires a bullet, so
    // the capturing click already shoots.
    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        if !pointer.locked {
            rl.disable_cursor();
            pointer.locked = true;
        }
        commands.trigger(FireEvent {});
    }

    // Q gives the cursor back.
    if rl.is_key_pressed(input.pointer_release.key_binding) {
        input.pointer_release.just_pressed = true;
        if pointer.locked {
            rl.enable_cursor();
            pointer.locked = false;
        }
    } else {
        input.pointer_release.just_pressed = false;
    }

    // While captured the cursor reports relative motion only.
    pointer.delta = if pointer.locked {
        rl.get_mouse_delta()
    } else {
        Vector2 { x: 0.0, y: 0.0 }
    };

    // Escape requests shutdown.
    if rl.is_key_pressed(input.action_back.key_binding) {
        input.action_back.just_pressed = true;
        next_state.set(GameStates::Quitting);
    } else {
        input.action_back.just_pressed = false;
    }
}
