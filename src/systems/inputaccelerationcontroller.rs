//! Edge-triggered acceleration controller.
//!
//! Reacts to [`InputEvent`] transitions and applies directional
//! accelerations to entities with an
//! [`AccelerationControlled`](crate::components::inputcontrolled::AccelerationControlled)
//! component. Key-down sets the axis to the configured value; key-up zeroes
//! that axis only when the opposing key is not currently held, so switching
//! between opposing keys never drops acceleration early. Drag in the
//! movement system handles deceleration once both keys of an axis are up.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::components::inputcontrolled::AccelerationControlled;
use crate::components::rigidbody::RigidBody;
use crate::events::input::{InputAction, InputEvent};
use crate::resources::input::InputState;

/// Apply one input transition to every controlled entity's acceleration.
pub fn acceleration_observer(
    trigger: On<InputEvent>,
    input_state: Res<InputState>,
    mut query: Query<(&AccelerationControlled, &mut RigidBody)>,
) {
    let event = trigger.event();
    for (controlled, mut rigidbody) in query.iter_mut() {
        match (event.action, event.pressed) {
            (InputAction::MainDirectionUp, true) => {
                rigidbody.acceleration.y = controlled.up_acceleration.y;
            }
            (InputAction::MainDirectionDown, true) => {
                rigidbody.acceleration.y = controlled.down_acceleration.y;
            }
            (InputAction::MainDirectionLeft, true) => {
                rigidbody.acceleration.x = controlled.left_acceleration.x;
            }
            (InputAction::MainDirectionRight, true) => {
                rigidbody.acceleration.x = controlled.right_acceleration.x;
            }
            (InputAction::MainDirectionUp, false) => {
                if !input_state.maindirection_down.active {
                    rigidbody.acceleration.y = 0.0;
                }
            }
            (InputAction::MainDirectionDown, false) => {
                if !input_state.maindirection_up.active {
                    rigidbody.acceleration.y = 0.0;
                }
            }
            (InputAction::MainDirectionLeft, false) => {
                if !input_state.maindirection_right.active {
                    rigidbody.acceleration.x = 0.0;
                }
            }
            (InputAction::MainDirectionRight, false) => {
                if !input_state.maindirection_left.active {
                    rigidbody.acceleration.x = 0.0;
                }
            }
        }
    }
}
