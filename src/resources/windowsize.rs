//! Window size resource.
//!
//! Tracks the actual window dimensions in pixels, updated each frame to
//! handle resizing. The camera centers its offset on these dimensions.

use bevy_ecs::prelude::Resource;

/// Current window size in pixels.
#[derive(Resource, Clone, Copy)]
pub struct WindowSize {
    pub w: i32,
    pub h: i32,
}
