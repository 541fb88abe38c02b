use bevy_ecs::prelude::Resource;

/// Simulation clock: elapsed seconds, last frame's scaled delta, and the
/// scale factor applied to incoming frame deltas.
#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
        }
    }
}
