use bevy_ecs::prelude::Component;

/// Marker for entities that must stay inside the
/// [`WorldBounds`](crate::resources::worldbounds::WorldBounds).
///
/// The movement system clamps the position of confined entities to the world
/// rectangle and zeroes the velocity on the touching axis.
#[derive(Component, Clone, Copy, Debug)]
pub struct Confined;
