use bevy_ecs::prelude::Component;

/// Marker for the player entity. Singleton: spawned once during scene
/// creation, never despawned within a session.
#[derive(Component, Clone, Copy, Debug)]
pub struct Player;
