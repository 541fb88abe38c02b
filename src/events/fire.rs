//! Bullet firing event and observer.
//!
//! A [`FireEvent`] is triggered on pointer-down. The observer recycles the
//! first dormant bullet from the pool: it moves the bullet to the player,
//! aims it at the reticle, copies the player's rotation for visual
//! alignment, and wakes it. The pool is fixed-capacity, so a shot with no
//! dormant bullet available is dropped.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::projectile::{Dormant, Projectile};
use crate::components::reticle::Reticle;
use crate::components::rotation::Rotation;

/// Event requesting that one bullet be fired from the player toward the
/// reticle.
#[derive(Event, Debug, Clone, Copy)]
pub struct FireEvent {}

/// Observer that services a [`FireEvent`] from the bullet pool.
pub fn fire_observer(
    _trigger: On<FireEvent>,
    mut commands: Commands,
    player_query: Query<(&MapPosition, &Rotation), With<Player>>,
    reticle_query: Query<&MapPosition, With<Reticle>>,
    mut pool_query: Query<
        (Entity, &mut Projectile, &mut MapPosition, &mut Rotation),
        (With<Dormant>, Without<Player>, Without<Reticle>),
    >,
) {
    let Ok((player_pos, player_rot)) = player_query.single() else {
        return;
    };
    let Ok(reticle_pos) = reticle_query.single() else {
        return;
    };

    let Some((entity, mut projectile, mut position, mut rotation)) =
        pool_query.iter_mut().next()
    else {
        debug!("Bullet pool exhausted, dropping shot");
        return;
    };

    position.pos = player_pos.pos;
    projectile.fire(player_pos.pos, reticle_pos.pos);
    rotation.radians = player_rot.radians;
    commands.entity(entity).remove::<Dormant>();
}
