//! High-level game setup and the per-frame scene update.
//!
//! The state machine calls [`setup`] once to load assets (the preload step),
//! [`enter_play`] once to populate the world (the create step), and the
//! schedule runs [`update`] every frame while playing. [`quit_game`] runs on
//! entering the quitting state.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::confined::Confined;
use crate::components::inputcontrolled::AccelerationControlled;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::projectile::{Dormant, Projectile};
use crate::components::reticle::Reticle;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::texturestore::TextureStore;
use crate::resources::windowsize::WindowSize;
use crate::resources::worldbounds::WorldBounds;

// Sprites by tokkatrain: https://tokkatrain.itch.io/top-down-basic-set
const PLAYER_TEXTURE_PATH: &str = "./assets/sprites/player_handgun.png";
const BULLET_TEXTURE_PATH: &str = "./assets/sprites/bullet6.png";
const RETICLE_TEXTURE_PATH: &str = "./assets/sprites/target.png";
const BACKGROUND_TEXTURE_PATH: &str = "./assets/sprites/background.jpg";

/// Source frame size inside the player spritesheet.
const PLAYER_FRAME_WIDTH: f32 = 66.0;
const PLAYER_FRAME_HEIGHT: f32 = 60.0;
/// The player is drawn at twice the frame size.
const PLAYER_DISPLAY_SCALE: f32 = 2.0;
/// The reticle is drawn at this size in world units regardless of texture size.
const RETICLE_DISPLAY_SIZE: f32 = 25.0;
/// Reticle spawn offset below the player.
const RETICLE_START_OFFSET_Y: f32 = 100.0;

/// Load assets and set up the camera, then request the playing state.
pub fn setup(
    mut commands: Commands,
    mut next_state: ResMut<NextGameState>,
    config: Res<GameConfig>,
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
) {
    let camera = Camera2D {
        target: Vector2 {
            x: config.world_width * 0.5,
            y: config.world_height * 0.5,
        },
        offset: Vector2 {
            x: rl.get_screen_width() as f32 * 0.5,
            y: rl.get_screen_height() as f32 * 0.5,
        },
        rotation: 0.0,
        zoom: config.camera_zoom,
    };
    commands.insert_resource(Camera2DRes(camera));

    commands.insert_resource(WorldBounds::new(config.world_width, config.world_height));

    let mut tex_store = TextureStore::new();

    let player_tex = rl
        .load_texture(&th, PLAYER_TEXTURE_PATH)
        .expect("load assets/sprites/player_handgun.png");
    tex_store.insert("player_handgun", player_tex);

    let bullet_tex = rl
        .load_texture(&th, BULLET_TEXTURE_PATH)
        .expect("load assets/sprites/bullet6.png");
    tex_store.insert("bullet", bullet_tex);

    let reticle_tex = rl
        .load_texture(&th, RETICLE_TEXTURE_PATH)
        .expect("load assets/sprites/target.png");
    tex_store.insert("target", reticle_tex);

    let background_tex = rl
        .load_texture(&th, BACKGROUND_TEXTURE_PATH)
        .expect("load assets/sprites/background.jpg");
    tex_store.insert("background", background_tex);

    commands.insert_resource(tex_store);

    next_state.set(GameStates::Playing);
    log::info!("Setup done, next state set to Playing");
}

/// Spawn the background, the player, the reticle, and the bullet pool.
pub fn enter_play(
    mut commands: Commands,
    config: Res<GameConfig>,
    tex_store: Res<TextureStore>,
) {
    let center = Vector2 {
        x: config.world_width * 0.5,
        y: config.world_height * 0.5,
    };

    // Background stretched over the whole playfield, below everything.
    let background_tex = tex_store
        .get("background")
        .expect("background texture not found");
    let (bg_w, bg_h) = (background_tex.width as f32, background_tex.height as f32);
    commands.spawn((
        MapPosition::new(center.x, center.y),
        ZIndex(-1),
        Sprite::centered("background", bg_w, bg_h),
        Scale::new(config.world_width / bg_w, config.world_height / bg_h),
    ));

    // Player: first frame of the handgun sheet, accelerated by WASD.
    commands.spawn((
        Player,
        Confined,
        MapPosition::new(center.x, center.y),
        ZIndex(1),
        Sprite::centered("player_handgun", PLAYER_FRAME_WIDTH, PLAYER_FRAME_HEIGHT),
        Scale::new(PLAYER_DISPLAY_SCALE, PLAYER_DISPLAY_SCALE),
        Rotation::default(),
        RigidBody::with_drag(config.player_drag, config.player_drag),
        AccelerationControlled::symmetric(config.player_acceleration),
    ));

    // Reticle: follows the captured pointer, clamped around the player.
    let reticle_tex = tex_store.get("target").expect("target texture not found");
    let (ret_w, ret_h) = (reticle_tex.width as f32, reticle_tex.height as f32);
    commands.spawn((
        Reticle::new(config.reticle_range_x, config.reticle_range_y),
        Confined,
        MapPosition::new(center.x, center.y + RETICLE_START_OFFSET_Y),
        ZIndex(1),
        Sprite::centered("target", ret_w, ret_h),
        Scale::new(RETICLE_DISPLAY_SIZE / ret_w, RETICLE_DISPLAY_SIZE / ret_h),
        RigidBody::new(),
    ));

    // Bullet pool: allocated once, recycled through the Dormant marker.
    let bullet_tex = tex_store.get("bullet").expect("bullet texture not found");
    let (bullet_w, bullet_h) = (bullet_tex.width as f32, bullet_tex.height as f32);
    for _ in 0..config.bullet_pool_size {
        commands.spawn((
            Dormant,
            MapPosition::new(0.0, 0.0),
            ZIndex(1),
            Sprite::centered("bullet", bullet_w, bullet_h),
            Rotation::default(),
            Projectile::new(config.bullet_speed, config.bullet_lifetime),
        ));
    }

    log::info!(
        "Scene populated: player, reticle, {} pooled bullets",
        config.bullet_pool_size
    );
}

/// Per-frame scene orchestration, in source order:
/// face the player toward the reticle, follow the player with the camera,
/// mirror the player's velocity onto the reticle, then constrain the
/// player's speed. The reticle sync must read the velocity *before* the
/// constraint is applied.
pub fn update(
    config: Res<GameConfig>,
    window: Res<WindowSize>,
    mut camera: ResMut<Camera2DRes>,
    mut player_query: Query<
        (&MapPosition, &mut Rotation, &mut RigidBody),
        (With<Player>, Without<Reticle>),
    >,
    mut reticle_query: Query<(&MapPosition, &mut RigidBody), (With<Reticle>, Without<Player>)>,
) {
    let Ok((player_pos, mut player_rot, mut player_rb)) = player_query.single_mut() else {
        return;
    };
    let Ok((reticle_pos, mut reticle_rb)) = reticle_query.single_mut() else {
        return;
    };

    // Rotate the player to face the reticle.
    player_rot.radians = (reticle_pos.pos.y - player_pos.pos.y)
        .atan2(reticle_pos.pos.x - player_pos.pos.x);

    // Camera follows the player, centered in the window.
    camera.0.target = player_pos.pos;
    camera.0.offset = Vector2 {
        x: window.w as f32 * 0.5,
        y: window.h as f32 * 0.5,
    };

    // The reticle moves rigidly with the player between pointer events.
    reticle_rb.velocity = player_rb.velocity;

    player_rb.clamp_speed(config.player_max_speed);
}

/// Enter hook for the quitting state; the main loop observes the state and
/// stops.
pub fn quit_game() {
    log::info!("Quit requested, shutting down");
}
