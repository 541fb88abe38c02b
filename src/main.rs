//! Twinstick main entry point.
//!
//! A minimal top-down twin-stick shooter demo written in Rust using:
//! - **raylib** for windowing, graphics, and input
//! - **bevy_ecs** for entity-component-system architecture
//!
//! Move with WASD (acceleration with drag), aim with the captured mouse
//! pointer, fire with the left button. Q releases the pointer, F11 toggles
//! the debug overlay, Escape quits.
//!
//! # Main Loop
//!
//! 1. Initialize the raylib window, ECS world, and resources
//! 2. Register observers and state enter hooks, request the Setup state
//! 3. Run the per-frame schedule: input, reticle tracking, scene update,
//!    movement, projectiles, rendering
//! 4. Exit when the window closes or the Quitting state is entered
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod resources;
mod systems;

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use crate::events::fire::fire_observer;
use crate::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::input::{InputState, PointerState};
use crate::resources::systemsstore::SystemsStore;
use crate::resources::windowsize::WindowSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::gamestate::{check_pending_state, state_is_playing};
use crate::systems::input::update_input_state;
use crate::systems::inputaccelerationcontroller::acceleration_observer;
use crate::systems::mousecontroller::mouse_controller;
use crate::systems::movement::movement;
use crate::systems::projectile::projectile_system;
use crate::systems::render::render_system;
use crate::systems::time::update_world_time;

/// Top-down twin-stick shooter demo
#[derive(Parser)]
#[command(version, about = "Twin-stick shooter demo: WASD to move, mouse to aim, click to fire")]
struct Cli {
    /// Path to the configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // --------------- Config & raylib window ---------------
    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults

    let (window_width, window_height) = config.window_size();

    let mut builder = raylib::init();
    builder
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Twinstick");
    if config.vsync {
        builder.vsync();
    }
    if config.fullscreen {
        builder.fullscreen();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    // Escape is handled by the input system, not as the raylib exit key
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(config);
    world.insert_resource(InputState::default());
    world.insert_resource(PointerState::default());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_resource(WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    // State enter hooks, addressable by name from the transition observer.
    let mut systems_store = SystemsStore::new();
    let setup_system_id = world.register_system(game::setup);
    systems_store.insert("setup", setup_system_id);
    let enter_play_system_id = world.register_system(game::enter_play);
    systems_store.insert("enter_play", enter_play_system_id);
    let quit_game_system_id = world.register_system(game::quit_game);
    systems_store.insert("quit_game", quit_game_system_id);
    world.insert_resource(systems_store);

    world.spawn(Observer::new(observe_gamestate_change_event));
    world.spawn(Observer::new(switch_debug_observer));
    world.spawn(Observer::new(acceleration_observer));
    world.spawn(Observer::new(fire_observer));
    // Ensure the observers are registered before any system triggers events.
    world.flush();

    // Enter Setup immediately: loads assets and requests Playing.
    {
        let mut next_state = world.resource_mut::<NextGameState>();
        next_state.set(GameStates::Setup);
    }
    world.trigger(GameStateChangedEvent {});
    // Apply the setup hook's commands (camera, textures, bounds) before the
    // first frame runs.
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(check_pending_state.after(update_input_state));
    update.add_systems(mouse_controller.after(update_input_state));
    // Scene update runs before physics integration:
    // facing/camera/reticle-sync/constraint, then movement.
    update.add_systems(
        (game::update)
            .run_if(state_is_playing)
            .after(mouse_controller)
            .after(check_pending_state),
    );
    update.add_systems(movement.after(game::update));
    update.add_systems(projectile_system.after(movement));
    update.add_systems(render_system.after(projectile_system));

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !matches!(world.resource::<GameState>().get(), GameStates::Quitting)
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame

        // Window size may change due to resize
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        {
            let mut window_size = world.resource_mut::<WindowSize>();
            window_size.w = new_w;
            window_size.h = new_h;
        }
    }
}
