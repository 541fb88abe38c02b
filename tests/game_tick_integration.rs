//! Game tick integration tests for movement, projectiles, aiming, and the
//! state machine.

use bevy_ecs::prelude::*;
use raylib::prelude::{Camera2D, Vector2};

use twinstick::components::confined::Confined;
use twinstick::components::inputcontrolled::AccelerationControlled;
use twinstick::components::mapposition::MapPosition;
use twinstick::components::player::Player;
use twinstick::components::projectile::{Dormant, Projectile};
use twinstick::components::reticle::Reticle;
use twinstick::components::rigidbody::RigidBody;
use twinstick::components::rotation::Rotation;
use twinstick::events::fire::{FireEvent, fire_observer};
use twinstick::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use twinstick::events::input::{InputAction, InputEvent};
use twinstick::game;
use twinstick::resources::camera2d::Camera2DRes;
use twinstick::resources::gameconfig::GameConfig;
use twinstick::resources::gamestate::{GameState, GameStates, NextGameState};
use twinstick::resources::input::{InputState, PointerState};
use twinstick::resources::systemsstore::SystemsStore;
use twinstick::resources::windowsize::WindowSize;
use twinstick::resources::worldbounds::WorldBounds;
use twinstick::resources::worldtime::WorldTime;
use twinstick::systems::gamestate::check_pending_state;
use twinstick::systems::inputaccelerationcontroller::acceleration_observer;
use twinstick::systems::mousecontroller::mouse_controller;
use twinstick::systems::movement::movement;
use twinstick::systems::projectile::projectile_system;

const EPSILON: f32 = 1e-3;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world(delta: f32) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta,
        time_scale: 1.0,
    });
    world
}

fn tick_movement(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(movement);
    schedule.run(world);
}

fn tick_projectiles(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(projectile_system);
    schedule.run(world);
}

fn tick_mouse_controller(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(mouse_controller);
    schedule.run(world);
}

fn tick_game_update(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(game::update);
    schedule.run(world);
}

// ==================== MOVEMENT ====================

#[test]
fn movement_integrates_velocity_into_position() {
    let mut world = make_world(0.5);
    let mut rb = RigidBody::new();
    rb.velocity = Vector2 { x: 10.0, y: -4.0 };

    let entity = world.spawn((MapPosition::new(0.0, 0.0), rb)).id();

    tick_movement(&mut world);

    let pos = world.get::<MapPosition>(entity).unwrap();
    assert!(approx_eq(pos.pos.x, 5.0));
    assert!(approx_eq(pos.pos.y, -2.0));
}

#[test]
fn movement_integrates_acceleration_into_velocity() {
    let mut world = make_world(1.0);
    let mut rb = RigidBody::new();
    rb.acceleration = Vector2 { x: 800.0, y: 0.0 };

    let entity = world.spawn((MapPosition::new(0.0, 0.0), rb)).id();

    tick_movement(&mut world);

    let rb = world.get::<RigidBody>(entity).unwrap();
    assert!(approx_eq(rb.velocity.x, 800.0));
    assert!(approx_eq(rb.velocity.y, 0.0));
}

#[test]
fn movement_drag_decays_velocity_without_reversing() {
    let mut world = make_world(0.1);
    let mut rb = RigidBody::with_drag(500.0, 500.0);
    rb.velocity = Vector2 { x: 80.0, y: -80.0 };

    let entity = world.spawn((MapPosition::new(0.0, 0.0), rb)).id();

    // 500 * 0.1 = 50 units of decay per tick, toward zero on both axes.
    tick_movement(&mut world);
    {
        let rb = world.get::<RigidBody>(entity).unwrap();
        assert!(approx_eq(rb.velocity.x, 30.0));
        assert!(approx_eq(rb.velocity.y, -30.0));
    }

    // Second tick would overshoot; drag must stop at zero.
    tick_movement(&mut world);
    {
        let rb = world.get::<RigidBody>(entity).unwrap();
        assert!(approx_eq(rb.velocity.x, 0.0));
        assert!(approx_eq(rb.velocity.y, 0.0));
    }
}

#[test]
fn movement_drag_skipped_while_accelerating() {
    let mut world = make_world(0.1);
    let mut rb = RigidBody::with_drag(500.0, 500.0);
    rb.velocity = Vector2 { x: 100.0, y: 0.0 };
    rb.acceleration = Vector2 { x: 800.0, y: 0.0 };

    let entity = world.spawn((MapPosition::new(0.0, 0.0), rb)).id();

    tick_movement(&mut world);

    let rb = world.get::<RigidBody>(entity).unwrap();
    // Pure integration, no drag: 100 + 800 * 0.1 = 180.
    assert!(approx_eq(rb.velocity.x, 180.0));
}

#[test]
fn movement_confined_entity_stops_at_world_bounds() {
    let mut world = make_world(1.0);
    world.insert_resource(WorldBounds::new(1600.0, 1200.0));

    let mut rb = RigidBody::new();
    rb.velocity = Vector2 { x: 500.0, y: -500.0 };

    let entity = world
        .spawn((MapPosition::new(1500.0, 100.0), rb, Confined))
        .id();

    tick_movement(&mut world);

    let pos = world.get::<MapPosition>(entity).unwrap();
    let rb = world.get::<RigidBody>(entity).unwrap();
    assert!(approx_eq(pos.pos.x, 1600.0));
    assert!(approx_eq(pos.pos.y, 0.0));
    assert!(approx_eq(rb.velocity.x, 0.0));
    assert!(approx_eq(rb.velocity.y, 0.0));
}

#[test]
fn movement_unconfined_entity_ignores_world_bounds() {
    let mut world = make_world(1.0);
    world.insert_resource(WorldBounds::new(1600.0, 1200.0));

    let mut rb = RigidBody::new();
    rb.velocity = Vector2 { x: 500.0, y: 0.0 };

    let entity = world.spawn((MapPosition::new(1500.0, 100.0), rb)).id();

    tick_movement(&mut world);

    let pos = world.get::<MapPosition>(entity).unwrap();
    assert!(approx_eq(pos.pos.x, 2000.0));
}

// ==================== PROJECTILES ====================

fn spawn_fired_bullet(world: &mut World, from: Vector2, target: Vector2) -> Entity {
    let mut projectile = Projectile::new(1000.0, 1.8);
    projectile.fire(from, target);
    world
        .spawn((MapPosition::new(from.x, from.y), projectile))
        .id()
}

#[test]
fn projectile_moves_along_its_trajectory() {
    let mut world = make_world(0.1);
    let entity = spawn_fired_bullet(
        &mut world,
        Vector2 { x: 800.0, y: 600.0 },
        Vector2 { x: 800.0, y: 700.0 },
    );

    tick_projectiles(&mut world);

    let pos = world.get::<MapPosition>(entity).unwrap();
    assert!(approx_eq(pos.pos.x, 800.0));
    assert!(approx_eq(pos.pos.y, 700.0)); // 1000 units/s straight down for 0.1s
    assert!(world.get::<Dormant>(entity).is_none());
}

#[test]
fn projectile_goes_dormant_after_lifetime() {
    let mut world = make_world(0.5);
    let entity = spawn_fired_bullet(
        &mut world,
        Vector2 { x: 0.0, y: 0.0 },
        Vector2 { x: 100.0, y: 0.0 },
    );

    // 0.5s per tick against a 1.8s lifetime: live after three ticks,
    // dormant after the fourth.
    for _ in 0..3 {
        tick_projectiles(&mut world);
        assert!(world.get::<Dormant>(entity).is_none());
    }
    tick_projectiles(&mut world);
    assert!(world.get::<Dormant>(entity).is_some());

    let projectile = world.get::<Projectile>(entity).unwrap();
    assert!(projectile.born > projectile.lifetime);
}

#[test]
fn projectile_dormant_is_not_simulated() {
    let mut world = make_world(0.5);
    let entity = spawn_fired_bullet(
        &mut world,
        Vector2 { x: 0.0, y: 0.0 },
        Vector2 { x: 100.0, y: 0.0 },
    );
    world.entity_mut(entity).insert(Dormant);

    tick_projectiles(&mut world);

    let pos = world.get::<MapPosition>(entity).unwrap();
    let projectile = world.get::<Projectile>(entity).unwrap();
    assert!(approx_eq(pos.pos.x, 0.0));
    assert!(approx_eq(projectile.born, 0.0));
}

// ==================== FIRING ====================

fn make_firing_world() -> (World, Entity) {
    let mut world = make_world(0.5);
    world.spawn((
        Player,
        MapPosition::new(800.0, 600.0),
        Rotation::new(0.75),
        RigidBody::new(),
    ));
    world.spawn((Reticle::new(800.0, 600.0), MapPosition::new(800.0, 700.0)));
    let bullet = world
        .spawn((
            Dormant,
            MapPosition::new(0.0, 0.0),
            Rotation::default(),
            Projectile::new(1000.0, 1.8),
        ))
        .id();
    world.add_observer(fire_observer);
    (world, bullet)
}

#[test]
fn fire_event_wakes_and_aims_a_dormant_bullet() {
    let (mut world, bullet) = make_firing_world();

    world.trigger(FireEvent {});
    world.flush();

    assert!(world.get::<Dormant>(bullet).is_none());

    let pos = world.get::<MapPosition>(bullet).unwrap();
    assert!(approx_eq(pos.pos.x, 800.0));
    assert!(approx_eq(pos.pos.y, 600.0));

    // Reticle below the player: positive y-speed, no x-speed.
    let projectile = world.get::<Projectile>(bullet).unwrap();
    assert!(projectile.velocity.y > 0.0);
    assert!(approx_eq(projectile.velocity.x, 0.0));
    assert!(approx_eq(projectile.born, 0.0));

    // Bullet rotation copies the player's.
    let rotation = world.get::<Rotation>(bullet).unwrap();
    assert!(approx_eq(rotation.radians, 0.75));
}

#[test]
fn fire_event_with_exhausted_pool_is_dropped() {
    let (mut world, bullet) = make_firing_world();

    world.trigger(FireEvent {});
    world.flush();
    assert!(world.get::<Dormant>(bullet).is_none());

    // Pool is empty now; a second shot must not disturb the live bullet.
    let before = *world.get::<Projectile>(bullet).unwrap();
    tick_projectiles(&mut world);
    world.trigger(FireEvent {});
    world.flush();

    let after = world.get::<Projectile>(bullet).unwrap();
    assert!(approx_eq(after.born, before.born + 0.5));
    assert!(world.get::<Dormant>(bullet).is_none());
}

#[test]
fn fire_event_recycles_expired_bullet() {
    let (mut world, bullet) = make_firing_world();

    world.trigger(FireEvent {});
    world.flush();

    // Run the bullet past its lifetime so it returns to the pool.
    for _ in 0..4 {
        tick_projectiles(&mut world);
    }
    assert!(world.get::<Dormant>(bullet).is_some());

    // The next shot reuses the same pooled entity with a fresh age.
    world.trigger(FireEvent {});
    world.flush();

    assert!(world.get::<Dormant>(bullet).is_none());
    let projectile = world.get::<Projectile>(bullet).unwrap();
    assert!(approx_eq(projectile.born, 0.0));
    let pos = world.get::<MapPosition>(bullet).unwrap();
    assert!(approx_eq(pos.pos.x, 800.0));
    assert!(approx_eq(pos.pos.y, 600.0));
}

// ==================== RETICLE TRACKING ====================

fn make_reticle_world(locked: bool, delta: Vector2) -> (World, Entity) {
    let mut world = make_world(0.0);
    world.insert_resource(PointerState { locked, delta });
    world.spawn((Player, MapPosition::new(800.0, 600.0)));
    let reticle = world
        .spawn((Reticle::new(800.0, 600.0), MapPosition::new(800.0, 700.0)))
        .id();
    (world, reticle)
}

#[test]
fn reticle_accumulates_pointer_deltas_while_locked() {
    let (mut world, reticle) = make_reticle_world(true, Vector2 { x: 10.0, y: -20.0 });

    tick_mouse_controller(&mut world);
    tick_mouse_controller(&mut world);

    let pos = world.get::<MapPosition>(reticle).unwrap();
    assert!(approx_eq(pos.pos.x, 820.0));
    assert!(approx_eq(pos.pos.y, 660.0));
}

#[test]
fn reticle_never_leaves_window_around_player() {
    let (mut world, reticle) = make_reticle_world(true, Vector2 { x: 300.0, y: 250.0 });

    for _ in 0..50 {
        tick_mouse_controller(&mut world);

        let pos = world.get::<MapPosition>(reticle).unwrap();
        assert!((pos.pos.x - 800.0).abs() <= 800.0 + EPSILON);
        assert!((pos.pos.y - 600.0).abs() <= 600.0 + EPSILON);
    }

    // Saturated at the window corner.
    let pos = world.get::<MapPosition>(reticle).unwrap();
    assert!(approx_eq(pos.pos.x, 1600.0));
    assert!(approx_eq(pos.pos.y, 1200.0));
}

#[test]
fn reticle_ignores_deltas_while_unlocked() {
    let (mut world, reticle) = make_reticle_world(false, Vector2 { x: 300.0, y: 250.0 });

    tick_mouse_controller(&mut world);

    let pos = world.get::<MapPosition>(reticle).unwrap();
    assert!(approx_eq(pos.pos.x, 800.0));
    assert!(approx_eq(pos.pos.y, 700.0));
}

// ==================== ACCELERATION STATE MACHINE ====================

fn make_acceleration_world() -> (World, Entity) {
    let mut world = make_world(0.0);
    world.insert_resource(InputState::default());
    let player = world
        .spawn((
            Player,
            MapPosition::new(0.0, 0.0),
            RigidBody::with_drag(500.0, 500.0),
            AccelerationControlled::symmetric(800.0),
        ))
        .id();
    world.add_observer(acceleration_observer);
    (world, player)
}

fn press(world: &mut World, action: InputAction) {
    world.trigger(InputEvent {
        action,
        pressed: true,
    });
    world.flush();
}

fn release(world: &mut World, action: InputAction) {
    world.trigger(InputEvent {
        action,
        pressed: false,
    });
    world.flush();
}

#[test]
fn keydown_sets_axis_acceleration() {
    let (mut world, player) = make_acceleration_world();

    world.resource_mut::<InputState>().maindirection_up.active = true;
    press(&mut world, InputAction::MainDirectionUp);

    let rb = world.get::<RigidBody>(player).unwrap();
    assert!(approx_eq(rb.acceleration.y, -800.0));
    assert!(approx_eq(rb.acceleration.x, 0.0));
}

#[test]
fn keyup_zeroes_axis_when_opposing_key_is_up() {
    let (mut world, player) = make_acceleration_world();

    world.resource_mut::<InputState>().maindirection_right.active = true;
    press(&mut world, InputAction::MainDirectionRight);
    {
        let rb = world.get::<RigidBody>(player).unwrap();
        assert!(approx_eq(rb.acceleration.x, 800.0));
    }

    world.resource_mut::<InputState>().maindirection_right.active = false;
    release(&mut world, InputAction::MainDirectionRight);

    let rb = world.get::<RigidBody>(player).unwrap();
    assert!(approx_eq(rb.acceleration.x, 0.0));
}

#[test]
fn keyup_keeps_axis_while_opposing_key_is_held() {
    let (mut world, player) = make_acceleration_world();

    // Hold S, then W on top of it: last press wins the axis.
    world.resource_mut::<InputState>().maindirection_down.active = true;
    press(&mut world, InputAction::MainDirectionDown);
    world.resource_mut::<InputState>().maindirection_up.active = true;
    press(&mut world, InputAction::MainDirectionUp);

    // Release S while W is still held: acceleration stays at W's value.
    world.resource_mut::<InputState>().maindirection_down.active = false;
    release(&mut world, InputAction::MainDirectionDown);

    let rb = world.get::<RigidBody>(player).unwrap();
    assert!(approx_eq(rb.acceleration.y, -800.0));

    // Releasing W with S already up finally zeroes the axis.
    world.resource_mut::<InputState>().maindirection_up.active = false;
    release(&mut world, InputAction::MainDirectionUp);

    let rb = world.get::<RigidBody>(player).unwrap();
    assert!(approx_eq(rb.acceleration.y, 0.0));
}

// ==================== PER-FRAME SCENE UPDATE ====================

fn make_scene_world(player_velocity: Vector2) -> (World, Entity, Entity) {
    let mut world = make_world(0.0);
    world.insert_resource(GameConfig::new());
    world.insert_resource(WindowSize { w: 800, h: 600 });
    world.insert_resource(Camera2DRes(Camera2D {
        target: Vector2 { x: 0.0, y: 0.0 },
        offset: Vector2 { x: 0.0, y: 0.0 },
        rotation: 0.0,
        zoom: 0.5,
    }));

    let mut rb = RigidBody::new();
    rb.velocity = player_velocity;
    let player = world
        .spawn((
            Player,
            MapPosition::new(800.0, 600.0),
            Rotation::default(),
            rb,
        ))
        .id();
    let reticle = world
        .spawn((
            Reticle::new(800.0, 600.0),
            MapPosition::new(900.0, 700.0),
            RigidBody::new(),
        ))
        .id();
    (world, player, reticle)
}

#[test]
fn scene_update_faces_player_toward_reticle() {
    let (mut world, player, _) = make_scene_world(Vector2 { x: 0.0, y: 0.0 });

    tick_game_update(&mut world);

    let rotation = world.get::<Rotation>(player).unwrap();
    // Reticle is down-right at 45 degrees.
    assert!(approx_eq(rotation.radians, std::f32::consts::FRAC_PI_4));
}

#[test]
fn scene_update_mirrors_velocity_before_constraining() {
    // Player is over the 500 max speed: reticle must receive the raw
    // velocity, the player the constrained one.
    let (mut world, player, reticle) = make_scene_world(Vector2 { x: 600.0, y: 800.0 });

    tick_game_update(&mut world);

    let reticle_rb = world.get::<RigidBody>(reticle).unwrap();
    assert!(approx_eq(reticle_rb.velocity.x, 600.0));
    assert!(approx_eq(reticle_rb.velocity.y, 800.0));

    let player_rb = world.get::<RigidBody>(player).unwrap();
    assert!(approx_eq(player_rb.velocity.x, 300.0));
    assert!(approx_eq(player_rb.velocity.y, 400.0));
    assert!(approx_eq(player_rb.speed_sq().sqrt(), 500.0));
}

#[test]
fn scene_update_keeps_slow_player_velocity_intact() {
    let (mut world, player, _) = make_scene_world(Vector2 { x: 100.0, y: -50.0 });

    tick_game_update(&mut world);

    let player_rb = world.get::<RigidBody>(player).unwrap();
    assert!(approx_eq(player_rb.velocity.x, 100.0));
    assert!(approx_eq(player_rb.velocity.y, -50.0));
}

#[test]
fn scene_update_camera_follows_player() {
    let (mut world, _, _) = make_scene_world(Vector2 { x: 0.0, y: 0.0 });

    tick_game_update(&mut world);

    let camera = world.resource::<Camera2DRes>();
    assert!(approx_eq(camera.0.target.x, 800.0));
    assert!(approx_eq(camera.0.target.y, 600.0));
    assert!(approx_eq(camera.0.offset.x, 400.0));
    assert!(approx_eq(camera.0.offset.y, 300.0));
}

// ==================== GAME STATE MACHINE ====================

#[derive(Resource, Default)]
struct HookLog {
    setup_runs: u32,
    play_runs: u32,
}

#[test]
fn state_transition_runs_registered_enter_hooks() {
    let mut world = World::new();
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.init_resource::<HookLog>();

    fn setup_hook(mut log: ResMut<HookLog>, mut next_state: ResMut<NextGameState>) {
        log.setup_runs += 1;
        next_state.set(GameStates::Playing);
    }
    fn play_hook(mut log: ResMut<HookLog>) {
        log.play_runs += 1;
    }

    let mut systems_store = SystemsStore::new();
    let setup_id = world.register_system(setup_hook);
    systems_store.insert("setup", setup_id);
    let play_id = world.register_system(play_hook);
    systems_store.insert("enter_play", play_id);
    world.insert_resource(systems_store);

    world.add_observer(observe_gamestate_change_event);
    world.flush();

    world.resource_mut::<NextGameState>().set(GameStates::Setup);
    world.trigger(GameStateChangedEvent {});
    world.flush();

    assert_eq!(world.resource::<HookLog>().setup_runs, 1);
    assert!(matches!(
        world.resource::<GameState>().get(),
        GameStates::Setup
    ));

    // The setup hook requested Playing; the pending check applies it.
    let mut schedule = Schedule::default();
    schedule.add_systems(check_pending_state);
    schedule.run(&mut world);
    world.flush();

    assert_eq!(world.resource::<HookLog>().play_runs, 1);
    assert!(matches!(
        world.resource::<GameState>().get(),
        GameStates::Playing
    ));
}
