//! ECS systems that advance input, simulation, and rendering.
//!
//! Submodules overview
//! - [`gamestate`] – check for pending state transitions and trigger events
//! - [`input`] – read hardware input, update resources, emit edge events
//! - [`inputaccelerationcontroller`] – edge-triggered WASD acceleration observer
//! - [`mousecontroller`] – reticle pointer-delta tracking and window clamp
//! - [`movement`] – integrate accelerations/velocities, drag, world bounds
//! - [`projectile`] – integrate live bullets and park expired ones
//! - [`render`] – draw world and debug overlays using Raylib
//! - [`time`] – update simulation time and delta

pub mod gamestate;
pub mod input;
pub mod inputaccelerationcontroller;
pub mod mousecontroller;
pub mod movement;
pub mod projectile;
pub mod render;
pub mod time;
