//! ECS resources made available to systems.
//!
//! Overview
//! - [`camera2d`] – shared 2D camera used for world/screen transforms
//! - [`debugmode`] – presence toggles optional debug overlays and logs
//! - [`gameconfig`] – window and gameplay tuning loaded from an INI file
//! - [`gamestate`] – authoritative and pending high-level game state
//! - [`input`] – per-frame keyboard state and captured-pointer state
//! - [`systemsstore`] – registry of dynamically-lookup-able systems by name
//! - [`texturestore`] – loaded textures keyed by string IDs
//! - [`windowsize`] – current window dimensions in pixels
//! - [`worldbounds`] – playfield rectangle confining player and reticle
//! - [`worldtime`] – simulation time and delta

pub mod camera2d;
pub mod debugmode;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod systemsstore;
pub mod texturestore;
pub mod windowsize;
pub mod worldbounds;
pub mod worldtime;
