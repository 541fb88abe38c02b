//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup; missing files or keys fall back to them.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 600
//! fullscreen = false
//! vsync = true
//! target_fps = 120
//!
//! [gameplay]
//! world_width = 1600.0
//! world_height = 1200.0
//! camera_zoom = 0.5
//! player_acceleration = 800.0
//! player_drag = 500.0
//! player_max_speed = 500.0
//! reticle_range_x = 800.0
//! reticle_range_y = 600.0
//! bullet_speed = 1000.0
//! bullet_lifetime = 1.8
//! bullet_pool_size = 64
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_FULLSCREEN: bool = false;

const DEFAULT_WORLD_WIDTH: f32 = 1600.0;
const DEFAULT_WORLD_HEIGHT: f32 = 1200.0;
const DEFAULT_CAMERA_ZOOM: f32 = 0.5;
const DEFAULT_PLAYER_ACCELERATION: f32 = 800.0;
const DEFAULT_PLAYER_DRAG: f32 = 500.0;
const DEFAULT_PLAYER_MAX_SPEED: f32 = 500.0;
const DEFAULT_RETICLE_RANGE_X: f32 = 800.0;
const DEFAULT_RETICLE_RANGE_Y: f32 = 600.0;
const DEFAULT_BULLET_SPEED: f32 = 1000.0;
const DEFAULT_BULLET_LIFETIME: f32 = 1.8;
const DEFAULT_BULLET_POOL_SIZE: u32 = 64;

const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Window and gameplay tuning loaded from the INI file.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Start in fullscreen mode.
    pub fullscreen: bool,

    /// Playfield width in world units.
    pub world_width: f32,
    /// Playfield height in world units.
    pub world_height: f32,
    /// Camera zoom factor.
    pub camera_zoom: f32,
    /// Acceleration set on a held movement key, world units/s².
    pub player_acceleration: f32,
    /// Per-axis drag opposing player velocity, world units/s².
    pub player_drag: f32,
    /// Speed cap enforced on the player every frame, world units/s.
    pub player_max_speed: f32,
    /// Horizontal half-width of the reticle window around the player.
    pub reticle_range_x: f32,
    /// Vertical half-height of the reticle window around the player.
    pub reticle_range_y: f32,
    /// Bullet speed in world units/s.
    pub bullet_speed: f32,
    /// Seconds a fired bullet stays live.
    pub bullet_lifetime: f32,
    /// Number of bullets pre-allocated in the recyclable pool.
    pub bullet_pool_size: u32,

    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            fullscreen: DEFAULT_FULLSCREEN,
            world_width: DEFAULT_WORLD_WIDTH,
            world_height: DEFAULT_WORLD_HEIGHT,
            camera_zoom: DEFAULT_CAMERA_ZOOM,
            player_acceleration: DEFAULT_PLAYER_ACCELERATION,
            player_drag: DEFAULT_PLAYER_DRAG,
            player_max_speed: DEFAULT_PLAYER_MAX_SPEED,
            reticle_range_x: DEFAULT_RETICLE_RANGE_X,
            reticle_range_y: DEFAULT_RETICLE_RANGE_Y,
            bullet_speed: DEFAULT_BULLET_SPEED,
            bullet_lifetime: DEFAULT_BULLET_LIFETIME,
            bullet_pool_size: DEFAULT_BULLET_POOL_SIZE,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values. Returns an
    /// error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }
        if let Some(fullscreen) = config.getbool("window", "fullscreen").ok().flatten() {
            self.fullscreen = fullscreen;
        }

        // [gameplay] section
        if let Some(v) = config.getfloat("gameplay", "world_width").ok().flatten() {
            self.world_width = v as f32;
        }
        if let Some(v) = config.getfloat("gameplay", "world_height").ok().flatten() {
            self.world_height = v as f32;
        }
        if let Some(v) = config.getfloat("gameplay", "camera_zoom").ok().flatten() {
            self.camera_zoom = v as f32;
        }
        if let Some(v) = config
            .getfloat("gameplay", "player_acceleration")
            .ok()
            .flatten()
        {
            self.player_acceleration = v as f32;
        }
        if let Some(v) = config.getfloat("gameplay", "player_drag").ok().flatten() {
            self.player_drag = v as f32;
        }
        if let Some(v) = config
            .getfloat("gameplay", "player_max_speed")
            .ok()
            .flatten()
        {
            self.player_max_speed = v as f32;
        }
        if let Some(v) = config.getfloat("gameplay", "reticle_range_x").ok().flatten() {
            self.reticle_range_x = v as f32;
        }
        if let Some(v) = config.getfloat("gameplay", "reticle_range_y").ok().flatten() {
            self.reticle_range_y = v as f32;
        }
        if let Some(v) = config.getfloat("gameplay", "bullet_speed").ok().flatten() {
            self.bullet_speed = v as f32;
        }
        if let Some(v) = config.getfloat("gameplay", "bullet_lifetime").ok().flatten() {
            self.bullet_lifetime = v as f32;
        }
        if let Some(v) = config
            .getuint("gameplay", "bullet_pool_size")
            .ok()
            .flatten()
        {
            self.bullet_pool_size = v as u32;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, world {}x{}, zoom={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.world_width,
            self.world_height,
            self.camera_zoom
        );

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
