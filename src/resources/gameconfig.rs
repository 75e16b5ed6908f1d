//! Game configuration resource.
//!
//! Holds the window size, physics constants, level layout and asset paths.
//! Values start from safe defaults and can be overridden from an INI file.
//! The configuration is inserted once at startup and never mutated after.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 512
//! height = 358
//! target_fps = 60
//! title = Dapper Dasher
//!
//! [physics]
//! gravity = 1000
//! jump_impulse = 600
//! nebula_velocity = -200
//! collision_padding = 50
//!
//! [level]
//! nebula_count = 6
//! nebula_spacing = 300
//!
//! [animation]
//! runner_frame_duration = 0.0833
//! nebula_frame_duration = 0.0625
//!
//! [assets]
//! runner = textures/scarfy.png
//! nebula = textures/12_nebula_spritesheet.png
//! background = textures/far-buildings.png
//! midground = textures/back-buildings.png
//! foreground = textures/foreground.png
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 512;
const DEFAULT_WINDOW_HEIGHT: u32 = 358;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_TITLE: &str = "Dapper Dasher";
const DEFAULT_GRAVITY: f32 = 1000.0;
const DEFAULT_JUMP_IMPULSE: f32 = 600.0;
const DEFAULT_NEBULA_VELOCITY: f32 = -200.0;
const DEFAULT_COLLISION_PADDING: f32 = 50.0;
const DEFAULT_NEBULA_COUNT: usize = 6;
const DEFAULT_NEBULA_SPACING: f32 = 300.0;
const DEFAULT_RUNNER_FRAME_DURATION: f32 = 1.0 / 12.0;
// Eight cells at 16 per second: one half-second cycle at any frame rate.
const DEFAULT_NEBULA_FRAME_DURATION: f32 = 1.0 / 16.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Upper bound on the number of nebulae a level can hold.
pub const NEBULA_CAPACITY: usize = 16;

/// Paths of the five textures the game loads at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetPaths {
    /// Runner sprite sheet, six cells in one row.
    pub runner: PathBuf,
    /// Nebula sprite sheet, eight by eight cells.
    pub nebula: PathBuf,
    pub background: PathBuf,
    pub midground: PathBuf,
    pub foreground: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            runner: PathBuf::from("textures/scarfy.png"),
            nebula: PathBuf::from("textures/12_nebula_spritesheet.png"),
            background: PathBuf::from("textures/far-buildings.png"),
            midground: PathBuf::from("textures/back-buildings.png"),
            foreground: PathBuf::from("textures/foreground.png"),
        }
    }
}

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels. The bottom edge is the floor.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Window title.
    pub title: String,
    /// Downward acceleration on the runner, pixels/s².
    pub gravity: f32,
    /// Upward speed given by a jump, pixels/s.
    pub jump_impulse: f32,
    /// Horizontal speed of nebulae and the finish line, pixels/s (negative is leftwards).
    pub nebula_velocity: f32,
    /// Inward padding applied to nebula colliders on each side.
    pub collision_padding: f32,
    /// Number of nebulae spawned.
    pub nebula_count: usize,
    /// Horizontal distance between consecutive nebulae.
    pub nebula_spacing: f32,
    /// Seconds per runner frame.
    pub runner_frame_duration: f32,
    /// Seconds per nebula frame.
    pub nebula_frame_duration: f32,
    /// Texture files.
    pub assets: AssetPaths,
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
            title: DEFAULT_TITLE.to_string(),
            gravity: DEFAULT_GRAVITY,
            jump_impulse: DEFAULT_JUMP_IMPULSE,
            nebula_velocity: DEFAULT_NEBULA_VELOCITY,
            collision_padding: DEFAULT_COLLISION_PADDING,
            nebula_count: DEFAULT_NEBULA_COUNT,
            nebula_spacing: DEFAULT_NEBULA_SPACING,
            runner_frame_duration: DEFAULT_RUNNER_FRAME_DURATION,
            nebula_frame_duration: DEFAULT_NEBULA_FRAME_DURATION,
            assets: AssetPaths::default(),
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
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config from {:?}: {}x{} window, fps={}, {} nebulae",
            self.config_path,
            self.window_width,
            self.window_height,
            self.target_fps,
            self.nebula_count
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, contents: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(contents.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        let get_uint = |section: &str, key: &str| config.getuint(section, key).ok().flatten();
        let get_float = |section: &str, key: &str| {
            config
                .getfloat(section, key)
                .ok()
                .flatten()
                .map(|v| v as f32)
        };
        let get_path = |section: &str, key: &str| config.get(section, key).map(PathBuf::from);

        // [window] section
        if let Some(width) = get_uint("window", "width") {
            self.window_width = width as u32;
        }
        if let Some(height) = get_uint("window", "height") {
            self.window_height = height as u32;
        }
        if let Some(fps) = get_uint("window", "target_fps") {
            self.target_fps = fps as u32;
        }
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }

        // [physics] section
        if let Some(gravity) = get_float("physics", "gravity") {
            self.gravity = gravity;
        }
        if let Some(jump) = get_float("physics", "jump_impulse") {
            self.jump_impulse = jump;
        }
        if let Some(velocity) = get_float("physics", "nebula_velocity") {
            self.nebula_velocity = velocity;
        }
        if let Some(padding) = get_float("physics", "collision_padding") {
            self.collision_padding = padding;
        }

        // [level] section
        if let Some(count) = get_uint("level", "nebula_count") {
            self.nebula_count = count as usize;
        }
        if let Some(spacing) = get_float("level", "nebula_spacing") {
            self.nebula_spacing = spacing;
        }

        // [animation] section
        if let Some(duration) = get_float("animation", "runner_frame_duration") {
            self.runner_frame_duration = duration;
        }
        if let Some(duration) = get_float("animation", "nebula_frame_duration") {
            self.nebula_frame_duration = duration;
        }

        // [assets] section
        if let Some(path) = get_path("assets", "runner") {
            self.assets.runner = path;
        }
        if let Some(path) = get_path("assets", "nebula") {
            self.assets.nebula = path;
        }
        if let Some(path) = get_path("assets", "background") {
            self.assets.background = path;
        }
        if let Some(path) = get_path("assets", "midground") {
            self.assets.midground = path;
        }
        if let Some(path) = get_path("assets", "foreground") {
            self.assets.foreground = path;
        }
    }

    /// Reject values the game cannot run with.
    pub fn validate(&self) -> Result<(), String> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(format!(
                "Window size must be positive, got {}x{}",
                self.window_width, self.window_height
            ));
        }
        if self.target_fps == 0 {
            return Err("target_fps must be positive".to_string());
        }
        if self.gravity <= 0.0 {
            return Err(format!("gravity must be positive, got {}", self.gravity));
        }
        if self.jump_impulse <= 0.0 {
            return Err(format!(
                "jump_impulse must be positive, got {}",
                self.jump_impulse
            ));
        }
        if self.runner_frame_duration <= 0.0 || self.nebula_frame_duration <= 0.0 {
            return Err(format!(
                "Frame durations must be positive, got runner={} nebula={}",
                self.runner_frame_duration, self.nebula_frame_duration
            ));
        }
        if self.nebula_count == 0 || self.nebula_count > NEBULA_CAPACITY {
            return Err(format!(
                "nebula_count must be in 1..={}, got {}",
                NEBULA_CAPACITY, self.nebula_count
            ));
        }
        if self.collision_padding < 0.0 {
            return Err(format!(
                "collision_padding must not be negative, got {}",
                self.collision_padding
            ));
        }
        Ok(())
    }
}
