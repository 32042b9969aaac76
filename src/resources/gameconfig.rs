//! Application configuration resource.
//!
//! Manages window and scene settings loaded from an INI configuration file.
//! Provides defaults for safe startup and methods to load configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! fullscreen = false
//! vsync = true
//! target_fps = 60
//!
//! [scene]
//! show_labels = true
//! show_lines = true
//! night_mode = false
//! grass_blades = 100
//! clouds = 5
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_FULLSCREEN: bool = false;
const DEFAULT_SHOW_LABELS: bool = true;
const DEFAULT_SHOW_LINES: bool = true;
const DEFAULT_NIGHT_MODE: bool = false;
const DEFAULT_GRASS_BLADES: u32 = 100;
const DEFAULT_CLOUDS: u32 = 5;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";
/// Window sizes are handed to raylib as `i32`.
const MAX_WINDOW_DIMENSION: u32 = i32::MAX as u32;

/// Read an unsigned key that must fit in `0..=max`. Out-of-range values are
/// skipped with a warning so the current value stays.
fn read_u32(config: &Ini, section: &str, key: &str, max: u32) -> Option<u32> {
    let raw = config.getuint(section, key).ok().flatten()?;
    match u32::try_from(raw) {
        Ok(value) if value <= max => Some(value),
        _ => {
            warn!("Ignoring [{}] {} = {}: out of range (max {})", section, key, raw, max);
            None
        }
    }
}

/// Application configuration resource.
///
/// Window values are applied by
/// [`apply_gameconfig_changes`](crate::systems::gameconfig::apply_gameconfig_changes)
/// whenever the resource changes. Scene values only matter at setup.
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
    /// Initial state of the "Show labels" toggle.
    pub show_labels: bool,
    /// Initial state of the "Show lines" toggle.
    pub show_lines: bool,
    /// Start with the night palette.
    pub night_mode: bool,
    /// Number of decorative grass blades scattered on the field.
    pub grass_blades: u32,
    /// Number of drifting clouds.
    pub clouds: u32,
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
            show_labels: DEFAULT_SHOW_LABELS,
            show_lines: DEFAULT_SHOW_LINES,
            night_mode: DEFAULT_NIGHT_MODE,
            grass_blades: DEFAULT_GRASS_BLADES,
            clouds: DEFAULT_CLOUDS,
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
            "Loaded config: {}x{} window, fps={}, vsync={}, fullscreen={}, labels={}, lines={}, night={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.fullscreen,
            self.show_labels,
            self.show_lines,
            self.night_mode
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
        // [window] section
        if let Some(width) = read_u32(config, "window", "width", MAX_WINDOW_DIMENSION) {
            self.window_width = width;
        }
        if let Some(height) = read_u32(config, "window", "height", MAX_WINDOW_DIMENSION) {
            self.window_height = height;
        }
        if let Some(fps) = read_u32(config, "window", "target_fps", u32::MAX) {
            self.target_fps = fps;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }
        if let Some(fullscreen) = config.getbool("window", "fullscreen").ok().flatten() {
            self.fullscreen = fullscreen;
        }

        // [scene] section
        if let Some(labels) = config.getbool("scene", "show_labels").ok().flatten() {
            self.show_labels = labels;
        }
        if let Some(lines) = config.getbool("scene", "show_lines").ok().flatten() {
            self.show_lines = lines;
        }
        if let Some(night) = config.getbool("scene", "night_mode").ok().flatten() {
            self.night_mode = night;
        }
        if let Some(blades) = read_u32(config, "scene", "grass_blades", u32::MAX) {
            self.grass_blades = blades;
        }
        if let Some(clouds) = read_u32(config, "scene", "clouds", u32::MAX) {
            self.clouds = clouds;
        }
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.window_size(), (1280, 720));
        assert_eq!(config.target_fps, 60);
        assert!(config.show_labels);
        assert!(config.show_lines);
        assert!(!config.night_mode);
        assert_eq!(config.grass_blades, 100);
        assert_eq!(config.clouds, 5);
    }

    #[test]
    fn test_partial_ini_keeps_defaults() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[window]\nwidth = 800\n\n[scene]\nnight_mode = true\nclouds = 2\n")
            .unwrap();
        assert_eq!(config.window_size(), (800, 720));
        assert!(config.night_mode);
        assert_eq!(config.clouds, 2);
        assert_eq!(config.grass_blades, 100);
        assert!(config.vsync);
    }

    #[test]
    fn test_out_of_range_values_are_ignored() {
        let mut config = GameConfig::new();
        config
            .load_from_str(
                "[window]\nwidth = 4294967296\nheight = 3000000000\ntarget_fps = 144\n\n[scene]\ngrass_blades = 99999999999\n",
            )
            .unwrap();
        assert_eq!(config.window_size(), (1280, 720));
        assert_eq!(config.target_fps, 144);
        assert_eq!(config.grass_blades, 100);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut config = GameConfig::with_path("./does/not/exist/config.ini");
        let err = config.load_from_file().unwrap_err();
        assert!(err.starts_with("Failed to load config file"));
        assert_eq!(config.window_width, 1280);
    }
}
