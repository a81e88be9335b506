//! Application configuration loaded from TOML.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Config file read from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "solo_games.toml";

/// Settings for the terminal game.
#[derive(Debug, Clone, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct AppConfig {
    /// Pause before the computer answers a move, in milliseconds.
    #[serde(default = "default_opponent_delay_ms")]
    opponent_delay_ms: u64,

    /// File that receives log output while the terminal UI is running.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Seed for the computer opponent and the confetti. Random when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Confetti shown when the player wins.
    #[serde(default)]
    celebration: CelebrationSettings,
}

/// Confetti burst parameters.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct CelebrationSettings {
    /// Particles per burst.
    #[serde(default = "default_particle_count")]
    particle_count: usize,

    /// Launch cone width in degrees, centered straight up.
    #[serde(default = "default_spread")]
    spread: f32,

    /// Vertical launch point as a fraction of screen height (0 = top).
    #[serde(default = "default_origin_y")]
    origin_y: f32,

    /// Particle colors as `#rrggbb`.
    #[serde(default = "default_colors")]
    colors: Vec<String>,

    /// Ticks a particle stays on screen.
    #[serde(default = "default_frames")]
    frames: u16,
}

fn default_opponent_delay_ms() -> u64 {
    500
}

fn default_log_file() -> PathBuf {
    PathBuf::from("solo_games.log")
}

fn default_particle_count() -> usize {
    100
}

fn default_spread() -> f32 {
    70.0
}

fn default_origin_y() -> f32 {
    0.6
}

fn default_colors() -> Vec<String> {
    vec![
        "#ff0000".to_string(),
        "#00ff00".to_string(),
        "#0000ff".to_string(),
    ]
}

fn default_frames() -> u16 {
    40
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            opponent_delay_ms: default_opponent_delay_ms(),
            log_file: default_log_file(),
            seed: None,
            celebration: CelebrationSettings::default(),
        }
    }
}

impl Default for CelebrationSettings {
    fn default() -> Self {
        Self {
            particle_count: default_particle_count(),
            spread: default_spread(),
            origin_y: default_origin_y(),
            colors: default_colors(),
            frames: default_frames(),
        }
    }
}

impl AppConfig {
    /// Parses and validates TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.celebration.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(delay_ms = config.opponent_delay_ms, "Config loaded successfully");
        Ok(config)
    }

    /// Reads `path`, or [`DEFAULT_CONFIG_FILE`] if present, or falls back to defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Opponent delay as a [`Duration`](std::time::Duration).
    pub fn opponent_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.opponent_delay_ms)
    }
}

impl CelebrationSettings {
    /// Checks the launch geometry and returns the parsed palette.
    pub fn validate(&self) -> Result<Vec<Color>, ConfigError> {
        if !(0.0..=1.0).contains(&self.origin_y) {
            return Err(ConfigError::new(format!(
                "celebration.origin_y must be between 0 and 1, got {}",
                self.origin_y
            )));
        }
        if !(0.0..=360.0).contains(&self.spread) {
            return Err(ConfigError::new(format!(
                "celebration.spread must be between 0 and 360 degrees, got {}",
                self.spread
            )));
        }
        self.palette()
    }

    /// Parsed particle colors.
    pub fn palette(&self) -> Result<Vec<Color>, ConfigError> {
        if self.colors.is_empty() {
            return Err(ConfigError::new("celebration.colors must not be empty".to_string()));
        }
        self.colors
            .iter()
            .map(|c| {
                Color::from_str(c)
                    .map_err(|_| ConfigError::new(format!("Invalid celebration color: {}", c)))
            })
            .collect()
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(*config.opponent_delay_ms(), 500);
        assert_eq!(*config.celebration().particle_count(), 100);
        assert_eq!(config.celebration().colors().len(), 3);
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_toml(
            r##"
            opponent_delay_ms = 0
            seed = 9

            [celebration]
            particle_count = 10
            colors = ["#ffffff"]
            "##,
        )
        .unwrap();

        assert_eq!(*config.opponent_delay_ms(), 0);
        assert_eq!(*config.seed(), Some(9));
        assert_eq!(*config.celebration().particle_count(), 10);
        assert_eq!(*config.celebration().frames(), 40);
        assert_eq!(config.celebration().palette().unwrap(), vec![Color::Rgb(255, 255, 255)]);
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let err = AppConfig::from_toml("[celebration]\ncolors = [\"not-a-color-at-all\"]").unwrap_err();
        assert!(err.message.contains("not-a-color-at-all"));
    }

    #[test]
    fn test_origin_out_of_range_is_rejected() {
        assert!(AppConfig::from_toml("[celebration]\norigin_y = 1.5").is_err());
    }

    #[test]
    fn test_bad_spread_is_rejected() {
        for spread in ["-10.0", "360.5", "nan", "inf"] {
            let toml = format!("[celebration]\nspread = {}", spread);
            let err = AppConfig::from_toml(&toml).unwrap_err();
            assert!(err.message.contains("spread"), "{spread}: {err}");
        }
        assert!(AppConfig::from_toml("[celebration]\nspread = 0.0").is_ok());
        assert!(AppConfig::from_toml("[celebration]\nspread = 360.0").is_ok());
    }

    #[test]
    fn test_setters_override() {
        let config = AppConfig::default()
            .with_opponent_delay_ms(25)
            .with_seed(Some(3));
        assert_eq!(config.opponent_delay(), std::time::Duration::from_millis(25));
        assert_eq!(*config.seed(), Some(3));
    }
}
