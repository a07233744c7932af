//! Pacing configuration for interactive play.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Timing and screen settings for a game in the terminal.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Pause after the welcome message.
    #[serde(default = "default_intro_delay_ms")]
    intro_delay_ms: u64,

    /// Pause after showing the board layout.
    #[serde(default = "default_layout_delay_ms")]
    layout_delay_ms: u64,

    /// Countdown start ("3...2...1..."); 0 disables the countdown.
    #[serde(default = "default_countdown_from")]
    countdown_from: u32,

    /// Pause between countdown steps.
    #[serde(default = "default_countdown_step_ms")]
    countdown_step_ms: u64,

    /// Pause before the computer's move is shown.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// Clear the terminal before drawing the board.
    #[serde(default = "default_clear_screen")]
    clear_screen: bool,
}

fn default_intro_delay_ms() -> u64 {
    2500
}

fn default_layout_delay_ms() -> u64 {
    2000
}

fn default_countdown_from() -> u32 {
    3
}

fn default_countdown_step_ms() -> u64 {
    1000
}

fn default_computer_delay_ms() -> u64 {
    500
}

fn default_clear_screen() -> bool {
    true
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            intro_delay_ms: default_intro_delay_ms(),
            layout_delay_ms: default_layout_delay_ms(),
            countdown_from: default_countdown_from(),
            countdown_step_ms: default_countdown_step_ms(),
            computer_delay_ms: default_computer_delay_ms(),
            clear_screen: default_clear_screen(),
        }
    }
}

impl PlayConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Drops every pause, keeping the screen setting.
    pub fn without_delays(self) -> Self {
        Self {
            intro_delay_ms: 0,
            layout_delay_ms: 0,
            countdown_step_ms: 0,
            computer_delay_ms: 0,
            ..self
        }
    }

    /// Overrides whether the screen is cleared between moves.
    pub fn with_clear_screen(self, clear_screen: bool) -> Self {
        Self {
            clear_screen,
            ..self
        }
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
    /// Creates a new configuration error with caller location tracking.
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
