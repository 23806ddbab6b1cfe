//! Game configuration
//!
//! All tunables default to the classic constants in [`crate::types`]. A TOML
//! file only needs the keys it wants to override:
//!
//! ```toml
//! gravity_interval_ms = 500
//! score_table = [40, 100, 300, 1200]
//! ```

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{
    BOARD_HEIGHT, BOARD_WIDTH, GRAVITY_INTERVAL_MS, INITIAL_REPEAT_DELAY_MS, LINES_PER_LEVEL,
    LINE_SCORES, REPEAT_INTERVAL_MS,
};

/// Smallest board side that still fits every piece in every rotation.
const MIN_BOARD_SIDE: u16 = 4;

/// Largest board side; keeps terminal layout arithmetic well inside `u16`.
pub const MAX_BOARD_SIDE: u16 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_width: u16,
    pub board_height: u16,
    pub gravity_interval_ms: u64,
    pub initial_repeat_delay_ms: u64,
    pub repeat_interval_ms: u64,
    /// `score_table[n - 1]` is awarded for clearing `n` rows in one lock.
    pub score_table: Vec<u32>,
    pub lines_per_level: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            gravity_interval_ms: GRAVITY_INTERVAL_MS,
            initial_repeat_delay_ms: INITIAL_REPEAT_DELAY_MS,
            repeat_interval_ms: REPEAT_INTERVAL_MS,
            score_table: LINE_SCORES.to_vec(),
            lines_per_level: LINES_PER_LEVEL,
        }
    }
}

impl GameConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_width < MIN_BOARD_SIDE || self.board_height < MIN_BOARD_SIDE {
            return Err(ConfigError::Invalid(format!(
                "board must be at least {0}x{0}, got {1}x{2}",
                MIN_BOARD_SIDE, self.board_width, self.board_height
            )));
        }
        if self.board_width > MAX_BOARD_SIDE || self.board_height > MAX_BOARD_SIDE {
            return Err(ConfigError::Invalid(format!(
                "board must be at most {0}x{0}, got {1}x{2}",
                MAX_BOARD_SIDE, self.board_width, self.board_height
            )));
        }
        if self.gravity_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "gravity_interval_ms must be positive".into(),
            ));
        }
        if self.repeat_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "repeat_interval_ms must be positive".into(),
            ));
        }
        if self.score_table.is_empty() {
            return Err(ConfigError::Invalid("score_table must not be empty".into()));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "config i/o error: {}", err),
            ConfigError::Parse(err) => write!(f, "config parse error: {}", err),
            ConfigError::Serialize(err) => write!(f, "config serialize error: {}", err),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            ConfigError::Serialize(err) => Some(err),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialize(err)
    }
}
