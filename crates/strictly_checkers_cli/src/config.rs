//! CLI configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_checkers::Game;
use tracing::{debug, info, instrument};

/// Position a fresh session starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Opening {
    /// Twelve pieces per side on the first three ranks.
    #[default]
    Standard,
    /// The example study position.
    Example,
}

impl Opening {
    /// Creates a session in this opening.
    pub fn new_game(self) -> Game {
        match self {
            Opening::Standard => Game::new(),
            Opening::Example => Game::example(),
        }
    }
}

/// Configuration for the checkers CLI.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct CheckersConfig {
    /// Opening used by `show` when `--example` is not given.
    #[serde(default)]
    opening: Opening,

    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for CheckersConfig {
    fn default() -> Self {
        Self {
            opening: Opening::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl CheckersConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(opening = ?config.opening, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
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
    use std::io::Write;
    use strictly_checkers::Team;

    #[test]
    fn test_missing_path_uses_defaults() {
        let config = CheckersConfig::load(None).unwrap();
        assert_eq!(config.opening(), &Opening::Standard);
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_loads_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "opening = \"example\"").unwrap();

        let config = CheckersConfig::from_file(file.path()).unwrap();
        assert_eq!(config.opening(), &Opening::Example);
        assert_eq!(config.log_filter(), "info");

        let game = config.opening().new_game();
        assert_eq!(game.board().count(Team::White), 2);
    }

    #[test]
    fn test_rejects_unknown_opening() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "opening = \"italian\"").unwrap();

        let err = CheckersConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_reports_location() {
        let dir = tempfile::tempdir().unwrap();
        let err = CheckersConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
        assert!(err.file.ends_with("config.rs"));
    }
}
