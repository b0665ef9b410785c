//! Minimal configuration types for Queens Nav core
//!
//! Core only accepts fully resolved, validated configuration.
//! All discovery, loading, and merging happens in CLI layer.

use crate::error::ConfigError;
use crate::game::is_playable_size;
use crate::router::{HistoryStrategy, NotFoundPolicy, DEFAULT_MAX_HISTORY};
use serde::{Deserialize, Serialize};

/// Navigation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterSettings {
    /// How the current location is represented
    pub history: HistoryStrategy,
    /// Base that locations are encoded under
    pub base: String,
    /// Path navigated to at startup
    pub initial_path: String,
    /// Maximum number of history entries
    pub max_history: usize,
    /// Behaviour for unregistered paths
    pub not_found: NotFoundPolicy,
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            history: HistoryStrategy::Hash,
            base: String::new(),
            initial_path: "/".to_string(),
            max_history: DEFAULT_MAX_HISTORY,
            not_found: NotFoundPolicy::Ignore,
        }
    }
}

/// Puzzle generation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Board width and height
    pub grid_size: usize,
    /// Restarts allowed before giving up on a unique puzzle
    pub max_attempts: usize,
    /// Fixed seed for reproducible puzzles
    pub seed: Option<u64>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            grid_size: 8,
            max_attempts: 200,
            seed: None,
        }
    }
}

/// A fully resolved application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub router: RouterSettings,
    pub game: GameSettings,
}

impl AppConfig {
    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json(content: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.router.initial_path.starts_with('/') {
            return Err(ConfigError::InvalidValue {
                field: "router.initial_path".to_string(),
                value: self.router.initial_path.clone(),
            });
        }

        if let NotFoundPolicy::Redirect { to } = &self.router.not_found {
            if !to.starts_with('/') {
                return Err(ConfigError::InvalidValue {
                    field: "router.not_found.to".to_string(),
                    value: to.clone(),
                });
            }
        }

        if !is_playable_size(self.game.grid_size) {
            return Err(ConfigError::InvalidValue {
                field: "game.grid_size".to_string(),
                value: self.game.grid_size.to_string(),
            });
        }

        if self.game.max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "game.max_attempts".to_string(),
                value: "0".to_string(),
            });
        }

        Ok(())
    }
}
