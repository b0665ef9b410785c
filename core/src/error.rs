//! Error types and handling for Queens Nav Core

use thiserror::Error;

pub use crate::router::RouterError;

/// Result type alias for Queens Nav operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Queens Nav Core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Route table and navigation errors
    #[error("Router error: {0}")]
    Router(#[from] RouterError),

    /// Puzzle generation errors
    #[error("Game error: {0}")]
    Game(#[from] GameError),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },
}

/// Puzzle generation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Unsupported grid size: {size}")]
    UnsupportedSize { size: usize },

    #[error("No queen placement exists for a {size}x{size} grid")]
    NoPlacement { size: usize },

    #[error("Could not build a uniquely solvable puzzle after {attempts} attempts")]
    Exhausted { attempts: usize },
}
