//! Minimal configuration module for Queens Nav core
//!
//! Only exports pure data types. All loading logic is in CLI layer.

pub mod types;

pub use types::{AppConfig, GameSettings, RouterSettings};
