//! # Queens Nav Core
//!
//! Core library for Queens Nav - the navigation table of a small puzzle
//! application and the Queens puzzle engine behind its `/queens` view.
//!
//! Paths resolve to views by exact match in table order; a [`Navigator`]
//! tracks the current location under a [`HistoryStrategy`].

// Core modules
pub mod app;
pub mod config;
pub mod error;
pub mod game;
pub mod router;

// Re-export commonly used types
pub use app::{app_routes, build_navigator, AppView};
pub use config::{AppConfig, GameSettings, RouterSettings};
pub use error::{ConfigError, Error, GameError, Result};
pub use game::{Puzzle, PuzzleGenerator};
pub use router::{
    HistoryStrategy, Location, Navigator, NotFoundPolicy, Route, RouteTable, RouterError,
    RouterHandle,
};

/// Current version of the queens-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Initialize tracing with a specific debug mode
///
/// Logs go to stderr so that stdout only carries command output.
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}
