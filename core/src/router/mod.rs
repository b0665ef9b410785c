//! Router module for mapping paths to views and managing navigation
//!
//! Routes are matched by exact path equality in table order. The navigator
//! keeps the current location and history under a configurable strategy.

pub mod handle;
pub mod history;
pub mod navigator;
pub mod route;
pub mod table;

// Re-export commonly used types
pub use handle::RouterHandle;
pub use history::{HistoryStrategy, Location, NavigationState, DEFAULT_MAX_HISTORY};
pub use navigator::{Navigator, NotFoundPolicy, RouterError, RouterResult};
pub use route::Route;
pub use table::{RouteTable, RouteTableBuilder};
