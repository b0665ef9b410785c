//! Application route table
//!
//! The three views of the puzzle app and the paths that activate them.

use crate::config::RouterSettings;
use crate::router::{Navigator, Route, RouteTable, RouterResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Views the application can activate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppView {
    StartPage,
    HomePage,
    Queens,
}

impl AppView {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppView::StartPage => "StartPage",
            AppView::HomePage => "HomePage",
            AppView::Queens => "Queens",
        }
    }

    pub fn all() -> [AppView; 3] {
        [AppView::StartPage, AppView::HomePage, AppView::Queens]
    }
}

impl fmt::Display for AppView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// The application's route table
pub fn app_routes() -> RouterResult<RouteTable<AppView>> {
    RouteTable::builder()
        .add(
            Route::new("/", AppView::StartPage)
                .with_name("Start")
                .with_description("Welcome screen"),
        )
        .add(
            Route::new("/home", AppView::HomePage)
                .with_name("Home")
                .with_description("Puzzle menu"),
        )
        .add(
            Route::new("/queens", AppView::Queens)
                .with_name("Queens")
                .with_description("Place one queen per row, column and region"),
        )
        .build()
}

/// Build the application navigator from settings
pub fn build_navigator(settings: &RouterSettings) -> RouterResult<Navigator<AppView>> {
    Navigator::new(app_routes()?, settings.history)
        .with_base(settings.base.clone())
        .with_max_history(settings.max_history)
        .with_not_found(settings.not_found.clone())
}
