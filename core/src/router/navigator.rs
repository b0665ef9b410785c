//! Navigator implementation for managing navigation state
//!
//! This module provides the core dispatcher: route resolution, navigation,
//! history traversal and location encoding.

use super::history::{HistoryStrategy, Location, NavigationState, DEFAULT_MAX_HISTORY};
use super::route::Route;
use super::table::RouteTable;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Structured error type for router operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    #[error("Route '{0}' not found")]
    NotFound(String),

    #[error("Duplicate route path '{0}'")]
    DuplicatePath(String),

    #[error("Route path '{0}' must start with '/'")]
    InvalidPath(String),

    #[error("Redirect target '{0}' is not a registered route")]
    InvalidRedirect(String),

    #[error("Location '{0}' is outside the router base")]
    ForeignLocation(String),
}

/// Type alias for router operation results
pub type RouterResult<T> = Result<T, RouterError>;

/// What to do when a navigation targets an unregistered path
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum NotFoundPolicy {
    /// Report `NotFound` and leave the current location untouched
    #[default]
    Ignore,
    /// Navigate to `to` instead
    Redirect { to: String },
}

/// Main navigator that owns the route table and the navigation state
#[derive(Debug, Clone)]
pub struct Navigator<V> {
    table: RouteTable<V>,
    strategy: HistoryStrategy,
    base: String,
    not_found: NotFoundPolicy,
    state: NavigationState,
}

impl<V> Navigator<V> {
    /// Create a navigator over `table` using `strategy`
    ///
    /// No route is active until the first navigation.
    pub fn new(table: RouteTable<V>, strategy: HistoryStrategy) -> Self {
        Self {
            table,
            strategy,
            base: String::new(),
            not_found: NotFoundPolicy::Ignore,
            state: NavigationState::new(DEFAULT_MAX_HISTORY),
        }
    }

    /// Set the base every location is encoded under
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    /// Set maximum history size
    pub fn with_max_history(mut self, max_history: usize) -> Self {
        self.state = NavigationState::new(max_history);
        self
    }

    /// Set the not-found policy, validating any redirect target
    pub fn with_not_found(mut self, policy: NotFoundPolicy) -> RouterResult<Self> {
        if let NotFoundPolicy::Redirect { to } = &policy {
            if !self.table.contains(to) {
                return Err(RouterError::InvalidRedirect(to.clone()));
            }
        }
        self.not_found = policy;
        Ok(self)
    }

    /// Resolve `path` to its view without navigating
    pub fn resolve(&self, path: &str) -> RouterResult<&V> {
        let result = self.table.resolve(path);
        debug!(path, found = result.is_ok(), "Resolved route");
        result
    }

    /// Navigate to `path`, recording a history entry
    pub fn navigate(&mut self, path: &str) -> RouterResult<&V> {
        let target = self.target_for(path)?;
        if self.state.push(target.clone()) {
            info!(path = %target, href = %self.encode(&target), "Navigated");
        } else {
            debug!(path = %target, "Already at route");
        }
        self.table.resolve(&target)
    }

    /// Navigate to `path`, replacing the current history entry
    pub fn replace(&mut self, path: &str) -> RouterResult<&V> {
        let target = self.target_for(path)?;
        info!(path = %target, "Replaced current route");
        self.state.replace(target.clone());
        self.table.resolve(&target)
    }

    /// Navigate to an externally supplied location
    pub fn sync_location(&mut self, href: &str) -> RouterResult<&V> {
        let path = self
            .strategy
            .decode(&self.base, href)
            .ok_or_else(|| RouterError::ForeignLocation(href.to_string()))?;
        self.navigate(&path)
    }

    /// Go back to the previous route
    pub fn go_back(&mut self) -> bool {
        let moved = self.state.go_back();
        if moved {
            info!(path = ?self.state.current(), "Went back");
        }
        moved
    }

    /// Go forward to the next route
    pub fn go_forward(&mut self) -> bool {
        let moved = self.state.go_forward();
        if moved {
            info!(path = ?self.state.current(), "Went forward");
        }
        moved
    }

    pub fn can_go_back(&self) -> bool {
        self.state.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.state.can_go_forward()
    }

    /// Get the current route path
    pub fn current_path(&self) -> Option<&str> {
        self.state.current()
    }

    /// Get the current externally visible location
    pub fn current_location(&self) -> Option<Location> {
        self.state.current().map(|path| Location {
            path: path.to_string(),
            href: self.encode(path),
        })
    }

    /// Get the current route
    pub fn active_route(&self) -> Option<&Route<V>> {
        self.state.current().and_then(|path| self.table.find(path))
    }

    /// Get the view of the current route
    pub fn active_view(&self) -> Option<&V> {
        self.active_route().map(|route| &route.view)
    }

    /// Encode `path` with this navigator's strategy and base
    pub fn encode(&self, path: &str) -> String {
        self.strategy.encode(&self.base, path)
    }

    pub fn table(&self) -> &RouteTable<V> {
        &self.table
    }

    pub fn strategy(&self) -> HistoryStrategy {
        self.strategy
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn not_found_policy(&self) -> &NotFoundPolicy {
        &self.not_found
    }

    /// Back stack, most recent first
    pub fn history(&self) -> &[String] {
        self.state.history()
    }

    /// Apply the not-found policy to `path`
    fn target_for(&self, path: &str) -> RouterResult<String> {
        if self.table.contains(path) {
            return Ok(path.to_string());
        }

        match &self.not_found {
            NotFoundPolicy::Ignore => {
                warn!(path, "No route matches path");
                Err(RouterError::NotFound(path.to_string()))
            }
            NotFoundPolicy::Redirect { to } => {
                warn!(path, to = %to, "No route matches path, redirecting");
                Ok(to.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Page {
        Start,
        Home,
        Queens,
    }

    fn navigator(strategy: HistoryStrategy) -> Navigator<Page> {
        let table = RouteTable::builder()
            .route("/", Page::Start)
            .route("/home", Page::Home)
            .route("/queens", Page::Queens)
            .build()
            .expect("Failed to build table");
        Navigator::new(table, strategy)
    }

    #[test]
    fn test_initial_state() {
        let nav = navigator(HistoryStrategy::Hash);
        assert_eq!(nav.current_path(), None);
        assert_eq!(nav.current_location(), None);
        assert_eq!(nav.active_view(), None);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_resolve_scenarios() {
        let nav = navigator(HistoryStrategy::Hash);
        assert_eq!(nav.resolve("/"), Ok(&Page::Start));
        assert_eq!(nav.resolve("/home"), Ok(&Page::Home));
        assert_eq!(nav.resolve("/queens"), Ok(&Page::Queens));
        assert_eq!(
            nav.resolve("/unknown"),
            Err(RouterError::NotFound("/unknown".to_string()))
        );
    }

    #[test]
    fn test_navigate_updates_hash_location() {
        let mut nav = navigator(HistoryStrategy::Hash);
        assert_eq!(nav.navigate("/queens"), Ok(&Page::Queens));

        let location = nav.current_location().expect("location after navigate");
        assert_eq!(location.path, "/queens");
        assert_eq!(location.href, "#/queens");
        assert_eq!(nav.active_view(), Some(&Page::Queens));
    }

    #[test]
    fn test_navigate_under_path_strategy() {
        let mut nav = navigator(HistoryStrategy::Path).with_base("/app");
        nav.navigate("/home").expect("navigate home");
        assert_eq!(
            nav.current_location().map(|l| l.href),
            Some("/app/home".to_string())
        );
    }

    #[test]
    fn test_unknown_path_is_ignored() {
        let mut nav = navigator(HistoryStrategy::Hash);
        nav.navigate("/home").expect("navigate home");

        assert_eq!(
            nav.navigate("/unknown"),
            Err(RouterError::NotFound("/unknown".to_string()))
        );
        assert_eq!(nav.current_path(), Some("/home"));
        assert_eq!(nav.active_view(), Some(&Page::Home));
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_unknown_path_redirects() {
        let mut nav = navigator(HistoryStrategy::Hash)
            .with_not_found(NotFoundPolicy::Redirect {
                to: "/".to_string(),
            })
            .expect("valid redirect");

        assert_eq!(nav.navigate("/unknown"), Ok(&Page::Start));
        assert_eq!(nav.current_location().map(|l| l.href), Some("#/".to_string()));
    }

    #[test]
    fn test_redirect_target_must_exist() {
        let result = navigator(HistoryStrategy::Hash).with_not_found(NotFoundPolicy::Redirect {
            to: "/404".to_string(),
        });
        assert!(matches!(result, Err(RouterError::InvalidRedirect(p)) if p == "/404"));
    }

    #[test]
    fn test_back_and_forward() {
        let mut nav = navigator(HistoryStrategy::Memory);
        nav.navigate("/").expect("navigate start");
        nav.navigate("/home").expect("navigate home");
        nav.navigate("/queens").expect("navigate queens");

        assert!(nav.go_back());
        assert_eq!(nav.active_view(), Some(&Page::Home));
        assert!(nav.go_back());
        assert_eq!(nav.active_view(), Some(&Page::Start));
        assert!(!nav.go_back());

        assert!(nav.go_forward());
        assert_eq!(nav.current_path(), Some("/home"));
    }

    #[test]
    fn test_replace_keeps_history_length() {
        let mut nav = navigator(HistoryStrategy::Hash);
        nav.navigate("/").expect("navigate start");
        nav.navigate("/home").expect("navigate home");
        assert_eq!(nav.replace("/queens"), Ok(&Page::Queens));

        assert_eq!(nav.history(), ["/".to_string()]);
        assert!(nav.go_back());
        assert_eq!(nav.current_path(), Some("/"));
    }

    #[test]
    fn test_sync_location() {
        let mut nav = navigator(HistoryStrategy::Hash).with_base("/index.html");
        assert_eq!(nav.sync_location("/index.html#/home"), Ok(&Page::Home));
        assert_eq!(nav.sync_location("/index.html"), Ok(&Page::Start));
        assert_eq!(
            nav.sync_location("/other.html#/home"),
            Err(RouterError::ForeignLocation("/other.html#/home".to_string()))
        );
    }
}
