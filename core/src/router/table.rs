//! Ordered route table
//!
//! Insertion order is match priority. Paths are validated once at
//! construction and the table is read-only afterwards.

use super::navigator::{RouterError, RouterResult};
use super::route::Route;
use std::collections::HashSet;

/// Ordered, immutable collection of routes
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    routes: Vec<Route<V>>,
}

impl<V> RouteTable<V> {
    /// Build a table from routes, rejecting duplicate or malformed paths
    pub fn new(routes: Vec<Route<V>>) -> RouterResult<Self> {
        let mut seen = HashSet::new();
        for route in &routes {
            if !route.path.starts_with('/') {
                return Err(RouterError::InvalidPath(route.path.clone()));
            }
            if !seen.insert(route.path.as_str()) {
                return Err(RouterError::DuplicatePath(route.path.clone()));
            }
        }

        Ok(Self { routes })
    }

    /// Start building a table
    pub fn builder() -> RouteTableBuilder<V> {
        RouteTableBuilder::new()
    }

    /// Find the first route matching `path`
    pub fn find(&self, path: &str) -> Option<&Route<V>> {
        self.routes.iter().find(|route| route.matches(path))
    }

    /// Resolve `path` to its view
    pub fn resolve(&self, path: &str) -> RouterResult<&V> {
        self.find(path)
            .map(|route| &route.view)
            .ok_or_else(|| RouterError::NotFound(path.to_string()))
    }

    /// Whether a route is registered for `path`
    pub fn contains(&self, path: &str) -> bool {
        self.find(path).is_some()
    }

    /// All routes in match order
    pub fn routes(&self) -> &[Route<V>] {
        &self.routes
    }

    /// Registered paths in match order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|route| route.path.as_str())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Builder for route tables
#[derive(Debug)]
pub struct RouteTableBuilder<V> {
    routes: Vec<Route<V>>,
}

impl<V> RouteTableBuilder<V> {
    /// Create an empty builder
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Append a plain (path, view) route
    pub fn route(self, path: impl Into<String>, view: V) -> Self {
        self.add(Route::new(path, view))
    }

    /// Append a fully described route
    pub fn add(mut self, route: Route<V>) -> Self {
        self.routes.push(route);
        self
    }

    /// Validate and build the table
    pub fn build(self) -> RouterResult<RouteTable<V>> {
        RouteTable::new(self.routes)
    }
}

impl<V> Default for RouteTableBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RouteTable<&'static str> {
        RouteTable::builder()
            .route("/", "start")
            .route("/home", "home")
            .route("/queens", "queens")
            .build()
            .expect("Failed to build table")
    }

    #[test]
    fn test_resolve_registered_paths() {
        let table = sample();
        assert_eq!(table.resolve("/"), Ok(&"start"));
        assert_eq!(table.resolve("/home"), Ok(&"home"));
        assert_eq!(table.resolve("/queens"), Ok(&"queens"));
        assert_eq!(table.len(), 3);
        assert_eq!(table.paths().collect::<Vec<_>>(), vec!["/", "/home", "/queens"]);
    }

    #[test]
    fn test_resolve_unknown_path() {
        let table = sample();
        assert_eq!(
            table.resolve("/unknown"),
            Err(RouterError::NotFound("/unknown".to_string()))
        );
        assert!(!table.contains("/home/"));
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let result = RouteTable::builder()
            .route("/", 1)
            .route("/home", 2)
            .route("/", 3)
            .build();

        assert_eq!(
            result.map(|t| t.len()),
            Err(RouterError::DuplicatePath("/".to_string()))
        );
    }

    #[test]
    fn test_relative_path_rejected() {
        let result = RouteTable::new(vec![Route::new("home", ())]);
        assert!(matches!(result, Err(RouterError::InvalidPath(p)) if p == "home"));

        let result = RouteTable::new(vec![Route::new("", ())]);
        assert!(matches!(result, Err(RouterError::InvalidPath(_))));
    }

    #[test]
    fn test_empty_table_resolves_nothing() {
        let table: RouteTable<()> = RouteTable::builder().build().expect("empty table");
        assert!(table.is_empty());
        assert!(table.resolve("/").is_err());
    }
}
