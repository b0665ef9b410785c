//! Route definitions and utilities
//!
//! A route associates a literal path with an opaque view identifier.

/// Route definition containing the matched path, its view and metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<V> {
    /// Literal path, matched verbatim against the navigation path
    pub path: String,
    /// View activated when this route matches
    pub view: V,
    /// Optional human-readable name for this route
    pub name: Option<String>,
    /// Optional description of what this route displays
    pub description: Option<String>,
}

impl<V> Route<V> {
    /// Create a new route for the given path and view
    pub fn new(path: impl Into<String>, view: V) -> Self {
        Self {
            path: path.into(),
            view,
            name: None,
            description: None,
        }
    }

    /// Set the name for this route
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the description for this route
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether this route matches the given path
    pub fn matches(&self, path: &str) -> bool {
        self.path == path
    }

    /// Name if set, otherwise the path
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_builder() {
        let route = Route::new("/home", 1u8)
            .with_name("Home")
            .with_description("Puzzle menu");

        assert_eq!(route.path, "/home");
        assert_eq!(route.view, 1);
        assert_eq!(route.label(), "Home");
        assert_eq!(route.description.as_deref(), Some("Puzzle menu"));
    }

    #[test]
    fn test_route_matches_verbatim() {
        let route = Route::new("/queens", ());
        assert!(route.matches("/queens"));
        assert!(!route.matches("/queens/"));
        assert!(!route.matches("/Queens"));
        assert_eq!(route.label(), "/queens");
    }
}
