//! History strategies and navigation state
//!
//! The strategy only decides how the current path is written to and read
//! from the externally visible location. Routing itself never depends on it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default number of history entries kept in each direction
pub const DEFAULT_MAX_HISTORY: usize = 50;

/// How the current location is represented externally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryStrategy {
    /// Path lives in the fragment: `<base>#/queens`
    #[default]
    Hash,
    /// Path is appended to the base: `<base>/queens`
    Path,
    /// Location is kept in memory only and equals the path
    Memory,
}

impl HistoryStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryStrategy::Hash => "hash",
            HistoryStrategy::Path => "path",
            HistoryStrategy::Memory => "memory",
        }
    }

    /// Encode a route path into a location under `base`
    pub fn encode(&self, base: &str, path: &str) -> String {
        match self {
            HistoryStrategy::Hash => format!("{}#{}", base, path),
            HistoryStrategy::Path => format!("{}{}", base.trim_end_matches('/'), path),
            HistoryStrategy::Memory => path.to_string(),
        }
    }

    /// Decode a location under `base` back into a route path
    ///
    /// Returns `None` when the location does not belong to `base`.
    pub fn decode(&self, base: &str, href: &str) -> Option<String> {
        match self {
            HistoryStrategy::Hash => {
                let (prefix, fragment) = match href.split_once('#') {
                    Some(parts) => parts,
                    None => (href, ""),
                };
                if prefix != base {
                    return None;
                }
                // Query is not part of the route path
                let fragment = fragment.split('?').next().unwrap_or_default();
                if fragment.is_empty() {
                    Some("/".to_string())
                } else {
                    Some(fragment.to_string())
                }
            }
            HistoryStrategy::Path => {
                let base = base.trim_end_matches('/');
                let rest = href.strip_prefix(base)?;
                // Query and fragment are not part of the route path
                let rest = rest.split(['?', '#']).next().unwrap_or_default();
                if rest.is_empty() {
                    Some("/".to_string())
                } else if rest.starts_with('/') {
                    Some(rest.to_string())
                } else {
                    None
                }
            }
            HistoryStrategy::Memory => Some(href.to_string()),
        }
    }
}

impl fmt::Display for HistoryStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for HistoryStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hash" => Ok(HistoryStrategy::Hash),
            "path" | "web" => Ok(HistoryStrategy::Path),
            "memory" => Ok(HistoryStrategy::Memory),
            other => Err(format!("unknown history strategy '{}'", other)),
        }
    }
}

/// Externally observable location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    /// Route path that is active
    pub path: String,
    /// Path encoded with the configured strategy
    pub href: String,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href)
    }
}

/// Current path plus back and forward stacks (most recent first)
#[derive(Debug, Clone)]
pub struct NavigationState {
    current: Option<String>,
    back: Vec<String>,
    forward: Vec<String>,
    max_history: usize,
}

impl NavigationState {
    /// Create an empty state with the given history limit
    pub fn new(max_history: usize) -> Self {
        Self {
            current: None,
            back: Vec::new(),
            forward: Vec::new(),
            max_history,
        }
    }

    /// Push a new entry; returns false if `path` is already current
    pub fn push(&mut self, path: String) -> bool {
        if self.current.as_deref() == Some(path.as_str()) {
            return false;
        }

        if let Some(previous) = self.current.take() {
            self.back.insert(0, previous);
            self.back.truncate(self.max_history);
        }
        self.forward.clear();
        self.current = Some(path);
        true
    }

    /// Replace the current entry without touching the stacks
    pub fn replace(&mut self, path: String) {
        self.current = Some(path);
    }

    /// Go back to the previous entry in history
    pub fn go_back(&mut self) -> bool {
        if self.back.is_empty() {
            return false;
        }
        let previous = self.back.remove(0);
        if let Some(current) = self.current.replace(previous) {
            self.forward.insert(0, current);
            self.forward.truncate(self.max_history);
        }
        true
    }

    /// Go forward to the next entry in history
    pub fn go_forward(&mut self) -> bool {
        if self.forward.is_empty() {
            return false;
        }
        let next = self.forward.remove(0);
        if let Some(current) = self.current.replace(next) {
            self.back.insert(0, current);
            self.back.truncate(self.max_history);
        }
        true
    }

    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Back stack, most recent first
    pub fn history(&self) -> &[String] {
        &self.back
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_locations() {
        assert_eq!(HistoryStrategy::Hash.encode("", "/queens"), "#/queens");
        assert_eq!(
            HistoryStrategy::Hash.encode("/index.html", "/home"),
            "/index.html#/home"
        );
        assert_eq!(HistoryStrategy::Path.encode("", "/queens"), "/queens");
        assert_eq!(HistoryStrategy::Path.encode("/app/", "/queens"), "/app/queens");
        assert_eq!(HistoryStrategy::Memory.encode("/app", "/queens"), "/queens");
    }

    #[test]
    fn test_decode_hash_locations() {
        let hash = HistoryStrategy::Hash;
        assert_eq!(hash.decode("", "#/queens").as_deref(), Some("/queens"));
        assert_eq!(hash.decode("", "").as_deref(), Some("/"));
        assert_eq!(hash.decode("", "#").as_deref(), Some("/"));
        assert_eq!(
            hash.decode("/index.html", "/index.html#/home").as_deref(),
            Some("/home")
        );
        assert_eq!(hash.decode("/index.html", "/other#/home"), None);
        assert_eq!(hash.decode("", "#/queens?x=1").as_deref(), Some("/queens"));
        assert_eq!(hash.decode("", "#?x=1").as_deref(), Some("/"));
    }

    #[test]
    fn test_decode_path_locations() {
        let path = HistoryStrategy::Path;
        assert_eq!(path.decode("", "/queens").as_deref(), Some("/queens"));
        assert_eq!(path.decode("/app", "/app").as_deref(), Some("/"));
        assert_eq!(path.decode("/app", "/app/home?x=1").as_deref(), Some("/home"));
        assert_eq!(path.decode("/app", "/application"), None);
        assert_eq!(path.decode("/app", "/elsewhere"), None);
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!("hash".parse::<HistoryStrategy>(), Ok(HistoryStrategy::Hash));
        assert_eq!("WEB".parse::<HistoryStrategy>(), Ok(HistoryStrategy::Path));
        assert_eq!("memory".parse::<HistoryStrategy>(), Ok(HistoryStrategy::Memory));
        assert!("tape".parse::<HistoryStrategy>().is_err());
        assert_eq!(HistoryStrategy::Path.to_string(), "path");
    }

    #[test]
    fn test_state_push_and_traverse() {
        let mut state = NavigationState::default();
        assert!(state.push("/".to_string()));
        assert!(state.push("/home".to_string()));
        assert!(state.push("/queens".to_string()));
        assert!(!state.push("/queens".to_string()));

        assert_eq!(state.history(), ["/home".to_string(), "/".to_string()]);
        assert!(state.go_back());
        assert_eq!(state.current(), Some("/home"));
        assert!(state.can_go_forward());
        assert!(state.go_forward());
        assert_eq!(state.current(), Some("/queens"));
        assert!(!state.go_forward());
    }

    #[test]
    fn test_push_clears_forward_stack() {
        let mut state = NavigationState::default();
        state.push("/".to_string());
        state.push("/home".to_string());
        state.go_back();
        state.push("/queens".to_string());

        assert!(!state.can_go_forward());
        assert_eq!(state.history(), ["/".to_string()]);
    }

    #[test]
    fn test_history_limit() {
        let mut state = NavigationState::new(2);
        for path in ["/a", "/b", "/c", "/d"] {
            state.push(path.to_string());
        }
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.history()[1], "/b");

        let mut state = NavigationState::new(0);
        state.push("/a".to_string());
        state.push("/b".to_string());
        assert!(!state.can_go_back());
    }
}
