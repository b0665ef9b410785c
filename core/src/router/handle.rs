//! Shareable handle to a navigator
//!
//! Everything that triggers navigation or reads the active route receives a
//! clone of the handle instead of reaching for a process-wide router.

use super::history::Location;
use super::navigator::{Navigator, RouterResult};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A cloneable handle to control a navigator
#[derive(Debug)]
pub struct RouterHandle<V>(Arc<Mutex<Navigator<V>>>);

impl<V> Clone for RouterHandle<V> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<V: Clone> RouterHandle<V> {
    /// Create a new router handle
    pub fn new(navigator: Navigator<V>) -> Self {
        Self(Arc::new(Mutex::new(navigator)))
    }

    fn lock(&self) -> MutexGuard<'_, Navigator<V>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Navigate to a route
    pub fn navigate(&self, path: &str) -> RouterResult<V> {
        self.lock().navigate(path).cloned()
    }

    /// Replace the current route
    pub fn replace(&self, path: &str) -> RouterResult<V> {
        self.lock().replace(path).cloned()
    }

    /// Navigate to an encoded location
    pub fn sync_location(&self, href: &str) -> RouterResult<V> {
        self.lock().sync_location(href).cloned()
    }

    /// Resolve a path without navigating
    pub fn resolve(&self, path: &str) -> RouterResult<V> {
        self.lock().resolve(path).cloned()
    }

    /// Go back to the previous route
    pub fn go_back(&self) -> bool {
        self.lock().go_back()
    }

    /// Go forward to the next route
    pub fn go_forward(&self) -> bool {
        self.lock().go_forward()
    }

    pub fn can_go_back(&self) -> bool {
        self.lock().can_go_back()
    }

    pub fn current_path(&self) -> Option<String> {
        self.lock().current_path().map(str::to_string)
    }

    pub fn current_location(&self) -> Option<Location> {
        self.lock().current_location()
    }

    pub fn active_view(&self) -> Option<V> {
        self.lock().active_view().cloned()
    }

    /// Run `f` with shared access to the navigator
    pub fn with<R>(&self, f: impl FnOnce(&Navigator<V>) -> R) -> R {
        f(&self.lock())
    }
}
