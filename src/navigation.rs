//! Client-side routes and the navigator seam.
//!
//! The router itself is an external collaborator. Views only ever ask it to
//! go somewhere; what happens next is not their concern.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// Destinations a view can navigate to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    /// Generic error page shown for transport and decode failures
    Error,
    Post(String),
}

impl Route {
    /// The client-side path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Error => "/error".to_string(),
            Route::Post(id) => format!("/posts/{}", id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Something that can change the current route.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);

    /// Show the generic error page. `message` says what went wrong in
    /// words a reader can act on.
    fn show_error(&self, message: String) {
        tracing::debug!(%message, "error page");
        self.navigate(Route::Error);
    }
}

/// Navigator that remembers every route it was sent to.
///
/// The CLI uses it to find out whether a command ended on the error page;
/// tests use it to assert redirects.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    visited: Arc<Mutex<Vec<Route>>>,
    error_message: Arc<Mutex<Option<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// All routes navigated to, oldest first.
    pub fn visited(&self) -> Vec<Route> {
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The most recent route, if any.
    pub fn current(&self) -> Option<Route> {
        self.visited().last().cloned()
    }

    pub fn visited_error_page(&self) -> bool {
        self.visited().contains(&Route::Error)
    }

    /// Message passed with the most recent trip to the error page.
    pub fn error_message(&self) -> Option<String> {
        self.error_message
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(route = %route, "navigate");
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route);
    }

    fn show_error(&self, message: String) {
        *self
            .error_message
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(message);
        self.navigate(Route::Error);
    }
}
