//! The navigation collaborator: current route, history and visited set.
use std::{collections::HashSet, fmt};

use bevy::prelude::Resource;

use super::routes::Route;

const MAX_HISTORY: usize = 32;

/// Errors raised by `Navigator::go_to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    UnknownPath { path: String },
    HistoryEmpty,
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPath { path } => write!(f, "no page at {:?}", path),
            Self::HistoryEmpty => write!(f, "no previous page"),
        }
    }
}

impl std::error::Error for NavigationError {}

/// Outcome of a successful navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteTransition {
    pub from: Route,
    pub to: Route,
    /// True the first time `to` is visited this session.
    pub first_visit: bool,
}

#[derive(Resource, Debug)]
pub struct Navigator {
    current: Route,
    history: Vec<Route>,
    visited: HashSet<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

impl Navigator {
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            history: Vec::new(),
            visited: HashSet::from([start]),
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn has_visited(&self, route: Route) -> bool {
        self.visited.contains(&route)
    }

    /// Navigates to `path`. Navigating to the current route is a no-op transition.
    pub fn go_to(&mut self, path: &str) -> Result<RouteTransition, NavigationError> {
        let route = Route::from_path(path).ok_or_else(|| NavigationError::UnknownPath {
            path: path.to_string(),
        })?;
        Ok(self.visit(route))
    }

    pub fn visit(&mut self, route: Route) -> RouteTransition {
        let from = self.current;
        if route != from {
            if self.history.len() >= MAX_HISTORY {
                self.history.remove(0);
            }
            self.history.push(from);
            self.current = route;
        }
        RouteTransition {
            from,
            to: route,
            first_visit: self.visited.insert(route),
        }
    }

    /// Returns to the previous route.
    pub fn back(&mut self) -> Result<RouteTransition, NavigationError> {
        let previous = self.history.pop().ok_or(NavigationError::HistoryEmpty)?;
        let from = self.current;
        self.current = previous;
        Ok(RouteTransition {
            from,
            to: previous,
            first_visit: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn go_to_tracks_history_and_visits() {
        let mut navigator = Navigator::default();
        let transition = navigator.go_to("/dashboard").unwrap();
        assert_eq!(transition.from, Route::Home);
        assert_eq!(transition.to, Route::Dashboard);
        assert!(transition.first_visit);

        navigator.go_to("/skills").unwrap();
        let repeat = navigator.go_to("/dashboard").unwrap();
        assert!(!repeat.first_visit);
        assert_eq!(navigator.visited_count(), 3);

        let back = navigator.back().unwrap();
        assert_eq!(back.to, Route::Skills);
        assert_eq!(navigator.current(), Route::Skills);
    }

    #[test]
    fn unknown_paths_leave_state_untouched() {
        let mut navigator = Navigator::default();
        let error = navigator.go_to("/pricing").unwrap_err();
        assert_eq!(
            error,
            NavigationError::UnknownPath {
                path: "/pricing".to_string()
            }
        );
        assert_eq!(navigator.current(), Route::Home);
        assert_eq!(navigator.back(), Err(NavigationError::HistoryEmpty));
    }

    #[test]
    fn same_route_does_not_grow_history() {
        let mut navigator = Navigator::default();
        navigator.go_to("/").unwrap();
        assert_eq!(navigator.back(), Err(NavigationError::HistoryEmpty));
    }
}
