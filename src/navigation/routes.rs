//! Routes the front-end can show.
use std::fmt;

/// Every page reachable through navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Login,
    Dashboard,
    Skills,
    Teammates,
    Achievements,
    Onboarding,
}

impl Route {
    pub const ALL: [Route; 7] = [
        Route::Home,
        Route::Login,
        Route::Dashboard,
        Route::Skills,
        Route::Teammates,
        Route::Achievements,
        Route::Onboarding,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::Skills => "/skills",
            Self::Teammates => "/teammates",
            Self::Achievements => "/achievements",
            Self::Onboarding => "/onboarding",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Login => "login",
            Self::Dashboard => "dashboard",
            Self::Skills => "skills",
            Self::Teammates => "teammates",
            Self::Achievements => "achievements",
            Self::Onboarding => "onboarding",
        }
    }

    /// Resolves a path, tolerating a missing leading slash and a trailing slash.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim().trim_end_matches('/');
        let normalised = if trimmed.is_empty() {
            "/".to_string()
        } else if trimmed.starts_with('/') {
            trimmed.to_ascii_lowercase()
        } else {
            format!("/{}", trimmed.to_ascii_lowercase())
        };

        Self::ALL
            .into_iter()
            .find(|route| route.path() == normalised)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_resolve_back_to_routes() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn path_normalisation_is_lenient() {
        assert_eq!(Route::from_path("dashboard"), Some(Route::Dashboard));
        assert_eq!(Route::from_path("/Skills/"), Some(Route::Skills));
        assert_eq!(Route::from_path(""), Some(Route::Home));
        assert_eq!(Route::from_path("/settings"), None);
    }
}
