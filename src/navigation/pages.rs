//! Static copy shown for each route.
use super::routes::Route;

/// Presentational content for a page header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageContent {
    pub title: &'static str,
    pub tagline: &'static str,
    pub call_to_action: Option<PageAction>,
}

/// Button shown under a page header and where it leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageAction {
    pub label: &'static str,
    pub target: Route,
}

pub fn page_content(route: Route) -> PageContent {
    match route {
        Route::Home => PageContent {
            title: "Em-Sphere",
            tagline: "Learning that listens to how you feel.",
            call_to_action: Some(PageAction {
                label: "Get started",
                target: Route::Login,
            }),
        },
        Route::Login => PageContent {
            title: "Welcome back",
            tagline: "Sign in to pick up where your mood left off.",
            call_to_action: Some(PageAction {
                label: "Continue",
                target: Route::Onboarding,
            }),
        },
        Route::Dashboard => PageContent {
            title: "Your dashboard",
            tagline: "Today's path, tuned to your mood.",
            call_to_action: Some(PageAction {
                label: "Browse skills",
                target: Route::Skills,
            }),
        },
        Route::Skills => PageContent {
            title: "Skills",
            tagline: "Pick a track and learn at your own pace.",
            call_to_action: Some(PageAction {
                label: "Find teammates",
                target: Route::Teammates,
            }),
        },
        Route::Teammates => PageContent {
            title: "Find teammates",
            tagline: "Search learners by skill, interest and availability.",
            call_to_action: None,
        },
        Route::Achievements => PageContent {
            title: "Achievements",
            tagline: "Every check-in and conversation earns experience.",
            call_to_action: Some(PageAction {
                label: "Back to dashboard",
                target: Route::Dashboard,
            }),
        },
        Route::Onboarding => PageContent {
            title: "Let's set you up",
            tagline: "Choose your interests and a learning goal.",
            call_to_action: None,
        },
    }
}
