//! Navigation messages.
use bevy::prelude::Message;

use super::routes::Route;

/// Request to navigate, issued by voice commands, buttons and the wizard.
#[derive(Message, Debug, Clone)]
pub enum NavigateRequest {
    Path(String),
    Back,
}

impl NavigateRequest {
    pub fn to(route: Route) -> Self {
        Self::Path(route.path().to_string())
    }
}

/// Fired after the current route changes.
#[derive(Message, Debug, Clone, Copy)]
pub struct RouteChangedEvent {
    pub from: Route,
    pub to: Route,
    pub first_visit: bool,
}
