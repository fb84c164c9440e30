//! Navigation plugin wiring the navigator and route messages.
use bevy::prelude::*;

use super::{
    events::{NavigateRequest, RouteChangedEvent},
    navigator::Navigator,
    systems::apply_navigation_requests,
};

pub struct NavigationPlugin;

impl Plugin for NavigationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Navigator>()
            .add_message::<NavigateRequest>()
            .add_message::<RouteChangedEvent>()
            .add_systems(Startup, log_start_route)
            .add_systems(Update, apply_navigation_requests);
    }
}

fn log_start_route(navigator: Res<Navigator>) {
    info!("NavigationPlugin initialised on {}", navigator.current());
}
