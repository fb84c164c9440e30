//! Systems applying navigation requests.
use bevy::prelude::*;

use super::{
    events::{NavigateRequest, RouteChangedEvent},
    navigator::Navigator,
};

pub fn apply_navigation_requests(
    mut requests: MessageReader<NavigateRequest>,
    mut navigator: ResMut<Navigator>,
    mut changes: MessageWriter<RouteChangedEvent>,
) {
    for request in requests.read() {
        let result = match request {
            NavigateRequest::Path(path) => navigator.go_to(path),
            NavigateRequest::Back => navigator.back(),
        };

        match result {
            Ok(transition) if transition.from != transition.to => {
                info!(
                    target: "navigation",
                    "Navigating {} -> {}",
                    transition.from,
                    transition.to
                );
                changes.write(RouteChangedEvent {
                    from: transition.from,
                    to: transition.to,
                    first_visit: transition.first_visit,
                });
            }
            Ok(transition) => {
                debug!(target: "navigation", "Already on {}", transition.to);
            }
            Err(err) => {
                warn!(target: "navigation", "Ignoring navigation request: {}", err);
            }
        }
    }
}
