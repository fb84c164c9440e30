//! Notice plugin wiring the board resource and its systems.
use bevy::prelude::*;

use crate::core::{AppConfig, UiClock};

use super::{board::NoticeBoard, events::NoticeRequest};

pub struct NoticePlugin;

impl Plugin for NoticePlugin {
    fn build(&self, app: &mut App) {
        let board = app
            .world()
            .get_resource::<AppConfig>()
            .map(|config| NoticeBoard::new(&config.notices))
            .unwrap_or_default();

        app.insert_resource(board)
            .add_message::<NoticeRequest>()
            .add_systems(Update, (collect_notice_requests, expire_notices).chain());
    }
}

/// Moves incoming notice requests onto the board.
pub fn collect_notice_requests(
    mut requests: MessageReader<NoticeRequest>,
    mut board: ResMut<NoticeBoard>,
) {
    for request in requests.read() {
        debug!(
            target: "notices",
            "Showing {} notice: {}",
            request.level.label(),
            request.text
        );
        board.push(request.text.clone(), request.level);
    }
}

/// Ticks notice lifetimes and removes expired ones.
pub fn expire_notices(clock: Res<UiClock>, mut board: ResMut<NoticeBoard>) {
    if board.is_empty() {
        return;
    }
    board.tick(clock.last_delta());
}
