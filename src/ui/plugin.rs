//! UiPlugin spawns the widget overlay and keeps it in sync with the resources behind it.
use bevy::prelude::*;

use super::components::UiSettings;
use super::input::{capture_text_entry, handle_onboarding_keys, TextEntry};
use super::notice_panel::{fade_notice_cards, rebuild_notice_cards, spawn_notice_panel, NoticePanelState};
use super::page::{
    handle_keyboard_shortcuts, handle_mood_buttons, handle_route_buttons, refresh_page,
    refresh_status_line, spawn_camera, spawn_page_layout,
};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        info!("UiPlugin registered");

        app.insert_resource(UiSettings::default())
            .insert_resource(NoticePanelState::default())
            .init_resource::<TextEntry>()
            .add_systems(Startup, (spawn_camera, spawn_page_layout, spawn_notice_panel))
            .add_systems(
                Update,
                (
                    handle_mood_buttons,
                    handle_route_buttons,
                    handle_keyboard_shortcuts,
                    capture_text_entry,
                    handle_onboarding_keys,
                ),
            )
            .add_systems(
                Update,
                (
                    refresh_page,
                    refresh_status_line,
                    rebuild_notice_cards,
                    fade_notice_cards.after(rebuild_notice_cards),
                ),
            );
    }
}
