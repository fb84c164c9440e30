//! Mood plugin wiring the shared store, the response selector and report handling.
use bevy::prelude::*;

use super::{
    events::{MoodChangedEvent, MoodReportRequest},
    responses::ResponseSelector,
    state::MoodState,
    systems::{apply_mood_reports, restore_mood_from_storage},
};

pub struct MoodPlugin;

impl Plugin for MoodPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MoodState>()
            .init_resource::<ResponseSelector>()
            .add_message::<MoodReportRequest>()
            .add_message::<MoodChangedEvent>()
            .add_systems(Startup, restore_mood_from_storage)
            .add_systems(Update, apply_mood_reports);
    }
}
