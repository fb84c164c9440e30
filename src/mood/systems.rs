//! Systems applying mood reports to the shared store.
use bevy::prelude::*;

use crate::{notices::NoticeRequest, storage::LocalStorage};

use super::{
    events::{MoodChangedEvent, MoodReportRequest, MoodSource},
    responses::ResponseSelector,
    state::MoodState,
};

/// Restores the last mood mirrored into storage.
pub fn restore_mood_from_storage(mut state: ResMut<MoodState>, storage: Res<LocalStorage>) {
    *state = MoodState::restore(&**storage);
    info!(
        "Mood restored from {} storage: {}",
        storage.label(),
        state.current()
    );
}

/// Applies mood reports, mirrors them to storage, and answers check-ins.
pub fn apply_mood_reports(
    mut reports: MessageReader<MoodReportRequest>,
    mut state: ResMut<MoodState>,
    mut storage: ResMut<LocalStorage>,
    mut selector: ResMut<ResponseSelector>,
    mut changes: MessageWriter<MoodChangedEvent>,
    mut notices: MessageWriter<NoticeRequest>,
) {
    for report in reports.read() {
        let previous = state.set(report.mood);
        if let Err(err) = state.persist(&mut **storage) {
            warn!(target: "mood", "Failed to mirror mood to storage: {}", err);
        }

        if previous != report.mood {
            info!(
                target: "mood",
                "Mood shifts from {} to {} (via {})",
                previous,
                report.mood,
                report.source.label()
            );
        }

        changes.write(MoodChangedEvent {
            previous,
            current: report.mood,
            source: report.source,
        });

        if report.source == MoodSource::CheckIn {
            let reply = selector.select(report.mood);
            notices.write(NoticeRequest::info(format!(
                "{} Feeling {}. {}",
                report.mood.emoji(),
                report.mood,
                reply
            )));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        mood::{
            responses::{responses_for, ScriptedRandom},
            types::Mood,
        },
        storage::{KeyValueStore, MemoryStore, MOOD_KEY},
    };

    #[derive(Resource, Default)]
    struct Captured {
        changes: Vec<MoodChangedEvent>,
        notices: Vec<NoticeRequest>,
    }

    fn capture(
        mut captured: ResMut<Captured>,
        mut changes: MessageReader<MoodChangedEvent>,
        mut notices: MessageReader<NoticeRequest>,
    ) {
        captured.changes.extend(changes.read().copied());
        captured.notices.extend(notices.read().cloned());
    }

    fn build_app(storage: LocalStorage) -> App {
        let mut app = App::new();
        app.add_message::<MoodReportRequest>()
            .add_message::<MoodChangedEvent>()
            .add_message::<NoticeRequest>()
            .init_resource::<MoodState>()
            .init_resource::<Captured>()
            .insert_resource(storage)
            .insert_resource(ResponseSelector::new(Box::new(ScriptedRandom::new(vec![2]))))
            .add_systems(Startup, restore_mood_from_storage)
            .add_systems(Update, (apply_mood_reports, capture).chain());
        app
    }

    #[test]
    fn startup_restores_stored_mood() {
        let storage = LocalStorage::new(
            Box::new(MemoryStore::new().with_entry(MOOD_KEY, "tired")),
            "memory",
        );
        let mut app = build_app(storage);
        app.update();

        assert_eq!(app.world().resource::<MoodState>().current(), Mood::Tired);
    }

    #[test]
    fn check_in_updates_store_and_answers() {
        let mut app = build_app(LocalStorage::in_memory());
        app.update();

        app.world_mut().write_message(MoodReportRequest {
            mood: Mood::Focused,
            source: MoodSource::CheckIn,
        });
        app.update();

        assert_eq!(app.world().resource::<MoodState>().current(), Mood::Focused);
        assert_eq!(
            app.world().resource::<LocalStorage>().get(MOOD_KEY).as_deref(),
            Some("focused")
        );

        let captured = app.world().resource::<Captured>();
        assert_eq!(captured.changes.len(), 1);
        assert_eq!(captured.changes[0].previous, Mood::Neutral);
        assert_eq!(captured.changes[0].current, Mood::Focused);
        assert_eq!(captured.notices.len(), 1);
        assert!(captured.notices[0]
            .text
            .contains(responses_for(Mood::Focused)[2]));
    }

    #[test]
    fn voice_reports_do_not_raise_check_in_notices() {
        let mut app = build_app(LocalStorage::in_memory());
        app.update();

        app.world_mut().write_message(MoodReportRequest {
            mood: Mood::Happy,
            source: MoodSource::Voice,
        });
        app.update();

        let captured = app.world().resource::<Captured>();
        assert_eq!(captured.changes.len(), 1);
        assert!(captured.notices.is_empty());
    }
}
