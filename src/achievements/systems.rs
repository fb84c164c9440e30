//! Achievement restore, gameplay hooks and unlock handling.
use bevy::prelude::*;

use crate::{
    assistant::ChatMessageSent,
    core::AppConfig,
    mood::{MoodChangedEvent, MoodSource},
    navigation::{Navigator, RouteChangedEvent},
    notices::NoticeRequest,
    storage::LocalStorage,
    teammates::TeammateSearchPerformed,
    voice::VoiceCommandDispatched,
};

use super::{
    catalog::{CHAT_STARTER, EXPLORER, FIRST_VISIT, MOOD_CHECKIN, TEAM_SCOUT, VOICE_PIONEER},
    events::{AchievementUnlocked, UnlockAchievementRequest},
    tracker::{AchievementTracker, UnlockOutcome},
};

/// Loads the unlocked set and rewards the visit itself.
pub fn restore_achievements(
    config: Res<AppConfig>,
    storage: Res<LocalStorage>,
    mut tracker: ResMut<AchievementTracker>,
    mut requests: MessageWriter<UnlockAchievementRequest>,
) {
    let points_per_level = config.progression.points_per_level;
    *tracker = match AchievementTracker::restore(&**storage, points_per_level) {
        Ok(restored) => restored,
        Err(err) => {
            warn!(target: "achievements", "Ignoring stored achievements: {}", err);
            AchievementTracker::new(points_per_level)
        }
    };

    info!(
        "Achievements restored: {} unlocked, level {} ({:.0}%)",
        tracker.unlocked_ids().count(),
        tracker.level(),
        tracker.progress()
    );
    requests.write(UnlockAchievementRequest::new(FIRST_VISIT));
}

/// Turns widget activity into unlock requests.
#[allow(clippy::too_many_arguments)]
pub fn collect_unlock_triggers(
    config: Res<AppConfig>,
    navigator: Res<Navigator>,
    mut moods: MessageReader<MoodChangedEvent>,
    mut voice: MessageReader<VoiceCommandDispatched>,
    mut chat: MessageReader<ChatMessageSent>,
    mut searches: MessageReader<TeammateSearchPerformed>,
    mut routes: MessageReader<RouteChangedEvent>,
    mut requests: MessageWriter<UnlockAchievementRequest>,
) {
    if moods.read().any(|change| change.source == MoodSource::CheckIn) {
        requests.write(UnlockAchievementRequest::new(MOOD_CHECKIN));
    }
    if voice.read().count() > 0 {
        requests.write(UnlockAchievementRequest::new(VOICE_PIONEER));
    }
    if chat.read().count() > 0 {
        requests.write(UnlockAchievementRequest::new(CHAT_STARTER));
    }
    if searches.read().count() > 0 {
        requests.write(UnlockAchievementRequest::new(TEAM_SCOUT));
    }
    if routes.read().count() > 0
        && navigator.visited_count() >= config.progression.explorer_route_count
    {
        requests.write(UnlockAchievementRequest::new(EXPLORER));
    }
}

/// Applies unlock requests, persisting and announcing new unlocks.
pub fn apply_unlock_requests(
    mut requests: MessageReader<UnlockAchievementRequest>,
    mut tracker: ResMut<AchievementTracker>,
    mut storage: ResMut<LocalStorage>,
    mut notices: MessageWriter<NoticeRequest>,
    mut unlocked: MessageWriter<AchievementUnlocked>,
) {
    for request in requests.read() {
        let level_before = tracker.level();
        match tracker.unlock(&request.id) {
            Ok(UnlockOutcome::Unlocked(achievement)) => {
                if let Err(err) = tracker.persist(&mut **storage) {
                    warn!(target: "achievements", "Failed to store achievements: {}", err);
                }

                let level = tracker.level();
                info!(
                    target: "achievements",
                    "🏆 Unlocked {} (+{} XP, level {})",
                    achievement.id,
                    achievement.points,
                    level
                );
                notices.write(NoticeRequest::success(format!(
                    "🏆 Achievement unlocked: {} (+{} XP)",
                    achievement.title, achievement.points
                )));
                if level > level_before {
                    notices.write(NoticeRequest::success(format!("Level up! You reached level {}.", level)));
                }
                unlocked.write(AchievementUnlocked {
                    id: achievement.id,
                    title: achievement.title,
                    points: achievement.points,
                    level,
                    leveled_up: level > level_before,
                });
            }
            Ok(UnlockOutcome::AlreadyUnlocked) => {
                debug!(target: "achievements", "{} already unlocked", request.id);
            }
            Err(err) => warn!(target: "achievements", "Rejected unlock request: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        mood::Mood,
        navigation::{NavigateRequest, Route},
        storage::{KeyValueStore, MemoryStore, ACHIEVEMENTS_KEY},
        voice::dispatch,
    };

    #[derive(Resource, Default)]
    struct Captured {
        unlocked: Vec<AchievementUnlocked>,
        notices: Vec<NoticeRequest>,
    }

    fn capture(
        mut captured: ResMut<Captured>,
        mut unlocked: MessageReader<AchievementUnlocked>,
        mut notices: MessageReader<NoticeRequest>,
    ) {
        captured.unlocked.extend(unlocked.read().copied());
        captured.notices.extend(notices.read().cloned());
    }

    fn build_app(storage: LocalStorage) -> App {
        let mut app = App::new();
        app.add_message::<MoodChangedEvent>()
            .add_message::<VoiceCommandDispatched>()
            .add_message::<ChatMessageSent>()
            .add_message::<TeammateSearchPerformed>()
            .add_message::<RouteChangedEvent>()
            .add_message::<NavigateRequest>()
            .add_message::<UnlockAchievementRequest>()
            .add_message::<AchievementUnlocked>()
            .add_message::<NoticeRequest>()
            .init_resource::<AppConfig>()
            .init_resource::<Navigator>()
            .init_resource::<AchievementTracker>()
            .init_resource::<Captured>()
            .insert_resource(storage)
            .add_systems(Startup, restore_achievements)
            .add_systems(
                Update,
                (
                    crate::navigation::systems::apply_navigation_requests,
                    collect_unlock_triggers,
                    apply_unlock_requests,
                    capture,
                )
                    .chain(),
            );
        app
    }

    fn unlocked_ids(app: &App) -> Vec<&'static str> {
        app.world()
            .resource::<AchievementTracker>()
            .unlocked_ids()
            .collect()
    }

    #[test]
    fn startup_restores_and_rewards_first_visit() {
        let storage = LocalStorage::new(
            Box::new(MemoryStore::new().with_entry(ACHIEVEMENTS_KEY, r#"["team_scout","gone"]"#)),
            "memory",
        );
        let mut app = build_app(storage);
        app.update();

        assert_eq!(unlocked_ids(&app), vec![TEAM_SCOUT, FIRST_VISIT]);
        assert_eq!(
            app.world().resource::<LocalStorage>().get(ACHIEVEMENTS_KEY).as_deref(),
            Some(r#"["team_scout","first_visit"]"#)
        );
        let captured = app.world().resource::<Captured>();
        assert_eq!(captured.unlocked.len(), 1);
        assert!(captured.notices[0].text.contains("Hello, Em-Sphere"));
    }

    #[test]
    fn widget_activity_unlocks_once() {
        let mut app = build_app(LocalStorage::in_memory());
        app.update();

        for _ in 0..2 {
            app.world_mut().write_message(MoodChangedEvent {
                previous: Mood::Neutral,
                current: Mood::Happy,
                source: MoodSource::CheckIn,
            });
            app.world_mut().write_message(ChatMessageSent {
                text: "hi".to_string(),
                total_sent: 1,
            });
            app.world_mut().write_message(VoiceCommandDispatched {
                transcript: "help".to_string(),
                outcome: dispatch("help"),
            });
            app.world_mut()
                .write_message(TeammateSearchPerformed { result_count: 2 });
            app.update();
        }

        assert_eq!(
            unlocked_ids(&app),
            vec![FIRST_VISIT, MOOD_CHECKIN, VOICE_PIONEER, CHAT_STARTER, TEAM_SCOUT]
        );
        let captured = app.world().resource::<Captured>();
        assert_eq!(captured.unlocked.len(), 5);
        assert!(captured.unlocked.last().is_some_and(|event| event.leveled_up));
    }

    #[test]
    fn voice_mood_reports_do_not_count_as_check_ins() {
        let mut app = build_app(LocalStorage::in_memory());
        app.update();

        app.world_mut().write_message(MoodChangedEvent {
            previous: Mood::Neutral,
            current: Mood::Sad,
            source: MoodSource::Voice,
        });
        app.update();

        assert!(!app
            .world()
            .resource::<AchievementTracker>()
            .is_unlocked(MOOD_CHECKIN));
    }

    #[test]
    fn visiting_enough_routes_unlocks_explorer() {
        let mut app = build_app(LocalStorage::in_memory());
        app.update();

        for route in [Route::Dashboard, Route::Skills] {
            app.world_mut().write_message(NavigateRequest::to(route));
            app.update();
        }
        assert!(!app.world().resource::<AchievementTracker>().is_unlocked(EXPLORER));

        app.world_mut()
            .write_message(NavigateRequest::to(Route::Teammates));
        app.update();
        assert!(app.world().resource::<AchievementTracker>().is_unlocked(EXPLORER));
    }

    #[test]
    fn unknown_requests_are_rejected() {
        let mut app = build_app(LocalStorage::in_memory());
        app.update();

        app.world_mut()
            .write_message(UnlockAchievementRequest::new("moon_landing"));
        app.update();

        assert_eq!(unlocked_ids(&app), vec![FIRST_VISIT]);
    }
}
