//! Achievement plugin wiring the tracker, gameplay hooks and unlock handling.
use bevy::prelude::*;

use crate::core::AppConfig;

use super::{
    events::{AchievementUnlocked, UnlockAchievementRequest},
    systems::{apply_unlock_requests, collect_unlock_triggers, restore_achievements},
    tracker::AchievementTracker,
};

pub struct AchievementsPlugin;

impl Plugin for AchievementsPlugin {
    fn build(&self, app: &mut App) {
        let tracker = app
            .world()
            .get_resource::<AppConfig>()
            .map(|config| AchievementTracker::new(config.progression.points_per_level))
            .unwrap_or_default();

        app.insert_resource(tracker)
            .add_message::<UnlockAchievementRequest>()
            .add_message::<AchievementUnlocked>()
            .add_systems(Startup, restore_achievements)
            .add_systems(
                Update,
                (collect_unlock_triggers, apply_unlock_requests).chain(),
            );
    }
}
