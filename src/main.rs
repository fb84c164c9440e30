use std::path::Path;

use bevy::prelude::*;

mod achievements;
mod assistant;
mod core;
mod mood;
mod navigation;
mod notices;
mod onboarding;
mod speech;
mod storage;
mod teammates;
mod ui;
mod voice;

use crate::{
    achievements::AchievementsPlugin, assistant::AssistantPlugin, core::CorePlugin,
    mood::MoodPlugin, navigation::NavigationPlugin, notices::NoticePlugin,
    onboarding::OnboardingPlugin, speech::SpeechPlugin, storage::StoragePlugin,
    teammates::TeammatesPlugin, ui::UiPlugin, voice::VoicePlugin,
};

fn main() {
    load_local_env();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Em-Sphere".to_string(),
                ..default()
            }),
            ..default()
        }))
        // Config and storage first: later plugins read both while building.
        .add_plugins((CorePlugin, StoragePlugin))
        .add_plugins((
            NoticePlugin,
            MoodPlugin,
            NavigationPlugin,
            SpeechPlugin,
            VoicePlugin,
            AssistantPlugin,
            TeammatesPlugin,
            AchievementsPlugin,
            OnboardingPlugin,
            UiPlugin,
        ))
        .run();
}

fn load_local_env() {
    const LOCAL_ENV_FILE: &str = "local.env";

    let path = Path::new(LOCAL_ENV_FILE);
    if !path.exists() {
        return;
    }

    if let Err(err) = dotenvy::from_filename(path) {
        eprintln!("Failed to load {}: {}", LOCAL_ENV_FILE, err);
    }
}
