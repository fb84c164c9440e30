use std::{
    env, fs,
    path::{Path, PathBuf},
};

use bevy::prelude::*;
use serde::Deserialize;

const CONFIG_PATH: &str = "config/em_sphere.toml";
const DATA_DIR_ENV: &str = "EM_SPHERE_DATA_DIR";

#[derive(Debug, Clone, Deserialize, Default)]
struct RawAppConfig {
    #[serde(default)]
    assistant: RawAssistant,
    #[serde(default)]
    notices: RawNotices,
    #[serde(default)]
    storage: RawStorage,
    #[serde(default)]
    voice_guide: RawVoiceGuide,
    #[serde(default)]
    progression: RawProgression,
    #[serde(default)]
    onboarding: RawOnboarding,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawAssistant {
    response_delay_seconds: f32,
    history_capacity: usize,
}

impl Default for RawAssistant {
    fn default() -> Self {
        Self {
            response_delay_seconds: 1.2,
            history_capacity: 50,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawNotices {
    lifetime_seconds: f32,
    fade_seconds: f32,
    max_visible: usize,
}

impl Default for RawNotices {
    fn default() -> Self {
        Self {
            lifetime_seconds: 4.0,
            fade_seconds: 1.0,
            max_visible: 3,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawStorage {
    directory: String,
    file_name: String,
}

impl Default for RawStorage {
    fn default() -> Self {
        Self {
            directory: "data".to_string(),
            file_name: "local_storage.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawVoiceGuide {
    pause_seconds: f32,
    words_per_minute: f32,
    lines: Vec<String>,
}

impl Default for RawVoiceGuide {
    fn default() -> Self {
        Self {
            pause_seconds: 0.8,
            words_per_minute: 160.0,
            lines: vec![
                "Welcome to Em-Sphere, where learning adapts to how you feel.".to_string(),
                "Tell me your mood any time and I will tune your path for today.".to_string(),
                "Say go to dashboard or open skills to move around hands free.".to_string(),
                "Earn experience by checking in, chatting, and finding teammates.".to_string(),
                "When you are ready, start onboarding to pick your interests.".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawProgression {
    points_per_level: u32,
    explorer_route_count: usize,
}

impl Default for RawProgression {
    fn default() -> Self {
        Self {
            points_per_level: 100,
            explorer_route_count: 4,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawOnboarding {
    max_interests: usize,
}

impl Default for RawOnboarding {
    fn default() -> Self {
        Self { max_interests: 5 }
    }
}

/// Runtime configuration derived from `config/em_sphere.toml`.
#[derive(Resource, Debug, Clone)]
pub struct AppConfig {
    pub assistant: AssistantConfig,
    pub notices: NoticeConfig,
    pub storage: StorageConfig,
    pub voice_guide: VoiceGuideConfig,
    pub progression: ProgressionConfig,
    pub onboarding: OnboardingConfig,
}

#[derive(Debug, Clone)]
pub struct AssistantConfig {
    pub response_delay_seconds: f32,
    pub history_capacity: usize,
}

#[derive(Debug, Clone)]
pub struct NoticeConfig {
    pub lifetime_seconds: f32,
    pub fade_seconds: f32,
    pub max_visible: usize,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub directory: PathBuf,
    pub file_name: String,
}

impl StorageConfig {
    pub fn file_path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

#[derive(Debug, Clone)]
pub struct VoiceGuideConfig {
    pub pause_seconds: f32,
    pub words_per_minute: f32,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ProgressionConfig {
    pub points_per_level: u32,
    pub explorer_route_count: usize,
}

#[derive(Debug, Clone)]
pub struct OnboardingConfig {
    pub max_interests: usize,
}

impl AppConfig {
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_PATH);
        let mut config: Self = match fs::read_to_string(path) {
            Ok(raw) => match toml::from_str::<RawAppConfig>(&raw) {
                Ok(parsed) => parsed.into(),
                Err(err) => {
                    warn!(
                        "Failed to parse {} ({}). Falling back to defaults.",
                        CONFIG_PATH, err
                    );
                    RawAppConfig::default().into()
                }
            },
            Err(err) => {
                warn!(
                    "Failed to read {} ({}). Falling back to defaults.",
                    CONFIG_PATH, err
                );
                RawAppConfig::default().into()
            }
        };

        if let Ok(directory) = env::var(DATA_DIR_ENV) {
            let trimmed = directory.trim();
            if !trimmed.is_empty() {
                config.storage.directory = PathBuf::from(trimmed);
            }
        }

        config
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        RawAppConfig::default().into()
    }
}

impl From<RawAppConfig> for AppConfig {
    fn from(value: RawAppConfig) -> Self {
        let assistant = AssistantConfig {
            response_delay_seconds: value.assistant.response_delay_seconds.max(0.0),
            history_capacity: value.assistant.history_capacity.max(2),
        };

        let fade_seconds = value.notices.fade_seconds.max(0.0);
        let notices = NoticeConfig {
            lifetime_seconds: value.notices.lifetime_seconds.max(fade_seconds).max(0.1),
            fade_seconds,
            max_visible: value.notices.max_visible.max(1),
        };

        let file_name = value.storage.file_name.trim();
        let storage = StorageConfig {
            directory: PathBuf::from(value.storage.directory.trim()),
            file_name: if file_name.is_empty() {
                RawStorage::default().file_name
            } else {
                file_name.to_string()
            },
        };

        let mut lines = normalise_lines(&value.voice_guide.lines);
        if lines.is_empty() {
            lines = RawVoiceGuide::default().lines;
        }
        let voice_guide = VoiceGuideConfig {
            pause_seconds: value.voice_guide.pause_seconds.max(0.0),
            words_per_minute: value.voice_guide.words_per_minute.max(60.0),
            lines,
        };

        let progression = ProgressionConfig {
            points_per_level: value.progression.points_per_level.max(1),
            explorer_route_count: value.progression.explorer_route_count.max(1),
        };

        let onboarding = OnboardingConfig {
            max_interests: value.onboarding.max_interests.max(1),
        };

        Self {
            assistant,
            notices,
            storage,
            voice_guide,
            progression,
            onboarding,
        }
    }
}

fn normalise_lines(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
