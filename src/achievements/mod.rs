//! Achievement/XP tracker backed by the key-value store.
pub mod catalog;
pub mod events;
pub mod plugin;
pub mod systems;
pub mod tracker;

pub use catalog::{find_achievement, Achievement, AchievementCategory, ACHIEVEMENTS};
pub use events::{AchievementUnlocked, UnlockAchievementRequest};
pub use plugin::AchievementsPlugin;
pub use tracker::{AchievementError, AchievementTracker, UnlockOutcome};
