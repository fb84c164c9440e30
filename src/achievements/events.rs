//! Achievement messages.
use bevy::prelude::Message;

/// Request to unlock an achievement by catalog id.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct UnlockAchievementRequest {
    pub id: String,
}

impl UnlockAchievementRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Fired once per newly unlocked achievement.
#[derive(Message, Debug, Clone, Copy)]
pub struct AchievementUnlocked {
    pub id: &'static str,
    pub title: &'static str,
    pub points: u32,
    pub level: u32,
    pub leveled_up: bool,
}
