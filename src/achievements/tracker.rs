//! Unlocked-set bookkeeping with level and progress derived from points.
use std::fmt;

use bevy::prelude::*;

use crate::storage::{
    store::{read_json, write_json},
    KeyValueStore, StorageError, ACHIEVEMENTS_KEY,
};

use super::catalog::{find_achievement, Achievement};

pub const DEFAULT_POINTS_PER_LEVEL: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AchievementError {
    Unknown { id: String },
}

impl fmt::Display for AchievementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown { id } => write!(f, "unknown achievement '{}'", id),
        }
    }
}

impl std::error::Error for AchievementError {}

/// Level reached with `total` points; everyone starts at level 1.
pub fn level_for(total: u32, points_per_level: u32) -> u32 {
    total / points_per_level.max(1) + 1
}

/// Percentage of the way through the current level, in `[0, 100)`.
pub fn progress_for(total: u32, points_per_level: u32) -> f32 {
    let points_per_level = points_per_level.max(1);
    (total % points_per_level) as f32 / points_per_level as f32 * 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockOutcome {
    Unlocked(&'static Achievement),
    AlreadyUnlocked,
}

#[derive(Resource, Debug, Clone)]
pub struct AchievementTracker {
    unlocked: Vec<&'static Achievement>,
    points_per_level: u32,
}

impl Default for AchievementTracker {
    fn default() -> Self {
        Self::new(DEFAULT_POINTS_PER_LEVEL)
    }
}

impl AchievementTracker {
    pub fn new(points_per_level: u32) -> Self {
        Self {
            unlocked: Vec::new(),
            points_per_level: points_per_level.max(1),
        }
    }

    /// Loads the unlocked set, discarding ids missing from the catalog.
    pub fn restore(store: &dyn KeyValueStore, points_per_level: u32) -> Result<Self, StorageError> {
        let mut tracker = Self::new(points_per_level);
        let stored: Vec<String> = read_json(store, ACHIEVEMENTS_KEY)?.unwrap_or_default();

        for id in stored {
            match find_achievement(&id) {
                Some(achievement) if !tracker.is_unlocked(achievement.id) => {
                    tracker.unlocked.push(achievement)
                }
                Some(_) => {}
                None => debug!(target: "achievements", "Dropping stored id '{}'", id),
            }
        }
        Ok(tracker)
    }

    pub fn persist(&self, store: &mut dyn KeyValueStore) -> Result<(), StorageError> {
        let ids: Vec<&str> = self.unlocked_ids().collect();
        write_json(store, ACHIEVEMENTS_KEY, &ids)
    }

    /// Unlocks `id`. Unlocking twice is the same as once.
    pub fn unlock(&mut self, id: &str) -> Result<UnlockOutcome, AchievementError> {
        let achievement = find_achievement(id).ok_or_else(|| AchievementError::Unknown {
            id: id.to_string(),
        })?;

        if self.is_unlocked(id) {
            return Ok(UnlockOutcome::AlreadyUnlocked);
        }
        self.unlocked.push(achievement);
        Ok(UnlockOutcome::Unlocked(achievement))
    }

    pub fn is_unlocked(&self, id: &str) -> bool {
        self.unlocked.iter().any(|achievement| achievement.id == id)
    }

    pub fn unlocked(&self) -> impl Iterator<Item = &'static Achievement> + '_ {
        self.unlocked.iter().copied()
    }

    pub fn unlocked_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.unlocked.iter().map(|achievement| achievement.id)
    }

    pub fn total_points(&self) -> u32 {
        self.unlocked.iter().map(|achievement| achievement.points).sum()
    }

    pub fn level(&self) -> u32 {
        level_for(self.total_points(), self.points_per_level)
    }

    pub fn progress(&self) -> f32 {
        progress_for(self.total_points(), self.points_per_level)
    }

    pub fn points_per_level(&self) -> u32 {
        self.points_per_level
    }
}
