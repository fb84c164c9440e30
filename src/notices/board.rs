//! Rolling set of visible notices with lifetimes.
use std::{collections::VecDeque, time::Duration};

use bevy::prelude::*;

use crate::core::config::NoticeConfig;

use super::events::NoticeLevel;

/// A single visible notice.
#[derive(Debug, Clone)]
pub struct Notice {
    id: u64,
    text: String,
    level: NoticeLevel,
    lifetime: Timer,
    fade_seconds: f32,
}

impl Notice {
    fn new(id: u64, text: String, level: NoticeLevel, lifetime_secs: f32, fade_seconds: f32) -> Self {
        Self {
            id,
            text,
            level,
            lifetime: Timer::from_seconds(lifetime_secs, TimerMode::Once),
            fade_seconds,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn level(&self) -> NoticeLevel {
        self.level
    }

    pub fn is_finished(&self) -> bool {
        self.lifetime.is_finished()
    }

    /// Alpha fade value (1.0 = fully visible, 0.0 = transparent).
    ///
    /// Fades out during the final `fade_seconds` of lifetime.
    pub fn fade_alpha(&self) -> f32 {
        let remaining = self.lifetime.remaining_secs();
        if self.fade_seconds > 0.0 && remaining < self.fade_seconds {
            remaining / self.fade_seconds
        } else {
            1.0
        }
    }
}

/// Resource holding the notices currently on screen, newest last.
#[derive(Resource, Debug)]
pub struct NoticeBoard {
    notices: VecDeque<Notice>,
    lifetime_seconds: f32,
    fade_seconds: f32,
    capacity: usize,
    next_id: u64,
    revision: u64,
}

impl NoticeBoard {
    pub fn new(config: &NoticeConfig) -> Self {
        Self {
            notices: VecDeque::new(),
            lifetime_seconds: config.lifetime_seconds,
            fade_seconds: config.fade_seconds,
            capacity: config.max_visible.max(1),
            next_id: 1,
            revision: 0,
        }
    }

    /// Adds a notice, dropping the oldest when the board is full.
    pub fn push(&mut self, text: impl Into<String>, level: NoticeLevel) -> u64 {
        while self.notices.len() >= self.capacity {
            self.notices.pop_front();
        }

        let id = self.next_id;
        self.next_id += 1;
        self.notices.push_back(Notice::new(
            id,
            text.into(),
            level,
            self.lifetime_seconds,
            self.fade_seconds,
        ));
        self.revision += 1;
        id
    }

    /// Advances every lifetime and removes expired notices.
    pub fn tick(&mut self, delta: Duration) {
        for notice in self.notices.iter_mut() {
            notice.lifetime.tick(delta);
        }

        let before = self.notices.len();
        self.notices.retain(|notice| !notice.is_finished());
        if self.notices.len() != before {
            self.revision += 1;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    /// Changes whenever a notice is added or removed; lets renderers skip rebuilds.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new(&crate::core::AppConfig::default().notices)
    }
}
