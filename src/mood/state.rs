//! The shared mood store.
use bevy::prelude::*;

use crate::storage::{KeyValueStore, StorageError, MOOD_KEY};

use super::types::Mood;

/// Current mood label, read and updated by nearly every widget.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct MoodState {
    current: Mood,
    reports: u32,
}

impl MoodState {
    pub fn new(current: Mood) -> Self {
        Self {
            current,
            reports: 0,
        }
    }

    pub fn current(&self) -> Mood {
        self.current
    }

    /// Number of mood updates applied this session.
    pub fn reports(&self) -> u32 {
        self.reports
    }

    /// Replaces the current mood, returning the previous one.
    pub fn set(&mut self, mood: Mood) -> Mood {
        let previous = self.current;
        self.current = mood;
        self.reports = self.reports.saturating_add(1);
        previous
    }

    /// Loads the stored mood label; unknown labels resolve to neutral.
    pub fn restore(store: &dyn KeyValueStore) -> Self {
        let stored = store.get(MOOD_KEY);
        Self::new(Mood::from_label_or_neutral(stored.as_deref()))
    }

    /// Mirrors the current mood label into storage.
    pub fn persist(&self, store: &mut dyn KeyValueStore) -> Result<(), StorageError> {
        store.set(MOOD_KEY, self.current.label().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn set_tracks_previous_mood() {
        let mut state = MoodState::default();
        assert_eq!(state.current(), Mood::Neutral);

        let previous = state.set(Mood::Focused);
        assert_eq!(previous, Mood::Neutral);
        assert_eq!(state.current(), Mood::Focused);
        assert_eq!(state.reports(), 1);
    }

    #[test]
    fn restore_and_persist_use_the_mood_key() {
        let mut store = MemoryStore::new().with_entry(MOOD_KEY, "Anxious");
        let mut state = MoodState::restore(&store);
        assert_eq!(state.current(), Mood::Anxious);

        state.set(Mood::Happy);
        state.persist(&mut store).unwrap();
        assert_eq!(store.get(MOOD_KEY).as_deref(), Some("happy"));

        let garbage = MemoryStore::new().with_entry(MOOD_KEY, "???");
        assert_eq!(MoodState::restore(&garbage).current(), Mood::Neutral);
    }
}
