//! Messages describing mood reports and changes.
use bevy::prelude::Message;

use super::types::Mood;

/// Where a mood update originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodSource {
    /// The mood self-report widget.
    CheckIn,
    /// A mood revealed in a voice transcript.
    Voice,
    /// Restored from storage at startup.
    Restored,
}

impl MoodSource {
    pub fn label(self) -> &'static str {
        match self {
            Self::CheckIn => "check-in",
            Self::Voice => "voice",
            Self::Restored => "storage",
        }
    }
}

/// Request to update the shared mood.
#[derive(Message, Debug, Clone, Copy)]
pub struct MoodReportRequest {
    pub mood: Mood,
    pub source: MoodSource,
}

/// Fired after the shared mood has been applied, even when it did not change.
#[derive(Message, Debug, Clone, Copy)]
pub struct MoodChangedEvent {
    pub previous: Mood,
    pub current: Mood,
    pub source: MoodSource,
}
