//! Mood labels shared by every widget.
use std::fmt;

/// The fixed set of moods a user can report or reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mood {
    Happy,
    Sad,
    Focused,
    Tired,
    Anxious,
    #[default]
    Neutral,
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Focused,
        Mood::Tired,
        Mood::Anxious,
        Mood::Neutral,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Focused => "focused",
            Self::Tired => "tired",
            Self::Anxious => "anxious",
            Self::Neutral => "neutral",
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Happy => "😊",
            Self::Sad => "😢",
            Self::Focused => "🎯",
            Self::Tired => "😴",
            Self::Anxious => "😰",
            Self::Neutral => "😐",
        }
    }

    /// Accent colour used to tint mood-aware widgets.
    pub const fn accent_rgb(self) -> [u8; 3] {
        match self {
            Self::Happy => [250, 204, 21],
            Self::Sad => [96, 165, 250],
            Self::Focused => [52, 211, 153],
            Self::Tired => [167, 139, 250],
            Self::Anxious => [251, 146, 60],
            Self::Neutral => [148, 163, 184],
        }
    }

    /// Parses a label case-insensitively, ignoring surrounding whitespace.
    pub fn from_label(label: &str) -> Option<Self> {
        let normalised = label.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|mood| mood.label() == normalised)
    }

    /// Parses a label, treating absent or unknown labels as neutral.
    pub fn from_label_or_neutral(label: Option<&str>) -> Self {
        label.and_then(Self::from_label).unwrap_or_default()
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
