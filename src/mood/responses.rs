//! Mood-keyed canned responses and the random source used to pick among them.
use bevy::prelude::Resource;
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::types::Mood;

/// Number of candidate responses stored for every mood.
pub const RESPONSES_PER_MOOD: usize = 5;

const HAPPY_RESPONSES: [&str; RESPONSES_PER_MOOD] = [
    "Love that energy! Let's channel it into something new today.",
    "You're glowing! How about tackling that challenge you've been saving?",
    "Great mood, great momentum. Want to try a quick skill sprint?",
    "Happiness is contagious. Maybe share it with a teammate?",
    "Awesome! Today is a perfect day to level up.",
];

const SAD_RESPONSES: [&str; RESPONSES_PER_MOOD] = [
    "I'm sorry you're feeling down. Let's take things one small step at a time.",
    "It's okay to have off days. A gentle review session might help.",
    "You're not alone. Would a short, easy lesson feel good right now?",
    "Be kind to yourself today. Even five minutes of learning counts.",
    "Sending you support. Want me to suggest something light and uplifting?",
];

const FOCUSED_RESPONSES: [&str; RESPONSES_PER_MOOD] = [
    "You're in the zone! Let's dive into a deep-work session.",
    "Focus mode on. I'll keep distractions to a minimum.",
    "Perfect time for that advanced module you've been eyeing.",
    "Sharp mind, clear goals. Let's make real progress.",
    "Let's use this focus for a hands-on project.",
];

const TIRED_RESPONSES: [&str; RESPONSES_PER_MOOD] = [
    "Sounds like you need some rest. How about a short recap instead?",
    "Low energy is fine. Let's keep today's session light.",
    "Maybe a quick video lesson rather than a heavy exercise?",
    "Remember to take breaks. Your brain learns while you rest too.",
    "Let's do something bite-sized and call it a win.",
];

const ANXIOUS_RESPONSES: [&str; RESPONSES_PER_MOOD] = [
    "Take a deep breath. We'll go at whatever pace feels right.",
    "Feeling anxious is normal. Let's break things into tiny steps.",
    "You've got this. Want to start with something familiar?",
    "Let's slow down together. No pressure, just progress.",
    "A quick breathing exercise might help before we begin.",
];

const NEUTRAL_RESPONSES: [&str; RESPONSES_PER_MOOD] = [
    "Hi there! What would you like to learn today?",
    "Ready when you are. Pick a topic and let's get started.",
    "How can I help you grow today?",
    "Let's explore something interesting together.",
    "Tell me how you're feeling and I'll tailor your path.",
];

/// Returns the fixed candidate list for a mood.
pub const fn responses_for(mood: Mood) -> &'static [&'static str; RESPONSES_PER_MOOD] {
    match mood {
        Mood::Happy => &HAPPY_RESPONSES,
        Mood::Sad => &SAD_RESPONSES,
        Mood::Focused => &FOCUSED_RESPONSES,
        Mood::Tired => &TIRED_RESPONSES,
        Mood::Anxious => &ANXIOUS_RESPONSES,
        Mood::Neutral => &NEUTRAL_RESPONSES,
    }
}

/// Source of uniformly distributed indices for response selection.
pub trait ResponseRandom: Send + Sync + 'static {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Default random source backed by an entropy-seeded `StdRng`.
pub struct EntropyRandom {
    rng: StdRng,
}

impl EntropyRandom {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for EntropyRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseRandom for EntropyRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Deterministic source replaying a fixed index sequence, wrapping around.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    indices: Vec<usize>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices, cursor: 0 }
    }
}

impl ResponseRandom for ScriptedRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let index = self.indices[self.cursor % self.indices.len()];
        self.cursor += 1;
        index % len
    }
}

/// Picks one candidate response for `mood` using `random`.
pub fn select_response(mood: Mood, random: &mut dyn ResponseRandom) -> &'static str {
    let candidates = responses_for(mood);
    candidates[random.pick_index(candidates.len())]
}

/// Label-based entry point: absent or unknown labels select from the neutral list.
pub fn select_response_for_label(
    label: Option<&str>,
    random: &mut dyn ResponseRandom,
) -> &'static str {
    select_response(Mood::from_label_or_neutral(label), random)
}

/// Resource owning the random source used by every widget that answers by mood.
#[derive(Resource)]
pub struct ResponseSelector {
    random: Box<dyn ResponseRandom>,
}

impl ResponseSelector {
    pub fn new(random: Box<dyn ResponseRandom>) -> Self {
        Self { random }
    }

    pub fn select(&mut self, mood: Mood) -> &'static str {
        select_response(mood, self.random.as_mut())
    }
}

impl Default for ResponseSelector {
    fn default() -> Self {
        Self::new(Box::new(EntropyRandom::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mood_selects_from_its_own_table() {
        let mut random = EntropyRandom::seeded(7);
        for mood in Mood::ALL {
            for _ in 0..20 {
                let response = select_response(mood, &mut random);
                assert!(responses_for(mood).contains(&response));
            }
        }
    }

    #[test]
    fn unknown_labels_use_the_neutral_table() {
        let mut random = ScriptedRandom::new(vec![0, 1, 2, 3, 4]);
        for _ in 0..RESPONSES_PER_MOOD {
            let response = select_response_for_label(Some("bewildered"), &mut random);
            assert!(NEUTRAL_RESPONSES.contains(&response));
        }
        let response = select_response_for_label(None, &mut random);
        assert!(NEUTRAL_RESPONSES.contains(&response));
    }

    #[test]
    fn scripted_random_makes_selection_deterministic() {
        let mut selector = ResponseSelector::new(Box::new(ScriptedRandom::new(vec![3, 9])));
        assert_eq!(selector.select(Mood::Happy), HAPPY_RESPONSES[3]);
        // 9 wraps into range for a five-entry table.
        assert_eq!(selector.select(Mood::Sad), SAD_RESPONSES[4]);
        assert_eq!(selector.select(Mood::Tired), TIRED_RESPONSES[3]);
    }

    #[test]
    fn tables_hold_distinct_entries() {
        for mood in Mood::ALL {
            let table = responses_for(mood);
            for (index, entry) in table.iter().enumerate() {
                assert!(!entry.is_empty());
                assert!(!table[index + 1..].contains(entry));
            }
        }
    }
}
