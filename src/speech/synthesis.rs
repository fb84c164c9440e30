//! Text-to-speech collaborator and its native backends.
use std::{collections::VecDeque, fmt, time::Duration};

use bevy::log::info;

use super::errors::{SpeechCapability, SpeechError};

const MIN_UTTERANCE_SECONDS: f32 = 0.4;

/// Identifier handed out for each queued utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtteranceId(u64);

impl UtteranceId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UtteranceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UTT-{:04}", self.0)
    }
}

/// Start/end/error callbacks, delivered by polling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthesisEvent {
    Started(UtteranceId),
    Ended(UtteranceId),
    Failed { id: UtteranceId, error: SpeechError },
}

impl SynthesisEvent {
    pub fn utterance(&self) -> UtteranceId {
        match self {
            Self::Started(id) | Self::Ended(id) | Self::Failed { id, .. } => *id,
        }
    }
}

/// Contract every text-to-speech backend must satisfy.
pub trait SpeechSynthesizer: Send + Sync + 'static {
    fn is_available(&self) -> bool;

    /// Queues `text`; callbacks for it arrive through `poll`.
    fn speak(&mut self, text: &str) -> Result<UtteranceId, SpeechError>;

    /// Drops the in-flight utterance and everything queued behind it.
    fn cancel(&mut self);

    /// Drops one utterance, leaving the rest of the queue to play.
    fn cancel_utterance(&mut self, id: UtteranceId);

    /// Advances playback by `delta` and drains pending callbacks.
    fn poll(&mut self, delta: Duration) -> Vec<SynthesisEvent>;
}

#[derive(Debug)]
struct QueuedUtterance {
    id: UtteranceId,
    text: String,
    remaining: f32,
    started: bool,
}

/// Native synthesizer that logs each line and simulates its speaking time
/// from the word count.
#[derive(Debug)]
pub struct SimulatedSynthesizer {
    words_per_minute: f32,
    queue: VecDeque<QueuedUtterance>,
    next_id: u64,
}

impl SimulatedSynthesizer {
    pub fn new(words_per_minute: f32) -> Self {
        Self {
            words_per_minute: words_per_minute.max(1.0),
            queue: VecDeque::new(),
            next_id: 1,
        }
    }

    /// Estimated speaking time for `text`.
    pub fn estimate_seconds(&self, text: &str) -> f32 {
        let words = text.split_whitespace().count() as f32;
        (words * 60.0 / self.words_per_minute).max(MIN_UTTERANCE_SECONDS)
    }

    pub fn is_speaking(&self) -> bool {
        self.queue.front().is_some_and(|utterance| utterance.started)
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl SpeechSynthesizer for SimulatedSynthesizer {
    fn is_available(&self) -> bool {
        true
    }

    fn speak(&mut self, text: &str) -> Result<UtteranceId, SpeechError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(SpeechError::backend("nothing to speak"));
        }

        let id = UtteranceId::new(self.next_id);
        self.next_id += 1;
        let remaining = self.estimate_seconds(trimmed);
        self.queue.push_back(QueuedUtterance {
            id,
            text: trimmed.to_string(),
            remaining,
            started: false,
        });
        Ok(id)
    }

    fn cancel(&mut self) {
        self.queue.clear();
    }

    fn cancel_utterance(&mut self, id: UtteranceId) {
        self.queue.retain(|utterance| utterance.id != id);
    }

    fn poll(&mut self, delta: Duration) -> Vec<SynthesisEvent> {
        let mut events = Vec::new();
        let mut budget = delta.as_secs_f32();

        while let Some(current) = self.queue.front_mut() {
            if !current.started {
                current.started = true;
                info!(target: "speech", "🔊 {} \"{}\"", current.id, current.text);
                events.push(SynthesisEvent::Started(current.id));
            }

            if current.remaining > budget {
                current.remaining -= budget;
                break;
            }

            budget -= current.remaining;
            events.push(SynthesisEvent::Ended(current.id));
            self.queue.pop_front();
        }

        events
    }
}

/// Backend used when no speech engine exists on the platform.
#[derive(Debug, Default)]
pub struct UnavailableSynthesizer;

impl SpeechSynthesizer for UnavailableSynthesizer {
    fn is_available(&self) -> bool {
        false
    }

    fn speak(&mut self, _text: &str) -> Result<UtteranceId, SpeechError> {
        Err(SpeechError::unsupported(SpeechCapability::Synthesis))
    }

    fn cancel(&mut self) {}

    fn cancel_utterance(&mut self, _id: UtteranceId) {}

    fn poll(&mut self, _delta: Duration) -> Vec<SynthesisEvent> {
        Vec::new()
    }
}
