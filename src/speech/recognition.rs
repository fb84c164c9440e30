//! Speech-to-text collaborator and its native backends.
use std::collections::VecDeque;

use super::errors::{RecognitionErrorCode, SpeechCapability, SpeechError};

/// Final result of one listening session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionOutcome {
    Transcript(String),
    Error(RecognitionErrorCode),
}

/// Contract every speech-to-text backend must satisfy.
pub trait SpeechRecognizer: Send + Sync + 'static {
    fn is_available(&self) -> bool;

    fn start(&mut self) -> Result<(), SpeechError>;

    fn stop(&mut self);

    fn is_listening(&self) -> bool;

    /// Returns the final outcome once the current session completes.
    fn poll(&mut self) -> Option<RecognitionOutcome>;
}

/// Backend used when the platform offers no recognizer.
#[derive(Debug, Default)]
pub struct UnavailableRecognizer;

impl SpeechRecognizer for UnavailableRecognizer {
    fn is_available(&self) -> bool {
        false
    }

    fn start(&mut self) -> Result<(), SpeechError> {
        Err(SpeechError::unsupported(SpeechCapability::Recognition))
    }

    fn stop(&mut self) {}

    fn is_listening(&self) -> bool {
        false
    }

    fn poll(&mut self) -> Option<RecognitionOutcome> {
        None
    }
}

/// Recognizer replaying a prepared list of outcomes, one per listening session.
#[derive(Debug, Default)]
pub struct ScriptedRecognizer {
    outcomes: VecDeque<RecognitionOutcome>,
    listening: bool,
}

impl ScriptedRecognizer {
    pub fn new(outcomes: impl IntoIterator<Item = RecognitionOutcome>) -> Self {
        Self {
            outcomes: outcomes.into_iter().collect(),
            listening: false,
        }
    }

    /// Builds a recognizer from `;`-separated transcripts.
    pub fn from_transcripts(raw: &str) -> Self {
        Self::new(
            raw.split(';')
                .map(str::trim)
                .filter(|transcript| !transcript.is_empty())
                .map(|transcript| RecognitionOutcome::Transcript(transcript.to_string())),
        )
    }

    pub fn remaining(&self) -> usize {
        self.outcomes.len()
    }
}

impl SpeechRecognizer for ScriptedRecognizer {
    fn is_available(&self) -> bool {
        true
    }

    fn start(&mut self) -> Result<(), SpeechError> {
        if self.listening {
            return Err(SpeechError::AlreadyListening);
        }
        self.listening = true;
        Ok(())
    }

    fn stop(&mut self) {
        self.listening = false;
    }

    fn is_listening(&self) -> bool {
        self.listening
    }

    fn poll(&mut self) -> Option<RecognitionOutcome> {
        if !self.listening {
            return None;
        }
        self.listening = false;
        Some(
            self.outcomes
                .pop_front()
                .unwrap_or(RecognitionOutcome::Error(RecognitionErrorCode::NoSpeech)),
        )
    }
}
