//! Voice command widget state: visibility, listening, and transcript dispatch.
use bevy::prelude::*;

use crate::speech::{
    RecognitionErrorCode, RecognitionOutcome, SpeechCapability, SpeechError, SpeechRecognizer,
};

use super::dispatcher::{dispatch, DispatchOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListeningState {
    /// Recognition is unsupported (or not yet detected).
    #[default]
    Hidden,
    Idle,
    Listening,
}

#[derive(Resource, Debug, Default)]
pub struct VoiceCommandWidget {
    state: ListeningState,
    unsupported_notified: bool,
    commands_dispatched: u32,
    last_transcript: Option<String>,
}

impl VoiceCommandWidget {
    pub fn state(&self) -> ListeningState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state != ListeningState::Hidden
    }

    pub fn is_listening(&self) -> bool {
        self.state == ListeningState::Listening
    }

    pub fn commands_dispatched(&self) -> u32 {
        self.commands_dispatched
    }

    pub fn last_transcript(&self) -> Option<&str> {
        self.last_transcript.as_deref()
    }

    /// Applies the startup feature detection. Returns `true` the first time
    /// the widget is hidden for lack of a recognizer.
    pub fn apply_support(&mut self, supported: bool) -> bool {
        if supported {
            if self.state == ListeningState::Hidden {
                self.state = ListeningState::Idle;
            }
            return false;
        }

        self.state = ListeningState::Hidden;
        let first_time = !self.unsupported_notified;
        self.unsupported_notified = true;
        first_time
    }

    pub fn start_listening(&mut self, recognizer: &mut dyn SpeechRecognizer) -> Result<(), SpeechError> {
        match self.state {
            ListeningState::Hidden => Err(SpeechError::unsupported(SpeechCapability::Recognition)),
            ListeningState::Listening => Err(SpeechError::AlreadyListening),
            ListeningState::Idle => {
                recognizer.start()?;
                self.state = ListeningState::Listening;
                Ok(())
            }
        }
    }

    pub fn stop_listening(&mut self, recognizer: &mut dyn SpeechRecognizer) {
        if self.state == ListeningState::Listening {
            recognizer.stop();
            self.state = ListeningState::Idle;
        }
    }

    /// Consumes the final outcome of a session; listening ends either way.
    pub fn receive(&mut self, outcome: RecognitionOutcome) -> Result<DispatchOutcome, RecognitionErrorCode> {
        if self.state == ListeningState::Listening {
            self.state = ListeningState::Idle;
        }

        match outcome {
            RecognitionOutcome::Transcript(transcript) => {
                let dispatched = dispatch(&transcript);
                self.commands_dispatched += 1;
                self.last_transcript = Some(transcript);
                Ok(dispatched)
            }
            RecognitionOutcome::Error(code) => Err(code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        navigation::Route,
        speech::recognition::{ScriptedRecognizer, UnavailableRecognizer},
    };

    #[test]
    fn unsupported_recognition_hides_widget_once() {
        let mut widget = VoiceCommandWidget::default();
        assert!(widget.apply_support(false));
        assert!(!widget.apply_support(false));
        assert!(!widget.is_visible());

        let mut recognizer = UnavailableRecognizer;
        assert!(widget.start_listening(&mut recognizer).is_err());
    }

    #[test]
    fn transcript_is_dispatched_and_listening_resets() {
        let mut widget = VoiceCommandWidget::default();
        widget.apply_support(true);
        let mut recognizer = ScriptedRecognizer::from_transcripts("open skills");

        widget.start_listening(&mut recognizer).unwrap();
        assert!(widget.is_listening());
        assert_eq!(
            widget.start_listening(&mut recognizer),
            Err(SpeechError::AlreadyListening)
        );

        let outcome = recognizer.poll().unwrap();
        let dispatched = widget.receive(outcome).unwrap();
        assert_eq!(dispatched.effect.route(), Some(Route::Skills));
        assert_eq!(widget.state(), ListeningState::Idle);
        assert_eq!(widget.commands_dispatched(), 1);
        assert_eq!(widget.last_transcript(), Some("open skills"));
    }

    #[test]
    fn recognition_error_resets_listening() {
        let mut widget = VoiceCommandWidget::default();
        widget.apply_support(true);
        let mut recognizer = ScriptedRecognizer::new([RecognitionOutcome::Error(
            RecognitionErrorCode::NotAllowed,
        )]);

        widget.start_listening(&mut recognizer).unwrap();
        let outcome = recognizer.poll().unwrap();
        assert_eq!(widget.receive(outcome), Err(RecognitionErrorCode::NotAllowed));
        assert_eq!(widget.state(), ListeningState::Idle);
        assert_eq!(widget.commands_dispatched(), 0);
    }

    #[test]
    fn stop_listening_returns_to_idle() {
        let mut widget = VoiceCommandWidget::default();
        widget.apply_support(true);
        let mut recognizer = ScriptedRecognizer::from_transcripts("hello");

        widget.start_listening(&mut recognizer).unwrap();
        widget.stop_listening(&mut recognizer);
        assert_eq!(widget.state(), ListeningState::Idle);
        assert!(!recognizer.is_listening());
    }
}
