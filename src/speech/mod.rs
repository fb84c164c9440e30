//! Speech collaborators: text-to-speech and speech-to-text behind traits.
pub mod errors;
pub mod plugin;
pub mod recognition;
pub mod synthesis;

pub use errors::{RecognitionErrorCode, SpeechCapability, SpeechError};
pub use plugin::{SpeechCapabilities, SpeechPlugin, SpeechRecognition, SpeechSynthesis, SynthesisCallback};
pub use recognition::{RecognitionOutcome, SpeechRecognizer};
pub use synthesis::{SpeechSynthesizer, SynthesisEvent, UtteranceId};
