//! Error types surfaced by speech collaborators.
use std::fmt;

/// Browser-style capabilities the speech widgets depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeechCapability {
    Synthesis,
    Recognition,
}

impl fmt::Display for SpeechCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Synthesis => "speech synthesis",
            Self::Recognition => "speech recognition",
        };
        write!(f, "{}", label)
    }
}

/// Error codes a recognizer can report while listening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionErrorCode {
    NoSpeech,
    Aborted,
    AudioCapture,
    NotAllowed,
    Network,
    Other(String),
}

impl RecognitionErrorCode {
    /// Short text suitable for a transient notice.
    pub fn user_message(&self) -> &str {
        match self {
            Self::NoSpeech => "I didn't catch that. Try speaking again.",
            Self::Aborted => "Listening was interrupted.",
            Self::AudioCapture => "No microphone was found.",
            Self::NotAllowed => "Microphone access was denied.",
            Self::Network => "Speech recognition lost its connection.",
            Self::Other(_) => "Speech recognition hit a problem.",
        }
    }
}

impl fmt::Display for RecognitionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSpeech => write!(f, "no-speech"),
            Self::Aborted => write!(f, "aborted"),
            Self::AudioCapture => write!(f, "audio-capture"),
            Self::NotAllowed => write!(f, "not-allowed"),
            Self::Network => write!(f, "network"),
            Self::Other(code) => write!(f, "{}", code),
        }
    }
}

/// Errors returned synchronously by speech collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechError {
    Unsupported { capability: SpeechCapability },
    AlreadyListening,
    Backend { message: String },
}

impl SpeechError {
    pub fn unsupported(capability: SpeechCapability) -> Self {
        Self::Unsupported { capability }
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

impl fmt::Display for SpeechError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported { capability } => write!(f, "{} is not supported", capability),
            Self::AlreadyListening => write!(f, "recognizer is already listening"),
            Self::Backend { message } => write!(f, "speech backend failure: {}", message),
        }
    }
}

impl std::error::Error for SpeechError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_readable_messages() {
        let unsupported = SpeechError::unsupported(SpeechCapability::Recognition);
        assert_eq!(
            unsupported.to_string(),
            "speech recognition is not supported"
        );
        assert!(SpeechError::backend("engine crashed")
            .to_string()
            .contains("engine crashed"));

        assert_eq!(RecognitionErrorCode::NoSpeech.to_string(), "no-speech");
        assert_eq!(
            RecognitionErrorCode::Other("bad-grammar".into()).to_string(),
            "bad-grammar"
        );
        assert!(!RecognitionErrorCode::NotAllowed.user_message().is_empty());
    }
}
