//! Speech plugin selecting backends and delivering synthesis callbacks.
use std::env;

use bevy::prelude::*;

use crate::core::{AppConfig, UiClock};

use super::{
    recognition::{ScriptedRecognizer, SpeechRecognizer, UnavailableRecognizer},
    synthesis::{SimulatedSynthesizer, SpeechSynthesizer, SynthesisEvent, UnavailableSynthesizer},
};

const DISABLE_TTS_ENV: &str = "EM_SPHERE_DISABLE_TTS";
const SCRIPTED_TRANSCRIPTS_ENV: &str = "EM_SPHERE_SCRIPTED_TRANSCRIPTS";

/// Resource wrapping the active text-to-speech backend.
#[derive(Resource)]
pub struct SpeechSynthesis(pub Box<dyn SpeechSynthesizer>);

/// Resource wrapping the active speech-to-text backend.
#[derive(Resource)]
pub struct SpeechRecognition(pub Box<dyn SpeechRecognizer>);

/// Feature-detection results captured once at startup.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeechCapabilities {
    pub synthesis: bool,
    pub recognition: bool,
}

impl SpeechCapabilities {
    pub fn detect(synthesis: &dyn SpeechSynthesizer, recognition: &dyn SpeechRecognizer) -> Self {
        Self {
            synthesis: synthesis.is_available(),
            recognition: recognition.is_available(),
        }
    }
}

/// A synthesis callback forwarded to widgets.
#[derive(Message, Debug, Clone)]
pub struct SynthesisCallback(pub SynthesisEvent);

pub struct SpeechPlugin;

impl Plugin for SpeechPlugin {
    fn build(&self, app: &mut App) {
        let words_per_minute = app
            .world()
            .get_resource::<AppConfig>()
            .map(|config| config.voice_guide.words_per_minute)
            .unwrap_or_else(|| AppConfig::default().voice_guide.words_per_minute);

        let synthesis: Box<dyn SpeechSynthesizer> = if env::var_os(DISABLE_TTS_ENV).is_some() {
            Box::new(UnavailableSynthesizer)
        } else {
            Box::new(SimulatedSynthesizer::new(words_per_minute))
        };

        let recognition: Box<dyn SpeechRecognizer> = match env::var(SCRIPTED_TRANSCRIPTS_ENV) {
            Ok(raw) if !raw.trim().is_empty() => Box::new(ScriptedRecognizer::from_transcripts(&raw)),
            _ => Box::new(UnavailableRecognizer),
        };

        let capabilities = SpeechCapabilities::detect(synthesis.as_ref(), recognition.as_ref());

        app.insert_resource(SpeechSynthesis(synthesis))
            .insert_resource(SpeechRecognition(recognition))
            .insert_resource(capabilities)
            .add_message::<SynthesisCallback>()
            .add_systems(Startup, log_speech_capabilities)
            .add_systems(Update, poll_speech_synthesis);
    }
}

fn log_speech_capabilities(capabilities: Res<SpeechCapabilities>) {
    info!(
        "SpeechPlugin initialised (synthesis: {}, recognition: {})",
        capabilities.synthesis, capabilities.recognition
    );
}

/// Advances the synthesizer and forwards its callbacks.
pub fn poll_speech_synthesis(
    clock: Res<UiClock>,
    mut synthesis: ResMut<SpeechSynthesis>,
    mut callbacks: MessageWriter<SynthesisCallback>,
) {
    for event in synthesis.0.poll(clock.last_delta()) {
        callbacks.write(SynthesisCallback(event));
    }
}
