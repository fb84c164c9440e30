//! Systems wiring the voice widgets to the speech collaborators.
use bevy::prelude::*;

use crate::{
    core::UiClock,
    mood::{MoodReportRequest, MoodSource},
    navigation::NavigateRequest,
    notices::NoticeRequest,
    speech::{
        SpeechCapabilities, SpeechRecognition, SpeechRecognizer, SpeechSynthesis, SpeechSynthesizer,
        SynthesisCallback,
    },
};

use super::{
    command::{ListeningState, VoiceCommandWidget},
    events::{GuideControl, VoiceCommandControl, VoiceCommandDispatched},
    guide::{GuideUpdate, VoiceGuide},
};

/// Hides the command widget when no recognizer exists and says so once.
pub fn detect_voice_support(
    capabilities: Res<SpeechCapabilities>,
    mut widget: ResMut<VoiceCommandWidget>,
    mut notices: MessageWriter<NoticeRequest>,
) {
    if widget.apply_support(capabilities.recognition) {
        warn!(target: "voice", "Speech recognition unavailable; hiding voice commands");
        notices.write(NoticeRequest::warning(
            "Voice commands are not supported on this device.",
        ));
    }
}

pub fn handle_guide_controls(
    mut controls: MessageReader<GuideControl>,
    mut guide: ResMut<VoiceGuide>,
    mut synthesis: ResMut<SpeechSynthesis>,
    mut notices: MessageWriter<NoticeRequest>,
) {
    for control in controls.read() {
        let update = match control {
            GuideControl::Open => guide.open(synthesis.0.as_mut()),
            GuideControl::Close => guide.close(synthesis.0.as_mut()),
        };
        report_guide_update(update, &mut notices);
    }
}

/// Feeds synthesis callbacks to the guide and runs its pause timer.
pub fn advance_voice_guide(
    mut callbacks: MessageReader<SynthesisCallback>,
    clock: Res<UiClock>,
    mut guide: ResMut<VoiceGuide>,
    mut synthesis: ResMut<SpeechSynthesis>,
    mut notices: MessageWriter<NoticeRequest>,
) {
    for callback in callbacks.read() {
        let update = guide.on_callback(&callback.0);
        report_guide_update(update, &mut notices);
    }

    let update = guide.tick(clock.last_delta(), synthesis.0.as_mut());
    report_guide_update(update, &mut notices);
}

fn report_guide_update(update: GuideUpdate, notices: &mut MessageWriter<NoticeRequest>) {
    match update {
        GuideUpdate::Unchanged => {}
        GuideUpdate::SpeakingLine(line) => {
            debug!(target: "voice", "Voice guide speaking line {}", line + 1);
        }
        GuideUpdate::Finished => info!(target: "voice", "Voice guide finished its script"),
        GuideUpdate::Closed => info!(target: "voice", "Voice guide closed"),
        GuideUpdate::Unavailable { first_time: true } => {
            warn!(target: "voice", "Speech synthesis unavailable; voice guide stays hidden");
            notices.write(NoticeRequest::warning(
                "The voice guide needs speech output, which is not available here.",
            ));
        }
        GuideUpdate::Unavailable { first_time: false } => {
            debug!(target: "voice", "Voice guide still unavailable");
        }
        GuideUpdate::Failed(err) => {
            warn!(target: "voice", "Voice guide stopped: {}", err);
            notices.write(NoticeRequest::warning("The voice guide stopped unexpectedly."));
        }
    }
}

pub fn handle_voice_command_controls(
    mut controls: MessageReader<VoiceCommandControl>,
    mut widget: ResMut<VoiceCommandWidget>,
    mut recognition: ResMut<SpeechRecognition>,
    mut notices: MessageWriter<NoticeRequest>,
) {
    for control in controls.read() {
        match control {
            VoiceCommandControl::StartListening => match widget.state() {
                // Startup detection already told the user.
                ListeningState::Hidden => {
                    debug!(target: "voice", "Ignoring listen request; recognition unsupported");
                }
                ListeningState::Listening => {
                    debug!(target: "voice", "Already listening");
                }
                ListeningState::Idle => match widget.start_listening(recognition.0.as_mut()) {
                    Ok(()) => info!(target: "voice", "🎤 Listening for a command"),
                    Err(err) => {
                        warn!(target: "voice", "Could not start listening: {}", err);
                        notices.write(NoticeRequest::warning("Voice commands are unavailable right now."));
                    }
                },
            },
            VoiceCommandControl::StopListening => {
                if widget.is_listening() {
                    widget.stop_listening(recognition.0.as_mut());
                    info!(target: "voice", "🎤 Stopped listening");
                }
            }
        }
    }
}

/// Collects the final outcome of a listening session and applies its effects.
pub fn poll_voice_recognition(
    mut widget: ResMut<VoiceCommandWidget>,
    mut recognition: ResMut<SpeechRecognition>,
    mut synthesis: ResMut<SpeechSynthesis>,
    mut navigation: MessageWriter<NavigateRequest>,
    mut moods: MessageWriter<MoodReportRequest>,
    mut notices: MessageWriter<NoticeRequest>,
    mut dispatched: MessageWriter<VoiceCommandDispatched>,
) {
    if !widget.is_listening() {
        return;
    }
    let Some(outcome) = recognition.0.poll() else {
        return;
    };

    let outcome = match widget.receive(outcome) {
        Ok(outcome) => outcome,
        Err(code) => {
            warn!(target: "voice", "Recognition error: {}", code);
            notices.write(NoticeRequest::warning(code.user_message()));
            return;
        }
    };

    let transcript = widget.last_transcript().unwrap_or_default().to_string();
    info!(target: "voice", "Heard \"{}\"", transcript);

    if let Some(route) = outcome.effect.route() {
        navigation.write(NavigateRequest::to(route));
    }
    if let Some(mood) = outcome.mood_update {
        moods.write(MoodReportRequest {
            mood,
            source: MoodSource::Voice,
        });
    }

    let reply = outcome.effect.message().to_string();
    notices.write(NoticeRequest::info(reply.clone()));
    if synthesis.0.is_available() {
        if let Err(err) = synthesis.0.speak(&reply) {
            warn!(target: "voice", "Could not speak reply: {}", err);
        }
    }

    dispatched.write(VoiceCommandDispatched {
        transcript,
        outcome,
    });
}
