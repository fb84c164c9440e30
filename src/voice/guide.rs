//! Voice guide overlay: speaks guide lines one after another with a pause between them.
use std::time::Duration;

use bevy::prelude::*;

use crate::{
    core::config::VoiceGuideConfig,
    speech::{SpeechError, SpeechSynthesizer, SynthesisEvent, UtteranceId},
};

/// Where the guide is in its script.
#[derive(Debug, Clone)]
pub enum GuidePhase {
    Hidden,
    Speaking { line: usize, utterance: UtteranceId },
    Pausing { next_line: usize, timer: Timer },
}

/// What changed after driving the guide; systems turn this into notices and logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuideUpdate {
    Unchanged,
    SpeakingLine(usize),
    Finished,
    Closed,
    Unavailable { first_time: bool },
    Failed(SpeechError),
}

#[derive(Resource, Debug)]
pub struct VoiceGuide {
    lines: Vec<String>,
    pause_seconds: f32,
    phase: GuidePhase,
    unavailable_notified: bool,
}

impl VoiceGuide {
    pub fn new(config: &VoiceGuideConfig) -> Self {
        Self {
            lines: config.lines.clone(),
            pause_seconds: config.pause_seconds,
            phase: GuidePhase::Hidden,
            unavailable_notified: false,
        }
    }

    pub fn phase(&self) -> &GuidePhase {
        &self.phase
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.phase, GuidePhase::Hidden)
    }

    /// Caption for the line being spoken, if any.
    pub fn caption(&self) -> Option<&str> {
        match &self.phase {
            GuidePhase::Speaking { line, .. } => self.lines.get(*line).map(String::as_str),
            _ => None,
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Opens the overlay and starts the first line. Opening an open guide does nothing.
    pub fn open(&mut self, synth: &mut dyn SpeechSynthesizer) -> GuideUpdate {
        if self.is_open() {
            return GuideUpdate::Unchanged;
        }

        if !synth.is_available() || self.lines.is_empty() {
            let first_time = !self.unavailable_notified;
            self.unavailable_notified = true;
            return GuideUpdate::Unavailable { first_time };
        }

        self.speak_line(0, synth)
    }

    /// Closes the overlay, cancelling its own utterance and any pause timer.
    /// Other speech queued on the synthesizer keeps playing.
    pub fn close(&mut self, synth: &mut dyn SpeechSynthesizer) -> GuideUpdate {
        if !self.is_open() {
            return GuideUpdate::Unchanged;
        }

        if let GuidePhase::Speaking { utterance, .. } = self.phase {
            synth.cancel_utterance(utterance);
        }
        self.phase = GuidePhase::Hidden;
        GuideUpdate::Closed
    }

    /// Handles a synthesis callback; callbacks for other utterances are ignored.
    pub fn on_callback(&mut self, event: &SynthesisEvent) -> GuideUpdate {
        let GuidePhase::Speaking { line, utterance } = self.phase else {
            return GuideUpdate::Unchanged;
        };
        if event.utterance() != utterance {
            return GuideUpdate::Unchanged;
        }

        match event {
            SynthesisEvent::Started(_) => GuideUpdate::Unchanged,
            SynthesisEvent::Ended(_) => {
                let next_line = line + 1;
                if next_line >= self.lines.len() {
                    self.phase = GuidePhase::Hidden;
                    return GuideUpdate::Finished;
                }
                self.phase = GuidePhase::Pausing {
                    next_line,
                    timer: Timer::from_seconds(self.pause_seconds, TimerMode::Once),
                };
                GuideUpdate::Unchanged
            }
            SynthesisEvent::Failed { error, .. } => {
                self.phase = GuidePhase::Hidden;
                GuideUpdate::Failed(error.clone())
            }
        }
    }

    /// Advances the pause timer and speaks the next line when it elapses.
    pub fn tick(&mut self, delta: Duration, synth: &mut dyn SpeechSynthesizer) -> GuideUpdate {
        let GuidePhase::Pausing { next_line, timer } = &mut self.phase else {
            return GuideUpdate::Unchanged;
        };

        timer.tick(delta);
        if !timer.is_finished() {
            return GuideUpdate::Unchanged;
        }

        let next_line = *next_line;
        self.speak_line(next_line, synth)
    }

    fn speak_line(&mut self, line: usize, synth: &mut dyn SpeechSynthesizer) -> GuideUpdate {
        match synth.speak(&self.lines[line]) {
            Ok(utterance) => {
                self.phase = GuidePhase::Speaking { line, utterance };
                GuideUpdate::SpeakingLine(line)
            }
            Err(error) => {
                self.phase = GuidePhase::Hidden;
                GuideUpdate::Failed(error)
            }
        }
    }
}

impl Default for VoiceGuide {
    fn default() -> Self {
        Self::new(&crate::core::AppConfig::default().voice_guide)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::synthesis::{SimulatedSynthesizer, UnavailableSynthesizer};

    fn guide(lines: &[&str], pause: f32) -> VoiceGuide {
        VoiceGuide::new(&VoiceGuideConfig {
            pause_seconds: pause,
            words_per_minute: 60.0,
            lines: lines.iter().map(|line| line.to_string()).collect(),
        })
    }

    fn drain(guide: &mut VoiceGuide, synth: &mut SimulatedSynthesizer, delta: Duration) -> Vec<GuideUpdate> {
        let mut updates = Vec::new();
        for event in synth.poll(delta) {
            updates.push(guide.on_callback(&event));
        }
        updates.push(guide.tick(delta, synth));
        updates.retain(|update| *update != GuideUpdate::Unchanged);
        updates
    }

    #[test]
    fn guide_speaks_every_line_then_finishes() {
        let mut synth = SimulatedSynthesizer::new(60.0);
        let mut guide = guide(&["first line", "second"], 0.5);

        assert_eq!(guide.open(&mut synth), GuideUpdate::SpeakingLine(0));
        assert_eq!(guide.caption(), Some("first line"));

        // "first line" lasts two seconds at 60 wpm.
        assert!(drain(&mut guide, &mut synth, Duration::from_secs(2)).is_empty());
        assert!(matches!(guide.phase(), GuidePhase::Pausing { next_line: 1, .. }));
        assert_eq!(guide.caption(), None);

        let updates = drain(&mut guide, &mut synth, Duration::from_millis(600));
        assert_eq!(updates, vec![GuideUpdate::SpeakingLine(1)]);

        let updates = drain(&mut guide, &mut synth, Duration::from_secs(2));
        assert_eq!(updates, vec![GuideUpdate::Finished]);
        assert!(!guide.is_open());
    }

    #[test]
    fn close_cancels_speech_and_pending_pause() {
        let mut synth = SimulatedSynthesizer::new(60.0);
        let mut guide = guide(&["one", "two"], 5.0);

        guide.open(&mut synth);
        synth.poll(Duration::from_millis(100));
        assert_eq!(guide.close(&mut synth), GuideUpdate::Closed);
        assert_eq!(synth.pending(), 0);
        assert!(synth.poll(Duration::from_secs(5)).is_empty());

        guide.open(&mut synth);
        drain(&mut guide, &mut synth, Duration::from_secs(1));
        assert!(matches!(guide.phase(), GuidePhase::Pausing { .. }));
        assert_eq!(guide.close(&mut synth), GuideUpdate::Closed);
        assert_eq!(guide.tick(Duration::from_secs(10), &mut synth), GuideUpdate::Unchanged);
        assert_eq!(synth.pending(), 0);
    }

    #[test]
    fn close_leaves_other_speech_queued() {
        let mut synth = SimulatedSynthesizer::new(60.0);
        let mut guide = guide(&["welcome to the tour"], 0.5);

        guide.open(&mut synth);
        let reply = synth.speak("opening skills").unwrap();
        assert_eq!(synth.pending(), 2);

        guide.close(&mut synth);
        assert_eq!(synth.pending(), 1);
        assert_eq!(
            synth.poll(Duration::from_secs(5)),
            vec![SynthesisEvent::Started(reply), SynthesisEvent::Ended(reply)]
        );
    }

    #[test]
    fn unavailable_synthesis_is_reported_once() {
        let mut synth = UnavailableSynthesizer;
        let mut guide = guide(&["hello"], 0.5);

        assert_eq!(
            guide.open(&mut synth),
            GuideUpdate::Unavailable { first_time: true }
        );
        assert_eq!(
            guide.open(&mut synth),
            GuideUpdate::Unavailable { first_time: false }
        );
        assert!(!guide.is_open());
    }

    #[test]
    fn foreign_callbacks_are_ignored() {
        let mut synth = SimulatedSynthesizer::new(60.0);
        let mut guide = guide(&["one"], 0.5);
        guide.open(&mut synth);

        let foreign = SynthesisEvent::Ended(UtteranceId::new(999));
        assert_eq!(guide.on_callback(&foreign), GuideUpdate::Unchanged);
        assert!(guide.is_open());
    }

    #[test]
    fn synthesis_failure_closes_the_guide() {
        let mut synth = SimulatedSynthesizer::new(60.0);
        let mut guide = guide(&["one"], 0.5);
        let GuideUpdate::SpeakingLine(_) = guide.open(&mut synth) else {
            panic!("guide should start speaking");
        };
        let GuidePhase::Speaking { utterance, .. } = guide.phase().clone() else {
            panic!("guide should be speaking");
        };

        let failure = SynthesisEvent::Failed {
            id: utterance,
            error: SpeechError::backend("voice missing"),
        };
        assert!(matches!(guide.on_callback(&failure), GuideUpdate::Failed(_)));
        assert!(!guide.is_open());
    }
}
