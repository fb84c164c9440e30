//! Messages driving the voice guide and the voice command widget.
use bevy::prelude::Message;

use super::dispatcher::DispatchOutcome;

#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideControl {
    Open,
    Close,
}

#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceCommandControl {
    StartListening,
    StopListening,
}

/// Fired once a final transcript has been dispatched.
#[derive(Message, Debug, Clone)]
pub struct VoiceCommandDispatched {
    pub transcript: String,
    pub outcome: DispatchOutcome,
}
