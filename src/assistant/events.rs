//! Chat assistant messages.
use bevy::prelude::Message;

use crate::mood::Mood;

#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatControl {
    Open,
    Close,
}

/// Text typed into the chat input.
#[derive(Message, Debug, Clone)]
pub struct ChatSubmit {
    pub text: String,
}

impl ChatSubmit {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Fired after a user message has been recorded.
#[derive(Message, Debug, Clone)]
pub struct ChatMessageSent {
    pub text: String,
    pub total_sent: u32,
}

/// Fired when the assistant finishes "typing" a reply.
#[derive(Message, Debug, Clone)]
pub struct ChatReplyDelivered {
    pub text: String,
    pub mood: Mood,
}
