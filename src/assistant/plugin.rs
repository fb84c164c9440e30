//! Chat assistant plugin.
use bevy::prelude::*;

use crate::core::AppConfig;

use super::{
    chat::ChatAssistant,
    events::{ChatControl, ChatMessageSent, ChatReplyDelivered, ChatSubmit},
    systems::{deliver_chat_replies, handle_chat_controls, submit_chat_messages},
};

pub struct AssistantPlugin;

impl Plugin for AssistantPlugin {
    fn build(&self, app: &mut App) {
        let assistant = app
            .world()
            .get_resource::<AppConfig>()
            .map(|config| ChatAssistant::new(&config.assistant))
            .unwrap_or_default();

        app.insert_resource(assistant)
            .add_message::<ChatControl>()
            .add_message::<ChatSubmit>()
            .add_message::<ChatMessageSent>()
            .add_message::<ChatReplyDelivered>()
            .add_systems(
                Update,
                (handle_chat_controls, submit_chat_messages, deliver_chat_replies).chain(),
            );
    }
}
