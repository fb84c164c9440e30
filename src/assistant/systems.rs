//! Systems driving the chat assistant.
use bevy::prelude::*;

use crate::{
    core::UiClock,
    mood::{MoodState, ResponseSelector},
};

use super::{
    chat::ChatAssistant,
    events::{ChatControl, ChatMessageSent, ChatReplyDelivered, ChatSubmit},
};

pub fn handle_chat_controls(
    mut controls: MessageReader<ChatControl>,
    mut assistant: ResMut<ChatAssistant>,
) {
    for control in controls.read() {
        match control {
            ChatControl::Open => assistant.open(),
            ChatControl::Close => {
                let dropped = assistant.close();
                if dropped > 0 {
                    debug!(target: "assistant", "Chat closed; dropped {} pending replies", dropped);
                }
            }
        }
    }
}

pub fn submit_chat_messages(
    mut submissions: MessageReader<ChatSubmit>,
    mut assistant: ResMut<ChatAssistant>,
    mut sent: MessageWriter<ChatMessageSent>,
) {
    for submission in submissions.read() {
        match assistant.send(&submission.text) {
            Some(total_sent) => {
                debug!(target: "assistant", "💬 User: {}", submission.text.trim());
                sent.write(ChatMessageSent {
                    text: submission.text.trim().to_string(),
                    total_sent,
                });
            }
            None => debug!(target: "assistant", "Ignoring blank chat message"),
        }
    }
}

/// Delivers replies whose typing delay elapsed, using the mood current right now.
pub fn deliver_chat_replies(
    clock: Res<UiClock>,
    mood: Res<MoodState>,
    mut selector: ResMut<ResponseSelector>,
    mut assistant: ResMut<ChatAssistant>,
    mut delivered: MessageWriter<ChatReplyDelivered>,
) {
    if !assistant.is_typing() {
        return;
    }

    let due = assistant.tick(clock.last_delta());
    for _ in 0..due {
        let current = mood.current();
        let text = selector.select(current);
        assistant.deliver(text, current);
        info!(target: "assistant", "🤖 Assistant ({}): {}", current, text);
        delivered.write(ChatReplyDelivered {
            text: text.to_string(),
            mood: current,
        });
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{
        core::config::AssistantConfig,
        mood::{
            responses::{responses_for, ScriptedRandom},
            Mood,
        },
    };

    #[derive(Resource, Default)]
    struct Captured {
        sent: Vec<ChatMessageSent>,
        delivered: Vec<ChatReplyDelivered>,
    }

    fn capture(
        mut captured: ResMut<Captured>,
        mut sent: MessageReader<ChatMessageSent>,
        mut delivered: MessageReader<ChatReplyDelivered>,
    ) {
        captured.sent.extend(sent.read().cloned());
        captured.delivered.extend(delivered.read().cloned());
    }

    fn build_app() -> App {
        let mut app = App::new();
        app.add_message::<ChatControl>()
            .add_message::<ChatSubmit>()
            .add_message::<ChatMessageSent>()
            .add_message::<ChatReplyDelivered>()
            .insert_resource(ChatAssistant::new(&AssistantConfig {
                response_delay_seconds: 1.0,
                history_capacity: 20,
            }))
            .insert_resource(ResponseSelector::new(Box::new(ScriptedRandom::new(vec![4]))))
            .init_resource::<MoodState>()
            .init_resource::<UiClock>()
            .init_resource::<Captured>()
            .add_systems(
                Update,
                (
                    handle_chat_controls,
                    submit_chat_messages,
                    deliver_chat_replies,
                    capture,
                )
                    .chain(),
            );
        app
    }

    #[test]
    fn reply_uses_the_mood_at_delivery_time() {
        let mut app = build_app();
        app.world_mut()
            .resource_mut::<UiClock>()
            .tick(Duration::from_millis(250));

        app.world_mut().write_message(ChatSubmit::new("hi there"));
        app.update();
        app.world_mut().write_message(ChatSubmit::new("  "));
        app.world_mut().resource_mut::<MoodState>().set(Mood::Anxious);

        for _ in 0..2 {
            app.update();
        }
        assert!(app.world().resource::<Captured>().delivered.is_empty());

        for _ in 0..3 {
            app.update();
        }

        let captured = app.world().resource::<Captured>();
        assert_eq!(captured.sent.len(), 1);
        assert_eq!(captured.sent[0].total_sent, 1);
        assert_eq!(captured.delivered.len(), 1);
        assert_eq!(captured.delivered[0].mood, Mood::Anxious);
        assert_eq!(captured.delivered[0].text, responses_for(Mood::Anxious)[4]);
    }

    #[test]
    fn closing_the_chat_cancels_the_reply() {
        let mut app = build_app();
        app.world_mut()
            .resource_mut::<UiClock>()
            .tick(Duration::from_millis(250));

        app.world_mut().write_message(ChatSubmit::new("hello"));
        app.update();
        app.world_mut().write_message(ChatControl::Close);
        for _ in 0..10 {
            app.update();
        }

        assert!(app.world().resource::<Captured>().delivered.is_empty());
        assert!(!app.world().resource::<ChatAssistant>().is_open());
    }
}
