//! Chat transcript with delayed, mood-aware replies.
use std::{collections::VecDeque, time::Duration};

use bevy::prelude::*;

use crate::{core::config::AssistantConfig, mood::Mood};

pub const GREETING: &str = "Hi! I'm your Em-Sphere assistant. How are you feeling today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub speaker: Speaker,
    pub text: String,
    /// Mood an assistant reply was chosen for.
    pub mood: Option<Mood>,
}

#[derive(Debug)]
struct PendingReply {
    timer: Timer,
}

#[derive(Resource, Debug)]
pub struct ChatAssistant {
    open: bool,
    turns: VecDeque<ChatTurn>,
    capacity: usize,
    pending: VecDeque<PendingReply>,
    response_delay: f32,
    messages_sent: u32,
}

impl ChatAssistant {
    pub fn new(config: &AssistantConfig) -> Self {
        Self {
            open: false,
            turns: VecDeque::new(),
            capacity: config.history_capacity.max(1),
            pending: VecDeque::new(),
            response_delay: config.response_delay_seconds.max(0.0),
            messages_sent: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens the chat, greeting the user on an empty transcript.
    pub fn open(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        if self.turns.is_empty() {
            self.record(ChatTurn {
                speaker: Speaker::Assistant,
                text: GREETING.to_string(),
                mood: None,
            });
        }
    }

    /// Closes the chat and drops replies still being "typed". Returns how many were dropped.
    pub fn close(&mut self) -> usize {
        self.open = false;
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    /// Records a user message and schedules a reply. Blank text is ignored.
    ///
    /// Returns the number of messages sent so far, or `None` when ignored.
    pub fn send(&mut self, text: &str) -> Option<u32> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        self.open();
        self.record(ChatTurn {
            speaker: Speaker::User,
            text: trimmed.to_string(),
            mood: None,
        });
        self.pending.push_back(PendingReply {
            timer: Timer::from_seconds(self.response_delay, TimerMode::Once),
        });
        self.messages_sent += 1;
        Some(self.messages_sent)
    }

    /// Advances typing delays; returns how many replies are now due.
    pub fn tick(&mut self, delta: Duration) -> usize {
        for reply in self.pending.iter_mut() {
            reply.timer.tick(delta);
        }

        let mut due = 0;
        while self
            .pending
            .front()
            .is_some_and(|reply| reply.timer.is_finished())
        {
            self.pending.pop_front();
            due += 1;
        }
        due
    }

    /// Appends an assistant reply chosen for `mood`.
    pub fn deliver(&mut self, text: impl Into<String>, mood: Mood) {
        self.record(ChatTurn {
            speaker: Speaker::Assistant,
            text: text.into(),
            mood: Some(mood),
        });
    }

    pub fn is_typing(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn turns(&self) -> impl Iterator<Item = &ChatTurn> {
        self.turns.iter()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn messages_sent(&self) -> u32 {
        self.messages_sent
    }

    fn record(&mut self, turn: ChatTurn) {
        self.turns.push_back(turn);
        while self.turns.len() > self.capacity {
            self.turns.pop_front();
        }
    }
}

impl Default for ChatAssistant {
    fn default() -> Self {
        Self::new(&crate::core::AppConfig::default().assistant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assistant(delay: f32, capacity: usize) -> ChatAssistant {
        ChatAssistant::new(&AssistantConfig {
            response_delay_seconds: delay,
            history_capacity: capacity,
        })
    }

    #[test]
    fn blank_messages_are_ignored() {
        let mut chat = assistant(1.0, 10);
        assert_eq!(chat.send("   "), None);
        assert!(chat.is_empty());
        assert!(!chat.is_typing());
    }

    #[test]
    fn reply_is_due_only_after_the_delay() {
        let mut chat = assistant(1.0, 10);
        assert_eq!(chat.send(" hello "), Some(1));
        assert!(chat.is_open());

        assert_eq!(chat.tick(Duration::from_millis(600)), 0);
        assert!(chat.is_typing());
        assert_eq!(chat.tick(Duration::from_millis(400)), 1);
        assert!(!chat.is_typing());

        chat.deliver("Great to hear!", Mood::Happy);
        let turns: Vec<_> = chat.turns().collect();
        assert_eq!(turns[0].text, GREETING);
        assert_eq!(turns[1].text, "hello");
        assert_eq!(turns[1].speaker, Speaker::User);
        assert_eq!(turns[2].mood, Some(Mood::Happy));
    }

    #[test]
    fn closing_drops_pending_replies() {
        let mut chat = assistant(2.0, 10);
        chat.send("one");
        chat.send("two");

        assert_eq!(chat.close(), 2);
        assert_eq!(chat.tick(Duration::from_secs(5)), 0);
        assert!(!chat.is_open());
    }

    #[test]
    fn transcript_is_bounded() {
        let mut chat = assistant(0.0, 3);
        for text in ["a", "b", "c", "d"] {
            chat.send(text);
        }

        assert_eq!(chat.len(), 3);
        let texts: Vec<_> = chat.turns().map(|turn| turn.text.as_str()).collect();
        assert_eq!(texts, vec!["b", "c", "d"]);
        assert_eq!(chat.messages_sent(), 4);
    }
}
