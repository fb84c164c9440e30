//! Chat-style assistant answering with mood-keyed canned responses.
pub mod chat;
pub mod events;
pub mod plugin;
pub mod systems;

pub use chat::{ChatAssistant, ChatTurn, Speaker};
pub use events::{ChatControl, ChatMessageSent, ChatReplyDelivered, ChatSubmit};
pub use plugin::AssistantPlugin;
