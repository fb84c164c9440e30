//! Voice widgets: the spoken guide overlay and hands-free commands.
pub mod command;
pub mod dispatcher;
pub mod events;
pub mod guide;
pub mod plugin;
pub mod systems;

pub use command::{ListeningState, VoiceCommandWidget};
pub use dispatcher::{detect_mood, dispatch, CommandEffect, DispatchOutcome};
pub use events::{GuideControl, VoiceCommandControl, VoiceCommandDispatched};
pub use guide::VoiceGuide;
pub use plugin::VoicePlugin;
