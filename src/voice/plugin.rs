//! Voice plugin wiring the guide overlay and the command widget.
use bevy::prelude::*;

use crate::{core::AppConfig, speech::plugin::poll_speech_synthesis};

use super::{
    command::VoiceCommandWidget,
    events::{GuideControl, VoiceCommandControl, VoiceCommandDispatched},
    guide::VoiceGuide,
    systems::{
        advance_voice_guide, detect_voice_support, handle_guide_controls,
        handle_voice_command_controls, poll_voice_recognition,
    },
};

pub struct VoicePlugin;

impl Plugin for VoicePlugin {
    fn build(&self, app: &mut App) {
        let guide = app
            .world()
            .get_resource::<AppConfig>()
            .map(|config| VoiceGuide::new(&config.voice_guide))
            .unwrap_or_default();

        app.insert_resource(guide)
            .init_resource::<VoiceCommandWidget>()
            .add_message::<GuideControl>()
            .add_message::<VoiceCommandControl>()
            .add_message::<VoiceCommandDispatched>()
            .add_systems(Startup, detect_voice_support)
            .add_systems(
                Update,
                (
                    (handle_guide_controls, advance_voice_guide).chain(),
                    (handle_voice_command_controls, poll_voice_recognition).chain(),
                )
                    .after(poll_speech_synthesis),
            );
    }
}
