//! Onboarding wizard plugin.
use bevy::prelude::*;

use crate::core::AppConfig;

use super::{
    systems::{apply_wizard_actions, log_stored_onboarding, OnboardingCompleted, WizardAction},
    wizard::OnboardingWizard,
};

pub struct OnboardingPlugin;

impl Plugin for OnboardingPlugin {
    fn build(&self, app: &mut App) {
        let wizard = app
            .world()
            .get_resource::<AppConfig>()
            .map(|config| OnboardingWizard::new(config.onboarding.max_interests))
            .unwrap_or_default();

        app.insert_resource(wizard)
            .add_message::<WizardAction>()
            .add_message::<OnboardingCompleted>()
            .add_systems(Startup, log_stored_onboarding)
            .add_systems(Update, apply_wizard_actions);
    }
}
