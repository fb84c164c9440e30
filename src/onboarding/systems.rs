//! Wizard actions, validation notices and completion side effects.
use bevy::prelude::*;

use crate::{
    achievements::{catalog::ONBOARDING_COMPLETE, UnlockAchievementRequest},
    navigation::{NavigateRequest, Route},
    notices::NoticeRequest,
    storage::LocalStorage,
};

use super::wizard::{LearningGoal, OnboardingProfile, OnboardingWizard, WizardError};

#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub enum WizardAction {
    ToggleInterest(String),
    ChooseGoal(LearningGoal),
    Next,
    Back,
    Finish,
}

/// Fired once the wizard completes.
#[derive(Message, Debug, Clone)]
pub struct OnboardingCompleted {
    pub profile: OnboardingProfile,
}

/// Logs a previously completed onboarding, if any.
pub fn log_stored_onboarding(storage: Res<LocalStorage>) {
    match OnboardingProfile::restore(&**storage) {
        Ok(Some(profile)) => info!(
            "Onboarding previously completed: {} interests, goal {}",
            profile.interests.len(),
            profile.goal
        ),
        Ok(None) => debug!(target: "onboarding", "No stored onboarding profile"),
        Err(err) => warn!(target: "onboarding", "Ignoring stored onboarding profile: {}", err),
    }
}

pub fn apply_wizard_actions(
    mut actions: MessageReader<WizardAction>,
    mut wizard: ResMut<OnboardingWizard>,
    mut storage: ResMut<LocalStorage>,
    mut notices: MessageWriter<NoticeRequest>,
    mut unlocks: MessageWriter<UnlockAchievementRequest>,
    mut navigation: MessageWriter<NavigateRequest>,
    mut completed: MessageWriter<OnboardingCompleted>,
) {
    for action in actions.read() {
        let result: Result<(), WizardError> = match action {
            WizardAction::ToggleInterest(label) => wizard.toggle_interest(label).map(|_| ()),
            WizardAction::ChooseGoal(goal) => wizard.choose_goal(*goal),
            WizardAction::Next => wizard
                .next()
                .map(|step| debug!(target: "onboarding", "Wizard moved on to {}", step)),
            WizardAction::Back => wizard
                .back()
                .map(|step| debug!(target: "onboarding", "Wizard moved back to {}", step)),
            WizardAction::Finish => wizard.finish().map(|profile| {
                if let Err(err) = profile.persist(&mut **storage) {
                    warn!(target: "onboarding", "Failed to store onboarding profile: {}", err);
                }
                info!(
                    "Onboarding complete: {} ({})",
                    profile.interests.join(", "),
                    profile.goal
                );
                notices.write(NoticeRequest::success("You're all set! Your dashboard is ready."));
                unlocks.write(UnlockAchievementRequest::new(ONBOARDING_COMPLETE));
                navigation.write(NavigateRequest::to(Route::Dashboard));
                completed.write(OnboardingCompleted { profile });
            }),
        };

        if let Err(err) = result {
            debug!(target: "onboarding", "Wizard refused {:?}: {}", action, err);
            notices.write(NoticeRequest::warning(err.to_string()));
        }
    }
}
