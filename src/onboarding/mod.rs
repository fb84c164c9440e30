//! Multi-step interest-selection wizard.
pub mod plugin;
pub mod systems;
pub mod wizard;

pub use plugin::OnboardingPlugin;
pub use systems::{OnboardingCompleted, WizardAction};
pub use wizard::{LearningGoal, OnboardingProfile, OnboardingWizard, WizardError, WizardStep, INTERESTS};
