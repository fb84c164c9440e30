//! Interest-selection wizard: Welcome → Interests → Goal → Review → Complete.
use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::storage::{
    store::{read_json, write_json},
    KeyValueStore, StorageError, GOAL_KEY, INTERESTS_KEY,
};

pub const INTERESTS: [&str; 10] = [
    "Web Development",
    "Data Science",
    "UX Design",
    "Mobile Apps",
    "AI & Machine Learning",
    "Mental Health",
    "Leadership",
    "Creative Writing",
    "Game Development",
    "Entrepreneurship",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Welcome,
    Interests,
    Goal,
    Review,
    Complete,
}

impl WizardStep {
    pub fn label(self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::Interests => "Interests",
            Self::Goal => "Goal",
            Self::Review => "Review",
            Self::Complete => "Complete",
        }
    }

    /// Zero-based position, for the step indicator.
    pub fn index(self) -> usize {
        match self {
            Self::Welcome => 0,
            Self::Interests => 1,
            Self::Goal => 2,
            Self::Review => 3,
            Self::Complete => 4,
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningGoal {
    CareerSwitch,
    SkillUpgrade,
    PersonalGrowth,
    TeamProjects,
}

impl LearningGoal {
    pub const ALL: [LearningGoal; 4] = [
        LearningGoal::CareerSwitch,
        LearningGoal::SkillUpgrade,
        LearningGoal::PersonalGrowth,
        LearningGoal::TeamProjects,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::CareerSwitch => "Career switch",
            Self::SkillUpgrade => "Skill upgrade",
            Self::PersonalGrowth => "Personal growth",
            Self::TeamProjects => "Team projects",
        }
    }
}

impl fmt::Display for LearningGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    NoInterests,
    TooManyInterests { max: usize },
    UnknownInterest { label: String },
    NoGoal,
    ReviewPending,
    WrongStep { expected: WizardStep, actual: WizardStep },
    AtFirstStep,
    AtLastStep,
}

impl fmt::Display for WizardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoInterests => write!(f, "Pick at least one interest to continue."),
            Self::TooManyInterests { max } => write!(f, "You can pick up to {} interests.", max),
            Self::UnknownInterest { label } => write!(f, "'{}' is not one of the listed interests.", label),
            Self::NoGoal => write!(f, "Choose a learning goal to continue."),
            Self::ReviewPending => write!(f, "Review your choices and press finish."),
            Self::WrongStep { expected, actual } => {
                write!(f, "That needs the {} step, but you are on {}.", expected, actual)
            }
            Self::AtFirstStep => write!(f, "You are already at the first step."),
            Self::AtLastStep => write!(f, "Onboarding is already finished."),
        }
    }
}

impl std::error::Error for WizardError {}

/// What onboarding produces and stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingProfile {
    pub interests: Vec<String>,
    pub goal: LearningGoal,
}

impl OnboardingProfile {
    pub fn persist(&self, store: &mut dyn KeyValueStore) -> Result<(), StorageError> {
        write_json(store, INTERESTS_KEY, &self.interests)?;
        write_json(store, GOAL_KEY, &self.goal)
    }

    /// Reads a previously stored profile; `Ok(None)` when onboarding never finished.
    pub fn restore(store: &dyn KeyValueStore) -> Result<Option<Self>, StorageError> {
        let interests: Option<Vec<String>> = read_json(store, INTERESTS_KEY)?;
        let goal: Option<LearningGoal> = read_json(store, GOAL_KEY)?;
        Ok(interests
            .zip(goal)
            .map(|(interests, goal)| Self { interests, goal }))
    }
}

#[derive(Resource, Debug, Clone)]
pub struct OnboardingWizard {
    step: WizardStep,
    interests: Vec<String>,
    goal: Option<LearningGoal>,
    max_interests: usize,
}

impl Default for OnboardingWizard {
    fn default() -> Self {
        Self::new(crate::core::AppConfig::default().onboarding.max_interests)
    }
}

impl OnboardingWizard {
    pub fn new(max_interests: usize) -> Self {
        Self {
            step: WizardStep::Welcome,
            interests: Vec::new(),
            goal: None,
            max_interests: max_interests.max(1),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    pub fn goal(&self) -> Option<LearningGoal> {
        self.goal
    }

    pub fn max_interests(&self) -> usize {
        self.max_interests
    }

    /// Selects or deselects an interest. Returns whether it is now selected.
    pub fn toggle_interest(&mut self, label: &str) -> Result<bool, WizardError> {
        self.require(WizardStep::Interests)?;
        let interest = INTERESTS
            .iter()
            .find(|candidate| candidate.eq_ignore_ascii_case(label.trim()))
            .ok_or_else(|| WizardError::UnknownInterest {
                label: label.trim().to_string(),
            })?;

        if let Some(position) = self.interests.iter().position(|chosen| chosen == interest) {
            self.interests.remove(position);
            return Ok(false);
        }
        if self.interests.len() >= self.max_interests {
            return Err(WizardError::TooManyInterests {
                max: self.max_interests,
            });
        }
        self.interests.push(interest.to_string());
        Ok(true)
    }

    pub fn choose_goal(&mut self, goal: LearningGoal) -> Result<(), WizardError> {
        self.require(WizardStep::Goal)?;
        self.goal = Some(goal);
        Ok(())
    }

    /// Advances one step, validating the current one. Review is left through `finish`.
    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        self.step = match self.step {
            WizardStep::Welcome => WizardStep::Interests,
            WizardStep::Interests => {
                self.validate_interests()?;
                WizardStep::Goal
            }
            WizardStep::Goal => {
                self.goal.ok_or(WizardError::NoGoal)?;
                WizardStep::Review
            }
            WizardStep::Review => return Err(WizardError::ReviewPending),
            WizardStep::Complete => return Err(WizardError::AtLastStep),
        };
        Ok(self.step)
    }

    pub fn back(&mut self) -> Result<WizardStep, WizardError> {
        self.step = match self.step {
            WizardStep::Welcome => return Err(WizardError::AtFirstStep),
            WizardStep::Interests => WizardStep::Welcome,
            WizardStep::Goal => WizardStep::Interests,
            WizardStep::Review => WizardStep::Goal,
            WizardStep::Complete => return Err(WizardError::AtLastStep),
        };
        Ok(self.step)
    }

    /// Completes the wizard from the review step.
    pub fn finish(&mut self) -> Result<OnboardingProfile, WizardError> {
        self.require(WizardStep::Review)?;
        self.validate_interests()?;
        let goal = self.goal.ok_or(WizardError::NoGoal)?;

        self.step = WizardStep::Complete;
        Ok(OnboardingProfile {
            interests: self.interests.clone(),
            goal,
        })
    }

    fn validate_interests(&self) -> Result<(), WizardError> {
        match self.interests.len() {
            0 => Err(WizardError::NoInterests),
            len if len > self.max_interests => Err(WizardError::TooManyInterests {
                max: self.max_interests,
            }),
            _ => Ok(()),
        }
    }

    fn require(&self, expected: WizardStep) -> Result<(), WizardError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(WizardError::WrongStep {
                expected,
                actual: self.step,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn at_interests() -> OnboardingWizard {
        let mut wizard = OnboardingWizard::new(5);
        wizard.next().unwrap();
        wizard
    }

    #[test]
    fn interests_step_requires_a_selection() {
        let mut wizard = at_interests();
        assert_eq!(wizard.next(), Err(WizardError::NoInterests));
        assert_eq!(wizard.step(), WizardStep::Interests);

        assert_eq!(wizard.toggle_interest("data science"), Ok(true));
        assert_eq!(wizard.next(), Ok(WizardStep::Goal));
    }

    #[test]
    fn toggling_twice_deselects() {
        let mut wizard = at_interests();
        assert_eq!(wizard.toggle_interest("UX Design"), Ok(true));
        assert_eq!(wizard.toggle_interest("ux design"), Ok(false));
        assert!(wizard.interests().is_empty());
        assert!(matches!(
            wizard.toggle_interest("Knitting"),
            Err(WizardError::UnknownInterest { .. })
        ));
    }

    #[test]
    fn interest_selection_is_capped() {
        let mut wizard = at_interests();
        for interest in INTERESTS.iter().take(5) {
            wizard.toggle_interest(interest).unwrap();
        }
        assert_eq!(
            wizard.toggle_interest(INTERESTS[5]),
            Err(WizardError::TooManyInterests { max: 5 })
        );
        assert_eq!(wizard.interests().len(), 5);
    }

    #[test]
    fn goal_step_requires_a_goal_then_finishes() {
        let mut wizard = at_interests();
        wizard.toggle_interest("Leadership").unwrap();
        wizard.next().unwrap();

        assert_eq!(wizard.next(), Err(WizardError::NoGoal));
        wizard.choose_goal(LearningGoal::TeamProjects).unwrap();
        assert_eq!(wizard.next(), Ok(WizardStep::Review));
        assert_eq!(wizard.next(), Err(WizardError::ReviewPending));

        let profile = wizard.finish().unwrap();
        assert_eq!(profile.interests, vec!["Leadership".to_string()]);
        assert_eq!(profile.goal, LearningGoal::TeamProjects);
        assert_eq!(wizard.step(), WizardStep::Complete);
        assert_eq!(wizard.back(), Err(WizardError::AtLastStep));
    }

    #[test]
    fn actions_outside_their_step_are_refused() {
        let mut wizard = OnboardingWizard::new(5);
        assert_eq!(wizard.back(), Err(WizardError::AtFirstStep));
        assert!(matches!(
            wizard.choose_goal(LearningGoal::SkillUpgrade),
            Err(WizardError::WrongStep { expected: WizardStep::Goal, .. })
        ));
        assert!(wizard.finish().is_err());
    }

    #[test]
    fn profile_round_trips_through_storage() {
        let mut store = MemoryStore::new();
        assert_eq!(OnboardingProfile::restore(&store).unwrap(), None);

        let profile = OnboardingProfile {
            interests: vec!["Mobile Apps".to_string(), "Mental Health".to_string()],
            goal: LearningGoal::CareerSwitch,
        };
        profile.persist(&mut store).unwrap();

        assert_eq!(
            store.get(INTERESTS_KEY).as_deref(),
            Some(r#"["Mobile Apps","Mental Health"]"#)
        );
        assert_eq!(store.get(GOAL_KEY).as_deref(), Some(r#""career_switch""#));
        assert_eq!(OnboardingProfile::restore(&store).unwrap(), Some(profile));
    }
}
