//! Typed input for the chat box and teammate search, and the onboarding keys.
use bevy::{
    input::keyboard::{Key, KeyboardInput},
    prelude::*,
};

use crate::{
    assistant::{ChatAssistant, ChatSubmit},
    navigation::{Navigator, Route},
    onboarding::{LearningGoal, OnboardingWizard, WizardAction, WizardStep, INTERESTS},
    teammates::{
        catalog::category_options,
        filter::{ALL_CATEGORIES_LABEL, ANY_AVAILABILITY_LABEL},
        Availability, TeammateSearchRequest,
    },
};

const MAX_DRAFT_CHARS: usize = 200;
const DIGIT_KEYS: [KeyCode; 10] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
    KeyCode::Digit0,
];

/// Widget that currently receives typed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryTarget {
    #[default]
    None,
    Chat,
    TeammateSearch,
}

/// An open chat takes typing first; the teammates page takes it otherwise.
pub fn entry_target(chat_open: bool, route: Route) -> EntryTarget {
    if chat_open {
        EntryTarget::Chat
    } else if route == Route::Teammates {
        EntryTarget::TeammateSearch
    } else {
        EntryTarget::None
    }
}

#[derive(Resource, Debug, Default)]
pub struct TextEntry {
    target: EntryTarget,
    draft: String,
    category: usize,
    availability: usize,
}

impl TextEntry {
    pub fn target(&self) -> EntryTarget {
        self.target
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Switches target; the draft and filters do not carry over.
    pub fn retarget(&mut self, target: EntryTarget) {
        if self.target != target {
            *self = Self {
                target,
                ..Self::default()
            };
        }
    }

    /// Appends printable characters, up to the draft limit. Returns whether anything was added.
    pub fn push_str(&mut self, text: &str) -> bool {
        let mut added = false;
        for ch in text.chars().filter(|ch| !ch.is_control()) {
            if self.draft.chars().count() >= MAX_DRAFT_CHARS {
                break;
            }
            self.draft.push(ch);
            added = true;
        }
        added
    }

    pub fn pop(&mut self) -> bool {
        self.draft.pop().is_some()
    }

    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.draft)
    }

    pub fn cycle_category(&mut self) {
        self.category = (self.category + 1) % category_options().len().max(1);
    }

    pub fn cycle_availability(&mut self) {
        self.availability = (self.availability + 1) % (Availability::ALL.len() + 1);
    }

    pub fn category_label(&self) -> &'static str {
        category_options()
            .get(self.category)
            .copied()
            .unwrap_or(ALL_CATEGORIES_LABEL)
    }

    pub fn availability_label(&self) -> &'static str {
        match self.availability {
            0 => ANY_AVAILABILITY_LABEL,
            index => Availability::ALL
                .get(index - 1)
                .map(|availability| availability.label())
                .unwrap_or(ANY_AVAILABILITY_LABEL),
        }
    }

    pub fn search_request(&self) -> TeammateSearchRequest {
        TeammateSearchRequest::new(
            self.draft.clone(),
            self.category_label(),
            self.availability_label(),
        )
    }
}

/// Feeds key presses into the active entry. Enter sends chat; search updates as you type.
pub fn capture_text_entry(
    mut keys: MessageReader<KeyboardInput>,
    chat: Res<ChatAssistant>,
    navigator: Res<Navigator>,
    mut entry: ResMut<TextEntry>,
    mut chat_submissions: MessageWriter<ChatSubmit>,
    mut searches: MessageWriter<TeammateSearchRequest>,
) {
    let target = entry_target(chat.is_open(), navigator.current());
    if entry.target() != target {
        entry.retarget(target);
    }
    if target == EntryTarget::None {
        keys.clear();
        return;
    }

    let mut search_changed = false;
    for key in keys.read() {
        if !key.state.is_pressed() {
            continue;
        }
        let edited = match &key.logical_key {
            Key::Character(text) => entry.push_str(text),
            Key::Space => entry.push_str(" "),
            Key::Backspace => entry.pop(),
            Key::Tab if target == EntryTarget::TeammateSearch => {
                entry.cycle_category();
                true
            }
            Key::ArrowDown if target == EntryTarget::TeammateSearch => {
                entry.cycle_availability();
                true
            }
            Key::Enter if target == EntryTarget::Chat => {
                let text = entry.take();
                if !text.trim().is_empty() {
                    chat_submissions.write(ChatSubmit::new(text));
                }
                false
            }
            _ => false,
        };
        search_changed |= edited && target == EntryTarget::TeammateSearch;
    }

    if search_changed {
        debug!(
            target: "ui",
            "Teammate search '{}' in {} / {}",
            entry.draft(),
            entry.category_label(),
            entry.availability_label()
        );
        searches.write(entry.search_request());
    }
}

/// Digits pick interests or a goal, arrows move between steps, Enter finishes from review.
pub fn handle_onboarding_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    navigator: Res<Navigator>,
    chat: Res<ChatAssistant>,
    wizard: Res<OnboardingWizard>,
    mut actions: MessageWriter<WizardAction>,
) {
    if navigator.current() != Route::Onboarding || chat.is_open() {
        return;
    }

    for (index, key) in DIGIT_KEYS.iter().enumerate() {
        if !keyboard.just_pressed(*key) {
            continue;
        }
        match wizard.step() {
            WizardStep::Interests => {
                if let Some(interest) = INTERESTS.get(index) {
                    actions.write(WizardAction::ToggleInterest(interest.to_string()));
                }
            }
            WizardStep::Goal => {
                if let Some(goal) = LearningGoal::ALL.get(index) {
                    actions.write(WizardAction::ChooseGoal(*goal));
                }
            }
            _ => {}
        }
    }

    if keyboard.just_pressed(KeyCode::ArrowRight) {
        actions.write(WizardAction::Next);
    }
    if keyboard.just_pressed(KeyCode::ArrowLeft) {
        actions.write(WizardAction::Back);
    }
    if keyboard.just_pressed(KeyCode::Enter) && wizard.step() == WizardStep::Review {
        actions.write(WizardAction::Finish);
    }
}
