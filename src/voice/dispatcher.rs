//! Voice command dispatch: an ordered, first-match-wins substring rule table.
use crate::{mood::Mood, navigation::Route};

/// What a rule does once it matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RuleAction {
    Navigate {
        route: Route,
        acknowledgement: &'static str,
    },
    Reply(&'static str),
}

/// A rule matches when the transcript contains any of its keywords.
#[derive(Debug, Clone, Copy)]
struct CommandRule {
    keywords: &'static [&'static str],
    action: RuleAction,
}

impl CommandRule {
    fn matches(&self, transcript: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| transcript.contains(keyword))
    }
}

const HELP_REPLY: &str = "You can say things like \"go to dashboard\", \"open skills\", \"find teammates\", or tell me how you feel.";
const GREETING_REPLY: &str = "Hello! I'm your Em-Sphere guide. How are you feeling today?";

// Order is precedence.
const COMMAND_RULES: [CommandRule; 9] = [
    CommandRule {
        keywords: &["dashboard"],
        action: RuleAction::Navigate {
            route: Route::Dashboard,
            acknowledgement: "Opening your dashboard.",
        },
    },
    CommandRule {
        keywords: &["skill"],
        action: RuleAction::Navigate {
            route: Route::Skills,
            acknowledgement: "Taking you to skills.",
        },
    },
    CommandRule {
        keywords: &["teammate", "team"],
        action: RuleAction::Navigate {
            route: Route::Teammates,
            acknowledgement: "Let's find you some teammates.",
        },
    },
    CommandRule {
        keywords: &["achievement", "badge"],
        action: RuleAction::Navigate {
            route: Route::Achievements,
            acknowledgement: "Here are your achievements.",
        },
    },
    CommandRule {
        keywords: &["onboarding", "get started"],
        action: RuleAction::Navigate {
            route: Route::Onboarding,
            acknowledgement: "Let's get you set up.",
        },
    },
    CommandRule {
        keywords: &["login", "log in", "sign in"],
        action: RuleAction::Navigate {
            route: Route::Login,
            acknowledgement: "Opening the sign-in page.",
        },
    },
    CommandRule {
        keywords: &["home"],
        action: RuleAction::Navigate {
            route: Route::Home,
            acknowledgement: "Heading home.",
        },
    },
    CommandRule {
        keywords: &["help", "what can you do"],
        action: RuleAction::Reply(HELP_REPLY),
    },
    CommandRule {
        keywords: &["hello", "hi there"],
        action: RuleAction::Reply(GREETING_REPLY),
    },
];

/// Phrases that announce a mood ("i feel tired").
const MOOD_PHRASES: [&str; 3] = ["i feel", "i am", "i'm"];

// Checked in order; "unhappy" must be seen before "happy".
const MOOD_KEYWORDS: [(Mood, &[&str]); 6] = [
    (Mood::Sad, &["unhappy", "sad", "down", "upset"]),
    (Mood::Anxious, &["anxious", "nervous", "worried", "stressed"]),
    (Mood::Tired, &["tired", "sleepy", "exhausted", "drained"]),
    (Mood::Focused, &["focused", "productive", "motivated", "determined"]),
    (Mood::Happy, &["happy", "great", "excited", "joyful"]),
    (Mood::Neutral, &["okay", "fine", "neutral", "alright"]),
];

/// Effect chosen for a transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEffect {
    Navigate {
        route: Route,
        acknowledgement: String,
    },
    Reply(String),
}

impl CommandEffect {
    /// Text to show or speak back to the user.
    pub fn message(&self) -> &str {
        match self {
            Self::Navigate {
                acknowledgement, ..
            } => acknowledgement,
            Self::Reply(text) => text,
        }
    }

    pub fn route(&self) -> Option<Route> {
        match self {
            Self::Navigate { route, .. } => Some(*route),
            Self::Reply(_) => None,
        }
    }
}

/// Result of dispatching one transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub effect: CommandEffect,
    pub mood_update: Option<Mood>,
}

/// Lowercases and folds typographic apostrophes so "I’m" matches "i'm".
fn normalise(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .replace(['\u{2019}', '\u{2018}'], "'")
}

/// Detects a mood announced in `text` ("i'm exhausted" → tired).
///
/// Both a mood phrase and a mood keyword must be present.
pub fn detect_mood(text: &str) -> Option<Mood> {
    let normalised = normalise(text);
    if !MOOD_PHRASES
        .iter()
        .any(|phrase| normalised.contains(phrase))
    {
        return None;
    }

    MOOD_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| normalised.contains(keyword)))
        .map(|(mood, _)| *mood)
}

/// Maps a transcript to a navigation target or a canned reply.
pub fn dispatch(transcript: &str) -> DispatchOutcome {
    let original = transcript.trim();
    let normalised = normalise(original);
    let mood_update = detect_mood(&normalised);

    let matched = COMMAND_RULES
        .iter()
        .find(|rule| rule.matches(&normalised))
        .map(|rule| match rule.action {
            RuleAction::Navigate {
                route,
                acknowledgement,
            } => CommandEffect::Navigate {
                route,
                acknowledgement: acknowledgement.to_string(),
            },
            RuleAction::Reply(text) => CommandEffect::Reply(text.to_string()),
        });

    let effect = match (matched, mood_update) {
        (Some(effect), _) => effect,
        (None, Some(mood)) => CommandEffect::Reply(format!(
            "Thanks for telling me. I've noted that you're feeling {} {}.",
            mood,
            mood.emoji()
        )),
        (None, None) => CommandEffect::Reply(format!(
            "I heard \"{}\", but I don't know that command yet. Try \"go to dashboard\" or \"open skills\".",
            original
        )),
    };

    DispatchOutcome {
        effect,
        mood_update,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_command_navigates() {
        let outcome = dispatch("go to dashboard");
        assert_eq!(outcome.effect.route(), Some(Route::Dashboard));
        assert_eq!(outcome.mood_update, None);
    }

    #[test]
    fn skills_command_navigates() {
        let outcome = dispatch("open skills");
        assert_eq!(outcome.effect.route(), Some(Route::Skills));
    }

    #[test]
    fn mood_statement_updates_mood_with_acknowledgement() {
        let outcome = dispatch("i feel happy today");
        assert_eq!(outcome.mood_update, Some(Mood::Happy));
        assert_eq!(outcome.effect.route(), None);
        assert!(outcome.effect.message().contains("happy"));
    }

    #[test]
    fn typographic_apostrophes_are_understood() {
        assert_eq!(detect_mood("I\u{2019}m exhausted"), Some(Mood::Tired));
        let outcome = dispatch("I\u{2019}m worried, open skills");
        assert_eq!(outcome.mood_update, Some(Mood::Anxious));
        assert_eq!(outcome.effect.route(), Some(Route::Skills));
    }

    #[test]
    fn unknown_text_is_echoed() {
        let outcome = dispatch("xyz nonsense");
        assert_eq!(outcome.mood_update, None);
        assert!(matches!(outcome.effect, CommandEffect::Reply(_)));
        assert!(outcome.effect.message().contains("xyz nonsense"));
    }

    #[test]
    fn earlier_rules_take_precedence() {
        // Both "dashboard" and "skill" appear; the dashboard rule comes first.
        let outcome = dispatch("show skills on my dashboard");
        assert_eq!(outcome.effect.route(), Some(Route::Dashboard));

        let outcome = dispatch("help me find a team");
        assert_eq!(outcome.effect.route(), Some(Route::Teammates));
    }

    #[test]
    fn navigation_and_mood_can_combine() {
        let outcome = dispatch("I'm tired, take me home");
        assert_eq!(outcome.effect.route(), Some(Route::Home));
        assert_eq!(outcome.mood_update, Some(Mood::Tired));
    }

    #[test]
    fn mood_keyword_without_phrase_is_ignored() {
        assert_eq!(detect_mood("happy birthday"), None);
        assert_eq!(dispatch("happy birthday").mood_update, None);
    }

    #[test]
    fn unhappy_is_not_read_as_happy() {
        assert_eq!(detect_mood("i am unhappy"), Some(Mood::Sad));
        assert_eq!(detect_mood("I AM STRESSED"), Some(Mood::Anxious));
    }

    #[test]
    fn canned_replies_are_returned_verbatim() {
        assert_eq!(dispatch("help").effect, CommandEffect::Reply(HELP_REPLY.to_string()));
        assert_eq!(
            dispatch("hello").effect,
            CommandEffect::Reply(GREETING_REPLY.to_string())
        );
    }
}
