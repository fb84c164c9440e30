//! Read-only achievement catalog. Point values are data, not derived.
use std::fmt;

pub const FIRST_VISIT: &str = "first_visit";
pub const MOOD_CHECKIN: &str = "mood_checkin";
pub const VOICE_PIONEER: &str = "voice_pioneer";
pub const CHAT_STARTER: &str = "chat_starter";
pub const TEAM_SCOUT: &str = "team_scout";
pub const ONBOARDING_COMPLETE: &str = "onboarding_complete";
pub const EXPLORER: &str = "explorer";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementCategory {
    Onboarding,
    Wellbeing,
    Social,
    Voice,
    Exploration,
}

impl AchievementCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Onboarding => "onboarding",
            Self::Wellbeing => "wellbeing",
            Self::Social => "social",
            Self::Voice => "voice",
            Self::Exploration => "exploration",
        }
    }
}

impl fmt::Display for AchievementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: AchievementCategory,
    pub points: u32,
}

pub static ACHIEVEMENTS: [Achievement; 7] = [
    Achievement {
        id: FIRST_VISIT,
        title: "Hello, Em-Sphere",
        description: "Opened Em-Sphere for the first time.",
        category: AchievementCategory::Exploration,
        points: 10,
    },
    Achievement {
        id: MOOD_CHECKIN,
        title: "Checked In",
        description: "Told Em-Sphere how you feel.",
        category: AchievementCategory::Wellbeing,
        points: 20,
    },
    Achievement {
        id: VOICE_PIONEER,
        title: "Voice Pioneer",
        description: "Gave your first voice command.",
        category: AchievementCategory::Voice,
        points: 30,
    },
    Achievement {
        id: CHAT_STARTER,
        title: "Conversation Starter",
        description: "Sent your first message to the assistant.",
        category: AchievementCategory::Social,
        points: 20,
    },
    Achievement {
        id: TEAM_SCOUT,
        title: "Team Scout",
        description: "Searched for teammates.",
        category: AchievementCategory::Social,
        points: 25,
    },
    Achievement {
        id: ONBOARDING_COMPLETE,
        title: "Ready to Learn",
        description: "Finished onboarding with your interests and goal.",
        category: AchievementCategory::Onboarding,
        points: 50,
    },
    Achievement {
        id: EXPLORER,
        title: "Explorer",
        description: "Visited four different pages.",
        category: AchievementCategory::Exploration,
        points: 40,
    },
];

pub fn find_achievement(id: &str) -> Option<&'static Achievement> {
    ACHIEVEMENTS.iter().find(|achievement| achievement.id == id)
}

pub fn catalog_points() -> u32 {
    ACHIEVEMENTS.iter().map(|achievement| achievement.points).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lookup_by_id() {
        let achievement = find_achievement(TEAM_SCOUT).expect("team scout exists");
        assert_eq!(achievement.category, AchievementCategory::Social);
        assert!(find_achievement("moon_landing").is_none());
        assert_eq!(catalog_points(), 195);
    }
}
