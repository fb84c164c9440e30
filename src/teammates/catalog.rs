//! Fixed teammate catalog. Compatibility scores are data, not computed.
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Availability {
    FullTime,
    PartTime,
    Evenings,
    Weekends,
    /// Matches every availability filter.
    Flexible,
}

impl Availability {
    pub const ALL: [Availability; 5] = [
        Availability::FullTime,
        Availability::PartTime,
        Availability::Evenings,
        Availability::Weekends,
        Availability::Flexible,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::Evenings => "Evenings",
            Self::Weekends => "Weekends",
            Self::Flexible => "Flexible",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|availability| availability.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeammateProfile {
    pub id: u32,
    pub name: &'static str,
    pub skills: &'static [&'static str],
    pub interests: &'static [&'static str],
    pub availability: Availability,
    /// Static 0-100 score shown on the card.
    pub compatibility: u8,
    pub bio: &'static str,
}

pub static TEAMMATES: [TeammateProfile; 6] = [
    TeammateProfile {
        id: 1,
        name: "Maya Chen",
        skills: &["React", "TypeScript", "UI Design"],
        interests: &["Web Development", "Accessibility"],
        availability: Availability::PartTime,
        compatibility: 92,
        bio: "Front-end developer who loves building calm, accessible interfaces.",
    },
    TeammateProfile {
        id: 2,
        name: "Jordan Rivera",
        skills: &["Python", "Machine Learning", "Data Analysis"],
        interests: &["Data Science", "AI Ethics"],
        availability: Availability::Evenings,
        compatibility: 87,
        bio: "Data scientist exploring how emotion-aware tools can support learners.",
    },
    TeammateProfile {
        id: 3,
        name: "Aisha Okafor",
        skills: &["Product Management", "UX Research"],
        interests: &["EdTech", "Mental Health"],
        availability: Availability::Flexible,
        compatibility: 84,
        bio: "Product thinker who turns user interviews into roadmaps.",
    },
    TeammateProfile {
        id: 4,
        name: "Liam Novak",
        skills: &["Rust", "Systems Programming", "DevOps"],
        interests: &["Open Source", "Game Development"],
        availability: Availability::Weekends,
        compatibility: 78,
        bio: "Backend engineer who enjoys performance puzzles and mentoring newcomers.",
    },
    TeammateProfile {
        id: 5,
        name: "Sofia Martins",
        skills: &["Graphic Design", "Illustration", "Figma"],
        interests: &["Web Development", "Creative Writing"],
        availability: Availability::FullTime,
        compatibility: 81,
        bio: "Designer sketching friendly characters for learning apps, picking up React on the side.",
    },
    TeammateProfile {
        id: 6,
        name: "Daniel Kim",
        skills: &["JavaScript", "Node.js", "React Native"],
        interests: &["Mobile Apps", "Fitness"],
        availability: Availability::Evenings,
        compatibility: 75,
        bio: "Mobile developer building habit trackers with a focus on wellbeing.",
    },
];

pub fn find_teammate(id: u32) -> Option<&'static TeammateProfile> {
    TEAMMATES.iter().find(|profile| profile.id == id)
}

/// Category choices for the filter dropdown: the catch-all first, then every
/// skill and interest in catalog order.
pub fn category_options() -> Vec<&'static str> {
    let mut options = vec![super::filter::ALL_CATEGORIES_LABEL];
    for profile in TEAMMATES.iter() {
        for label in profile.skills.iter().chain(profile.interests.iter()) {
            if !options.contains(label) {
                options.push(*label);
            }
        }
    }
    options
}
