//! Conjunctive teammate filter: free text, category, availability.
use super::catalog::{Availability, TeammateProfile, TEAMMATES};

pub const ALL_CATEGORIES_LABEL: &str = "All Skills";
pub const ANY_AVAILABILITY_LABEL: &str = "Any Availability";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Lowercased skill or interest label.
    Only(String),
}

impl CategoryFilter {
    /// "All" and "All Skills" (any case) disable the filter.
    pub fn parse(label: &str) -> Self {
        let label = label.trim();
        if label.is_empty()
            || label.eq_ignore_ascii_case("all")
            || label.eq_ignore_ascii_case(ALL_CATEGORIES_LABEL)
        {
            Self::All
        } else {
            Self::Only(label.to_lowercase())
        }
    }

    fn matches(&self, profile: &TeammateProfile) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => profile
                .skills
                .iter()
                .chain(profile.interests.iter())
                .any(|label| label.to_lowercase() == *category),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AvailabilityFilter {
    #[default]
    Any,
    /// Lowercased availability label; unknown labels only match flexible profiles.
    Only(String),
}

impl AvailabilityFilter {
    /// "Any" and "Any Availability" (any case) disable the filter.
    pub fn parse(label: &str) -> Self {
        let label = label.trim();
        if label.is_empty()
            || label.eq_ignore_ascii_case("any")
            || label.eq_ignore_ascii_case(ANY_AVAILABILITY_LABEL)
        {
            Self::Any
        } else {
            Self::Only(label.to_lowercase())
        }
    }

    fn matches(&self, profile: &TeammateProfile) -> bool {
        match self {
            Self::Any => true,
            Self::Only(_) if profile.availability == Availability::Flexible => true,
            Self::Only(label) => profile.availability.label().to_lowercase() == *label,
        }
    }
}

/// Parsed filter inputs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TeammateQuery {
    text: String,
    pub category: CategoryFilter,
    pub availability: AvailabilityFilter,
}

impl TeammateQuery {
    pub fn new(text: &str, category: &str, availability: &str) -> Self {
        Self {
            text: text.trim().to_lowercase(),
            category: CategoryFilter::parse(category),
            availability: AvailabilityFilter::parse(availability),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn matches_text(&self, profile: &TeammateProfile) -> bool {
        if self.text.is_empty() {
            return true;
        }
        let needle = self.text.as_str();
        profile.name.to_lowercase().contains(needle)
            || profile
                .skills
                .iter()
                .chain(profile.interests.iter())
                .any(|label| label.to_lowercase().contains(needle))
            || profile.bio.to_lowercase().contains(needle)
    }

    pub fn matches(&self, profile: &TeammateProfile) -> bool {
        self.matches_text(profile)
            && self.category.matches(profile)
            && self.availability.matches(profile)
    }

    /// Matching profiles in catalog order.
    pub fn apply<'a>(&self, profiles: &'a [TeammateProfile]) -> Vec<&'a TeammateProfile> {
        profiles.iter().filter(|profile| self.matches(profile)).collect()
    }
}

/// Filters the built-in catalog.
pub fn filter(query: &str, category: &str, availability: &str) -> Vec<&'static TeammateProfile> {
    TeammateQuery::new(query, category, availability).apply(&TEAMMATES)
}
