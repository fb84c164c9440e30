//! Local key-value storage standing in for the browser's local storage.
pub mod errors;
pub mod plugin;
pub mod store;

pub use errors::StorageError;
pub use plugin::{LocalStorage, StoragePlugin};
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Key holding the current mood label.
pub const MOOD_KEY: &str = "em_sphere.mood";
/// Key holding the JSON array of unlocked achievement ids.
pub const ACHIEVEMENTS_KEY: &str = "em_sphere.achievements";
/// Key holding the JSON array of interests picked during onboarding.
pub const INTERESTS_KEY: &str = "em_sphere.interests";
/// Key holding the learning goal picked during onboarding.
pub const GOAL_KEY: &str = "em_sphere.goal";
