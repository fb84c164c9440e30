//! Mood module hosting the shared mood store and the mood-keyed response selector.
pub mod events;
pub mod plugin;
pub mod responses;
pub mod state;
pub mod systems;
pub mod types;

pub use events::{MoodChangedEvent, MoodReportRequest, MoodSource};
pub use plugin::MoodPlugin;
pub use responses::{select_response, ResponseSelector};
pub use state::MoodState;
pub use types::Mood;
