//! "Find teammates": a fixed profile catalog and its filter.
pub mod catalog;
pub mod filter;
pub mod plugin;
pub mod search;

pub use catalog::{Availability, TeammateProfile, TEAMMATES};
pub use filter::{filter, TeammateQuery};
pub use plugin::TeammatesPlugin;
pub use search::{TeammateSearch, TeammateSearchPerformed, TeammateSearchRequest};
