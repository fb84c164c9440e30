//! Core utilities shared by every widget: the UI clock and application config.
pub mod config;
pub mod plugin;

pub use config::AppConfig;
pub use plugin::{CorePlugin, UiClock};
