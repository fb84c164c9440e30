//! Screen-space widgets: page view, mood picker, text entry, status line and notice cards.
pub mod components;
pub mod input;
pub mod notice_panel;
pub mod page;
pub mod plugin;

pub use plugin::UiPlugin;
