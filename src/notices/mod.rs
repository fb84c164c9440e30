//! Transient notices: the single channel widgets use to surface messages and degraded states.
pub mod board;
pub mod events;
pub mod plugin;

pub use board::{Notice, NoticeBoard};
pub use events::{NoticeLevel, NoticeRequest};
pub use plugin::NoticePlugin;
