//! Navigation module: routes, page copy, and the navigator collaborator.
pub mod events;
pub mod navigator;
pub mod pages;
pub mod plugin;
pub mod routes;
pub mod systems;

pub use events::{NavigateRequest, RouteChangedEvent};
pub use navigator::{NavigationError, Navigator};
pub use plugin::NavigationPlugin;
pub use routes::Route;
