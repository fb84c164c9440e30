//! Components and resources for the on-screen widgets.
use bevy::prelude::*;

use crate::{mood::Mood, navigation::Route};

/// Layout and typography for the widget overlay.
#[derive(Resource, Debug)]
pub struct UiSettings {
    pub padding: f32,
    pub border_width: f32,
    pub edge_offset: f32,
    pub notice_width: f32,
    pub title_font_size: f32,
    pub body_font_size: f32,
    pub button_font_size: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            padding: 12.0,
            border_width: 2.0,
            edge_offset: 20.0,
            notice_width: 340.0,
            title_font_size: 30.0,
            body_font_size: 16.0,
            button_font_size: 15.0,
        }
    }
}

/// Column holding the notice cards, bottom-right.
#[derive(Component, Debug)]
pub struct NoticePanel;

/// One rendered notice.
#[derive(Component, Debug, Clone, Copy)]
pub struct NoticeCard {
    pub notice_id: u64,
}

#[derive(Component, Debug)]
pub struct PageTitle;

#[derive(Component, Debug)]
pub struct PageTagline;

#[derive(Component, Debug)]
pub struct PageBody;

/// Level, mood and voice status line.
#[derive(Component, Debug)]
pub struct StatusLine;

/// Mood check-in button.
#[derive(Component, Debug, Clone, Copy)]
pub struct MoodButton {
    pub mood: Mood,
}

/// Navigation button; the call-to-action button retargets on every page change.
#[derive(Component, Debug, Clone, Copy)]
pub struct RouteButton {
    pub route: Route,
}

/// Marks the call-to-action button under the page header.
#[derive(Component, Debug)]
pub struct CallToAction;
