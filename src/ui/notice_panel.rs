//! Notice cards stacked in the bottom-right corner, faded from the board's timers.
use bevy::prelude::*;

use crate::notices::{NoticeBoard, NoticeLevel};

use super::components::{NoticeCard, NoticePanel, UiSettings};

const TEXT_COLOR: Color = Color::WHITE;
const CARD_ALPHA: f32 = 0.92;

/// Board revision the cards were last built from.
#[derive(Resource, Debug, Default)]
pub struct NoticePanelState {
    rendered_revision: Option<u64>,
}

fn card_color(level: NoticeLevel) -> Color {
    match level {
        NoticeLevel::Info => Color::srgb(0.12, 0.14, 0.2),
        NoticeLevel::Success => Color::srgb(0.08, 0.3, 0.18),
        NoticeLevel::Warning => Color::srgb(0.36, 0.2, 0.06),
    }
}

fn card_icon(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "💬",
        NoticeLevel::Success => "✨",
        NoticeLevel::Warning => "⚠️",
    }
}

pub fn spawn_notice_panel(mut commands: Commands, settings: Res<UiSettings>) {
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(settings.edge_offset),
            right: Val::Px(settings.edge_offset),
            width: Val::Px(settings.notice_width),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(8.0),
            ..default()
        },
        NoticePanel,
        Name::new("Notice Panel"),
    ));
}

/// Rebuilds the cards whenever the board's contents change.
pub fn rebuild_notice_cards(
    mut commands: Commands,
    board: Res<NoticeBoard>,
    settings: Res<UiSettings>,
    mut state: ResMut<NoticePanelState>,
    panels: Query<Entity, With<NoticePanel>>,
) {
    if state.rendered_revision == Some(board.revision()) {
        return;
    }
    let Ok(panel) = panels.single() else {
        return;
    };

    state.rendered_revision = Some(board.revision());
    commands.entity(panel).despawn_related::<Children>();
    commands.entity(panel).with_children(|parent| {
        for notice in board.iter() {
            parent
                .spawn((
                    Node {
                        padding: UiRect::all(Val::Px(settings.padding)),
                        border: UiRect::all(Val::Px(settings.border_width)),
                        flex_direction: FlexDirection::Row,
                        column_gap: Val::Px(8.0),
                        ..default()
                    },
                    BackgroundColor(card_color(notice.level()).with_alpha(CARD_ALPHA)),
                    BorderColor::from(Color::srgb(0.3, 0.3, 0.3)),
                    NoticeCard {
                        notice_id: notice.id(),
                    },
                ))
                .with_children(|card| {
                    card.spawn((
                        Text::new(card_icon(notice.level())),
                        TextFont {
                            font_size: settings.body_font_size,
                            ..default()
                        },
                        TextColor(TEXT_COLOR),
                    ));
                    card.spawn((
                        Text::new(notice.text()),
                        TextFont {
                            font_size: settings.body_font_size,
                            ..default()
                        },
                        TextColor(TEXT_COLOR),
                        Node {
                            max_width: Val::Px(settings.notice_width - settings.padding * 2.0 - 32.0),
                            ..default()
                        },
                    ));
                });
        }
    });
}

/// Applies each notice's fade to its card background.
pub fn fade_notice_cards(board: Res<NoticeBoard>, mut cards: Query<(&NoticeCard, &mut BackgroundColor)>) {
    for (card, mut background) in cards.iter_mut() {
        let Some(notice) = board.iter().find(|notice| notice.id() == card.notice_id) else {
            continue;
        };
        background.0 = card_color(notice.level()).with_alpha(CARD_ALPHA * notice.fade_alpha());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_app() -> App {
        let mut app = App::new();
        app.insert_resource(NoticeBoard::default())
            .init_resource::<UiSettings>()
            .init_resource::<NoticePanelState>()
            .add_systems(Startup, spawn_notice_panel)
            .add_systems(Update, (rebuild_notice_cards, fade_notice_cards).chain());
        app
    }

    fn card_ids(app: &mut App) -> Vec<u64> {
        let mut query = app.world_mut().query::<&NoticeCard>();
        let mut ids: Vec<u64> = query
            .iter(app.world())
            .map(|card| card.notice_id)
            .collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn cards_follow_the_board() {
        let mut app = build_app();
        app.update();
        assert!(card_ids(&mut app).is_empty());

        let (first, second) = {
            let mut board = app.world_mut().resource_mut::<NoticeBoard>();
            (
                board.push("Saved", NoticeLevel::Success),
                board.push("Microphone blocked", NoticeLevel::Warning),
            )
        };
        app.update();
        assert_eq!(card_ids(&mut app), vec![first, second]);

        app.world_mut()
            .resource_mut::<NoticeBoard>()
            .tick(std::time::Duration::from_secs(60));
        app.update();
        assert!(card_ids(&mut app).is_empty());
    }
}
