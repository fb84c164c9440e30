//! Page header, per-route body, mood picker and navigation buttons.
use bevy::prelude::*;

use crate::{
    achievements::{AchievementTracker, ACHIEVEMENTS},
    assistant::{ChatAssistant, ChatControl, Speaker},
    mood::{Mood, MoodReportRequest, MoodSource, MoodState},
    navigation::{pages::page_content, NavigateRequest, Navigator, Route},
    onboarding::{LearningGoal, OnboardingWizard, WizardStep, INTERESTS},
    teammates::TeammateSearch,
    voice::{GuideControl, ListeningState, VoiceCommandControl, VoiceCommandWidget, VoiceGuide},
};

use super::components::{
    CallToAction, MoodButton, PageBody, PageTagline, PageTitle, RouteButton, StatusLine, UiSettings,
};
use super::input::{entry_target, EntryTarget, TextEntry};

const PANEL_BACKGROUND: Color = Color::srgba(0.08, 0.08, 0.1, 0.95);
const BUTTON_BACKGROUND: Color = Color::srgba(0.18, 0.18, 0.22, 0.95);
const BUTTON_BORDER: Color = Color::srgb(0.4, 0.4, 0.45);
const MUTED_TEXT: Color = Color::srgb(0.75, 0.75, 0.8);
const NAV_ROUTES: [Route; 6] = [
    Route::Home,
    Route::Dashboard,
    Route::Skills,
    Route::Teammates,
    Route::Achievements,
    Route::Onboarding,
];

/// Read-only view of the widget state a page body draws from.
pub struct PageContext<'a> {
    pub mood: Mood,
    pub tracker: &'a AchievementTracker,
    pub search: &'a TeammateSearch,
    pub wizard: &'a OnboardingWizard,
}

/// Body text for `route`.
pub fn page_body(route: Route, context: &PageContext) -> String {
    match route {
        Route::Home => "Tell us how you feel, and Em-Sphere shapes today's lessons around it.\n\
                        Press G for the voice guide, V for voice commands, C to chat, Esc to close."
            .to_string(),
        Route::Login => "Sign-in is handled by your organisation. Continue when you're ready.".to_string(),
        Route::Dashboard => format!(
            "Feeling {} {}\nLevel {} · {} XP · {:.0}% to the next level",
            context.mood,
            context.mood.emoji(),
            context.tracker.level(),
            context.tracker.total_points(),
            context.tracker.progress()
        ),
        Route::Skills => "Frontend · Data · Design · Leadership · Wellbeing\n\
                          Tracks adapt their pace to your mood."
            .to_string(),
        Route::Teammates => {
            let mut lines = vec![format!("{} matches", context.search.result_count())];
            lines.extend(context.search.results().map(|profile| {
                format!(
                    "{} · {}% match · {} · {}",
                    profile.name,
                    profile.compatibility,
                    profile.availability,
                    profile.skills.join(", ")
                )
            }));
            lines.join("\n")
        }
        Route::Achievements => ACHIEVEMENTS
            .iter()
            .map(|achievement| {
                let mark = if context.tracker.is_unlocked(achievement.id) {
                    "🏆"
                } else {
                    "🔒"
                };
                format!(
                    "{} {} ({} XP) · {}",
                    mark, achievement.title, achievement.points, achievement.description
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Route::Onboarding => onboarding_body(context.wizard),
    }
}

fn onboarding_body(wizard: &OnboardingWizard) -> String {
    let step = wizard.step();
    let header = format!("Step {} of 5 · {}", step.index() + 1, step);
    let detail = match step {
        WizardStep::Welcome => "A few questions so we can tailor your path. Press → to begin.".to_string(),
        WizardStep::Interests => {
            let mut lines = vec![format!("Pick up to {} with the number keys:", wizard.max_interests())];
            lines.extend(INTERESTS.iter().enumerate().map(|(index, interest)| {
                let mark = if wizard.interests().iter().any(|chosen| chosen == interest) {
                    "☑"
                } else {
                    "☐"
                };
                format!("{} {} {}", (index + 1) % 10, mark, interest)
            }));
            lines.join("\n")
        }
        WizardStep::Goal => {
            let mut lines = vec!["Choose a goal:".to_string()];
            lines.extend(LearningGoal::ALL.iter().enumerate().map(|(index, goal)| {
                let mark = if wizard.goal() == Some(*goal) { "◉" } else { "○" };
                format!("{} {} {}", index + 1, mark, goal)
            }));
            lines.join("\n")
        }
        WizardStep::Review => format!(
            "Interests: {}\nGoal: {}\nPress Enter to finish.",
            wizard.interests().join(", "),
            wizard.goal().map(|goal| goal.label()).unwrap_or("none")
        ),
        WizardStep::Complete => "All set. Head to your dashboard.".to_string(),
    };
    format!("{}\n{}", header, detail)
}

fn status_text(
    mood: Mood,
    tracker: &AchievementTracker,
    guide: &VoiceGuide,
    widget: &VoiceCommandWidget,
    chat: &ChatAssistant,
    entry: &TextEntry,
) -> String {
    let mut parts = vec![
        format!("{} {}", mood.emoji(), mood),
        format!("Lv {} ({:.0}%)", tracker.level(), tracker.progress()),
    ];
    match widget.state() {
        ListeningState::Listening => parts.push("🎤 listening".to_string()),
        ListeningState::Idle => parts.push("🎤 ready".to_string()),
        ListeningState::Hidden => {}
    }
    if let Some(caption) = guide.caption() {
        parts.push(format!("🔊 {}", caption));
    }
    if chat.is_typing() {
        parts.push("🤖 typing…".to_string());
    } else if chat.is_open() {
        if let Some(turn) = chat.turns().last() {
            let who = match turn.speaker {
                Speaker::User => "You",
                Speaker::Assistant => "🤖",
            };
            parts.push(format!("{}: {}", who, turn.text));
        }
    }
    match entry.target() {
        EntryTarget::Chat => parts.push(format!("✏️ {}_", entry.draft())),
        EntryTarget::TeammateSearch => parts.push(format!(
            "🔎 {}_ · {} · {} (Tab / ↓ to filter)",
            entry.draft(),
            entry.category_label(),
            entry.availability_label()
        )),
        EntryTarget::None => {}
    }
    parts.join("  |  ")
}

fn spawn_button<B: Bundle>(parent: &mut ChildSpawnerCommands, label: &str, marker: B, font_size: f32) {
    parent
        .spawn((
            Node {
                padding: UiRect::axes(Val::Px(10.0), Val::Px(6.0)),
                border: UiRect::all(Val::Px(1.5)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            Button,
            Interaction::None,
            BackgroundColor(BUTTON_BACKGROUND),
            BorderColor::from(BUTTON_BORDER),
            marker,
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(label),
                TextFont {
                    font_size,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Name::new("UI Camera")));
}

pub fn spawn_page_layout(mut commands: Commands, settings: Res<UiSettings>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(settings.edge_offset),
                left: Val::Px(settings.edge_offset),
                right: Val::Px(settings.edge_offset),
                padding: UiRect::all(Val::Px(settings.padding * 1.5)),
                border: UiRect::all(Val::Px(settings.border_width)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(10.0),
                ..default()
            },
            BackgroundColor(PANEL_BACKGROUND),
            BorderColor::from(Color::srgb(0.3, 0.3, 0.32)),
            Name::new("Page"),
        ))
        .with_children(|page| {
            page.spawn(Node {
                flex_direction: FlexDirection::Row,
                column_gap: Val::Px(6.0),
                flex_wrap: FlexWrap::Wrap,
                ..default()
            })
            .with_children(|nav| {
                for route in NAV_ROUTES {
                    spawn_button(nav, route.label(), RouteButton { route }, settings.button_font_size);
                }
            });

            page.spawn((
                Text::new(""),
                TextFont {
                    font_size: settings.title_font_size,
                    ..default()
                },
                TextColor(Color::WHITE),
                PageTitle,
            ));
            page.spawn((
                Text::new(""),
                TextFont {
                    font_size: settings.body_font_size + 2.0,
                    ..default()
                },
                TextColor(MUTED_TEXT),
                PageTagline,
            ));
            page.spawn((
                Text::new(""),
                TextFont {
                    font_size: settings.body_font_size,
                    ..default()
                },
                TextColor(Color::WHITE),
                PageBody,
            ));

            page.spawn(Node {
                flex_direction: FlexDirection::Row,
                column_gap: Val::Px(6.0),
                flex_wrap: FlexWrap::Wrap,
                ..default()
            })
            .with_children(|row| {
                for mood in Mood::ALL {
                    spawn_button(
                        row,
                        &format!("{} {}", mood.emoji(), mood),
                        MoodButton { mood },
                        settings.button_font_size,
                    );
                }
                spawn_button(
                    row,
                    "Continue",
                    (RouteButton { route: Route::Home }, CallToAction),
                    settings.button_font_size,
                );
            });

            page.spawn((
                Text::new(""),
                TextFont {
                    font_size: settings.body_font_size - 2.0,
                    ..default()
                },
                TextColor(MUTED_TEXT),
                StatusLine,
            ));
        });
}

/// Redraws the header and body when the route or any page data changes.
#[allow(clippy::too_many_arguments, clippy::type_complexity)]
pub fn refresh_page(
    navigator: Res<Navigator>,
    mood: Res<MoodState>,
    tracker: Res<AchievementTracker>,
    search: Res<TeammateSearch>,
    wizard: Res<OnboardingWizard>,
    mut texts: ParamSet<(
        Query<&mut Text, With<PageTitle>>,
        Query<&mut Text, With<PageTagline>>,
        Query<&mut Text, With<PageBody>>,
    )>,
    mut cta: Query<(&mut RouteButton, &mut Node, &Children), With<CallToAction>>,
    mut labels: Query<&mut Text, (Without<PageTitle>, Without<PageTagline>, Without<PageBody>)>,
) {
    let changed = navigator.is_changed()
        || mood.is_changed()
        || tracker.is_changed()
        || search.is_changed()
        || wizard.is_changed();
    if !changed {
        return;
    }

    let route = navigator.current();
    let content = page_content(route);
    let context = PageContext {
        mood: mood.current(),
        tracker: &tracker,
        search: &search,
        wizard: &wizard,
    };

    for mut text in texts.p0().iter_mut() {
        text.0 = content.title.to_string();
    }
    for mut text in texts.p1().iter_mut() {
        text.0 = content.tagline.to_string();
    }
    let body = page_body(route, &context);
    for mut text in texts.p2().iter_mut() {
        text.0 = body.clone();
    }

    for (mut button, mut node, children) in cta.iter_mut() {
        match content.call_to_action {
            Some(action) => {
                button.route = action.target;
                node.display = Display::Flex;
                for child in children.iter() {
                    if let Ok(mut label) = labels.get_mut(child) {
                        label.0 = action.label.to_string();
                    }
                }
            }
            None => node.display = Display::None,
        }
    }
}

pub fn refresh_status_line(
    mood: Res<MoodState>,
    tracker: Res<AchievementTracker>,
    guide: Res<VoiceGuide>,
    widget: Res<VoiceCommandWidget>,
    chat: Res<ChatAssistant>,
    entry: Res<TextEntry>,
    mut lines: Query<(&mut Text, &mut TextColor), With<StatusLine>>,
) {
    let changed = mood.is_changed()
        || tracker.is_changed()
        || guide.is_changed()
        || widget.is_changed()
        || chat.is_changed()
        || entry.is_changed();
    if !changed {
        return;
    }

    let text = status_text(mood.current(), &tracker, &guide, &widget, &chat, &entry);
    let [r, g, b] = mood.current().accent_rgb();
    for (mut line, mut color) in lines.iter_mut() {
        line.0 = text.clone();
        color.0 = Color::srgb_u8(r, g, b);
    }
}

#[allow(clippy::type_complexity)]
pub fn handle_mood_buttons(
    buttons: Query<(&Interaction, &MoodButton), (Changed<Interaction>, With<Button>)>,
    mut reports: MessageWriter<MoodReportRequest>,
) {
    for (interaction, button) in buttons.iter() {
        if *interaction != Interaction::Pressed {
            continue;
        }
        reports.write(MoodReportRequest {
            mood: button.mood,
            source: MoodSource::CheckIn,
        });
    }
}

#[allow(clippy::type_complexity)]
pub fn handle_route_buttons(
    buttons: Query<(&Interaction, &RouteButton), (Changed<Interaction>, With<Button>)>,
    mut navigation: MessageWriter<NavigateRequest>,
) {
    for (interaction, button) in buttons.iter() {
        if *interaction == Interaction::Pressed {
            navigation.write(NavigateRequest::to(button.route));
        }
    }
}

/// G toggles the voice guide, V toggles listening, C opens chat.
/// Escape closes the overlays and stops listening; Backspace goes back.
/// Letters type instead while a text entry is active.
#[allow(clippy::too_many_arguments)]
pub fn handle_keyboard_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    navigator: Res<Navigator>,
    guide: Res<VoiceGuide>,
    chat: Res<ChatAssistant>,
    widget: Res<VoiceCommandWidget>,
    mut guide_controls: MessageWriter<GuideControl>,
    mut voice_controls: MessageWriter<VoiceCommandControl>,
    mut chat_controls: MessageWriter<ChatControl>,
    mut navigation: MessageWriter<NavigateRequest>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        if guide.is_open() {
            guide_controls.write(GuideControl::Close);
        }
        if chat.is_open() {
            chat_controls.write(ChatControl::Close);
        }
        if widget.is_listening() {
            voice_controls.write(VoiceCommandControl::StopListening);
        }
    }
    if entry_target(chat.is_open(), navigator.current()) != EntryTarget::None {
        return;
    }

    if keyboard.just_pressed(KeyCode::KeyG) {
        guide_controls.write(if guide.is_open() {
            GuideControl::Close
        } else {
            GuideControl::Open
        });
    }
    if keyboard.just_pressed(KeyCode::KeyV) && widget.is_visible() {
        voice_controls.write(if widget.is_listening() {
            VoiceCommandControl::StopListening
        } else {
            VoiceCommandControl::StartListening
        });
    }
    if keyboard.just_pressed(KeyCode::KeyC) {
        chat_controls.write(ChatControl::Open);
    }
    if keyboard.just_pressed(KeyCode::Backspace) {
        navigation.write(NavigateRequest::Back);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        notices::NoticeRequest,
        speech::{recognition::ScriptedRecognizer, SpeechRecognition, SpeechRecognizer},
        voice::systems::handle_voice_command_controls,
    };

    fn context<'a>(
        tracker: &'a AchievementTracker,
        search: &'a TeammateSearch,
        wizard: &'a OnboardingWizard,
    ) -> PageContext<'a> {
        PageContext {
            mood: Mood::Focused,
            tracker,
            search,
            wizard,
        }
    }

    #[test]
    fn every_route_has_a_body() {
        let tracker = AchievementTracker::default();
        let search = TeammateSearch::default();
        let wizard = OnboardingWizard::default();
        let context = context(&tracker, &search, &wizard);

        for route in Route::ALL {
            assert!(!page_body(route, &context).is_empty(), "{} has no body", route);
        }
    }

    #[test]
    fn dashboard_reflects_mood_and_level() {
        let mut tracker = AchievementTracker::default();
        tracker.unlock("onboarding_complete").unwrap();
        let search = TeammateSearch::default();
        let wizard = OnboardingWizard::default();

        let body = page_body(Route::Dashboard, &context(&tracker, &search, &wizard));
        assert!(body.contains("Feeling focused"));
        assert!(body.contains("Level 1 · 50 XP · 50%"));
    }

    #[test]
    fn achievements_page_marks_unlocked_entries() {
        let mut tracker = AchievementTracker::default();
        tracker.unlock("team_scout").unwrap();
        let search = TeammateSearch::default();
        let wizard = OnboardingWizard::default();

        let body = page_body(Route::Achievements, &context(&tracker, &search, &wizard));
        assert!(body.contains("🏆 Team Scout"));
        assert!(body.contains("🔒 Explorer"));
    }

    fn shortcut_app() -> App {
        let mut app = App::new();
        app.add_message::<GuideControl>()
            .add_message::<VoiceCommandControl>()
            .add_message::<ChatControl>()
            .add_message::<NavigateRequest>()
            .add_message::<NoticeRequest>()
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<Navigator>()
            .init_resource::<VoiceGuide>()
            .init_resource::<ChatAssistant>()
            .init_resource::<VoiceCommandWidget>()
            .insert_resource(SpeechRecognition(Box::new(ScriptedRecognizer::default())))
            .add_systems(
                Update,
                (handle_keyboard_shortcuts, handle_voice_command_controls).chain(),
            );
        app.world_mut()
            .resource_mut::<VoiceCommandWidget>()
            .apply_support(true);
        app
    }

    fn tap(app: &mut App, key: KeyCode) {
        {
            let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            keyboard.release_all();
            keyboard.clear();
            keyboard.press(key);
        }
        app.update();
    }

    #[test]
    fn escape_stops_a_listening_session() {
        let mut app = shortcut_app();

        tap(&mut app, KeyCode::KeyV);
        assert!(app.world().resource::<VoiceCommandWidget>().is_listening());
        assert!(app.world().resource::<SpeechRecognition>().0.is_listening());

        tap(&mut app, KeyCode::Escape);
        assert_eq!(
            app.world().resource::<VoiceCommandWidget>().state(),
            ListeningState::Idle
        );
        assert!(!app.world().resource::<SpeechRecognition>().0.is_listening());
    }

    #[test]
    fn v_toggles_listening() {
        let mut app = shortcut_app();

        tap(&mut app, KeyCode::KeyV);
        assert!(app.world().resource::<VoiceCommandWidget>().is_listening());
        tap(&mut app, KeyCode::KeyV);
        assert!(!app.world().resource::<VoiceCommandWidget>().is_listening());
        assert!(!app.world().resource::<SpeechRecognition>().0.is_listening());
    }

    #[derive(Resource, Default)]
    struct Reports(Vec<MoodReportRequest>);

    fn capture(mut reports: ResMut<Reports>, mut reader: MessageReader<MoodReportRequest>) {
        reports.0.extend(reader.read().copied());
    }

    #[test]
    fn pressing_a_mood_button_reports_a_check_in() {
        let mut app = App::new();
        app.add_message::<MoodReportRequest>()
            .init_resource::<Reports>()
            .add_systems(Update, (handle_mood_buttons, capture).chain());

        app.world_mut().spawn((
            Button,
            Interaction::Pressed,
            MoodButton { mood: Mood::Tired },
        ));
        app.world_mut().spawn((
            Button,
            Interaction::Hovered,
            MoodButton { mood: Mood::Happy },
        ));
        app.update();

        let reports = &app.world().resource::<Reports>().0;
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].mood, Mood::Tired);
        assert_eq!(reports[0].source, MoodSource::CheckIn);
    }
}
