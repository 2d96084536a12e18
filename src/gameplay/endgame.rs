//! Terminal banner rendered once the session is decided.

use bevy::prelude::*;

use crate::session::SessionPhase;
use crate::theme::palette;

const BANNER_FONT_SIZE: f32 = 64.0;

fn spawn_win_banner(mut commands: Commands) {
    spawn_banner(&mut commands, "You Win", palette::WIN_TEXT);
}

fn spawn_lose_banner(mut commands: Commands) {
    spawn_banner(&mut commands, "You Lose", palette::LOSE_TEXT);
}

/// Full-screen node centering the banner text. Spawned exactly once per
/// session: terminal states are never re-entered.
fn spawn_banner(commands: &mut Commands, text: &str, color: Color) {
    commands.spawn((
        Name::new("Endgame Banner"),
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            position_type: PositionType::Absolute,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            ..default()
        },
        GlobalZIndex(1),
        children![(
            Text::new(text),
            TextFont::from_font_size(BANNER_FONT_SIZE),
            TextColor(color),
        )],
    ));
}

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(SessionPhase::Won), spawn_win_banner);
    app.add_systems(OnEnter(SessionPhase::Lost), spawn_lose_banner);
}
