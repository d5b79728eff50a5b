//! UI domain: in-level HUD with level name, score and player status.

use bevy::prelude::*;

use crate::core::GameSession;
use crate::movement::{Locomotion, Player};
use crate::tilemap::ActiveLevel;

pub(crate) const HUD_PADDING: f32 = 16.0;

/// Marker for the HUD container
#[derive(Component)]
pub struct HudUI;

#[derive(Component)]
pub struct HudLevelText;

#[derive(Component)]
pub struct HudScoreText;

#[derive(Component)]
pub struct HudStatusText;

pub(crate) fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            HudUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                padding: UiRect::all(Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.05, 0.05, 0.08, 0.6)),
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            parent.spawn((
                HudLevelText,
                Text::new(""),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
            ));
            parent.spawn((
                HudScoreText,
                Text::new(""),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.8, 0.2)),
            ));
            parent.spawn((
                HudStatusText,
                Text::new(""),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.65)),
            ));
        });
}

pub(crate) fn show_hud(mut query: Query<&mut Visibility, With<HudUI>>) {
    for mut visibility in &mut query {
        *visibility = Visibility::Visible;
    }
}

pub(crate) fn hide_hud(mut query: Query<&mut Visibility, With<HudUI>>) {
    for mut visibility in &mut query {
        *visibility = Visibility::Hidden;
    }
}

pub(crate) fn update_hud(
    session: Res<GameSession>,
    level: Res<ActiveLevel>,
    player_query: Query<&Locomotion, With<Player>>,
    mut level_text: Query<&mut Text, (With<HudLevelText>, Without<HudScoreText>, Without<HudStatusText>)>,
    mut score_text: Query<&mut Text, (With<HudScoreText>, Without<HudLevelText>, Without<HudStatusText>)>,
    mut status_text: Query<&mut Text, (With<HudStatusText>, Without<HudLevelText>, Without<HudScoreText>)>,
) {
    let level_name = level
        .layout
        .as_ref()
        .map(|layout| layout.name.as_str())
        .unwrap_or("?");
    for mut text in &mut level_text {
        **text = format!(
            "Level {}/{}: {}",
            session.current_level() + 1,
            session.level_count(),
            level_name
        );
    }

    for mut text in &mut score_text {
        **text = format!("Score {:.0}", session.score());
    }

    let Ok(body) = player_query.single() else {
        return;
    };
    for mut text in &mut status_text {
        **text = format!(
            "{}  ({:+.1}, {:+.1})",
            body.status().label(),
            body.velocity.x,
            body.velocity.y
        );
    }
}
