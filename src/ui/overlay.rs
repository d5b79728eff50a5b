//! UI domain: centered overlay for the level-complete, level-failed and
//! game-complete screens.

use bevy::prelude::*;

use crate::core::{GameSession, GameState};

/// Marker for the flow overlay root
#[derive(Component)]
pub struct FlowOverlayUI;

/// Text shown for a flow state.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayContent {
    pub title: &'static str,
    pub subtitle: String,
    pub hint: &'static str,
    pub color: Color,
}

/// What the overlay says in `state`. `None` for states without an overlay.
pub fn overlay_content(state: &GameState, session: &GameSession) -> Option<OverlayContent> {
    let score = format!("Score {:.0}", session.score());
    match state {
        GameState::LevelComplete => Some(OverlayContent {
            title: "LEVEL COMPLETE",
            subtitle: score,
            hint: "Press [Enter] to continue, [Esc] to start over",
            color: Color::srgb(0.3, 0.85, 0.4),
        }),
        GameState::LevelFailed => Some(OverlayContent {
            title: "LEVEL FAILED",
            subtitle: format!("Attempt {}", session.attempts()),
            hint: "Press [R] or [Enter] to retry, [Esc] to start over",
            color: Color::srgb(0.8, 0.15, 0.15),
        }),
        GameState::GameComplete => Some(OverlayContent {
            title: "GAME COMPLETE",
            subtitle: format!("Final {}", score.to_lowercase()),
            hint: "Press [Enter] to play again",
            color: Color::srgb(0.95, 0.8, 0.2),
        }),
        GameState::Boot | GameState::Playing => None,
    }
}

pub(crate) fn spawn_flow_overlay(
    mut commands: Commands,
    state: Res<State<GameState>>,
    session: Res<GameSession>,
) {
    let Some(content) = overlay_content(state.get(), &session) else {
        return;
    };

    // Full screen dark overlay
    commands
        .spawn((
            FlowOverlayUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.8)),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(content.title),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(content.color),
                Node {
                    margin: UiRect::bottom(Val::Px(24.0)),
                    ..default()
                },
            ));
            parent.spawn((
                Text::new(content.subtitle),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.8)),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));
            parent.spawn((
                Text::new(content.hint),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.4, 0.4, 0.45)),
            ));
        });
}

pub(crate) fn despawn_flow_overlay(
    mut commands: Commands,
    query: Query<Entity, With<FlowOverlayUI>>,
) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
