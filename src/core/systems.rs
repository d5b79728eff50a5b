//! Core domain: level flow systems and camera setup.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::events::{LevelCompletedEvent, PlayerDiedEvent};
use crate::core::resources::{Destination, GameSession};
use crate::core::state::GameState;
use crate::movement::Player;

/// Camera catch-up rate per second.
const CAMERA_FOLLOW_RATE: f32 = 6.0;

#[derive(Component, Debug)]
pub struct MainCamera;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera));
}

pub(crate) fn finish_boot(session: Res<GameSession>, mut game_state: ResMut<NextState<GameState>>) {
    if session.level_count() == 0 {
        return;
    }
    info!("Boot complete, {} levels available", session.level_count());
    game_state.set(GameState::Playing);
}

pub(crate) fn begin_attempt(mut session: ResMut<GameSession>) {
    session.begin_attempt();
    info!(
        "Starting level {} (attempt {}), score {:.0}",
        session.current_level() + 1,
        session.attempts(),
        session.score()
    );
}

pub(crate) fn tick_score(time: Res<Time>, mut session: ResMut<GameSession>) {
    session.tick_score(time.delta_secs());
}

pub(crate) fn handle_level_completed(
    mut events: MessageReader<LevelCompletedEvent>,
    session: Res<GameSession>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    if let Some(event) = events.read().last() {
        info!(
            "Level '{}' complete with score {:.0}",
            event.level_id,
            session.score()
        );
        game_state.set(GameState::LevelComplete);
    }
}

pub(crate) fn handle_player_died(
    mut events: MessageReader<PlayerDiedEvent>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    if let Some(event) = events.read().last() {
        info!(
            "Player died at {:.1}, {:.1}",
            event.position.x, event.position.y
        );
        game_state.set(GameState::LevelFailed);
    }
}

/// Enter continues, R retries a failed level, Esc starts over.
pub(crate) fn handle_menu_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut session: ResMut<GameSession>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        info!("Restarting from the first level");
        session.reset();
        game_state.set(GameState::Playing);
        return;
    }

    let continue_pressed =
        keyboard.just_pressed(KeyCode::Enter) || keyboard.just_pressed(KeyCode::NumpadEnter);
    let retry_pressed = keyboard.just_pressed(KeyCode::KeyR);

    match state.get() {
        GameState::LevelComplete if continue_pressed => match session.advance() {
            Destination::Level(index) => {
                info!("Advancing to level {}", index + 1);
                game_state.set(GameState::Playing);
            }
            Destination::GameComplete => {
                info!("All levels complete, final score {:.0}", session.score());
                game_state.set(GameState::GameComplete);
            }
        },
        GameState::LevelFailed if continue_pressed || retry_pressed => {
            game_state.set(GameState::Playing);
        }
        GameState::GameComplete if continue_pressed => {
            session.reset();
            game_state.set(GameState::Playing);
        }
        _ => {}
    }
}

pub(crate) fn follow_player(
    time: Res<Time>,
    player: Query<&Transform, (With<Player>, Without<MainCamera>)>,
    mut camera: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(target) = player.single() else {
        return;
    };
    let blend = (CAMERA_FOLLOW_RATE * time.delta_secs()).clamp(0.0, 1.0);
    for mut transform in &mut camera {
        let goal = target.translation.truncate();
        let current = transform.translation.truncate();
        let next = current.lerp(goal, blend);
        transform.translation.x = next.x;
        transform.translation.y = next.y;
    }
}
