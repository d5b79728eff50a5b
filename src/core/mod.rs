//! Core domain: game flow, session scoring and camera wiring.

mod events;
mod resources;
mod state;
mod systems;


pub use events::{LevelCompletedEvent, PlayerDiedEvent};
pub use resources::{Destination, GameSession, SessionSettings};
pub use state::GameState;
pub use systems::MainCamera;

use bevy::prelude::*;

use crate::core::systems::{
    begin_attempt, finish_boot, follow_player, handle_level_completed, handle_menu_input,
    handle_player_died, setup_camera, tick_score,
};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<GameSession>()
            .add_message::<LevelCompletedEvent>()
            .add_message::<PlayerDiedEvent>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, finish_boot.run_if(in_state(GameState::Boot)))
            .add_systems(OnEnter(GameState::Playing), begin_attempt)
            .add_systems(
                Update,
                (
                    tick_score,
                    handle_level_completed,
                    handle_player_died,
                    follow_player,
                )
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                handle_menu_input.run_if(
                    in_state(GameState::LevelComplete)
                        .or(in_state(GameState::LevelFailed))
                        .or(in_state(GameState::GameComplete)),
                ),
            );
    }
}
