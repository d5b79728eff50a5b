//! Core domain: game state definitions for the level flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Waiting for content to load.
    #[default]
    Boot,
    Playing,
    LevelComplete,
    LevelFailed,
    GameComplete,
}
