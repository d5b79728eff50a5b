//! UI domain: in-level HUD and level-flow overlays.

mod hud;
mod overlay;


pub use overlay::{OverlayContent, overlay_content};

use bevy::prelude::*;

use crate::core::GameState;
use crate::ui::hud::{hide_hud, show_hud, spawn_hud, update_hud};
use crate::ui::overlay::{despawn_flow_overlay, spawn_flow_overlay};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud)
            .add_systems(OnEnter(GameState::Playing), show_hud)
            .add_systems(OnExit(GameState::Playing), hide_hud)
            .add_systems(Update, update_hud.run_if(in_state(GameState::Playing)));

        for state in [
            GameState::LevelComplete,
            GameState::LevelFailed,
            GameState::GameComplete,
        ] {
            app.add_systems(OnEnter(state.clone()), spawn_flow_overlay)
                .add_systems(OnExit(state), despawn_flow_overlay);
        }
    }
}
