//! Debug domain: developer hotkeys for locomotion and collision switches.
//!
//! - F1: toggle the info overlay
//! - F2: switch locomotion model
//! - F3: toggle discrete movement
//! - F4: switch collision resolution order
//! - Ctrl+R: respawn at the level spawn

mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use state::DebugState;

use bevy::prelude::*;

use crate::core::GameState;
use crate::debug::systems::{
    handle_debug_hotkeys, toggle_debug_info, update_debug_info_overlay, update_status_message,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (
                    toggle_debug_info,
                    handle_debug_hotkeys.run_if(in_state(GameState::Playing)),
                    update_status_message,
                    update_debug_info_overlay,
                )
                    .chain(),
            );
    }
}
