//! Feedback domain: cosmetic squash and shake animations for the player
//! sprite, plugin wiring and public exports.

mod animation;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use animation::{Channel, Feedback, FeedbackAnimation, FeedbackKind, FeedbackPose};
pub use resources::FeedbackTuning;

use bevy::prelude::*;

use crate::core::GameState;
use crate::feedback::systems::{
    play_feedback, release_feedback, start_dash_feedback, start_landing_feedback,
    toggle_feedbacks,
};

pub struct FeedbackPlugin;

impl Plugin for FeedbackPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FeedbackTuning>()
            .add_systems(Update, toggle_feedbacks)
            .add_systems(
                Update,
                (start_landing_feedback, start_dash_feedback, play_feedback)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(OnExit(GameState::Playing), release_feedback);
    }
}
