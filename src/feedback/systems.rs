//! Feedback domain: systems starting and playing sprite animations.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::GameSession;
use crate::feedback::{Feedback, FeedbackAnimation, FeedbackPose, FeedbackTuning};
use crate::movement::{PlayerDashedEvent, PlayerLandedEvent, PlayerVisual};
use crate::transitions::TransitionPool;

pub(crate) fn start_landing_feedback(
    session: Res<GameSession>,
    tuning: Res<FeedbackTuning>,
    mut pool: ResMut<TransitionPool>,
    mut landings: MessageReader<PlayerLandedEvent>,
    mut query: Query<&mut Feedback, With<PlayerVisual>>,
) {
    let Some(impact_speed) = landings.read().map(|event| event.impact_speed).last() else {
        return;
    };
    if !session.feedbacks_enabled {
        return;
    }

    for mut feedback in &mut query {
        if let Some(animation) = FeedbackAnimation::landing_squash(impact_speed, &tuning, &mut pool)
        {
            feedback.start(animation, &mut pool);
        }
    }
}

pub(crate) fn start_dash_feedback(
    session: Res<GameSession>,
    tuning: Res<FeedbackTuning>,
    mut pool: ResMut<TransitionPool>,
    mut dashes: MessageReader<PlayerDashedEvent>,
    mut query: Query<&mut Feedback, With<PlayerVisual>>,
) {
    let Some(direction) = dashes.read().map(|event| event.direction).last() else {
        return;
    };
    if !session.feedbacks_enabled {
        return;
    }

    for mut feedback in &mut query {
        let animation = FeedbackAnimation::dash_shake(direction, &tuning, &mut pool);
        feedback.start(animation, &mut pool);
    }
}

/// Sample running animations and write the pose to the sprite. The sprite
/// is scaled around the player's feet.
pub(crate) fn play_feedback(
    time: Res<Time>,
    session: Res<GameSession>,
    mut pool: ResMut<TransitionPool>,
    mut query: Query<(&mut Feedback, &PlayerVisual, &mut Transform)>,
) {
    for (mut feedback, visual, mut transform) in &mut query {
        let pose = if session.feedbacks_enabled {
            feedback.tick(time.delta_secs(), &mut pool)
        } else {
            feedback.cancel(&mut pool);
            FeedbackPose::REST
        };

        transform.scale = pose.scale.extend(1.0);
        transform.translation.x = pose.offset_x;
        transform.translation.y = visual.half_height * pose.scale.y;
    }
}

pub(crate) fn toggle_feedbacks(keyboard: Res<ButtonInput<KeyCode>>, mut session: ResMut<GameSession>) {
    if keyboard.just_pressed(KeyCode::KeyF) {
        session.feedbacks_enabled = !session.feedbacks_enabled;
        info!(
            "Feedbacks {}",
            if session.feedbacks_enabled { "enabled" } else { "disabled" }
        );
    }
}

pub(crate) fn release_feedback(mut pool: ResMut<TransitionPool>, mut query: Query<&mut Feedback>) {
    for mut feedback in &mut query {
        feedback.cancel(&mut pool);
    }
}
