//! Movement domain: messages describing notable locomotion moments.

use bevy::ecs::message::Message;

/// The player touched ground after being airborne.
#[derive(Debug)]
pub struct PlayerLandedEvent {
    /// Downward speed just before the landing, in tiles per second.
    pub impact_speed: f32,
}

impl Message for PlayerLandedEvent {}

/// An air dash started this frame.
#[derive(Debug)]
pub struct PlayerDashedEvent {
    pub direction: f32,
}

impl Message for PlayerDashedEvent {}
