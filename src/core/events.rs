//! Core domain: events for level flow.

use bevy::ecs::message::Message;
use bevy::math::Vec2;

/// Event fired when the player touches a goal tile
#[derive(Debug)]
pub struct LevelCompletedEvent {
    pub level_id: String,
}

impl Message for LevelCompletedEvent {}

/// Event fired when the player touches a death tile or falls out of the level
#[derive(Debug)]
pub struct PlayerDiedEvent {
    pub position: Vec2,
}

impl Message for PlayerDiedEvent {}
