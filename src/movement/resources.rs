//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Which of the two locomotion designs drives the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum LocomotionModel {
    /// Status changes pick easing transitions from the 8x8 edge table.
    TransitionTable,
    /// Velocity integrates directly toward an input-driven target speed.
    #[default]
    DirectIntegration,
}

impl LocomotionModel {
    pub fn cycled(self) -> Self {
        match self {
            LocomotionModel::TransitionTable => LocomotionModel::DirectIntegration,
            LocomotionModel::DirectIntegration => LocomotionModel::TransitionTable,
        }
    }
}

/// Speeds are in tiles per second, times in seconds.
#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    pub walking_speed: f32,
    pub running_speed: f32,
    pub midair_speed: f32,
    pub dash_speed: f32,
    pub max_fall_speed: f32,
    pub wall_slide_speed: f32,
    pub jump_speed: f32,
    /// Upward speed kept when the jump button is released early.
    pub jump_release_speed: f32,
    pub wall_jump_speed: f32,
    pub wall_jump_kick: f32,
    pub gravity: f32,
    /// Jumps allowed per airtime, the first one included.
    pub max_num_jumps: u32,
    /// How long a jump press stays valid before it is dropped.
    pub jump_bounce_time: f32,
    /// How long after walking off a ledge a ground jump is still allowed.
    pub ledge_grace_time: f32,
    pub max_sprint_time: f32,
    pub sprint_cooldown_time: f32,
    pub dash_duration: f32,
    pub acceleration: f32,
    /// Rate toward running speed while sprinting.
    pub sprint_acceleration: f32,
    pub deceleration: f32,
    pub turn_acceleration: f32,
    pub run_threshold: f32,
    pub crouch_threshold: f32,
    /// Minimum stick travel between two samples that counts as a flick.
    pub rush_value: f32,
    pub discrete_movement: bool,
    pub model: LocomotionModel,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            walking_speed: 6.0,
            running_speed: 10.0,
            midair_speed: 7.0,
            dash_speed: 18.0,
            max_fall_speed: 20.0,
            wall_slide_speed: 3.0,
            jump_speed: 14.0,
            jump_release_speed: 5.0,
            wall_jump_speed: 13.0,
            wall_jump_kick: 8.0,
            gravity: 40.0,
            max_num_jumps: 2,
            jump_bounce_time: 0.12,
            ledge_grace_time: 0.1,
            max_sprint_time: 2.0,
            sprint_cooldown_time: 1.5,
            dash_duration: 0.15,
            acceleration: 60.0,
            sprint_acceleration: 100.0,
            deceleration: 80.0,
            turn_acceleration: 120.0,
            run_threshold: 0.7,
            crouch_threshold: 0.7,
            rush_value: 0.6,
            discrete_movement: false,
            model: LocomotionModel::DirectIntegration,
        }
    }
}

impl MovementTuning {
    /// Apex height of a single jump from rest, in tiles.
    pub fn single_jump_height(&self) -> f32 {
        if self.gravity <= 0.0 {
            return f32::INFINITY;
        }
        self.jump_speed * self.jump_speed / (2.0 * self.gravity)
    }
}

/// Input sampled once per frame.
#[derive(Resource, Debug, Default, Clone)]
pub struct MovementInput {
    /// Each component in [-1, 1]; y < 0 is down.
    pub axis: Vec2,
    /// True when the axis came from an analog stick.
    pub analog: bool,
    pub jump_pressed: bool,
    pub jump_held: bool,
    pub jump_released: bool,
    pub sprint_held: bool,
    pub dash_pressed: bool,
}

impl MovementInput {
    /// Snap each axis component to -1, 0 or 1.
    pub fn quantize(&mut self) {
        self.axis = Vec2::new(quantize_component(self.axis.x), quantize_component(self.axis.y));
    }
}

fn quantize_component(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
