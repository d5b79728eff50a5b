//! Movement domain: the player's body, locomotion models and plugin wiring.

mod components;
mod events;
mod locomotion;
mod resources;
mod spawn;
mod status;
mod systems;


pub use components::{Facing, Player};
pub use events::{PlayerDashedEvent, PlayerLandedEvent};
pub use locomotion::{BodyError, Clock, JumpKind, Locomotion, SprintMeter, StepOutcome};
pub use resources::{LocomotionModel, MovementInput, MovementTuning};
pub use spawn::{PLAYER_BOUNDS, PlayerVisual};
pub use status::{
    EdgeAction, PlayerStatus, Ramp, RampDuration, SpeedTarget, TRANSITION_TABLE,
    VelocityOverride, edge,
};

pub(crate) use spawn::respawn_player;

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::spawn::{despawn_player, spawn_player};
use crate::movement::systems::{
    read_input, run_fixed_step, run_variable_step, sync_player_transform,
};
use crate::tilemap::LevelSetup;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_message::<PlayerLandedEvent>()
            .add_message::<PlayerDashedEvent>()
            .add_systems(OnEnter(GameState::Playing), spawn_player.after(LevelSetup))
            .add_systems(OnExit(GameState::Playing), despawn_player)
            .add_systems(
                Update,
                (read_input, run_variable_step, sync_player_transform)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                FixedUpdate,
                run_fixed_step.run_if(in_state(GameState::Playing)),
            );
    }
}
