//! Movement domain: locomotion systems for the frame and fixed steps.

use bevy::ecs::message::MessageWriter;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::core::{LevelCompletedEvent, PlayerDiedEvent};
use crate::movement::{
    Clock, Locomotion, MovementInput, MovementTuning, Player, PlayerDashedEvent,
    PlayerLandedEvent,
};
use crate::tilemap::{ActiveLevel, CollisionSettings, TILE_PIXELS};
use crate::transitions::TransitionPool;

const PLAYER_Z: f32 = 10.0;

/// Clocks, input and settings read by a fixed step.
#[derive(SystemParam)]
pub(crate) struct StepContext<'w> {
    fixed: Res<'w, Time<Fixed>>,
    time: Res<'w, Time<Virtual>>,
    input: Res<'w, MovementInput>,
    tuning: Res<'w, MovementTuning>,
    settings: Res<'w, CollisionSettings>,
    level: Res<'w, ActiveLevel>,
}

/// Messages a fixed step can produce.
#[derive(SystemParam)]
pub(crate) struct StepMessages<'w> {
    landings: MessageWriter<'w, PlayerLandedEvent>,
    completions: MessageWriter<'w, LevelCompletedEvent>,
    deaths: MessageWriter<'w, PlayerDiedEvent>,
}

pub(crate) fn run_variable_step(
    time: Res<Time<Virtual>>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut pool: ResMut<TransitionPool>,
    mut dashes: MessageWriter<PlayerDashedEvent>,
    mut query: Query<&mut Locomotion, With<Player>>,
) {
    let clock = Clock::new(time.elapsed_secs(), time.delta_secs());

    for mut body in &mut query {
        let was_dashing = body.dashing;
        body.variable_step(&input, clock, &tuning, &mut pool);
        if body.dashing && !was_dashing {
            dashes.write(PlayerDashedEvent {
                direction: body.dash_direction,
            });
        }
    }
}

/// Integrate and collide the player. `now` comes from the virtual clock so
/// press timestamps taken during the frame step compare against the same
/// timeline.
pub(crate) fn run_fixed_step(
    ctx: StepContext,
    mut pool: ResMut<TransitionPool>,
    mut messages: StepMessages,
    mut query: Query<&mut Locomotion, With<Player>>,
) {
    let Some(layout) = ctx.level.layout.as_ref() else {
        return;
    };
    let clock = Clock::new(ctx.time.elapsed_secs(), ctx.fixed.delta_secs());

    for mut body in &mut query {
        let impact_speed = -body.velocity.y;
        let outcome = body.fixed_step(
            &ctx.input,
            &layout.grid,
            &ctx.settings,
            clock,
            &ctx.tuning,
            &mut pool,
        );

        if outcome.landed {
            messages.landings.write(PlayerLandedEvent { impact_speed });
        }
        if outcome.died {
            info!("Player died at {:.2}, {:.2}", body.position.x, body.position.y);
            messages.deaths.write(PlayerDiedEvent {
                position: body.position,
            });
        } else if outcome.reached_goal {
            info!("Goal reached in level '{}'", layout.id);
            messages.completions.write(LevelCompletedEvent {
                level_id: layout.id.clone(),
            });
        }
    }
}

pub(crate) fn sync_player_transform(mut query: Query<(&Locomotion, &mut Transform), With<Player>>) {
    for (body, mut transform) in &mut query {
        transform.translation = (body.position * TILE_PIXELS).extend(PLAYER_Z);
    }
}
