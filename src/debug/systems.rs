//! Debug domain: hotkeys for runtime tweaks and the info overlay.

use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::movement::{Locomotion, MovementTuning, Player};
use crate::tilemap::{ActiveLevel, CollisionSettings};
use crate::transitions::TransitionPool;

const MESSAGE_SECONDS: f32 = 2.0;

/// Marker for debug info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

/// Toggle the info overlay with F1 or backtick key
pub(crate) fn toggle_debug_info(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote) {
        debug_state.show_info = !debug_state.show_info;
    }
}

/// Handle keyboard shortcuts for tuning switches
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut tuning: ResMut<MovementTuning>,
    mut collision: ResMut<CollisionSettings>,
    mut pool: ResMut<TransitionPool>,
    level: Res<ActiveLevel>,
    mut player_query: Query<&mut Locomotion, With<Player>>,
) {
    // F2: Switch locomotion model
    if keyboard.just_pressed(KeyCode::F2) {
        tuning.model = tuning.model.cycled();
        if let Ok(mut body) = player_query.single_mut() {
            body.release_transitions(&mut pool);
        }
        let msg = format!("Model: {:?}", tuning.model);
        info!("{msg}");
        debug_state.set_message(msg, MESSAGE_SECONDS);
    }

    // F3: Toggle discrete movement
    if keyboard.just_pressed(KeyCode::F3) {
        tuning.discrete_movement = !tuning.discrete_movement;
        let msg = if tuning.discrete_movement {
            "Discrete movement ON"
        } else {
            "Discrete movement OFF"
        };
        info!("{msg}");
        debug_state.set_message(msg, MESSAGE_SECONDS);
    }

    // F4: Switch collision resolution order
    if keyboard.just_pressed(KeyCode::F4) {
        collision.order = collision.order.toggled();
        let msg = format!("Resolution order: {:?}", collision.order);
        info!("{msg}");
        debug_state.set_message(msg, MESSAGE_SECONDS);
    }

    // Ctrl+R: Respawn at the level spawn
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if ctrl && keyboard.just_pressed(KeyCode::KeyR) {
        let Ok(mut body) = player_query.single_mut() else {
            return;
        };
        if crate::movement::respawn_player(&level, &mut body, &mut pool) {
            debug_state.set_message("Respawned", MESSAGE_SECONDS);
        } else {
            warn!("Respawn requested with no active level");
        }
    }
}

/// Update status message timer and fade out
pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    debug_state.tick_message(time.delta_secs());
}

/// Update the debug info overlay with current locomotion state
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    tuning: Res<MovementTuning>,
    collision: Res<CollisionSettings>,
    player_query: Query<&Locomotion, With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    let Ok(mut text) = overlay_query.single_mut() else {
        return;
    };
    let Ok(body) = player_query.single() else {
        **text = "No player".to_string();
        return;
    };

    **text = format!(
        "Status: {} (from {})\nPos: ({:.2}, {:.2})\nVel: ({:.2}, {:.2})\nGrounded: {}  Wall L/R: {}/{}\nJumps: {}  Dashed: {}  Sprint: {}\nModel: {:?}\nOrder: {:?}\nDiscrete: {}{}",
        body.status().label(),
        body.previous_status().label(),
        body.position.x,
        body.position.y,
        body.velocity.x,
        body.velocity.y,
        body.grounded,
        body.on_wall_left,
        body.on_wall_right,
        body.num_jumps,
        body.dashed,
        body.sprint.sprinting,
        tuning.model,
        collision.order,
        tuning.discrete_movement,
        debug_state
            .message()
            .map(|msg| format!("\n> {msg}"))
            .unwrap_or_default(),
    );
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
