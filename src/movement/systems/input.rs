//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{MovementInput, MovementTuning};

/// Sticks inside this radius read as neutral.
const STICK_DEADZONE: f32 = 0.15;

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    tuning: Res<MovementTuning>,
    mut input: ResMut<MovementInput>,
) {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    let jump_keys = [KeyCode::Space, KeyCode::KeyK];
    let sprint_keys = [KeyCode::KeyX, KeyCode::ShiftRight];
    let dash_keys = [KeyCode::ShiftLeft, KeyCode::KeyJ];

    let mut sampled = MovementInput {
        axis: Vec2::new(x, y),
        analog: false,
        jump_pressed: keyboard.any_just_pressed(jump_keys),
        jump_held: keyboard.any_pressed(jump_keys),
        jump_released: keyboard.any_just_released(jump_keys),
        sprint_held: keyboard.any_pressed(sprint_keys),
        dash_pressed: keyboard.any_just_pressed(dash_keys),
    };

    // The first connected pad with a deflected stick overrides the keyboard axis.
    for gamepad in &gamepads {
        let stick = gamepad.left_stick();
        if stick.length() > STICK_DEADZONE && sampled.axis == Vec2::ZERO {
            sampled.axis = stick.clamp(Vec2::splat(-1.0), Vec2::ONE);
            sampled.analog = true;
        }
        sampled.jump_pressed |= gamepad.just_pressed(GamepadButton::South);
        sampled.jump_held |= gamepad.pressed(GamepadButton::South);
        sampled.jump_released |= gamepad.just_released(GamepadButton::South);
        sampled.sprint_held |= gamepad.pressed(GamepadButton::West);
        sampled.dash_pressed |= gamepad.just_pressed(GamepadButton::RightTrigger);
    }

    if tuning.discrete_movement {
        sampled.quantize();
        sampled.analog = false;
    }

    *input = sampled;
}
