//! Movement domain: input polling and pointer capture.
//!
//! Raw device state is folded into the `WalkInput`/`LookAngles` snapshots
//! here, once per frame; nothing downstream reads devices directly.

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions, PrimaryWindow};

use crate::movement::{LookAngles, WalkInput};
use crate::settings::MotionTuning;

fn cursor_captured(cursor: &CursorOptions) -> bool {
    cursor.grab_mode != CursorGrabMode::None
}

/// Fold keyboard and mouse button state into this frame's snapshot.
///
/// Runs before `update_cursor_grab`, so the click that captures the cursor
/// is never also reported as a teleport.
pub(crate) fn sample_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    cursor_query: Query<&CursorOptions, With<PrimaryWindow>>,
    mut input: ResMut<WalkInput>,
) {
    input.forward = keyboard.pressed(KeyCode::KeyW);
    input.backward = keyboard.pressed(KeyCode::KeyS);
    input.left = keyboard.pressed(KeyCode::KeyA);
    input.right = keyboard.pressed(KeyCode::KeyD);
    input.sprint =
        keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);
    input.jump_pressed = keyboard.just_pressed(KeyCode::Space);

    let captured = cursor_query.single().is_ok_and(cursor_captured);
    input.teleport_pressed = captured && mouse.just_pressed(MouseButton::Left);
}

/// Click captures the cursor, Escape releases it.
pub(crate) fn update_cursor_grab(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut cursor_query: Query<&mut CursorOptions, With<PrimaryWindow>>,
) {
    let Ok(mut cursor) = cursor_query.single_mut() else {
        return;
    };

    if keyboard.just_pressed(KeyCode::Escape) && cursor_captured(&cursor) {
        cursor.grab_mode = CursorGrabMode::None;
        cursor.visible = true;
    } else if mouse.just_pressed(MouseButton::Left) && !cursor_captured(&cursor) {
        cursor.grab_mode = CursorGrabMode::Locked;
        cursor.visible = false;
    }
}

/// Accumulate mouse motion into yaw/pitch while the cursor is captured.
pub(crate) fn accumulate_look(
    motion: Res<AccumulatedMouseMotion>,
    tuning: Res<MotionTuning>,
    cursor_query: Query<&CursorOptions, With<PrimaryWindow>>,
    mut look: ResMut<LookAngles>,
) {
    if !cursor_query.single().is_ok_and(cursor_captured) {
        return;
    }

    let delta = motion.delta;
    if delta == Vec2::ZERO {
        return;
    }

    look.yaw -= delta.x * tuning.mouse_sensitivity;
    look.pitch = (look.pitch - delta.y * tuning.mouse_sensitivity)
        .clamp(-tuning.pitch_limit, tuning.pitch_limit);
}
