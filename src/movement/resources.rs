//! Movement domain: input snapshot and look state resources.

use bevy::prelude::*;

/// Per-frame snapshot of locomotion input.
///
/// Written once per frame by the polling systems, read-only for everything
/// downstream; the simulation never talks to input devices directly.
#[derive(Resource, Debug, Clone, Default)]
pub struct WalkInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub sprint: bool,
    /// Jump key edge this frame.
    pub jump_pressed: bool,
    /// Pointer click this frame, only reported while the cursor is captured.
    pub teleport_pressed: bool,
}

impl WalkInput {
    pub fn any_direction(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

/// Accumulated look angles in radians.
///
/// Yaw turns around +Y (0 faces -Z), pitch is positive looking up and
/// clamped by the tuning's `pitch_limit`.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct LookAngles {
    pub yaw: f32,
    pub pitch: f32,
}

impl LookAngles {
    /// Unit facing vector for the current yaw and pitch.
    pub fn facing(&self) -> Vec3 {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0) * Vec3::NEG_Z
    }
}
