//! Movement domain: per-frame drive systems around the pure update rules.

use bevy::prelude::*;

use crate::movement::update::{compute_intent, step_actor, try_jump};
use crate::movement::{Actor, LookAngles, Player, WalkCamera, WalkInput};
use crate::navmesh::NavmeshSurface;
use crate::settings::MotionTuning;

/// Run one locomotion step for every player actor and write the result
/// back to its transform (position plus yaw; pitch lives on the camera).
pub(crate) fn advance_walkers(
    input: Res<WalkInput>,
    look: Res<LookAngles>,
    tuning: Res<MotionTuning>,
    surface: Option<Res<NavmeshSurface>>,
    mut walkers: Query<(&mut Actor, &mut Transform), With<Player>>,
) {
    let surface = surface.as_deref();
    let intent = compute_intent(&input, look.facing(), &tuning);

    for (mut actor, mut transform) in &mut walkers {
        if input.jump_pressed {
            try_jump(&mut actor, &tuning);
        }

        step_actor(&mut actor, intent, surface, &tuning);

        transform.translation = actor.position;
        transform.rotation = Quat::from_rotation_y(look.yaw);
    }
}

/// Apply the accumulated pitch to the first-person camera.
pub(crate) fn sync_camera_pitch(
    look: Res<LookAngles>,
    mut cameras: Query<&mut Transform, With<WalkCamera>>,
) {
    for mut transform in &mut cameras {
        transform.rotation = Quat::from_rotation_x(look.pitch);
    }
}
