//! Movement domain: player spawn and initial surface placement.

use bevy::prelude::*;

use crate::movement::update::place_actor;
use crate::movement::{Actor, Player, PlayerBody, WalkCamera};
use crate::navmesh::NavmeshSurface;
use crate::settings::MotionTuning;

/// Spawn the player rig: actor state, a first-person camera at eye height,
/// and an invisible capsule standing in for the body.
///
/// The actor starts airborne at the configured spawn point; it settles (or
/// is re-placed) once a surface exists.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MotionTuning>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let spawn = tuning.spawn();
    let body_length = (tuning.eye_height - 2.0 * tuning.radius).max(0.0);

    commands
        .spawn((
            Player,
            Actor::airborne_at(spawn, tuning.radius, tuning.eye_height),
            Transform::from_translation(spawn),
            Visibility::default(),
        ))
        .with_children(|parent| {
            parent.spawn((
                WalkCamera,
                Camera3d::default(),
                Projection::from(PerspectiveProjection {
                    fov: 75.0_f32.to_radians(),
                    ..default()
                }),
                Transform::from_xyz(0.0, tuning.eye_height, 0.0),
            ));
            parent.spawn((
                PlayerBody,
                Mesh3d(meshes.add(Capsule3d::new(tuning.radius, body_length))),
                MeshMaterial3d(materials.add(StandardMaterial::from(Color::srgb(
                    0.8, 0.2, 0.2,
                )))),
                Transform::from_xyz(0.0, tuning.eye_height / 2.0, 0.0),
                Visibility::Hidden,
            ));
        });

    info!("Player spawned at {:?} (awaiting surface)", spawn);
}

/// Settle the player onto the surface the frame it becomes available.
pub(crate) fn place_on_surface_ready(
    tuning: Res<MotionTuning>,
    surface: Res<NavmeshSurface>,
    mut walkers: Query<(&mut Actor, &mut Transform), With<Player>>,
) {
    for (mut actor, mut transform) in &mut walkers {
        place_actor(&mut actor, Some(&surface), tuning.spawn(), &tuning);
        transform.translation = actor.position;
        info!(
            "Placed player at {:?} ({} triangles)",
            actor.position,
            surface.triangle_count()
        );
    }
}
