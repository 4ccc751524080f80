//! Scene domain: wind sway for flora meshes.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::scene::spawn::SwaySource;
use crate::settings::{SceneSeed, WindTuning};

/// Per-mesh sway state, seeded once so repeated runs with the same scene
/// seed sway identically.
#[derive(Component, Debug)]
pub(crate) struct WindSway {
    base_rotation: Quat,
    base_translation: Vec3,
    phase: f32,
    factor: f32,
}

/// Attach sway state to every mesh under a sway-marked model root.
pub(crate) fn tag_sway_meshes(
    mut commands: Commands,
    seed: Res<SceneSeed>,
    sources: Query<Entity, With<SwaySource>>,
    children: Query<&Children>,
    untagged: Query<&Transform, (With<Mesh3d>, Without<WindSway>)>,
) {
    for root in &sources {
        for entity in children.iter_descendants(root) {
            let Ok(transform) = untagged.get(entity) else {
                continue;
            };
            let mut rng = ChaCha8Rng::seed_from_u64(seed.value.wrapping_add(entity.to_bits()));
            commands.entity(entity).insert(WindSway {
                base_rotation: transform.rotation,
                base_translation: transform.translation,
                phase: rng.random_range(0.0..std::f32::consts::TAU),
                factor: 0.8 + rng.random::<f32>() * 0.4,
            });
        }
    }
}

/// Sine sway plus an irregular secondary wobble, clamped to the maximum
/// deflection angle.
pub(crate) fn animate_sway(
    time: Res<Time>,
    wind: Res<WindTuning>,
    mut swaying: Query<(&WindSway, &mut Transform)>,
) {
    let t = time.elapsed_secs() * wind.speed;

    for (sway, mut transform) in &mut swaying {
        let wave = (t + sway.phase).sin() * wind.strength * sway.factor;
        let chaos_x = (t * 1.3 + sway.phase * 2.0).sin() * wind.chaos * sway.factor;
        let chaos_z = (t * 0.7 + sway.phase * 3.0).cos() * wind.chaos * sway.factor;

        let angle_x = (wave + chaos_x).clamp(-wind.max_angle, wind.max_angle);
        let angle_z = (wave * 0.5 + chaos_z).clamp(-wind.max_angle, wind.max_angle);

        transform.rotation =
            sway.base_rotation * Quat::from_euler(EulerRot::XYZ, angle_x, 0.0, angle_z);
        transform.translation =
            sway.base_translation + Vec3::new(chaos_x * 0.02, 0.0, chaos_z * 0.02);
    }
}
