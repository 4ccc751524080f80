//! Scene domain: lighting.

use bevy::prelude::*;

/// Warm key light with shadows, aimed across the scene from high up.
pub(crate) fn setup_lights(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            color: Color::srgb_u8(255, 248, 227),
            illuminance: 25_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(15.0, 10.0, 7.5).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
