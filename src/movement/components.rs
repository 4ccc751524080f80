//! Movement domain: components for the player actor and its camera.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Player;

/// First-person camera, spawned as a child of the player at eye height.
#[derive(Component, Debug)]
pub struct WalkCamera;

/// Invisible body proxy mesh mirroring the actor's footprint.
#[derive(Component, Debug)]
pub struct PlayerBody;

/// Locomotion state for one actor.
///
/// `position` is the feet position in world space. Its (x, z) is only ever
/// changed after the destination passed a walkability probe, except by
/// teleports (which land on a probed surface point by construction) and by
/// the fallback spawn while no surface exists.
#[derive(Component, Debug, Clone)]
pub struct Actor {
    pub position: Vec3,
    pub vertical_velocity: f32,
    pub grounded: bool,
    pub radius: f32,
    pub eye_height: f32,
}

impl Actor {
    /// Actor falling from `position` with no vertical speed yet.
    pub fn airborne_at(position: Vec3, radius: f32, eye_height: f32) -> Self {
        Self {
            position,
            vertical_velocity: 0.0,
            grounded: false,
            radius,
            eye_height,
        }
    }

    /// World-space eye position, where teleport rays originate.
    pub fn eye(&self) -> Vec3 {
        self.position + Vec3::Y * self.eye_height
    }
}
