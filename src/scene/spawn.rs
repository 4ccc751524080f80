//! Scene domain: glTF model spawning from the manifest.

use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;

use crate::settings::SceneManifest;

/// A spawned manifest entry; `id` is the manifest id, for logs and debug.
#[derive(Component, Debug)]
pub struct SceneModel {
    pub id: String,
}

/// This model's triangles become the walkable surface.
#[derive(Component, Debug)]
pub struct WalkableSource;

/// This model's meshes sway in the wind.
#[derive(Component, Debug)]
pub struct SwaySource;

pub(crate) fn spawn_models(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    manifest: Res<SceneManifest>,
) {
    if !manifest.models.iter().any(|m| m.walkable) {
        warn!("Manifest has no walkable model; expect the fallback surface");
    }

    for def in &manifest.models {
        let scene = asset_server.load(GltfAssetLabel::Scene(0).from_asset(def.path.clone()));
        let visibility = if def.hidden {
            Visibility::Hidden
        } else {
            Visibility::default()
        };

        let mut entity = commands.spawn((
            SceneModel { id: def.id.clone() },
            SceneRoot(scene),
            Transform::from_translation(Vec3::from_array(def.translation))
                .with_scale(Vec3::splat(def.scale)),
            visibility,
        ));
        if def.walkable {
            entity.insert(WalkableSource);
        }
        if def.sway {
            entity.insert(SwaySource);
        }

        info!("Loading model '{}' from {}", def.id, def.path);
    }
}
