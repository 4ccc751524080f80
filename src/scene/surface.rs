//! Scene domain: building the walkable surface from loaded assets.

use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::navmesh::{NavmeshSurface, append_mesh_triangles};
use crate::scene::spawn::{SceneModel, WalkableSource};

/// Half-extent of the fallback surface (and its placeholder floor).
const FALLBACK_HALF_EXTENT: f32 = 25.0;

/// Marks a walkable root whose surface has been produced (or given up on).
#[derive(Component, Debug)]
pub(crate) struct SurfaceBuilt;

/// Extract world-space triangles from the walkable model once every one of
/// its meshes has resolved, and publish them as the `NavmeshSurface`.
///
/// Runs only while no surface resource exists; until the scene instance
/// has spawned mesh children there is nothing to do, and a partially
/// loaded model is left for a later frame rather than truncated.
pub(crate) fn build_walkable_surface(
    mut commands: Commands,
    meshes: Res<Assets<Mesh>>,
    sources: Query<(Entity, &SceneModel), (With<WalkableSource>, Without<SurfaceBuilt>)>,
    children: Query<&Children>,
    mesh_instances: Query<(&Mesh3d, &GlobalTransform)>,
) {
    for (root, model) in &sources {
        let mut triangles = Vec::new();
        let mut found_mesh = false;
        let mut pending = false;

        for entity in children.iter_descendants(root) {
            let Ok((mesh_handle, transform)) = mesh_instances.get(entity) else {
                continue;
            };
            found_mesh = true;
            match meshes.get(&mesh_handle.0) {
                Some(mesh) => {
                    append_mesh_triangles(mesh, transform, &mut triangles);
                }
                None => {
                    pending = true;
                    break;
                }
            }
        }

        if !found_mesh || pending {
            continue;
        }

        commands.entity(root).insert(SurfaceBuilt);
        if triangles.is_empty() {
            warn!(
                "Walkable model '{}' contained no triangles; using fallback surface",
                model.id
            );
            commands.insert_resource(fallback_surface());
        } else {
            info!(
                "Walkable surface built from '{}': {} triangles",
                model.id,
                triangles.len()
            );
            commands.insert_resource(NavmeshSurface::new(triangles));
        }
    }
}

/// Install the deterministic fallback surface when the walkable model
/// fails to load, plus placeholder geometry to stand on.
pub(crate) fn install_fallback_surface(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    sources: Query<
        (Entity, &SceneModel, &SceneRoot),
        (With<WalkableSource>, Without<SurfaceBuilt>),
    >,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (root, model, scene) in &sources {
        if !matches!(
            asset_server.load_state(scene.0.id()),
            LoadState::Failed(_)
        ) {
            continue;
        }

        warn!(
            "Walkable model '{}' failed to load; installing fallback surface",
            model.id
        );
        commands.entity(root).insert(SurfaceBuilt);
        commands.insert_resource(fallback_surface());
        spawn_placeholder_ground(&mut commands, &mut meshes, &mut materials);
    }
}

fn fallback_surface() -> NavmeshSurface {
    NavmeshSurface::horizontal_quad(Vec2::ZERO, FALLBACK_HALF_EXTENT, 0.0)
}

/// A flat slab and a ring of pillars, so the fallback world is not a void.
fn spawn_placeholder_ground(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let floor_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.5, 0.5, 0.5),
        perceptual_roughness: 0.8,
        ..default()
    });
    let pillar_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.8, 0.8, 0.8),
        perceptual_roughness: 0.7,
        ..default()
    });

    let side = FALLBACK_HALF_EXTENT * 2.0;
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(side, 1.0, side))),
        MeshMaterial3d(floor_material),
        Transform::from_xyz(0.0, -0.5, 0.0),
    ));

    let pillar = meshes.add(Cuboid::new(2.0, 5.0, 2.0));
    for x in [-15.0, -5.0, 5.0, 15.0] {
        for z in [-15.0, 15.0] {
            commands.spawn((
                Mesh3d(pillar.clone()),
                MeshMaterial3d(pillar_material.clone()),
                Transform::from_xyz(x, 2.5, z),
            ));
        }
    }
}
