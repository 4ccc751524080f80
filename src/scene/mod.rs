//! Scene domain: model spawning, surface extraction, environment, wind.
//!
//! Everything here is glue around the asset pipeline. The locomotion core
//! never waits on it: until `build_walkable_surface` (or the fallback)
//! inserts the `NavmeshSurface` resource, the world simply has no ground.

mod environment;
mod spawn;
mod surface;
mod wind;

pub use spawn::{SceneModel, SwaySource, WalkableSource};

use bevy::prelude::*;

use crate::navmesh::NavmeshSurface;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb_u8(135, 206, 235)))
            .insert_resource(GlobalAmbientLight {
                color: Color::srgb_u8(228, 232, 255),
                brightness: 300.0,
                ..default()
            })
            .add_systems(Startup, (environment::setup_lights, spawn::spawn_models))
            .add_systems(
                Update,
                (
                    surface::build_walkable_surface,
                    surface::install_fallback_surface,
                )
                    .run_if(not(resource_exists::<NavmeshSurface>)),
            )
            .add_systems(Update, (wind::tag_sway_meshes, wind::animate_sway).chain());
    }
}
