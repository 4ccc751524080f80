//! Movement domain: first-person locomotion plugin wiring and exports.

mod bootstrap;
mod components;
mod resources;
mod systems;
pub mod update;


pub use components::{Actor, Player, PlayerBody, WalkCamera};
pub use resources::{LookAngles, WalkInput};

use bevy::prelude::*;

use crate::navmesh::NavmeshSurface;
use crate::movement::bootstrap::{place_on_surface_ready, spawn_player};
use crate::movement::systems::{
    accumulate_look, advance_walkers, resolve_teleport_clicks, sample_input, sync_camera_pitch,
    update_cursor_grab,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WalkInput>()
            .init_resource::<LookAngles>()
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                place_on_surface_ready
                    .run_if(resource_added::<NavmeshSurface>)
                    .before(sample_input),
            )
            // The frame driver: fixed order, one pass per rendered frame.
            .add_systems(
                Update,
                (
                    sample_input,
                    update_cursor_grab,
                    accumulate_look,
                    advance_walkers,
                    resolve_teleport_clicks,
                    sync_camera_pitch,
                )
                    .chain(),
            );
    }
}
