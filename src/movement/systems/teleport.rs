//! Movement domain: point-and-click teleport resolution.

use bevy::prelude::*;

use crate::movement::update::resolve_teleport;
use crate::movement::{Actor, LookAngles, Player, WalkInput};
use crate::navmesh::NavmeshSurface;

/// Relocate the actor to the surface point under the screen-center ray.
///
/// Only reacts to clicks the input snapshot reported, which already
/// requires the cursor to be captured. A ray that misses the surface
/// leaves the actor untouched.
pub(crate) fn resolve_teleport_clicks(
    input: Res<WalkInput>,
    look: Res<LookAngles>,
    surface: Option<Res<NavmeshSurface>>,
    mut walkers: Query<(&mut Actor, &mut Transform), With<Player>>,
) {
    if !input.teleport_pressed {
        return;
    }

    let surface = surface.as_deref();
    let direction = look.facing();

    for (mut actor, mut transform) in &mut walkers {
        let Some(target) = resolve_teleport(surface, actor.eye(), direction) else {
            continue;
        };
        debug!("Teleporting to {:?}", target);
        actor.position = target;
        actor.vertical_velocity = 0.0;
        transform.translation = actor.position;
    }
}
