//! Movement domain: the pure per-frame locomotion rules.
//!
//! Plain functions over an `Actor` and an optional surface. The systems in
//! `systems/` are thin drivers around these, so every rule is testable
//! without spinning up an app. All speeds are per-frame units; the update
//! is frame-coupled by design.

use bevy::prelude::*;

use crate::navmesh::NavmeshSurface;
use crate::settings::MotionTuning;

use super::{Actor, WalkInput};

/// Ground probe: height of the nearest surface below `(x, start_height, z)`.
///
/// With no surface loaded yet every probe reports "no ground"; the update
/// rules already treat that as falling, so an absent navmesh degrades
/// instead of erroring.
pub fn ground_height(
    surface: Option<&NavmeshSurface>,
    x: f32,
    z: f32,
    start_height: f32,
) -> Option<f32> {
    surface.and_then(|s| s.height_below(x, z, start_height))
}

/// Desired horizontal displacement for this frame, in world x/z.
///
/// The sum of active directions is renormalized to exactly the configured
/// speed, so two perpendicular keys move no faster than one. A facing that
/// projects to ~zero (looking straight up or down at the pitch clamp)
/// yields no intent rather than a NaN direction.
pub fn compute_intent(input: &WalkInput, facing: Vec3, tuning: &MotionTuning) -> Vec2 {
    if !input.any_direction() {
        return Vec2::ZERO;
    }

    let flat = Vec2::new(facing.x, facing.z);
    if flat.length_squared() < f32::EPSILON {
        return Vec2::ZERO;
    }
    let forward = flat.normalize();
    let right = Vec2::new(-forward.y, forward.x);

    let mut intent = Vec2::ZERO;
    if input.forward {
        intent += forward;
    }
    if input.backward {
        intent -= forward;
    }
    if input.right {
        intent += right;
    }
    if input.left {
        intent -= right;
    }
    if intent == Vec2::ZERO {
        // Opposing keys cancel out.
        return Vec2::ZERO;
    }

    let speed = if input.sprint {
        tuning.base_speed * tuning.sprint_multiplier
    } else {
        tuning.base_speed
    };
    intent.normalize() * speed
}

/// Start a jump if the actor is grounded. Airborne immediately; the next
/// probe is not consulted.
pub fn try_jump(actor: &mut Actor, tuning: &MotionTuning) -> bool {
    if !actor.grounded {
        return false;
    }
    actor.vertical_velocity = tuning.jump_impulse;
    actor.grounded = false;
    true
}

/// Advance the actor by one frame: horizontal move with walkability
/// validation, then gravity, then vertical snap or fall recovery.
pub fn step_actor(
    actor: &mut Actor,
    intent: Vec2,
    surface: Option<&NavmeshSurface>,
    tuning: &MotionTuning,
) {
    // Horizontal: tentative move, rejected atomically when the destination
    // has no ground under it at all. A coarse walkable-region test, not a
    // swept collision. Also halts horizontal drift mid-fall once the actor
    // crosses the surface's edge, even deep into a fall.
    if intent != Vec2::ZERO {
        let prev_x = actor.position.x;
        let prev_z = actor.position.z;
        actor.position.x += intent.x;
        actor.position.z += intent.y;

        let destination_walkable = ground_height(
            surface,
            actor.position.x,
            actor.position.z,
            tuning.probe_start_height,
        )
        .is_some();
        if !destination_walkable {
            actor.position.x = prev_x;
            actor.position.z = prev_z;
        }
    }

    // Vertical: gravity always integrates, once per frame.
    actor.vertical_velocity -= tuning.gravity;
    actor.position.y += actor.vertical_velocity;

    // Snap probe starts well above the actor, not above the terrain, so it
    // still originates above the feet mid-fall.
    let probe_start = actor.position.y + tuning.probe_clearance;
    match ground_height(surface, actor.position.x, actor.position.z, probe_start) {
        Some(ground_y) => {
            if actor.position.y <= ground_y {
                actor.position.y = ground_y;
                actor.vertical_velocity = 0.0;
                actor.grounded = true;
            } else {
                actor.grounded = false;
            }
        }
        None => {
            actor.grounded = false;
            if actor.position.y < tuning.fall_reset_y {
                // Fell through the world; recover, don't error.
                place_actor(actor, surface, tuning.fall_reset(), tuning);
            }
        }
    }
}

/// Place the actor on the surface at `target`'s (x, z), or at `target`
/// verbatim (airborne) when no ground is found there.
///
/// Shared by scene-start placement and fall-through recovery; only the
/// target differs.
pub fn place_actor(
    actor: &mut Actor,
    surface: Option<&NavmeshSurface>,
    target: Vec3,
    tuning: &MotionTuning,
) {
    actor.vertical_velocity = 0.0;
    match ground_height(surface, target.x, target.z, tuning.probe_start_height) {
        Some(ground_y) => {
            actor.position = Vec3::new(target.x, ground_y, target.z);
            actor.grounded = true;
        }
        None => {
            actor.position = target;
            actor.grounded = false;
        }
    }
}

/// First surface point hit by a camera ray, for point-and-click teleports.
///
/// No reachability check: a disconnected surface patch is a valid target
/// by design. A miss is `None` and the caller simply drops the click.
pub fn resolve_teleport(
    surface: Option<&NavmeshSurface>,
    origin: Vec3,
    direction: Vec3,
) -> Option<Vec3> {
    surface.and_then(|s| s.cast_ray(origin, direction))
}
