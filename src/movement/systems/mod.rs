//! Movement domain: system modules for the per-frame locomotion chain.

pub(crate) mod input;
pub(crate) mod movement;
pub(crate) mod teleport;

pub(crate) use input::{accumulate_look, sample_input, update_cursor_grab};
pub(crate) use movement::{advance_walkers, sync_camera_pitch};
pub(crate) use teleport::resolve_teleport_clicks;
