//! Debug domain: dev overlay and navmesh visibility toggle.
//!
//! Compiled behind the `dev-tools` feature (on by default).

use bevy::prelude::*;

use crate::movement::{Actor, Player};
use crate::navmesh::NavmeshSurface;
use crate::scene::WalkableSource;

/// Resource tracking debug overlay state.
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub overlay_visible: bool,
}

/// Marker for the overlay text node.
#[derive(Component, Debug)]
struct DebugOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (toggle_overlay, update_overlay, toggle_navmesh_visibility),
        );
    }
}

/// Toggle the overlay with F1 or backtick.
fn toggle_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<DebugState>,
    existing: Query<Entity, With<DebugOverlay>>,
) {
    let toggle = keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote);
    if !toggle {
        return;
    }

    state.overlay_visible = !state.overlay_visible;
    if state.overlay_visible {
        spawn_overlay(&mut commands);
    } else {
        for entity in &existing {
            commands.entity(entity).despawn();
        }
    }
}

fn update_overlay(
    state: Res<DebugState>,
    surface: Option<Res<NavmeshSurface>>,
    walkers: Query<&Actor, With<Player>>,
    mut overlay: Query<&mut Text, With<DebugOverlay>>,
) {
    if !state.overlay_visible {
        return;
    }

    let (Some(actor), Ok(mut text)) = (walkers.iter().next(), overlay.single_mut()) else {
        return;
    };

    let surface_line = match &surface {
        Some(surface) => format!("{} triangles", surface.triangle_count()),
        None => "absent".to_string(),
    };
    **text = format!(
        "Pos: ({:.2}, {:.2}, {:.2})\nVertical velocity: {:.3}\nGrounded: {}\nSurface: {}",
        actor.position.x,
        actor.position.y,
        actor.position.z,
        actor.vertical_velocity,
        actor.grounded,
        surface_line
    );
}

/// T shows/hides the navmesh model.
fn toggle_navmesh_visibility(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut roots: Query<&mut Visibility, With<WalkableSource>>,
) {
    if !keyboard.just_pressed(KeyCode::KeyT) {
        return;
    }

    for mut visibility in &mut roots {
        *visibility = match *visibility {
            Visibility::Hidden => Visibility::Visible,
            _ => Visibility::Hidden,
        };
    }
}

fn spawn_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugOverlay,
        Text::new("..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
