mod audio;
#[cfg(feature = "dev-tools")]
mod debug;
mod movement;
mod navmesh;
mod scene;
mod settings;

use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Temenos".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins((
        settings::SettingsPlugin,
        scene::ScenePlugin,
        movement::MovementPlugin,
        audio::MusicPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
