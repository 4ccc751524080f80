//! Audio domain: looping background music with toggle and volume keys.

use bevy::audio::{PlaybackMode, Volume};
use bevy::prelude::*;

use crate::settings::MusicTuning;

#[derive(Component, Debug)]
struct Music;

/// Current linear music volume.
#[derive(Resource, Debug)]
pub struct MusicState {
    pub volume: f32,
}

const VOLUME_STEP: f32 = 0.1;

pub struct MusicPlugin;

impl Plugin for MusicPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, start_music)
            .add_systems(Update, (toggle_music, adjust_volume));
    }
}

/// Spawn the music entity paused; M starts it on demand.
fn start_music(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    tuning: Res<MusicTuning>,
) {
    commands.spawn((
        Music,
        AudioPlayer::new(asset_server.load(tuning.path.clone())),
        PlaybackSettings {
            mode: PlaybackMode::Loop,
            volume: Volume::Linear(tuning.volume),
            paused: true,
            ..default()
        },
    ));
    commands.insert_resource(MusicState {
        volume: tuning.volume,
    });

    info!("Music ready: {} (M toggles playback)", tuning.path);
}

fn toggle_music(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut sinks: Query<&mut AudioSink, With<Music>>,
) {
    if !keyboard.just_pressed(KeyCode::KeyM) {
        return;
    }
    for mut sink in &mut sinks {
        sink.toggle_playback();
        info!(
            "Music {}",
            if sink.is_paused() { "paused" } else { "playing" }
        );
    }
}

/// `-` and `=` step the volume down/up.
fn adjust_volume(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Option<ResMut<MusicState>>,
    mut sinks: Query<&mut AudioSink, With<Music>>,
) {
    let step = if keyboard.just_pressed(KeyCode::Equal) {
        VOLUME_STEP
    } else if keyboard.just_pressed(KeyCode::Minus) {
        -VOLUME_STEP
    } else {
        return;
    };

    let Some(mut state) = state else {
        return;
    };
    state.volume = (state.volume + step).clamp(0.0, 1.0);
    for mut sink in &mut sinks {
        sink.set_volume(Volume::Linear(state.volume));
    }
    info!("Music volume: {:.0}%", state.volume * 100.0);
}
