//! Settings domain: RON-loaded tuning, scene manifest, and seed.

mod data;
mod loader;


pub use data::{
    ModelDef, MotionTuning, MusicTuning, SceneManifest, SceneSeed, WalkthroughSettings,
    WindTuning,
};
pub use loader::{SettingsLoadError, load_settings, parse_settings};

use bevy::prelude::*;
use rand::Rng;
use std::path::Path;

const SETTINGS_PATH: &str = "assets/data/walkthrough.ron";

pub struct SettingsPlugin;

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        let settings = match load_settings(Path::new(SETTINGS_PATH)) {
            Ok(settings) => {
                info!(
                    "Loaded settings: {} models, seed {:?}",
                    settings.models.len(),
                    settings.seed
                );
                settings
            }
            Err(e) => {
                warn!("{}; using built-in defaults", e);
                WalkthroughSettings::default()
            }
        };

        let seed = settings.seed.unwrap_or_else(|| rand::rng().random());

        app.insert_resource(settings.motion)
            .insert_resource(settings.wind)
            .insert_resource(settings.music)
            .insert_resource(SceneManifest {
                models: settings.models,
            })
            .insert_resource(SceneSeed { value: seed });
    }
}
