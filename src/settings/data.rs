//! Settings domain: deserializable tuning and scene manifest definitions.

use bevy::prelude::*;
use serde::Deserialize;

/// Locomotion constants.
///
/// Speeds and accelerations are in world units *per frame*: the update is
/// deliberately frame-coupled, with no fixed-timestep decoupling, and the
/// numbers are tuned by feel rather than as SI units.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MotionTuning {
    pub base_speed: f32,
    pub sprint_multiplier: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    /// Fixed start height for walkability probes; must clear all terrain.
    pub probe_start_height: f32,
    /// Offset above the actor for the vertical snap probe, so the ray
    /// still originates above the feet mid-fall.
    pub probe_clearance: f32,
    /// Below this height a fall is considered unrecoverable and the actor
    /// is re-placed at `fall_reset_point`.
    pub fall_reset_y: f32,
    pub fall_reset_point: [f32; 3],
    pub spawn_point: [f32; 3],
    pub eye_height: f32,
    pub radius: f32,
    pub mouse_sensitivity: f32,
    /// Maximum look pitch in radians, symmetric around level.
    pub pitch_limit: f32,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            base_speed: 0.1,
            sprint_multiplier: 2.0,
            gravity: 0.01,
            jump_impulse: 0.25,
            probe_start_height: 100.0,
            probe_clearance: 100.0,
            fall_reset_y: -50.0,
            fall_reset_point: [0.0, 10.0, 0.0],
            spawn_point: [0.0, 10.0, 18.0],
            eye_height: 3.1,
            radius: 0.5,
            mouse_sensitivity: 0.002,
            pitch_limit: std::f32::consts::FRAC_PI_2,
        }
    }
}

impl MotionTuning {
    pub fn fall_reset(&self) -> Vec3 {
        Vec3::from_array(self.fall_reset_point)
    }

    pub fn spawn(&self) -> Vec3 {
        Vec3::from_array(self.spawn_point)
    }
}

/// One glTF model to place in the scene.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelDef {
    pub id: String,
    /// Asset path relative to the assets root, e.g. `models/temple.glb`.
    pub path: String,
    #[serde(default)]
    pub translation: [f32; 3],
    #[serde(default = "default_scale")]
    pub scale: f32,
    /// This model's triangles become the walkable surface.
    #[serde(default)]
    pub walkable: bool,
    /// Spawn invisible (the navmesh is data, not set dressing).
    #[serde(default)]
    pub hidden: bool,
    /// Animate this model's meshes with the wind sway.
    #[serde(default)]
    pub sway: bool,
}

fn default_scale() -> f32 {
    1.0
}

/// Wind sway applied to `sway` models.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindTuning {
    /// Base sway amplitude in radians.
    pub strength: f32,
    /// Oscillation speed multiplier.
    pub speed: f32,
    /// Amplitude of the irregular secondary motion.
    pub chaos: f32,
    /// Hard clamp on the total deflection angle.
    pub max_angle: f32,
}

impl Default for WindTuning {
    fn default() -> Self {
        Self {
            strength: 0.1,
            speed: 1.5,
            chaos: 0.2,
            max_angle: 0.15,
        }
    }
}

/// Background music source and starting volume.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MusicTuning {
    pub path: String,
    /// Linear volume in `[0, 1]`.
    pub volume: f32,
}

impl Default for MusicTuning {
    fn default() -> Self {
        Self {
            path: "audio/innerpeace.ogg".to_string(),
            volume: 0.5,
        }
    }
}

/// Models to spawn at startup, in manifest order.
#[derive(Resource, Debug, Clone)]
pub struct SceneManifest {
    pub models: Vec<ModelDef>,
}

/// Seed for deterministic scene dressing (wind phases).
#[derive(Resource, Debug, Clone, Copy)]
pub struct SceneSeed {
    pub value: u64,
}

/// Root of `assets/data/walkthrough.ron`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WalkthroughSettings {
    pub motion: MotionTuning,
    pub wind: WindTuning,
    pub music: MusicTuning,
    pub models: Vec<ModelDef>,
    /// Fixed seed for reproducible dressing; random when omitted.
    pub seed: Option<u64>,
}

impl Default for WalkthroughSettings {
    fn default() -> Self {
        Self {
            motion: MotionTuning::default(),
            wind: WindTuning::default(),
            music: MusicTuning::default(),
            models: default_models(),
            seed: None,
        }
    }
}

/// The default scene: a temple garden on a terraced terrain.
fn default_models() -> Vec<ModelDef> {
    let plain = |id: &str, path: &str| ModelDef {
        id: id.to_string(),
        path: path.to_string(),
        translation: [0.0, 0.0, 0.0],
        scale: 1.0,
        walkable: false,
        hidden: false,
        sway: false,
    };

    let mut models = vec![
        plain("terrain", "models/terrain.glb"),
        plain("navmesh", "models/navmesh.glb"),
        plain("stairs", "models/stairs.glb"),
        plain("temple", "models/temple.glb"),
        plain("flowers", "models/flowers.glb"),
        plain("rocks", "models/rocksmushrooms.glb"),
    ];
    models[1].walkable = true;
    models[1].hidden = true;
    models[4].sway = true;
    models
}
