//! Viewer configuration.
//!
//! Everything has a default that reproduces the built-in room, so the
//! config file is optional and may be partial:
//!
//! ```toml
//! model_path = "models/room.glb"
//!
//! [controller]
//! rotation_speed = 0.02
//!
//! [rig.strips.ceilinglight_002]
//! rotation_deg = [0.0, 0.0, 90.0]
//! height = 3.6
//! intensity = 50.0
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, Result};

/// Top-level viewer configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Path to the room asset (.glb / .gltf)
    pub model_path: PathBuf,
    /// Camera projection settings
    pub camera: CameraSettings,
    /// Orbit/zoom controller tuning
    pub controller: ControllerSettings,
    /// Light rig catalogs and per-strip overrides
    pub rig: RigSettings,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("models/room.glb"),
            camera: CameraSettings::default(),
            controller: ControllerSettings::default(),
            rig: RigSettings::default(),
        }
    }
}

impl ViewerConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&text)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given and present, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::load(path),
            Some(path) => {
                tracing::warn!("Config {} not found, using defaults", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        let c = &self.controller;
        let controller_values = [c.rotation_speed, c.zoom_speed, c.max_zoom, c.initial_distance];
        if !controller_values.iter().all(|v| v.is_finite()) {
            return Err(Error::Config(
                "controller speeds, max_zoom and initial_distance must be finite".to_string(),
            ));
        }
        if !(c.min_zoom > 0.0 && c.min_zoom <= c.max_zoom) {
            return Err(Error::Config(format!(
                "zoom bounds must satisfy 0 < min_zoom <= max_zoom (got {}..{})",
                c.min_zoom, c.max_zoom
            )));
        }
        if self.camera.near <= 0.0 || self.camera.far <= self.camera.near {
            return Err(Error::Config(format!(
                "camera clip planes must satisfy 0 < near < far (got {}..{})",
                self.camera.near, self.camera.far
            )));
        }
        Ok(())
    }
}

/// Perspective camera settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Vertical field of view in degrees
    pub fov_y_deg: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_y_deg: 27.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Orbit/zoom controller tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControllerSettings {
    /// Radians of rotation per pixel of pointer travel
    pub rotation_speed: f32,
    /// Fraction of the current distance applied per wheel notch
    pub zoom_speed: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    /// Starting camera distance, clamped into the zoom bounds
    pub initial_distance: f32,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            rotation_speed: 0.01,
            zoom_speed: 0.1,
            min_zoom: 1.0,
            max_zoom: 20.0,
            initial_distance: 0.0,
        }
    }
}

/// Light rig settings.
///
/// `None` catalogs mean "use the built-in catalog". Strip entries are
/// merged over the built-in strip configs by anchor name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RigSettings {
    pub spot_anchors: Option<Vec<String>>,
    pub strip_anchors: Option<Vec<String>>,
    pub strips: HashMap<String, FixtureConfig>,
    /// Skip the scene-level ambient/key/fill lights
    pub disable_base_lighting: bool,
}

/// Configuration for one fixture instance.
///
/// Every field is optional; spot fixtures ignore all of them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FixtureConfig {
    /// Local offset from the anchor
    pub position: Option<[f32; 3]>,
    /// XYZ Euler rotation in degrees
    pub rotation_deg: Option<[f32; 3]>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    /// 0xRRGGBB
    pub color: Option<u32>,
    pub intensity: Option<f32>,
    /// Local-space point the area light aims at
    pub target: Option<[f32; 3]>,
    /// Local position of the shadow caster, anchor origin when unset
    pub shadow_position: Option<[f32; 3]>,
}

impl FixtureConfig {
    pub const DEFAULT_WIDTH: f32 = 0.01;
    pub const DEFAULT_HEIGHT: f32 = 1.0;
    pub const DEFAULT_COLOR: u32 = 0xffffff;
    pub const DEFAULT_INTENSITY: f32 = 6.0;

    pub fn width(&self) -> f32 {
        self.width.unwrap_or(Self::DEFAULT_WIDTH)
    }

    pub fn height(&self) -> f32 {
        self.height.unwrap_or(Self::DEFAULT_HEIGHT)
    }

    pub fn color(&self) -> u32 {
        self.color.unwrap_or(Self::DEFAULT_COLOR)
    }

    pub fn intensity(&self) -> f32 {
        self.intensity.unwrap_or(Self::DEFAULT_INTENSITY)
    }

    /// Rotation converted to radians, `None` when no rotation is authored.
    pub fn rotation_radians(&self) -> Option<[f32; 3]> {
        self.rotation_deg
            .map(|deg| [deg[0].to_radians(), deg[1].to_radians(), deg[2].to_radians()])
    }
}
