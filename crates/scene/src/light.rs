//! Light primitives that can be attached to scene nodes.
//!
//! Lights are positioned by the node that carries them. Lights that aim
//! (spot, directional, rect area) reference a separate target node, the
//! way ceiling fixtures are authored: the target sits a short distance in
//! front of the fixture inside the same anchor.

use glam::Vec3;

use crate::graph::NodeId;

/// Convert a `0xRRGGBB` color to linear-ish RGB in `[0, 1]`.
pub fn color_from_hex(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

/// Uniform light applied to everything.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: Vec3,
    pub intensity: f32,
}

/// Shadow map parameters for a directional light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowConfig {
    pub map_width: u32,
    pub map_height: u32,
    pub near: f32,
    pub far: f32,
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub bias: f32,
}

/// A directional light (sun-like), optionally casting shadows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub color: Vec3,
    pub intensity: f32,
    /// `Some` when the light casts shadows
    pub shadow: Option<ShadowConfig>,
    /// Node the light shines toward; the world origin when unset
    pub target: Option<NodeId>,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            intensity: 1.0,
            shadow: None,
            target: None,
        }
    }
}

/// A spot light (cone-shaped).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotLight {
    pub color: Vec3,
    pub intensity: f32,
    /// Maximum range; zero means unlimited
    pub range: f32,
    /// Cone half-angle in radians
    pub angle: f32,
    /// Fraction of the cone that fades at the edge, `[0, 1]`
    pub penumbra: f32,
    /// Distance falloff exponent
    pub decay: f32,
    pub target: Option<NodeId>,
}

/// A rectangular area light emitting from one face of a `width × height` plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectAreaLight {
    pub color: Vec3,
    pub intensity: f32,
    pub width: f32,
    pub height: f32,
    pub target: Option<NodeId>,
}

/// Any light a node can carry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Light {
    Ambient(AmbientLight),
    Directional(DirectionalLight),
    Spot(SpotLight),
    RectArea(RectAreaLight),
}

impl Light {
    /// The aim target, for lights that have one.
    pub fn target(&self) -> Option<NodeId> {
        match self {
            Light::Ambient(_) => None,
            Light::Directional(l) => l.target,
            Light::Spot(l) => l.target,
            Light::RectArea(l) => l.target,
        }
    }

    pub fn intensity(&self) -> f32 {
        match self {
            Light::Ambient(l) => l.intensity,
            Light::Directional(l) => l.intensity,
            Light::Spot(l) => l.intensity,
            Light::RectArea(l) => l.intensity,
        }
    }

    pub fn casts_shadow(&self) -> bool {
        matches!(self, Light::Directional(DirectionalLight { shadow: Some(_), .. }))
    }
}
