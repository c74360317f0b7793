//! Scene graph and components.
//!
//! This crate provides scene management:
//! - Arena scene graph with lookup by name
//! - Local transforms
//! - Light primitives and light proxies
//! - Camera and orbit/zoom controller

pub mod camera;
pub mod graph;
pub mod light;
pub mod transform;

pub use camera::{Camera, InteractionState, OrbitController};
pub use graph::{
    Aabb, AreaLightHelper, EmissiveMaterial, NodeId, NodeKind, ProxyMesh, ProxyShape,
    SceneGraph, SceneNode,
};
pub use light::{
    AmbientLight, DirectionalLight, Light, RectAreaLight, ShadowConfig, SpotLight, color_from_hex,
};
pub use transform::Transform;
