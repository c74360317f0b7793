//! Fixture synthesis.
//!
//! A fixture is a light plus the nodes that make it visible and aimable.
//! Every part is attached as a direct child of the anchor, so the fixture
//! inherits the anchor's placement and lives exactly as long as it does.

use std::f32::consts::{FRAC_PI_4, PI};

use glam::Vec3;
use roomview_core::FixtureConfig;
use roomview_scene::{
    AreaLightHelper, DirectionalLight, EmissiveMaterial, Light, NodeId, NodeKind, ProxyMesh,
    ProxyShape, RectAreaLight, SceneGraph, SceneNode, ShadowConfig, SpotLight, Transform,
    color_from_hex,
};

/// Spot photometrics, shared by every spot fixture.
pub mod spot {
    use super::*;

    pub const COLOR: u32 = 0xffffff;
    pub const INTENSITY: f32 = 5.0;
    pub const RANGE: f32 = 80.0;
    pub const ANGLE: f32 = FRAC_PI_4;
    pub const PENUMBRA: f32 = 0.5;
    pub const DECAY: f32 = 1.5;

    /// Aim point in anchor space: one unit along the mount's backward axis.
    pub const TARGET: Vec3 = Vec3::new(0.0, 0.0, -1.0);

    pub const LENS_RADIUS: f32 = 0.01;
    pub const LENS_SEGMENTS: u32 = 24;
    pub const LENS_EMISSIVE_INTENSITY: f32 = 2.5;
    /// Lifted off the mount surface to avoid z-fighting.
    pub const LENS_OFFSET: Vec3 = Vec3::new(0.0, 0.0, 0.001);
}

/// LED strip proxy and shadow parameters.
pub mod strip {
    use super::*;

    pub const PROXY_EMISSIVE_INTENSITY: f32 = 2.0;
    pub const HELPER_COLOR: u32 = 0xff0000;

    pub const SHADOW_COLOR: u32 = 0xffffff;
    pub const SHADOW_INTENSITY: f32 = 0.5;
    pub const SHADOW_TARGET: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const SHADOW: ShadowConfig = ShadowConfig {
        map_width: 1024,
        map_height: 1024,
        near: 0.1,
        far: 10.0,
        left: -5.0,
        right: 5.0,
        top: 5.0,
        bottom: -5.0,
        bias: -0.001,
    };
}

/// Kind of fixture to build at an anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FixtureClass {
    Spot,
    LedStrip,
}

impl std::fmt::Display for FixtureClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FixtureClass::Spot => f.write_str("spot"),
            FixtureClass::LedStrip => f.write_str("LED strip"),
        }
    }
}

/// Ids of every node a synthesized fixture attached to its anchor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fixture {
    pub class: FixtureClass,
    pub anchor: NodeId,
    /// The emitting light
    pub light: NodeId,
    /// Emissive meshes that make the light visible
    pub proxies: Vec<NodeId>,
    /// Aim target of the emitting light
    pub target: Option<NodeId>,
    pub shadow_caster: Option<NodeId>,
    pub shadow_target: Option<NodeId>,
    pub helper: Option<NodeId>,
}

impl Fixture {
    /// All attached nodes, light first.
    pub fn parts(&self) -> Vec<NodeId> {
        let mut parts = vec![self.light];
        parts.extend(&self.proxies);
        parts.extend(self.target);
        parts.extend(self.shadow_caster);
        parts.extend(self.shadow_target);
        parts.extend(self.helper);
        parts
    }
}

/// Build a fixture of `class` and attach it under `anchor`.
///
/// Spot fixtures ignore `config`.
///
/// # Panics
/// Panics if `anchor` does not belong to `graph`.
pub fn synthesize(
    graph: &mut SceneGraph,
    anchor: NodeId,
    class: FixtureClass,
    config: &FixtureConfig,
) -> Fixture {
    match class {
        FixtureClass::Spot => synthesize_spot(graph, anchor),
        FixtureClass::LedStrip => synthesize_strip(graph, anchor, config),
    }
}

fn emissive(emissive_intensity: f32) -> EmissiveMaterial {
    EmissiveMaterial {
        color: Vec3::ONE,
        emissive: Vec3::ONE,
        emissive_intensity,
        roughness: 1.0,
        metalness: 0.0,
        double_sided: true,
    }
}

fn synthesize_spot(graph: &mut SceneGraph, anchor: NodeId) -> Fixture {
    let target = graph.add_child(
        anchor,
        SceneNode::new("spot_target").with_transform(Transform::new().with_position(spot::TARGET)),
    );

    let light = SpotLight {
        color: color_from_hex(spot::COLOR),
        intensity: spot::INTENSITY,
        range: spot::RANGE,
        angle: spot::ANGLE,
        penumbra: spot::PENUMBRA,
        decay: spot::DECAY,
        target: Some(target),
    };
    let light = graph.add_child(
        anchor,
        SceneNode::new("spot_light").with_kind(NodeKind::Light(Light::Spot(light))),
    );

    // The disk faces +Z; a half turn about X makes it face the target.
    let lens = ProxyMesh {
        shape: ProxyShape::Disk {
            radius: spot::LENS_RADIUS,
            segments: spot::LENS_SEGMENTS,
        },
        material: EmissiveMaterial {
            roughness: 0.2,
            ..emissive(spot::LENS_EMISSIVE_INTENSITY)
        },
    };
    let lens = graph.add_child(
        anchor,
        SceneNode::new("spot_lens")
            .with_transform(
                Transform::new()
                    .with_position(spot::LENS_OFFSET)
                    .with_euler([-PI, 0.0, 0.0]),
            )
            .with_kind(NodeKind::Mesh(lens)),
    );

    Fixture {
        class: FixtureClass::Spot,
        anchor,
        light,
        proxies: vec![lens],
        target: Some(target),
        shadow_caster: None,
        shadow_target: None,
        helper: None,
    }
}

/// Placement shared by the strip's light, proxy and helper.
///
/// A configured target re-aims the placement but keeps its authored roll,
/// so the strip's long axis stays where `rotation_deg` put it.
fn strip_placement(config: &FixtureConfig) -> Transform {
    let mut transform = Transform::new();
    if let Some(position) = config.position {
        transform.position = Vec3::from(position);
    }
    if let Some(radians) = config.rotation_radians() {
        transform.set_euler(radians);
    }
    if let Some(point) = config.target {
        transform.look_at(Vec3::from(point));
    }
    transform
}

fn synthesize_strip(graph: &mut SceneGraph, anchor: NodeId, config: &FixtureConfig) -> Fixture {
    let placement = strip_placement(config);
    let (width, height) = (config.width(), config.height());

    let target = config.target.map(|point| {
        graph.add_child(
            anchor,
            SceneNode::new("strip_target")
                .with_transform(Transform::new().with_position(Vec3::from(point))),
        )
    });

    let area = RectAreaLight {
        color: color_from_hex(config.color()),
        intensity: config.intensity(),
        width,
        height,
        target,
    };
    let light = graph.add_child(
        anchor,
        SceneNode::new("strip_light")
            .with_transform(placement)
            .with_kind(NodeKind::Light(Light::RectArea(area))),
    );

    let proxy = ProxyMesh {
        shape: ProxyShape::Plane { width, height },
        material: emissive(strip::PROXY_EMISSIVE_INTENSITY),
    };
    let proxy = graph.add_child(
        anchor,
        SceneNode::new("strip_proxy")
            .with_transform(placement)
            .with_kind(NodeKind::Mesh(proxy)),
    );

    let helper = graph.add_child(
        anchor,
        SceneNode::new("strip_helper")
            .with_transform(placement)
            .with_kind(NodeKind::Helper(AreaLightHelper {
                light,
                color: color_from_hex(strip::HELPER_COLOR),
            })),
    );

    let shadow_position = config.shadow_position.map(Vec3::from).unwrap_or(Vec3::ZERO);
    let shadow_target = graph.add_child(
        anchor,
        SceneNode::new("strip_shadow_target")
            .with_transform(Transform::new().with_position(strip::SHADOW_TARGET)),
    );
    let shadow = DirectionalLight {
        color: color_from_hex(strip::SHADOW_COLOR),
        intensity: strip::SHADOW_INTENSITY,
        shadow: Some(strip::SHADOW),
        target: Some(shadow_target),
    };
    let shadow_caster = graph.add_child(
        anchor,
        SceneNode::new("strip_shadow")
            .with_transform(Transform::new().with_position(shadow_position))
            .with_kind(NodeKind::Light(Light::Directional(shadow))),
    );

    Fixture {
        class: FixtureClass::LedStrip,
        anchor,
        light,
        proxies: vec![proxy],
        target,
        shadow_caster: Some(shadow_caster),
        shadow_target: Some(shadow_target),
        helper: Some(helper),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn approx_eq_vec3(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    fn graph_with_anchor(name: &str) -> (SceneGraph, NodeId) {
        let mut graph = SceneGraph::new("room");
        let anchor = graph.add_child(
            graph.root(),
            SceneNode::new(name)
                .with_transform(Transform::new().with_position(Vec3::new(1.0, 2.7, -0.5))),
        );
        (graph, anchor)
    }

    fn node(graph: &SceneGraph, id: NodeId) -> &SceneNode {
        graph.get(id).expect("node in graph")
    }

    #[test]
    fn test_spot_parts_are_anchor_children() {
        let (mut graph, anchor) = graph_with_anchor("Spot_001");
        let fixture = synthesize(&mut graph, anchor, FixtureClass::Spot, &FixtureConfig::default());

        let children = node(&graph, anchor).children().to_vec();
        for part in fixture.parts() {
            assert!(children.contains(&part), "{part:?} not under anchor");
        }
        assert_eq!(children.len(), 3);
        assert!(fixture.shadow_caster.is_none());
        assert!(fixture.helper.is_none());
    }

    #[test]
    fn test_spot_uses_fixed_photometrics() {
        let (mut graph, anchor) = graph_with_anchor("Spot_001");
        let custom = FixtureConfig {
            intensity: Some(99.0),
            color: Some(0xff0000),
            ..Default::default()
        };
        let fixture = synthesize(&mut graph, anchor, FixtureClass::Spot, &custom);

        let Some(Light::Spot(light)) = node(&graph, fixture.light).light().copied() else {
            panic!("expected a spot light");
        };
        assert_eq!(light.intensity, 5.0);
        assert_eq!(light.range, 80.0);
        assert!(approx_eq(light.angle, FRAC_PI_4));
        assert_eq!(light.penumbra, 0.5);
        assert_eq!(light.decay, 1.5);
        assert_eq!(light.color, Vec3::ONE);
        assert_eq!(light.target, fixture.target);
        assert_eq!(node(&graph, fixture.light).transform, Transform::IDENTITY);
    }

    #[test]
    fn test_spot_aims_backward_and_lens_faces_target() {
        let (mut graph, anchor) = graph_with_anchor("Spot_001");
        let fixture = synthesize(&mut graph, anchor, FixtureClass::Spot, &FixtureConfig::default());

        let target = fixture.target.expect("spot target");
        assert_eq!(node(&graph, target).transform.position, Vec3::new(0.0, 0.0, -1.0));

        let lens = node(&graph, fixture.proxies[0]);
        assert_eq!(lens.transform.position, Vec3::new(0.0, 0.0, 0.001));
        assert!(approx_eq_vec3(lens.transform.rotation * Vec3::Z, Vec3::NEG_Z));
        let NodeKind::Mesh(mesh) = lens.kind else {
            panic!("expected lens mesh");
        };
        assert_eq!(mesh.shape, ProxyShape::Disk { radius: 0.01, segments: 24 });
        assert_eq!(mesh.material.emissive_intensity, 2.5);
        assert!(mesh.material.double_sided);
    }

    #[test]
    fn test_strip_rotation_degrees_become_radians() {
        let (mut graph, anchor) = graph_with_anchor("ceilinglight_002");
        let config = FixtureConfig {
            position: Some([0.0, 0.0, 0.01]),
            rotation_deg: Some([0.0, 0.0, 90.0]),
            width: Some(0.01),
            height: Some(3.6),
            ..Default::default()
        };
        let fixture = synthesize(&mut graph, anchor, FixtureClass::LedStrip, &config);

        for id in [fixture.light, fixture.proxies[0], fixture.helper.expect("helper")] {
            let t = node(&graph, id).transform;
            let euler = t.euler();
            assert!(approx_eq(euler[0], 0.0));
            assert!(approx_eq(euler[1], 0.0));
            assert!(approx_eq(euler[2], FRAC_PI_2));
            assert_eq!(t.position, Vec3::new(0.0, 0.0, 0.01));
        }
    }

    #[test]
    fn test_strip_light_and_proxy_share_footprint() {
        let (mut graph, anchor) = graph_with_anchor("ceilinglight_001");
        let config = FixtureConfig {
            width: Some(0.01),
            height: Some(1.75),
            color: Some(0xffffff),
            intensity: Some(50.0),
            ..Default::default()
        };
        let fixture = synthesize(&mut graph, anchor, FixtureClass::LedStrip, &config);

        let Some(Light::RectArea(area)) = node(&graph, fixture.light).light().copied() else {
            panic!("expected an area light");
        };
        assert_eq!((area.width, area.height), (0.01, 1.75));
        assert_eq!(area.intensity, 50.0);

        let NodeKind::Mesh(mesh) = node(&graph, fixture.proxies[0]).kind else {
            panic!("expected strip proxy");
        };
        assert_eq!(mesh.shape, ProxyShape::Plane { width: 0.01, height: 1.75 });

        let NodeKind::Helper(helper) = node(&graph, fixture.helper.expect("helper")).kind else {
            panic!("expected helper");
        };
        assert_eq!(helper.light, fixture.light);
        assert_eq!(helper.color, Vec3::X);
    }

    #[test]
    fn test_strip_defaults_for_empty_config() {
        let (mut graph, anchor) = graph_with_anchor("ceilinglight_009");
        let fixture = synthesize(
            &mut graph,
            anchor,
            FixtureClass::LedStrip,
            &FixtureConfig::default(),
        );

        let Some(Light::RectArea(area)) = node(&graph, fixture.light).light().copied() else {
            panic!("expected an area light");
        };
        assert_eq!(area.width, 0.01);
        assert_eq!(area.height, 1.0);
        assert_eq!(area.intensity, 6.0);
        assert_eq!(area.target, None);
        assert!(fixture.target.is_none());
        assert_eq!(node(&graph, fixture.light).transform, Transform::IDENTITY);

        let shadow = node(&graph, fixture.shadow_caster.expect("shadow caster"));
        assert_eq!(shadow.transform.position, Vec3::ZERO);
    }

    #[test]
    fn test_strip_target_orients_area_light() {
        let (mut graph, anchor) = graph_with_anchor("ceilinglight_001");
        let config = FixtureConfig {
            target: Some([0.0, 1.0, 0.0]),
            ..Default::default()
        };
        let fixture = synthesize(&mut graph, anchor, FixtureClass::LedStrip, &config);

        let target = fixture.target.expect("strip target");
        assert_eq!(node(&graph, target).transform.position, Vec3::Y);
        assert!(node(&graph, anchor).children().contains(&target));

        let light = node(&graph, fixture.light);
        assert_eq!(light.light().and_then(|l| l.target()), Some(target));
        assert!(approx_eq_vec3(light.transform.forward(), Vec3::Y));

        let proxy = node(&graph, fixture.proxies[0]).transform;
        let helper = node(&graph, fixture.helper.expect("helper")).transform;
        for t in [proxy, helper] {
            assert!(approx_eq(t.rotation.dot(light.transform.rotation).abs(), 1.0));
            assert!(approx_eq_vec3(t.right(), light.transform.right()));
            assert!(approx_eq_vec3(t.up(), light.transform.up()));
            assert_eq!(t.position, light.transform.position);
        }
    }

    #[test]
    fn test_aimed_long_strip_keeps_authored_long_axis() {
        let (mut graph, anchor) = graph_with_anchor("ceilinglight_002");
        let config = crate::catalog::default_strip_configs()["ceilinglight_002"].clone();
        let fixture = synthesize(&mut graph, anchor, FixtureClass::LedStrip, &config);

        // Quarter turn about Z puts the plane's height (local Y) along -X
        let light = node(&graph, fixture.light).transform;
        let aim = (Vec3::Y - Vec3::new(0.0, 0.0, 0.01)).normalize();
        assert!(approx_eq_vec3(light.forward(), aim));
        assert!(approx_eq_vec3(light.up(), Vec3::NEG_X));

        for id in [fixture.proxies[0], fixture.helper.expect("helper")] {
            let t = node(&graph, id).transform;
            assert_eq!(t, light);
        }
    }

    #[test]
    fn test_strip_shadow_caster() {
        let (mut graph, anchor) = graph_with_anchor("ceilinglight_001");
        let config = FixtureConfig {
            shadow_position: Some([0.0, -0.2, 0.0]),
            ..Default::default()
        };
        let fixture = synthesize(&mut graph, anchor, FixtureClass::LedStrip, &config);

        let caster = node(&graph, fixture.shadow_caster.expect("shadow caster"));
        assert_eq!(caster.transform.position, Vec3::new(0.0, -0.2, 0.0));
        let Some(Light::Directional(light)) = caster.light().copied() else {
            panic!("expected a directional light");
        };
        assert_eq!(light.intensity, 0.5);
        assert_eq!(light.shadow, Some(strip::SHADOW));
        assert_eq!(light.target, fixture.shadow_target);

        let shadow_target = node(&graph, fixture.shadow_target.expect("shadow target"));
        assert_eq!(shadow_target.transform.position, Vec3::Y);
        assert_eq!(shadow_target.parent(), Some(anchor));
    }

    #[test]
    fn test_fixture_follows_anchor_in_world_space() {
        let (mut graph, anchor) = graph_with_anchor("Spot_001");
        let fixture = synthesize(&mut graph, anchor, FixtureClass::Spot, &FixtureConfig::default());

        let world = graph.world_position(fixture.light);
        assert!(approx_eq_vec3(world, Vec3::new(1.0, 2.7, -0.5)));
    }
}
