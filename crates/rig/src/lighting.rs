//! Scene-wide lights that do not depend on any anchor.

use glam::Vec3;
use roomview_scene::{
    AmbientLight, DirectionalLight, Light, NodeId, NodeKind, SceneGraph, SceneNode,
};

pub const AMBIENT_INTENSITY: f32 = 0.8;
pub const KEY_INTENSITY: f32 = 0.2;
pub const FILL_INTENSITY: f32 = 0.2;

/// Ids of the base lights.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BaseLights {
    pub ambient: NodeId,
    pub key: NodeId,
    pub fill: NodeId,
}

/// Attach ambient, key and fill lights under `parent`.
pub fn base_lighting(graph: &mut SceneGraph, parent: NodeId) -> BaseLights {
    let ambient = graph.add_child(
        parent,
        SceneNode::new("ambient_light").with_kind(NodeKind::Light(Light::Ambient(AmbientLight {
            color: Vec3::ONE,
            intensity: AMBIENT_INTENSITY,
        }))),
    );

    let mut directional = |name: &str, intensity: f32| {
        graph.add_child(
            parent,
            SceneNode::new(name).with_kind(NodeKind::Light(Light::Directional(
                DirectionalLight {
                    intensity,
                    ..Default::default()
                },
            ))),
        )
    };
    let key = directional("key_light", KEY_INTENSITY);
    let fill = directional("fill_light", FILL_INTENSITY);

    tracing::debug!("Base lighting attached");
    BaseLights { ambient, key, fill }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_lighting() {
        let mut graph = SceneGraph::new("scene");
        let root = graph.root();
        let lights = base_lighting(&mut graph, root);

        let intensity = |id| graph.get(id).and_then(|n| n.light()).map(|l| l.intensity());
        assert_eq!(intensity(lights.ambient), Some(0.8));
        assert_eq!(intensity(lights.key), Some(0.2));
        assert_eq!(intensity(lights.fill), Some(0.2));
        assert_eq!(graph.get(root).map(|n| n.children().len()), Some(3));
    }
}
