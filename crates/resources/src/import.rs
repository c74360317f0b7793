//! glTF import.
//!
//! Only the node hierarchy is imported: names, local transforms and the
//! bounds of any mesh primitives. Geometry and materials stay with the
//! rendering collaborator.

use std::path::Path;

use glam::{Quat, Vec3};
use roomview_scene::{Aabb, NodeId, SceneGraph, SceneNode, Transform};

use crate::{ResourceError, ResourceResult};

/// Import the default scene (or the first one) of a glTF/GLB file.
pub fn import_gltf(path: &Path) -> ResourceResult<SceneGraph> {
    if !path.exists() {
        return Err(ResourceError::FileNotFound(path.to_path_buf()));
    }

    let gltf = gltf::Gltf::open(path).map_err(|e| ResourceError::GltfLoad {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let scene = gltf
        .default_scene()
        .or_else(|| gltf.scenes().next())
        .ok_or_else(|| ResourceError::NoScenes(path.to_path_buf()))?;

    let mut graph = SceneGraph::new(scene.name().unwrap_or("Scene"));
    let root = graph.root();
    for node in scene.nodes() {
        import_node(&mut graph, root, &node);
    }

    tracing::info!(
        "Imported {} nodes from {}",
        graph.len() - 1,
        path.display()
    );
    Ok(graph)
}

fn import_node(graph: &mut SceneGraph, parent: NodeId, node: &gltf::Node<'_>) {
    let (translation, rotation, scale) = node.transform().decomposed();
    let transform = Transform::new()
        .with_position(Vec3::from(translation))
        .with_rotation(Quat::from_array(rotation))
        .with_scale(Vec3::from(scale));

    let mut scene_node = SceneNode::new(node.name().unwrap_or_default()).with_transform(transform);
    if let Some(bounds) = mesh_bounds(node) {
        scene_node = scene_node.with_bounds(bounds);
    }

    let id = graph.add_child(parent, scene_node);
    for child in node.children() {
        import_node(graph, id, &child);
    }
}

fn mesh_bounds(node: &gltf::Node<'_>) -> Option<Aabb> {
    node.mesh()?
        .primitives()
        .map(|p| {
            let b = p.bounding_box();
            Aabb::new(Vec3::from(b.min), Vec3::from(b.max))
        })
        .reduce(|acc, b| acc.union(&b))
}

/// Shift `root` vertically so its geometry is centered on y = 0.
///
/// Returns the applied offset, or `None` when nothing under `root` has bounds.
pub fn center_vertically(graph: &mut SceneGraph, root: NodeId) -> Option<f32> {
    let bounds = graph.world_bounds(root)?;
    let node = graph.get_mut(root)?;
    let offset = -(bounds.min.y + bounds.max.y) / 2.0;
    node.transform.position.y += offset;
    tracing::debug!("Centered '{}' vertically by {:.3}", node.name, offset);
    Some(offset)
}
