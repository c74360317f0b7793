//! Arena-backed scene graph.
//!
//! Nodes live in a flat `Vec` and refer to each other by [`NodeId`]. Each
//! node exclusively owns its children; nodes are only ever added, so ids
//! stay valid for the lifetime of the graph and dropping the graph tears
//! down every node and everything attached to it.

use glam::{Mat4, Vec3};

use crate::light::Light;
use crate::transform::Transform;

/// Index of a node inside a [`SceneGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Bounds of this box after an affine transform (all eight corners).
    pub fn transformed(&self, matrix: &Mat4) -> Aabb {
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for i in 0..8 {
            let corner = Vec3::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            );
            let p = matrix.transform_point3(corner);
            min = min.min(p);
            max = max.max(p);
        }
        Aabb { min, max }
    }
}

/// Geometry used to make a light visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProxyShape {
    /// Flat disk in the XY plane facing +Z
    Disk { radius: f32, segments: u32 },
    /// Rectangle in the XY plane facing +Z
    Plane { width: f32, height: f32 },
}

/// Self-lit material for proxy geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmissiveMaterial {
    pub color: Vec3,
    pub emissive: Vec3,
    pub emissive_intensity: f32,
    pub roughness: f32,
    pub metalness: f32,
    pub double_sided: bool,
}

/// A non-emitting mesh that stands in for a light's visible surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProxyMesh {
    pub shape: ProxyShape,
    pub material: EmissiveMaterial,
}

/// Wireframe outline of an area light, for development only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AreaLightHelper {
    /// The area light being outlined
    pub light: NodeId,
    pub color: Vec3,
}

/// What a node carries besides its transform.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum NodeKind {
    /// Plain grouping or anchor node
    #[default]
    Empty,
    Light(Light),
    Mesh(ProxyMesh),
    Helper(AreaLightHelper),
}

/// A node in the scene graph.
#[derive(Clone, Debug, Default)]
pub struct SceneNode {
    /// Name; not guaranteed to be unique
    pub name: String,
    pub transform: Transform,
    pub kind: NodeKind,
    /// Local-space bounds of any geometry carried by this node
    pub bounds: Option<Aabb>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl SceneNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_kind(mut self, kind: NodeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_bounds(mut self, bounds: Aabb) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn light(&self) -> Option<&Light> {
        match &self.kind {
            NodeKind::Light(light) => Some(light),
            _ => None,
        }
    }
}

/// A tree of [`SceneNode`]s with a single root.
#[derive(Clone, Debug)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
}

impl SceneGraph {
    /// Create a graph containing only a root node.
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            nodes: vec![SceneNode::new(root_name)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Total node count, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id.0)
    }

    /// Attach `node` as the last child of `parent` and return its id.
    ///
    /// # Panics
    /// Panics if `parent` does not belong to this graph.
    pub fn add_child(&mut self, parent: NodeId, mut node: SceneNode) -> NodeId {
        assert!(parent.0 < self.nodes.len(), "parent {parent:?} not in graph");
        let id = NodeId(self.nodes.len());
        node.parent = Some(parent);
        node.children.clear();
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Set the local transform of a node. Unknown ids are ignored.
    pub fn set_transform(&mut self, id: NodeId, transform: Transform) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.transform = transform;
        }
    }

    /// Iterate a subtree in pre-order (node before children, children in
    /// insertion order).
    pub fn descendants(&self, root: NodeId) -> Descendants<'_> {
        let stack = if root.0 < self.nodes.len() {
            vec![root]
        } else {
            Vec::new()
        };
        Descendants { graph: self, stack }
    }

    /// First node named `name` in a pre-order walk of the subtree at `root`.
    pub fn find_by_name(&self, root: NodeId, name: &str) -> Option<NodeId> {
        self.descendants(root)
            .find(|&id| self.nodes[id.0].name == name)
    }

    /// World matrix of a node: its local matrix composed with every ancestor's.
    pub fn world_matrix(&self, id: NodeId) -> Mat4 {
        let mut matrix = Mat4::IDENTITY;
        let mut current = self.nodes.get(id.0);
        while let Some(node) = current {
            matrix = node.transform.local_matrix() * matrix;
            current = node.parent.and_then(|p| self.nodes.get(p.0));
        }
        matrix
    }

    pub fn world_position(&self, id: NodeId) -> Vec3 {
        self.world_matrix(id).transform_point3(Vec3::ZERO)
    }

    /// World-space bounds of all bounded nodes under `root`, if any.
    pub fn world_bounds(&self, root: NodeId) -> Option<Aabb> {
        self.descendants(root)
            .filter_map(|id| {
                self.nodes[id.0]
                    .bounds
                    .map(|b| b.transformed(&self.world_matrix(id)))
            })
            .reduce(|acc, b| acc.union(&b))
    }
}

/// Pre-order subtree iterator returned by [`SceneGraph::descendants`].
pub struct Descendants<'a> {
    graph: &'a SceneGraph,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        let children = &self.graph.nodes[id.0].children;
        self.stack.extend(children.iter().rev().copied());
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-5;

    fn approx_eq_vec3(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    fn at(name: &str, x: f32, y: f32, z: f32) -> SceneNode {
        SceneNode::new(name).with_transform(Transform::new().with_position(Vec3::new(x, y, z)))
    }

    #[test]
    fn test_new_graph_has_root_only() {
        let graph = SceneGraph::new("room");
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.get(graph.root()).map(|n| n.name.as_str()), Some("room"));
        assert!(graph.get(graph.root()).and_then(|n| n.parent()).is_none());
    }

    #[test]
    fn test_add_child_links_parent_and_children() {
        let mut graph = SceneGraph::new("room");
        let root = graph.root();
        let a = graph.add_child(root, SceneNode::new("a"));
        let b = graph.add_child(a, SceneNode::new("b"));

        assert_eq!(graph.get(root).map(|n| n.children().to_vec()), Some(vec![a]));
        assert_eq!(graph.get(a).map(|n| n.children().to_vec()), Some(vec![b]));
        assert_eq!(graph.get(b).and_then(|n| n.parent()), Some(a));
    }

    #[test]
    fn test_find_by_name_preorder_first_match() {
        let mut graph = SceneGraph::new("room");
        let root = graph.root();
        let left = graph.add_child(root, SceneNode::new("left"));
        let deep_dup = graph.add_child(left, SceneNode::new("dup"));
        let _shallow_dup = graph.add_child(root, SceneNode::new("dup"));

        // Pre-order visits left's subtree before root's second child
        assert_eq!(graph.find_by_name(root, "dup"), Some(deep_dup));
    }

    #[test]
    fn test_find_by_name_scoped_to_subtree() {
        let mut graph = SceneGraph::new("room");
        let root = graph.root();
        let left = graph.add_child(root, SceneNode::new("left"));
        let right = graph.add_child(root, SceneNode::new("right"));
        let target = graph.add_child(right, SceneNode::new("target"));

        assert_eq!(graph.find_by_name(left, "target"), None);
        assert_eq!(graph.find_by_name(right, "target"), Some(target));
        assert_eq!(graph.find_by_name(root, "missing"), None);
    }

    #[test]
    fn test_find_by_name_includes_subtree_root() {
        let graph = SceneGraph::new("room");
        assert_eq!(graph.find_by_name(graph.root(), "room"), Some(graph.root()));
    }

    #[test]
    fn test_descendants_preorder() {
        let mut graph = SceneGraph::new("r");
        let root = graph.root();
        let a = graph.add_child(root, SceneNode::new("a"));
        let a1 = graph.add_child(a, SceneNode::new("a1"));
        let b = graph.add_child(root, SceneNode::new("b"));

        let order: Vec<NodeId> = graph.descendants(root).collect();
        assert_eq!(order, vec![root, a, a1, b]);
    }

    #[test]
    fn test_world_matrix_nested_hierarchy() {
        let mut graph = SceneGraph::new("r");
        let root = graph.root();
        let grandparent = graph.add_child(root, at("gp", 100.0, 0.0, 0.0));
        let parent = graph.add_child(grandparent, at("p", 10.0, 0.0, 0.0));
        let child = graph.add_child(parent, at("c", 1.0, 0.0, 0.0));

        let world_pos = graph.world_position(child);
        assert!(
            approx_eq_vec3(world_pos, Vec3::new(111.0, 0.0, 0.0)),
            "Expected (111, 0, 0), got {:?}",
            world_pos
        );
    }

    #[test]
    fn test_world_matrix_with_parent_rotation() {
        let mut graph = SceneGraph::new("r");
        let root = graph.root();
        let parent = graph.add_child(
            root,
            SceneNode::new("p")
                .with_transform(Transform::new().with_rotation(Quat::from_rotation_y(FRAC_PI_2))),
        );
        let child = graph.add_child(parent, at("c", 1.0, 0.0, 0.0));

        let world_pos = graph.world_position(child);
        assert!(
            approx_eq_vec3(world_pos, Vec3::new(0.0, 0.0, -1.0)),
            "Expected (0, 0, -1), got {:?}",
            world_pos
        );
    }

    #[test]
    fn test_world_bounds_union_in_world_space() {
        let mut graph = SceneGraph::new("r");
        let root = graph.root();
        let unit = Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        graph.add_child(root, at("floor", 0.0, -2.0, 0.0).with_bounds(unit));
        graph.add_child(root, at("ceiling", 0.0, 4.0, 0.0).with_bounds(unit));

        let bounds = graph.world_bounds(root).expect("bounded nodes");
        assert!(approx_eq_vec3(bounds.min, Vec3::new(-1.0, -3.0, -1.0)));
        assert!(approx_eq_vec3(bounds.max, Vec3::new(1.0, 5.0, 1.0)));
        assert!(approx_eq_vec3(bounds.center(), Vec3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_world_bounds_none_without_geometry() {
        let mut graph = SceneGraph::new("r");
        let root = graph.root();
        graph.add_child(root, SceneNode::new("empty"));
        assert!(graph.world_bounds(root).is_none());
    }
}
