//! Anchor lookup.

use roomview_scene::{NodeId, SceneGraph};

/// Result of looking up an anchor by name.
///
/// Absence is a normal outcome: anchor catalogs cover every variant of the
/// room asset and any given file only carries some of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Found(NodeId),
    NotFound,
}

impl Anchor {
    pub fn node(self) -> Option<NodeId> {
        match self {
            Anchor::Found(id) => Some(id),
            Anchor::NotFound => None,
        }
    }

    pub fn is_found(self) -> bool {
        matches!(self, Anchor::Found(_))
    }
}

/// Find the first node named `name` in a pre-order walk under `root`.
pub fn resolve(graph: &SceneGraph, root: NodeId, name: &str) -> Anchor {
    match graph.find_by_name(root, name) {
        Some(id) => Anchor::Found(id),
        None => Anchor::NotFound,
    }
}

/// Resolve every name, keeping catalog order.
pub fn resolve_all<'a, S: AsRef<str>>(
    graph: &SceneGraph,
    root: NodeId,
    names: &'a [S],
) -> Vec<(&'a str, Anchor)> {
    names
        .iter()
        .map(|name| (name.as_ref(), resolve(graph, root, name.as_ref())))
        .collect()
}
