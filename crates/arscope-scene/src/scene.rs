//! Scene container with single-writer ownership.

use arscope_core::NodeId;

use crate::node::Node;

/// A tree of root nodes exclusively owned by one view.
///
/// All mutation happens on the view's frame thread; the mirror link copies
/// nodes across scenes instead of sharing them, so no locking is needed.
#[derive(Debug, Default)]
pub struct Scene {
    roots: Vec<Node>,
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a root node, returning its handle.
    pub fn add(&mut self, node: Node) -> NodeId {
        let id = node.id();
        self.roots.push(node);
        id
    }

    /// Removes the node with the given handle from anywhere in the tree.
    pub fn remove(&mut self, id: NodeId) -> Option<Node> {
        fn remove_from(nodes: &mut Vec<Node>, id: NodeId) -> Option<Node> {
            if let Some(idx) = nodes.iter().position(|n| n.id() == id) {
                return Some(nodes.remove(idx));
            }
            for node in nodes.iter_mut() {
                if let Some(found) = remove_from(&mut node.children, id) {
                    return Some(found);
                }
            }
            None
        }
        remove_from(&mut self.roots, id)
    }

    /// Finds a node anywhere in the tree.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        fn find(nodes: &[Node], id: NodeId) -> Option<&Node> {
            for node in nodes {
                if node.id() == id {
                    return Some(node);
                }
                if let Some(found) = find(&node.children, id) {
                    return Some(found);
                }
            }
            None
        }
        find(&self.roots, id)
    }

    /// Finds a node anywhere in the tree, mutably.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        fn find(nodes: &mut [Node], id: NodeId) -> Option<&mut Node> {
            for node in nodes {
                if node.id() == id {
                    return Some(node);
                }
                if let Some(found) = find(&mut node.children, id) {
                    return Some(found);
                }
            }
            None
        }
        find(&mut self.roots, id)
    }

    /// Whether a node with this handle is in the tree.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Sets visibility on every root node.
    pub fn set_all_visible(&mut self, visible: bool) {
        for node in &mut self.roots {
            node.visible = visible;
        }
    }

    /// Iterates over the root nodes.
    pub fn roots(&self) -> impl Iterator<Item = &Node> {
        self.roots.iter()
    }

    /// Number of root nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// True when the scene has no root nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}
