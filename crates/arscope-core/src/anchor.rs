//! Explicit index of anchored (placed) scene objects.

use crate::id::NodeId;

/// The set of nodes placed by the user and anchored in world space.
///
/// Maintained beside the scene rather than as metadata on scene nodes, so
/// object tracking stays decoupled from the rendering library's node
/// representation. Insertion order is preserved; removal during `reset`
/// drains in that order.
#[derive(Debug, Default)]
pub struct AnchorSet {
    ids: Vec<NodeId>,
}

impl AnchorSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a handle. Duplicate inserts are ignored.
    pub fn insert(&mut self, id: NodeId) {
        if !self.ids.contains(&id) {
            self.ids.push(id);
        }
    }

    /// Removes a handle, returning whether it was present.
    pub fn remove(&mut self, id: NodeId) -> bool {
        match self.ids.iter().position(|&i| i == id) {
            Some(idx) => {
                self.ids.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Removes and returns every handle, oldest first.
    pub fn drain(&mut self) -> Vec<NodeId> {
        std::mem::take(&mut self.ids)
    }

    /// Whether the handle is indexed.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.ids.contains(&id)
    }

    /// Iterates over indexed handles in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ids.iter().copied()
    }

    /// Number of anchored objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when nothing is anchored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove() {
        let mut set = AnchorSet::new();
        let a = NodeId::next();
        let b = NodeId::next();

        set.insert(a);
        set.insert(b);
        set.insert(a); // duplicate, ignored
        assert_eq!(set.len(), 2);
        assert!(set.contains(a));

        assert!(set.remove(a));
        assert!(!set.remove(a));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_drain_preserves_order_and_empties() {
        let mut set = AnchorSet::new();
        let a = NodeId::next();
        let b = NodeId::next();
        set.insert(a);
        set.insert(b);

        assert_eq!(set.drain(), vec![a, b]);
        assert!(set.is_empty());
        assert!(set.drain().is_empty()); // draining twice is a no-op
    }
}
