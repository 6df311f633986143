//! Scene node handles.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque handle identifying one scene node.
///
/// Ids are allocated from a process-wide counter and never reused, so a
/// handle held across scene mutations either resolves to the same node or
/// to nothing. Copying a subtree always assigns fresh ids; two scenes never
/// contain nodes with a shared id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Allocates a fresh id.
    pub fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}
