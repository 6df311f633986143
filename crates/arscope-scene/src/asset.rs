//! Asynchronous asset loading seam.
//!
//! Placeable visuals come from an external loader (glTF or otherwise).
//! Loading is fire-and-forget: the requester hands over a completion
//! callback and returns immediately; the callback typically posts a
//! "splice this node into the scene" task onto the owning view's frame
//! queue so the scene keeps its single writer.

use std::fmt;

use arscope_core::Result;

use crate::node::Node;

/// Opaque reference to a loadable asset (a URL or path, as far as this
/// crate is concerned).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRef(String);

impl AssetRef {
    /// Creates a reference.
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// The underlying reference string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Completion callback for one load request. Receives the instantiated
/// node tree or an [`arscope_core::ArScopeError::AssetLoadFailed`].
pub type AssetCallback = Box<dyn FnOnce(Result<Node>) + Send + 'static>;

/// External asset-loading collaborator.
///
/// Implementations may complete the callback from any thread; requesters
/// are expected to marshal the result back onto their frame thread.
pub trait AssetLoader {
    /// Requests an asset. Must not block on the load itself.
    fn load(&self, reference: &AssetRef, done: AssetCallback);
}

/// Loader that builds nodes synchronously from a closure.
///
/// Useful in tests and for procedurally generated placeholder assets; the
/// callback runs before `load` returns.
pub struct ImmediateLoader<F>
where
    F: Fn(&AssetRef) -> Result<Node>,
{
    build: F,
}

impl<F> ImmediateLoader<F>
where
    F: Fn(&AssetRef) -> Result<Node>,
{
    /// Creates a loader from a node-building closure.
    pub fn new(build: F) -> Self {
        Self { build }
    }
}

impl<F> AssetLoader for ImmediateLoader<F>
where
    F: Fn(&AssetRef) -> Result<Node>,
{
    fn load(&self, reference: &AssetRef, done: AssetCallback) {
        log::debug!("building asset '{reference}' immediately");
        done((self.build)(reference));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Geometry, Material};
    use arscope_core::ArScopeError;
    use glam::Vec3;
    use std::sync::mpsc;

    fn cube(_r: &AssetRef) -> Result<Node> {
        Ok(Node::mesh(
            Geometry::Cube { size: 1.0 },
            Material::Basic {
                color: Vec3::ONE,
                opacity: 1.0,
                double_sided: false,
            },
        ))
    }

    #[test]
    fn test_immediate_loader_completes_synchronously() {
        let loader = ImmediateLoader::new(cube);
        let (tx, rx) = mpsc::channel();
        loader.load(
            &AssetRef::new("placeholder.glb"),
            Box::new(move |res| tx.send(res.is_ok()).unwrap()),
        );
        // The callback ran before load returned.
        assert_eq!(rx.try_recv(), Ok(true));
    }

    #[test]
    fn test_load_failure_flows_through_callback() {
        let loader = ImmediateLoader::new(|r: &AssetRef| {
            Err(ArScopeError::AssetLoadFailed {
                reference: r.to_string(),
                reason: "404".into(),
            })
        });
        let (tx, rx) = mpsc::channel();
        loader.load(
            &AssetRef::new("missing.glb"),
            Box::new(move |res| tx.send(res).unwrap()),
        );
        assert!(matches!(
            rx.try_recv(),
            Ok(Err(ArScopeError::AssetLoadFailed { .. }))
        ));
    }
}
