//! Scene model for arscope-rs.
//!
//! This crate describes what a view renders without rendering it: owned
//! [`Node`] trees with explicit subtree copies, a perspective [`Camera`]
//! that can be driven by tracking poses, [`Ray`] construction and
//! anchor-surface intersection for placement, the camera-frustum helper
//! wireframe, and the asynchronous [`AssetLoader`] seam. Drawing is the job
//! of an external render engine consuming these descriptions.

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod asset;
pub mod camera;
pub mod frustum;
pub mod node;
pub mod ray;
pub mod scene;

pub use asset::{AssetCallback, AssetLoader, AssetRef, ImmediateLoader};
pub use camera::{screen_to_ndc, Camera};
pub use frustum::frustum_helper;
pub use node::{Geometry, Light, Material, Node, NodeKind};
pub use ray::{AnchorSurface, Ray};
pub use scene::Scene;
