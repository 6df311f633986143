//! arscope: the presentation layer of a real-time AR viewer.
//!
//! An external visual tracking engine streams 6-DoF camera poses; arscope
//! turns each sample into camera and object transforms, reacts to tracking
//! loss and regain, anchors user-placed objects into the tracked frame via
//! ray intersection, and keeps an optional top-down map consistent with the
//! primary view through value copies rather than shared nodes. Rendering
//! itself is delegated to an external engine behind the [`Renderer`] trait.
//!
//! # Quick Start
//!
//! ```no_run
//! use arscope::*;
//!
//! let options = ViewOptions::default();
//! let mut view = SimpleView::new(
//!     Box::new(NullRenderer::new()),
//!     640.0,
//!     480.0,
//!     None,
//!     &options,
//! );
//!
//! // Pose samples arrive from the tracking engine:
//! let pose = Pose::from_components([0.0, 0.0, 0.0], [0.0, 0.0, 0.0, 1.0]);
//! view.update_camera_pose(&pose)?;
//! view.create_object_with_pose(&pose, Some(1.0))?;
//!
//! // The view owns its render loop:
//! view.run(&mut FrameBudget(600));
//! # Ok::<(), ArScopeError>(())
//! ```
//!
//! # View variants
//!
//! - [`CamView`] - tracked camera, one static virtual object
//! - [`CamImuView`] - tracked camera over a ground anchor disc with
//!   ray-cast placement
//! - [`SimpleView`] - tracked camera with pose-anchored markers and an
//!   optional mirror link
//! - [`SimpleMap`] - passive top-down overview fed by the mirror link

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod mirror;
pub mod placement;
pub mod renderer;
pub mod views;

// Re-export core types
pub use arscope_core::{
    pose, AnchorSet, ArScopeError, NodeId, Pose, Result, TrackingState, TrackingStateController,
    ViewOptions,
};

// Re-export the scene model
pub use arscope_scene::{
    frustum_helper, screen_to_ndc, AnchorSurface, AssetLoader, AssetRef, Camera, Geometry,
    ImmediateLoader, Light, Material, Node, NodeKind, Ray, Scene,
};

pub use mirror::SceneMirror;
pub use placement::{Placement, PlacementEngine};
pub use renderer::{FrameBudget, FrameScheduler, NullRenderer, Renderer};
pub use views::{CamImuView, CamView, SimpleMap, SimpleView};

// Re-export glam types for convenience
pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
