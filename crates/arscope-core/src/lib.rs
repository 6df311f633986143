//! Core abstractions for arscope-rs.
//!
//! This crate provides the fundamental types used throughout arscope-rs:
//! - [`Pose`] samples from the visual tracking engine and the adapter that
//!   converts them into renderer-native transforms
//! - [`TrackingStateController`] for the per-view TRACKING/LOST state machine
//! - [`AnchorSet`], the explicit index of placed (anchored) scene objects
//! - Error types and per-view configuration options

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod anchor;
pub mod error;
pub mod id;
pub mod options;
pub mod pose;
pub mod tracking;

pub use anchor::AnchorSet;
pub use error::{ArScopeError, Result};
pub use id::NodeId;
pub use options::ViewOptions;
pub use pose::Pose;
pub use tracking::{TrackingState, TrackingStateController};

// Re-export glam types for convenience
pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
