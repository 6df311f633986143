//! Pose samples and the pose-to-transform adapter.
//!
//! The tracking engine reports 6-DoF camera poses in its own axis
//! convention. [`apply`] converts one sample into a renderer-native rotation
//! and translation and writes it into the target node's transform sinks.

use glam::{Quat, Vec3};

use crate::error::{ArScopeError, Result};

/// Orientation norms below this are treated as degenerate.
const MIN_ORIENTATION_NORM_SQ: f32 = 1e-8;

/// One 6-DoF sample from the tracking engine.
///
/// Immutable value: the adapter consumes it, never mutates it. The
/// orientation is expected to be a unit quaternion in the tracking engine's
/// coordinate convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Camera position in tracking-space coordinates.
    pub position: Vec3,
    /// Camera orientation in tracking-space coordinates.
    pub orientation: Quat,
}

impl Pose {
    /// Creates a pose from position and orientation.
    #[must_use]
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Creates a pose from raw components as delivered by the tracking
    /// engine (position as 3 components, orientation as x/y/z/w).
    #[must_use]
    pub fn from_components(position: [f32; 3], orientation: [f32; 4]) -> Self {
        Self {
            position: Vec3::from_array(position),
            orientation: Quat::from_array(orientation),
        }
    }

    /// Checks that the sample can be converted into a transform.
    pub fn validate(&self) -> Result<()> {
        if !self.position.is_finite() {
            return Err(ArScopeError::MalformedPose {
                reason: "non-finite position component",
            });
        }
        if !self.orientation.is_finite() {
            return Err(ArScopeError::MalformedPose {
                reason: "non-finite orientation component",
            });
        }
        if self.orientation.length_squared() < MIN_ORIENTATION_NORM_SQ {
            return Err(ArScopeError::MalformedPose {
                reason: "degenerate (near-zero) orientation",
            });
        }
        Ok(())
    }
}

/// Remaps a tracking-space orientation into the renderer's convention.
///
/// The remap negates x and w, which is an involution: applying it twice
/// returns the original (unit) quaternion.
#[must_use]
pub fn remap_orientation(q: Quat) -> Quat {
    Quat::from_xyzw(-q.x, q.y, q.z, -q.w).normalize()
}

/// Remaps a tracking-space position into the renderer's convention (y and z
/// flip sign). Also an involution.
#[must_use]
pub fn remap_position(p: Vec3) -> Vec3 {
    Vec3::new(p.x, -p.y, -p.z)
}

/// Applies a pose to a target node's transform sinks.
///
/// Validates the sample, then writes the remapped rotation and translation.
/// The write is all-or-nothing: on [`ArScopeError::MalformedPose`] neither
/// sink is modified, so a caller that drops the frame keeps the target's
/// prior transform intact. Callable at the tracking engine's frame rate;
/// stateless.
pub fn apply(pose: &Pose, orientation: &mut Quat, position: &mut Vec3) -> Result<()> {
    pose.validate()?;
    *orientation = remap_orientation(pose.orientation);
    *position = remap_position(pose.position);
    Ok(())
}
