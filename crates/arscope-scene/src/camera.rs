//! Perspective camera driven by tracking poses.

use glam::{Mat4, Quat, Vec2, Vec3};

use arscope_core::pose;
use arscope_core::{Pose, Result};

/// A perspective camera.
///
/// The orientation is stored as a quaternion, so the yaw-pitch-roll (YXZ)
/// application order the tracked views require only matters when converting
/// to Euler angles for display; pose application itself never goes through
/// Euler angles and cannot pick up gimbal-related roll coupling.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Position in world space.
    pub position: Vec3,
    /// Orientation in world space.
    pub orientation: Quat,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
}

impl Camera {
    /// Creates a camera at the origin looking down -Z.
    #[must_use]
    pub fn new(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            fov_degrees,
            aspect,
            near,
            far,
        }
    }

    /// Sets the aspect ratio.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Drives the camera from a tracking pose through the pose adapter.
    ///
    /// On a malformed pose the camera keeps its prior transform.
    pub fn set_pose(&mut self, p: &Pose) -> Result<()> {
        pose::apply(p, &mut self.orientation, &mut self.position)
    }

    /// Copies the pose's raw components without adapter remapping.
    ///
    /// Used by the overview map, whose camera is a free top-down view
    /// rather than a tracked node.
    pub fn set_pose_raw(&mut self, p: &Pose) {
        self.orientation = p.orientation;
        self.position = p.position;
    }

    /// The camera's forward direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Returns the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position).inverse()
    }

    /// Returns the projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    /// Returns the combined view-projection matrix.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Converts screen coordinates (origin top-left, pixels) to normalized
/// device coordinates (origin center, +y up).
#[must_use]
pub fn screen_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new((x / width) * 2.0 - 1.0, -(y / height) * 2.0 + 1.0)
}
