//! Configuration options for arscope views.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Per-view tunables.
///
/// Defaults match the reference viewer: a 75 degree tracked camera with a
/// 0.1..1000 depth range, a 60 degree IMU camera with a much closer near
/// plane, a 50 degree free map camera, and a large faint ground disc for
/// placement ray-casts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewOptions {
    /// Vertical field of view of the tracked camera, degrees.
    pub cam_fov_degrees: f32,
    /// Near clipping plane of the tracked camera.
    pub cam_near: f32,
    /// Far clipping plane of the tracked camera.
    pub cam_far: f32,

    /// Vertical field of view of the IMU-variant camera, degrees.
    pub imu_fov_degrees: f32,
    /// Near clipping plane of the IMU-variant camera.
    pub imu_near: f32,
    /// Far clipping plane of the IMU-variant camera.
    pub imu_far: f32,

    /// Vertical field of view of the overview map camera, degrees.
    pub map_fov_degrees: f32,
    /// Near clipping plane of the map camera.
    pub map_near: f32,
    /// Far clipping plane of the map camera.
    pub map_far: f32,
    /// Map clear color.
    pub map_background: Vec3,

    /// Radius of the ground anchor disc.
    pub ground_radius: f32,
    /// Tessellation of the ground disc.
    pub ground_segments: u32,
    /// Opacity of the ground disc.
    pub ground_opacity: f32,

    /// Opacity of the pose-anchored marker plane.
    pub marker_opacity: f32,
    /// Uniform scale applied to placed objects when the caller gives none.
    pub default_scale: f32,
    /// Distance from the frustum-helper apex to its image frame.
    pub frustum_focal: f32,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            cam_fov_degrees: 75.0,
            cam_near: 0.1,
            cam_far: 1000.0,
            imu_fov_degrees: 60.0,
            imu_near: 0.01,
            imu_far: 1000.0,
            map_fov_degrees: 50.0,
            map_near: 0.01,
            map_far: 10000.0,
            map_background: Vec3::ONE,
            ground_radius: 1000.0,
            ground_segments: 64,
            ground_opacity: 0.1,
            marker_opacity: 0.1,
            default_scale: 1.0,
            frustum_focal: 0.25,
        }
    }
}

impl ViewOptions {
    /// Serializes the options to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads options back from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads options from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// Writes options to a JSON file.
    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<()> {
        Ok(std::fs::write(path, self.to_json()?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_viewer() {
        let opts = ViewOptions::default();
        assert_eq!(opts.cam_fov_degrees, 75.0);
        assert_eq!(opts.imu_fov_degrees, 60.0);
        assert_eq!(opts.map_fov_degrees, 50.0);
        assert_eq!(opts.ground_radius, 1000.0);
        assert_eq!(opts.ground_segments, 64);
        assert_eq!(opts.default_scale, 1.0);
    }

    #[test]
    fn test_json_round_trip() {
        let mut opts = ViewOptions::default();
        opts.ground_radius = 42.0;
        opts.marker_opacity = 0.5;

        let json = opts.to_json().unwrap();
        let back = ViewOptions::from_json(&json).unwrap();
        assert_eq!(back.ground_radius, 42.0);
        assert_eq!(back.marker_opacity, 0.5);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(ViewOptions::from_json("not json").is_err());
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join("arscope_options_round_trip.json");
        let mut opts = ViewOptions::default();
        opts.default_scale = 2.5;

        opts.write_file(&path).unwrap();
        let back = ViewOptions::from_file(&path).unwrap();
        assert_eq!(back.default_scale, 2.5);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_from_file_reports_missing_file() {
        let err = ViewOptions::from_file("/nonexistent/arscope.json").unwrap_err();
        assert!(matches!(err, crate::ArScopeError::Io(_)));
    }
}
