//! Rays and the placement anchor surface.

use glam::{Vec2, Vec3};

use crate::camera::Camera;

/// Intersections closer than this along the ray are rejected.
const T_MIN: f32 = 1e-4;

/// A ray in world space.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Creates a ray; the direction is normalized.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Casts a ray from the camera through a normalized-device-coordinate
    /// point on its image plane.
    #[must_use]
    pub fn through_ndc(camera: &Camera, ndc: Vec2) -> Self {
        let inv = camera.view_projection().inverse();
        let far_point = inv.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        Self::new(camera.position, far_point - camera.position)
    }

    /// Intersects with an infinite plane through `point` with `normal`.
    ///
    /// Returns the nearest hit in front of the origin, from either side of
    /// the plane (the anchor disc is double-sided).
    #[must_use]
    pub fn intersect_plane(&self, point: Vec3, normal: Vec3) -> Option<Vec3> {
        let denom = normal.dot(self.direction);
        if denom.abs() < f32::EPSILON {
            return None; // parallel
        }
        let t = normal.dot(point - self.origin) / denom;
        if t <= T_MIN {
            return None; // behind the origin
        }
        Some(self.origin + self.direction * t)
    }

    /// Intersects with a disc of the given radius.
    #[must_use]
    pub fn intersect_disc(&self, center: Vec3, normal: Vec3, radius: f32) -> Option<Vec3> {
        let hit = self.intersect_plane(center, normal)?;
        if hit.distance_squared(center) > radius * radius {
            return None;
        }
        Some(hit)
    }
}

/// The surface placement ray-casts are tested against.
///
/// Kept as pure geometry beside the scene, so placement is deterministic
/// and independent of scene clutter: rays never hit previously placed
/// objects, only this surface.
#[derive(Debug, Clone, Copy)]
pub struct AnchorSurface {
    pub center: Vec3,
    pub normal: Vec3,
    pub radius: f32,
}

impl AnchorSurface {
    /// A horizontal ground disc.
    #[must_use]
    pub fn ground(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            normal: Vec3::Y,
            radius,
        }
    }

    /// Nearest intersection point, if the ray hits the surface.
    #[must_use]
    pub fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        ray.intersect_disc(self.center, self.normal, self.radius)
    }
}
