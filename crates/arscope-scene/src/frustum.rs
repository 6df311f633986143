//! Camera-frustum helper wireframe.

use glam::Vec3;

use crate::node::{Geometry, Material, Node};

/// Builds the wireframe helper that visualizes a camera's frustum inside an
/// overview scene.
///
/// The geometry lives in camera-local space (apex at the origin, looking
/// down -Z), so following the tracked camera is a transform write on the
/// returned node, not a geometry rebuild. The shape is an apex joined to a
/// focal-distance image frame, plus an orientation triangle above the frame
/// marking "up".
#[must_use]
pub fn frustum_helper(fov_degrees: f32, aspect: f32, focal: f32, color: Vec3) -> Node {
    let half_height = focal * (fov_degrees.to_radians() / 2.0).tan();
    let half_width = aspect * half_height;

    let frame_center = Vec3::new(0.0, 0.0, -focal);
    let frame_up = Vec3::Y * half_height;
    let frame_right = Vec3::X * half_width;

    let upper_left = frame_center + frame_up - frame_right;
    let upper_right = frame_center + frame_up + frame_right;
    let lower_left = frame_center - frame_up - frame_right;
    let lower_right = frame_center - frame_up + frame_right;

    // Orientation triangle above the frame
    let tri_left = frame_center + frame_up * 1.2 - frame_right * 0.7;
    let tri_right = frame_center + frame_up * 1.2 + frame_right * 0.7;
    let tri_top = frame_center + frame_up * 2.0;

    // Points: 0=apex, 1-4=corners, 5-7=triangle
    let points = vec![
        Vec3::ZERO,  // 0
        upper_left,  // 1
        upper_right, // 2
        lower_left,  // 3
        lower_right, // 4
        tri_left,    // 5
        tri_right,   // 6
        tri_top,     // 7
    ];

    let edges = vec![
        // From apex to corners
        [0, 1],
        [0, 2],
        [0, 3],
        [0, 4],
        // Image frame rectangle
        [1, 2],
        [2, 4],
        [4, 3],
        [3, 1],
        // Orientation triangle
        [5, 6],
        [6, 7],
        [7, 5],
    ];

    Node::mesh(
        Geometry::Lines { points, edges },
        Material::Basic {
            color,
            opacity: 1.0,
            double_sided: false,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;

    #[test]
    fn test_wireframe_shape() {
        let node = frustum_helper(60.0, 16.0 / 9.0, 0.25, Vec3::ZERO);
        let NodeKind::Mesh {
            geometry: Geometry::Lines { points, edges },
            ..
        } = &node.kind
        else {
            panic!("frustum helper is a line mesh");
        };

        assert_eq!(points.len(), 8);
        assert_eq!(edges.len(), 11);
        assert_eq!(points[0], Vec3::ZERO); // apex at the camera origin
        for p in &points[1..5] {
            assert!((p.z + 0.25).abs() < 1e-6); // frame at focal distance
        }
    }

    #[test]
    fn test_frame_respects_fov_and_aspect() {
        let node = frustum_helper(90.0, 2.0, 1.0, Vec3::ZERO);
        let NodeKind::Mesh {
            geometry: Geometry::Lines { points, .. },
            ..
        } = &node.kind
        else {
            panic!("frustum helper is a line mesh");
        };

        // tan(45 deg) = 1 -> half height 1, half width 2
        let upper_right = points[2];
        assert!((upper_right.y - 1.0).abs() < 1e-5);
        assert!((upper_right.x - 2.0).abs() < 1e-5);
    }
}
