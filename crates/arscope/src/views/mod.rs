//! View variants: thin compositions of pose application, tracking state,
//! placement, and mirroring, each owning its scene and render loop.

mod cam_imu_view;
mod cam_view;
mod simple_map;
mod simple_view;

pub use cam_imu_view::CamImuView;
pub use cam_view::CamView;
pub use simple_map::SimpleMap;
pub use simple_view::SimpleView;

use glam::Vec3;

use arscope_scene::{Light, Node, Scene};

/// Ambient + hemisphere pair shared by every tracked view.
pub(crate) fn add_base_lights(scene: &mut Scene) {
    scene.add(Node::light(Light::Ambient {
        color: Vec3::splat(0.5),
    }));
    scene.add(Node::light(Light::Hemisphere {
        sky: Vec3::splat(0.25),
        ground: Vec3::splat(0.94),
        intensity: 1.0,
    }));
}
