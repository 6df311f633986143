//! Passive top-down overview renderer.

use glam::Vec3;

use arscope_core::{NodeId, Pose, ViewOptions};
use arscope_scene::{Camera, Light, Node, Scene};

use crate::renderer::Renderer;

/// Overview map of the tracked world.
///
/// Passive: it never interprets poses itself. Objects arrive through the
/// mirror link (or [`SimpleMap::add_object`] directly), and the camera is a
/// free top-down view driven by raw pose components, deliberately bypassing
/// the pose adapter.
pub struct SimpleMap {
    scene: Scene,
    camera: Camera,
    renderer: Box<dyn Renderer>,
    /// Clear color handed to the render engine.
    pub background: Vec3,
}

impl SimpleMap {
    /// Creates a map with its own scene and ambient lighting.
    #[must_use]
    pub fn new(width: f32, height: f32, renderer: Box<dyn Renderer>, options: &ViewOptions) -> Self {
        let mut scene = Scene::new();
        scene.add(Node::light(Light::Ambient {
            color: Vec3::splat(0.25),
        }));

        let camera = Camera::new(
            options.map_fov_degrees,
            width / height,
            options.map_near,
            options.map_far,
        );
        log::info!("map view created ({width}x{height})");

        Self {
            scene,
            camera,
            renderer,
            background: options.map_background,
        }
    }

    /// Inserts an object into the map scene.
    pub fn add_object(&mut self, node: Node) -> NodeId {
        self.scene.add(node)
    }

    /// Removes an object from the map scene.
    pub fn remove_object(&mut self, id: NodeId) -> Option<Node> {
        self.scene.remove(id)
    }

    /// Sets the map camera directly from the pose's raw components.
    pub fn update_camera(&mut self, p: &Pose) {
        self.camera.set_pose_raw(p);
    }

    /// Renders one frame.
    pub fn render(&mut self) {
        self.renderer.render(&self.scene, &self.camera);
    }

    /// The map scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable access for the mirror link.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// The map camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::NullRenderer;
    use arscope_scene::{Geometry, Material};
    use glam::Quat;

    fn map() -> SimpleMap {
        SimpleMap::new(
            256.0,
            256.0,
            Box::new(NullRenderer::new()),
            &ViewOptions::default(),
        )
    }

    #[test]
    fn test_add_remove_object() {
        let mut map = map();
        let before = map.scene().len();
        let id = map.add_object(Node::mesh(
            Geometry::Cube { size: 1.0 },
            Material::Normal { flat_shading: true },
        ));
        assert_eq!(map.scene().len(), before + 1);
        assert!(map.remove_object(id).is_some());
        assert_eq!(map.scene().len(), before);
    }

    #[test]
    fn test_update_camera_uses_raw_components() {
        let mut map = map();
        let p = Pose::from_components([3.0, 4.0, 5.0], [0.0, 0.0, 0.0, 1.0]);
        map.update_camera(&p);
        assert_eq!(map.camera().position, glam::Vec3::new(3.0, 4.0, 5.0));
        assert_eq!(map.camera().orientation, Quat::IDENTITY);
    }
}
