//! Mirror link between a primary tracked scene and an overview map.

use std::cell::RefCell;
use std::rc::Rc;

use arscope_core::{AnchorSet, NodeId, Pose};
use arscope_scene::{frustum_helper, Camera, Node};

use crate::views::SimpleMap;

/// Frustum helper color (matches the widget default of the render engine).
const FRUSTUM_COLOR: glam::Vec3 = glam::Vec3::ZERO;

/// Keeps a secondary (map) scene consistent with a primary tracked view.
///
/// On construction it plants a frustum-helper wireframe for the primary
/// camera into the map scene; afterwards every placement in the primary
/// view is copied — by value, never by shared reference — into the map.
/// Removal is issued to both scenes independently, so mutating one copy can
/// never affect the other.
pub struct SceneMirror {
    map: Rc<RefCell<SimpleMap>>,
    frustum_id: NodeId,
    mirrored: AnchorSet,
}

impl SceneMirror {
    /// Attaches a mirror to the map and registers the frustum helper for
    /// the given primary camera.
    #[must_use]
    pub fn new(map: Rc<RefCell<SimpleMap>>, camera: &Camera, focal: f32) -> Self {
        let mut helper = frustum_helper(camera.fov_degrees, camera.aspect, focal, FRUSTUM_COLOR);
        helper.position = camera.position;
        helper.orientation = camera.orientation;
        let frustum_id = map.borrow_mut().add_object(helper);
        log::info!("mirror link attached");

        Self {
            map,
            frustum_id,
            mirrored: AnchorSet::new(),
        }
    }

    /// Copies a placed object into the map scene, returning the copy's
    /// handle. The copy is a fresh subtree with its own node ids.
    pub fn mirror_insert(&mut self, node: &Node) -> NodeId {
        let id = self.map.borrow_mut().add_object(node.clone_subtree());
        self.mirrored.insert(id);
        id
    }

    /// Removes the mirror's copies from the map scene. The frustum helper
    /// stays; primary-scene removal is the caller's job.
    pub fn mirror_reset(&mut self) {
        let mut map = self.map.borrow_mut();
        for id in self.mirrored.drain() {
            map.remove_object(id);
        }
    }

    /// Re-poses the frustum helper from the primary camera.
    pub fn refresh_frustum(&self, camera: &Camera) {
        let mut map = self.map.borrow_mut();
        if let Some(helper) = map.scene_mut().get_mut(self.frustum_id) {
            helper.position = camera.position;
            helper.orientation = camera.orientation;
        }
    }

    /// Drives the map's own camera from the primary pose (distinct from the
    /// frustum helper, which is geometry in the map scene).
    pub fn update_secondary_camera(&self, p: &Pose) {
        self.map.borrow_mut().update_camera(p);
    }

    /// Handle of the frustum helper inside the map scene.
    #[must_use]
    pub fn frustum_id(&self) -> NodeId {
        self.frustum_id
    }

    /// Number of mirrored object copies currently in the map.
    #[must_use]
    pub fn mirrored_count(&self) -> usize {
        self.mirrored.len()
    }
}
