//! Tracked camera view with pose-anchored placement and an optional map.

use std::cell::RefCell;
use std::rc::Rc;

use arscope_core::{AnchorSet, NodeId, Pose, Result, TrackingStateController, ViewOptions};
use arscope_scene::{Camera, Scene};

use crate::mirror::SceneMirror;
use crate::placement::PlacementEngine;
use crate::renderer::{FrameScheduler, Renderer};
use crate::views::{add_base_lights, SimpleMap};

/// Variant that stamps fixed markers at the camera pose of a user action
/// and optionally mirrors the whole world state into a [`SimpleMap`].
pub struct SimpleView {
    scene: Scene,
    camera: Camera,
    controller: TrackingStateController,
    renderer: Box<dyn Renderer>,
    engine: PlacementEngine,
    anchors: AnchorSet,
    mirror: Option<SceneMirror>,
    torn_down: bool,
}

impl SimpleView {
    /// Creates the view; with `map` given, a mirror link is attached and
    /// the map receives a frustum helper for this view's camera.
    #[must_use]
    pub fn new(
        renderer: Box<dyn Renderer>,
        width: f32,
        height: f32,
        map: Option<Rc<RefCell<SimpleMap>>>,
        options: &ViewOptions,
    ) -> Self {
        let mut scene = Scene::new();
        add_base_lights(&mut scene);

        let camera = Camera::new(
            options.cam_fov_degrees,
            width / height,
            options.cam_near,
            options.cam_far,
        );
        let mirror = map.map(|m| SceneMirror::new(m, &camera, options.frustum_focal));
        log::info!("simple view created ({width}x{height})");

        Self {
            scene,
            camera,
            controller: TrackingStateController::new(),
            renderer,
            engine: PlacementEngine::new(options.marker_opacity, options.default_scale),
            anchors: AnchorSet::new(),
            mirror,
            torn_down: false,
        }
    }

    /// Applies a tracking pose to the camera, re-shows anchored objects,
    /// and follows up on the mirrored frustum helper.
    pub fn update_camera_pose(&mut self, p: &Pose) -> Result<()> {
        self.camera.set_pose(p)?;
        self.controller.on_pose_received();
        self.set_anchored_visible(true);
        if let Some(mirror) = &self.mirror {
            mirror.refresh_frustum(&self.camera);
        }
        Ok(())
    }

    /// Tracking was lost: hide anchored objects until the next pose.
    pub fn lost_camera(&mut self) {
        self.controller.on_tracking_lost();
        self.set_anchored_visible(false);
    }

    /// Drives the map's own camera from a pose, when a map is attached.
    pub fn update_map_camera(&self, p: &Pose) {
        if let Some(mirror) = &self.mirror {
            mirror.update_secondary_camera(p);
        }
    }

    /// Stamps a fixed marker at the given pose; with a mirror link, a
    /// structural copy lands in the map at the same transform.
    ///
    /// Without a `scale` the configured default scale applies. A marker
    /// created while tracking is lost starts hidden, like every other
    /// anchored object, until the next pose arrives.
    pub fn create_object_with_pose(&mut self, p: &Pose, scale: Option<f32>) -> Result<NodeId> {
        self.engine.create_at_pose(
            p,
            scale,
            self.controller.is_tracking(),
            &mut self.scene,
            &mut self.anchors,
            self.mirror.as_mut(),
        )
    }

    /// Removes every placed object from this scene and the map. Idempotent.
    pub fn reset(&mut self) {
        self.engine
            .reset(&mut self.scene, &mut self.anchors, self.mirror.as_mut());
    }

    /// Renders one frame.
    pub fn frame(&mut self) {
        let visible = self.controller.is_tracking();
        self.engine
            .pump(&mut self.scene, &mut self.anchors, self.mirror.as_mut(), visible);
        self.renderer.render(&self.scene, &self.camera);
    }

    /// Runs the render loop until the scheduler stops or the view is torn
    /// down.
    pub fn run(&mut self, scheduler: &mut dyn FrameScheduler) {
        while !self.torn_down && scheduler.next_frame() {
            self.frame();
        }
    }

    /// Stops the render loop on its next iteration.
    pub fn tear_down(&mut self) {
        self.torn_down = true;
    }

    /// Whether the view has been torn down.
    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Whether the view currently has tracking.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.controller.is_tracking()
    }

    /// The placed-object index.
    #[must_use]
    pub fn anchors(&self) -> &AnchorSet {
        &self.anchors
    }

    /// The view's scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The tracked camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The mirror link, when a map is attached.
    #[must_use]
    pub fn mirror(&self) -> Option<&SceneMirror> {
        self.mirror.as_ref()
    }

    fn set_anchored_visible(&mut self, visible: bool) {
        for id in self.anchors.iter() {
            if let Some(node) = self.scene.get_mut(id) {
                node.visible = visible;
            }
        }
    }
}
