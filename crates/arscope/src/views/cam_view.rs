//! Tracked camera view with a single static virtual object.

use std::f32::consts::FRAC_PI_2;
use std::sync::mpsc::{channel, Receiver};

use glam::{Quat, Vec3};

use arscope_core::{NodeId, Pose, Result, TrackingStateController, ViewOptions};
use arscope_scene::{AssetLoader, AssetRef, Camera, Light, Node, Scene};

use crate::renderer::{FrameScheduler, Renderer};
use crate::views::add_base_lights;

/// Simplest variant: the camera is re-posed every frame, while one asset
/// loaded at construction stays at its authored offset and merely appears
/// or disappears with tracking. The asset is a fixed virtual object seen
/// through the moving camera, not a tracked node.
pub struct CamView {
    scene: Scene,
    camera: Camera,
    controller: TrackingStateController,
    renderer: Box<dyn Renderer>,
    splice_rx: Receiver<Node>,
    object: Option<NodeId>,
    torn_down: bool,
}

impl CamView {
    /// Creates the view and requests its static asset fire-and-forget.
    ///
    /// The asset appears at `offset` with a -90 degree X rotation and
    /// uniform `scale`, hidden until tracking starts.
    #[must_use]
    pub fn new(
        renderer: Box<dyn Renderer>,
        loader: &dyn AssetLoader,
        asset: &AssetRef,
        width: f32,
        height: f32,
        offset: Vec3,
        scale: f32,
        options: &ViewOptions,
    ) -> Self {
        let mut scene = Scene::new();
        add_base_lights(&mut scene);
        let mut directional = Node::light(Light::Directional {
            color: Vec3::ONE,
            intensity: 1.0,
        });
        directional.position = Vec3::new(5.0, 10.0, 7.5);
        scene.add(directional);
        let mut spot = Node::light(Light::Spot { color: Vec3::ONE });
        spot.position = Vec3::new(10.0, 10.0, 10.0);
        scene.add(spot);

        let camera = Camera::new(
            options.cam_fov_degrees,
            width / height,
            options.cam_near,
            options.cam_far,
        );

        let (tx, splice_rx) = channel();
        loader.load(
            asset,
            Box::new(move |res| match res {
                Ok(mut node) => {
                    node.set_uniform_scale(scale);
                    node.position = offset;
                    node.orientation = Quat::from_rotation_x(-FRAC_PI_2);
                    node.visible = false;
                    let _ = tx.send(node);
                }
                Err(e) => log::warn!("static asset load failed: {e}"),
            }),
        );
        log::info!("camera view created ({width}x{height})");

        Self {
            scene,
            camera,
            controller: TrackingStateController::new(),
            renderer,
            splice_rx,
            object: None,
            torn_down: false,
        }
    }

    /// Applies a tracking pose to the camera and shows the object.
    ///
    /// On a malformed pose the error propagates and neither the camera nor
    /// the tracking state changes.
    pub fn update_camera_pose(&mut self, p: &Pose) -> Result<()> {
        self.camera.set_pose(p)?;
        self.controller.on_pose_received();
        if let Some(id) = self.object {
            if let Some(node) = self.scene.get_mut(id) {
                node.visible = true;
            }
        }
        Ok(())
    }

    /// Tracking was lost: hide the object until the next pose.
    pub fn lost_camera(&mut self) {
        self.controller.on_tracking_lost();
        if let Some(id) = self.object {
            if let Some(node) = self.scene.get_mut(id) {
                node.visible = false;
            }
        }
    }

    /// Splices a finished asset load and renders one frame.
    pub fn frame(&mut self) {
        let loaded: Vec<Node> = self.splice_rx.try_iter().collect();
        for mut node in loaded {
            node.visible = self.controller.is_tracking();
            self.object = Some(self.scene.add(node));
        }
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

    /// Handle of the static object once its load has been spliced in.
    #[must_use]
    pub fn object(&self) -> Option<NodeId> {
        self.object
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
}
