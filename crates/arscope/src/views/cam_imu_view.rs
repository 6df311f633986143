//! Tracked camera view with a ground anchor surface and ray-cast placement.

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};

use arscope_core::{AnchorSet, NodeId, Pose, Result, TrackingStateController, ViewOptions};
use arscope_scene::{
    AnchorSurface, AssetLoader, AssetRef, Camera, Geometry, Material, Node, Scene,
};

use crate::placement::{Placement, PlacementEngine};
use crate::renderer::{FrameScheduler, Renderer};
use crate::views::add_base_lights;

/// Variant for pose streams fused with IMU data: the camera follows every
/// pose, and a large faint ground disc recenters underneath it (x/z follow
/// the camera, y stays fixed) so placement ray-casts remain meaningful as
/// the user moves.
pub struct CamImuView {
    scene: Scene,
    camera: Camera,
    controller: TrackingStateController,
    renderer: Box<dyn Renderer>,
    engine: PlacementEngine,
    anchors: AnchorSet,
    ground_id: NodeId,
    ground_radius: f32,
    width: f32,
    height: f32,
    torn_down: bool,
}

impl CamImuView {
    /// Creates the view; `placeable` is the asset instantiated by
    /// [`CamImuView::add_object_at`].
    #[must_use]
    pub fn new(
        renderer: Box<dyn Renderer>,
        loader: Box<dyn AssetLoader>,
        placeable: AssetRef,
        width: f32,
        height: f32,
        options: &ViewOptions,
    ) -> Self {
        let mut scene = Scene::new();
        add_base_lights(&mut scene);

        let mut ground = Node::mesh(
            Geometry::Disc {
                radius: options.ground_radius,
                segments: options.ground_segments,
            },
            Material::Basic {
                color: Vec3::ONE,
                opacity: options.ground_opacity,
                double_sided: true,
            },
        );
        // Disc geometry lies in the XY plane; rotate it flat at y = 0.
        ground.orientation = Quat::from_rotation_x(FRAC_PI_2);
        ground.position.y = 0.0;
        let ground_id = scene.add(ground);

        let camera = Camera::new(
            options.imu_fov_degrees,
            width / height,
            options.imu_near,
            options.imu_far,
        );
        log::info!("camera+imu view created ({width}x{height})");

        Self {
            scene,
            camera,
            controller: TrackingStateController::new(),
            renderer,
            engine: PlacementEngine::with_loader(
                loader,
                placeable,
                options.marker_opacity,
                options.default_scale,
            ),
            anchors: AnchorSet::new(),
            ground_id,
            ground_radius: options.ground_radius,
            width,
            height,
            torn_down: false,
        }
    }

    /// Applies a tracking pose: drives the camera, drags the ground under
    /// it, and re-shows everything hidden by a loss.
    pub fn update_camera_pose(&mut self, p: &Pose) -> Result<()> {
        self.camera.set_pose(p)?;

        if let Some(ground) = self.scene.get_mut(self.ground_id) {
            ground.position.x = self.camera.position.x;
            ground.position.z = self.camera.position.z;
        }

        self.controller.on_pose_received();
        self.scene.set_all_visible(true);
        Ok(())
    }

    /// Tracking was lost: hide the whole scene until the next pose.
    pub fn lost_camera(&mut self) {
        self.controller.on_tracking_lost();
        self.scene.set_all_visible(false);
    }

    /// Ground-plane placement at a screen coordinate.
    ///
    /// Ray-casts against the anchor disc only; a miss returns
    /// [`Placement::NoIntersection`] and changes nothing. Without a `scale`
    /// the configured default scale applies.
    pub fn add_object_at(&mut self, x: f32, y: f32, scale: Option<f32>) -> Placement {
        let surface = AnchorSurface::ground(
            Vec3::new(self.camera.position.x, 0.0, self.camera.position.z),
            self.ground_radius,
        );
        self.engine.place_at(
            x,
            y,
            scale,
            (self.width, self.height),
            &self.camera,
            &surface,
        )
    }

    /// Removes every placed object. Idempotent.
    pub fn reset(&mut self) {
        self.engine.reset(&mut self.scene, &mut self.anchors, None);
    }

    /// Splices finished placements and renders one frame.
    pub fn frame(&mut self) {
        let visible = self.controller.is_tracking();
        self.engine
            .pump(&mut self.scene, &mut self.anchors, None, visible);
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

    /// Handle of the ground disc.
    #[must_use]
    pub fn ground_id(&self) -> NodeId {
        self.ground_id
    }
}
