//! Object placement: ground-plane ray-casts and pose-anchored markers.

use std::sync::mpsc::{channel, Receiver, Sender};

use glam::Vec3;

use arscope_core::{pose, AnchorSet, NodeId, Pose, Result};
use arscope_scene::{
    screen_to_ndc, AnchorSurface, AssetLoader, AssetRef, Camera, Geometry, Material, Node, Ray,
    Scene,
};

use crate::mirror::SceneMirror;

/// Outcome of a ground-plane placement attempt.
///
/// Missing the anchor surface is an expected user-input outcome, not an
/// error: the call was a no-op and nothing entered the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// The ray hit the anchor surface; an object was (or is being) anchored
    /// at this world point.
    Anchored { point: Vec3 },
    /// The ray missed the anchor surface.
    NoIntersection,
}

/// A loaded asset waiting to be spliced into the scene on the frame thread.
struct Splice {
    node: Node,
    epoch: u64,
}

/// Resolves user input into anchored scene objects.
///
/// Ground-plane mode ray-casts a screen coordinate against the anchor
/// surface and instantiates the placeable asset at the hit point;
/// pose-anchored mode stamps a fixed visual marker at a given camera pose.
/// Both tag their product in the view's [`AnchorSet`] and copy it across an
/// attached mirror link.
///
/// Asset instantiation is asynchronous: the load completion posts a splice
/// task onto an internal queue that [`PlacementEngine::pump`] drains on the
/// frame thread, preserving the scene's single writer. A reset epoch guards
/// the queue so splices requested before a `reset` never resurrect.
pub struct PlacementEngine {
    placeable: Option<(Box<dyn AssetLoader>, AssetRef)>,
    marker_opacity: f32,
    default_scale: f32,
    tx: Sender<Splice>,
    rx: Receiver<Splice>,
    epoch: u64,
}

impl PlacementEngine {
    /// Engine for pose-anchored markers only.
    #[must_use]
    pub fn new(marker_opacity: f32, default_scale: f32) -> Self {
        let (tx, rx) = channel();
        Self {
            placeable: None,
            marker_opacity,
            default_scale,
            tx,
            rx,
            epoch: 0,
        }
    }

    /// Engine that can also instantiate a loadable asset in ground-plane
    /// mode.
    #[must_use]
    pub fn with_loader(
        loader: Box<dyn AssetLoader>,
        placeable: AssetRef,
        marker_opacity: f32,
        default_scale: f32,
    ) -> Self {
        let mut engine = Self::new(marker_opacity, default_scale);
        engine.placeable = Some((loader, placeable));
        engine
    }

    /// Ground-plane placement.
    ///
    /// Converts the screen coordinate to normalized device coordinates,
    /// casts a ray from the camera and intersects the anchor surface only —
    /// never the scene, so placement stays deterministic and independent of
    /// previously placed objects. On a hit, the placeable asset is
    /// requested fire-and-forget: this call has already returned when the
    /// load completes, and load failures are logged, not raised.
    ///
    /// Without a `scale` the engine's default scale applies. A hit on an
    /// engine with no placeable configured still reports the anchor point;
    /// the drop is logged and nothing enters the scene.
    pub fn place_at(
        &self,
        x: f32,
        y: f32,
        scale: Option<f32>,
        viewport: (f32, f32),
        camera: &Camera,
        surface: &AnchorSurface,
    ) -> Placement {
        let ndc = screen_to_ndc(x, y, viewport.0, viewport.1);
        let ray = Ray::through_ndc(camera, ndc);
        let Some(point) = surface.intersect(&ray) else {
            return Placement::NoIntersection;
        };

        let Some((loader, placeable)) = &self.placeable else {
            log::warn!("no placeable asset configured; dropping anchored placement");
            return Placement::Anchored { point };
        };

        let scale = scale.unwrap_or(self.default_scale);
        let tx = self.tx.clone();
        let epoch = self.epoch;
        loader.load(
            placeable,
            Box::new(move |res| match res {
                Ok(mut node) => {
                    node.set_uniform_scale(scale);
                    node.position = point;
                    // The view may be gone; a dead queue just drops the node.
                    let _ = tx.send(Splice { node, epoch });
                }
                Err(e) => log::warn!("placement asset load failed: {e}"),
            }),
        );

        Placement::Anchored { point }
    }

    /// Pose-anchored placement.
    ///
    /// Builds the fixed marker (translucent double-sided plane with a
    /// normal-shaded cube child nudged along local +Z so it clears the
    /// plane), applies the pose to it once, and inserts it. The marker is
    /// never re-driven by later poses. With a mirror link attached, a
    /// structural copy lands in the secondary scene at the same transform.
    ///
    /// Without a `scale` the engine's default scale applies. `visible` is
    /// the view's current tracking visibility, applied to the primary copy
    /// only; the mirror copy lives in a scene with no loss-driven hiding
    /// and always starts visible.
    pub fn create_at_pose(
        &self,
        p: &Pose,
        scale: Option<f32>,
        visible: bool,
        scene: &mut Scene,
        anchors: &mut AnchorSet,
        mirror: Option<&mut SceneMirror>,
    ) -> Result<NodeId> {
        let scale = scale.unwrap_or(self.default_scale);
        let mut marker = build_marker(scale, self.marker_opacity);
        pose::apply(p, &mut marker.orientation, &mut marker.position)?;

        if let Some(mirror) = mirror {
            mirror.mirror_insert(&marker);
        }
        marker.visible = visible;
        let id = scene.add(marker);
        anchors.insert(id);
        Ok(id)
    }

    /// Splices completed asset loads into the scene.
    ///
    /// Call once per frame on the frame thread. `visible` is the view's
    /// current tracking visibility, applied to each spliced node in the
    /// primary scene; mirror copies always start visible. Splices from
    /// before the last reset are dropped.
    pub fn pump(
        &mut self,
        scene: &mut Scene,
        anchors: &mut AnchorSet,
        mut mirror: Option<&mut SceneMirror>,
        visible: bool,
    ) {
        let splices: Vec<Splice> = self.rx.try_iter().collect();
        for splice in splices {
            if splice.epoch != self.epoch {
                log::debug!("dropping asset spliced after reset");
                continue;
            }
            let mut node = splice.node;
            if let Some(mirror) = mirror.as_deref_mut() {
                mirror.mirror_insert(&node);
            }
            node.visible = visible;
            let id = scene.add(node);
            anchors.insert(id);
        }
    }

    /// Removes every anchored object from the primary scene and, if
    /// mirrored, from the secondary scene. Idempotent; also invalidates any
    /// in-flight asset loads.
    pub fn reset(
        &mut self,
        scene: &mut Scene,
        anchors: &mut AnchorSet,
        mirror: Option<&mut SceneMirror>,
    ) {
        for id in anchors.drain() {
            if scene.remove(id).is_none() {
                log::debug!("anchored node {id:?} already gone");
            }
        }
        if let Some(mirror) = mirror {
            mirror.mirror_reset();
        }
        self.epoch += 1;
    }
}

/// The pose-anchored visual marker: a translucent plane carrying a
/// normal-shaded cube, sized relative to `scale` like the reference viewer
/// (cube side is a quarter of the scale, offset half its side forward).
fn build_marker(scale: f32, opacity: f32) -> Node {
    let mut plane = Node::mesh(
        Geometry::Plane {
            width: scale,
            height: scale,
        },
        Material::Basic {
            color: Vec3::ONE,
            opacity,
            double_sided: true,
        },
    );

    let cube_size = scale * 0.25;
    let mut cube = Node::mesh(
        Geometry::Cube { size: cube_size },
        Material::Normal { flat_shading: true },
    );
    cube.position.z = cube_size * 0.5;

    plane.add_child(cube);
    plane
}

#[cfg(test)]
mod tests {
    use super::*;
    use arscope_scene::{ImmediateLoader, NodeKind};
    use glam::Quat;
    use std::f32::consts::FRAC_PI_2;

    fn down_camera(height: f32) -> Camera {
        let mut camera = Camera::new(60.0, 1.0, 0.01, 1000.0);
        camera.position = Vec3::new(2.0, height, -1.0);
        camera.orientation = Quat::from_rotation_x(-FRAC_PI_2);
        camera
    }

    fn asset_engine() -> PlacementEngine {
        let loader = ImmediateLoader::new(|_: &AssetRef| {
            Ok(Node::mesh(
                Geometry::Cube { size: 1.0 },
                Material::Normal { flat_shading: true },
            ))
        });
        PlacementEngine::with_loader(Box::new(loader), AssetRef::new("ship.glb"), 0.1, 1.0)
    }

    #[test]
    fn test_center_screen_places_under_camera() {
        let engine = asset_engine();
        let camera = down_camera(3.0);
        let surface = AnchorSurface::ground(Vec3::new(2.0, 0.0, -1.0), 1000.0);

        let placement = engine.place_at(320.0, 240.0, Some(1.0), (640.0, 480.0), &camera, &surface);
        let Placement::Anchored { point } = placement else {
            panic!("expected an anchor point");
        };
        assert!(point.abs_diff_eq(Vec3::new(2.0, 0.0, -1.0), 1e-3));
    }

    #[test]
    fn test_miss_is_a_no_op() {
        let engine = asset_engine();
        // Camera looking up: the ground is behind the ray.
        let mut camera = Camera::new(60.0, 1.0, 0.01, 1000.0);
        camera.position = Vec3::new(0.0, 3.0, 0.0);
        camera.orientation = Quat::from_rotation_x(FRAC_PI_2);
        let surface = AnchorSurface::ground(Vec3::ZERO, 1000.0);

        let placement = engine.place_at(320.0, 240.0, Some(1.0), (640.0, 480.0), &camera, &surface);
        assert_eq!(placement, Placement::NoIntersection);

        let mut scene = Scene::new();
        let mut anchors = AnchorSet::new();
        let mut engine = engine;
        engine.pump(&mut scene, &mut anchors, None, true);
        assert!(scene.is_empty());
        assert!(anchors.is_empty());
    }

    #[test]
    fn test_pump_splices_loaded_asset() {
        let mut engine = asset_engine();
        let camera = down_camera(5.0);
        let surface = AnchorSurface::ground(Vec3::new(2.0, 0.0, -1.0), 1000.0);
        let mut scene = Scene::new();
        let mut anchors = AnchorSet::new();

        engine.place_at(320.0, 240.0, Some(2.0), (640.0, 480.0), &camera, &surface);
        assert!(scene.is_empty()); // not yet spliced

        engine.pump(&mut scene, &mut anchors, None, true);
        assert_eq!(scene.len(), 1);
        assert_eq!(anchors.len(), 1);

        let node = scene.roots().next().unwrap();
        assert!(node.position.abs_diff_eq(Vec3::new(2.0, 0.0, -1.0), 1e-3));
        assert!(node.scale.abs_diff_eq(Vec3::splat(2.0), 1e-6));
        assert!(node.visible);
    }

    #[test]
    fn test_reset_drops_pending_splices() {
        let mut engine = asset_engine();
        let camera = down_camera(5.0);
        let surface = AnchorSurface::ground(Vec3::new(2.0, 0.0, -1.0), 1000.0);
        let mut scene = Scene::new();
        let mut anchors = AnchorSet::new();

        engine.place_at(320.0, 240.0, Some(1.0), (640.0, 480.0), &camera, &surface);
        engine.reset(&mut scene, &mut anchors, None); // before the pump
        engine.pump(&mut scene, &mut anchors, None, true);

        assert!(scene.is_empty());
        assert!(anchors.is_empty());
    }

    #[test]
    fn test_reset_removes_anchored_and_is_idempotent() {
        let mut engine = asset_engine();
        let mut scene = Scene::new();
        let mut anchors = AnchorSet::new();
        let p = Pose::from_components([0.0, 1.0, 0.0], [0.0, 0.0, 0.0, 1.0]);

        engine
            .create_at_pose(&p, Some(1.0), true, &mut scene, &mut anchors, None)
            .unwrap();
        assert_eq!(scene.len(), 1);

        engine.reset(&mut scene, &mut anchors, None);
        assert!(scene.is_empty());
        assert!(anchors.is_empty());

        engine.reset(&mut scene, &mut anchors, None); // second reset: no-op
        assert!(scene.is_empty());
    }

    #[test]
    fn test_marker_shape_and_pose() {
        let engine = PlacementEngine::new(0.1, 1.0);
        let mut scene = Scene::new();
        let mut anchors = AnchorSet::new();
        let p = Pose::from_components([1.0, 2.0, 3.0], [0.0, 0.0, 0.0, 1.0]);

        let id = engine
            .create_at_pose(&p, Some(2.0), true, &mut scene, &mut anchors, None)
            .unwrap();
        let marker = scene.get(id).unwrap();

        // Pose applied once through the adapter.
        assert!(marker.position.abs_diff_eq(Vec3::new(1.0, -2.0, -3.0), 1e-5));

        let NodeKind::Mesh {
            geometry: Geometry::Plane { width, height },
            ..
        } = &marker.kind
        else {
            panic!("marker root is a plane");
        };
        assert_eq!((*width, *height), (2.0, 2.0));

        let cube = &marker.children[0];
        let NodeKind::Mesh {
            geometry: Geometry::Cube { size },
            ..
        } = &cube.kind
        else {
            panic!("marker child is a cube");
        };
        assert_eq!(*size, 0.5); // quarter of the scale
        assert_eq!(cube.position.z, 0.25); // half the cube side
    }

    #[test]
    fn test_create_at_pose_rejects_malformed() {
        let engine = PlacementEngine::new(0.1, 1.0);
        let mut scene = Scene::new();
        let mut anchors = AnchorSet::new();
        let bad = Pose::from_components([0.0, 0.0, 0.0], [0.0, 0.0, 0.0, 0.0]);

        assert!(engine
            .create_at_pose(&bad, Some(1.0), true, &mut scene, &mut anchors, None)
            .is_err());
        assert!(scene.is_empty());
        assert!(anchors.is_empty());
    }

    #[test]
    fn test_marker_without_tracking_starts_hidden() {
        let engine = PlacementEngine::new(0.1, 1.0);
        let mut scene = Scene::new();
        let mut anchors = AnchorSet::new();
        let p = Pose::from_components([0.0, 1.0, 0.0], [0.0, 0.0, 0.0, 1.0]);

        let id = engine
            .create_at_pose(&p, None, false, &mut scene, &mut anchors, None)
            .unwrap();
        assert!(!scene.get(id).unwrap().visible);
    }

    #[test]
    fn test_unspecified_scale_falls_back_to_default() {
        let loader = ImmediateLoader::new(|_: &AssetRef| {
            Ok(Node::mesh(
                Geometry::Cube { size: 1.0 },
                Material::Normal { flat_shading: true },
            ))
        });
        let mut engine =
            PlacementEngine::with_loader(Box::new(loader), AssetRef::new("ship.glb"), 0.1, 3.0);
        let camera = down_camera(5.0);
        let surface = AnchorSurface::ground(Vec3::new(2.0, 0.0, -1.0), 1000.0);
        let mut scene = Scene::new();
        let mut anchors = AnchorSet::new();

        engine.place_at(320.0, 240.0, None, (640.0, 480.0), &camera, &surface);
        engine.pump(&mut scene, &mut anchors, None, true);

        let node = scene.roots().next().unwrap();
        assert!(node.scale.abs_diff_eq(Vec3::splat(3.0), 1e-6));
    }

    #[test]
    fn test_hit_without_placeable_reports_anchor_but_inserts_nothing() {
        let mut engine = PlacementEngine::new(0.1, 1.0);
        let camera = down_camera(3.0);
        let surface = AnchorSurface::ground(Vec3::new(2.0, 0.0, -1.0), 1000.0);
        let mut scene = Scene::new();
        let mut anchors = AnchorSet::new();

        // The ray hit; the outcome says so even though no asset is
        // configured to instantiate there.
        let placement = engine.place_at(320.0, 240.0, None, (640.0, 480.0), &camera, &surface);
        let Placement::Anchored { point } = placement else {
            panic!("expected the hit to be reported");
        };
        assert!(point.abs_diff_eq(Vec3::new(2.0, 0.0, -1.0), 1e-3));

        engine.pump(&mut scene, &mut anchors, None, true);
        assert!(scene.is_empty());
        assert!(anchors.is_empty());
    }
}
