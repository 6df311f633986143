//! Headless demo driving a SimpleView + SimpleMap pair with synthetic poses.
//!
//! A real host would feed poses from a visual tracking engine and render
//! through a GPU-backed `Renderer`; here the camera orbits the origin, a
//! few markers are stamped along the way, and everything runs against
//! `NullRenderer`.

use std::cell::RefCell;
use std::rc::Rc;

use arscope::*;

fn main() -> Result<()> {
    env_logger::init();

    let options = ViewOptions::default();
    let map = Rc::new(RefCell::new(SimpleMap::new(
        256.0,
        256.0,
        Box::new(NullRenderer::new()),
        &options,
    )));
    let mut view = SimpleView::new(
        Box::new(NullRenderer::new()),
        640.0,
        480.0,
        Some(Rc::clone(&map)),
        &options,
    );

    // Orbit the tracked camera around the origin at radius 3.
    let steps = 120;
    for i in 0..steps {
        let angle = 2.0 * std::f32::consts::PI * i as f32 / steps as f32;
        let position = Vec3::new(3.0 * angle.cos(), 1.5, 3.0 * angle.sin());
        let orientation = Quat::from_rotation_y(-angle);
        // The engine reports poses in tracking space; the remap helpers
        // are involutive, so remapping the target transform produces the
        // matching sample.
        let sample = Pose::new(
            pose::remap_position(position),
            pose::remap_orientation(orientation),
        );

        view.update_camera_pose(&sample)?;
        view.update_map_camera(&Pose::new(Vec3::new(0.0, 20.0, 0.0), orientation));

        // Stamp a marker every quarter turn.
        if i % (steps / 4) == 0 {
            let id = view.create_object_with_pose(&sample, Some(0.5))?;
            println!("placed marker {id:?} at angle {:.0} deg", angle.to_degrees());
        }

        view.frame();
        map.borrow_mut().render();
    }

    // Simulate a tracking dropout and recovery.
    view.lost_camera();
    view.frame();
    view.update_camera_pose(&Pose::from_components(
        [0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ))?;

    println!(
        "placed {} object(s), mirrored {} into the map",
        view.anchors().len(),
        view.mirror().map_or(0, SceneMirror::mirrored_count)
    );

    view.reset();
    println!("after reset: {} object(s) remain", view.anchors().len());

    // Hand the loop a fixed budget and let the view tear itself down after.
    view.run(&mut FrameBudget(60));
    view.tear_down();

    Ok(())
}
