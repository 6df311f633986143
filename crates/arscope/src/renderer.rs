//! Seams to the external render engine and frame scheduler.

use arscope_scene::{Camera, Scene};

/// External rendering collaborator.
///
/// Each view invokes this once per frame with its own scene and camera;
/// the engine draws the description however it likes.
pub trait Renderer {
    fn render(&mut self, scene: &Scene, camera: &Camera);
}

/// Renderer that draws nothing and counts frames. Used by tests and
/// headless runs.
#[derive(Debug, Default)]
pub struct NullRenderer {
    frames: u64,
}

impl NullRenderer {
    /// Creates a renderer with a zero frame count.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames rendered so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, _scene: &Scene, _camera: &Camera) {
        self.frames += 1;
    }
}

/// External display-refresh primitive.
///
/// `next_frame` blocks (or not) until the next frame should be produced and
/// returns false when the host wants the loop to end. The view's own
/// `tear_down` is the other way out of the loop.
pub trait FrameScheduler {
    fn next_frame(&mut self) -> bool;
}

/// Scheduler that grants a fixed number of frames and then stops. Used by
/// tests and the demo; a real host would wrap vsync or an event loop here.
#[derive(Debug)]
pub struct FrameBudget(pub u64);

impl FrameScheduler for FrameBudget {
    fn next_frame(&mut self) -> bool {
        if self.0 == 0 {
            return false;
        }
        self.0 -= 1;
        true
    }
}
