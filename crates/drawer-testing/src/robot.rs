//! Robot-style driver for drawer tests.
//!
//! Owns a runtime with a manually advanced frame time, a controller wired to
//! a [`CallbackRecorder`], and a virtual pointer.
//!
//! ```
//! use drawer_testing::DrawerRobot;
//! use drawer_ui::{DrawerProps, DrawerState, ReleaseOutcome, Viewport};
//! use drawer_ui_graphics::Point;
//!
//! let props = DrawerProps::new(Point::new(0.0, 100.0), Point::new(0.0, 500.0))
//!     .resting_in(DrawerState::Expanded);
//! let mut robot = DrawerRobot::new(props, Viewport::new(400.0, 800.0)).unwrap();
//!
//! assert_eq!(robot.drag(150.0, 230.0, 4), Some(ReleaseOutcome::Collapsed));
//! robot.wait_for_idle();
//! assert_eq!(robot.position_y(), 500.0);
//! ```

use std::sync::Arc;

use drawer_core::{DefaultScheduler, Runtime};
use drawer_foundation::PointerEvent;
use drawer_ui::{DrawerConfigError, DrawerController, DrawerProps, ReleaseOutcome, Viewport};
use drawer_ui_graphics::Point;

use crate::recorder::CallbackRecorder;

/// Frame interval the robot steps by (~60 FPS).
pub const FRAME_INTERVAL_NANOS: u64 = 16_666_667;

const MAX_IDLE_FRAMES: usize = 10_000;

pub struct DrawerRobot {
    runtime: Runtime,
    frame_time_nanos: u64,
    drawer: DrawerController,
    recorder: CallbackRecorder,
    pointer_x: f32,
}

impl DrawerRobot {
    pub fn new(props: DrawerProps, viewport: Viewport) -> Result<Self, DrawerConfigError> {
        let runtime = Runtime::new(Arc::new(DefaultScheduler));
        let recorder = CallbackRecorder::new();
        let pointer_x = viewport.width / 2.0;
        let drawer = DrawerController::new(props, viewport, recorder.callbacks(), runtime.handle())?;
        Ok(Self {
            runtime,
            frame_time_nanos: 0,
            drawer,
            recorder,
            pointer_x,
        })
    }

    pub fn drawer(&self) -> &DrawerController {
        &self.drawer
    }

    pub fn drawer_mut(&mut self) -> &mut DrawerController {
        &mut self.drawer
    }

    pub fn recorder(&self) -> &CallbackRecorder {
        &self.recorder
    }

    pub fn position_y(&self) -> f32 {
        self.drawer.position().y
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos
    }

    pub fn press(&mut self, y: f32) -> Option<ReleaseOutcome> {
        self.send(PointerEvent::down(self.pointer(y)))
    }

    pub fn move_to(&mut self, y: f32) -> Option<ReleaseOutcome> {
        self.send(PointerEvent::moved(self.pointer(y)))
    }

    pub fn release_at(&mut self, y: f32) -> Option<ReleaseOutcome> {
        self.send(PointerEvent::up(self.pointer(y)))
    }

    pub fn cancel_at(&mut self, y: f32) -> Option<ReleaseOutcome> {
        self.send(PointerEvent::cancel(self.pointer(y)))
    }

    /// Press at `from_y`, move to `to_y` in `steps` even moves, release there.
    /// No frames run during the gesture.
    pub fn drag(&mut self, from_y: f32, to_y: f32, steps: usize) -> Option<ReleaseOutcome> {
        self.press(from_y);
        let steps = steps.max(1);
        for step in 1..=steps {
            let fraction = step as f32 / steps as f32;
            self.move_to(from_y + (to_y - from_y) * fraction);
        }
        self.release_at(to_y)
    }

    /// Drains one frame and steps the frame time.
    pub fn advance_frame(&mut self) {
        self.runtime.drain_frame_callbacks(self.frame_time_nanos);
        self.frame_time_nanos += FRAME_INTERVAL_NANOS;
    }

    /// Runs frames until at least `nanos` of frame time has passed.
    pub fn advance_time(&mut self, nanos: u64) {
        let end = self.frame_time_nanos + nanos;
        while self.frame_time_nanos < end {
            self.advance_frame();
        }
    }

    /// Runs frames until no frame callbacks remain. Returns the number of
    /// frames it took.
    ///
    /// # Panics
    ///
    /// Panics if the drawer is still animating after a very large number of
    /// frames.
    pub fn wait_for_idle(&mut self) -> usize {
        for frames in 0..MAX_IDLE_FRAMES {
            if !self.runtime.needs_frame() {
                return frames;
            }
            self.advance_frame();
        }
        panic!("drawer still animating after {MAX_IDLE_FRAMES} frames");
    }

    fn pointer(&self, y: f32) -> Point {
        Point::new(self.pointer_x, y)
    }

    fn send(&mut self, event: PointerEvent) -> Option<ReleaseOutcome> {
        self.drawer.on_pointer_event(&event)
    }
}
