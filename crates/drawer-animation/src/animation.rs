//! Animated value driver.
//!
//! An [`Animatable`] holds a value that can either be set instantly or tweened
//! toward a target over a fixed duration. Progress is sampled from the
//! runtime's frame clock, one callback per frame, so animations never block
//! input handling. Starting a new animation or snapping retargets the value
//! from wherever it currently is; the last writer wins.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use drawer_core::{FrameCallbackRegistration, FrameClock, RuntimeHandle};
use drawer_ui_graphics::Point;

use crate::easing::Easing;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

impl Lerp for Point {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Point::new(
            self.x.lerp(&target.x, fraction),
            self.y.lerp(&target.y, fraction),
        )
    }
}

const NANOS_PER_MILLI: u64 = 1_000_000;

/// Tween specification: duration, easing and start delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    pub easing: Easing,
    /// Delay before starting animation in milliseconds.
    pub delay_millis: u64,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }

    /// Total time from start until the value settles, delay included.
    pub fn total_millis(&self) -> u64 {
        self.delay_millis.saturating_add(self.duration_millis)
    }

    /// [`total_millis`](Self::total_millis) in frame-clock nanoseconds, or
    /// `None` when that does not fit in a `u64`.
    pub fn total_nanos(&self) -> Option<u64> {
        self.delay_millis
            .checked_add(self.duration_millis)?
            .checked_mul(NANOS_PER_MILLI)
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowInEasing)
    }
}

/// How an animation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEnd {
    /// The value reached its target.
    Finished,
    /// A later `animate_to` or `snap_to` took over before the target was reached.
    Interrupted,
}

impl AnimationEnd {
    pub fn is_finished(self) -> bool {
        self == AnimationEnd::Finished
    }
}

type EndCallback = Box<dyn FnOnce(AnimationEnd) + 'static>;

/// Generic animatable value holder.
pub struct Animatable<T: Lerp + Clone + 'static> {
    inner: Rc<RefCell<AnimatableInner<T>>>,
}

struct AnimatableInner<T: Lerp + Clone + 'static> {
    clock: FrameClock,
    current: T,
    start: T,
    target: T,
    spec: AnimationSpec,
    running: bool,
    start_time_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    on_end: Option<EndCallback>,
}

impl<T: Lerp + Clone + 'static> AnimatableInner<T> {
    /// Stops any in-flight tween and hands back its end callback, which the
    /// caller must invoke once the borrow is released.
    fn stop(&mut self) -> Option<EndCallback> {
        if let Some(registration) = self.registration.take() {
            registration.cancel();
        }
        self.running = false;
        self.start_time_nanos = None;
        self.on_end.take()
    }
}

impl<T: Lerp + Clone + 'static> Animatable<T> {
    /// Create a new animatable resting at `initial`.
    pub fn new(initial: T, runtime: RuntimeHandle) -> Self {
        let inner = AnimatableInner {
            clock: runtime.frame_clock(),
            current: initial.clone(),
            start: initial.clone(),
            target: initial,
            spec: AnimationSpec::default(),
            running: false,
            start_time_nanos: None,
            registration: None,
            on_end: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Current value, as of the last drained frame or snap.
    pub fn value(&self) -> T {
        self.inner.borrow().current.clone()
    }

    /// Value the animatable is heading to (equal to `value()` at rest).
    pub fn target(&self) -> T {
        self.inner.borrow().target.clone()
    }

    pub fn spec(&self) -> AnimationSpec {
        self.inner.borrow().spec
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().running
    }

    /// Set the value immediately, superseding any in-flight animation.
    pub fn snap_to(&self, value: T) {
        let interrupted = {
            let mut inner = self.inner.borrow_mut();
            let interrupted = inner.stop();
            inner.current = value.clone();
            inner.start = value.clone();
            inner.target = value;
            interrupted
        };
        if let Some(on_end) = interrupted {
            on_end(AnimationEnd::Interrupted);
        }
    }

    /// Tween from the current value to `target`.
    ///
    /// `on_end` runs exactly once: with [`AnimationEnd::Finished`] when the
    /// target is reached, or with [`AnimationEnd::Interrupted`] when a later
    /// call supersedes this one.
    pub fn animate_to(
        &self,
        target: T,
        spec: AnimationSpec,
        on_end: impl FnOnce(AnimationEnd) + 'static,
    ) {
        let interrupted = {
            let mut inner = self.inner.borrow_mut();
            let interrupted = inner.stop();
            inner.start = inner.current.clone();
            inner.target = target;
            inner.spec = spec;
            inner.running = true;
            inner.on_end = Some(Box::new(on_end));
            interrupted
        };
        if let Some(on_end) = interrupted {
            on_end(AnimationEnd::Interrupted);
        }
        Self::schedule_frame(&self.inner);
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let clock = {
            let inner = this.borrow();
            if !inner.running || inner.registration.is_some() {
                return;
            }
            inner.clock.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner<T>>>, frame_time_nanos: u64) {
        let finished = {
            let mut inner = this.borrow_mut();
            inner.registration = None;
            if !inner.running {
                return;
            }

            let spec = inner.spec;
            let start_time = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
            let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
            let delay_nanos = spec.delay_millis.saturating_mul(NANOS_PER_MILLI);

            if elapsed_nanos < delay_nanos {
                None
            } else {
                let duration_nanos = spec.duration_millis.saturating_mul(NANOS_PER_MILLI);
                let linear_progress = if duration_nanos == 0 {
                    1.0
                } else {
                    ((elapsed_nanos - delay_nanos) as f32 / duration_nanos as f32).clamp(0.0, 1.0)
                };

                if linear_progress >= 1.0 {
                    inner.current = inner.target.clone();
                    inner.start = inner.target.clone();
                    inner.running = false;
                    inner.start_time_nanos = None;
                    Some(inner.on_end.take())
                } else {
                    let progress = spec.easing.transform(linear_progress);
                    inner.current = inner.start.lerp(&inner.target, progress);
                    None
                }
            }
        };

        match finished {
            Some(on_end) => {
                log::trace!("animation settled at {frame_time_nanos}ns");
                if let Some(on_end) = on_end {
                    on_end(AnimationEnd::Finished);
                }
            }
            None => Self::schedule_frame(this),
        }
    }
}

impl<T: Lerp + Clone + 'static> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Lerp + Clone + fmt::Debug + 'static> fmt::Debug for Animatable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Animatable")
            .field("current", &inner.current)
            .field("target", &inner.target)
            .field("running", &inner.running)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
