//! Standard runtime services backed by Rust's `std` library.
//!
//! This crate provides concrete implementations of the platform traits
//! defined in `drawer-core`. Hosts construct a [`StdRuntime`], hand its
//! [`RuntimeHandle`] to the drawer, and call [`StdRuntime::pump_frame`] from
//! their frame loop.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use drawer_core::{Clock, FrameClock, Runtime, RuntimeHandle, RuntimeScheduler};
use web_time::Instant;

type FrameWaker = Arc<dyn Fn() + Send + Sync + 'static>;

/// Scheduler that records frame requests and optionally wakes the host loop.
pub struct StdScheduler {
    frame_requested: AtomicBool,
    frame_waker: RwLock<Option<FrameWaker>>,
}

impl StdScheduler {
    pub fn new() -> Self {
        Self {
            frame_requested: AtomicBool::new(false),
            frame_waker: RwLock::new(None),
        }
    }

    /// Returns whether a frame has been requested since the last call.
    pub fn take_frame_request(&self) -> bool {
        self.frame_requested.swap(false, Ordering::SeqCst)
    }

    /// Registers a waker that will be invoked whenever a new frame is scheduled.
    pub fn set_frame_waker(&self, waker: impl Fn() + Send + Sync + 'static) {
        if let Ok(mut slot) = self.frame_waker.write() {
            *slot = Some(Arc::new(waker));
        }
    }

    /// Clears any registered frame waker.
    pub fn clear_frame_waker(&self) {
        if let Ok(mut slot) = self.frame_waker.write() {
            *slot = None;
        }
    }

    fn wake(&self) {
        let waker = self
            .frame_waker
            .read()
            .ok()
            .and_then(|slot| slot.as_ref().cloned());
        if let Some(waker) = waker {
            waker();
        }
    }
}

impl Default for StdScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StdScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdScheduler")
            .field(
                "frame_requested",
                &self.frame_requested.load(Ordering::SeqCst),
            )
            .finish()
    }
}

impl RuntimeScheduler for StdScheduler {
    fn schedule_frame(&self) {
        self.frame_requested.store(true, Ordering::SeqCst);
        self.wake();
    }
}

/// Clock implementation backed by [`web_time::Instant`].
#[derive(Debug, Default, Clone)]
pub struct StdClock;

impl Clock for StdClock {
    type Instant = Instant;

    fn now(&self) -> Self::Instant {
        Instant::now()
    }

    fn elapsed_nanos(&self, since: Self::Instant) -> u64 {
        u64::try_from(since.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

/// Runtime whose frames are stamped by a [`Clock`], measured from the moment
/// the runtime was created. Defaults to [`StdClock`].
#[derive(Clone)]
pub struct StdRuntime<C: Clock = StdClock> {
    scheduler: Arc<StdScheduler>,
    clock: C,
    runtime: Runtime,
    origin: C::Instant,
}

impl StdRuntime {
    pub fn new() -> Self {
        Self::with_clock(StdClock)
    }
}

impl<C: Clock> StdRuntime<C> {
    pub fn with_clock(clock: C) -> Self {
        let scheduler = Arc::new(StdScheduler::default());
        let runtime = Runtime::new(scheduler.clone());
        Self {
            origin: clock.now(),
            scheduler,
            clock,
            runtime,
        }
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn frame_clock(&self) -> FrameClock {
        self.runtime.frame_clock()
    }

    /// Returns whether a frame was requested since the last poll.
    pub fn take_frame_request(&self) -> bool {
        self.scheduler.take_frame_request()
    }

    pub fn needs_frame(&self) -> bool {
        self.runtime.needs_frame()
    }

    /// Registers a waker to be called when the runtime schedules a new frame.
    pub fn set_frame_waker(&self, waker: impl Fn() + Send + Sync + 'static) {
        self.scheduler.set_frame_waker(waker);
    }

    /// Clears any previously registered frame waker.
    pub fn clear_frame_waker(&self) {
        self.scheduler.clear_frame_waker();
    }

    /// Drains pending frame callbacks using the provided frame timestamp in nanoseconds.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        self.runtime.drain_frame_callbacks(frame_time_nanos);
    }

    /// Drains pending frame callbacks stamped with the wall time elapsed since
    /// this runtime was created. Returns the frame time used.
    pub fn pump_frame(&self) -> u64 {
        let frame_time_nanos = self.clock.elapsed_nanos(self.origin);
        self.drain_frame_callbacks(frame_time_nanos);
        frame_time_nanos
    }
}

impl<C: Clock + fmt::Debug> fmt::Debug for StdRuntime<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdRuntime")
            .field("scheduler", &self.scheduler)
            .field("clock", &self.clock)
            .finish()
    }
}

impl Default for StdRuntime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/std_runtime_tests.rs"]
mod tests;
