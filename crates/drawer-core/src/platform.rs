//! Platform abstraction traits for the drawer runtime.
//!
//! These traits let the host platform own frame scheduling and wall time,
//! so the runtime itself never reaches for ambient globals.

/// Schedules work for the drawer runtime.
///
/// Implementations are told whenever a frame callback is registered, so the
/// host knows to produce another frame.
pub trait RuntimeScheduler: Send + Sync {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

/// Provides timing information for the runtime.
pub trait Clock: Send + Sync {
    /// Instant type produced by this clock implementation.
    type Instant: Copy + Send + Sync;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;

    /// Nanoseconds elapsed since `since`, the unit frame times are stamped in.
    fn elapsed_nanos(&self, since: Self::Instant) -> u64;
}

/// Scheduler that ignores frame requests.
///
/// Useful for tests and headless hosts that pump frames themselves.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultScheduler;

impl RuntimeScheduler for DefaultScheduler {
    fn schedule_frame(&self) {}
}
