//! Core runtime for the swipe drawer.
//!
//! Provides the frame clock that animations pull their timing from, the
//! single-threaded runtime that owns pending frame callbacks, and the platform
//! traits a host implements to be told when a new frame is needed.

mod frame_clock;
mod platform;
mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use platform::{Clock, DefaultScheduler, RuntimeScheduler};
pub use runtime::{Runtime, RuntimeHandle};

pub type FrameCallbackId = u64;

pub mod prelude {
    pub use crate::frame_clock::{FrameCallbackRegistration, FrameClock};
    pub use crate::platform::{Clock, DefaultScheduler, RuntimeScheduler};
    pub use crate::runtime::{Runtime, RuntimeHandle};
}
