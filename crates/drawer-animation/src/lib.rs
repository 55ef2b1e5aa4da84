//! Animation system for the swipe drawer
//!
//! Provides time-based tweens with easing curves, driven by the runtime's
//! frame clock.

pub mod animation;
pub mod easing;

pub use animation::*;
pub use easing::Easing;

pub mod prelude {
    pub use crate::animation::{Animatable, AnimationEnd, AnimationSpec, Lerp};
    pub use crate::easing::Easing;
}
