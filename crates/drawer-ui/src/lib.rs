//! Two-state swipe drawer.
//!
//! A [`DrawerController`] tracks a panel that the user drags between an
//! expanded (up) and a collapsed (down) resting position. Dragging past the
//! expanded bound meets elastic resistance; releasing either commits to the
//! other resting state or snaps back, animated on the runtime's frame clock.

mod callbacks;
mod controller;
mod frame;
mod props;
mod state;

pub use callbacks::DrawerCallbacks;
pub use controller::{elastic_overshoot, DrawerController};
pub use frame::{DrawerFrame, DRAWER_Z_INDEX, ROUNDED_EDGE_RADIUS};
pub use props::{
    CompletionPolicy, DrawerConfigError, DrawerProps, Viewport, DEFAULT_TOGGLE_THRESHOLD,
    DEFAULT_TRANSITION,
};
pub use state::{DrawerState, InvalidDrawerState, ReleaseOutcome};

pub mod prelude {
    pub use crate::callbacks::DrawerCallbacks;
    pub use crate::controller::DrawerController;
    pub use crate::frame::DrawerFrame;
    pub use crate::props::{CompletionPolicy, DrawerConfigError, DrawerProps, Viewport};
    pub use crate::state::{DrawerState, ReleaseOutcome};
    pub use drawer_animation::{AnimationSpec, Easing};
    pub use drawer_foundation::PointerEvent;
    pub use drawer_ui_graphics::{Color, Point};
}
