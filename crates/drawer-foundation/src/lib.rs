//! Pointer input and gesture recognition for the swipe drawer.

pub mod gestures;
pub mod pointer;

pub use gestures::{DragEvent, DragGesture, DragPhase, DragSample};
pub use pointer::{PointerEvent, PointerEventKind, PointerId};

pub mod prelude {
    pub use crate::gestures::{DragEvent, DragGesture, DragPhase, DragSample};
    pub use crate::pointer::{PointerEvent, PointerEventKind, PointerId};
}
