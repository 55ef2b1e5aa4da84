//! Pure math/data for drawing the drawer
//!
//! Geometry primitives, color definitions and shadow parameters shared by the
//! animation, gesture and controller crates.

mod color;
mod geometry;
mod shadow;

pub use color::*;
pub use geometry::*;
pub use shadow::*;

pub mod prelude {
    pub use crate::color::{Color, ColorParseError};
    pub use crate::geometry::{CornerRadii, Point, Rect, Size};
    pub use crate::shadow::Shadow;
}
