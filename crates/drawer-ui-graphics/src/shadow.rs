//! Drop shadow parameters.

use crate::{Color, Point};

/// Drop shadow under a surface, in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub offset: Point,
    pub opacity: f32,
    pub blur_radius: f32,
    /// Platform elevation hint for hosts that render shadows from elevation.
    pub elevation: f32,
}

impl Shadow {
    /// Low, soft shadow used for floating sheets.
    pub const fn sheet() -> Self {
        Self {
            color: Color::BLACK,
            offset: Point::new(0.0, 2.0),
            opacity: 0.23,
            blur_radius: 2.62,
            elevation: 4.0,
        }
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::sheet()
    }
}
