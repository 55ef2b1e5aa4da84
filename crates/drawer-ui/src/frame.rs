//! Render-agnostic description of where and how to draw the drawer.

use drawer_ui_graphics::{Color, CornerRadii, Point, Rect, Shadow, Size};

use crate::props::{DrawerProps, Viewport};

/// Top corner radius used when `rounded_edges` is set.
pub const ROUNDED_EDGE_RADIUS: f32 = 20.0;

/// Stacking order, above the content the drawer slides over.
pub const DRAWER_Z_INDEX: i32 = 100;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerFrame {
    /// Full-width surface whose top edge follows the tracked position.
    pub bounds: Rect,
    pub background: Color,
    pub corner_radii: CornerRadii,
    pub shadow: Option<Shadow>,
    pub z_index: i32,
}

impl DrawerFrame {
    /// The surface is taller than the container by the maximum elastic
    /// overshoot, so pulling past the up position never shows a gap below it.
    pub(crate) fn compute(props: &DrawerProps, viewport: Viewport, top: f32) -> Self {
        Self {
            bounds: Rect::from_origin_size(
                Point::new(0.0, top),
                Size::new(
                    viewport.width,
                    props.container_height + viewport.height.sqrt(),
                ),
            ),
            background: props.background_color,
            corner_radii: if props.rounded_edges {
                CornerRadii::top(ROUNDED_EDGE_RADIUS)
            } else {
                CornerRadii::ZERO
            },
            shadow: props.shadow.then(Shadow::sheet),
            z_index: DRAWER_Z_INDEX,
        }
    }
}
