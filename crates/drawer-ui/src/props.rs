//! Owner-supplied drawer configuration.

use std::fmt;

use drawer_animation::{AnimationSpec, Easing};
use drawer_ui_graphics::{Color, ColorParseError, Point};

use crate::state::DrawerState;

/// Drag distance needed to commit a state change when none is configured.
pub const DEFAULT_TOGGLE_THRESHOLD: f32 = 50.0;

/// Snap timing: half a second on the mirrored ease-in curve, the defaults of
/// a mobile timing animation.
pub const DEFAULT_TRANSITION: AnimationSpec = AnimationSpec {
    duration_millis: 500,
    easing: Easing::MirroredEaseIn,
    delay_millis: 0,
};

/// When the completion callback of a transition (`on_collapsed` /
/// `on_expanded`) runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CompletionPolicy {
    /// Once, when the snap animation ends.
    #[default]
    AfterSettle,
    /// Once synchronously when the transition starts and again when the
    /// animation ends. Kept for owners written against that behavior.
    EagerAndAfterSettle,
}

/// Screen dimensions, read once by the host and handed to the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<(), DrawerConfigError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if valid(self.width) && valid(self.height) {
            Ok(())
        } else {
            Err(DrawerConfigError::NonPositiveViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Drawer configuration. Positions are in the host's coordinate space where
/// `y` grows downward, so the up position has the smaller `y`.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawerProps {
    /// Resting position the drawer currently sits at.
    pub current_position: Point,
    /// Expanded resting position.
    pub up_position: Point,
    /// Collapsed resting position.
    pub down_position: Point,
    pub toggle_threshold: f32,
    pub drawer_state: DrawerState,
    pub container_height: f32,
    pub background_color: Color,
    pub rounded_edges: bool,
    pub shadow: bool,
    pub animation: AnimationSpec,
    pub completion_policy: CompletionPolicy,
}

impl DrawerProps {
    /// Props for a drawer resting collapsed at `down_position`, tall enough to
    /// cover the travel between the two positions.
    pub fn new(up_position: Point, down_position: Point) -> Self {
        Self {
            current_position: down_position,
            up_position,
            down_position,
            toggle_threshold: DEFAULT_TOGGLE_THRESHOLD,
            drawer_state: DrawerState::Collapsed,
            container_height: (down_position.y - up_position.y).max(0.0),
            background_color: Color::WHITE,
            rounded_edges: false,
            shadow: false,
            animation: DEFAULT_TRANSITION,
            completion_policy: CompletionPolicy::default(),
        }
    }

    /// Start resting in `state`, at the matching position.
    pub fn resting_in(mut self, state: DrawerState) -> Self {
        self.drawer_state = state;
        self.current_position = self.resting_position(state);
        self
    }

    pub fn with_current_position(mut self, position: Point) -> Self {
        self.current_position = position;
        self
    }

    pub fn with_drawer_state(mut self, state: DrawerState) -> Self {
        self.drawer_state = state;
        self
    }

    pub fn with_toggle_threshold(mut self, threshold: f32) -> Self {
        self.toggle_threshold = threshold;
        self
    }

    pub fn with_container_height(mut self, height: f32) -> Self {
        self.container_height = height;
        self
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Background from a style-sheet color string such as `"#ffffff"`.
    pub fn with_background_css(mut self, color: &str) -> Result<Self, ColorParseError> {
        self.background_color = Color::from_css(color)?;
        Ok(self)
    }

    pub fn with_rounded_edges(mut self, rounded: bool) -> Self {
        self.rounded_edges = rounded;
        self
    }

    pub fn with_shadow(mut self, shadow: bool) -> Self {
        self.shadow = shadow;
        self
    }

    pub fn with_animation(mut self, animation: AnimationSpec) -> Self {
        self.animation = animation;
        self
    }

    pub fn with_completion_policy(mut self, policy: CompletionPolicy) -> Self {
        self.completion_policy = policy;
        self
    }

    pub fn resting_position(&self, state: DrawerState) -> Point {
        match state {
            DrawerState::Collapsed => self.down_position,
            DrawerState::Expanded => self.up_position,
        }
    }

    /// The state whose resting position `current_position` sits at, if any.
    pub fn resting_state(&self) -> Option<DrawerState> {
        if self.current_position.y == self.up_position.y {
            Some(DrawerState::Expanded)
        } else if self.current_position.y == self.down_position.y {
            Some(DrawerState::Collapsed)
        } else {
            None
        }
    }

    pub fn validate(&self) -> Result<(), DrawerConfigError> {
        let points = [
            ("current_position", self.current_position),
            ("up_position", self.up_position),
            ("down_position", self.down_position),
        ];
        for (field, point) in points {
            if !point.is_finite() {
                return Err(DrawerConfigError::NonFinite { field });
            }
        }
        let scalars = [
            ("toggle_threshold", self.toggle_threshold),
            ("container_height", self.container_height),
        ];
        for (field, value) in scalars {
            if !value.is_finite() {
                return Err(DrawerConfigError::NonFinite { field });
            }
        }
        if self.toggle_threshold < 0.0 {
            return Err(DrawerConfigError::NegativeThreshold(self.toggle_threshold));
        }
        if self.up_position.y >= self.down_position.y {
            return Err(DrawerConfigError::InvertedBounds {
                up: self.up_position.y,
                down: self.down_position.y,
            });
        }
        if self.container_height < 0.0 {
            return Err(DrawerConfigError::NegativeContainerHeight(
                self.container_height,
            ));
        }
        if self.animation.total_nanos().is_none() {
            return Err(DrawerConfigError::AnimationTooLong {
                millis: self.animation.total_millis(),
            });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawerConfigError {
    NonFinite { field: &'static str },
    NegativeThreshold(f32),
    InvertedBounds { up: f32, down: f32 },
    NonPositiveViewport { width: f32, height: f32 },
    NegativeContainerHeight(f32),
    /// Delay plus duration does not fit the frame clock's nanosecond range.
    AnimationTooLong { millis: u64 },
}

impl fmt::Display for DrawerConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawerConfigError::NonFinite { field } => write!(f, "{field} is not finite"),
            DrawerConfigError::NegativeThreshold(value) => {
                write!(f, "toggle threshold {value} is negative")
            }
            DrawerConfigError::InvertedBounds { up, down } => {
                write!(f, "up position y {up} must be above down position y {down}")
            }
            DrawerConfigError::NonPositiveViewport { width, height } => {
                write!(f, "viewport {width}x{height} must be positive")
            }
            DrawerConfigError::NegativeContainerHeight(value) => {
                write!(f, "container height {value} is negative")
            }
            DrawerConfigError::AnimationTooLong { millis } => {
                write!(f, "animation of {millis}ms is too long for the frame clock")
            }
        }
    }
}

impl std::error::Error for DrawerConfigError {}

#[cfg(test)]
#[path = "tests/props_tests.rs"]
mod tests;
