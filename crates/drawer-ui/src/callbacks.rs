use std::fmt;
use std::rc::Rc;

use drawer_ui_graphics::Point;

use crate::state::DrawerState;

/// Owner callbacks. Unset callbacks are no-ops.
///
/// Callbacks run synchronously on the UI thread, from inside controller
/// calls or frame drains. They must not call back into the controller that
/// invoked them.
#[derive(Clone)]
pub struct DrawerCallbacks {
    on_collapsed: Rc<dyn Fn()>,
    on_expanded: Rc<dyn Fn()>,
    on_drawer_state_set: Rc<dyn Fn(DrawerState)>,
    set_current_position: Rc<dyn Fn(Point)>,
}

impl DrawerCallbacks {
    pub fn new() -> Self {
        Self {
            on_collapsed: Rc::new(|| {}),
            on_expanded: Rc::new(|| {}),
            on_drawer_state_set: Rc::new(|_| {}),
            set_current_position: Rc::new(|_| {}),
        }
    }

    pub fn on_collapsed(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_collapsed = Rc::new(callback);
        self
    }

    pub fn on_expanded(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_expanded = Rc::new(callback);
        self
    }

    /// Told which state a release committed to.
    pub fn on_drawer_state_set(mut self, callback: impl Fn(DrawerState) + 'static) -> Self {
        self.on_drawer_state_set = Rc::new(callback);
        self
    }

    /// Told the new resting position as soon as a transition starts.
    pub fn set_current_position(mut self, callback: impl Fn(Point) + 'static) -> Self {
        self.set_current_position = Rc::new(callback);
        self
    }

    /// The completion callback for a transition into `state`.
    pub(crate) fn completion_for(&self, state: DrawerState) -> Rc<dyn Fn()> {
        match state {
            DrawerState::Collapsed => Rc::clone(&self.on_collapsed),
            DrawerState::Expanded => Rc::clone(&self.on_expanded),
        }
    }

    pub(crate) fn notify_state_set(&self, state: DrawerState) {
        (self.on_drawer_state_set)(state);
    }

    pub(crate) fn notify_current_position(&self, position: Point) {
        (self.set_current_position)(position);
    }
}

impl Default for DrawerCallbacks {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DrawerCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawerCallbacks").finish_non_exhaustive()
    }
}
