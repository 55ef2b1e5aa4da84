//! Records owner callback invocations in the order they happen.

use std::cell::RefCell;
use std::rc::Rc;

use drawer_ui::{DrawerCallbacks, DrawerState};
use drawer_ui_graphics::Point;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawerCall {
    Collapsed,
    Expanded,
    DrawerStateSet(DrawerState),
    CurrentPositionSet(Point),
}

#[derive(Clone, Default, Debug)]
pub struct CallbackRecorder {
    calls: Rc<RefCell<Vec<DrawerCall>>>,
}

impl CallbackRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callbacks that append to this recorder.
    pub fn callbacks(&self) -> DrawerCallbacks {
        let collapsed = Rc::clone(&self.calls);
        let expanded = Rc::clone(&self.calls);
        let state_set = Rc::clone(&self.calls);
        let position_set = Rc::clone(&self.calls);
        DrawerCallbacks::new()
            .on_collapsed(move || collapsed.borrow_mut().push(DrawerCall::Collapsed))
            .on_expanded(move || expanded.borrow_mut().push(DrawerCall::Expanded))
            .on_drawer_state_set(move |state| {
                state_set
                    .borrow_mut()
                    .push(DrawerCall::DrawerStateSet(state))
            })
            .set_current_position(move |position| {
                position_set
                    .borrow_mut()
                    .push(DrawerCall::CurrentPositionSet(position))
            })
    }

    pub fn calls(&self) -> Vec<DrawerCall> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, call: &DrawerCall) -> usize {
        self.calls.borrow().iter().filter(|c| *c == call).count()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.borrow().is_empty()
    }

    /// Last state reported through `on_drawer_state_set`.
    pub fn last_state_set(&self) -> Option<DrawerState> {
        self.calls.borrow().iter().rev().find_map(|call| match call {
            DrawerCall::DrawerStateSet(state) => Some(*state),
            _ => None,
        })
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}
