//! Drag tracking, release decision and snap animation.

use std::rc::Rc;

use drawer_animation::Animatable;
use drawer_core::RuntimeHandle;
use drawer_foundation::{DragEvent, DragGesture, PointerEvent};
use drawer_ui_graphics::Point;

use crate::callbacks::DrawerCallbacks;
use crate::frame::DrawerFrame;
use crate::props::{CompletionPolicy, DrawerConfigError, DrawerProps, Viewport};
use crate::state::{DrawerState, ReleaseOutcome};

/// Elastic resistance for a drag that pushes past the up position.
///
/// Travel grows with the square root of the drag distance and is capped at
/// `sqrt(screen_height)`. Only upward (negative) drags overshoot; any other
/// `delta_y` yields zero.
pub fn elastic_overshoot(delta_y: f32, screen_height: f32) -> f32 {
    (-delta_y).max(0.0).sqrt().min(screen_height.sqrt())
}

/// Controller for a single two-state drawer.
///
/// Owns the tracked position of the drawer's top edge. Between the two
/// resting positions a drag moves it 1:1; above the up position it follows
/// [`elastic_overshoot`]. On release the drawer either commits to the other
/// resting state (notifying the owner) or settles back where it started.
pub struct DrawerController {
    props: DrawerProps,
    viewport: Viewport,
    callbacks: DrawerCallbacks,
    position: Animatable<Point>,
    gesture: DragGesture,
}

impl DrawerController {
    pub fn new(
        props: DrawerProps,
        viewport: Viewport,
        callbacks: DrawerCallbacks,
        runtime: RuntimeHandle,
    ) -> Result<Self, DrawerConfigError> {
        props.validate()?;
        viewport.validate()?;
        if props.resting_state().is_none() {
            log::warn!(
                "drawer mounted at y={} which is neither resting position ({} / {})",
                props.current_position.y,
                props.up_position.y,
                props.down_position.y
            );
        }
        let position = Animatable::new(props.current_position, runtime);
        Ok(Self {
            props,
            viewport,
            callbacks,
            position,
            gesture: DragGesture::new(),
        })
    }

    pub fn props(&self) -> &DrawerProps {
        &self.props
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn drawer_state(&self) -> DrawerState {
        self.props.drawer_state
    }

    /// Resting position the drawer is committed to.
    pub fn current_position(&self) -> Point {
        self.props.current_position
    }

    /// Tracked position as of the last drag sample or animation frame.
    pub fn position(&self) -> Point {
        self.position.value()
    }

    pub fn is_animating(&self) -> bool {
        self.position.is_running()
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    pub fn is_at_rest(&self) -> bool {
        !self.is_dragging() && !self.is_animating()
    }

    pub fn frame(&self) -> DrawerFrame {
        DrawerFrame::compute(&self.props, self.viewport, self.position.value().y)
    }

    /// Where a drag of `delta_y` from the resting position puts the top edge.
    pub fn tracked_y_for(&self, delta_y: f32) -> f32 {
        let current = self.props.current_position.y;
        let up = self.props.up_position.y;
        if current + delta_y > up {
            current + delta_y
        } else {
            up - elastic_overshoot(delta_y, self.viewport.height)
        }
    }

    /// Applies one drag sample and returns the tracked `y`.
    ///
    /// The value is set instantly, superseding any snap animation still in
    /// flight.
    pub fn drag_by(&mut self, delta_y: f32) -> f32 {
        let y = self.tracked_y_for(delta_y);
        let x = self.position.value().x;
        self.position.snap_to(Point::new(x, y));
        log::trace!("drawer drag dy={delta_y} -> y={y}");
        y
    }

    /// Decides what a gesture that ended after `delta_y` commits to.
    pub fn release(&mut self, delta_y: f32) -> ReleaseOutcome {
        let threshold = self.props.toggle_threshold;
        let resting_y = self.props.current_position.y;
        let outcome = if delta_y > threshold && resting_y == self.props.up_position.y {
            ReleaseOutcome::Collapsed
        } else if delta_y < -threshold && resting_y == self.props.down_position.y {
            ReleaseOutcome::Expanded
        } else {
            ReleaseOutcome::Reset
        };
        log::debug!("drawer released after dy={delta_y}: {outcome:?}");

        match outcome.committed_state() {
            Some(state) => {
                self.transition_to(state);
                self.callbacks.notify_state_set(state);
            }
            None => self.reset(),
        }
        outcome
    }

    /// Settles back to the committed resting position without notifying the
    /// owner. Calling it again while settled changes nothing.
    pub fn reset(&mut self) {
        let target = self.props.current_position;
        if !self.position.is_running() && self.position.value() == target {
            return;
        }
        self.position.animate_to(target, self.props.animation, |_| {});
    }

    /// Moves to the resting position of `state` when it differs from the
    /// committed one. The owner is not sent `on_drawer_state_set`, since the
    /// change came from the owner.
    pub fn set_drawer_state(&mut self, state: DrawerState) {
        if state == self.props.drawer_state {
            return;
        }
        log::debug!(
            "drawer state changed by owner: {:?} -> {state:?}",
            self.props.drawer_state
        );
        self.transition_to(state);
    }

    /// Replaces the owner-supplied props and reacts to what changed: a new
    /// `drawer_state` transitions to its resting position; otherwise a moved
    /// `current_position` settles there, unless a drag is in progress.
    /// Invalid props are rejected and the previous props stay in effect.
    ///
    /// A state change targets the positions in `props`, not the ones that
    /// were in effect before the call.
    pub fn set_props(&mut self, props: DrawerProps) -> Result<(), DrawerConfigError> {
        if let Err(err) = props.validate() {
            log::warn!("rejected drawer props: {err}");
            return Err(err);
        }
        let previous = std::mem::replace(&mut self.props, props);
        let state = self.props.drawer_state;
        if state != previous.drawer_state {
            log::debug!(
                "drawer state changed by owner: {:?} -> {state:?}",
                previous.drawer_state
            );
            self.transition_to(state);
        } else if self.props.current_position != previous.current_position && !self.is_dragging() {
            self.reset();
        }
        Ok(())
    }

    /// Feeds a pointer event through the drag recogniser. Returns the release
    /// decision when the event ends a gesture.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> Option<ReleaseOutcome> {
        match self.gesture.on_event(event)? {
            DragEvent::Started { .. } => None,
            DragEvent::Moved(sample) => {
                self.drag_by(sample.delta_y);
                None
            }
            DragEvent::Released(sample) => Some(self.release(sample.delta_y)),
            DragEvent::Cancelled(_) => {
                log::debug!("drawer drag cancelled; settling back");
                self.reset();
                Some(ReleaseOutcome::Reset)
            }
        }
    }

    fn transition_to(&mut self, state: DrawerState) {
        let target = self.props.resting_position(state);
        let completion = self.callbacks.completion_for(state);
        let on_settled = Rc::clone(&completion);
        self.position
            .animate_to(target, self.props.animation, move |end| {
                log::debug!("drawer transition to {state:?} ended: {end:?}");
                on_settled();
            });

        self.props.current_position = target;
        self.props.drawer_state = state;
        self.callbacks.notify_current_position(target);
        if self.props.completion_policy == CompletionPolicy::EagerAndAfterSettle {
            completion();
        }
    }
}

impl std::fmt::Debug for DrawerController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawerController")
            .field("props", &self.props)
            .field("viewport", &self.viewport)
            .field("position", &self.position)
            .field("gesture", &self.gesture)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
