//! Vertical drag recogniser.
//!
//! Turns a press/move/release pointer stream into drag samples measured from
//! the point where the press started. Every press is accepted as a drag; there
//! is no touch slop, so the first move already reports its full distance.

use drawer_ui_graphics::Point;

use crate::pointer::{PointerEvent, PointerEventKind, PointerId};

/// Movement since the gesture started.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSample {
    /// Signed vertical distance from the press position; negative is upward.
    pub delta_y: f32,
    /// Pointer position that produced this sample.
    pub position: Point,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragEvent {
    Started { origin: Point },
    Moved(DragSample),
    Released(DragSample),
    /// The platform took the pointer away; the last known sample is reported.
    Cancelled(DragSample),
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging {
        pointer: PointerId,
        origin: Point,
        last: Point,
    },
}

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    phase: DragPhase,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Feeds one pointer event through the state machine.
    ///
    /// Events that do not fit the current phase (a move while idle, a second
    /// finger while dragging, an already consumed press) are ignored and
    /// return `None`. Events that advance the drag are consumed.
    pub fn on_event(&mut self, event: &PointerEvent) -> Option<DragEvent> {
        let next = match (self.phase, event.kind) {
            (DragPhase::Idle, PointerEventKind::Down) if !event.is_consumed() => {
                self.phase = DragPhase::Dragging {
                    pointer: event.id,
                    origin: event.position,
                    last: event.position,
                };
                DragEvent::Started {
                    origin: event.position,
                }
            }
            (DragPhase::Dragging { pointer, origin, .. }, kind) if pointer == event.id => {
                let sample = DragSample {
                    delta_y: event.position.y - origin.y,
                    position: event.position,
                };
                match kind {
                    PointerEventKind::Move => {
                        self.phase = DragPhase::Dragging {
                            pointer,
                            origin,
                            last: event.position,
                        };
                        DragEvent::Moved(sample)
                    }
                    PointerEventKind::Up => {
                        self.phase = DragPhase::Idle;
                        DragEvent::Released(sample)
                    }
                    PointerEventKind::Cancel => {
                        self.phase = DragPhase::Idle;
                        DragEvent::Cancelled(sample)
                    }
                    PointerEventKind::Down => return None,
                }
            }
            _ => return None,
        };
        log::trace!("drag gesture: {next:?}");
        event.consume();
        Some(next)
    }
}

#[cfg(test)]
#[path = "../tests/drag_tests.rs"]
mod tests;
