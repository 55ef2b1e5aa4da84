use drawer_ui_graphics::Point;
use std::cell::Cell;
use std::rc::Rc;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Pointer event with consumption tracking.
///
/// A handler that turns the event into a gesture marks it consumed so that
/// other handlers sharing the event (clicks on drawer content, for example)
/// can stand down.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            id: 0,
            kind,
            position,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn down(position: Point) -> Self {
        Self::new(PointerEventKind::Down, position)
    }

    pub fn moved(position: Point) -> Self {
        Self::new(PointerEventKind::Move, position)
    }

    pub fn up(position: Point) -> Self {
        Self::new(PointerEventKind::Up, position)
    }

    pub fn cancel(position: Point) -> Self {
        Self::new(PointerEventKind::Cancel, position)
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
