use super::*;

fn at(y: f32) -> Point {
    Point::new(10.0, y)
}

#[test]
fn press_move_release_reports_distance_from_origin() {
    let mut drag = DragGesture::new();

    assert_eq!(
        drag.on_event(&PointerEvent::down(at(300.0))),
        Some(DragEvent::Started { origin: at(300.0) })
    );
    assert!(drag.is_dragging());

    let moved = drag.on_event(&PointerEvent::moved(at(280.0)));
    assert_eq!(
        moved,
        Some(DragEvent::Moved(DragSample {
            delta_y: -20.0,
            position: at(280.0)
        }))
    );

    let moved_again = drag.on_event(&PointerEvent::moved(at(390.0)));
    assert!(matches!(
        moved_again,
        Some(DragEvent::Moved(DragSample { delta_y, .. })) if delta_y == 90.0
    ));

    let released = drag.on_event(&PointerEvent::up(at(380.0)));
    assert!(matches!(
        released,
        Some(DragEvent::Released(DragSample { delta_y, .. })) if delta_y == 80.0
    ));
    assert_eq!(drag.phase(), DragPhase::Idle);
}

#[test]
fn moves_while_idle_are_ignored() {
    let mut drag = DragGesture::new();
    let event = PointerEvent::moved(at(10.0));

    assert_eq!(drag.on_event(&event), None);
    assert_eq!(drag.on_event(&PointerEvent::up(at(10.0))), None);
    assert!(!event.is_consumed());
}

#[test]
fn drag_events_are_consumed() {
    let mut drag = DragGesture::new();
    let down = PointerEvent::down(at(0.0));
    let moved = PointerEvent::moved(at(5.0));

    drag.on_event(&down);
    drag.on_event(&moved);

    assert!(down.is_consumed());
    assert!(moved.is_consumed());
}

#[test]
fn consumed_press_does_not_start_drag() {
    let mut drag = DragGesture::new();
    let down = PointerEvent::down(at(0.0));
    down.consume();

    assert_eq!(drag.on_event(&down), None);
    assert!(!drag.is_dragging());
}

#[test]
fn second_pointer_is_ignored_while_dragging() {
    let mut drag = DragGesture::new();
    drag.on_event(&PointerEvent::down(at(100.0)).with_id(1));

    assert_eq!(drag.on_event(&PointerEvent::down(at(50.0)).with_id(2)), None);
    assert_eq!(drag.on_event(&PointerEvent::moved(at(10.0)).with_id(2)), None);
    assert_eq!(drag.on_event(&PointerEvent::down(at(50.0)).with_id(1)), None);

    let released = drag.on_event(&PointerEvent::up(at(130.0)).with_id(1));
    assert!(matches!(
        released,
        Some(DragEvent::Released(DragSample { delta_y, .. })) if delta_y == 30.0
    ));
}

#[test]
fn cancel_returns_to_idle_with_last_sample() {
    let mut drag = DragGesture::new();
    drag.on_event(&PointerEvent::down(at(100.0)));
    drag.on_event(&PointerEvent::moved(at(140.0)));

    let cancelled = drag.on_event(&PointerEvent::cancel(at(150.0)));

    assert!(matches!(
        cancelled,
        Some(DragEvent::Cancelled(DragSample { delta_y, .. })) if delta_y == 50.0
    ));
    assert!(!drag.is_dragging());
}

#[test]
fn reset_abandons_drag() {
    let mut drag = DragGesture::new();
    drag.on_event(&PointerEvent::down(at(100.0)));
    drag.reset();

    assert_eq!(drag.on_event(&PointerEvent::moved(at(120.0))), None);
}
