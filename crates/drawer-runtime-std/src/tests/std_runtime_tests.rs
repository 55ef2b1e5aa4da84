use super::StdRuntime;
use drawer_core::Clock;
use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

/// Clock whose time only moves when a test advances it.
#[derive(Clone, Debug, Default)]
struct ManualClock {
    now_nanos: Arc<AtomicU64>,
}

impl ManualClock {
    fn advance(&self, nanos: u64) {
        self.now_nanos.fetch_add(nanos, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    type Instant = u64;

    fn now(&self) -> u64 {
        self.now_nanos.load(Ordering::SeqCst)
    }

    fn elapsed_nanos(&self, since: u64) -> u64 {
        self.now().saturating_sub(since)
    }
}

#[test]
fn registering_frame_callback_requests_frame() {
    let runtime = StdRuntime::new();
    assert!(!runtime.take_frame_request());

    let _registration = runtime.frame_clock().with_frame_nanos(|_| {});

    assert!(runtime.take_frame_request(), "registration should request a frame");
    assert!(!runtime.take_frame_request(), "request flag is consumed");
    assert!(runtime.needs_frame());
}

#[test]
fn frame_waker_is_invoked_on_schedule() {
    let runtime = StdRuntime::new();
    let wakes = Arc::new(AtomicUsize::new(0));
    let wakes_in_waker = Arc::clone(&wakes);
    runtime.set_frame_waker(move || {
        wakes_in_waker.fetch_add(1, Ordering::SeqCst);
    });

    let _first = runtime.frame_clock().with_frame_nanos(|_| {});
    runtime.clear_frame_waker();
    let _second = runtime.frame_clock().with_frame_nanos(|_| {});

    assert_eq!(wakes.load(Ordering::SeqCst), 1);
}

#[test]
fn pump_frame_uses_monotonic_time() {
    let runtime = StdRuntime::new();
    let observed = Rc::new(Cell::new(None::<u64>));
    let observed_in_callback = Rc::clone(&observed);
    let _registration = runtime
        .frame_clock()
        .with_frame_nanos(move |time| observed_in_callback.set(Some(time)));

    let first = runtime.pump_frame();
    let second = runtime.pump_frame();

    assert_eq!(observed.get(), Some(first));
    assert!(second >= first);
    assert!(!runtime.needs_frame());
}

#[test]
fn pump_frame_stamps_frames_from_the_runtime_clock() {
    let clock = ManualClock::default();
    clock.advance(5_000);
    let runtime = StdRuntime::with_clock(clock.clone());
    let observed = Rc::new(Cell::new(None::<u64>));
    let observed_in_callback = Rc::clone(&observed);
    let _registration = runtime
        .frame_clock()
        .with_frame_nanos(move |time| observed_in_callback.set(Some(time)));

    clock.advance(16_000_000);

    assert_eq!(runtime.pump_frame(), 16_000_000, "measured from creation");
    assert_eq!(observed.get(), Some(16_000_000));
}
