use super::*;
use crate::{DefaultScheduler, Runtime, RuntimeScheduler};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct CountingScheduler {
    requests: AtomicUsize,
}

impl RuntimeScheduler for CountingScheduler {
    fn schedule_frame(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn frame_callback_runs_once_with_frame_time() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let clock = runtime.frame_clock();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_in_callback = Rc::clone(&seen);

    let _registration = clock.with_frame_nanos(move |time| {
        seen_in_callback.borrow_mut().push(time);
    });
    assert!(runtime.needs_frame());

    runtime.drain_frame_callbacks(16_000_000);
    runtime.drain_frame_callbacks(32_000_000);

    assert_eq!(seen.borrow().as_slice(), &[16_000_000]);
    assert!(!runtime.needs_frame());
}

#[test]
fn dropping_registration_cancels_callback() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let clock = runtime.frame_clock();
    let fired = Rc::new(Cell::new(false));
    let fired_flag = Rc::clone(&fired);

    let registration = clock.with_frame_nanos(move |_| fired_flag.set(true));
    drop(registration);
    runtime.drain_frame_callbacks(0);

    assert!(!fired.get());
    assert!(!runtime.needs_frame());
}

#[test]
fn explicit_cancel_removes_only_that_callback() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let clock = runtime.frame_clock();
    let first = Rc::new(Cell::new(false));
    let second = Rc::new(Cell::new(false));
    let first_flag = Rc::clone(&first);
    let second_flag = Rc::clone(&second);

    let cancelled = clock.with_frame_nanos(move |_| first_flag.set(true));
    let _kept = clock.with_frame_nanos(move |_| second_flag.set(true));
    cancelled.cancel();
    runtime.drain_frame_callbacks(0);

    assert!(!first.get());
    assert!(second.get());
}

#[test]
fn callback_can_register_for_next_frame() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let clock = runtime.frame_clock();
    let times = Rc::new(RefCell::new(Vec::new()));
    let keep_alive = Rc::new(RefCell::new(None::<FrameCallbackRegistration>));

    let next_clock = clock.clone();
    let times_in_first = Rc::clone(&times);
    let keep_alive_in_first = Rc::clone(&keep_alive);
    let _first = clock.with_frame_millis(move |first| {
        times_in_first.borrow_mut().push(first);
        let times = Rc::clone(&times_in_first);
        let registration = next_clock.with_frame_millis(move |second| {
            times.borrow_mut().push(second);
        });
        keep_alive_in_first.borrow_mut().replace(registration);
    });

    runtime.drain_frame_callbacks(16_000_000);
    assert!(runtime.needs_frame());
    runtime.drain_frame_callbacks(33_000_000);

    assert_eq!(times.borrow().as_slice(), &[16, 33]);
}

#[test]
fn registering_requests_a_frame_from_scheduler() {
    let scheduler = Arc::new(CountingScheduler::default());
    let runtime = Runtime::new(scheduler.clone());
    let clock = runtime.frame_clock();

    let _a = clock.with_frame_nanos(|_| {});
    let _b = clock.with_frame_nanos(|_| {});

    assert_eq!(scheduler.requests.load(Ordering::SeqCst), 2);
}

#[test]
fn registration_after_runtime_drop_is_inactive() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let handle = runtime.handle();
    drop(runtime);

    let registration = handle.frame_clock().with_frame_nanos(|_| {});

    assert!(!registration.is_active());
    assert!(!handle.is_alive());
    assert!(!handle.has_frame_callbacks());
}
