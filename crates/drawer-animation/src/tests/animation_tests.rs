use super::*;

use drawer_core::{DefaultScheduler, Runtime};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

const FRAME_NANOS: u64 = 16_666_667;

fn runtime() -> Runtime {
    Runtime::new(Arc::new(DefaultScheduler))
}

#[test]
fn tween_interpolates_over_time_and_lands_on_target() {
    let runtime = runtime();
    let value = Animatable::new(0.0f32, runtime.handle());
    let ended = Rc::new(RefCell::new(Vec::new()));
    let ended_log = Rc::clone(&ended);

    value.animate_to(1.0, AnimationSpec::linear(100), move |end| {
        ended_log.borrow_mut().push(end)
    });
    assert!(value.is_running());
    assert_eq!(value.value(), 0.0, "nothing moves before the first frame");

    let mut frame_time = 0u64;
    let mut saw_midpoint = false;
    for _ in 0..32 {
        if !runtime.needs_frame() {
            break;
        }
        runtime.drain_frame_callbacks(frame_time);
        frame_time += FRAME_NANOS;
        let sample = value.value();
        if sample > 0.0 && sample < 1.0 {
            saw_midpoint = true;
        }
    }

    assert!(saw_midpoint, "animation should report intermediate values");
    assert_eq!(value.value(), 1.0);
    assert!(!value.is_running());
    assert_eq!(ended.borrow().as_slice(), &[AnimationEnd::Finished]);
}

#[test]
fn linear_tween_samples_match_elapsed_fraction() {
    let runtime = runtime();
    let value = Animatable::new(100.0f32, runtime.handle());
    value.animate_to(200.0, AnimationSpec::linear(100), |_| {});

    runtime.drain_frame_callbacks(1_000_000_000);
    assert_eq!(value.value(), 100.0, "first frame anchors the start time");

    runtime.drain_frame_callbacks(1_050_000_000);
    assert!((value.value() - 150.0).abs() < 1e-3);

    runtime.drain_frame_callbacks(1_100_000_000);
    assert_eq!(value.value(), 200.0);
    assert!(!runtime.needs_frame());
}

#[test]
fn delay_holds_value_before_starting() {
    let runtime = runtime();
    let value = Animatable::new(0.0f32, runtime.handle());
    value.animate_to(10.0, AnimationSpec::linear(100).with_delay(50), |_| {});

    runtime.drain_frame_callbacks(0);
    runtime.drain_frame_callbacks(40_000_000);
    assert_eq!(value.value(), 0.0);

    runtime.drain_frame_callbacks(100_000_000);
    assert!((value.value() - 5.0).abs() < 1e-3);

    runtime.drain_frame_callbacks(150_000_000);
    assert_eq!(value.value(), 10.0);
}

#[test]
fn zero_duration_settles_on_first_frame() {
    let runtime = runtime();
    let value = Animatable::new(0.0f32, runtime.handle());
    let finished = Rc::new(Cell::new(false));
    let finished_flag = Rc::clone(&finished);

    value.animate_to(3.0, AnimationSpec::linear(0), move |end| {
        finished_flag.set(end.is_finished())
    });
    runtime.drain_frame_callbacks(0);

    assert_eq!(value.value(), 3.0);
    assert!(finished.get());
}

#[test]
fn retarget_mid_flight_starts_from_current_value() {
    let runtime = runtime();
    let value = Animatable::new(0.0f32, runtime.handle());
    let ends = Rc::new(RefCell::new(Vec::new()));

    let first_log = Rc::clone(&ends);
    value.animate_to(100.0, AnimationSpec::linear(100), move |end| {
        first_log.borrow_mut().push(("first", end))
    });
    runtime.drain_frame_callbacks(0);
    runtime.drain_frame_callbacks(50_000_000);
    let midway = value.value();
    assert!((midway - 50.0).abs() < 1e-3);

    let second_log = Rc::clone(&ends);
    value.animate_to(0.0, AnimationSpec::linear(100), move |end| {
        second_log.borrow_mut().push(("second", end))
    });
    assert_eq!(value.target(), 0.0);
    assert_eq!(
        ends.borrow().as_slice(),
        &[("first", AnimationEnd::Interrupted)]
    );

    runtime.drain_frame_callbacks(60_000_000);
    assert_eq!(value.value(), midway, "new tween restarts from where the old one was");
    runtime.drain_frame_callbacks(160_000_000);

    assert_eq!(value.value(), 0.0);
    assert_eq!(
        ends.borrow().as_slice(),
        &[
            ("first", AnimationEnd::Interrupted),
            ("second", AnimationEnd::Finished)
        ]
    );
}

#[test]
fn snap_interrupts_running_animation() {
    let runtime = runtime();
    let value = Animatable::new(0.0f32, runtime.handle());
    let end = Rc::new(Cell::new(None));
    let end_slot = Rc::clone(&end);

    value.animate_to(100.0, AnimationSpec::linear(100), move |e| end_slot.set(Some(e)));
    runtime.drain_frame_callbacks(0);
    value.snap_to(42.0);

    assert_eq!(end.get(), Some(AnimationEnd::Interrupted));
    assert_eq!(value.value(), 42.0);
    assert_eq!(value.target(), 42.0);
    assert!(!value.is_running());
    assert!(!runtime.needs_frame());

    runtime.drain_frame_callbacks(200_000_000);
    assert_eq!(value.value(), 42.0);
}

#[test]
fn point_lerp_moves_both_axes() {
    let from = Point::new(0.0, 100.0);
    let to = Point::new(10.0, 500.0);
    assert_eq!(from.lerp(&to, 0.5), Point::new(5.0, 300.0));
    assert_eq!(from.lerp(&to, 0.0), from);
    assert_eq!(from.lerp(&to, 1.0), to);
}

#[test]
fn animatable_outliving_runtime_stays_put() {
    let runtime = runtime();
    let value = Animatable::new(1.0f32, runtime.handle());
    drop(runtime);

    value.animate_to(2.0, AnimationSpec::linear(10), |_| {});

    assert_eq!(value.value(), 1.0);
    assert_eq!(value.target(), 2.0);
}

#[test]
fn huge_durations_saturate_instead_of_overflowing() {
    let runtime = runtime();
    let value = Animatable::new(0.0f32, runtime.handle());

    value.animate_to(1.0, AnimationSpec::linear(u64::MAX / 1_000).with_delay(u64::MAX), |_| {});
    runtime.drain_frame_callbacks(0);
    runtime.drain_frame_callbacks(u64::MAX - 1);

    assert!(value.is_running(), "still inside the saturated delay");
    assert_eq!(value.value(), 0.0);

    value.animate_to(1.0, AnimationSpec::linear(u64::MAX / 1_000), |_| {});
    runtime.drain_frame_callbacks(0);
    runtime.drain_frame_callbacks(u64::MAX / 2);

    let halfway = value.value();
    assert!(halfway > 0.4 && halfway < 0.6, "got {halfway}");
}

#[test]
fn total_nanos_reports_overflow() {
    assert_eq!(AnimationSpec::linear(500).total_nanos(), Some(500_000_000));
    assert_eq!(AnimationSpec::linear(u64::MAX / 1_000).total_nanos(), None);
    assert_eq!(AnimationSpec::linear(u64::MAX).with_delay(1).total_millis(), u64::MAX);
}

#[test]
fn easing_linear_is_identity() {
    assert_eq!(Easing::LinearEasing.transform(0.0), 0.0);
    assert_eq!(Easing::LinearEasing.transform(0.5), 0.5);
    assert_eq!(Easing::LinearEasing.transform(1.0), 1.0);
}

#[test]
fn easing_curves_hit_their_endpoints() {
    let easings = [
        Easing::LinearEasing,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::MirroredEaseIn,
        Easing::FastOutSlowInEasing,
        Easing::LinearOutSlowInEasing,
        Easing::FastOutLinearEasing,
        Easing::CubicBezier(0.25, 0.1, 0.25, 1.0),
    ];

    for easing in easings {
        assert!(easing.transform(0.0).abs() < 0.01, "start ~0 for {easing:?}");
        assert!((easing.transform(1.0) - 1.0).abs() < 0.01, "end ~1 for {easing:?}");
    }
}

#[test]
fn ease_in_out_is_symmetric() {
    let early = Easing::EaseInOut.transform(0.25);
    let late = Easing::EaseInOut.transform(0.75);
    assert!((early + late - 1.0).abs() < 1e-3);
    assert!((Easing::EaseInOut.transform(0.5) - 0.5).abs() < 1e-3);
    assert!(early < 0.25, "ease-in-out starts slower than linear");
}

#[test]
fn mirrored_ease_in_folds_ease_in_around_midpoint() {
    let easing = Easing::MirroredEaseIn;
    let half_ease_in = Easing::EaseIn.transform(0.5) / 2.0;

    assert!((easing.transform(0.25) - half_ease_in).abs() < 1e-6);
    assert!((easing.transform(0.75) - (1.0 - half_ease_in)).abs() < 1e-6);
    assert_eq!(easing.transform(0.5), 0.5);
    assert_eq!(easing.transform(0.0), 0.0);
    assert_eq!(easing.transform(1.0), 1.0);
    assert!(
        (easing.transform(0.25) - Easing::EaseInOut.transform(0.25)).abs() > 0.01,
        "distinct from css ease-in-out"
    );
}

#[test]
fn animation_spec_default_has_reasonable_values() {
    let spec = AnimationSpec::default();
    assert_eq!(spec.duration_millis, 300);
    assert_eq!(spec.easing, Easing::FastOutSlowInEasing);
    assert_eq!(spec.delay_millis, 0);
    assert_eq!(spec.with_delay(20).total_millis(), 320);
}
