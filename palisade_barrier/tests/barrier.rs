// Copyright 2026 the Palisade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tests for the `palisade_barrier` crate.
//!
//! These drive a [`BarrierManager`] through multi-sample pointer gestures
//! and check clamping, the hit/held/left lifecycle, one-way passthrough,
//! nearest-blocker arbitration, and release idempotence.

use kurbo::{Line, Point};
use palisade_barrier::{
    Barrier, BarrierManager, BarrierSignal, BarrierState, Directions, MotionSample,
};

fn sample(time_ms: u64, prev: (f64, f64), proposed: (f64, f64)) -> MotionSample {
    MotionSample {
        device: 3,
        time_ms,
        prev: prev.into(),
        proposed: proposed.into(),
    }
}

fn blocking_both(line: Line) -> Barrier {
    Barrier::new(line, Directions::empty()).unwrap()
}

#[test]
fn crossing_motion_is_clamped_and_reports_a_hit() {
    let mut manager = BarrierManager::new();
    let id = manager.insert(blocking_both(Line::new((0.0, 100.0), (200.0, 100.0))));

    let out = manager.process(&sample(1000, (50.0, 90.0), (50.0, 110.0)));
    assert_eq!(out.position, Point::new(50.0, 100.0));

    assert_eq!(out.signals.len(), 1);
    let BarrierSignal::Hit(hit_id, event) = &out.signals[0] else {
        panic!("expected a hit signal, got {:?}", out.signals[0]);
    };
    assert_eq!(*hit_id, id);
    assert_ne!(event.event_id, 0);
    assert_eq!(event.dt_ms, 0);
    assert_eq!(event.device, 3);
    assert_eq!(event.position, Point::new(50.0, 100.0));
    assert!(!event.grabbed);
    assert!(!event.released);
}

#[test]
fn lateral_jitter_keeps_the_barrier_held() {
    let mut manager = BarrierManager::new();
    let id = manager.insert(blocking_both(Line::new((0.0, 100.0), (200.0, 100.0))));

    manager.process(&sample(1000, (50.0, 90.0), (50.0, 110.0)));
    let out = manager.process(&sample(1016, (50.0, 100.0), (55.0, 100.0)));

    assert_eq!(manager.state(id), Some(BarrierState::Held));
    assert!(
        !out.signals
            .iter()
            .any(|s| matches!(s, BarrierSignal::Left(..))),
        "jitter along the barrier must not dismiss the hold",
    );
    // The ongoing hold keeps reporting, with time accumulating.
    let BarrierSignal::Hit(_, event) = &out.signals[0] else {
        panic!("expected a hit signal");
    };
    assert!(event.grabbed);
    assert_eq!(event.dt_ms, 16);
}

#[test]
fn moving_away_dismisses_the_hold() {
    let mut manager = BarrierManager::new();
    let id = manager.insert(blocking_both(Line::new((0.0, 100.0), (200.0, 100.0))));

    manager.process(&sample(1000, (50.0, 90.0), (50.0, 110.0)));
    let out = manager.process(&sample(1032, (50.0, 100.0), (50.0, 50.0)));

    // Moving back up is not blocked, and the hold ends.
    assert_eq!(out.position, Point::new(50.0, 50.0));
    assert_eq!(out.signals.len(), 1);
    let BarrierSignal::Left(left_id, event) = &out.signals[0] else {
        panic!("expected a left signal, got {:?}", out.signals[0]);
    };
    assert_eq!(*left_id, id);
    assert!(!event.released);
    assert_eq!(event.dt_ms, 32);

    assert_eq!(manager.state(id), Some(BarrierState::Active));
}

#[test]
fn one_way_barrier_blocks_only_the_disallowed_sense() {
    let mut manager = BarrierManager::new();
    // Vertical barrier letting leftward motion through, blocking rightward.
    manager.insert(
        Barrier::new(
            Line::new((100.0, 0.0), (100.0, 50.0)),
            Directions::NEGATIVE_X,
        )
        .unwrap(),
    );

    let out = manager.process(&sample(1000, (90.0, 25.0), (110.0, 25.0)));
    assert_eq!(out.position, Point::new(100.0, 25.0));

    let mut manager = BarrierManager::new();
    manager.insert(
        Barrier::new(
            Line::new((100.0, 0.0), (100.0, 50.0)),
            Directions::NEGATIVE_X,
        )
        .unwrap(),
    );

    let out = manager.process(&sample(1000, (110.0, 25.0), (90.0, 25.0)));
    assert_eq!(out.position, Point::new(90.0, 25.0));
    assert!(out.signals.is_empty());
}

#[test]
fn nearest_of_two_blockers_wins() {
    let mut manager = BarrierManager::new();
    let near = manager.insert(blocking_both(Line::new((100.0, 0.0), (100.0, 50.0))));
    let far = manager.insert(blocking_both(Line::new((150.0, 0.0), (150.0, 50.0))));

    let out = manager.process(&sample(1000, (90.0, 25.0), (200.0, 25.0)));
    assert_eq!(out.position, Point::new(100.0, 25.0));

    assert_eq!(out.signals.len(), 1);
    assert_eq!(out.signals[0].barrier(), near);
    assert_eq!(manager.state(near), Some(BarrierState::Held));
    assert_eq!(manager.state(far), Some(BarrierState::Active));
}

#[test]
fn equidistant_blockers_tie_break_to_the_lower_slot() {
    let mut manager = BarrierManager::new();
    // Two coincident vertical barriers; degenerate by design, but the
    // outcome must still be deterministic.
    let first = manager.insert(blocking_both(Line::new((100.0, 0.0), (100.0, 50.0))));
    let second = manager.insert(blocking_both(Line::new((100.0, 10.0), (100.0, 40.0))));

    let out = manager.process(&sample(1000, (90.0, 25.0), (110.0, 25.0)));
    assert_eq!(out.position, Point::new(100.0, 25.0));
    assert_eq!(out.signals.len(), 1);
    assert_eq!(out.signals[0].barrier(), first);
    assert_eq!(manager.state(second), Some(BarrierState::Active));
}

#[test]
fn release_lets_the_pointer_through_and_is_idempotent() {
    let mut manager = BarrierManager::new();
    let id = manager.insert(blocking_both(Line::new((0.0, 100.0), (200.0, 100.0))));

    let out = manager.process(&sample(1000, (50.0, 90.0), (50.0, 110.0)));
    let hit_event = out.signals[0].event().clone();

    // The hold is established on the following sample.
    manager.process(&sample(1016, (50.0, 100.0), (50.0, 104.0)));
    assert_eq!(manager.state(id), Some(BarrierState::Held));

    manager.release(id, &hit_event);
    assert_eq!(manager.state(id), Some(BarrierState::Release));

    // Releasing again with the same event is a no-op.
    manager.release(id, &hit_event);
    assert_eq!(manager.state(id), Some(BarrierState::Release));

    // The next sample passes through and fires the episode tail.
    let out = manager.process(&sample(1032, (50.0, 100.0), (50.0, 110.0)));
    assert_eq!(out.position, Point::new(50.0, 110.0));
    assert_eq!(out.signals.len(), 1);
    let BarrierSignal::Left(_, event) = &out.signals[0] else {
        panic!("expected the release tail, got {:?}", out.signals[0]);
    };
    assert!(event.released);
    assert_eq!(manager.state(id), Some(BarrierState::Active));
}

#[test]
fn stale_release_is_ignored() {
    let mut manager = BarrierManager::new();
    let id = manager.insert(blocking_both(Line::new((0.0, 100.0), (200.0, 100.0))));

    let out = manager.process(&sample(1000, (50.0, 90.0), (50.0, 110.0)));
    let mut stale = **out.signals[0].event();
    stale.event_id = stale.event_id.wrapping_add(1);

    manager.process(&sample(1016, (50.0, 100.0), (50.0, 104.0)));
    assert_eq!(manager.state(id), Some(BarrierState::Held));

    manager.release(id, &stale);
    assert_eq!(manager.state(id), Some(BarrierState::Held));
}

#[test]
fn clamped_position_never_passes_the_blocking_line() {
    let pushes = [
        ((50.0, 90.0), (50.0, 101.0)),
        ((50.0, 99.0), (50.0, 500.0)),
        ((10.0, 50.0), (190.0, 150.0)),
    ];
    for (prev, proposed) in pushes {
        let mut manager = BarrierManager::new();
        manager.insert(blocking_both(Line::new((0.0, 100.0), (200.0, 100.0))));
        let out = manager.process(&sample(1000, prev, proposed));
        assert!(
            out.position.y <= 100.0,
            "proposed {proposed:?} ended past the barrier at {:?}",
            out.position,
        );
    }
}

#[test]
fn sliding_past_the_segment_end_dismisses_the_hold() {
    let mut manager = BarrierManager::new();
    let id = manager.insert(blocking_both(Line::new((0.0, 100.0), (200.0, 100.0))));

    manager.process(&sample(1000, (190.0, 90.0), (190.0, 110.0)));
    assert_eq!(manager.state(id), Some(BarrierState::Held));

    // Slide right, past x = 200, while staying on the line.
    let out = manager.process(&sample(1016, (190.0, 100.0), (230.0, 100.0)));
    assert_eq!(out.position, Point::new(230.0, 100.0));
    assert!(
        out.signals
            .iter()
            .any(|s| matches!(s, BarrierSignal::Left(..))),
        "leaving the finite extent must dismiss the hold",
    );
    assert_eq!(manager.state(id), Some(BarrierState::Active));
}
