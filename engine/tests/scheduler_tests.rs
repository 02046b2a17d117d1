//! Scheduler Tests - Pause/Resume Registry and Dispatch
//!
//! Tests for the timer/update registry: pause and resume by target, the
//! min-priority threshold rules, deferred removal, and dispatch behavior.

use std::cell::RefCell;
use std::rc::Rc;

use ember2d_runtime::scheduler::{
    PRIORITY_SYSTEM, REPEAT_FOREVER, Scheduler, TargetId, Timer, UpdateCallback,
};

fn noop_update() -> UpdateCallback {
    Box::new(|_| {})
}

fn noop_timer(target: TargetId, interval: f32) -> Timer {
    Timer::with_interval(target, Box::new(|_| {}), interval)
}

fn target(raw: u64) -> TargetId {
    TargetId::from_raw(raw)
}

// ============================================================================
// Pause Queries
// ============================================================================

#[test]
fn test_unregistered_target_is_never_paused() {
    let mut scheduler = Scheduler::new();

    assert!(!scheduler.is_target_paused(target(1)));

    // Registrations for other targets change nothing
    scheduler.schedule(target(2), noop_timer(target(2), 0.5), false);
    scheduler.schedule_update(target(3), 1, false, noop_update());
    assert!(!scheduler.is_target_paused(target(1)));

    // Even a paused registry keeps reporting false for strangers
    scheduler.pause_all_targets();
    assert!(!scheduler.is_target_paused(target(1)));
}

#[test]
fn test_registered_but_running_target_is_not_paused() {
    let mut scheduler = Scheduler::new();
    scheduler.schedule(target(1), noop_timer(target(1), 0.5), false);
    scheduler.schedule_update(target(2), 0, false, noop_update());

    assert!(!scheduler.is_target_paused(target(1)));
    assert!(!scheduler.is_target_paused(target(2)));
}

#[test]
fn test_pause_target_covers_both_tables() {
    let mut scheduler = Scheduler::new();
    // Target 1 has both a timer and an update entry
    scheduler.schedule(target(1), noop_timer(target(1), 0.5), false);
    scheduler.schedule_update(target(1), 0, false, noop_update());

    scheduler.pause_target(target(1));
    assert!(scheduler.is_target_paused(target(1)));

    scheduler.resume_target(target(1));
    assert!(!scheduler.is_target_paused(target(1)));
}

// ============================================================================
// Pause-All and the Min-Priority Threshold
// ============================================================================

#[test]
fn test_pause_all_targets_pauses_everything() {
    let mut scheduler = Scheduler::new();
    scheduler.schedule(target(1), noop_timer(target(1), 0.5), false);
    scheduler.schedule_update(target(2), -5, false, noop_update());
    scheduler.schedule_update(target(3), 0, false, noop_update());
    scheduler.schedule_update(target(4), 7, false, noop_update());

    let paused = scheduler.pause_all_targets();

    // One identity per distinct registered target
    assert_eq!(paused.len(), 4);
    for raw in 1..=4 {
        assert!(paused.contains(&target(raw)));
        assert!(scheduler.is_target_paused(target(raw)));
    }
}

#[test]
fn test_pause_all_counts_dual_registration_once() {
    let mut scheduler = Scheduler::new();
    scheduler.schedule(target(1), noop_timer(target(1), 0.5), false);
    scheduler.schedule_update(target(1), 3, false, noop_update());

    let paused = scheduler.pause_all_targets();
    assert_eq!(paused.len(), 1);
}

#[test]
fn test_min_priority_zero_spares_negative_bucket() {
    let mut scheduler = Scheduler::new();
    scheduler.schedule_update(target(1), -2, false, noop_update());
    scheduler.schedule_update(target(2), 0, false, noop_update());
    scheduler.schedule_update(target(3), 4, false, noop_update());

    let paused = scheduler.pause_all_targets_with_min_priority(0);

    assert!(!scheduler.is_target_paused(target(1)));
    assert!(scheduler.is_target_paused(target(2)));
    assert!(scheduler.is_target_paused(target(3)));
    assert_eq!(paused.len(), 2);
    assert!(!paused.contains(&target(1)));
}

#[test]
fn test_negative_min_priority_filters_negative_bucket() {
    let mut scheduler = Scheduler::new();
    scheduler.schedule_update(target(1), -10, false, noop_update());
    scheduler.schedule_update(target(2), -3, false, noop_update());
    scheduler.schedule_update(target(3), 0, false, noop_update());

    let paused = scheduler.pause_all_targets_with_min_priority(-5);

    // -10 is below the threshold, -3 and 0 are not
    assert!(!scheduler.is_target_paused(target(1)));
    assert!(scheduler.is_target_paused(target(2)));
    assert!(scheduler.is_target_paused(target(3)));
    assert_eq!(paused.len(), 2);
}

#[test]
fn test_min_priority_always_pauses_timers() {
    let mut scheduler = Scheduler::new();
    scheduler.schedule(target(1), noop_timer(target(1), 0.5), false);

    // Timer slots are paused regardless of how high the threshold sits
    let paused = scheduler.pause_all_targets_with_min_priority(100);
    assert!(scheduler.is_target_paused(target(1)));
    assert!(paused.contains(&target(1)));
}

#[test]
fn test_pause_all_with_system_priority_equals_pause_all() {
    let mut scheduler = Scheduler::new();
    scheduler.schedule_update(target(1), -10, false, noop_update());
    scheduler.schedule_update(target(2), 10, false, noop_update());

    let paused = scheduler.pause_all_targets_with_min_priority(PRIORITY_SYSTEM);
    assert_eq!(paused.len(), 2);
    assert!(scheduler.is_target_paused(target(1)));
    assert!(scheduler.is_target_paused(target(2)));
}

// ============================================================================
// Resume
// ============================================================================

#[test]
fn test_resume_undoes_pause_all() {
    let mut scheduler = Scheduler::new();
    scheduler.schedule(target(1), noop_timer(target(1), 0.5), false);
    scheduler.schedule_update(target(2), -1, false, noop_update());
    scheduler.schedule_update(target(3), 2, false, noop_update());

    let paused = scheduler.pause_all_targets();
    scheduler.resume_targets(&paused);

    for raw in 1..=3 {
        assert!(!scheduler.is_target_paused(target(raw)));
    }
}

#[test]
fn test_resume_tolerates_unknown_targets() {
    let mut scheduler = Scheduler::new();
    scheduler.schedule_update(target(1), 0, false, noop_update());

    let mut paused = scheduler.pause_all_targets();
    paused.insert(target(99)); // never registered

    scheduler.resume_targets(&paused);
    assert!(!scheduler.is_target_paused(target(1)));
    assert!(!scheduler.is_target_paused(target(99)));
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_paused_update_entries_do_not_run() {
    let mut scheduler = Scheduler::new();
    let count = Rc::new(RefCell::new(0u32));
    let sink = Rc::clone(&count);
    scheduler.schedule_update(target(1), 0, false, Box::new(move |_| *sink.borrow_mut() += 1));

    scheduler.update(0.016);
    assert_eq!(*count.borrow(), 1);

    scheduler.pause_target(target(1));
    scheduler.update(0.016);
    assert_eq!(*count.borrow(), 1);

    scheduler.resume_target(target(1));
    scheduler.update(0.016);
    assert_eq!(*count.borrow(), 2);
}

#[test]
fn test_scheduled_paused_entry_waits_for_resume() {
    let mut scheduler = Scheduler::new();
    let count = Rc::new(RefCell::new(0u32));
    let sink = Rc::clone(&count);

    // Registered paused up front
    scheduler.schedule_update(target(1), 0, true, Box::new(move |_| *sink.borrow_mut() += 1));
    assert!(scheduler.is_target_paused(target(1)));

    scheduler.update(0.016);
    assert_eq!(*count.borrow(), 0);

    scheduler.resume_target(target(1));
    scheduler.update(0.016);
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn test_finite_timer_fires_through_scheduler() {
    let mut scheduler = Scheduler::new();
    let fired = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&fired);

    let timer = Timer::with_repeat(
        target(1),
        Box::new(move |at| sink.borrow_mut().push(at)),
        0.25,
        1,
        0.0,
    );
    scheduler.schedule(target(1), timer, false);

    for _ in 0..20 {
        scheduler.update(0.25);
    }

    // repeat = 1 fires twice, then the slot disappears
    assert_eq!(fired.borrow().len(), 2);
    assert!(!scheduler.has_timers(target(1)));
    assert!(!scheduler.is_target_paused(target(1)));
}

#[test]
fn test_multiple_timers_share_one_slot() {
    let mut scheduler = Scheduler::new();
    let fast = Rc::new(RefCell::new(0u32));
    let slow = Rc::new(RefCell::new(0u32));

    let sink = Rc::clone(&fast);
    scheduler.schedule(
        target(1),
        Timer::with_interval(target(1), Box::new(move |_| *sink.borrow_mut() += 1), 0.1),
        false,
    );
    let sink = Rc::clone(&slow);
    scheduler.schedule(
        target(1),
        Timer::with_interval(target(1), Box::new(move |_| *sink.borrow_mut() += 1), 0.4),
        false,
    );

    scheduler.update(0.1); // arms both
    for _ in 0..8 {
        scheduler.update(0.1);
    }

    assert_eq!(*fast.borrow(), 8);
    assert_eq!(*slow.borrow(), 2);
}

#[test]
fn test_run_forever_timer_outlives_finite_neighbors() {
    let mut scheduler = Scheduler::new();
    let count = Rc::new(RefCell::new(0u32));

    let sink = Rc::clone(&count);
    scheduler.schedule(
        target(1),
        Timer::with_repeat(target(1), Box::new(move |_| *sink.borrow_mut() += 1), 0.1, REPEAT_FOREVER, 0.0),
        false,
    );
    scheduler.schedule(
        target(1),
        Timer::with_repeat(target(1), Box::new(|_| {}), 0.1, 0, 0.0),
        false,
    );

    for _ in 0..10 {
        scheduler.update(0.1);
    }

    // The finite timer came and went; the forever timer is still there
    assert!(scheduler.has_timers(target(1)));
    assert!(*count.borrow() >= 8);
}

// ============================================================================
// Deferred Removal
// ============================================================================

#[test]
fn test_unscheduled_update_is_invisible_before_sweep() {
    let mut scheduler = Scheduler::new();
    scheduler.schedule_update(target(1), 0, false, noop_update());

    scheduler.pause_target(target(1));
    scheduler.unschedule_update(target(1));

    // Marked entries are skipped by every consumer
    assert!(!scheduler.is_update_scheduled(target(1)));
    assert!(!scheduler.is_target_paused(target(1)));
    assert!(!scheduler.pause_all_targets().contains(&target(1)));
}

#[test]
fn test_unschedule_all_with_min_priority_spares_low_negatives() {
    let mut scheduler = Scheduler::new();
    scheduler.schedule_update(target(1), -10, false, noop_update());
    scheduler.schedule_update(target(2), 0, false, noop_update());
    scheduler.schedule(target(3), noop_timer(target(3), 0.5), false);

    scheduler.unschedule_all_with_min_priority(-5);

    assert!(scheduler.is_update_scheduled(target(1)));
    assert!(!scheduler.is_update_scheduled(target(2)));
    // Timers go away regardless of the threshold
    assert!(!scheduler.has_timers(target(3)));
}

#[test]
fn test_unschedule_all_empties_registry() {
    let mut scheduler = Scheduler::new();
    scheduler.schedule(target(1), noop_timer(target(1), 0.5), false);
    scheduler.schedule_update(target(2), -1, false, noop_update());
    scheduler.schedule_update(target(3), 1, false, noop_update());

    scheduler.unschedule_all();
    scheduler.update(0.016); // sweep

    for raw in 1..=3 {
        assert!(!scheduler.has_timers(target(raw)));
        assert!(!scheduler.is_update_scheduled(target(raw)));
    }
}
