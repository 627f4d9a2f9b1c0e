//! Edge Debouncer Tests
//!
//! Tests for elapsed-time gating of hardware steps.
//! Run with: cargo test --test debounce_tests

use rotary_counter::logic::debounce::EdgeDebouncer;

#[test]
fn first_step_always_accepted() {
    let mut debouncer = EdgeDebouncer::new(500);
    assert!(debouncer.accept(0));
}

#[test]
fn step_within_delay_rejected() {
    let mut debouncer = EdgeDebouncer::new(5);
    assert!(debouncer.accept(100));
    assert!(!debouncer.accept(101));
    assert!(!debouncer.accept(104));
}

#[test]
fn step_at_delay_accepted() {
    let mut debouncer = EdgeDebouncer::new(5);
    assert!(debouncer.accept(100));
    assert!(debouncer.accept(105));
}

#[test]
fn rejected_step_does_not_restart_window() {
    let mut debouncer = EdgeDebouncer::new(5);
    assert!(debouncer.accept(100));
    assert!(!debouncer.accept(103));
    // Measured from 100, not 103
    assert!(debouncer.accept(105));
}

#[test]
fn zero_delay_disables_gate() {
    let mut debouncer = EdgeDebouncer::new(0);
    assert!(debouncer.accept(7));
    assert!(debouncer.accept(7));
    assert!(debouncer.accept(7));
}

#[test]
fn wrapping_clock() {
    let mut debouncer = EdgeDebouncer::new(10);
    assert!(debouncer.accept(u32::MAX - 4));
    assert!(!debouncer.accept(2));
    assert!(debouncer.accept(5));
}

#[test]
fn reset_forgets_last_step() {
    let mut debouncer = EdgeDebouncer::new(50);
    assert!(debouncer.accept(10));
    debouncer.reset();
    assert!(debouncer.accept(11));
}

#[test]
fn set_delay() {
    let mut debouncer = EdgeDebouncer::new(50);
    assert_eq!(debouncer.delay_ms(), 50);
    assert!(debouncer.accept(0));

    debouncer.set_delay_ms(1);
    assert_eq!(debouncer.delay_ms(), 1);
    assert!(debouncer.accept(1));
}
