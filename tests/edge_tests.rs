//! Edge Interpreter Tests
//!
//! Tests for quadrature edge interpretation and pin patterns.
//! Run with: cargo test --test edge_tests

use rotary_counter::logic::edge::{Channel, EdgeInterpreter, PinPattern};
use rotary_counter::types::Direction;

// =============================================================================
// Pin Pattern Tests
// =============================================================================

#[test]
fn pattern_from_levels() {
    assert_eq!(PinPattern::from_levels(false, false), PinPattern::Idle);
    assert_eq!(PinPattern::from_levels(true, false), PinPattern::OnlyA);
    assert_eq!(PinPattern::from_levels(false, true), PinPattern::OnlyB);
    assert_eq!(PinPattern::from_levels(true, true), PinPattern::Detent);
}

#[test]
fn pattern_leading() {
    assert_eq!(PinPattern::leading(Channel::A), PinPattern::OnlyA);
    assert_eq!(PinPattern::leading(Channel::B), PinPattern::OnlyB);
}

#[test]
fn pattern_bits() {
    assert_eq!(PinPattern::Idle.bits(), 0b00);
    assert_eq!(PinPattern::OnlyA.bits(), 0b01);
    assert_eq!(PinPattern::OnlyB.bits(), 0b10);
    assert_eq!(PinPattern::Detent.bits(), 0b11);
}

#[test]
fn channel_other_and_direction() {
    assert_eq!(Channel::A.other(), Channel::B);
    assert_eq!(Channel::B.other(), Channel::A);
    assert_eq!(Channel::A.direction(), Direction::Down);
    assert_eq!(Channel::B.direction(), Direction::Up);
}

// =============================================================================
// Interpreter Tests
// =============================================================================

#[test]
fn interpreter_starts_clear() {
    let edges = EdgeInterpreter::new();
    assert!(!edges.is_pending(Channel::A));
    assert!(!edges.is_pending(Channel::B));
}

#[test]
fn a_leads_then_b_completes_up() {
    let mut edges = EdgeInterpreter::new();

    // A rises first: only A high
    assert_eq!(edges.on_edge(Channel::A, PinPattern::OnlyA), None);
    assert!(edges.is_pending(Channel::A));

    // B rises: both high
    assert_eq!(edges.on_edge(Channel::B, PinPattern::Detent), Some(Direction::Up));
    assert!(!edges.is_pending(Channel::A));
    assert!(!edges.is_pending(Channel::B));
}

#[test]
fn b_leads_then_a_completes_down() {
    let mut edges = EdgeInterpreter::new();

    assert_eq!(edges.on_edge(Channel::B, PinPattern::OnlyB), None);
    assert!(edges.is_pending(Channel::B));

    assert_eq!(edges.on_edge(Channel::A, PinPattern::Detent), Some(Direction::Down));
    assert_eq!(edges, EdgeInterpreter::new());
}

#[test]
fn lone_detent_is_ignored() {
    let mut edges = EdgeInterpreter::new();
    assert_eq!(edges.on_edge(Channel::A, PinPattern::Detent), None);
    assert_eq!(edges.on_edge(Channel::B, PinPattern::Detent), None);
}

#[test]
fn own_flag_does_not_complete_step() {
    let mut edges = EdgeInterpreter::new();

    // A leads, then a glitch re-triggers A at the detent
    edges.on_edge(Channel::A, PinPattern::OnlyA);
    assert_eq!(edges.on_edge(Channel::A, PinPattern::Detent), None);

    // The pending A flag survives and B can still complete the step
    assert_eq!(edges.on_edge(Channel::B, PinPattern::Detent), Some(Direction::Up));
}

#[test]
fn wrong_intermediate_pattern_ignored() {
    let mut edges = EdgeInterpreter::new();

    // A edge while only B reads high is transitional noise
    assert_eq!(edges.on_edge(Channel::A, PinPattern::OnlyB), None);
    assert_eq!(edges.on_edge(Channel::A, PinPattern::Idle), None);
    assert!(!edges.is_pending(Channel::A));
    assert!(!edges.is_pending(Channel::B));
}

#[test]
fn contradictory_pattern_keeps_pending_flag() {
    let mut edges = EdgeInterpreter::new();
    edges.on_edge(Channel::A, PinPattern::OnlyA);

    // Flags only clear on a completed step
    assert_eq!(edges.on_edge(Channel::A, PinPattern::Idle), None);
    assert!(edges.is_pending(Channel::A));
    assert_eq!(edges.on_edge(Channel::B, PinPattern::Detent), Some(Direction::Up));
}

#[test]
fn consecutive_steps_up() {
    let mut edges = EdgeInterpreter::new();
    let mut steps = 0;

    for _ in 0..5 {
        edges.on_edge(Channel::A, PinPattern::OnlyA);
        if edges.on_edge(Channel::B, PinPattern::Detent) == Some(Direction::Up) {
            steps += 1;
        }
    }

    assert_eq!(steps, 5);
}

#[test]
fn direction_reversal() {
    let mut edges = EdgeInterpreter::new();

    edges.on_edge(Channel::A, PinPattern::OnlyA);
    assert_eq!(edges.on_edge(Channel::B, PinPattern::Detent), Some(Direction::Up));

    edges.on_edge(Channel::B, PinPattern::OnlyB);
    assert_eq!(edges.on_edge(Channel::A, PinPattern::Detent), Some(Direction::Down));
}

#[test]
fn reset_clears_pending() {
    let mut edges = EdgeInterpreter::new();
    edges.on_edge(Channel::A, PinPattern::OnlyA);
    edges.on_edge(Channel::B, PinPattern::OnlyB);

    edges.reset();

    assert_eq!(edges.on_edge(Channel::A, PinPattern::Detent), None);
    assert_eq!(edges.on_edge(Channel::B, PinPattern::Detent), None);
}
