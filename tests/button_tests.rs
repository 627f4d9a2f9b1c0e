//! Push Button Tests
//!
//! Tests for the counting debouncer on the encoder switch.
//! Run with: cargo test --test button_tests

use std::cell::Cell;
use std::rc::Rc;

use embedded_hal::digital::{ErrorKind, ErrorType, InputPin};
use rotary_counter::drivers::button::{ButtonState, PushButton};

/// Fake active-low switch contact
#[derive(Clone)]
struct FakeSwitch {
    low: Rc<Cell<bool>>,
    broken: Rc<Cell<bool>>,
}

impl FakeSwitch {
    fn new() -> Self {
        Self {
            low: Rc::new(Cell::new(false)),
            broken: Rc::new(Cell::new(false)),
        }
    }

    fn press(&self) {
        self.low.set(true);
    }

    fn release(&self) {
        self.low.set(false);
    }
}

impl ErrorType for FakeSwitch {
    type Error = ErrorKind;
}

impl InputPin for FakeSwitch {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.is_low().map(|low| !low)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        if self.broken.get() {
            Err(ErrorKind::Other)
        } else {
            Ok(self.low.get())
        }
    }
}

fn sample(button: &mut PushButton<FakeSwitch>, times: usize) -> usize {
    (0..times).filter(|_| button.update().unwrap()).count()
}

// =============================================================================
// Debounce
// =============================================================================

#[test]
fn button_starts_released() {
    let button = PushButton::new(FakeSwitch::new());
    assert_eq!(button.state(), ButtonState::Released);
    assert!(!button.is_pressed());
}

#[test]
fn idle_button_reports_nothing() {
    let mut button = PushButton::new(FakeSwitch::new());
    assert_eq!(sample(&mut button, 10), 0);
}

#[test]
fn press_needs_stable_samples() {
    let switch = FakeSwitch::new();
    let mut button = PushButton::new(switch.clone());

    switch.press();
    // First sample sees the edge, three more confirm it
    assert!(!button.update().unwrap());
    assert!(!button.update().unwrap());
    assert!(!button.update().unwrap());
    assert!(button.update().unwrap());
    assert!(button.is_pressed());
}

#[test]
fn press_and_release() {
    let switch = FakeSwitch::new();
    let mut button = PushButton::new(switch.clone());

    switch.press();
    assert_eq!(sample(&mut button, 10), 1);
    assert_eq!(button.state(), ButtonState::Pressed);

    switch.release();
    assert_eq!(sample(&mut button, 10), 1);
    assert_eq!(button.state(), ButtonState::Released);
}

#[test]
fn bounce_is_filtered() {
    let switch = FakeSwitch::new();
    let mut button = PushButton::new(switch.clone());

    for _ in 0..5 {
        switch.press();
        assert!(!button.update().unwrap());
        switch.release();
        assert!(!button.update().unwrap());
    }
    assert!(!button.is_pressed());
}

#[test]
fn read_error_propagates() {
    let switch = FakeSwitch::new();
    let mut button = PushButton::new(switch.clone());

    switch.broken.set(true);
    assert_eq!(button.update(), Err(ErrorKind::Other));
    assert_eq!(button.state(), ButtonState::Released);
}
