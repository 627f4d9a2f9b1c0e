//! Rotary Encoder Driver
//!
//! Ties the edge interpreter, range policy and position store together
//! behind a single interrupt-safe handle. All state lives in a
//! `critical_section::Mutex`, so every method takes `&self` and the encoder
//! can sit in a `static` shared between the edge handlers and main-line
//! code.
//!
//! # Wiring
//!
//! The host platform attaches rising-edge interrupts on both channels and
//! calls [`RotaryEncoder::on_channel_a`] / [`RotaryEncoder::on_channel_b`]
//! from them. Main-line code then polls [`RotaryEncoder::read_state`], or
//! registers a [`StepObserver`] to be told about each step as it happens.
//!
//! The observer sits in its own slot and is called after the counter state
//! has been released, so it may read the encoder. A step it triggers from
//! inside the callback is applied but not reported again.

use core::cell::RefCell;

use critical_section::{CriticalSection, Mutex};

use super::observer::{NoopObserver, StepObserver};
use crate::config::EncoderConfig;
use crate::hal::clock::Clock;
use crate::hal::pins::QuadraturePins;
use crate::logic::debounce::EdgeDebouncer;
use crate::logic::edge::{Channel, EdgeInterpreter};
use crate::logic::store::PositionStore;
use crate::types::{Count, Direction, Range, Snapshot};

/// State shared between edge handlers and main-line code
struct Shared<P, C> {
    pins: P,
    clock: C,
    edges: EdgeInterpreter,
    debouncer: EdgeDebouncer,
    store: PositionStore,
    range: Range,
    circular: bool,
    enabled: bool,
}

impl<P, C> Shared<P, C>
where
    P: QuadraturePins,
    C: Clock,
{
    /// Returns the snapshot to report if the edge completed a step
    fn on_edge(&mut self, channel: Channel) -> Option<Snapshot> {
        if !self.enabled {
            return None;
        }

        let Ok(pattern) = self.pins.pattern() else {
            #[cfg(feature = "embedded")]
            defmt::warn!("encoder: pin read failed on channel {}", channel);
            return None;
        };

        let direction = self.edges.on_edge(channel, pattern)?;

        if !self.debouncer.accept(self.clock.now_ms()) {
            #[cfg(feature = "embedded")]
            defmt::trace!("encoder: {} step dropped by debounce", direction);
            return None;
        }

        let _position = self.store.step(self.range, self.circular, direction, 1);

        #[cfg(feature = "embedded")]
        defmt::trace!("encoder: {} step to {}", direction, _position);

        Some(self.store.current_state())
    }

    fn activate(&mut self, state: bool) {
        self.enabled = state;
        self.store.set_changed(state);
        if state {
            self.debouncer.reset();
        }
    }
}

/// Interrupt-safe quadrature encoder with a bounded counter
pub struct RotaryEncoder<P, C, O = NoopObserver> {
    shared: Mutex<RefCell<Shared<P, C>>>,
    observer: Mutex<RefCell<O>>,
}

impl<P, C> RotaryEncoder<P, C, NoopObserver>
where
    P: QuadraturePins,
    C: Clock,
{
    /// Create an enabled encoder resting at the range minimum
    #[must_use]
    pub fn new(pins: P, clock: C, config: EncoderConfig) -> Self {
        let shared = Shared {
            pins,
            clock,
            edges: EdgeInterpreter::new(),
            debouncer: EdgeDebouncer::new(config.debounce_ms),
            store: PositionStore::new(config.range.min()),
            range: config.range,
            circular: config.circular,
            enabled: true,
        };

        Self {
            shared: Mutex::new(RefCell::new(shared)),
            observer: Mutex::new(RefCell::new(NoopObserver)),
        }
    }
}

impl<P, C, O> RotaryEncoder<P, C, O>
where
    P: QuadraturePins,
    C: Clock,
    O: StepObserver,
{
    /// Replace the observer, changing its type (setup only)
    #[must_use]
    pub fn with_observer<O2: StepObserver>(self, observer: O2) -> RotaryEncoder<P, C, O2> {
        RotaryEncoder {
            shared: self.shared,
            observer: Mutex::new(RefCell::new(observer)),
        }
    }

    /// Replace the observer with another of the same type
    ///
    /// Ignored if called from inside the observer itself.
    pub fn set_observer(&self, observer: O) {
        critical_section::with(|cs| {
            if let Ok(mut slot) = self.observer.borrow(cs).try_borrow_mut() {
                *slot = observer;
            }
        });
    }

    /// Rising edge on channel A (call from the interrupt handler)
    pub fn on_channel_a(&self) {
        self.on_edge(Channel::A);
    }

    /// Rising edge on channel B (call from the interrupt handler)
    pub fn on_channel_b(&self) {
        self.on_edge(Channel::B);
    }

    /// Rising edge on `channel`
    pub fn on_edge(&self, channel: Channel) {
        critical_section::with(|cs| {
            let completed = self.shared.borrow_ref_mut(cs).on_edge(channel);
            if let Some(snapshot) = completed {
                self.notify(cs, snapshot);
            }
        });
    }

    // -----------------------------------------------------------------------
    // Administrative controls
    // -----------------------------------------------------------------------

    /// Enable or disable edge handling
    ///
    /// The pending-change flag follows `state`: re-enabling reports a
    /// change because the position may be stale. Re-enabling also forgets
    /// the last accepted step, so the first edge afterwards is never
    /// debounced against it.
    pub fn activate(&self, state: bool) {
        self.with(|s| s.activate(state));

        #[cfg(feature = "embedded")]
        defmt::debug!("encoder: activate({})", state);
    }

    /// Enable edge handling and flag a change
    pub fn enable(&self) {
        self.activate(true);
    }

    /// Disable edge handling and clear the pending change
    pub fn disable(&self) {
        self.activate(false);
    }

    /// Check if edge handling is enabled
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.with(|s| s.enabled)
    }

    /// Switch between circular and clamped counting
    pub fn set_circular(&self, circular: bool) {
        self.with(|s| s.circular = circular);
    }

    /// Check if counting wraps at the bounds
    #[must_use]
    pub fn is_circular(&self) -> bool {
        self.with(|s| s.circular)
    }

    /// Change the edge debounce time (0 disables the gate)
    pub fn set_debounce_ms(&self, debounce_ms: u32) {
        self.with(|s| s.debouncer.set_delay_ms(debounce_ms));
    }

    /// Edge debounce time in milliseconds
    #[must_use]
    pub fn debounce_ms(&self) -> u32 {
        self.with(|s| s.debouncer.delay_ms())
    }

    // -----------------------------------------------------------------------
    // Range and position
    // -----------------------------------------------------------------------

    /// Replace the counting range
    ///
    /// If the position falls outside the new range, position and previous
    /// snap to the new minimum and, while enabled, a change is flagged.
    /// Returns the resulting position.
    pub fn set_range(&self, range: Range) -> Count {
        #[cfg(feature = "embedded")]
        defmt::debug!("encoder: range {}", range);

        self.with(|s| {
            s.range = range;
            if s.store.reclamp(range) && s.enabled {
                s.store.set_changed(true);
            }
            s.store.position()
        })
    }

    /// Current counting range
    #[must_use]
    pub fn range(&self) -> Range {
        self.with(|s| s.range)
    }

    /// Set the position programmatically
    ///
    /// Out-of-range positions are ignored. Previous is set to the same
    /// value so the next read reports no motion. Returns the resulting
    /// position.
    pub fn set_position(&self, position: Count) -> Count {
        self.with(|s| {
            let range = s.range;
            s.store.set_position(position, range)
        })
    }

    /// Current position
    #[must_use]
    pub fn position(&self) -> Count {
        self.with(|s| s.store.position())
    }

    /// Step up `times`, optionally notifying the observer afterwards
    pub fn step_up(&self, times: u8, notify: bool) -> Count {
        self.step(Direction::Up, times, notify)
    }

    /// Step down `times`, optionally notifying the observer afterwards
    pub fn step_down(&self, times: u8, notify: bool) -> Count {
        self.step(Direction::Down, times, notify)
    }

    // -----------------------------------------------------------------------
    // State access
    // -----------------------------------------------------------------------

    /// Snapshot of the counter without consuming the change
    #[must_use]
    pub fn current_state(&self) -> Snapshot {
        self.with(|s| s.store.current_state())
    }

    /// Snapshot of the counter, consuming the change
    ///
    /// Clears the pending flag and, if the position moved, makes the
    /// current position the new reference for the next delta.
    pub fn read_state(&self) -> Snapshot {
        self.with(|s| s.store.read_state())
    }

    /// Check if a change is waiting to be consumed
    #[must_use]
    pub fn has_changed(&self) -> bool {
        self.with(|s| s.store.has_changed())
    }

    /// Release the pins, clock and observer
    pub fn release(self) -> (P, C, O) {
        let s = self.shared.into_inner().into_inner();
        (s.pins, s.clock, self.observer.into_inner().into_inner())
    }

    fn step(&self, direction: Direction, times: u8, notify: bool) -> Count {
        critical_section::with(|cs| {
            let (position, snapshot) = {
                let mut guard = self.shared.borrow_ref_mut(cs);
                let s = &mut *guard;
                let position = s.store.step(s.range, s.circular, direction, times);
                (position, s.store.current_state())
            };
            if notify {
                self.notify(cs, snapshot);
            }
            position
        })
    }

    // Counter state is no longer borrowed here, so the observer may read it.
    // A nested notification from inside the observer is dropped.
    fn notify(&self, cs: CriticalSection<'_>, snapshot: Snapshot) {
        if let Ok(mut observer) = self.observer.borrow(cs).try_borrow_mut() {
            observer.on_step(snapshot);
        }
    }

    fn with<R>(&self, f: impl FnOnce(&mut Shared<P, C>) -> R) -> R {
        critical_section::with(|cs| f(&mut self.shared.borrow_ref_mut(cs)))
    }
}
