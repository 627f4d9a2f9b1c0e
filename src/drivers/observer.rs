//! Step Observers
//!
//! An observer is called synchronously every time a hardware step completes
//! (and for programmatic steps that ask for it). It runs inside the
//! encoder's critical section, with interrupts masked on single-core
//! targets, so implementations must be short and must not block. Reading
//! the encoder from an observer is fine; the counter state is released
//! before the call.

use crate::types::Snapshot;

/// Receiver of encoder step notifications
pub trait StepObserver {
    /// Called with the encoder state right after a step
    fn on_step(&mut self, snapshot: Snapshot);
}

/// Observer that ignores every notification
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    fn on_step(&mut self, _snapshot: Snapshot) {}
}

impl StepObserver for fn(Snapshot) {
    fn on_step(&mut self, snapshot: Snapshot) {
        self(snapshot);
    }
}

/// Hand each snapshot to a waiting task; only the latest one is kept
#[cfg(feature = "embedded")]
impl StepObserver
    for &'static embassy_sync::signal::Signal<
        embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex,
        Snapshot,
    >
{
    fn on_step(&mut self, snapshot: Snapshot) {
        self.signal(snapshot);
    }
}
