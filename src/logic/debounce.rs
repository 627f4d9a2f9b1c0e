//! Edge Debouncer
//!
//! Elapsed-time gate for steps confirmed by the edge interpreter. Contact
//! bounce on a mechanical encoder can complete a second detent within a few
//! milliseconds of the first; those are dropped here.

/// Time gate for hardware steps
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeDebouncer {
    /// Minimum time between accepted steps in milliseconds
    delay_ms: u32,
    /// Timestamp of the last accepted step
    last_accepted_ms: Option<u32>,
}

impl EdgeDebouncer {
    /// Create a debouncer with the given delay (0 disables gating)
    #[must_use]
    pub const fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            last_accepted_ms: None,
        }
    }

    /// Configured delay in milliseconds
    #[must_use]
    pub const fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Change the delay; the last accepted timestamp is kept
    pub fn set_delay_ms(&mut self, delay_ms: u32) {
        self.delay_ms = delay_ms;
    }

    /// Decide whether a step at `now_ms` is accepted, recording it if so
    pub fn accept(&mut self, now_ms: u32) -> bool {
        if self.delay_ms == 0 {
            self.last_accepted_ms = Some(now_ms);
            return true;
        }

        let accepted = self
            .last_accepted_ms
            .is_none_or(|last| now_ms.wrapping_sub(last) >= self.delay_ms);

        if accepted {
            self.last_accepted_ms = Some(now_ms);
        }
        accepted
    }

    /// Forget the last accepted step
    pub fn reset(&mut self) {
        self.last_accepted_ms = None;
    }
}
