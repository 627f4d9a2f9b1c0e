//! Millisecond Clock
//!
//! Monotonic time source for the edge debouncer. The counter is allowed to
//! wrap; consumers only ever look at differences.

/// Monotonic millisecond time source
pub trait Clock {
    /// Milliseconds since an arbitrary epoch (wrapping)
    fn now_ms(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// Clock backed by the embassy time driver
#[cfg(feature = "embedded")]
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbassyClock;

#[cfg(feature = "embedded")]
impl Clock for EmbassyClock {
    #[allow(clippy::cast_possible_truncation)]
    fn now_ms(&self) -> u32 {
        embassy_time::Instant::now().as_millis() as u32
    }
}
