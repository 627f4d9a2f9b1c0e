//! Encoder configuration and defaults
//!
//! Compile-time defaults for the counter, plus the [`EncoderConfig`] value
//! handed to the encoder at construction.

use crate::types::Range;

/// Default counting range: 0 to 250 in steps of 1
pub const DEFAULT_RANGE: Range = match Range::new(0, 250, 1) {
    Ok(range) => range,
    Err(_) => panic!("default range is invalid"),
};

/// Encoder edge debounce time in milliseconds
pub const ENCODER_DEBOUNCE_MS: u32 = 2;

/// Consecutive equal samples required before the push button changes state
pub const BUTTON_DEBOUNCE_SAMPLES: u8 = 3;

/// Button poll period used by the demo firmware, in milliseconds
pub const BUTTON_POLL_MS: u64 = 5;

/// Pin assignments for the demo firmware
pub mod pins {
    //! GPIO pin assignments for the demo board

    /// Encoder channel A input
    pub const ENCODER_A: &str = "PA0";

    /// Encoder channel B input
    pub const ENCODER_B: &str = "PA1";

    /// Encoder push button
    pub const ENCODER_SW: &str = "PA2";

    /// Status LED
    pub const LED_STATUS: &str = "PA5";
}

/// Per-instance encoder configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Counting range
    pub range: Range,
    /// Wrap around at the bounds instead of clamping
    pub circular: bool,
    /// Minimum time between accepted hardware steps (0 disables the gate)
    pub debounce_ms: u32,
}

impl EncoderConfig {
    /// Create a configuration with the given range and defaults elsewhere
    #[must_use]
    pub const fn new(range: Range) -> Self {
        Self {
            range,
            circular: false,
            debounce_ms: ENCODER_DEBOUNCE_MS,
        }
    }

    /// Set the counting range
    #[must_use]
    pub const fn with_range(mut self, range: Range) -> Self {
        self.range = range;
        self
    }

    /// Enable or disable circular counting
    #[must_use]
    pub const fn with_circular(mut self, circular: bool) -> Self {
        self.circular = circular;
        self
    }

    /// Set the edge debounce time
    #[must_use]
    pub const fn with_debounce_ms(mut self, debounce_ms: u32) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_RANGE)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for EncoderConfig {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "EncoderConfig({}, circular={}, debounce={}ms)",
            self.range,
            self.circular,
            self.debounce_ms
        );
    }
}
