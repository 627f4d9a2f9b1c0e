//! Rotary Encoder Counter Library
//!
//! This library decodes a two-channel quadrature rotary encoder, plus an
//! optional push button, into a bounded and optionally circular integer
//! counter. Encoder edges arrive as asynchronous interrupts; the library
//! turns them into a consistent position that main-line code can read
//! without tearing.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       DRIVER LAYER                           │
//! │  RotaryEncoder (critical section)  │  PushButton  │ Observer │
//! ├─────────────────────────────────────────────────────────────┤
//! │                        LOGIC LAYER                           │
//! │  Edge Interpreter │ Range Policy │ Position Store │ Debounce │
//! ├─────────────────────────────────────────────────────────────┤
//! │                         HAL SEAM                             │
//! │        QuadraturePins (embedded-hal)  │  Clock               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Control flow: rising edge → [`RotaryEncoder::on_channel_a`] /
//! [`RotaryEncoder::on_channel_b`] → edge interpreter → debounce gate →
//! range policy → position store → observer. Main-line code consumes the
//! result through [`RotaryEncoder::read_state`].
//!
//! # Design Principles
//!
//! - **Functional core, imperative shell**: the `logic` layer is plain data
//!   and pure transitions; only the driver takes critical sections
//! - **Silent policy**: out-of-range sets, clamped steps and noisy edge
//!   patterns are ignored, not reported as errors
//! - **No unsafe code**
//! - **No allocation**: every loop is bounded by a `u8` repeat count

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export dependencies needed by applications (only in embedded mode)
#[cfg(feature = "embedded")]
pub use embassy_executor;
#[cfg(feature = "embedded")]
pub use embassy_stm32;
#[cfg(feature = "embedded")]
pub use embassy_sync;
#[cfg(feature = "embedded")]
pub use embassy_time;

/// Hardware seam
///
/// Pin and clock traits the driver is generic over.
pub mod hal;

/// Encoder logic
///
/// Edge interpretation, range policy, position storage and debouncing.
pub mod logic;

/// Drivers
///
/// The interrupt-safe encoder, its observers and the push button.
pub mod drivers;

/// Shared types used across modules
pub mod types;

/// Configuration and defaults
pub mod config;

pub use drivers::encoder::RotaryEncoder;

/// Prelude module for common imports
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::{EncoderConfig, DEFAULT_RANGE, ENCODER_DEBOUNCE_MS};
    pub use crate::drivers::button::{ButtonState, PushButton};
    pub use crate::drivers::encoder::RotaryEncoder;
    pub use crate::drivers::observer::{NoopObserver, StepObserver};
    pub use crate::hal::clock::Clock;
    pub use crate::hal::pins::{InputPair, QuadraturePins};
    pub use crate::logic::edge::{Channel, PinPattern};
    pub use crate::types::{Count, Direction, Range, RangeError, Snapshot};

    #[cfg(feature = "embedded")]
    pub use crate::hal::clock::EmbassyClock;

    // Embassy
    #[cfg(feature = "embedded")]
    pub use embassy_time::{Duration, Instant, Timer};

    // Logging
    #[cfg(feature = "embedded")]
    pub use defmt::{debug, error, info, trace, warn};
}
