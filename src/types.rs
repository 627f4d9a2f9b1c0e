//! Shared types used across the encoder core
//!
//! This module defines the counter domain types. Invariants on the
//! counting range are checked once at construction so the stepping code
//! never has to re-validate them.

use core::fmt;

/// Integer type of the encoder counter
pub type Count = i32;

/// Direction of a single logical step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Increment (channel B completes the detent)
    Up,
    /// Decrement (channel A completes the detent)
    Down,
}

#[cfg(feature = "embedded")]
impl defmt::Format for Direction {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Up => defmt::write!(f, "UP"),
            Self::Down => defmt::write!(f, "DOWN"),
        }
    }
}

/// Errors produced when building a [`Range`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeError {
    /// `min` is greater than `max`
    Inverted,
    /// `step` is zero or negative
    ZeroStep,
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inverted => write!(f, "range minimum is greater than maximum"),
            Self::ZeroStep => write!(f, "range step must be at least 1"),
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for RangeError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Inverted => defmt::write!(f, "min > max"),
            Self::ZeroStep => defmt::write!(f, "step < 1"),
        }
    }
}

/// Inclusive counting range with a step size
///
/// Both bounds are included. For circular counting to land on predictable
/// positions, `step` should evenly divide [`Range::span`]; this is not
/// enforced.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    min: Count,
    max: Count,
    step: Count,
}

impl Range {
    /// Create a new range, validating `min <= max` and `step >= 1`
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Inverted`] if `min > max` and
    /// [`RangeError::ZeroStep`] if `step < 1`.
    pub const fn new(min: Count, max: Count, step: Count) -> Result<Self, RangeError> {
        if min > max {
            Err(RangeError::Inverted)
        } else if step < 1 {
            Err(RangeError::ZeroStep)
        } else {
            Ok(Self { min, max, step })
        }
    }

    /// Lowest included position
    #[must_use]
    pub const fn min(self) -> Count {
        self.min
    }

    /// Highest included position
    #[must_use]
    pub const fn max(self) -> Count {
        self.max
    }

    /// Amount added or removed by each step
    #[must_use]
    pub const fn step(self) -> Count {
        self.step
    }

    /// Number of distinct positions in the range (`max - min + 1`)
    #[must_use]
    pub const fn span(self) -> i64 {
        self.max as i64 - self.min as i64 + 1
    }

    /// Check if a position lies inside the range
    #[must_use]
    pub const fn contains(self, position: Count) -> bool {
        position >= self.min && position <= self.max
    }
}

impl Default for Range {
    fn default() -> Self {
        crate::config::DEFAULT_RANGE
    }
}

impl fmt::Debug for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Range({}..={} step {})", self.min, self.max, self.step)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Range {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}..={} step {}", self.min, self.max, self.step);
    }
}

/// Observed encoder state handed to callers and observers
///
/// `delta` is the direction of travel since the last consuming read, not a
/// step count: it is always -1, 0 or +1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Snapshot {
    /// Sign of `current - previous`
    pub delta: i8,
    /// Position at the last consuming read
    pub previous: Count,
    /// Current position
    pub current: Count,
}

impl Snapshot {
    /// Build a snapshot, deriving `delta` from the two positions
    #[must_use]
    pub const fn new(previous: Count, current: Count) -> Self {
        let delta = if current > previous {
            1
        } else if current < previous {
            -1
        } else {
            0
        };
        Self {
            delta,
            previous,
            current,
        }
    }

    /// Check if the position moved since the last consuming read
    #[must_use]
    pub const fn moved(&self) -> bool {
        self.delta != 0
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Snapshot {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{} -> {} ({})", self.previous, self.current, self.delta);
    }
}
