//! Quadrature Edge Interpreter
//!
//! Turns the pin levels sampled on each rising-edge interrupt into zero or
//! one logical step. A step is only confirmed when one channel reports the
//! detent pattern (both pins high) after the other channel has already seen
//! its intermediate pattern (only itself high), so a lone glitch on either
//! line never moves the counter.

use crate::types::Direction;

/// Encoder input channel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    /// Channel A; completes downward steps
    A,
    /// Channel B; completes upward steps
    B,
}

impl Channel {
    /// The channel on the other side of the quadrature pair
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    /// Direction of the step this channel completes
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::A => Direction::Down,
            Self::B => Direction::Up,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Channel {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::A => defmt::write!(f, "A"),
            Self::B => defmt::write!(f, "B"),
        }
    }
}

/// Two-bit snapshot of the encoder pins
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinPattern {
    /// Both pins low
    Idle,
    /// Only channel A high
    OnlyA,
    /// Only channel B high
    OnlyB,
    /// Both pins high (detent position)
    Detent,
}

impl PinPattern {
    /// Build from the two pin levels
    #[must_use]
    pub const fn from_levels(a_high: bool, b_high: bool) -> Self {
        match (a_high, b_high) {
            (false, false) => Self::Idle,
            (true, false) => Self::OnlyA,
            (false, true) => Self::OnlyB,
            (true, true) => Self::Detent,
        }
    }

    /// Pattern seen on `channel` when it leads the other one
    #[must_use]
    pub const fn leading(channel: Channel) -> Self {
        match channel {
            Channel::A => Self::OnlyA,
            Channel::B => Self::OnlyB,
        }
    }

    /// Raw bit form (bit 0 = A, bit 1 = B)
    #[must_use]
    pub const fn bits(self) -> u8 {
        match self {
            Self::Idle => 0b00,
            Self::OnlyA => 0b01,
            Self::OnlyB => 0b10,
            Self::Detent => 0b11,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for PinPattern {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=u8:#b}", self.bits());
    }
}

/// Pending-edge flags for one quadrature pair
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeInterpreter {
    pending_a: bool,
    pending_b: bool,
}

impl EdgeInterpreter {
    /// Create an interpreter with no pending edges
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending_a: false,
            pending_b: false,
        }
    }

    /// Process a rising edge on `channel` with the pins at `pattern`
    ///
    /// Returns the direction of a completed step, if any. Completing a step
    /// clears both pending flags.
    pub fn on_edge(&mut self, channel: Channel, pattern: PinPattern) -> Option<Direction> {
        if pattern == PinPattern::Detent && self.is_pending(channel.other()) {
            self.reset();
            return Some(channel.direction());
        }

        if pattern == PinPattern::leading(channel) {
            self.set_pending(channel);
        }

        None
    }

    /// Check if `channel` has seen its intermediate pattern
    #[must_use]
    pub const fn is_pending(&self, channel: Channel) -> bool {
        match channel {
            Channel::A => self.pending_a,
            Channel::B => self.pending_b,
        }
    }

    /// Clear both pending flags
    pub fn reset(&mut self) {
        self.pending_a = false;
        self.pending_b = false;
    }

    fn set_pending(&mut self, channel: Channel) {
        match channel {
            Channel::A => self.pending_a = true,
            Channel::B => self.pending_b = true,
        }
    }
}
