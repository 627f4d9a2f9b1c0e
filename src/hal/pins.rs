//! Encoder Pin Access
//!
//! The edge interpreter needs both channel levels at the moment an edge is
//! serviced. [`QuadraturePins`] is that seam: any pair of `embedded-hal`
//! inputs works through [`InputPair`], and boards that read the whole port
//! register at once can implement the trait directly.

use embedded_hal::digital::{Error, ErrorKind, InputPin};

use crate::logic::edge::PinPattern;

/// Source of the two encoder channel levels
pub trait QuadraturePins {
    /// Error returned when the pins cannot be read
    type Error;

    /// Sample both channels
    ///
    /// # Errors
    ///
    /// Returns the implementation's error if either level cannot be read.
    fn pattern(&mut self) -> Result<PinPattern, Self::Error>;
}

/// Two independent `embedded-hal` input pins
pub struct InputPair<A, B> {
    a: A,
    b: B,
}

impl<A, B> InputPair<A, B>
where
    A: InputPin,
    B: InputPin,
{
    /// Create from the channel A and channel B inputs
    #[must_use]
    pub const fn new(a: A, b: B) -> Self {
        Self { a, b }
    }

    /// Release the pins
    pub fn release(self) -> (A, B) {
        (self.a, self.b)
    }
}

impl<A, B> QuadraturePins for InputPair<A, B>
where
    A: InputPin,
    B: InputPin,
{
    type Error = ErrorKind;

    fn pattern(&mut self) -> Result<PinPattern, Self::Error> {
        let a = self.a.is_high().map_err(|e| e.kind())?;
        let b = self.b.is_high().map_err(|e| e.kind())?;
        Ok(PinPattern::from_levels(a, b))
    }
}
