//! Encoder Push Button
//!
//! Counting debouncer for the optional switch contact on the encoder
//! shaft. The button is sampled from main-line code, not from the edge
//! interrupts.

use embedded_hal::digital::InputPin;

use crate::config::BUTTON_DEBOUNCE_SAMPLES;

/// Encoder button state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonState {
    /// Button is released
    Released,
    /// Button is pressed
    Pressed,
}

#[cfg(feature = "embedded")]
impl defmt::Format for ButtonState {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Released => defmt::write!(f, "Released"),
            Self::Pressed => defmt::write!(f, "Pressed"),
        }
    }
}

/// Encoder push button with debouncing (active low)
pub struct PushButton<P> {
    pin: P,
    state: ButtonState,
    last_raw: bool,
    debounce_count: u8,
}

impl<P: InputPin> PushButton<P> {
    /// Create encoder button (active low with pull-up)
    #[must_use]
    pub const fn new(pin: P) -> Self {
        Self {
            pin,
            state: ButtonState::Released,
            last_raw: false,
            debounce_count: 0,
        }
    }

    /// Sample the pin once (call periodically)
    ///
    /// Returns `Ok(true)` when the debounced state changed.
    ///
    /// # Errors
    ///
    /// Propagates the pin's read error; the debounce state is untouched.
    pub fn update(&mut self) -> Result<bool, P::Error> {
        let pressed = self.pin.is_low()?;

        if pressed == self.last_raw {
            if self.debounce_count < BUTTON_DEBOUNCE_SAMPLES {
                self.debounce_count += 1;
            }
        } else {
            self.debounce_count = 0;
            self.last_raw = pressed;
        }

        if self.debounce_count >= BUTTON_DEBOUNCE_SAMPLES {
            let new_state = if pressed {
                ButtonState::Pressed
            } else {
                ButtonState::Released
            };

            if new_state != self.state {
                self.state = new_state;
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Get current state
    #[must_use]
    pub const fn state(&self) -> ButtonState {
        self.state
    }

    /// Check if pressed
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        matches!(self.state, ButtonState::Pressed)
    }

    /// Release the pin
    pub fn release(self) -> P {
        self.pin
    }
}
