//! Drivers
//!
//! Interrupt-safe encoder handle, step observers and the push button.
//! These sit on top of the pure logic layer and the HAL seam.

pub mod button;
pub mod encoder;
pub mod observer;
