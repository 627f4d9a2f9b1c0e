//! Hardware Seam
//!
//! Traits the encoder driver is generic over, so the same core runs on a
//! microcontroller or on a host with fake pins and a manual clock.

pub mod clock;
pub mod pins;
