//! Quantization for change suppression.
//!
//! Smoothed values are rounded to the nearest integer and shifted right so that
//! jitter in the low-order bits never reaches downstream consumers.

use crate::config::{ConfigError, MAX_BIT_SHIFT};

/// Rounds then drops `shift` low-order bits (arithmetic shift).
#[inline]
pub fn quantize(value: f32, shift: u8) -> i32 {
    (libm::roundf(value) as i32) >> shift
}

/// Fixed bit-shift quantizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Quantizer {
    shift: u8,
}

impl Quantizer {
    pub const fn new(shift: u8) -> Result<Self, ConfigError> {
        if shift > MAX_BIT_SHIFT {
            return Err(ConfigError::InvalidBitShift { shift });
        }
        Ok(Self { shift })
    }

    pub const fn shift(&self) -> u8 {
        self.shift
    }

    #[inline]
    pub fn apply(&self, value: f32) -> i32 {
        quantize(value, self.shift)
    }

    /// Compare the quantized forms of `old` and `new`.
    ///
    /// Returns the new quantized value only if it differs from the old one.
    pub fn changed(&self, old: f32, new: f32) -> Option<i32> {
        let before = self.apply(old);
        let after = self.apply(new);
        (before != after).then_some(after)
    }
}
