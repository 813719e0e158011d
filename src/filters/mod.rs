/// Noise filtering implementations
///
/// Filters smooth noisy ADC readings in raw sample units (no normalization).
mod ema;

pub use ema::EmaFilter;

use crate::config::{ConfigError, validate_alpha};

/// Noise filter configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NoiseFilter {
    /// No filtering applied, every sample is taken as is
    None,

    /// Exponential moving average: output = previous + (input - previous) * alpha
    /// Lower alpha = more smoothing, higher = more responsive
    /// Requires: 0.0 < alpha <= 1.0
    ExponentialMovingAverage { alpha: f32 },
}

impl NoiseFilter {
    /// Validate filter configuration at compile time
    pub const fn validate(&self) -> Result<(), ConfigError> {
        match self {
            NoiseFilter::None => Ok(()),
            NoiseFilter::ExponentialMovingAverage { alpha } => validate_alpha(*alpha),
        }
    }

    /// Smoothing factor handed to [`EmaFilter::apply`]
    pub const fn alpha(&self) -> f32 {
        match self {
            NoiseFilter::None => 1.0,
            NoiseFilter::ExponentialMovingAverage { alpha } => *alpha,
        }
    }
}
