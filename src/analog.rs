//! Analog input channels: smoothing plus quantized change detection.

use num_traits::AsPrimitive;

use crate::config::{ConfigError, DEFAULT_BIT_SHIFT, PanelConfig, UPDATE_ALPHA};
use crate::filters::{EmaFilter, NoiseFilter};
use crate::quantize::Quantizer;

/// Source of raw analog samples, typically an ADC behind a multiplexer.
pub trait AnalogSource {
    type Sample: Copy + AsPrimitive<f32>;
    type Error;

    fn read(&mut self, pin: u8) -> Result<Self::Sample, Self::Error>;
}

/// Static description of one knob or fader.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnalogSpec {
    pub name: &'static str,
    pub pin: u8,
    /// Multiplexer input this channel sits on, `None` for a direct pin
    pub mplex_select: Option<u8>,
    pub midi_cc: u8,
    pub bit_shift: u8,
    /// Report as a 14-bit MSB/LSB controller pair
    pub two_bytes: bool,
    pub filter: NoiseFilter,
}

impl AnalogSpec {
    /// Direct pin, default shift and smoothing, 14-bit reporting.
    pub const fn new(name: &'static str, pin: u8, midi_cc: u8) -> Self {
        Self {
            name,
            pin,
            mplex_select: None,
            midi_cc,
            bit_shift: DEFAULT_BIT_SHIFT,
            two_bytes: true,
            filter: NoiseFilter::ExponentialMovingAverage {
                alpha: UPDATE_ALPHA,
            },
        }
    }

    pub const fn multiplexed(mut self, select: u8) -> Self {
        self.mplex_select = Some(select);
        self
    }

    pub const fn bit_shift(mut self, shift: u8) -> Self {
        self.bit_shift = shift;
        self
    }

    pub const fn two_bytes(mut self, two_bytes: bool) -> Self {
        self.two_bytes = two_bytes;
        self
    }

    pub const fn filter(mut self, filter: NoiseFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn validate(&self, panel: &PanelConfig) -> Result<(), ConfigError> {
        if self.pin >= panel.analog_pins {
            return Err(ConfigError::AnalogPinOutOfRange { pin: self.pin });
        }

        if let Some(select) = self.mplex_select {
            if select >= panel.mplex_channels {
                return Err(ConfigError::MplexSelectOutOfRange { select });
            }
        }

        // 14-bit controllers pair CC n with CC n + 32, so n must be in 0..32
        let cc_limit = if self.two_bytes { 32 } else { 128 };
        if self.midi_cc >= cc_limit {
            return Err(ConfigError::InvalidControlNumber { cc: self.midi_cc });
        }

        Quantizer::new(self.bit_shift)?;
        self.filter.validate()
    }
}

/// Runtime state of one analog input.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnalogChannel {
    spec: AnalogSpec,
    filter: EmaFilter,
    quantizer: Quantizer,
    last_quantized: i32,
}

impl AnalogChannel {
    pub fn new(spec: AnalogSpec) -> Result<Self, ConfigError> {
        spec.filter.validate()?;
        Ok(Self {
            spec,
            filter: EmaFilter::new(),
            quantizer: Quantizer::new(spec.bit_shift)?,
            last_quantized: 0,
        })
    }

    pub fn spec(&self) -> &AnalogSpec {
        &self.spec
    }

    /// Smooth one raw sample.
    ///
    /// Returns the new quantized value if it moved, `None` otherwise.
    pub fn update<T: AsPrimitive<f32>>(&mut self, raw: T) -> Option<i32> {
        let old = self.filter.value();
        let new = self.filter.apply(raw.as_(), self.spec.filter.alpha());

        let changed = self.quantizer.changed(old, new);
        if let Some(value) = changed {
            self.last_quantized = value;
        }
        changed
    }

    pub fn value(&self) -> f32 {
        self.filter.value()
    }

    /// Quantized value as of the last update.
    pub fn quantized(&self) -> i32 {
        self.quantizer.apply(self.filter.value())
    }

    /// Most recently reported quantized value.
    pub fn last_reported(&self) -> i32 {
        self.last_quantized
    }

    pub fn reset(&mut self) {
        self.filter.reset();
        self.last_quantized = 0;
    }
}
