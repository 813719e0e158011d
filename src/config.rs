use embassy_time::Duration;

/// Smoothing factor applied to analog channels unless overridden.
pub const UPDATE_ALPHA: f32 = 0.4;

/// How long a digital input must hold still before its new level is accepted.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(50);

/// Low-order bits dropped from smoothed analog values before change detection.
pub const DEFAULT_BIT_SHIFT: u8 = 2;

/// Largest supported quantization shift (samples are at most 16 bits wide).
pub const MAX_BIT_SHIFT: u8 = 15;

/// Suggested period between two calls to `Panel::tick`.
pub const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Number of inputs on the analog multiplexer (three select lines).
pub const MPLEX_CHANNELS: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    InvalidAlpha,
    InvalidBitShift { shift: u8 },
    AnalogPinOutOfRange { pin: u8 },
    DigitalPinOutOfRange { pin: u8 },
    MplexSelectOutOfRange { select: u8 },
    InvalidControlNumber { cc: u8 },
    InvalidNote { note: u8 },
    InvalidMidiChannel { channel: u8 },
    DuplicateDigitalPin { pin: u8 },
    ActionTargetOutOfRange { target: usize },
    TooManyChannels,
    InvalidPanel,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidAlpha => write!(f, "smoothing alpha must be in range (0.0, 1.0]"),
            ConfigError::InvalidBitShift { shift } => {
                write!(f, "bit shift {} exceeds maximum of {}", shift, MAX_BIT_SHIFT)
            }
            ConfigError::AnalogPinOutOfRange { pin } => {
                write!(f, "analog pin {} out of range", pin)
            }
            ConfigError::DigitalPinOutOfRange { pin } => {
                write!(f, "digital pin {} out of range", pin)
            }
            ConfigError::MplexSelectOutOfRange { select } => {
                write!(f, "multiplexer selector {} out of range", select)
            }
            ConfigError::InvalidControlNumber { cc } => {
                write!(f, "invalid MIDI controller number {}", cc)
            }
            ConfigError::InvalidNote { note } => write!(f, "invalid MIDI note {}", note),
            ConfigError::InvalidMidiChannel { channel } => {
                write!(f, "invalid MIDI channel index {}", channel)
            }
            ConfigError::DuplicateDigitalPin { pin } => {
                write!(f, "digital pin {} used more than once", pin)
            }
            ConfigError::ActionTargetOutOfRange { target } => {
                write!(f, "button action targets missing analog channel {}", target)
            }
            ConfigError::TooManyChannels => write!(f, "channel count exceeds panel capacity"),
            ConfigError::InvalidPanel => {
                write!(f, "pin counts and multiplexer size must be non-zero")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Hardware limits the channel definitions are checked against.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig {
    /// Analog pins are identified as `0..analog_pins`.
    pub analog_pins: u8,
    /// Digital pins are identified as `0..digital_pins`.
    pub digital_pins: u8,
    pub mplex_channels: u8,
}

impl Default for PanelConfig {
    /// A0..A5 and D0..D13, one 8-way multiplexer.
    fn default() -> Self {
        Self {
            analog_pins: 6,
            digital_pins: 14,
            mplex_channels: MPLEX_CHANNELS,
        }
    }
}

impl PanelConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.analog_pins == 0 || self.digital_pins == 0 || self.mplex_channels == 0 {
            return Err(ConfigError::InvalidPanel);
        }
        Ok(())
    }
}

/// Shared check for smoothing factors.
pub(crate) const fn validate_alpha(alpha: f32) -> Result<(), ConfigError> {
    if !(alpha > 0.0 && alpha <= 1.0) {
        return Err(ConfigError::InvalidAlpha);
    }
    Ok(())
}
