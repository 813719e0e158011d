/// A quantized analog value moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnalogChange {
    /// Index of the channel in the panel
    pub channel: usize,
    pub pin: u8,
    pub mplex_select: Option<u8>,
    pub midi_cc: u8,
    pub two_bytes: bool,
    pub value: i32,
}

/// A debounced digital level changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonChange {
    /// Index of the channel in the panel
    pub channel: usize,
    pub pin: u8,
    pub level: bool,
    pub pressed: bool,
    pub note: Option<u8>,
}

/// Output of one panel tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    Analog(AnalogChange),
    Button(ButtonChange),
}
