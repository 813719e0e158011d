#![no_std]

pub mod analog;
mod config;
pub mod debounce;
pub mod digital;
mod event;
pub mod filters;
#[cfg(feature = "midi")]
pub mod midi;
mod panel;
pub mod quantize;

pub use analog::{AnalogChannel, AnalogSource, AnalogSpec};
pub use config::{
    ConfigError, DEBOUNCE_WINDOW, DEFAULT_BIT_SHIFT, MAX_BIT_SHIFT, MPLEX_CHANNELS, POLL_INTERVAL,
    PanelConfig, UPDATE_ALPHA,
};
pub use debounce::{DebounceState, Debouncer};
pub use digital::{ButtonAction, DigitalChannel, DigitalSpec};
pub use event::{AnalogChange, ButtonChange, Event};
pub use filters::NoiseFilter;
#[cfg(feature = "midi")]
pub use midi::MidiMapper;
pub use panel::{Panel, PanelError};
pub use quantize::Quantizer;
