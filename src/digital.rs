//! Digital input channels: a pin plus its debouncer.

use embassy_time::{Duration, Instant};
use embedded_hal::digital::InputPin;

use crate::config::{ConfigError, DEBOUNCE_WINDOW, PanelConfig};
use crate::debounce::{DebounceState, Debouncer};

/// What the panel does when a button is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonAction {
    #[default]
    None,
    /// Return the analog channel at this index to zero
    ResetAnalog(usize),
    /// Advance the active multiplexer selector, wrapping around
    CycleMultiplexer,
}

/// Static description of one button or switch.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitalSpec {
    pub name: &'static str,
    pub pin: u8,
    pub debounce_window: Duration,
    /// Pressed reads low (pull-up wiring)
    pub active_low: bool,
    /// Note sent on press/release, if any
    pub note: Option<u8>,
    pub action: ButtonAction,
}

impl DigitalSpec {
    /// Pull-up wired button with the default debounce window and no action.
    pub const fn new(name: &'static str, pin: u8) -> Self {
        Self {
            name,
            pin,
            debounce_window: DEBOUNCE_WINDOW,
            active_low: true,
            note: None,
            action: ButtonAction::None,
        }
    }

    pub const fn debounce_window(mut self, window: Duration) -> Self {
        self.debounce_window = window;
        self
    }

    pub const fn active_low(mut self, active_low: bool) -> Self {
        self.active_low = active_low;
        self
    }

    pub const fn note(mut self, note: u8) -> Self {
        self.note = Some(note);
        self
    }

    pub const fn action(mut self, action: ButtonAction) -> Self {
        self.action = action;
        self
    }

    /// Whether `level` counts as pressed for this wiring.
    pub const fn is_pressed(&self, level: bool) -> bool {
        level != self.active_low
    }

    pub fn validate(&self, panel: &PanelConfig) -> Result<(), ConfigError> {
        if self.pin >= panel.digital_pins {
            return Err(ConfigError::DigitalPinOutOfRange { pin: self.pin });
        }

        if let Some(note) = self.note {
            if note > 127 {
                return Err(ConfigError::InvalidNote { note });
            }
        }

        Ok(())
    }
}

/// Runtime state of one digital input.
pub struct DigitalChannel<P> {
    spec: DigitalSpec,
    pin: P,
    debouncer: Debouncer,
}

impl<P: InputPin> DigitalChannel<P> {
    /// Both the raw and debounced level start low.
    pub fn new(spec: DigitalSpec, pin: P) -> Self {
        Self {
            spec,
            pin,
            debouncer: Debouncer::new(spec.debounce_window),
        }
    }

    /// Start from the released level so an idle button reports nothing at boot.
    pub fn released(spec: DigitalSpec, pin: P) -> Self {
        Self {
            spec,
            pin,
            debouncer: Debouncer::with_level(spec.debounce_window, spec.active_low),
        }
    }

    pub fn spec(&self) -> &DigitalSpec {
        &self.spec
    }

    /// Read the pin once and feed the debouncer.
    ///
    /// Returns the new debounced level when a transition is accepted.
    pub fn poll(&mut self, now: Instant) -> Result<Option<bool>, P::Error> {
        let reading = self.pin.is_high()?;
        Ok(self.debouncer.update(reading, now))
    }

    pub fn level(&self) -> bool {
        self.debouncer.debounced()
    }

    pub fn is_pressed(&self) -> bool {
        self.spec.is_pressed(self.debouncer.debounced())
    }

    pub fn state(&self) -> DebounceState {
        self.debouncer.state()
    }

    pub fn release(self) -> P {
        self.pin
    }
}
