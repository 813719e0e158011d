use embassy_time::Instant;
use embedded_hal::digital::InputPin;
use heapless::Vec;

use crate::analog::{AnalogChannel, AnalogSource, AnalogSpec};
use crate::config::{ConfigError, PanelConfig};
use crate::digital::{ButtonAction, DigitalChannel};
use crate::event::{AnalogChange, ButtonChange, Event};

/// Failure to read an input during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError<AE, DE> {
    Analog(AE),
    Digital(DE),
}

impl<AE: core::fmt::Debug, DE: core::fmt::Debug> core::fmt::Display for PanelError<AE, DE> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PanelError::Analog(e) => write!(f, "analog read failed: {:?}", e),
            PanelError::Digital(e) => write!(f, "digital read failed: {:?}", e),
        }
    }
}

impl<AE: core::fmt::Debug, DE: core::fmt::Debug> core::error::Error for PanelError<AE, DE> {}

/// Owns every input channel of a control panel and updates them once per tick.
///
/// `NA` and `ND` are the analog and digital channel capacities.
pub struct Panel<A, P, const NA: usize, const ND: usize> {
    config: PanelConfig,
    source: A,
    analog: Vec<AnalogChannel, NA>,
    digital: Vec<DigitalChannel<P>, ND>,
    mplex_select: u8,
}

impl<A, P, const NA: usize, const ND: usize> Panel<A, P, NA, ND>
where
    A: AnalogSource,
    P: InputPin,
{
    /// Build a panel, rejecting any channel that does not fit `config`.
    pub fn new<I>(
        config: PanelConfig,
        source: A,
        analog_specs: &[AnalogSpec],
        digital_channels: I,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = DigitalChannel<P>>,
    {
        config.validate()?;

        let mut analog: Vec<AnalogChannel, NA> = Vec::new();
        for spec in analog_specs {
            spec.validate(&config)?;
            analog
                .push(AnalogChannel::new(*spec)?)
                .map_err(|_| ConfigError::TooManyChannels)?;
        }

        let mut digital: Vec<DigitalChannel<P>, ND> = Vec::new();
        for channel in digital_channels {
            let spec = *channel.spec();
            spec.validate(&config)?;

            if digital.iter().any(|c| c.spec().pin == spec.pin) {
                return Err(ConfigError::DuplicateDigitalPin { pin: spec.pin });
            }
            if let ButtonAction::ResetAnalog(target) = spec.action {
                if target >= analog.len() {
                    return Err(ConfigError::ActionTargetOutOfRange { target });
                }
            }

            digital
                .push(channel)
                .map_err(|_| ConfigError::TooManyChannels)?;
        }

        Ok(Self {
            config,
            source,
            analog,
            digital,
            mplex_select: 0,
        })
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Run one polling cycle.
    ///
    /// Analog channels update first, then buttons, both in declaration order.
    /// Changes are handed to `emit` as they happen; a read error stops the
    /// cycle after whatever was already emitted.
    pub fn tick<F>(
        &mut self,
        now: Instant,
        mut emit: F,
    ) -> Result<(), PanelError<A::Error, P::Error>>
    where
        F: FnMut(Event),
    {
        for (index, channel) in self.analog.iter_mut().enumerate() {
            let spec = *channel.spec();
            if spec.mplex_select.is_some_and(|select| select != self.mplex_select) {
                continue;
            }

            let raw = self.source.read(spec.pin).map_err(PanelError::Analog)?;
            if let Some(value) = channel.update(raw) {
                #[cfg(feature = "defmt")]
                defmt::trace!("{} (pin {}) => {}", spec.name, spec.pin, value);

                emit(Event::Analog(AnalogChange {
                    channel: index,
                    pin: spec.pin,
                    mplex_select: spec.mplex_select,
                    midi_cc: spec.midi_cc,
                    two_bytes: spec.two_bytes,
                    value,
                }));
            }
        }

        for index in 0..self.digital.len() {
            let channel = &mut self.digital[index];
            let Some(level) = channel.poll(now).map_err(PanelError::Digital)? else {
                continue;
            };

            let spec = *channel.spec();
            let pressed = spec.is_pressed(level);

            #[cfg(feature = "defmt")]
            defmt::debug!("button {} (pin {}) level {}", spec.name, spec.pin, level);

            emit(Event::Button(ButtonChange {
                channel: index,
                pin: spec.pin,
                level,
                pressed,
                note: spec.note,
            }));

            if pressed {
                self.apply(spec.action);
            }
        }

        Ok(())
    }

    fn apply(&mut self, action: ButtonAction) {
        match action {
            ButtonAction::None => {}
            ButtonAction::ResetAnalog(target) => {
                if let Some(channel) = self.analog.get_mut(target) {
                    channel.reset();

                    #[cfg(feature = "defmt")]
                    defmt::info!("reset {}", channel.spec().name);
                }
            }
            ButtonAction::CycleMultiplexer => {
                self.mplex_select = (self.mplex_select + 1) % self.config.mplex_channels;

                #[cfg(feature = "defmt")]
                defmt::info!("switching mplex to {}", self.mplex_select);
            }
        }
    }

    /// Multiplexer input currently selected; the host drives the select lines from it.
    pub fn mplex_select(&self) -> u8 {
        self.mplex_select
    }

    pub fn set_mplex_select(&mut self, select: u8) -> Result<(), ConfigError> {
        if select >= self.config.mplex_channels {
            return Err(ConfigError::MplexSelectOutOfRange { select });
        }
        self.mplex_select = select;
        Ok(())
    }

    /// Return every analog channel to zero.
    pub fn reset_all(&mut self) {
        for channel in self.analog.iter_mut() {
            channel.reset();
        }
    }

    pub fn analog(&self, index: usize) -> Option<&AnalogChannel> {
        self.analog.get(index)
    }

    pub fn analog_channels(&self) -> &[AnalogChannel] {
        &self.analog
    }

    pub fn digital(&self, index: usize) -> Option<&DigitalChannel<P>> {
        self.digital.get(index)
    }

    pub fn source_mut(&mut self) -> &mut A {
        &mut self.source
    }
}
