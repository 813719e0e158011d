//! Mapping of panel events onto MIDI messages.
//!
//! Produces typed [`wmidi::MidiMessage`]s only; serializing and sending them is
//! left to whatever transport the host uses.

use heapless::Vec;
use wmidi::{Channel, ControlFunction, MidiMessage, Note, U7};

use crate::config::ConfigError;
use crate::event::{AnalogChange, ButtonChange, Event};

/// Largest value a 14-bit controller pair can carry.
pub const MAX_14_BIT: i32 = 0x3FFF;

/// Offset between the MSB and LSB controller of a 14-bit pair.
pub const LSB_OFFSET: u8 = 32;

/// Messages produced by one event; a 14-bit controller needs two, so a
/// capacity of 2 always suffices and `from_array` checks that at compile time.
pub type Messages = Vec<MidiMessage<'static>, 2>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MidiMapper {
    channel: Channel,
}

impl MidiMapper {
    /// `index` is the zero-based MIDI channel (0..=15).
    pub fn new(index: u8) -> Result<Self, ConfigError> {
        let channel = Channel::from_index(index)
            .map_err(|_| ConfigError::InvalidMidiChannel { channel: index })?;
        Ok(Self { channel })
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn map(&self, event: &Event) -> Messages {
        match event {
            Event::Analog(change) => self.control_change(change),
            Event::Button(change) => self.note(change),
        }
    }

    fn control_change(&self, change: &AnalogChange) -> Messages {
        let controller = ControlFunction(U7::from_u8_lossy(change.midi_cc));

        if change.two_bytes {
            let value = change.value.clamp(0, MAX_14_BIT);
            let msb = U7::from_u8_lossy((value >> 7) as u8);
            let lsb = U7::from_u8_lossy((value & 0x7F) as u8);
            let lsb_controller =
                ControlFunction(U7::from_u8_lossy(change.midi_cc.saturating_add(LSB_OFFSET)));

            Messages::from_array([
                MidiMessage::ControlChange(self.channel, controller, msb),
                MidiMessage::ControlChange(self.channel, lsb_controller, lsb),
            ])
        } else {
            let value = U7::from_u8_lossy(change.value.clamp(0, 127) as u8);
            Messages::from_array([MidiMessage::ControlChange(self.channel, controller, value)])
        }
    }

    fn note(&self, change: &ButtonChange) -> Messages {
        let Some(note) = change.note else {
            return Messages::new();
        };

        let velocity = if change.pressed { U7::MAX } else { U7::MIN };
        Messages::from_array([MidiMessage::NoteOn(
            self.channel,
            Note::from_u8_lossy(note),
            velocity,
        )])
    }
}
