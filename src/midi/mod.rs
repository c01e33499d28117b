mod context;
mod message;
mod stream;

pub use context::*;
pub use message::*;
pub use stream::*;

/// Velocity used when a note is played without an explicit one.
pub const DEFAULT_VELOCITY: u8 = 90;

const NOTE_ON: u8 = 0x90;
const MAX_DATA_BYTE: u8 = 0x7F;
const MAX_CHANNEL: u8 = 0x0F;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MidiError {
    #[error("failed to create MIDI client {name} : {reason}")]
    ClientCreation { name: String, reason: String },
    #[error("failed to query the name of destination {index} : {reason}")]
    PortName { index: usize, reason: String },
    #[error("failed to connect output port to destination {index} ({name}) : {reason}")]
    PortConnection {
        index: usize,
        name: String,
        reason: String,
    },
    #[error("problem sending MIDI data to destination {index} : {reason}")]
    Send { index: usize, reason: String },
    #[error("MIDI context is not open")]
    NotOpen,
    #[error("MIDI context is already open")]
    AlreadyOpen,
    #[error("pitch out of range : {0}")]
    PitchOutOfRange(i16),
    #[error("velocity out of range : {0}")]
    VelocityOutOfRange(u8),
    #[error("channel out of range : {0}")]
    ChannelOutOfRange(u8),
}

/// Boundary with the host's MIDI service.
///
/// An implementation owns the client and the output port(s). Between
/// [`MidiSending::open`] and [`MidiSending::close`] every message is fanned out
/// to all the destinations that were known when the port was opened.
#[cfg_attr(test, mockall::automock)]
pub trait MidiSending {
    /// Names of the destinations currently known to the host.
    fn list_destinations(&self) -> Result<Vec<String>, MidiError>;
    /// Open the output port and attach it to every destination.
    /// Returns the number of attached destinations.
    fn open(&mut self, port_name: &str) -> Result<usize, MidiError>;
    /// Returns the number of destinations the bytes were delivered to.
    fn send_to_all(&mut self, bytes: &[u8]) -> Result<usize, MidiError>;
    ///
    fn close(&mut self) -> Result<(), MidiError>;
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct MidiData {
    pub timestamp: u64,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MidiNote {
    pitch: u8,
    velocity: u8,
    channel: u8,
}

impl MidiNote {
    pub fn new(pitch: u8, velocity: u8, channel: u8) -> Result<Self, MidiError> {
        if pitch > MAX_DATA_BYTE {
            return Err(MidiError::PitchOutOfRange(pitch.into()));
        }
        if velocity > MAX_DATA_BYTE {
            return Err(MidiError::VelocityOutOfRange(velocity));
        }
        if channel > MAX_CHANNEL {
            return Err(MidiError::ChannelOutOfRange(channel));
        }

        Ok(Self {
            pitch,
            velocity,
            channel,
        })
    }

    /// Note on channel 0 at [`DEFAULT_VELOCITY`].
    pub fn with_default(pitch: u8) -> Result<Self, MidiError> {
        Self::new(pitch, DEFAULT_VELOCITY, 0)
    }

    pub fn pitch(&self) -> u8 {
        self.pitch
    }

    pub fn velocity(&self) -> u8 {
        self.velocity
    }

    pub fn channel(&self) -> u8 {
        self.channel
    }

    pub fn note_on_bytes(&self) -> [u8; 3] {
        [NOTE_ON | self.channel, self.pitch, self.velocity]
    }

    /// Note-Off is sent as a Note-On with a velocity of zero.
    pub fn note_off_bytes(&self) -> [u8; 3] {
        [NOTE_ON | self.channel, self.pitch, 0x00]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn note_on_carries_channel_in_the_status_byte() {
        let note = MidiNote::new(60, 90, 3).unwrap();
        assert_eq!(note.note_on_bytes(), [0x93, 60, 90]);
    }

    #[test]
    fn note_off_is_a_note_on_with_zero_velocity() {
        let note = MidiNote::new(41, 60, 4).unwrap();
        assert_eq!(note.note_off_bytes(), [0x94, 41, 0]);
    }

    #[test]
    fn default_note_plays_on_the_first_channel() {
        let note = MidiNote::with_default(60).unwrap();
        assert_eq!(note.velocity(), DEFAULT_VELOCITY);
        assert_eq!(note.channel(), 0);
        assert_eq!(note.note_on_bytes(), [0x90, 60, 90]);
    }

    #[test]
    fn rejects_values_that_do_not_fit_the_wire_format() {
        assert_eq!(
            MidiNote::new(128, 90, 0).unwrap_err(),
            MidiError::PitchOutOfRange(128)
        );
        assert_eq!(
            MidiNote::new(60, 200, 0).unwrap_err(),
            MidiError::VelocityOutOfRange(200)
        );
        assert_eq!(
            MidiNote::new(60, 90, 16).unwrap_err(),
            MidiError::ChannelOutOfRange(16)
        );
        assert!(MidiNote::new(127, 127, 15).is_ok());
    }
}
