use midly::{live::LiveEvent, MidiMessage};

/// Human readable rendition of an outgoing message, used for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MidiMessageString {
    pub timestamp: u64,
    pub category: String,
    pub data: String,
}

impl MidiMessageString {
    pub fn new(timestamp: u64, bytes: &[u8]) -> Option<Self> {
        let Ok(event) = LiveEvent::parse(bytes) else {
            return None;
        };

        let make = |category: &str, data: &str| Self {
            timestamp,
            category: category.to_string(),
            data: data.to_string(),
        };

        let (channel, message) = match event {
            LiveEvent::Midi { channel, message } => (channel, message),
            other => return Some(make("System", &format!("{other:?}"))),
        };

        let make = |cat: &str, data: &str| make(cat, &format!("chan = {channel} | {data}"));

        let str = match message {
            // zero velocity releases the note
            MidiMessage::NoteOn { key, vel } if vel.as_int() == 0 => {
                make("NoteOff", &format!("key = {key} | vel = {vel}"))
            }
            MidiMessage::NoteOn { key, vel } => make("NoteOn", &format!("key = {key} | vel = {vel}")),
            MidiMessage::NoteOff { key, vel } => {
                make("NoteOff", &format!("key = {key} | vel = {vel}"))
            }
            other => make("Channel", &format!("{other:?}")),
        };

        Some(str)
    }
}

impl std::fmt::Display for MidiMessageString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[ {} ] : {} : {}", self.timestamp, self.category, self.data)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn describes_a_note_on() {
        let msg = MidiMessageString::new(12, &[0x93, 60, 90]).unwrap();
        assert_eq!(msg.category, "NoteOn");
        assert_eq!(msg.data, "chan = 3 | key = 60 | vel = 90");
        assert_eq!(msg.to_string(), "[ 12 ] : NoteOn : chan = 3 | key = 60 | vel = 90");
    }

    #[test]
    fn zero_velocity_note_on_reads_as_note_off() {
        let msg = MidiMessageString::new(0, &[0x90, 60, 0]).unwrap();
        assert_eq!(msg.category, "NoteOff");
    }

    #[test]
    fn empty_messages_are_not_described() {
        assert!(MidiMessageString::new(0, &[]).is_none());
    }
}
