use super::*;
use std::time::{Duration, Instant};

pub trait Sleeping {
    fn sleep(&mut self, duration: Duration);
}

/// Blocks the calling thread.
#[derive(Default)]
pub struct ThreadSleeper;

impl Sleeping for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration)
    }
}

/// Owns the client and output port for the lifetime of a run.
///
/// The port is opened by [`MidiContext::initialize`] and disposed exactly once,
/// either by [`MidiContext::shutdown`] or when the context is dropped.
pub struct MidiContext {
    sender: Box<dyn MidiSending>,
    sleeper: Box<dyn Sleeping>,
    opened_at: Option<Instant>,
    num_destinations: usize,
}

impl MidiContext {
    pub fn new(sender: Box<dyn MidiSending>) -> Self {
        Self::with_sleeper(sender, Box::<ThreadSleeper>::default())
    }

    pub fn with_sleeper(sender: Box<dyn MidiSending>, sleeper: Box<dyn Sleeping>) -> Self {
        Self {
            sender,
            sleeper,
            opened_at: None,
            num_destinations: 0,
        }
    }

    pub fn initialize(&mut self, port_name: &str) -> Result<(), MidiError> {
        if self.is_open() {
            return Err(MidiError::AlreadyOpen);
        }

        self.num_destinations = self.sender.open(port_name)?;
        self.opened_at = Some(Instant::now());

        if self.num_destinations == 0 {
            log::warn!("no MIDI destinations found, messages will not reach any device");
        } else {
            log::debug!("output port {port_name} open on {} destination(s)", self.num_destinations);
        }

        Ok(())
    }

    pub fn shutdown(&mut self) -> Result<(), MidiError> {
        if self.opened_at.take().is_none() {
            return Err(MidiError::NotOpen);
        }

        self.num_destinations = 0;
        self.sender.close()?;
        log::debug!("output port closed");
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.opened_at.is_some()
    }

    /// Destinations attached when the port was opened.
    pub fn num_destinations(&self) -> usize {
        self.num_destinations
    }

    pub fn list_destinations(&self) -> Result<Vec<String>, MidiError> {
        self.sender.list_destinations()
    }

    pub fn play_note_on(&mut self, note: MidiNote) -> Result<(), MidiError> {
        self.send(&note.note_on_bytes())
    }

    pub fn play_note_off(&mut self, note: MidiNote) -> Result<(), MidiError> {
        self.send(&note.note_off_bytes())
    }

    pub fn play_notes_on(&mut self, notes: &[MidiNote]) -> Result<(), MidiError> {
        notes.iter().try_for_each(|note| self.play_note_on(*note))
    }

    pub fn play_notes_off(&mut self, notes: &[MidiNote]) -> Result<(), MidiError> {
        notes.iter().try_for_each(|note| self.play_note_off(*note))
    }

    pub fn pause(&mut self, duration: Duration) {
        self.sleeper.sleep(duration)
    }

    fn send(&mut self, bytes: &[u8]) -> Result<(), MidiError> {
        let Some(opened_at) = self.opened_at else {
            return Err(MidiError::NotOpen);
        };

        let midi = MidiData {
            timestamp: opened_at.elapsed().as_micros() as u64,
            bytes: bytes.into(),
        };

        let num_delivered = self.sender.send_to_all(&midi.bytes)?;

        if let Some(msg) = MidiMessageString::new(midi.timestamp, &midi.bytes) {
            log::debug!("{msg} -> {num_delivered} destination(s)");
        }

        Ok(())
    }
}

impl Drop for MidiContext {
    fn drop(&mut self) {
        if !self.is_open() {
            return;
        }

        if let Err(e) = self.shutdown() {
            log::error!("Failed to close MIDI output port : {e}");
        }
    }
}
