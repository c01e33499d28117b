mod transform;

pub use transform::*;

use crate::midi::{MidiContext, MidiError, MidiNote, DEFAULT_VELOCITY};
use std::time::Duration;

const MIDDLE_C: u8 = 60;
const MOTIF: [u8; 8] = [60, 62, 64, 67, 60, 62, 64, 67];
const COUNTER_MOTIF: [u8; 8] = [60, 64, 67, 68, 60, 64, 67, 68];

const VIOLIN_CHANNEL: u8 = 0x00;
const CELLO_CHANNEL: u8 = 0x03;
const BASS_CHANNEL: u8 = 0x04;
const SOFT_VELOCITY: u8 = 60;

const LONG_NOTE: Duration = Duration::from_millis(500);
const SHORT_NOTE: Duration = Duration::from_millis(150);
const KEY_SWITCH_HOLD: Duration = Duration::from_millis(1);
const CHORD_HOLD: Duration = Duration::from_secs(3);

/// Key switches selecting the long soft patches of the string library,
/// as `(pitch, channel)`.
const KEY_SWITCHES: [(u8, u8); 9] = [
    (MIDDLE_C - 24 + 1, VIOLIN_CHANNEL), // velocity range
    (MIDDLE_C - 36 + 1, VIOLIN_CHANNEL), // articulation
    (MIDDLE_C - 24 + 5, VIOLIN_CHANNEL), // type
    (MIDDLE_C - 36 + 1, CELLO_CHANNEL),
    (MIDDLE_C + 24 + 1, CELLO_CHANNEL),
    (MIDDLE_C + 24 + 5, CELLO_CHANNEL),
    (MIDDLE_C + 24 + 1, BASS_CHANNEL),
    (MIDDLE_C + 12 + 1, BASS_CHANNEL),
    (MIDDLE_C + 24 + 5, BASS_CHANNEL),
];

const CHORD: [(u8, u8); 6] = [
    (MIDDLE_C + 7 + 7, VIOLIN_CHANNEL),
    (MIDDLE_C + 7, VIOLIN_CHANNEL),
    (MIDDLE_C, VIOLIN_CHANNEL),
    (MIDDLE_C, VIOLIN_CHANNEL),
    (MIDDLE_C - 7 - 12, CELLO_CHANNEL),
    (MIDDLE_C - 7 - 12 - 5, BASS_CHANNEL),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Song {
    /// Middle C, held for half a second
    One,
    /// A short motif, one note at a time
    Two,
    /// The motif on violin answered by the cello an octave down, reversed
    Three,
    /// String patches followed by a held chord
    Four,
    /// Only select the long soft string patches
    Patches,
}

impl Song {
    pub fn description(&self) -> &'static str {
        match self {
            Song::One => "single note",
            Song::Two => "motif",
            Song::Three => "violin and cello motifs",
            Song::Four => "string chord",
            Song::Patches => "long soft patch setup",
        }
    }

    pub fn play(&self, ctx: &mut MidiContext) -> Result<(), MidiError> {
        log::info!("playing {}", self.description());

        match self {
            Song::One => play_melody(ctx, &[MIDDLE_C], VIOLIN_CHANNEL, LONG_NOTE),
            Song::Two => play_melody(ctx, &MOTIF, VIOLIN_CHANNEL, SHORT_NOTE),
            Song::Three => {
                play_melody(ctx, &MOTIF, VIOLIN_CHANNEL, SHORT_NOTE)?;
                let answer = reverse(&octave_down(&COUNTER_MOTIF)?);
                play_melody(ctx, &answer, CELLO_CHANNEL, SHORT_NOTE)
            }
            Song::Four => {
                setup_long_soft_patches(ctx)?;
                hold_chord(ctx, &notes(&CHORD, SOFT_VELOCITY)?, CHORD_HOLD)
            }
            Song::Patches => setup_long_soft_patches(ctx),
        }
    }
}

/// Play each pitch in turn, releasing it before the next one.
pub fn play_melody(
    ctx: &mut MidiContext,
    pitches: &[u8],
    channel: u8,
    note_length: Duration,
) -> Result<(), MidiError> {
    for &pitch in pitches {
        let note = MidiNote::new(pitch, DEFAULT_VELOCITY, channel)?;
        ctx.play_note_on(note)?;
        ctx.pause(note_length);
        ctx.play_note_off(note)?;
    }

    Ok(())
}

/// Start every note, wait, then release them all.
pub fn hold_chord(
    ctx: &mut MidiContext,
    notes: &[MidiNote],
    duration: Duration,
) -> Result<(), MidiError> {
    ctx.play_notes_on(notes)?;
    ctx.pause(duration);
    ctx.play_notes_off(notes)
}

fn setup_long_soft_patches(ctx: &mut MidiContext) -> Result<(), MidiError> {
    hold_chord(ctx, &notes(&KEY_SWITCHES, SOFT_VELOCITY)?, KEY_SWITCH_HOLD)
}

fn notes(pitches_and_channels: &[(u8, u8)], velocity: u8) -> Result<Vec<MidiNote>, MidiError> {
    pitches_and_channels
        .iter()
        .map(|&(pitch, channel)| MidiNote::new(pitch, velocity, channel))
        .collect()
}
