use super::ClientOptions;
use crate::{
    midi::{MidiNote, DEFAULT_VELOCITY},
    song::hold_chord,
};

#[derive(Debug, clap::Parser)]
pub struct Options {
    /// MIDI pitch, 60 is middle C
    pitch: u8,

    /// Key velocity, 1 to 127 (0 would release the note instead of playing it)
    #[arg(long, default_value_t = DEFAULT_VELOCITY, value_parser = clap::value_parser!(u8).range(1..=127))]
    velocity: u8,

    /// Zero based MIDI channel
    #[arg(long, default_value_t = 0)]
    channel: u8,

    /// How long the note is held, e.g. `500ms` or `2s`
    #[arg(long, default_value = "500ms")]
    duration: humantime::Duration,

    #[command(flatten)]
    client: ClientOptions,
}

pub fn run(opts: Options) -> anyhow::Result<()> {
    // validate before touching the MIDI service
    let note = MidiNote::new(opts.pitch, opts.velocity, opts.channel)?;

    opts.client.run(|ctx| {
        hold_chord(ctx, &[note], opts.duration.into())?;
        Ok(())
    })
}
