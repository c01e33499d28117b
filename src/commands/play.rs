use super::ClientOptions;
use crate::song::Song;

#[derive(Debug, clap::Parser)]
pub struct Options {
    /// Song to play on every MIDI destination
    #[arg(value_enum, default_value_t = Song::Four)]
    song: Song,

    #[command(flatten)]
    client: ClientOptions,
}

pub fn run(opts: Options) -> anyhow::Result<()> {
    opts.client.run(|ctx| {
        opts.song.play(ctx)?;
        Ok(())
    })
}
