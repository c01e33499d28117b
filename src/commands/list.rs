use super::DEFAULT_CLIENT_NAME;
use crate::midi::{HostedMidiSender, MidiContext};

#[derive(Debug, clap::Parser)]
pub struct Options {
    /// Name of the MIDI client registered with the host
    #[arg(long, default_value = DEFAULT_CLIENT_NAME)]
    client: String,
}

pub fn run(opts: Options) -> anyhow::Result<()> {
    let ctx = MidiContext::new(Box::new(HostedMidiSender::new(&opts.client)?));
    let destinations = ctx.list_destinations()?;
    log::debug!("found {} destination(s)", destinations.len());

    print!("{}", render(&destinations));
    Ok(())
}

fn render(destinations: &[String]) -> String {
    let mut out = format!("Number of output destinations: {}\n", destinations.len());
    for (index, name) in destinations.iter().enumerate() {
        out.push_str(&format!("[{index}] {name}\n"));
    }
    out
}
