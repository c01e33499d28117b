pub mod list;
pub mod note;
pub mod play;

use crate::midi::{HostedMidiSender, MidiContext, MidiSending};
use std::io::Write;

pub const DEFAULT_CLIENT_NAME: &str = "midiplay";
pub const DEFAULT_PORT_NAME: &str = "midiplay-out";

const SUCCESS_MESSAGE: &str = "Program appears to have run successfully.";

#[derive(Debug, clap::Args)]
pub struct ClientOptions {
    /// Name of the MIDI client registered with the host
    #[arg(long, default_value = DEFAULT_CLIENT_NAME)]
    client: String,

    /// Name of the output port sending to the destinations
    #[arg(long, default_value = DEFAULT_PORT_NAME)]
    port: String,
}

impl ClientOptions {
    /// Run `f` against the host MIDI service, reporting on stdout.
    pub fn run<F>(&self, f: F) -> anyhow::Result<()>
    where
        F: FnOnce(&mut MidiContext) -> anyhow::Result<()>,
    {
        let sender = HostedMidiSender::new(&self.client)?;
        with_context(Box::new(sender), &self.port, &mut std::io::stdout(), f)
    }
}

/// Open the port, hand it to `f`, then dispose of it.
///
/// The port is still closed when `f` fails, the context shuts itself down
/// when dropped.
pub fn with_context<F>(
    sender: Box<dyn MidiSending>,
    port_name: &str,
    out: &mut impl Write,
    f: F,
) -> anyhow::Result<()>
where
    F: FnOnce(&mut MidiContext) -> anyhow::Result<()>,
{
    let mut ctx = MidiContext::new(sender);

    ctx.initialize(port_name)?;
    writeln!(
        out,
        "Sending to {} MIDI destination(s) through {port_name}",
        ctx.num_destinations()
    )?;

    f(&mut ctx)?;
    ctx.shutdown()?;

    writeln!(out, "{SUCCESS_MESSAGE}")?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::midi::{MidiNote, MockMidiSending};

    const PORT: &str = "test-out";

    fn host_with_three_devices() -> MockMidiSending {
        let mut host = MockMidiSending::new();
        host.expect_open()
            .withf(|port_name: &str| port_name == PORT)
            .times(1)
            .returning(|_| Ok(3));
        host.expect_close().times(1).returning(|| Ok(()));
        host
    }

    fn output(out: Vec<u8>) -> String {
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn reports_destinations_and_success() {
        let mut host = host_with_three_devices();
        host.expect_send_to_all().times(2).returning(|_| Ok(3));

        let mut out = vec![];
        with_context(Box::new(host), PORT, &mut out, |ctx| {
            let note = MidiNote::with_default(60)?;
            ctx.play_note_on(note)?;
            ctx.play_note_off(note)?;
            Ok(())
        })
        .unwrap();

        assert_eq!(
            output(out),
            format!("Sending to 3 MIDI destination(s) through {PORT}\n{SUCCESS_MESSAGE}\n")
        );
    }

    #[test]
    fn closes_the_port_when_playing_fails() {
        let host = host_with_three_devices();

        let mut out = vec![];
        let error = with_context(Box::new(host), PORT, &mut out, |_| {
            anyhow::bail!("song failed")
        })
        .unwrap_err();

        assert_eq!(error.to_string(), "song failed");
        assert!(!output(out).contains(SUCCESS_MESSAGE));
    }

    #[test]
    fn nothing_is_reported_when_the_port_cannot_open() {
        let mut host = MockMidiSending::new();
        host.expect_open().times(1).returning(|_| {
            Err(crate::midi::MidiError::ClientCreation {
                name: "midiplay".into(),
                reason: "no MIDI service".into(),
            })
        });
        host.expect_close().never();

        let mut out = vec![];
        with_context(Box::new(host), PORT, &mut out, |_| Ok(())).unwrap_err();
        assert!(out.is_empty());
    }
}
