use super::*;
use midir::*;
use std::fmt::Display;

/// [`MidiSending`] backed by the host MIDI service through `midir`.
///
/// `midir` binds one output connection to one destination, so opening the
/// port creates a connection per destination.
pub struct HostedMidiSender {
    client_name: String,
    host: MidiOutput,
    connections: Vec<(String, MidiOutputConnection)>,
}

impl HostedMidiSender {
    pub fn new(client_name: &str) -> Result<Self, MidiError> {
        Ok(Self {
            client_name: client_name.to_owned(),
            host: Self::create_client(client_name)?,
            connections: vec![],
        })
    }

    fn create_client(client_name: &str) -> Result<MidiOutput, MidiError> {
        MidiOutput::new(client_name).map_err(|e| MidiError::ClientCreation {
            name: client_name.to_owned(),
            reason: e.to_string(),
        })
    }

    fn port_name(&self, index: usize, port: &MidiOutputPort) -> Result<String, MidiError> {
        self.host
            .port_name(port)
            .map_err(|e| MidiError::PortName {
                index,
                reason: e.to_string(),
            })
    }
}

impl MidiSending for HostedMidiSender {
    fn list_destinations(&self) -> Result<Vec<String>, MidiError> {
        self.host
            .ports()
            .iter()
            .enumerate()
            .map(|(index, port)| self.port_name(index, port))
            .collect()
    }

    fn open(&mut self, port_name: &str) -> Result<usize, MidiError> {
        let ports = self.host.ports();

        self.connections = connect_each(&ports, |index, port| {
            let name = self.port_name(index, port)?;

            let connection = Self::create_client(&self.client_name)?
                .connect(port, &format!("{port_name}-{index}"))
                .map_err(|e| MidiError::PortConnection {
                    index,
                    name: name.clone(),
                    reason: e.to_string(),
                })?;

            log::trace!("[ MIDI ] : connected to {name}");
            Ok((name, connection))
        });

        Ok(self.connections.len())
    }

    fn send_to_all(&mut self, bytes: &[u8]) -> Result<usize, MidiError> {
        fan_out(&mut self.connections, bytes, |connection, bytes| {
            connection.send(bytes)
        })
    }

    fn close(&mut self) -> Result<(), MidiError> {
        for (name, connection) in self.connections.drain(..) {
            connection.close();
            log::trace!("[ MIDI ] : disconnected from {name}");
        }

        Ok(())
    }
}

/// Attach to every port that accepts a connection.
///
/// A port held exclusively by another application refuses the connection,
/// it is logged and left out.
fn connect_each<P, C, F>(ports: &[P], mut connect: F) -> Vec<(String, C)>
where
    F: FnMut(usize, &P) -> Result<(String, C), MidiError>,
{
    ports
        .iter()
        .enumerate()
        .filter_map(|(index, port)| match connect(index, port) {
            Ok(connection) => Some(connection),
            Err(e) => {
                log::error!("[ MIDI ] : skipping destination {index} : {e}");
                None
            }
        })
        .collect()
}

/// Deliver `bytes` to every destination, even after one of them failed.
/// Returns the number of deliveries, or the first failure.
fn fan_out<C, E, F>(
    destinations: &mut [(String, C)],
    bytes: &[u8],
    mut send: F,
) -> Result<usize, MidiError>
where
    E: Display,
    F: FnMut(&mut C, &[u8]) -> Result<(), E>,
{
    let mut first_error = None;
    let mut num_delivered = 0;

    for (index, (name, connection)) in destinations.iter_mut().enumerate() {
        match send(connection, bytes) {
            Ok(()) => num_delivered += 1,
            Err(e) => {
                log::error!("[ MIDI ] : failed to send to {name} : {e}");
                first_error.get_or_insert(MidiError::Send {
                    index,
                    reason: e.to_string(),
                });
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(num_delivered),
    }
}
