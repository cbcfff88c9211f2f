use tracing::trace;

use crate::{command::Command, error::FeederError, transport::CommandTransport};

/// Owns the one link to the controller. Either connected or not; there is no
/// partially-open state. Sends are fire-and-forget: success means the write
/// was accepted by the transport, nothing is read back.
pub struct CommandChannel<T> {
    transport: Option<T>,
}

impl<T: CommandTransport> CommandChannel<T> {
    pub fn connected(transport: T) -> Self {
        Self {
            transport: Some(transport),
        }
    }

    /// Channel for running without hardware; every send reports
    /// [`FeederError::NotConnected`].
    pub fn disconnected() -> Self {
        Self { transport: None }
    }

    pub fn is_connected(&self) -> bool {
        self.transport.is_some()
    }

    /// Encode `command`, terminate it with a single newline and write it out.
    /// A transport failure leaves the connection in place; no reconnection is
    /// attempted.
    pub fn send(&mut self, command: &Command) -> Result<(), FeederError> {
        let transport = self.transport.as_mut().ok_or(FeederError::NotConnected)?;
        let mut line = command.to_string();
        line.push('\n');
        trace!(line = line.trim_end(), "writing command");
        transport.send_bytes(line.as_bytes())
    }
}
