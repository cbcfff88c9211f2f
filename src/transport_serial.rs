use std::time::Duration;

use serialport::SerialPort;

use crate::{error::FeederError, transport::CommandTransport};

/// Link parameters for the controller's USB-serial adapter.
#[derive(Debug, Clone, Copy)]
pub struct SerialConfig {
    pub baud_rate: u32,
    pub timeout: Duration,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            baud_rate: 9_600,
            timeout: Duration::from_secs(1),
        }
    }
}

pub struct SerialTransport {
    port: Box<dyn SerialPort>,
}

impl SerialTransport {
    /// Single connection attempt, no retry. A failure leaves the caller in
    /// disconnected mode; it is not fatal.
    pub fn open(port_name: &str, cfg: &SerialConfig) -> Result<Self, FeederError> {
        let port = serialport::new(port_name, cfg.baud_rate)
            .timeout(cfg.timeout)
            .open()
            .map_err(|source| FeederError::Connection {
                port: port_name.to_string(),
                source,
            })?;

        Ok(Self { port })
    }
}

impl CommandTransport for SerialTransport {
    fn send_bytes(&mut self, bytes: &[u8]) -> Result<(), FeederError> {
        self.port.write_all(bytes)?;
        self.port.flush()?;
        Ok(())
    }
}
