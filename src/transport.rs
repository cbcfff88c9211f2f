use crate::error::FeederError;

/// Byte sink behind the command channel. The production implementation is a
/// serial port; tests substitute recording or failing fakes.
pub trait CommandTransport: Send + 'static {
    fn send_bytes(&mut self, bytes: &[u8]) -> Result<(), FeederError>;
}
