use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeederError {
    #[error("could not open {port}: {source}")]
    Connection {
        port: String,
        source: serialport::Error,
    },
    #[error("feeder controller not connected")]
    NotConnected,
    #[error("write to feeder controller failed: {0}")]
    Send(#[from] std::io::Error),
    #[error("invalid speed {input:?}: enter a non-negative whole number")]
    InvalidSpeed { input: String },
}
