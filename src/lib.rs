pub mod channel;
pub mod command;
pub mod discovery;
pub mod error;
pub mod panel;
pub mod transport;
pub mod transport_serial;

pub use channel::CommandChannel;
pub use command::{Command, Direction};
pub use discovery::find_controller_port;
pub use error::FeederError;
pub use panel::{ControlPanel, SPEED_SCALE_MAX};
pub use transport::CommandTransport;
pub use transport_serial::{SerialConfig, SerialTransport};
