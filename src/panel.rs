use tracing::{info, warn};

use crate::{
    channel::CommandChannel,
    command::{Command, Direction},
    error::FeederError,
    transport::CommandTransport,
};

/// Upper bound of the speed meter.
pub const SPEED_SCALE_MAX: u32 = 100;

/// Control surface state. The speed and direction held here are the client's
/// belief only: the controller never reports back, so they change solely as
/// a consequence of locally issued commands.
pub struct ControlPanel<T> {
    channel: CommandChannel<T>,
    speed: u32,
    direction: Option<Direction>,
    status: String,
}

impl<T: CommandTransport> ControlPanel<T> {
    pub fn new(channel: CommandChannel<T>) -> Self {
        Self {
            channel,
            speed: 0,
            direction: None,
            status: "Ready".to_string(),
        }
    }

    /// Parse and apply an operator-entered speed. Invalid input never reaches
    /// the channel; the displayed speed only follows a send the transport
    /// accepted.
    pub fn apply_speed(&mut self, input: &str) {
        let value = match parse_speed(input) {
            Ok(value) => value,
            Err(e) => {
                warn!(input, "rejected speed input");
                self.status = e.to_string();
                return;
            }
        };

        if self.dispatch(Command::SetSpeed(value)).is_ok() {
            self.speed = value;
        }
    }

    /// Record the selection and send it immediately. The selection sticks
    /// even when the send fails so a later start can retry it.
    pub fn select_direction(&mut self, direction: Direction) {
        self.direction = Some(direction);
        let _ = self.dispatch(Command::SetDirection(direction));
    }

    /// Re-assert the selected direction, then start. With no selection yet
    /// the direction step is skipped entirely; the controller must never see
    /// an empty line.
    pub fn start(&mut self) {
        if let Some(direction) = self.direction {
            let _ = self.dispatch(Command::SetDirection(direction));
        }
        let _ = self.dispatch(Command::Start);
    }

    /// Stop and zero the meter. The reset is unconditional; there is no
    /// read-back channel to confirm it.
    pub fn stop(&mut self) {
        let _ = self.dispatch(Command::Stop);
        self.speed = 0;
    }

    /// Displayed speed as last accepted, unclamped.
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Displayed speed saturated to the meter scale.
    pub fn speed_level(&self) -> u32 {
        self.speed.min(SPEED_SCALE_MAX)
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_connected(&self) -> bool {
        self.channel.is_connected()
    }

    fn dispatch(&mut self, command: Command) -> Result<(), FeederError> {
        match self.channel.send(&command) {
            Ok(()) => {
                info!(%command, "command sent");
                self.status = format!("Sent: {command}");
                Ok(())
            }
            Err(e) => {
                warn!(%command, error = %e, "command failed");
                self.status = e.to_string();
                Err(e)
            }
        }
    }
}

fn parse_speed(input: &str) -> Result<u32, FeederError> {
    input
        .trim()
        .parse()
        .map_err(|_| FeederError::InvalidSpeed {
            input: input.to_string(),
        })
}
