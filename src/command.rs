use std::fmt;

/// Spin direction of the feeder disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Wire token understood by the controller firmware.
    pub fn token(self) -> &'static str {
        match self {
            Direction::Clockwise => "CW",
            Direction::CounterClockwise => "CCW",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Clockwise => "Clockwise",
            Direction::CounterClockwise => "Counter-Clockwise",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// One controller command. `Display` is the wire encoding, without the
/// line terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SetSpeed(u32),
    SetDirection(Direction),
    Start,
    Stop,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::SetSpeed(rpm) => write!(f, "RPM {rpm}"),
            Command::SetDirection(direction) => f.write_str(direction.token()),
            Command::Start => f.write_str("START"),
            Command::Stop => f.write_str("STOP"),
        }
    }
}
