use std::{
    io,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
};

use feeder_control::{
    Command, CommandChannel, CommandTransport, ControlPanel, Direction, FeederError,
};

/// Shared view onto everything a fake transport saw, kept alive after the
/// panel takes ownership of the transport itself.
#[derive(Default, Clone)]
struct Wire {
    lines: Arc<Mutex<Vec<String>>>,
    fail_writes: Arc<AtomicBool>,
}

impl Wire {
    fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    fn set_failing(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

struct FakeTransport {
    wire: Wire,
}

impl CommandTransport for FakeTransport {
    fn send_bytes(&mut self, bytes: &[u8]) -> Result<(), FeederError> {
        if self.wire.fail_writes.load(Ordering::SeqCst) {
            return Err(FeederError::Send(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "device unplugged",
            )));
        }
        let line = String::from_utf8(bytes.to_vec()).unwrap();
        self.wire.lines.lock().unwrap().push(line);
        Ok(())
    }
}

fn connected_panel() -> (ControlPanel<FakeTransport>, Wire) {
    let wire = Wire::default();
    let transport = FakeTransport { wire: wire.clone() };
    (ControlPanel::new(CommandChannel::connected(transport)), wire)
}

#[test]
fn valid_speed_updates_display_and_sends_one_line() {
    let (mut panel, wire) = connected_panel();

    panel.apply_speed("25");

    assert_eq!(panel.speed(), 25);
    assert_eq!(wire.lines(), vec!["RPM 25\n"]);
    assert_eq!(panel.status(), "Sent: RPM 25");
}

#[test]
fn meter_saturates_but_readout_keeps_raw_value() {
    let (mut panel, _wire) = connected_panel();

    panel.apply_speed("250");

    assert_eq!(panel.speed(), 250);
    assert_eq!(panel.speed_level(), 100);
}

#[test]
fn invalid_speed_never_reaches_the_wire() {
    let (mut panel, wire) = connected_panel();

    for input in ["abc", "-5", "", "12.5", " 1 2"] {
        panel.apply_speed(input);
        assert!(panel.status().contains("invalid speed"), "input {input:?}");
    }

    assert!(wire.lines().is_empty());
    assert_eq!(panel.speed(), 0);
}

#[test]
fn start_without_direction_sends_start_only() {
    let (mut panel, wire) = connected_panel();

    panel.start();

    assert_eq!(wire.lines(), vec!["START\n"]);
}

#[test]
fn start_resends_selected_direction() {
    let (mut panel, wire) = connected_panel();

    panel.select_direction(Direction::CounterClockwise);
    panel.start();

    assert_eq!(wire.lines(), vec!["CCW\n", "CCW\n", "START\n"]);
    assert_eq!(panel.direction(), Some(Direction::CounterClockwise));
}

#[test]
fn stop_resets_display_even_when_write_fails() {
    let (mut panel, wire) = connected_panel();

    panel.apply_speed("40");
    assert_eq!(panel.speed(), 40);

    wire.set_failing(true);
    panel.stop();

    assert_eq!(panel.speed(), 0);
    assert!(panel.status().contains("write to feeder controller failed"));
    assert_eq!(wire.lines(), vec!["RPM 40\n"]);
}

#[test]
fn failed_send_keeps_previous_speed() {
    let (mut panel, wire) = connected_panel();

    panel.apply_speed("30");
    wire.set_failing(true);
    panel.apply_speed("60");

    assert_eq!(panel.speed(), 30);
    assert!(panel.status().contains("write to feeder controller failed"));
}

#[test]
fn selection_sticks_when_send_fails() {
    let (mut panel, wire) = connected_panel();

    wire.set_failing(true);
    panel.select_direction(Direction::Clockwise);

    assert_eq!(panel.direction(), Some(Direction::Clockwise));

    wire.set_failing(false);
    panel.start();

    assert_eq!(wire.lines(), vec!["CW\n", "START\n"]);
}

#[test]
fn disconnected_channel_reports_not_connected_without_writing() {
    let mut channel = CommandChannel::<FakeTransport>::disconnected();

    assert!(!channel.is_connected());
    let err = channel.send(&Command::Start).unwrap_err();
    assert!(matches!(err, FeederError::NotConnected));
}

#[test]
fn disconnected_panel_never_updates_the_display() {
    let mut panel = ControlPanel::new(CommandChannel::<FakeTransport>::disconnected());

    panel.apply_speed("25");

    assert!(!panel.is_connected());
    assert_eq!(panel.speed(), 0);
    assert_eq!(panel.status(), "feeder controller not connected");
}
