use clap::Parser;
use egui::{Align2, Color32};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use feeder_control::{
    find_controller_port, CommandChannel, ControlPanel, Direction, SerialConfig, SerialTransport,
    SPEED_SCALE_MAX,
};

#[cfg(windows)]
const FALLBACK_PORT: &str = "COM3";
#[cfg(not(windows))]
const FALLBACK_PORT: &str = "/dev/ttyUSB0";

/// Desktop control panel for the centrifugal feeder motor controller
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Serial port of the motor controller (skips auto-detection)
    #[arg(short, long)]
    port: Option<String>,

    /// Serial baudrate
    #[arg(short, long, default_value_t = 9_600)]
    baud: u32,
}

struct FeederApp {
    panel: ControlPanel<SerialTransport>,
    port_name: String,
    speed_input: String,
    startup_error: Option<String>,
}

impl eframe::App for FeederApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dialog_open = self.startup_error.is_some();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!dialog_open, |ui| {
                ui.heading("Centrifugal Feeder Control");
                ui.label(format!(
                    "{} ({})",
                    self.port_name,
                    if self.panel.is_connected() {
                        "connected"
                    } else {
                        "not connected"
                    }
                ));
                ui.separator();

                ui.horizontal(|ui| {
                    ui.label("Set RPM:");
                    let edit = ui.text_edit_singleline(&mut self.speed_input);
                    let entered =
                        edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if ui.button("Apply").clicked() || entered {
                        self.panel.apply_speed(&self.speed_input);
                    }
                });

                ui.add(
                    egui::ProgressBar::new(
                        self.panel.speed_level() as f32 / SPEED_SCALE_MAX as f32,
                    )
                    .fill(Color32::from_rgb(255, 159, 67))
                    .text(format!("{} RPM", self.panel.speed())),
                );

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.label("Direction:");
                    for direction in [Direction::Clockwise, Direction::CounterClockwise] {
                        let selected = self.panel.direction() == Some(direction);
                        if ui.radio(selected, direction.label()).clicked() {
                            self.panel.select_direction(direction);
                        }
                    }
                });

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Start Motor").clicked() {
                        self.panel.start();
                    }
                    if ui.button("Stop Motor").clicked() {
                        self.panel.stop();
                    }
                });

                ui.separator();
                ui.label(self.panel.status());
            });
        });

        if dialog_open {
            egui::Window::new("Connection Error")
                .collapsible(false)
                .resizable(false)
                .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    if let Some(message) = &self.startup_error {
                        ui.label(message);
                    }
                    if ui.button("OK").clicked() {
                        self.startup_error = None;
                    }
                });
        }
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let port_name = args
        .port
        .or_else(find_controller_port)
        .unwrap_or_else(|| FALLBACK_PORT.to_string());

    let cfg = SerialConfig {
        baud_rate: args.baud,
        ..Default::default()
    };

    let (channel, startup_error) = match SerialTransport::open(&port_name, &cfg) {
        Ok(transport) => {
            info!(port = %port_name, baud = cfg.baud_rate, "connected to feeder controller");
            (CommandChannel::connected(transport), None)
        }
        Err(e) => {
            error!(error = %e, "startup connection failed");
            (
                CommandChannel::disconnected(),
                Some(format!("Could not connect to the feeder controller.\n{e}")),
            )
        }
    };

    let app = FeederApp {
        panel: ControlPanel::new(channel),
        port_name,
        speed_input: "25".to_string(),
        startup_error,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([440.0, 340.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Centrifugal Feeder Control",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
