use serialport::{SerialPortInfo, SerialPortType};
use tracing::debug;

/// Description substrings of adapters the feeder controller ships with:
/// genuine Arduino boards and CH340 USB-serial clones.
pub const KNOWN_MARKERS: &[&str] = &["Arduino", "CH340"];

/// Scan the host's serial ports for the controller. Returns the port name of
/// the first recognized adapter, or `None` when nothing matches and the
/// caller should fall back to a configured port.
pub fn find_controller_port() -> Option<String> {
    let ports = serialport::available_ports().unwrap_or_default();
    debug!(count = ports.len(), "enumerated serial ports");
    pick_controller(&ports)
}

/// Host enumeration order varies between scans; rank candidates ascending by
/// port name so stable hardware always resolves to the same device.
pub fn pick_controller(ports: &[SerialPortInfo]) -> Option<String> {
    let mut candidates: Vec<&SerialPortInfo> =
        ports.iter().filter(|p| describes_known_adapter(p)).collect();
    candidates.sort_by(|a, b| a.port_name.cmp(&b.port_name));
    candidates.first().map(|p| p.port_name.clone())
}

fn describes_known_adapter(info: &SerialPortInfo) -> bool {
    let SerialPortType::UsbPort(usb) = &info.port_type else {
        return false;
    };
    [usb.product.as_deref(), usb.manufacturer.as_deref()]
        .into_iter()
        .flatten()
        .any(|desc| KNOWN_MARKERS.iter().any(|marker| desc.contains(marker)))
}
