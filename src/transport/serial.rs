//! Serial transport implementation

use super::Transport;
use crate::config::SerialConfig;
use crate::error::Result;
use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};
use std::io::Read;
use std::time::Duration;

/// Serial transport for the Bluetooth SPP link
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
}

impl SerialTransport {
    /// Open the serial port described by `config`
    ///
    /// The handle stays open for the lifetime of the transport and is closed
    /// when it is dropped.
    pub fn open(config: &SerialConfig) -> Result<Self> {
        let path = port_path(&config.port);
        let port = serialport::new(&path, config.baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(Duration::from_millis(config.timeout_ms))
            .open()?;

        log::info!(
            "Opened serial port: {} at {} baud (timeout {}ms)",
            path,
            config.baud_rate,
            config.timeout_ms
        );

        Ok(SerialTransport { port })
    }
}

/// COM ports >= 10 need the `\\.\COMxx` form on Windows
#[cfg(target_os = "windows")]
fn port_path(name: &str) -> String {
    if name.starts_with("COM") {
        format!(r"\\.\{}", name)
    } else {
        name.to_string()
    }
}

#[cfg(not(target_os = "windows"))]
fn port_path(name: &str) -> String {
    name.to_string()
}

impl Transport for SerialTransport {
    fn read(&mut self, buffer: &mut [u8]) -> Result<usize> {
        match self.port.read(buffer) {
            Ok(n) => Ok(n),
            Err(e) if e.kind() == std::io::ErrorKind::TimedOut => Ok(0),
            Err(e) => Err(e.into()),
        }
    }
}

/// Print the serial ports the OS reports
pub fn list_ports() -> Result<()> {
    let ports = serialport::available_ports()?;
    if ports.is_empty() {
        println!("No serial ports found");
        return Ok(());
    }

    println!("Available serial ports:");
    for port in ports {
        let kind = match port.port_type {
            serialport::SerialPortType::UsbPort(info) => format!(
                "USB {:04x}:{:04x} {}",
                info.vid,
                info.pid,
                info.product.unwrap_or_default()
            ),
            serialport::SerialPortType::BluetoothPort => "Bluetooth".to_string(),
            serialport::SerialPortType::PciPort => "PCI".to_string(),
            serialport::SerialPortType::Unknown => "unknown".to_string(),
        };
        println!("  {} ({})", port.port_name, kind);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_os = "windows"))]
    #[test]
    fn test_port_path_passthrough() {
        assert_eq!(port_path("/dev/rfcomm0"), "/dev/rfcomm0");
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn test_port_path_com_prefix() {
        assert_eq!(port_path("COM12"), r"\\.\COM12");
        assert_eq!(port_path(r"\\.\COM3"), r"\\.\COM3");
    }
}
