use crate::{LineLink, LinkConfig, LinkError, PortInfo, Result};
use serialport::{SerialPort, SerialPortType};
use std::io::{Read, Write};
use std::time::Duration;

/// USB description substrings for the microcontroller families the arm
/// ships with. Discovery returns device order; first match wins.
const VENDOR_HINTS: &[&str] = &[
    "arduino",
    "ch340",
    "wch",
    "cp210",
    "ftdi",
    "usb serial",
    "usb-serial",
];

/// Line framing over a real serial port.
pub struct SerialPortLink {
    _port_path: String,
    port: Box<dyn SerialPort>,
    acc: Vec<u8>,
}

impl SerialPortLink {
    /// Scan available endpoints and open the first one whose description
    /// matches a known microcontroller vendor or USB-serial bridge.
    pub fn discover(config: &LinkConfig) -> Result<Self> {
        for info in Self::list()? {
            let desc = info.description.to_lowercase();
            if VENDOR_HINTS.iter().any(|hint| desc.contains(hint)) {
                tracing::info!(port = %info.name, desc = %info.description, "discovered arm endpoint");
                return Self::open(&info.name, config);
            }
        }
        Err(LinkError::PortNotFound)
    }

    fn take_buffered_line(&mut self) -> Option<String> {
        let pos = self.acc.iter().position(|&b| b == b'\n')?;
        let line: Vec<u8> = self.acc.drain(..=pos).collect();
        let trimmed = String::from_utf8_lossy(&line)
            .trim_end_matches(['\n', '\r'])
            .to_string();
        Some(trimmed)
    }
}

impl LineLink for SerialPortLink {
    fn open(path: &str, config: &LinkConfig) -> Result<Self> {
        let port = serialport::new(path, config.baud)
            .timeout(Duration::from_millis(config.read_timeout_ms))
            .open()
            .map_err(|e| LinkError::Io(e.to_string()))?;
        Ok(SerialPortLink {
            _port_path: path.to_string(),
            port,
            acc: Vec::with_capacity(128),
        })
    }

    fn list() -> Result<Vec<PortInfo>> {
        let mut out = Vec::new();
        for p in serialport::available_ports().map_err(|e| LinkError::Io(e.to_string()))? {
            let description = match p.port_type {
                SerialPortType::UsbPort(u) => {
                    let mut parts = Vec::new();
                    if let Some(m) = u.manufacturer {
                        parts.push(m);
                    }
                    if let Some(prod) = u.product {
                        parts.push(prod);
                    }
                    if parts.is_empty() {
                        "usb serial".to_string()
                    } else {
                        parts.join(" ")
                    }
                }
                SerialPortType::BluetoothPort => "bluetooth".to_string(),
                SerialPortType::PciPort => "pci".to_string(),
                SerialPortType::Unknown => "serial".to_string(),
            };
            out.push(PortInfo {
                name: p.port_name,
                description,
            });
        }
        Ok(out)
    }

    fn send_line(&mut self, line: &str) -> Result<()> {
        self.port
            .write_all(line.as_bytes())
            .and_then(|_| self.port.write_all(b"\n"))
            .map_err(|e| LinkError::Io(e.to_string()))
    }

    fn read_line(&mut self, timeout_ms: Option<u64>) -> Result<String> {
        if let Some(ms) = timeout_ms {
            self.port.set_timeout(Duration::from_millis(ms)).ok();
        }
        if let Some(line) = self.take_buffered_line() {
            return Ok(line);
        }
        let mut buf = [0u8; 128];
        loop {
            match self.port.read(&mut buf) {
                Ok(n) if n > 0 => {
                    self.acc.extend_from_slice(&buf[..n]);
                    if let Some(line) = self.take_buffered_line() {
                        return Ok(line);
                    }
                }
                Ok(_) => return Err(LinkError::Timeout),
                Err(e) if e.kind() == std::io::ErrorKind::TimedOut => {
                    return Err(LinkError::Timeout);
                }
                Err(e) => return Err(LinkError::Io(e.to_string())),
            }
        }
    }
}
