//! Serial port connection to the RFID board.

use super::{Frame, LineSource};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};
use std::io::{ErrorKind, Read};
use std::time::Duration;

/// Configuration for the serial connection (always 8N1, no flow control).
#[derive(Debug, Clone)]
pub struct PortConfig {
    pub port_path: String,
    pub baud_rate: u32,
    pub timeout: Duration,
}

impl PortConfig {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            port_path: cfg.port.clone(),
            baud_rate: cfg.baud_rate,
            timeout: Duration::from_millis(cfg.timeout_ms),
        }
    }
}

/// Longest line kept while waiting for its terminator. Card ids are far
/// shorter; anything past this is line noise.
pub const MAX_LINE: usize = 256;

pub struct SerialReader<R = Box<dyn SerialPort>> {
    port: R,
    pending: Vec<u8>,
    overflowed: bool,
}

impl SerialReader {
    pub fn open(config: &PortConfig) -> AppResult<Self> {
        let port = serialport::new(&config.port_path, config.baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(config.timeout)
            .open()
            .map_err(|source| AppError::SerialOpen {
                port: config.port_path.clone(),
                source,
            })?;

        Ok(Self::from_reader(port))
    }
}

impl<R: Read> SerialReader<R> {
    /// Assemble lines from any byte stream that reports timeouts the way
    /// a serial port does.
    pub fn from_reader(port: R) -> Self {
        Self {
            port,
            pending: Vec::new(),
            overflowed: false,
        }
    }

    fn take_line(&mut self) -> AppResult<Frame> {
        let mut line: Vec<u8> = std::mem::take(&mut self.pending);
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        let text = String::from_utf8(line)
            .map_err(|e| AppError::Decode(format!("not valid UTF-8: {e}")))?;
        Ok(Frame::Line(text))
    }

    fn push_byte(&mut self, byte: u8) -> AppResult<Option<Frame>> {
        if byte == b'\n' {
            if self.overflowed {
                self.overflowed = false;
                return Ok(None);
            }
            return self.take_line().map(Some);
        }
        if self.overflowed {
            return Ok(None);
        }
        if self.pending.len() >= MAX_LINE {
            self.pending.clear();
            self.overflowed = true;
            return Err(AppError::Decode(format!(
                "line longer than {MAX_LINE} bytes dropped"
            )));
        }
        self.pending.push(byte);
        Ok(None)
    }
}

impl<R: Read> LineSource for SerialReader<R> {
    /// Read until a newline or the port timeout. A partial line is kept
    /// for the next call rather than being returned half-finished.
    fn read_frame(&mut self) -> AppResult<Frame> {
        let mut byte = [0u8; 1];

        loop {
            match self.port.read(&mut byte) {
                Ok(1) => {
                    if let Some(frame) = self.push_byte(byte[0])? {
                        return Ok(frame);
                    }
                }
                Ok(_) => return Ok(Frame::Idle),
                Err(e) if e.kind() == ErrorKind::TimedOut => return Ok(Frame::Idle),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Information about a detected serial port
#[derive(Debug, Clone)]
pub struct PortInfo {
    pub path: String,
    pub kind: &'static str,
    pub product: Option<String>,
}

/// List all available serial ports
pub fn list_ports() -> AppResult<Vec<PortInfo>> {
    let ports = serialport::available_ports()?;

    Ok(ports
        .into_iter()
        .map(|p| {
            let (kind, product) = match p.port_type {
                serialport::SerialPortType::UsbPort(info) => ("USB Serial", info.product),
                serialport::SerialPortType::PciPort => ("PCI Serial", None),
                serialport::SerialPortType::BluetoothPort => ("Bluetooth", None),
                serialport::SerialPortType::Unknown => ("Unknown", None),
            };
            PortInfo {
                path: p.port_name,
                kind,
                product,
            }
        })
        .collect())
}
