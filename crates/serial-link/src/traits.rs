use crate::{LinkConfig, PortInfo, Result};

/// A minimal blocking line-oriented link. One command or reply per line;
/// the link appends and strips the newline framing itself.
pub trait LineLink {
    /// Open an endpoint by name (e.g., "/dev/ttyUSB0", "mock0").
    fn open(path: &str, config: &LinkConfig) -> Result<Self>
    where
        Self: Sized;

    /// Attempt to list available endpoints for this backend.
    fn list() -> Result<Vec<PortInfo>>;

    /// Write one line (newline appended by the link).
    fn send_line(&mut self, line: &str) -> Result<()>;

    /// Read one complete line, blocking up to the timeout in
    /// milliseconds (backend default when `None`).
    fn read_line(&mut self, timeout_ms: Option<u64>) -> Result<String>;
}
