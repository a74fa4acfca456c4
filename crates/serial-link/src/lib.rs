//! serial-link: line-framed command transport
//!
//! This crate carries one-line commands from the host to the arm
//! controller over a half-duplex serial line and reads the single-line
//! acknowledgment back. The default build enables a `mock` backend so
//! that binaries can compile and test on any host without hardware; the
//! `serial` feature adds the real serialport backend with endpoint
//! auto-discovery.

mod types;
pub use types::{Ack, LinkConfig, PortInfo, Reply, WireCommand};

mod error;
pub use error::{LinkError, Result};

mod traits;
pub use traits::LineLink;

pub mod codec;

mod commander;
pub use commander::Commander;

#[cfg(feature = "mock")]
mod mock;

#[cfg(feature = "mock")]
pub use mock::MockLink;

#[cfg(feature = "serial")]
mod serial;

#[cfg(feature = "serial")]
pub use serial::SerialPortLink;
