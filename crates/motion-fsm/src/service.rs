//! Device service loop: line in, motion out, one-line ack back

use crate::actuator::Actuator;
use crate::controller::MotionController;
use serial_link::{codec, LineLink, LinkError};

/// Binds a [`MotionController`] to a [`LineLink`]. Single cooperative
/// loop: while a motion is executing the line is not polled, so commands
/// sent mid-motion sit in the UART buffer or are lost. That drop policy
/// lives entirely here; swap this loop to change it.
pub struct DeviceService<L: LineLink, A: Actuator> {
    link: L,
    controller: MotionController<A>,
}

impl<L: LineLink, A: Actuator> DeviceService<L, A> {
    pub fn new(link: L, controller: MotionController<A>) -> Self {
        Self { link, controller }
    }

    pub fn controller(&self) -> &MotionController<A> {
        &self.controller
    }

    /// Home all joints and emit the readiness banner, once.
    pub fn boot(&mut self) -> Result<(), LinkError> {
        self.controller
            .boot()
            .map_err(|e| LinkError::Io(e.to_string()))?;
        self.link.send_line("READY")
    }

    /// One loop iteration: wait for a command line, execute it, reply.
    /// Returns `Ok(true)` when a command was processed, `Ok(false)` on a
    /// quiet timeout.
    pub fn poll(&mut self, timeout_ms: Option<u64>) -> Result<bool, LinkError> {
        let line = match self.link.read_line(timeout_ms) {
            Ok(line) => line,
            Err(LinkError::Timeout) => return Ok(false),
            Err(e) => return Err(e),
        };
        match codec::decode_command(&line) {
            Ok(cmd) => match self.controller.execute(cmd) {
                Ok(()) => self.link.send_line("OK")?,
                Err(e) => {
                    tracing::warn!(%cmd, error = %e, "command failed");
                    self.link.send_line(&format!("ERR: {e}"))?;
                }
            },
            Err(e) => {
                tracing::warn!(%line, "undecodable command line");
                self.link.send_line(&format!("ERR: {e}"))?;
            }
        }
        Ok(true)
    }

    /// Run until the link faults.
    pub fn run(&mut self) -> Result<(), LinkError> {
        self.boot()?;
        loop {
            self.poll(None)?;
        }
    }
}
