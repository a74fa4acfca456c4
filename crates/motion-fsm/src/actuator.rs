use crate::error::MotionError;
use crate::joint::JointId;

/// The hardware seam. The controller writes every intermediate angle
/// through this; a board port implements it over PWM.
pub trait Actuator {
    fn write_angle(&mut self, joint: JointId, angle: u8) -> Result<(), MotionError>;
}

/// Records every write. Backs the in-memory simulation executor and the
/// controller unit tests.
#[derive(Debug, Default)]
pub struct RecordingActuator {
    writes: Vec<(JointId, u8)>,
}

impl RecordingActuator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> &[(JointId, u8)] {
        &self.writes
    }

    pub fn write_count(&self) -> usize {
        self.writes.len()
    }

    pub fn clear(&mut self) {
        self.writes.clear();
    }
}

impl Actuator for RecordingActuator {
    fn write_angle(&mut self, joint: JointId, angle: u8) -> Result<(), MotionError> {
        self.writes.push((joint, angle));
        Ok(())
    }
}

/// Logs each write at debug level. Used by the device binary when no
/// board-specific PWM backend is wired in.
#[derive(Debug, Default)]
pub struct TracingActuator;

impl Actuator for TracingActuator {
    fn write_angle(&mut self, joint: JointId, angle: u8) -> Result<(), MotionError> {
        tracing::debug!(?joint, angle, "servo write");
        Ok(())
    }
}
