//! Simulation path: the same wire sequence against an in-memory arm

use crate::{wire_sequence, ExecutionResult, Executor, GripTracker};
use command_lexicon::Command;
use motion_fsm::{MotionConfig, MotionController, RecordingActuator};
use std::time::Duration;

/// Runs commands against an in-memory [`MotionController`] instead of a
/// serial port. Used when no arm is attached, and as the fallback when
/// port discovery fails. Gripper commands pass through the same
/// [`GripTracker`] gate as the hardware path.
pub struct SimExecutor {
    controller: MotionController<RecordingActuator>,
    grip: GripTracker,
}

impl SimExecutor {
    pub fn new() -> Self {
        let config = MotionConfig {
            step_delay: Duration::ZERO,
        };
        let mut controller = MotionController::new(RecordingActuator::new(), config);
        // An in-memory boot cannot fail: the recording actuator accepts
        // every write.
        if let Err(e) = controller.boot() {
            tracing::error!(error = %e, "simulated boot failed");
        }
        Self {
            controller,
            grip: GripTracker::new(),
        }
    }

    pub fn angles(&self) -> [u8; 6] {
        self.controller.angles()
    }
}

impl Default for SimExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for SimExecutor {
    fn name(&self) -> &'static str {
        "sim"
    }

    fn execute(&mut self, command: &Command) -> ExecutionResult {
        let sequence = wire_sequence(command.action);
        let mut run = Vec::with_capacity(sequence.len());
        let mut skipped = Vec::new();
        for &wire in sequence {
            if let Err(reason) = self.grip.advance(wire) {
                tracing::info!(%wire, reason, "skipping gripper no-op");
                skipped.push(reason);
                continue;
            }
            if let Err(e) = self.controller.execute(wire) {
                return ExecutionResult::fail(format!("simulated {wire} failed: {e}"));
            }
            run.push(wire.as_str());
        }
        if run.is_empty() && !skipped.is_empty() {
            return ExecutionResult::ok(format!("no-op: {}", skipped.join("; ")));
        }
        ExecutionResult::ok(format!("executed in simulation: {}", command.reasoning)).with_data(
            serde_json::json!({
                "backend": self.name(),
                "commands": run,
                "skipped": skipped,
                "joint_angles": self.controller.angles(),
            }),
        )
    }
}
