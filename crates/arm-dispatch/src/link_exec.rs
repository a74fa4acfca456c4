//! Hardware path: classified command → wire sequence over the link

use crate::{wire_sequence, ExecutionResult, Executor, GripTracker};
use command_lexicon::Command;
use serial_link::{Commander, LineLink, LinkError};

/// Sends the arm-side wire sequence for a routed command through a
/// [`Commander`] and folds the acknowledgment semantics into an
/// [`ExecutionResult`]. Gripper commands are gated by a [`GripTracker`]
/// so a redundant pick or place is skipped instead of sent.
pub struct LinkExecutor<L: LineLink> {
    commander: Commander<L>,
    grip: GripTracker,
}

impl<L: LineLink> LinkExecutor<L> {
    pub fn new(commander: Commander<L>) -> Self {
        Self {
            commander,
            grip: GripTracker::new(),
        }
    }

    pub fn commander(&self) -> &Commander<L> {
        &self.commander
    }
}

impl<L: LineLink> Executor for LinkExecutor<L> {
    fn name(&self) -> &'static str {
        "hardware"
    }

    fn execute(&mut self, command: &Command) -> ExecutionResult {
        let sequence = wire_sequence(command.action);
        let mut sent = Vec::with_capacity(sequence.len());
        let mut skipped = Vec::new();
        let mut assumed = false;
        for &wire in sequence {
            if let Err(reason) = self.grip.advance(wire) {
                tracing::info!(%wire, reason, "skipping gripper no-op");
                skipped.push(reason);
                continue;
            }
            match self.commander.send(wire) {
                Ok(ack) => {
                    assumed |= ack.assumed;
                    sent.push(wire.as_str());
                }
                Err(LinkError::Device(reason)) => {
                    return ExecutionResult::fail(format!("device rejected {wire}: {reason}"));
                }
                Err(LinkError::Timeout) => {
                    return ExecutionResult::fail(format!("no reply to {wire} within timeout"));
                }
                Err(e) => {
                    return ExecutionResult::fail(format!("link failure during {wire}: {e}"));
                }
            }
        }
        if sent.is_empty() && !skipped.is_empty() {
            return ExecutionResult::ok(format!("no-op: {}", skipped.join("; ")));
        }
        ExecutionResult::ok(format!("executed on hardware: {}", command.reasoning)).with_data(
            serde_json::json!({
                "backend": self.name(),
                "commands": sent,
                "skipped": skipped,
                "assumed_ack": assumed,
            }),
        )
    }
}
