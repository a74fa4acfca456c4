//! Data-driven dispatch from wire commands to motion primitives

use crate::joint::JointId;
use serial_link::WireCommand;

/// Degrees moved by one jog command.
pub const JOG_STEP: i16 = 10;

pub const GRIPPER_OPEN: u8 = 30;
pub const GRIPPER_CLOSED: u8 = 75;

/// Every wire command resolves to one of these. Targets are clamped by
/// the controller, not here.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Primitive {
    /// Drive one joint to an absolute angle.
    Absolute(JointId, u8),
    /// Jog one joint by a signed delta from its current angle.
    Relative(JointId, i16),
    /// Every joint to its home angle, in index order.
    HomeAll,
    /// No motion; immediately successful.
    Halt,
}

/// The command table. Exhaustive over the vocabulary, so adding a wire
/// command without a motion mapping fails to compile.
pub fn primitive_for(cmd: WireCommand) -> Primitive {
    match cmd {
        WireCommand::PickUp => Primitive::Absolute(JointId::Gripper, GRIPPER_CLOSED),
        WireCommand::PutDown => Primitive::Absolute(JointId::Gripper, GRIPPER_OPEN),
        WireCommand::MoveLeft => Primitive::Relative(JointId::Base, JOG_STEP),
        WireCommand::MoveRight => Primitive::Relative(JointId::Base, -JOG_STEP),
        WireCommand::MoveForward => Primitive::Relative(JointId::Shoulder, -JOG_STEP),
        WireCommand::MoveBackward => Primitive::Relative(JointId::Shoulder, JOG_STEP),
        WireCommand::MoveUp => Primitive::Relative(JointId::Elbow, JOG_STEP),
        WireCommand::MoveDown => Primitive::Relative(JointId::Elbow, -JOG_STEP),
        WireCommand::RotateClockwise => Primitive::Relative(JointId::WristRoll, JOG_STEP),
        WireCommand::RotateCounterclockwise => Primitive::Relative(JointId::WristRoll, -JOG_STEP),
        WireCommand::Home => Primitive::HomeAll,
        WireCommand::Stop => Primitive::Halt,
    }
}
