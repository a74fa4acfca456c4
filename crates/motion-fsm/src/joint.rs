//! Joint channels and their fixed roles

pub const ANGLE_MIN: u8 = 0;
pub const ANGLE_MAX: u8 = 180;

/// The six rotational degrees of freedom, in servo index order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum JointId {
    Base,
    Shoulder,
    Elbow,
    WristPitch,
    WristRoll,
    Gripper,
}

impl JointId {
    pub const ALL: [JointId; 6] = [
        JointId::Base,
        JointId::Shoulder,
        JointId::Elbow,
        JointId::WristPitch,
        JointId::WristRoll,
        JointId::Gripper,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The safe resting angle driven at boot and on explicit home.
    pub fn home_angle(&self) -> u8 {
        match self {
            // The gripper rests open; every other joint centers.
            JointId::Gripper => crate::primitive::GRIPPER_OPEN,
            _ => 90,
        }
    }
}

/// One joint channel. Mutated only by the motion controller; there is
/// exactly one logical thread of control on the device.
#[derive(Clone, Copy, Debug)]
pub struct Joint {
    pub id: JointId,
    /// Always equals the last angle written to the actuator.
    pub current_angle: u8,
    pub target_angle: u8,
    pub home_angle: u8,
}

impl Joint {
    pub fn at_home(id: JointId) -> Self {
        let home = id.home_angle();
        Self {
            id,
            current_angle: home,
            target_angle: home,
            home_angle: home,
        }
    }
}
