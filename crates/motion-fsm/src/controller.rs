//! The controller FSM: BOOT → READY → EXECUTING → READY

use crate::actuator::Actuator;
use crate::error::MotionError;
use crate::joint::{Joint, JointId};
use crate::primitive::{primitive_for, Primitive};
use crate::stepper::{clamp_angle, StepPlan};
use serial_link::WireCommand;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum State {
    Boot,
    Ready,
    Executing,
}

#[derive(Clone, Debug)]
pub struct MotionConfig {
    /// Delay between one-degree steps; the speed knob.
    pub step_delay: Duration,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(15),
        }
    }
}

/// Owns the six joint channels and the actuator. All mutation happens
/// through `execute`/`boot` on the device's single loop; no locking.
pub struct MotionController<A: Actuator> {
    joints: [Joint; 6],
    state: State,
    config: MotionConfig,
    actuator: A,
}

impl<A: Actuator> MotionController<A> {
    pub fn new(actuator: A, config: MotionConfig) -> Self {
        Self {
            joints: JointId::ALL.map(Joint::at_home),
            state: State::Boot,
            config,
            actuator,
        }
    }

    /// Construct with injected starting positions (testing and resume
    /// after power loss, where the servos hold their last angle).
    pub fn with_positions(actuator: A, config: MotionConfig, angles: [u8; 6]) -> Self {
        let mut controller = Self::new(actuator, config);
        for (joint, angle) in controller.joints.iter_mut().zip(angles) {
            joint.current_angle = clamp_angle(i32::from(angle));
            joint.target_angle = joint.current_angle;
        }
        controller
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn joint(&self, id: JointId) -> &Joint {
        &self.joints[id.index()]
    }

    pub fn angles(&self) -> [u8; 6] {
        self.joints.map(|j| j.current_angle)
    }

    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    /// Runs once: drive every joint to its home angle in index order,
    /// then enter READY. The caller emits the readiness banner.
    pub fn boot(&mut self) -> Result<(), MotionError> {
        tracing::info!("homing all joints");
        for id in JointId::ALL {
            let home = self.joints[id.index()].home_angle;
            self.move_joint(id, i32::from(home))?;
        }
        self.state = State::Ready;
        Ok(())
    }

    /// Execute one wire command to completion. Blocking relative to the
    /// device loop; the FSM always returns to READY, success or not.
    pub fn execute(&mut self, cmd: WireCommand) -> Result<(), MotionError> {
        self.state = State::Executing;
        let result = self.run_primitive(primitive_for(cmd));
        self.state = State::Ready;
        result
    }

    fn run_primitive(&mut self, primitive: Primitive) -> Result<(), MotionError> {
        match primitive {
            Primitive::Absolute(id, target) => self.move_joint(id, i32::from(target)),
            Primitive::Relative(id, delta) => {
                let target = i32::from(self.joints[id.index()].current_angle) + i32::from(delta);
                self.move_joint(id, target)
            }
            Primitive::HomeAll => {
                for id in JointId::ALL {
                    let home = self.joints[id.index()].home_angle;
                    self.move_joint(id, i32::from(home))?;
                }
                Ok(())
            }
            Primitive::Halt => Ok(()),
        }
    }

    /// The motion primitive: clamp, then step the current angle toward
    /// the target one degree at a time, writing the actuator at every
    /// step. `current_angle` tracks the last written output, so a fault
    /// mid-move leaves a physically valid recorded position that is
    /// never rolled back.
    fn move_joint(&mut self, id: JointId, target: i32) -> Result<(), MotionError> {
        let target = clamp_angle(target);
        let idx = id.index();
        self.joints[idx].target_angle = target;
        let plan = StepPlan::new(self.joints[idx].current_angle, target);
        tracing::trace!(?id, target, steps = plan.remaining(), "moving joint");
        for angle in plan {
            self.actuator.write_angle(id, angle)?;
            self.joints[idx].current_angle = angle;
            if !self.config.step_delay.is_zero() {
                std::thread::sleep(self.config.step_delay);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actuator::RecordingActuator;
    use crate::primitive::{GRIPPER_CLOSED, JOG_STEP};

    fn instant_config() -> MotionConfig {
        MotionConfig {
            step_delay: Duration::ZERO,
        }
    }

    fn booted() -> MotionController<RecordingActuator> {
        let mut c = MotionController::new(RecordingActuator::new(), instant_config());
        c.boot().unwrap();
        c
    }

    #[test]
    fn boot_enters_ready_with_joints_at_home() {
        let c = booted();
        assert_eq!(c.state(), State::Ready);
        for id in JointId::ALL {
            assert_eq!(c.joint(id).current_angle, id.home_angle());
        }
    }

    #[test]
    fn jog_moves_base_by_one_step() {
        let mut c = booted();
        c.execute(WireCommand::MoveLeft).unwrap();
        assert_eq!(
            i32::from(c.joint(JointId::Base).current_angle),
            90 + i32::from(JOG_STEP)
        );
        c.execute(WireCommand::MoveRight).unwrap();
        assert_eq!(c.joint(JointId::Base).current_angle, 90);
    }

    #[test]
    fn repeated_jogs_converge_to_the_limit_and_stay_there() {
        let mut c = booted();
        for _ in 0..40 {
            c.execute(WireCommand::MoveLeft).unwrap();
        }
        assert_eq!(c.joint(JointId::Base).current_angle, 180);
        // One more never exceeds the limit, and the recorded position
        // equals the clamped value.
        c.execute(WireCommand::MoveLeft).unwrap();
        assert_eq!(c.joint(JointId::Base).current_angle, 180);
        assert_eq!(c.joint(JointId::Base).target_angle, 180);
        assert!(c
            .actuator()
            .writes()
            .iter()
            .all(|&(_, angle)| angle <= 180));
    }

    #[test]
    fn every_intermediate_angle_is_written() {
        let mut c = booted();
        c.actuator_mut_for_tests().clear();
        c.execute(WireCommand::PickUp).unwrap();
        let writes: Vec<u8> = c
            .actuator()
            .writes()
            .iter()
            .filter(|(id, _)| *id == JointId::Gripper)
            .map(|&(_, a)| a)
            .collect();
        let expected: Vec<u8> = ((JointId::Gripper.home_angle() + 1)..=GRIPPER_CLOSED).collect();
        assert_eq!(writes, expected);
    }

    #[test]
    fn home_twice_is_idempotent() {
        let mut c = booted();
        c.execute(WireCommand::MoveUp).unwrap();
        c.execute(WireCommand::Home).unwrap();
        let count_after_first = c.actuator().write_count();
        c.execute(WireCommand::Home).unwrap();
        // Zero-length plans: no additional physical movement.
        assert_eq!(c.actuator().write_count(), count_after_first);
        assert_eq!(c.state(), State::Ready);
    }

    #[test]
    fn stop_is_a_successful_no_op() {
        let mut c = booted();
        let before = c.angles();
        c.execute(WireCommand::Stop).unwrap();
        assert_eq!(c.angles(), before);
    }

    #[test]
    fn shoulder_forward_is_negative() {
        let mut c = booted();
        c.execute(WireCommand::MoveForward).unwrap();
        assert_eq!(
            i32::from(c.joint(JointId::Shoulder).current_angle),
            90 - i32::from(JOG_STEP)
        );
    }

    #[test]
    fn injected_positions_are_clamped() {
        let c = MotionController::with_positions(
            RecordingActuator::new(),
            instant_config(),
            [200, 0, 90, 90, 90, 30],
        );
        assert_eq!(c.joint(JointId::Base).current_angle, 180);
        assert_eq!(c.joint(JointId::Shoulder).current_angle, 0);
    }

    #[test]
    fn fault_keeps_last_written_position() {
        struct FailAfter {
            remaining: usize,
            inner: RecordingActuator,
        }
        impl Actuator for FailAfter {
            fn write_angle(&mut self, joint: JointId, angle: u8) -> Result<(), MotionError> {
                if self.remaining == 0 {
                    return Err(MotionError::Actuator("servo bus fault".into()));
                }
                self.remaining -= 1;
                self.inner.write_angle(joint, angle)
            }
        }

        let actuator = FailAfter {
            remaining: 3,
            inner: RecordingActuator::new(),
        };
        let mut c =
            MotionController::with_positions(actuator, instant_config(), [90, 90, 90, 90, 90, 30]);
        c.state = State::Ready;
        let err = c.execute(WireCommand::MoveUp).unwrap_err();
        assert!(matches!(err, MotionError::Actuator(_)));
        // Three steps landed before the fault; state reflects them.
        assert_eq!(c.joint(JointId::Elbow).current_angle, 93);
        assert_eq!(c.state(), State::Ready);
    }

    impl MotionController<RecordingActuator> {
        fn actuator_mut_for_tests(&mut self) -> &mut RecordingActuator {
            &mut self.actuator
        }
    }
}
