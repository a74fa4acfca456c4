//! motion-fsm: the arm controller's motion state machine
//!
//! Owns the six joint channels and executes the wire vocabulary as
//! speed-limited single-joint moves: one degree per step with a fixed
//! inter-step delay, targets clamped into the servo range. The hardware
//! seam is the [`Actuator`] trait; everything above it is pure enough to
//! unit test on any host.

mod actuator;
pub use actuator::{Actuator, RecordingActuator, TracingActuator};

mod error;
pub use error::MotionError;

mod joint;
pub use joint::{Joint, JointId, ANGLE_MAX, ANGLE_MIN};

mod primitive;
pub use primitive::{primitive_for, Primitive, GRIPPER_CLOSED, GRIPPER_OPEN, JOG_STEP};

mod stepper;
pub use stepper::{clamp_angle, StepPlan};

mod controller;
pub use controller::{MotionConfig, MotionController, State};

mod service;
pub use service::DeviceService;
