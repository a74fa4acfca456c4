use thiserror::Error;

#[derive(Debug, Error)]
pub enum MotionError {
    #[error("actuator fault: {0}")]
    Actuator(String),
}
