use thiserror::Error;

pub type Result<T, E = LinkError> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("no matching serial endpoint found")]
    PortNotFound,
    #[error("I/O error: {0}")]
    Io(String),
    #[error("timeout")]
    Timeout,
    #[error("link closed; reconnect before sending")]
    Closed,
    #[error("device error: {0}")]
    Device(String),
    #[error("codec error: {0}")]
    Codec(&'static str),
}
