use core::fmt;
use serde::{Deserialize, Serialize};

/// The fixed wire vocabulary. Every host→device message is exactly one of
/// these, encoded as a single `{"cmd":"<name>"}` line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireCommand {
    PickUp,
    PutDown,
    MoveLeft,
    MoveRight,
    MoveForward,
    MoveBackward,
    MoveUp,
    MoveDown,
    RotateClockwise,
    RotateCounterclockwise,
    Home,
    Stop,
}

impl WireCommand {
    pub const ALL: [WireCommand; 12] = [
        WireCommand::PickUp,
        WireCommand::PutDown,
        WireCommand::MoveLeft,
        WireCommand::MoveRight,
        WireCommand::MoveForward,
        WireCommand::MoveBackward,
        WireCommand::MoveUp,
        WireCommand::MoveDown,
        WireCommand::RotateClockwise,
        WireCommand::RotateCounterclockwise,
        WireCommand::Home,
        WireCommand::Stop,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WireCommand::PickUp => "pick_up",
            WireCommand::PutDown => "put_down",
            WireCommand::MoveLeft => "move_left",
            WireCommand::MoveRight => "move_right",
            WireCommand::MoveForward => "move_forward",
            WireCommand::MoveBackward => "move_backward",
            WireCommand::MoveUp => "move_up",
            WireCommand::MoveDown => "move_down",
            WireCommand::RotateClockwise => "rotate_clockwise",
            WireCommand::RotateCounterclockwise => "rotate_counterclockwise",
            WireCommand::Home => "home",
            WireCommand::Stop => "stop",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for WireCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed device reply line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Reply {
    Ok,
    Err(String),
    /// Boot banner, sent once after homing completes.
    Ready,
    /// Anything else. Treated as success by the commander; firmware
    /// variants that do not ack explicitly must not block the host.
    Unrecognized(String),
}

impl Reply {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line == "OK" {
            Reply::Ok
        } else if let Some(rest) = line.strip_prefix("ERR") {
            Reply::Err(rest.trim_start_matches(':').trim().to_string())
        } else if line == "READY" {
            Reply::Ready
        } else {
            Reply::Unrecognized(line.to_string())
        }
    }
}

/// Successful acknowledgment of one command.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Ack {
    /// True when success was assumed (lenient timeout or unrecognized
    /// reply) rather than confirmed by an explicit `OK`.
    pub assumed: bool,
    pub detail: String,
}

impl Ack {
    pub fn confirmed(detail: impl Into<String>) -> Self {
        Self {
            assumed: false,
            detail: detail.into(),
        }
    }

    pub fn assumed(detail: impl Into<String>) -> Self {
        Self {
            assumed: true,
            detail: detail.into(),
        }
    }
}

/// Transport parameters. The settle delay covers the device reset that
/// opening the line triggers on most hobby controller boards.
#[derive(Clone, Debug)]
pub struct LinkConfig {
    pub baud: u32,
    pub read_timeout_ms: u64,
    pub settle_delay_ms: u64,
    /// Lenient policy: a missing reply within the timeout window counts
    /// as success. Kept as an explicit flag so tests can assert both
    /// modes.
    pub treat_timeout_as_success: bool,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            baud: 115_200,
            read_timeout_ms: 1_000,
            settle_delay_ms: 2_000,
            treat_timeout_as_success: true,
        }
    }
}

/// A discoverable serial endpoint.
#[derive(Clone, Debug)]
pub struct PortInfo {
    pub name: String,
    pub description: String,
}
