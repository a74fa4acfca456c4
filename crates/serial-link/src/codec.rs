//! One-line wire encoding
//!
//! Host→device: `{"cmd":"move_left"}` per line. Device→host: `OK`,
//! `ERR: <reason>`, or the `READY` boot banner, parsed by [`crate::Reply`].

use crate::{LinkError, Result, WireCommand};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
struct Envelope {
    cmd: WireCommand,
}

/// Encode one command as its wire line (no trailing newline).
pub fn encode(cmd: WireCommand) -> String {
    // Serializing a {"cmd": <unit variant>} mapping cannot fail.
    serde_json::to_string(&Envelope { cmd })
        .unwrap_or_else(|_| format!("{{\"cmd\":\"{}\"}}", cmd.as_str()))
}

/// Decode one received command line (device side).
pub fn decode_command(line: &str) -> Result<WireCommand> {
    let env: Envelope =
        serde_json::from_str(line.trim()).map_err(|_| LinkError::Codec("malformed command line"))?;
    Ok(env.cmd)
}
