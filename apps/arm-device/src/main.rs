use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tracing::info;

use motion_fsm::{DeviceService, MotionConfig, MotionController, TracingActuator};
use serial_link::{LineLink, LinkConfig, SerialPortLink};

#[derive(Parser, Debug)]
#[command(name = "arm-device", version, about = "Arm controller service")]
struct Cli {
    /// Serial port the host is attached to; auto-discovered when omitted
    #[arg(long)]
    port: Option<String>,

    /// Baud rate
    #[arg(long, default_value_t = 115_200u32)]
    baud: u32,

    /// Delay between one-degree steps in milliseconds (the speed knob)
    #[arg(long, default_value_t = 15u64)]
    step_delay_ms: u64,
}

fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();

    let link_config = LinkConfig {
        baud: cli.baud,
        // The device side blocks on the line; no reset settle needed.
        settle_delay_ms: 0,
        ..LinkConfig::default()
    };
    let link = match cli.port.as_deref() {
        Some(path) => SerialPortLink::open(path, &link_config)?,
        None => SerialPortLink::discover(&link_config)?,
    };

    let motion_config = MotionConfig {
        step_delay: Duration::from_millis(cli.step_delay_ms),
    };
    let controller = MotionController::new(TracingActuator, motion_config);
    let mut service = DeviceService::new(link, controller);

    info!(baud = cli.baud, "starting controller loop");
    service.run()?;
    Ok(())
}

fn setup_tracing() {
    // Best-effort; avoid panics if already set
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
