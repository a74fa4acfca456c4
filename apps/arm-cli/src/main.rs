use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tracing::{info, warn};

use arm_dispatch::{Dispatcher, Executor, LinkExecutor, SimExecutor};
use command_lexicon::classify;
use serial_link::{Commander, LineLink, LinkConfig, LinkError, SerialPortLink, WireCommand};

#[derive(Parser, Debug)]
#[command(
    name = "arm",
    version,
    about = "Jenga arm host CLI",
    disable_help_subcommand = true
)]
struct Cli {
    /// Use the in-memory simulator instead of a serial port
    #[arg(long, action = ArgAction::SetTrue, global = true)]
    sim: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List available serial endpoints
    Ports,
    /// Classify a request and print the structured command as JSON
    Classify {
        /// Natural-language request (joined with spaces)
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Send one raw wire command and print the acknowledgment
    Send {
        /// Wire command name (e.g. move_left, pick_up, home)
        command: String,
        /// Serial port path; auto-discovered when omitted
        #[arg(long)]
        port: Option<String>,
        /// Baud rate
        #[arg(long, default_value_t = 115_200u32)]
        baud: u32,
        /// Fail on a silent device instead of assuming success
        #[arg(long, action = ArgAction::SetTrue)]
        strict: bool,
    },
    /// Interactive loop: read requests from stdin, classify, execute
    Run {
        /// Serial port path; auto-discovered when omitted
        #[arg(long)]
        port: Option<String>,
        /// Baud rate
        #[arg(long, default_value_t = 115_200u32)]
        baud: u32,
        /// Fail on a silent device instead of assuming success
        #[arg(long, action = ArgAction::SetTrue)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Ports => ports(),
        Commands::Classify { text } => classify_text(&text.join(" ")),
        Commands::Send {
            command,
            port,
            baud,
            strict,
        } => send_one(&command, port.as_deref(), link_config(baud, strict), cli.sim),
        Commands::Run { port, baud, strict } => {
            run_loop(port.as_deref(), link_config(baud, strict), cli.sim)
        }
    }
}

fn setup_tracing() {
    // Best-effort; avoid panics if already set
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn link_config(baud: u32, strict: bool) -> LinkConfig {
    LinkConfig {
        baud,
        treat_timeout_as_success: !strict,
        ..LinkConfig::default()
    }
}

fn ports() -> Result<()> {
    let ports = SerialPortLink::list()?;
    if ports.is_empty() {
        println!("no serial endpoints found");
        return Ok(());
    }
    for p in ports {
        println!("{}\t{}", p.name, p.description);
    }
    Ok(())
}

fn classify_text(text: &str) -> Result<()> {
    let command = classify(text);
    println!("{}", serde_json::to_string_pretty(&command)?);
    Ok(())
}

/// Open the port (explicit path or vendor discovery), ride out the
/// reset-on-connect settle delay, and consume the boot banner.
fn open_hardware(
    port: Option<&str>,
    config: LinkConfig,
) -> serial_link::Result<Commander<SerialPortLink>> {
    let mut commander = match port {
        Some(path) => Commander::connect(path, config)?,
        None => {
            let link = SerialPortLink::discover(&config)?;
            if config.settle_delay_ms > 0 {
                std::thread::sleep(Duration::from_millis(config.settle_delay_ms));
            }
            Commander::new(link, config)
        }
    };
    // Homing runs before the banner, so allow well past one read window.
    match commander.wait_ready(5_000) {
        Ok(()) => info!("device ready"),
        Err(LinkError::Timeout) => warn!("no READY banner; continuing"),
        Err(e) => return Err(e),
    }
    Ok(commander)
}

fn send_one(name: &str, port: Option<&str>, config: LinkConfig, sim: bool) -> Result<()> {
    let cmd = WireCommand::parse(name).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown wire command '{name}' (expected one of: {})",
            WireCommand::ALL.map(|c| c.as_str()).join(", ")
        )
    })?;
    if sim {
        println!("sim: {cmd} acknowledged");
        return Ok(());
    }
    let mut commander = open_hardware(port, config)?;
    let ack = commander.send(cmd)?;
    if ack.assumed {
        println!("{cmd}: assumed ok ({})", ack.detail);
    } else {
        println!("{cmd}: ok");
    }
    Ok(())
}

/// Pick the backend: hardware when a port opens, otherwise the
/// simulator, so the loop works on a laptop with nothing plugged in.
fn make_executor(port: Option<&str>, config: LinkConfig, sim: bool) -> Box<dyn Executor> {
    if sim {
        return Box::new(SimExecutor::new());
    }
    match open_hardware(port, config) {
        Ok(commander) => Box::new(LinkExecutor::new(commander)),
        Err(e) => {
            warn!(error = %e, "no arm endpoint; falling back to simulator");
            Box::new(SimExecutor::new())
        }
    }
}

fn run_loop(port: Option<&str>, config: LinkConfig, sim: bool) -> Result<()> {
    let mut dispatcher = Dispatcher::new(make_executor(port, config, sim));
    println!("backend: {}", dispatcher.backend());
    println!("type a request (quit to exit):");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text.eq_ignore_ascii_case("quit") || text.eq_ignore_ascii_case("exit") {
            break;
        }
        let command = classify(text);
        let result = dispatcher.dispatch(&command);
        let status = if result.success { "ok" } else { "failed" };
        println!("[{status}] {}", result.message);
        if let Some(data) = result.data {
            println!("{data}");
        }
    }
    Ok(())
}
