//! waypath-send — stream a saved path or move file to the actuator.
//!
//! Usage:
//!   waypath-send route.json --dry-run
//!   waypath-send route.csv --port /dev/ttyUSB0 --handshake

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use waypath_lib::cli::init_logging;
use waypath_lib::send::{load_commands, stream_lines};
use waypath_lib::{Link, open_serial};

/// Send a path/move file over serial as a framed command stream.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path or move file (.json or .csv)
    path_file: PathBuf,

    /// Serial device; without it the stream is printed
    #[arg(long)]
    port: Option<String>,

    /// Serial baud rate
    #[arg(long, default_value = "115200")]
    baud: u32,

    /// Serial read timeout in milliseconds
    #[arg(long, default_value = "2000")]
    timeout_ms: u64,

    /// Wait for the device to send RDY before streaming
    #[arg(long)]
    handshake: bool,

    /// Print the stream instead of sending it
    #[arg(long)]
    dry_run: bool,

    /// Send every unit move as its own command
    #[arg(long)]
    no_condense: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    // The whole stream is validated before any device is touched.
    let commands = load_commands(&args.path_file)?;
    let lines = stream_lines(&commands, args.no_condense);

    let port = match &args.port {
        Some(port) if !args.dry_run => port,
        _ => {
            for line in &lines {
                println!("{line}");
            }
            return Ok(());
        }
    };

    let device = open_serial(port, args.baud, Duration::from_millis(args.timeout_ms))?;
    let mut link = Link::new(device);
    if args.handshake {
        link.wait_ready()?;
    }
    link.send_lines(&lines)?;
    log::info!("sent {} lines to {port}", lines.len());
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.quiet, false);
    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
