//! Argument helpers shared by the binaries.

use clap::ValueEnum;
use waypath_core::{Color, Point};

/// Goal color accepted on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    #[value(name = "R")]
    R,
    #[value(name = "G")]
    G,
    #[value(name = "B")]
    B,
}

impl From<ColorArg> for Color {
    fn from(c: ColorArg) -> Self {
        match c {
            ColorArg::R => Color::Red,
            ColorArg::G => Color::Green,
            ColorArg::B => Color::Blue,
        }
    }
}

/// Parse `x,y` into a point.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("coordinate must be x,y, got {s:?}"))?;
    let int = |v: &str| {
        v.trim()
            .parse::<i32>()
            .map_err(|_| format!("coordinate must be integers like 3,7, got {s:?}"))
    };
    Ok(Point::new(int(x)?, int(y)?))
}

/// Install the `env_logger` backend. `RUST_LOG` overrides the default
/// filter picked from the flags.
pub fn init_logging(quiet: bool, verbose: bool) {
    let level = if verbose {
        "trace"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
