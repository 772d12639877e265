//! waypath-route — plan a shortest route on a weighted grid.
//!
//! Usage:
//!   waypath-route --grid grid.json --color G --save-moves-txt moves.txt
//!
//! Set `RUST_LOG=trace` (or pass `--verbose`) to see every queue pop and
//! relaxation.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use clap::Parser;
use waypath_codec::StreamEncoder;
use waypath_core::{Color, Grid, Point};
use waypath_lib::cli::{ColorArg, init_logging, parse_point};
use waypath_lib::route::{distance_summary, moves_json, path_json, path_line, plan_route};

/// Plan a route from a start cell to a goal (explicit, or the closest point
/// of a color) and save it as path, moves or a framed command stream.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grid description JSON
    #[arg(long)]
    grid: PathBuf,

    /// Color whose closest point becomes the goal when --goal is absent
    #[arg(long, value_enum, ignore_case = true, default_value = "R")]
    color: ColorArg,

    /// Start cell as x,y
    #[arg(long, value_parser = parse_point, default_value = "0,0")]
    start: Point,

    /// Goal cell as x,y
    #[arg(long, value_parser = parse_point)]
    goal: Option<Point>,

    /// Write {"path": [[x, y], ...]} here
    #[arg(long)]
    save_path: Option<PathBuf>,

    /// Write {"moves": "..."} here
    #[arg(long)]
    save_moves: Option<PathBuf>,

    /// Write moves as a list of tokens instead of a string
    #[arg(long)]
    moves_list: bool,

    /// Write the framed command stream here
    #[arg(long)]
    save_moves_txt: Option<PathBuf>,

    /// Unit-expand the saved command stream
    #[arg(long)]
    expand: bool,

    /// Number of distance-map entries to print
    #[arg(long, default_value = "10")]
    summary: usize,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,

    /// Log every search step
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let grid = Grid::from_reader(BufReader::new(File::open(&args.grid)?))?;
    let color = Color::from(args.color);

    println!("Grid size: {}x{}", grid.size(), grid.size());
    println!("Color: {color}");

    let plan = plan_route(&grid, args.start, args.goal, color)?;
    println!("Start: {}  Goal: {}\n", plan.start, plan.goal);

    println!("=== Distance summary (sample) ===");
    println!("{}\n", distance_summary(&plan.search.distances, grid.size(), args.summary));

    println!("=== Shortest path ({} steps, cost {}) ===", plan.steps(), plan.cost());
    println!("{}", path_line(&plan.path));

    if let Some(out) = &args.save_path {
        fs::write(out, path_json(&plan.path)?)?;
        log::info!("wrote path to {}", out.display());
    }
    if let Some(out) = &args.save_moves {
        fs::write(out, moves_json(&plan.moves, args.moves_list)?)?;
        log::info!("wrote moves to {}", out.display());
    }
    if let Some(out) = &args.save_moves_txt {
        let mut enc = StreamEncoder::new(BufWriter::new(File::create(out)?));
        enc.encode(&plan.commands, args.expand)?;
        log::info!("wrote command stream to {}", out.display());
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.quiet, args.verbose);
    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
