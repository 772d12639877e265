//! Lossless codec between cell paths, unit moves and run-length motion
//! commands, plus the sentinel-framed line format sent to the actuator.
//!
//! ```text
//! [(0,0),(1,0),(2,0),(2,1)] --path_to_moves--> [R, R, U]
//!                           --condense------> [R2, U1]
//!                           --format_stream-> S / R2 / U1 / E
//! ```
//!
//! `expand(condense(m)) == m` for every move sequence `m`.

mod command;
mod input;
mod moves;
mod stream;

pub use command::{Command, condense, expand};
pub use input::{InputFormat, Source, parse_json, parse_move_string, parse_table};
pub use moves::{Move, moves_to_path, path_to_moves};
pub use stream::{END, START, StreamDecoder, StreamEncoder, format_stream, parse_stream};
