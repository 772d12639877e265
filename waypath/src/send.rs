//! Loading path/move files for transmission.

use std::fs;
use std::path::Path;

use waypath_codec::{Command, InputFormat, format_stream};
use waypath_core::Result;

/// Read a `.json` or `.csv` path/move file and condense it.
pub fn load_commands(path: &Path) -> Result<Vec<Command>> {
    let format = InputFormat::from_path(path)?;
    let text = fs::read_to_string(path)?;
    let commands = format.parse(&text)?.into_commands()?;
    log::debug!("{}: {} commands", path.display(), commands.len());
    Ok(commands)
}

/// Framed stream lines for `commands`; `no_condense` sends unit moves.
pub fn stream_lines(commands: &[Command], no_condense: bool) -> Vec<String> {
    format_stream(commands, no_condense)
}
