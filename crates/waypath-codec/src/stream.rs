//! Sentinel-framed command streams.
//!
//! ## Wire format
//!
//! Newline-terminated ASCII lines:
//! ```text
//! S
//! <dir><count>     zero or more, dir in {U,D,L,R}, count > 0
//! E
//! ```
//! In expanded form every command line has count `1`.

use std::io::{self, BufRead, Write};

use waypath_core::{Error, Result};

use crate::command::Command;

/// Stream start sentinel.
pub const START: &str = "S";
/// Stream end sentinel.
pub const END: &str = "E";

/// Format `commands` as framed lines (without newlines).
///
/// With `expand`, a command of count `k` becomes `k` unit lines.
pub fn format_stream(commands: &[Command], expand: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(commands.len() + 2);
    lines.push(START.to_string());
    for c in commands {
        if expand {
            let unit = Command::unit(c.dir()).to_string();
            lines.extend(std::iter::repeat_n(unit, c.count() as usize));
        } else {
            lines.push(c.to_string());
        }
    }
    lines.push(END.to_string());
    lines
}

/// Parse framed lines back into commands.
///
/// Blank lines and surrounding whitespace are ignored. The first line must
/// be `S`, the last `E`, and nothing may follow `E`. Expanded streams decode
/// to unit commands; pass the result through [`expand`](crate::expand) and
/// [`condense`](crate::condense) to re-condense.
pub fn parse_stream<I, S>(lines: I) -> Result<Vec<Command>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut commands = Vec::new();
    let mut started = false;
    let mut ended = false;
    for (n, raw) in lines.into_iter().enumerate() {
        let line = raw.as_ref().trim();
        if line.is_empty() {
            continue;
        }
        if ended {
            return Err(Error::MalformedInput(format!(
                "line {}: {line:?} after end sentinel",
                n + 1
            )));
        }
        match (started, line) {
            (false, START) => started = true,
            (false, _) => {
                return Err(Error::MalformedInput(format!(
                    "line {}: expected start sentinel, got {line:?}",
                    n + 1
                )));
            }
            (true, END) => ended = true,
            (true, _) => commands.push(line.parse()?),
        }
    }
    if !started {
        return Err(Error::MalformedInput("empty command stream".into()));
    }
    if !ended {
        return Err(Error::MalformedInput("missing end sentinel".into()));
    }
    Ok(commands)
}

/// Writes framed command streams to a byte-oriented writer.
pub struct StreamEncoder<W: Write> {
    writer: W,
}

impl<W: Write> StreamEncoder<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write one complete framed stream and flush.
    pub fn encode(&mut self, commands: &[Command], expand: bool) -> io::Result<()> {
        for line in format_stream(commands, expand) {
            self.writer.write_all(line.as_bytes())?;
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()
    }

    /// Unwrap the inner writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Reads framed command streams from a buffered reader.
pub struct StreamDecoder<R: BufRead> {
    reader: R,
}

impl<R: BufRead> StreamDecoder<R> {
    /// Wrap a reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Read lines up to and including the end sentinel and decode them.
    ///
    /// Returns `None` at EOF before any non-blank line. Lines after `E` are
    /// left unread, so consecutive streams decode one call at a time.
    pub fn decode(&mut self) -> Result<Option<Vec<Command>>> {
        let mut lines = Vec::new();
        let mut buf = String::new();
        loop {
            buf.clear();
            if self.reader.read_line(&mut buf)? == 0 {
                if lines.is_empty() {
                    return Ok(None);
                }
                break;
            }
            let line = buf.trim();
            if line.is_empty() {
                continue;
            }
            let done = line == END;
            lines.push(line.to_string());
            if done {
                break;
            }
        }
        parse_stream(lines).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Move::*;
    use crate::{condense, expand};
    use std::io::Cursor;

    fn cmd(dir: crate::Move, count: u32) -> Command {
        Command::new(dir, count).unwrap()
    }

    #[test]
    fn condensed_stream() {
        let cmds = [cmd(Right, 2), cmd(Up, 1)];
        assert_eq!(format_stream(&cmds, false), vec!["S", "R2", "U1", "E"]);
    }

    #[test]
    fn expanded_stream() {
        let cmds = [cmd(Right, 2), cmd(Up, 1)];
        assert_eq!(format_stream(&cmds, true), vec!["S", "R1", "R1", "U1", "E"]);
    }

    #[test]
    fn empty_stream_is_still_framed() {
        assert_eq!(format_stream(&[], false), vec!["S", "E"]);
        assert!(parse_stream(["S", "E"]).unwrap().is_empty());
    }

    #[test]
    fn parse_inverts_format() {
        let cmds = vec![cmd(Left, 3), cmd(Down, 10), cmd(Left, 1)];
        assert_eq!(parse_stream(format_stream(&cmds, false)).unwrap(), cmds);
        let units = parse_stream(format_stream(&cmds, true)).unwrap();
        assert_eq!(condense(&expand(&units)), cmds);
    }

    #[test]
    fn parse_rejects_bad_framing() {
        assert!(parse_stream(Vec::<String>::new()).is_err());
        assert!(parse_stream(["R2", "E"]).is_err());
        assert!(parse_stream(["S", "R2"]).is_err());
        assert!(parse_stream(["S", "E", "R1"]).is_err());
        assert!(parse_stream(["S", "Q2", "E"]).is_err());
        assert!(parse_stream(["S", "R0", "E"]).is_err());
    }

    #[test]
    fn encoder_writes_newline_terminated_lines() {
        let mut enc = StreamEncoder::new(Vec::new());
        enc.encode(&[cmd(Right, 2), cmd(Up, 1)], false).unwrap();
        let out = String::from_utf8(enc.into_inner()).unwrap();
        assert_eq!(out, "S\nR2\nU1\nE\n");
    }

    #[test]
    fn decoder_reads_consecutive_streams() {
        let data = "S\r\nR2\r\nU1\r\nE\r\n\nS\nL1\nE\n";
        let mut dec = StreamDecoder::new(Cursor::new(data));
        assert_eq!(dec.decode().unwrap(), Some(vec![cmd(Right, 2), cmd(Up, 1)]));
        assert_eq!(dec.decode().unwrap(), Some(vec![cmd(Left, 1)]));
        assert_eq!(dec.decode().unwrap(), None);
    }

    #[test]
    fn decoder_reports_truncation() {
        let mut dec = StreamDecoder::new(Cursor::new("S\nR2\n"));
        assert!(matches!(dec.decode(), Err(Error::MalformedInput(_))));
    }
}
