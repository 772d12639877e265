//! Run-length condensed motion commands.

use std::fmt;
use std::str::FromStr;

use waypath_core::{Error, Result};

use crate::moves::Move;

/// A direction repeated `count` times. `count` is never zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Command {
    dir: Move,
    count: u32,
}

impl Command {
    /// Build a command; `None` if `count` is zero.
    pub const fn new(dir: Move, count: u32) -> Option<Self> {
        if count == 0 {
            None
        } else {
            Some(Self { dir, count })
        }
    }

    /// A single unit move.
    pub const fn unit(dir: Move) -> Self {
        Self { dir, count: 1 }
    }

    #[inline]
    pub const fn dir(self) -> Move {
        self.dir
    }

    #[inline]
    pub const fn count(self) -> u32 {
        self.count
    }
}

/// `<letter><count>`, e.g. `R2`.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.dir.letter(), self.count)
    }
}

impl FromStr for Command {
    type Err = Error;

    /// Parse `<letter><count>`: one of `UDLR` (any case) followed by a
    /// positive decimal without sign or leading zeros.
    fn from_str(s: &str) -> Result<Self> {
        let bad = || Error::MalformedInput(format!("bad command {s:?}"));
        let mut chars = s.chars();
        let dir = chars.next().and_then(Move::from_letter).ok_or_else(bad)?;
        let digits = chars.as_str();
        let canonical = !digits.starts_with('0') && digits.bytes().all(|b| b.is_ascii_digit());
        if digits.is_empty() || !canonical {
            return Err(bad());
        }
        let count: u32 = digits.parse().map_err(|_| bad())?;
        Ok(Self { dir, count })
    }
}

/// Run-length encode `moves`. Adjacent output commands never share a
/// direction. Empty input yields empty output.
pub fn condense(moves: &[Move]) -> Vec<Command> {
    let mut out: Vec<Command> = Vec::new();
    for &m in moves {
        match out.last_mut() {
            Some(last) if last.dir == m => last.count += 1,
            _ => out.push(Command::unit(m)),
        }
    }
    out
}

/// Exact inverse of [`condense`].
pub fn expand(commands: &[Command]) -> Vec<Move> {
    commands
        .iter()
        .flat_map(|c| std::iter::repeat_n(c.dir, c.count as usize))
        .collect()
}
