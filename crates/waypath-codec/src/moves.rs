//! Unit directional moves and their relation to cell paths.

use std::fmt;

use waypath_core::{Error, Point, Result};

/// One orthogonal unit step. Y grows up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Every direction, in relaxation order of the search engine.
    pub const ALL: [Move; 4] = [Move::Up, Move::Right, Move::Down, Move::Left];

    /// The `(dx, dy)` unit vector.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Move::Up => Point::new(0, 1),
            Move::Right => Point::new(1, 0),
            Move::Down => Point::new(0, -1),
            Move::Left => Point::new(-1, 0),
        }
    }

    /// Inverse of [`delta`](Self::delta); `None` for anything but a unit
    /// orthogonal vector.
    #[inline]
    pub const fn from_delta(d: Point) -> Option<Move> {
        match (d.x, d.y) {
            (0, 1) => Some(Move::Up),
            (1, 0) => Some(Move::Right),
            (0, -1) => Some(Move::Down),
            (-1, 0) => Some(Move::Left),
            _ => None,
        }
    }

    /// Wire letter: `U`, `D`, `L` or `R`.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Move::Up => 'U',
            Move::Down => 'D',
            Move::Left => 'L',
            Move::Right => 'R',
        }
    }

    /// Case-insensitive inverse of [`letter`](Self::letter).
    #[inline]
    pub fn from_letter(c: char) -> Option<Move> {
        match c.to_ascii_uppercase() {
            'U' => Some(Move::Up),
            'D' => Some(Move::Down),
            'L' => Some(Move::Left),
            'R' => Some(Move::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Convert a cell path into the moves between consecutive cells.
///
/// Every consecutive pair must be an orthogonal unit step; the first pair
/// that is not fails with [`Error::NonUnitStep`]. A single-cell path yields
/// no moves.
pub fn path_to_moves(path: &[Point]) -> Result<Vec<Move>> {
    path.windows(2)
        .map(|w| {
            Move::from_delta(w[1] - w[0]).ok_or(Error::NonUnitStep {
                from: w[0],
                to: w[1],
            })
        })
        .collect()
}

/// Replay `moves` from `start`, yielding `moves.len() + 1` cells.
pub fn moves_to_path(start: Point, moves: &[Move]) -> Vec<Point> {
    let mut path = Vec::with_capacity(moves.len() + 1);
    let mut cur = start;
    path.push(cur);
    for m in moves {
        cur = cur + m.delta();
        path.push(cur);
    }
    path
}
