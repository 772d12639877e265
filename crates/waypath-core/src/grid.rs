//! The immutable weighted [`Grid`] and its labeled points.
//!
//! A grid is an `n`×`n` square of cells. Each cell carries a positive
//! entering weight or is an obstacle; labeled points of interest are tagged
//! with a [`Color`]. Construction validates every coordinate, after which the
//! grid is never mutated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geom::{Point, Range};

/// Stored weight marking a cell that cannot be entered.
const BLOCKED: i32 = 0;

/// Largest accepted side length.
pub const MAX_SIZE: i32 = 4096;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// Label attached to a point of interest.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    /// Single-letter wire form.
    pub const fn letter(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Case-insensitive: `R`, `red`, `G`, `green`, `B`, `blue`.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "R" | "RED" => Ok(Color::Red),
            "G" | "GREEN" => Ok(Color::Green),
            "B" | "BLUE" => Ok(Color::Blue),
            _ => Err(Error::MalformedInput(format!("unknown color {s:?}"))),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.letter().to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A point of interest on the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LabeledPoint {
    pub pos: Point,
    pub color: Color,
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// An `n`×`n` weighted grid with labeled points.
///
/// Weight lookup is total: cells without an explicit weight fall back to
/// the default passed to [`Grid::new`]. A weight of `0` (or a `None`
/// default) makes the cell an obstacle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: i32,
    weights: Vec<i32>,
    points: Vec<LabeledPoint>,
}

impl Grid {
    /// Create a grid of `size`×`size` cells, every cell weighted
    /// `default_weight` (`None` = obstacle).
    pub fn new(size: i32, default_weight: Option<i32>) -> Result<Self> {
        if !(1..=MAX_SIZE).contains(&size) {
            return Err(Error::MalformedInput(format!(
                "grid size must be between 1 and {MAX_SIZE}, got {size}"
            )));
        }
        let fill = match default_weight {
            Some(w) if w < 0 => {
                return Err(Error::MalformedInput(format!(
                    "default weight must be non-negative, got {w}"
                )));
            }
            Some(w) => w,
            None => BLOCKED,
        };
        Ok(Self {
            size,
            weights: vec![fill; (size as usize) * (size as usize)],
            points: Vec::new(),
        })
    }

    /// Override the weight of individual cells. Later entries win.
    pub fn with_weights(
        mut self,
        cells: impl IntoIterator<Item = (Point, i32)>,
    ) -> Result<Self> {
        for (p, w) in cells {
            let i = self.checked_idx("weight cell", p)?;
            if w < 0 {
                return Err(Error::MalformedInput(format!(
                    "weight at {p} must be non-negative, got {w}"
                )));
            }
            self.weights[i] = w;
        }
        Ok(self)
    }

    /// Attach labeled points of interest.
    pub fn with_points(
        mut self,
        points: impl IntoIterator<Item = LabeledPoint>,
    ) -> Result<Self> {
        for lp in points {
            self.checked_idx("point", lp.pos)?;
            self.points.push(lp);
        }
        Ok(self)
    }

    /// Number of cells along each axis.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// The covered cells as a half-open range.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::square(self.size)
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Cost of entering `p`, or `None` if `p` is outside the grid or an
    /// obstacle.
    #[inline]
    pub fn weight(&self, p: Point) -> Option<i32> {
        let i = self.idx(p)?;
        match self.weights[i] {
            BLOCKED => None,
            w => Some(w),
        }
    }

    /// Whether `p` can be entered.
    #[inline]
    pub fn passable(&self, p: Point) -> bool {
        self.weight(p).is_some()
    }

    /// All labeled points, in load order.
    pub fn points(&self) -> &[LabeledPoint] {
        &self.points
    }

    /// Reject `p` with [`Error::OutOfBounds`] unless it lies inside the grid.
    pub fn check(&self, what: &'static str, p: Point) -> Result<()> {
        self.checked_idx(what, p).map(|_| ())
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.size as usize) + p.x as usize)
    }

    fn checked_idx(&self, what: &'static str, p: Point) -> Result<usize> {
        self.idx(p).ok_or(Error::OutOfBounds {
            what,
            point: p,
            size: self.size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weight_applies_everywhere() {
        let g = Grid::new(3, Some(1)).unwrap();
        assert_eq!(g.size(), 3);
        assert_eq!(g.bounds().len(), 9);
        for p in g.bounds() {
            assert_eq!(g.weight(p), Some(1));
        }
        assert_eq!(g.weight(Point::new(3, 0)), None);
        assert_eq!(g.weight(Point::new(0, -1)), None);
    }

    #[test]
    fn explicit_weights_override_default() {
        let g = Grid::new(3, Some(1))
            .unwrap()
            .with_weights([
                (Point::new(1, 1), 9),
                (Point::new(2, 2), 0),
                (Point::new(1, 1), 4),
            ])
            .unwrap();
        assert_eq!(g.weight(Point::new(1, 1)), Some(4));
        assert!(!g.passable(Point::new(2, 2)));
        assert!(g.passable(Point::new(0, 0)));
    }

    #[test]
    fn no_default_means_only_listed_cells_exist() {
        let g = Grid::new(2, None)
            .unwrap()
            .with_weights([(Point::new(0, 0), 2)])
            .unwrap();
        assert_eq!(g.weight(Point::new(0, 0)), Some(2));
        assert_eq!(g.weight(Point::new(1, 0)), None);
    }

    #[test]
    fn rejects_bad_construction() {
        assert!(matches!(Grid::new(0, Some(1)), Err(Error::MalformedInput(_))));
        assert!(matches!(Grid::new(2, Some(-1)), Err(Error::MalformedInput(_))));
        assert!(matches!(Grid::new(MAX_SIZE + 1, Some(1)), Err(Error::MalformedInput(_))));
        assert!(matches!(Grid::new(i32::MAX, None), Err(Error::MalformedInput(_))));
        let g = Grid::new(2, Some(1)).unwrap();
        assert!(matches!(
            g.clone().with_weights([(Point::new(2, 0), 1)]),
            Err(Error::OutOfBounds { what: "weight cell", .. })
        ));
        assert!(matches!(
            g.clone().with_weights([(Point::new(1, 0), -3)]),
            Err(Error::MalformedInput(_))
        ));
        let bad = LabeledPoint {
            pos: Point::new(0, 5),
            color: Color::Red,
        };
        assert!(matches!(g.with_points([bad]), Err(Error::OutOfBounds { .. })));
    }

    #[test]
    fn color_parsing() {
        assert_eq!("r".parse::<Color>().unwrap(), Color::Red);
        assert_eq!(" Green ".parse::<Color>().unwrap(), Color::Green);
        assert_eq!("B".parse::<Color>().unwrap(), Color::Blue);
        assert!("Y".parse::<Color>().is_err());
        assert_eq!(Color::Blue.to_string(), "B");
    }

    #[test]
    fn check_reports_what() {
        let g = Grid::new(4, Some(1)).unwrap();
        assert!(g.check("start", Point::new(3, 3)).is_ok());
        match g.check("goal", Point::new(4, 0)) {
            Err(Error::OutOfBounds { what, point, size }) => {
                assert_eq!(what, "goal");
                assert_eq!(point, Point::new(4, 0));
                assert_eq!(size, 4);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
