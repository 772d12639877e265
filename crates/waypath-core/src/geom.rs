//! Cells and cell rectangles.
//!
//! X grows right and Y grows up, so the `Up` motion command moves from
//! `(x, y)` to `(x, y + 1)`.

use std::fmt;
use std::ops::{Add, Sub};

/// One grid cell, also used as a unit offset between cells.
///
/// Cells order by ascending `x`, then ascending `y`; goal resolution breaks
/// distance ties with this order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Cells `min..max` on both axes (`max` exclusive).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Rectangle spanned by two corners, in either order.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Bounds of an `n`×`n` grid: cells `[0, n-1]²`.
    #[inline]
    pub fn square(n: i32) -> Self {
        Self::new(0, 0, n.max(0), n.max(0))
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    /// Number of cells.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * ((self.max.y - self.min.y) as usize)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Cells in row-major order, bottom row first. Distance maps are laid
    /// out in this order.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

/// Iterator returned by [`Range::iter`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Point,
}

impl Iterator for RangeIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.range.is_empty() || self.cur.y >= self.range.max.y {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.range.max.x {
            self.cur.x = self.range.min.x;
            self.cur.y += 1;
        }
        Some(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_add_and_subtract() {
        let a = Point::new(1, 2);
        let up = Point::new(0, 1);
        assert_eq!(a + up, Point::new(1, 3));
        assert_eq!(Point::new(1, 3) - a, up);
        assert_eq!(a.to_string(), "(1, 2)");
    }

    #[test]
    fn cells_order_by_x_then_y() {
        let mut pts = vec![Point::new(1, 0), Point::new(0, 5), Point::new(0, 1)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(0, 1), Point::new(0, 5), Point::new(1, 0)]);
    }

    #[test]
    fn square_bounds() {
        let r = Range::square(5);
        assert_eq!(r.len(), 25);
        assert_eq!(r.width(), 5);
        assert!(r.contains(Point::new(4, 4)));
        assert!(!r.contains(Point::new(5, 4)));
        assert!(!r.contains(Point::new(0, -1)));
        assert!(Range::square(0).is_empty());
        assert_eq!(Range::square(0).len(), 0);
    }

    #[test]
    fn corners_in_any_order() {
        assert_eq!(Range::new(3, 2, 0, 0), Range::new(0, 0, 3, 2));
    }

    #[test]
    fn iterates_rows_bottom_up() {
        let pts: Vec<_> = Range::new(0, 0, 3, 2).iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Point::new(0, 0));
        assert_eq!(pts[2], Point::new(2, 0));
        assert_eq!(pts[3], Point::new(0, 1));
        assert_eq!(Range::square(0).iter().count(), 0);
    }
}
