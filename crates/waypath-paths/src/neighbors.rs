use waypath_core::Point;

/// Unit offsets in relaxation order: Up, Right, Down, Left (Y grows up).
pub const CARDINAL: [Point; 4] = [
    Point::new(0, 1),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(-1, 0),
];

/// Cached neighbor computation helper.
///
/// Enumerates the 4 orthogonal neighbors of a grid point in a fixed order,
/// filtered by a predicate. The fixed order is part of the search engine's
/// tie-break rule.
pub(crate) struct Neighbors {
    buf: Vec<Point>,
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub(crate) fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return 4-directional (cardinal) neighbors of `p`, keeping only those
    /// for which `keep` returns `true`.
    pub(crate) fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for d in CARDINAL {
            let n = p + d;
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
