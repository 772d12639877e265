use waypath_core::{Point, Range};

// ---------------------------------------------------------------------------
// Internal node for priority-queue searches
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i64,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            parent: usize::MAX,
            generation: 0,
        }
    }
}

/// Queue entry: the cost recorded when the entry was pushed plus a push
/// sequence number. Ordered so that `BinaryHeap` (max-heap) pops the
/// smallest cost first and, among equal costs, the earliest push first.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i64,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Sentinel value meaning "unreachable" in distance maps.
///
/// Step costs are `i32`, so a real path cost stays far below it.
pub const UNREACHABLE: i64 = i64::MAX;

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Central coordinator for searches on a grid rectangle.
///
/// `PathRange` owns the per-cell node cache so that repeated searches over
/// the same rectangle do not reallocate it. Results handed back to callers
/// are always owned copies; nothing returned aliases the cache.
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathRange {
    /// Create a new `PathRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let w = rng.width().max(0) as usize;
        let len = rng.len();
        Self {
            rng,
            width: w,
            nodes: vec![Node::default(); len],
            generation: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        idx_in(self.rng, self.width, p)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}

#[inline]
pub(crate) fn idx_in(rng: Range, width: usize, p: Point) -> Option<usize> {
    if !rng.contains(p) {
        return None;
    }
    let x = (p.x - rng.min.x) as usize;
    let y = (p.y - rng.min.y) as usize;
    Some(y * width + x)
}
