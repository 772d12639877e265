use waypath_core::{Grid, Point};

use crate::neighbors::Neighbors;

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32;
}

/// Orthogonal moves into passable cells, in Up, Right, Down, Left order.
impl Pather for Grid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        let mut nb = Neighbors::new();
        buf.extend_from_slice(nb.cardinal(p, |q| self.passable(q)));
    }
}

/// The cost is charged for entering `to`; `from` does not matter.
impl WeightedPather for Grid {
    fn cost(&self, _from: Point, to: Point) -> i32 {
        self.weight(to).unwrap_or(i32::MAX)
    }
}
