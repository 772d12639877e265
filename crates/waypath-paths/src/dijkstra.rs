use std::collections::BinaryHeap;

use waypath_core::{Error, Grid, Point, Range, Result};

use crate::PathRange;
use crate::pathrange::{NodeRef, UNREACHABLE, idx_in};
use crate::traits::WeightedPather;

/// A position with its cumulative cost, as listed by [`DistanceMap::reachable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathNode {
    pub pos: Point,
    pub cost: i64,
}

/// Best known cumulative cost per cell after one search.
///
/// Values for cells the search settled are exact shortest distances. The
/// search stops once the goal is settled, so cells still on the frontier
/// at that moment hold tentative upper bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap {
    rng: Range,
    width: usize,
    dist: Vec<i64>,
}

impl DistanceMap {
    /// Cost at `p`, or [`UNREACHABLE`].
    pub fn at(&self, p: Point) -> i64 {
        match idx_in(self.rng, self.width, p) {
            Some(i) => self.dist[i],
            None => UNREACHABLE,
        }
    }

    /// Cost at `p`, or `None` when the search never reached it.
    pub fn get(&self, p: Point) -> Option<i64> {
        match self.at(p) {
            UNREACHABLE => None,
            d => Some(d),
        }
    }

    /// All reached cells sorted by cost, then by cell.
    pub fn reachable(&self) -> Vec<PathNode> {
        let mut out: Vec<PathNode> = self
            .rng
            .iter()
            .zip(self.dist.iter())
            .filter(|&(_, &d)| d != UNREACHABLE)
            .map(|(pos, &cost)| PathNode { pos, cost })
            .collect();
        out.sort_by(|a, b| a.cost.cmp(&b.cost).then(a.pos.cmp(&b.pos)));
        out
    }

    /// Number of reached cells.
    pub fn len_reachable(&self) -> usize {
        self.dist.iter().filter(|&&d| d != UNREACHABLE).count()
    }
}

/// Outcome of one search: its distance map and, if the goal was settled,
/// the path from start to goal (both endpoints included).
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub from: Point,
    pub to: Point,
    pub distances: DistanceMap,
    pub path: Option<Vec<Point>>,
}

impl SearchResult {
    /// Total cost of the found path.
    pub fn cost(&self) -> Option<i64> {
        self.path.as_ref().map(|_| self.distances.at(self.to))
    }

    /// The path, or [`Error::NotFound`].
    pub fn into_path(self) -> Result<Vec<Point>> {
        self.path.ok_or(Error::NotFound {
            from: self.from,
            to: self.to,
        })
    }
}

impl PathRange {
    /// Dijkstra shortest path from `from` to `to`.
    ///
    /// Edge cost is whatever the pather charges for entering the neighbour.
    /// Queue entries are never removed on improvement; an entry whose cost
    /// no longer matches the node's best known cost is discarded when
    /// popped. Equal-cost entries pop in push order and neighbours are
    /// pushed in the pather's order, which makes the returned path
    /// deterministic. The search stops when `to` is popped.
    ///
    /// Fails with [`Error::OutOfBounds`] if either endpoint lies outside the
    /// range. An unreachable goal is not an error here: the result simply
    /// has no path.
    pub fn shortest_path<P: WeightedPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Result<SearchResult> {
        let size = self.rng.width();
        let start_idx = self.idx(from).ok_or(Error::OutOfBounds {
            what: "start",
            point: from,
            size,
        })?;
        let goal_idx = self.idx(to).ok_or(Error::OutOfBounds {
            what: "goal",
            point: to,
            size,
        })?;

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.parent = usize::MAX;
            node.generation = cur_gen;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        let mut seq: u64 = 0;
        open.push(NodeRef {
            idx: start_idx,
            f: 0,
            seq,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut step = 0usize;

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;
            // Stale entry: superseded by a cheaper push.
            if self.nodes[ci].generation != cur_gen || self.nodes[ci].g != current.f {
                continue;
            }

            let current_g = current.f;
            let current_point = self.point(ci);
            step += 1;
            log::trace!("[POP {step}] node={current_point} dist={current_g}");

            if ci == goal_idx {
                break 'search true;
            }

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let step_cost = i64::from(pather.cost(current_point, np));
                let tentative = current_g.saturating_add(step_cost);

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if tentative >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.g = UNREACHABLE;
                }

                log::trace!("  [RELAX] {current_point} -> {np}: dist {} -> {tentative}", n.g);
                n.g = tentative;
                n.parent = ci;
                seq += 1;
                open.push(NodeRef {
                    idx: ni,
                    f: tentative,
                    seq,
                });
            }
        };

        self.nbuf = nbuf;

        let distances = DistanceMap {
            rng: self.rng,
            width: self.width,
            dist: self
                .nodes
                .iter()
                .map(|n| if n.generation == cur_gen { n.g } else { UNREACHABLE })
                .collect(),
        };

        let path = if found {
            let mut path = Vec::new();
            let mut ci = goal_idx;
            while ci != usize::MAX {
                path.push(self.point(ci));
                ci = self.nodes[ci].parent;
            }
            path.reverse();
            log::debug!(
                "settled {to} at cost {} after {step} pops, {} cells",
                distances.at(to),
                path.len()
            );
            Some(path)
        } else {
            log::debug!("frontier exhausted after {step} pops, {to} unreachable from {from}");
            None
        };

        Ok(SearchResult {
            from,
            to,
            distances,
            path,
        })
    }
}

/// One-shot search over a [`Grid`] with entering-cell weights.
pub fn shortest_path(grid: &Grid, start: Point, goal: Point) -> Result<SearchResult> {
    grid.check("start", start)?;
    grid.check("goal", goal)?;
    PathRange::new(grid.bounds()).shortest_path(grid, start, goal)
}
