//! Shortest paths on weighted waypath grids.
//!
//! - **Dijkstra** single-pair search with an owned distance map
//!   ([`PathRange::shortest_path`], [`shortest_path`])
//! - **Goal resolution** from labeled points ([`resolve_goal`])
//!
//! Searches run through [`PathRange`], which keeps its node cache between
//! calls. Costs are charged for entering a cell, never for the edge itself.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbour enumeration |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//!
//! [`Grid`](waypath_core::Grid) implements both.

mod dijkstra;
mod distance;
mod goal;
mod neighbors;
mod pathrange;
mod traits;

pub use dijkstra::{DistanceMap, PathNode, SearchResult, shortest_path};
pub use distance::manhattan;
pub use goal::resolve_goal;
pub use neighbors::CARDINAL;
pub use pathrange::{PathRange, UNREACHABLE};
pub use traits::{Pather, WeightedPather};
