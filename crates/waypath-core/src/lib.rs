//! **waypath-core** — weighted grid model and shared types.
//!
//! This crate provides the foundational types used across the *waypath*
//! crates: geometry primitives, the immutable weighted grid with labeled
//! points, grid-description loading, and the error taxonomy.

pub mod description;
pub mod error;
pub mod geom;
pub mod grid;

pub use description::GridDescription;
pub use error::{Error, Result};
pub use geom::{Point, Range};
pub use grid::{Color, Grid, LabeledPoint, MAX_SIZE};
