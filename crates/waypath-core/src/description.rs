//! JSON grid descriptions.
//!
//! ```text
//! { "axis_max": 10,                       // or "grid_size": 11, never both
//!   "points":  [ {"x": 3, "y": 7, "color": "R"}, ... ],
//!   "weights": { "cells": [ {"x": 1, "y": 2, "w": 4}, ... ] },
//!   "default_weight": 1 }                 // optional, 0 = unlisted cells blocked
//! ```
//!
//! Unknown keys (`axis_min`, weight-generation metadata) are ignored.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geom::Point;
use crate::grid::{Color, Grid, LabeledPoint};

/// Serialized form of a [`Grid`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridDescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis_max: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_size: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_weight: Option<i32>,
    #[serde(default)]
    pub points: Vec<PointEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<WeightTable>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointEntry {
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightTable {
    #[serde(default)]
    pub cells: Vec<WeightEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub x: i32,
    pub y: i32,
    pub w: i32,
}

impl GridDescription {
    /// Grid side length. Exactly one of `axis_max` (size - 1) and
    /// `grid_size` must be present.
    pub fn size(&self) -> Result<i32> {
        match (self.axis_max, self.grid_size) {
            (Some(m), None) => m.checked_add(1).ok_or_else(|| {
                Error::MalformedInput(format!("axis_max {m} is too large"))
            }),
            (None, Some(n)) => Ok(n),
            (Some(_), Some(_)) => Err(Error::MalformedInput(
                "grid description has both axis_max and grid_size".into(),
            )),
            (None, None) => Err(Error::MalformedInput(
                "grid description needs axis_max or grid_size".into(),
            )),
        }
    }

    /// Validate and build the immutable grid.
    pub fn into_grid(self) -> Result<Grid> {
        let size = self.size()?;
        let default_weight = match self.default_weight {
            None => Some(1),
            Some(0) => None,
            Some(w) => Some(w),
        };
        let cells = self
            .weights
            .map(|t| t.cells)
            .unwrap_or_default()
            .into_iter()
            .map(|c| (Point::new(c.x, c.y), c.w));
        let points = self.points.into_iter().map(|p| LabeledPoint {
            pos: Point::new(p.x, p.y),
            color: p.color,
        });
        let grid = Grid::new(size, default_weight)?
            .with_weights(cells)?
            .with_points(points)?;
        log::debug!(
            "loaded {}x{} grid with {} labeled points",
            grid.size(),
            grid.size(),
            grid.points().len()
        );
        Ok(grid)
    }
}

impl Grid {
    /// Parse a JSON grid description.
    pub fn from_json(s: &str) -> Result<Grid> {
        let desc: GridDescription = serde_json::from_str(s)?;
        desc.into_grid()
    }

    /// Read a JSON grid description from a byte stream until EOF.
    pub fn from_reader<R: Read>(reader: R) -> Result<Grid> {
        let desc: GridDescription = serde_json::from_reader(reader)?;
        desc.into_grid()
    }
}
