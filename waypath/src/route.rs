//! Route planning: grid → goal → search → moves → commands.

use std::fmt::Write as _;

use serde::Serialize;
use waypath_codec::{Command, Move, condense, path_to_moves};
use waypath_core::{Color, Grid, Point, Result};
use waypath_paths::{DistanceMap, SearchResult, resolve_goal, shortest_path};

/// Everything produced for one route, each stage derived from the last.
#[derive(Debug, Clone)]
pub struct RoutePlan {
    pub start: Point,
    pub goal: Point,
    pub search: SearchResult,
    pub path: Vec<Point>,
    pub moves: Vec<Move>,
    pub commands: Vec<Command>,
}

impl RoutePlan {
    /// Total entering-cell weight of the path.
    pub fn cost(&self) -> i64 {
        self.search.distances.at(self.goal)
    }

    /// Number of unit steps.
    pub fn steps(&self) -> usize {
        self.moves.len()
    }
}

/// Plan a route from `start`. Without an explicit `goal` the closest
/// point labeled `color` is used.
///
/// Nothing is returned unless every stage succeeded, so callers never see
/// a partially built command list.
pub fn plan_route(
    grid: &Grid,
    start: Point,
    goal: Option<Point>,
    color: Color,
) -> Result<RoutePlan> {
    grid.check("start", start)?;
    let goal = match goal {
        Some(g) => {
            grid.check("goal", g)?;
            g
        }
        None => resolve_goal(grid.points(), color, start)?,
    };
    let search = shortest_path(grid, start, goal)?;
    let path = search.clone().into_path()?;
    let moves = path_to_moves(&path)?;
    let commands = condense(&moves);
    log::info!(
        "route {start} -> {goal}: {} steps, cost {}, {} commands",
        moves.len(),
        search.distances.at(goal),
        commands.len()
    );
    Ok(RoutePlan {
        start,
        goal,
        search,
        path,
        moves,
        commands,
    })
}

#[derive(Serialize)]
struct PathFile {
    path: Vec<[i32; 2]>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum MovesValue {
    Text(String),
    List(Vec<String>),
}

#[derive(Serialize)]
struct MovesFile {
    moves: MovesValue,
}

/// `{"path": [[x, y], ...]}`, pretty-printed.
pub fn path_json(path: &[Point]) -> Result<String> {
    let file = PathFile {
        path: path.iter().map(|p| [p.x, p.y]).collect(),
    };
    Ok(serde_json::to_string_pretty(&file)?)
}

/// `{"moves": "RRU"}`, or `{"moves": ["R", "R", "U"]}` when `as_list`.
pub fn moves_json(moves: &[Move], as_list: bool) -> Result<String> {
    let moves = if as_list {
        MovesValue::List(moves.iter().map(|m| m.to_string()).collect())
    } else {
        MovesValue::Text(moves.iter().map(|m| m.letter()).collect())
    };
    Ok(serde_json::to_string_pretty(&MovesFile { moves })?)
}

/// Reachable-cell count and the `sample` cheapest cells.
pub fn distance_summary(dist: &DistanceMap, size: i32, sample: usize) -> String {
    let reachable = dist.reachable();
    let mut out = format!("Reachable nodes: {} / {}", reachable.len(), size * size);
    for node in reachable.iter().take(sample) {
        let _ = write!(out, "\n  {}: {}", node.pos, node.cost);
    }
    if reachable.len() > sample {
        out.push_str("\n  ...");
    }
    out
}

/// `(x, y) -> (x, y) -> ...`
pub fn path_line(path: &[Point]) -> String {
    path.iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypath_codec::format_stream;
    use waypath_core::Error;

    const GRID: &str = r#"{
        "axis_max": 4,
        "points": [
            {"x": 0, "y": 0, "color": "R"},
            {"x": 3, "y": 3, "color": "R"},
            {"x": 0, "y": 2, "color": "G"},
            {"x": 4, "y": 0, "color": "B"}
        ],
        "weights": {"cells": [
            {"x": 0, "y": 1, "w": 20}, {"x": 1, "y": 1, "w": 20},
            {"x": 2, "y": 1, "w": 20}, {"x": 3, "y": 1, "w": 20}
        ]}
    }"#;

    #[test]
    fn plans_to_closest_color_point() {
        let grid = Grid::from_json(GRID).unwrap();
        let plan = plan_route(&grid, Point::ZERO, None, Color::Blue).unwrap();
        assert_eq!(plan.goal, Point::new(4, 0));
        assert_eq!(plan.commands.len(), 1);
        assert_eq!(format_stream(&plan.commands, false), vec!["S", "R4", "E"]);
        assert_eq!(plan.cost(), 4);
    }

    #[test]
    fn weighted_detour_is_chosen() {
        let grid = Grid::from_json(GRID).unwrap();
        let plan = plan_route(&grid, Point::ZERO, None, Color::Green).unwrap();
        assert_eq!(plan.goal, Point::new(0, 2));
        // Straight up would cost 20 + 1; around the wall costs 10.
        assert_eq!(plan.cost(), 10);
        assert_eq!(plan.steps(), 10);
        assert_eq!(
            format_stream(&plan.commands, false),
            vec!["S", "R4", "U2", "L4", "E"]
        );
    }

    #[test]
    fn explicit_goal_must_be_in_bounds() {
        let grid = Grid::from_json(GRID).unwrap();
        assert!(matches!(
            plan_route(&grid, Point::ZERO, Some(Point::new(5, 5)), Color::Red),
            Err(Error::OutOfBounds { what: "goal", .. })
        ));
        assert!(matches!(
            plan_route(&grid, Point::new(0, 9), None, Color::Red),
            Err(Error::OutOfBounds { what: "start", .. })
        ));
    }

    #[test]
    fn missing_candidate_and_unreachable_goal() {
        let grid =
            Grid::from_json(r#"{"grid_size": 3, "points": [{"x": 0, "y": 0, "color": "R"}]}"#)
                .unwrap();
        assert!(matches!(
            plan_route(&grid, Point::ZERO, None, Color::Red),
            Err(Error::NoCandidate { .. })
        ));

        let walled = Grid::from_json(
            r#"{"grid_size": 3,
                "weights": {"cells": [{"x": 1, "y": 2, "w": 0}, {"x": 2, "y": 1, "w": 0}]}}"#,
        )
        .unwrap();
        assert!(matches!(
            plan_route(&walled, Point::ZERO, Some(Point::new(2, 2)), Color::Red),
            Err(Error::NotFound { .. })
        ));
    }

    #[test]
    fn repeated_planning_is_identical() {
        let grid = Grid::from_json(GRID).unwrap();
        let a = plan_route(&grid, Point::ZERO, Some(Point::new(3, 3)), Color::Red).unwrap();
        let b = plan_route(&grid, Point::ZERO, Some(Point::new(3, 3)), Color::Red).unwrap();
        assert_eq!(a.path, b.path);
        assert_eq!(a.commands, b.commands);
    }

    #[test]
    fn json_outputs() {
        let path = [Point::new(0, 0), Point::new(1, 0)];
        let value = |text: String| serde_json::from_str::<serde_json::Value>(&text).unwrap();
        assert_eq!(
            value(path_json(&path).unwrap()),
            serde_json::json!({"path": [[0, 0], [1, 0]]})
        );

        let moves = [Move::Right, Move::Right, Move::Up];
        assert_eq!(
            value(moves_json(&moves, false).unwrap()),
            serde_json::json!({"moves": "RRU"})
        );
        assert_eq!(
            value(moves_json(&moves, true).unwrap()),
            serde_json::json!({"moves": ["R", "R", "U"]})
        );
    }

    #[test]
    fn saved_files_read_back_through_the_codec() {
        let grid = Grid::from_json(GRID).unwrap();
        let plan = plan_route(&grid, Point::ZERO, None, Color::Green).unwrap();
        let path_text = path_json(&plan.path).unwrap();
        let moves_text = moves_json(&plan.moves, true).unwrap();
        let from_path = waypath_codec::parse_json(&path_text).unwrap();
        let from_moves = waypath_codec::parse_json(&moves_text).unwrap();
        assert_eq!(from_path.into_commands().unwrap(), plan.commands);
        assert_eq!(from_moves.into_commands().unwrap(), plan.commands);
    }

    #[test]
    fn summary_and_path_line() {
        let grid = Grid::new(2, Some(1)).unwrap();
        let plan = plan_route(&grid, Point::ZERO, Some(Point::new(1, 1)), Color::Red).unwrap();
        let summary = distance_summary(&plan.search.distances, 2, 2);
        assert!(summary.starts_with("Reachable nodes: 4 / 4"));
        assert!(summary.contains("\n  (0, 0): 0"));
        assert!(summary.ends_with("\n  ..."));
        assert_eq!(path_line(&plan.path), "(0, 0) -> (0, 1) -> (1, 1)");
    }
}
