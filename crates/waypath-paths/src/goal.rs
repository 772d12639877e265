use waypath_core::{Color, Error, LabeledPoint, Point, Result};

use crate::distance::manhattan;

/// Pick the goal for a route starting at `start` when none was given.
///
/// Candidates are the points labeled `color` that are not `start` itself.
/// The closest one by Manhattan distance wins; ties go to the smallest
/// point in `(x, y)` order, so the choice does not depend on input order.
pub fn resolve_goal(points: &[LabeledPoint], color: Color, start: Point) -> Result<Point> {
    let goal = points
        .iter()
        .filter(|lp| lp.color == color && lp.pos != start)
        .map(|lp| lp.pos)
        .min_by_key(|&p| (manhattan(start, p), p))
        .ok_or(Error::NoCandidate {
            color: color.to_string(),
            start,
        })?;
    log::info!("closest {color} point to {start} is {goal}");
    Ok(goal)
}
