//! Error taxonomy shared by every waypath crate.

use thiserror::Error;

use crate::geom::Point;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Failures reported by grid loading, search, goal resolution and the codec.
///
/// None of these are retried internally: every stage is deterministic, so
/// the same input always reproduces the same failure.
#[derive(Error, Debug)]
pub enum Error {
    /// Grid or path/move source violates its schema.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A referenced coordinate lies outside `[0, size-1]²`.
    #[error("{what} {point} is out of bounds for a {size}x{size} grid")]
    OutOfBounds {
        what: &'static str,
        point: Point,
        size: i32,
    },

    /// Two consecutive path cells are not orthogonal unit neighbours.
    #[error("non-unit step {from}->{to}")]
    NonUnitStep { from: Point, to: Point },

    /// Goal resolution found no eligible labeled point.
    #[error("no goal candidate of color {color} other than start {start}")]
    NoCandidate { color: String, start: Point },

    /// The search exhausted its frontier without settling the goal.
    #[error("no path from {from} to {to}")]
    NotFound { from: Point, to: Point },

    /// The input shape or file type is not one of the accepted variants.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::MalformedInput(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_offending_values() {
        let e = Error::NonUnitStep {
            from: Point::new(0, 0),
            to: Point::new(1, 1),
        };
        assert_eq!(e.to_string(), "non-unit step (0, 0)->(1, 1)");

        let e = Error::OutOfBounds {
            what: "goal",
            point: Point::new(7, 2),
            size: 5,
        };
        assert_eq!(e.to_string(), "goal (7, 2) is out of bounds for a 5x5 grid");
    }

    #[test]
    fn json_errors_are_malformed_input() {
        let err: Error = serde_json::from_str::<u32>("\"x\"").unwrap_err().into();
        assert!(matches!(err, Error::MalformedInput(_)));
    }
}
