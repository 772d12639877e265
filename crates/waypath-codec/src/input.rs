//! Normalization of path and move sources.
//!
//! Raw data arrives in several shapes:
//!
//! - JSON object with `"moves"`: a `UDLR` string or a list of move tokens
//! - JSON object with `"path"`: a list of `[x, y]` pairs or `{x, y}` objects
//! - bare JSON list of `[x, y]` pairs or `{x, y}` objects
//! - CSV rows with an `x`/`y` header, or headerless rows whose first two
//!   columns are the coordinates
//!
//! Each shape is resolved once into a [`Source`], the closed set of
//! canonical variants the codec works with.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use waypath_core::{Error, Point, Result};

use crate::command::{Command, condense};
use crate::moves::{Move, path_to_moves};

const X_ALIASES: [&str; 4] = ["x", "col_x", "x_coord", "xindex"];
const Y_ALIASES: [&str; 4] = ["y", "col_y", "y_coord", "yindex"];

/// A normalized path or move source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Moves(Vec<Move>),
    Path(Vec<Point>),
}

impl Source {
    /// Moves described by this source. Paths are validated step by step.
    pub fn into_moves(self) -> Result<Vec<Move>> {
        match self {
            Source::Moves(m) => Ok(m),
            Source::Path(p) => path_to_moves(&p),
        }
    }

    /// Condensed commands described by this source.
    pub fn into_commands(self) -> Result<Vec<Command>> {
        self.into_moves().map(|m| condense(&m))
    }
}

/// File types accepted by [`InputFormat::from_path`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Csv,
}

impl InputFormat {
    /// Pick the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("json") => Ok(InputFormat::Json),
            Some("csv") => Ok(InputFormat::Csv),
            _ => Err(Error::UnsupportedFormat(format!(
                "unsupported file extension: {}",
                path.display()
            ))),
        }
    }

    /// Parse `text` in this format.
    pub fn parse(self, text: &str) -> Result<Source> {
        match self {
            InputFormat::Json => parse_json(text),
            InputFormat::Csv => parse_table(text).map(Source::Path),
        }
    }
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(untagged)]
enum MovesField {
    Text(String),
    Tokens(Vec<Value>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CoordItem {
    Pair([i32; 2]),
    Object { x: i32, y: i32 },
}

impl From<CoordItem> for Point {
    fn from(c: CoordItem) -> Self {
        match c {
            CoordItem::Pair([x, y]) => Point::new(x, y),
            CoordItem::Object { x, y } => Point::new(x, y),
        }
    }
}

/// Parse a JSON path or move document.
///
/// An object with both keys is read as moves.
pub fn parse_json(text: &str) -> Result<Source> {
    let value: Value = serde_json::from_str(text)?;
    match value {
        Value::Object(mut obj) => {
            if let Some(moves) = obj.remove("moves") {
                log::debug!("input: JSON object with moves");
                return parse_moves_field(moves).map(Source::Moves);
            }
            if let Some(path) = obj.remove("path") {
                log::debug!("input: JSON object with path");
                let Value::Array(items) = path else {
                    return Err(Error::MalformedInput("\"path\" must be a list".into()));
                };
                return parse_coords(items).map(Source::Path);
            }
            Err(Error::UnsupportedFormat(
                "JSON object must contain \"path\" or \"moves\"".into(),
            ))
        }
        Value::Array(items) => {
            log::debug!("input: bare JSON coordinate list");
            parse_coords(items).map(Source::Path)
        }
        other => Err(Error::UnsupportedFormat(format!(
            "expected a JSON object or list, got {}",
            kind_of(&other)
        ))),
    }
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

fn parse_moves_field(v: Value) -> Result<Vec<Move>> {
    let field: MovesField = serde_json::from_value(v)
        .map_err(|_| Error::MalformedInput("\"moves\" must be a string or a list".into()))?;
    match field {
        MovesField::Text(s) => parse_move_string(&s),
        MovesField::Tokens(tokens) => tokens.iter().map(parse_move_token).collect(),
    }
}

/// Parse a move string such as `"RRUL"`. Whitespace is ignored; letters
/// are case-insensitive.
pub fn parse_move_string(s: &str) -> Result<Vec<Move>> {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            Move::from_letter(c)
                .ok_or_else(|| Error::MalformedInput(format!("bad move {c:?} in {s:?}")))
        })
        .collect()
}

fn parse_move_token(v: &Value) -> Result<Move> {
    let bad = || Error::MalformedInput(format!("bad move token {v}"));
    let s = v.as_str().ok_or_else(bad)?.trim();
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Move::from_letter(c).ok_or_else(bad),
        _ => Err(bad()),
    }
}

fn parse_coords(items: Vec<Value>) -> Result<Vec<Point>> {
    let points = items
        .into_iter()
        .map(|item| {
            serde_json::from_value::<CoordItem>(item.clone())
                .map(Point::from)
                .map_err(|_| Error::MalformedInput(format!("bad coord item: {item}")))
        })
        .collect::<Result<Vec<Point>>>()?;
    if points.is_empty() {
        return Err(Error::MalformedInput("path is empty".into()));
    }
    Ok(points)
}

// ---------------------------------------------------------------------------
// Tabular rows
// ---------------------------------------------------------------------------

/// Parse comma-separated coordinate rows.
///
/// When the first row names both an x and a y column (see the alias lists)
/// those columns are read from every following row. Otherwise every row,
/// the first included, contributes its first two columns; rows with fewer
/// than two columns are skipped. Quoted fields may contain commas.
pub fn parse_table(text: &str) -> Result<Vec<Point>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());
    let mut rows = reader
        .records()
        .map(|r| r.map_err(|e| Error::MalformedInput(format!("table: {e}"))));

    let Some(first) = rows.next().transpose()? else {
        return Err(Error::MalformedInput("table is empty".into()));
    };

    let headers: Vec<String> = first.iter().map(|h| h.to_ascii_lowercase()).collect();

    let mut points = Vec::new();
    match (column(&headers, &X_ALIASES), column(&headers, &Y_ALIASES)) {
        (Some(xc), Some(yc)) => {
            log::debug!("input: table with header {headers:?}");
            for row in rows {
                let row = row?;
                let n = line_of(&row);
                let (Some(x), Some(y)) = (row.get(xc), row.get(yc)) else {
                    return Err(Error::MalformedInput(format!("line {n}: missing x/y column")));
                };
                points.push(Point::new(cell_int(n, x)?, cell_int(n, y)?));
            }
        }
        _ => {
            log::debug!("input: headerless table");
            for row in std::iter::once(Ok(first)).chain(rows) {
                let row = row?;
                if row.len() < 2 {
                    continue;
                }
                let n = line_of(&row);
                points.push(Point::new(cell_int(n, &row[0])?, cell_int(n, &row[1])?));
            }
        }
    }
    if points.is_empty() {
        return Err(Error::MalformedInput("table has no coordinate rows".into()));
    }
    Ok(points)
}

fn column(headers: &[String], aliases: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| aliases.iter().any(|a| *a == h.as_str()))
}

fn line_of(row: &csv::StringRecord) -> u64 {
    row.position().map_or(0, |p| p.line())
}

fn cell_int(line: u64, cell: &str) -> Result<i32> {
    cell.parse()
        .map_err(|_| Error::MalformedInput(format!("line {line}: {cell:?} is not an integer")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Move::*;

    fn pts(raw: &[(i32, i32)]) -> Vec<Point> {
        raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn moves_string_and_list() {
        assert_eq!(
            parse_json(r#"{"moves": "RRu"}"#).unwrap(),
            Source::Moves(vec![Right, Right, Up])
        );
        assert_eq!(
            parse_json(r#"{"moves": ["r", "R", "D"]}"#).unwrap(),
            Source::Moves(vec![Right, Right, Down])
        );
        assert_eq!(parse_json(r#"{"moves": ""}"#).unwrap(), Source::Moves(vec![]));
    }

    #[test]
    fn bad_moves_are_rejected() {
        assert!(matches!(parse_json(r#"{"moves": "RXU"}"#), Err(Error::MalformedInput(_))));
        assert!(matches!(parse_json(r#"{"moves": ["RR"]}"#), Err(Error::MalformedInput(_))));
        assert!(matches!(parse_json(r#"{"moves": [1]}"#), Err(Error::MalformedInput(_))));
        assert!(matches!(parse_json(r#"{"moves": 3}"#), Err(Error::MalformedInput(_))));
    }

    #[test]
    fn path_object_and_bare_list() {
        let expected = Source::Path(pts(&[(0, 0), (1, 0), (1, 1)]));
        assert_eq!(parse_json(r#"{"path": [[0,0],[1,0],[1,1]]}"#).unwrap(), expected);
        assert_eq!(
            parse_json(r#"[{"x":0,"y":0},{"x":1,"y":0},{"x":1,"y":1}]"#).unwrap(),
            expected
        );
        assert_eq!(parse_json(r#"[[0,0],{"x":1,"y":0},[1,1]]"#).unwrap(), expected);
    }

    #[test]
    fn bad_paths_are_rejected() {
        assert!(matches!(parse_json(r#"{"path": [[0,0,0]]}"#), Err(Error::MalformedInput(_))));
        assert!(matches!(parse_json(r#"{"path": [{"x":1}]}"#), Err(Error::MalformedInput(_))));
        assert!(matches!(parse_json(r#"{"path": []}"#), Err(Error::MalformedInput(_))));
        assert!(matches!(parse_json(r#"{"path": "0,0"}"#), Err(Error::MalformedInput(_))));
    }

    #[test]
    fn unsupported_shapes() {
        assert!(matches!(parse_json(r#"{"route": []}"#), Err(Error::UnsupportedFormat(_))));
        assert!(matches!(parse_json("42"), Err(Error::UnsupportedFormat(_))));
        assert!(matches!(parse_json("not json"), Err(Error::MalformedInput(_))));
    }

    #[test]
    fn source_to_commands() {
        let src = parse_json(r#"{"path": [[0,0],[1,0],[2,0],[2,1]]}"#).unwrap();
        let cmds = src.into_commands().unwrap();
        assert_eq!(cmds.iter().map(|c| c.to_string()).collect::<Vec<_>>(), vec!["R2", "U1"]);

        let diag = parse_json(r#"[[0,0],[1,1]]"#).unwrap();
        assert!(matches!(diag.into_moves(), Err(Error::NonUnitStep { .. })));
    }

    #[test]
    fn table_with_header_aliases() {
        let text = "idx, X_Coord ,yindex\n0,0,0\n1,1,0\n2,1,1\n";
        assert_eq!(parse_table(text).unwrap(), pts(&[(0, 0), (1, 0), (1, 1)]));
    }

    #[test]
    fn headerless_table() {
        let text = "0,0\n\n1,0,extra\n7\n1,1\n";
        assert_eq!(parse_table(text).unwrap(), pts(&[(0, 0), (1, 0), (1, 1)]));
    }

    #[test]
    fn quoted_fields_keep_their_commas() {
        let text = "label,x,y\n\"left, bottom\",0,0\n\"up, one\",\"0\",1\n";
        assert_eq!(parse_table(text).unwrap(), pts(&[(0, 0), (0, 1)]));
        let headerless = "\"2\",3,\"note, with comma\"\n2,4\n";
        assert_eq!(parse_table(headerless).unwrap(), pts(&[(2, 3), (2, 4)]));
    }

    #[test]
    fn bad_cells_name_their_line() {
        match parse_table("x,y\n0,0\n1,oops\n") {
            Err(Error::MalformedInput(msg)) => assert!(msg.starts_with("line 3:"), "{msg}"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unmatched_header_falls_back_to_positions() {
        // Not a recognised header, so the first row is read as data and fails.
        assert!(matches!(parse_table("a,b\n0,0\n"), Err(Error::MalformedInput(_))));
    }

    #[test]
    fn empty_tables() {
        assert!(matches!(parse_table(""), Err(Error::MalformedInput(_))));
        assert!(matches!(parse_table("x,y\n"), Err(Error::MalformedInput(_))));
        assert!(matches!(parse_table("x,y\n3\n"), Err(Error::MalformedInput(_))));
    }

    #[test]
    fn format_from_extension() {
        let json = InputFormat::from_path(Path::new("a/path.JSON")).unwrap();
        assert_eq!(json, InputFormat::Json);
        assert_eq!(InputFormat::from_path(Path::new("rows.csv")).unwrap(), InputFormat::Csv);
        assert!(matches!(
            InputFormat::from_path(Path::new("moves.txt")),
            Err(Error::UnsupportedFormat(_))
        ));
        assert!(matches!(
            InputFormat::from_path(Path::new("noext")),
            Err(Error::UnsupportedFormat(_))
        ));
        let src = InputFormat::Csv.parse("x,y\n0,0\n0,1\n").unwrap();
        assert_eq!(src, Source::Path(pts(&[(0, 0), (0, 1)])));
    }
}
