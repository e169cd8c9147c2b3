//! # Table Codec
//!
//! Strict parser for the bracket grid produced by [`crate::grid::render`].
//! Odd lines must be dash bars and even lines must be bracket groups; any
//! deviation fails with the offending 1-based line number. Parsing is
//! all-or-nothing: cells extracted before a failing line are never returned.
use log::{debug, trace};
use regex::Regex;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Character class of a cell token inside a bracket group.
const TOKEN: &str = r"[^\s\[\]]+";

/// The grammar rule a line violated.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// An odd line was not a dividing bar
    #[error("line should be a dividing bar")]
    ExpectedBar,
    /// An even line was not a sequence of bracketed cells
    #[error("formatting error")]
    MalformedRow,
}

/// A grammar violation at a specific line of a grid file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Line: {line}, File: {}: {kind}", location(.path))]
pub struct FormatError {
    pub kind: FormatErrorKind,
    /// 1-based line number
    pub line: usize,
    /// Backing file, when the text came from one
    pub path: Option<PathBuf>,
    /// Cells successfully extracted before the failing line (diagnostic only)
    pub cells_before: usize,
}

impl FormatError {
    fn new(kind: FormatErrorKind, line: usize, cells_before: usize) -> Self {
        Self { kind, line, path: None, cells_before }
    }

    /// Attaches the file the text was read from.
    pub fn with_path(mut self, path: &Path) -> Self {
        self.path = Some(path.to_path_buf());
        self
    }
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "<memory>".to_owned())
}

/// Whether `value` reads back unchanged once written into a bracket group.
/// Same class as the row grammar: at least one character, none of them
/// whitespace or a square bracket.
pub fn is_token(value: &str) -> bool {
    !value.is_empty() && !value.chars().any(|c| c.is_whitespace() || c == '[' || c == ']')
}

/// Cells taken from one content line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    /// 1-based line number the cells were read from
    pub line: usize,
    pub cells: Vec<String>,
}

/// Parses grid text into its ordered cells.
pub fn parse(text: &str) -> Result<Vec<String>, FormatError> {
    Ok(parse_rows(text)?
        .into_iter()
        .flat_map(|row| row.cells)
        .collect())
}

/// Parses grid text, keeping the line each group of cells came from.
/// Rows made only of blank placeholder cells are accepted and yield nothing.
pub fn parse_rows(text: &str) -> Result<Vec<Row>, FormatError> {
    if text.lines().all(|line| line.trim().is_empty()) {
        debug!("Grid text has no content, treating as empty table");
        return Ok(Vec::new());
    }

    let bar_pattern = Regex::new(r"^-+$").expect("Hardcode regex pattern");
    let row_pattern = Regex::new(&format!(r"^(?:\[\s{TOKEN}\s+\])+$")).expect("Hardcode regex pattern");
    let blank_pattern = Regex::new(r"^(?:\[\s+\])+$").expect("Hardcode regex pattern");
    let cell_pattern = Regex::new(&format!(r"\[\s({TOKEN})\s+\]")).expect("Hardcode regex pattern");

    let mut rows = Vec::new();
    let mut cells_before = 0;
    for (index, line) in text.lines().enumerate() {
        let number = index + 1;
        if number % 2 != 0 {
            if !bar_pattern.is_match(line) {
                return Err(FormatError::new(FormatErrorKind::ExpectedBar, number, cells_before));
            }
        } else if row_pattern.is_match(line) {
            let cells: Vec<String> = cell_pattern
                .captures_iter(line)
                .filter_map(|captures| captures.get(1))
                .map(|matcher| matcher.as_str().to_owned())
                .collect();
            trace!("Line {number}: {} cells", cells.len());
            cells_before += cells.len();
            rows.push(Row { line: number, cells });
        } else if blank_pattern.is_match(line) {
            trace!("Line {number}: placeholder row");
        } else {
            return Err(FormatError::new(FormatErrorKind::MalformedRow, number, cells_before));
        }
    }

    debug!("Parsed {cells_before} cells from {} rows", rows.len());
    Ok(rows)
}
