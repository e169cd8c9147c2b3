//! # Logical Table
//!
//! In-memory grid of cells. Every mutation re-lays out the grid right away, so
//! [`Table::as_str`] always reflects the current cells and column count.
//! [`PersistentTable`] binds a table to a backing file and [`StatisticalTable`]
//! adds a numeric view on top of that.
pub mod options;
pub mod persistent;
pub mod statistical;

pub use options::TableOptions;
pub use persistent::PersistentTable;
pub use statistical::StatisticalTable;

use crate::codec::is_token;
use crate::error::RustyGridError;
use crate::grid::{check_columns, layout, placeholder, LayoutError, Rendering};
use std::fmt::Display;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors related to table mutation and cell conversion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("Cell index {index} is out of range for a table of {size} cells")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("Cell '{value}' at position {cell} should be a non-empty token without whitespace or brackets")]
    InvalidCell {
        value: String,
        /// 1-based position of the cell within its batch
        cell: usize,
    },

    #[error("Cannot convert element '{value}' in cell {cell}{} to double", position(.line, .path))]
    NumericConversion {
        value: String,
        /// 1-based position of the cell within its line or batch
        cell: usize,
        /// 1-based line, when the value was read from a file
        line: Option<usize>,
        /// Backing file the value was read from
        path: Option<PathBuf>,
    },
}

impl TableError {
    /// Attaches the file a numeric conversion failed in.
    pub fn with_path(self, path: &Path) -> Self {
        match self {
            Self::NumericConversion { value, cell, line, .. } => Self::NumericConversion {
                value,
                cell,
                line,
                path: Some(path.to_path_buf()),
            },
            other => other,
        }
    }
}

fn position(line: &Option<usize>, path: &Option<PathBuf>) -> String {
    let mut position = line.map(|line| format!(" on line {line}")).unwrap_or_default();
    if let Some(path) = path {
        position.push_str(&format!(" of '{}'", path.display()));
    }
    position
}

fn check_cell(value: String, cell: usize) -> Result<String, TableError> {
    if is_token(&value) {
        Ok(value)
    } else {
        Err(TableError::InvalidCell { value, cell })
    }
}

fn check_cells<I, S>(cells: I) -> Result<Vec<String>, TableError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    cells
        .into_iter()
        .enumerate()
        .map(|(index, cell)| check_cell(cell.into(), index + 1))
        .collect()
}

/// A flat list of cells laid out in rows of at most `columns` cells.
///
/// Cells are tokens the grid parser can read back: non-empty, with no
/// whitespace and no square brackets. Anything else is refused with
/// [`TableError::InvalidCell`] before the table changes.
#[derive(Clone, Debug)]
pub struct Table {
    cells: Vec<String>,
    columns: NonZeroUsize,
    rendering: Rendering,
}

impl Table {
    /// Creates an empty table showing the placeholder layout.
    pub fn new(columns: usize) -> Result<Self, LayoutError> {
        let columns = check_columns(columns)?;
        Ok(Self {
            cells: Vec::new(),
            columns,
            rendering: placeholder(columns),
        })
    }

    /// Creates a table from ready-made cells.
    pub fn with_cells<I, S>(cells: I, columns: usize) -> Result<Self, RustyGridError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns = check_columns(columns)?;
        let cells = check_cells(cells)?;
        let rendering = layout(&cells, columns);
        Ok(Self { cells, columns, rendering })
    }

    fn relayout(&mut self) {
        self.rendering = layout(&self.cells, self.columns);
    }

    /// Appends one cell. Empty values and values holding whitespace or
    /// brackets are refused since they would not parse back.
    pub fn add<S: Into<String>>(&mut self, cell: S) -> Result<(), TableError> {
        let cell = check_cell(cell.into(), 1)?;
        self.cells.push(cell);
        self.relayout();
        Ok(())
    }

    /// Appends every cell, or none of them when one is not a valid token.
    pub fn add_all<I, S>(&mut self, cells: I) -> Result<(), TableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cells = check_cells(cells)?;
        self.cells.extend(cells);
        self.relayout();
        Ok(())
    }

    /// Removes and returns the cell at `index`.
    /// Leaves the table untouched when the index is out of range.
    pub fn remove(&mut self, index: usize) -> Result<String, TableError> {
        self.check_index(index)?;
        let cell = self.cells.remove(index);
        self.relayout();
        Ok(cell)
    }

    fn check_index(&self, index: usize) -> Result<(), TableError> {
        if index < self.cells.len() {
            Ok(())
        } else {
            Err(TableError::IndexOutOfRange {
                index,
                size: self.cells.len(),
            })
        }
    }

    /// Discards every cell and shows the placeholder layout again.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.rendering = placeholder(self.columns);
    }

    /// Changes the number of cells per row; only the layout changes.
    pub fn set_columns(&mut self, columns: usize) -> Result<(), LayoutError> {
        self.columns = check_columns(columns)?;
        self.relayout();
        Ok(())
    }

    /// Appends the cells of `other`. Duplicates are kept, so merging a copy of
    /// this table doubles it; compare with `==` first to avoid that.
    pub fn merge(&mut self, other: &Table) {
        self.cells.extend(other.cells.iter().cloned());
        self.relayout();
    }

    pub fn columns(&self) -> usize {
        self.columns.get()
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Width of every bracketed token in the current layout.
    pub fn cell_width(&self) -> usize {
        self.rendering.cell_width
    }

    /// The current text serialization.
    pub fn as_str(&self) -> &str {
        &self.rendering.text
    }
}

impl PartialEq for Table {
    /// Two tables are equal when they hold the same cells in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rendering.text)
    }
}
