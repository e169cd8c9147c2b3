//! # Grid Layout Engine
//!
//! Turns a flat list of cells into the canonical bracket grid:
//!
//! ```text
//! ------------------
//! [ a  ][ bb ][ c  ]
//! ------------------
//! [ d  ]
//! ------
//! ```
//!
//! Every token shares one width, rows hold at most `columns` tokens and dash
//! bars frame each row. The bar after the final row is sized to that row's
//! rendered length rather than the nominal full width.
pub(crate) mod cell;

use crate::grid::cell::{bar, cell_width, format_cell};
use std::num::NonZeroUsize;
use thiserror::Error;

/// Number of blank cells in the layout of a freshly created table.
pub const PLACEHOLDER_CELLS: usize = 8;

/// Errors raised while laying out a grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The column count must be at least one
    #[error("Number of columns on each row should be greater than 0, got {0}")]
    InvalidColumns(usize),
}

/// Text serialization of a grid together with the cell width it was laid out with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendering {
    /// Canonical text, `\n` separated
    pub text: String,
    /// Width of every bracketed token
    pub cell_width: usize,
}

/// Fails unless `columns` is a usable column count.
pub fn check_columns(columns: usize) -> Result<NonZeroUsize, LayoutError> {
    NonZeroUsize::new(columns).ok_or(LayoutError::InvalidColumns(columns))
}

/// Renders `cells` into rows of `columns` tokens.
pub fn render<S: AsRef<str>>(cells: &[S], columns: usize) -> Result<Rendering, LayoutError> {
    Ok(layout(cells, check_columns(columns)?))
}

/// Lays out `cells` for an already validated column count.
pub fn layout<S: AsRef<str>>(cells: &[S], columns: NonZeroUsize) -> Rendering {
    let columns = columns.get();
    let width = cell_width(cells);
    let full_bar = bar(width * columns);

    let mut text = String::new();
    text.push_str(&full_bar);
    text.push('\n');

    let mut row = String::new();
    let mut tokens_in_row = 0;
    for (index, value) in cells.iter().enumerate() {
        row.push_str(&format_cell(value.as_ref(), width));
        tokens_in_row += 1;
        if index + 1 == cells.len() {
            // Closing bar follows the actual row length, even for a short row
            text.push_str(&row);
            text.push('\n');
            text.push_str(&bar(width * tokens_in_row));
        } else if tokens_in_row == columns {
            text.push_str(&row);
            text.push('\n');
            text.push_str(&full_bar);
            text.push('\n');
            row.clear();
            tokens_in_row = 0;
        }
    }

    Rendering { text, cell_width: width }
}

/// Lays out the grid shown by an empty table: blank placeholder cells.
pub fn placeholder(columns: NonZeroUsize) -> Rendering {
    layout(&[""; PLACEHOLDER_CELLS], columns)
}
