//! # Rusty Grid
//!
//! Bracket-delimited text tables persisted to plain files, with descriptive
//! statistics over numeric tables.
//!
//! ## Features
//!
//! - **Grid layout**: cells are padded to one uniform width and wrapped into
//!   rows of a configurable column count, framed by dash bars
//! - **Strict codec**: persisted files are re-parsed line by line; any
//!   deviation is reported with its line number and file path
//! - **File-backed tables**: every mutation rewrites the backing file, so the
//!   file always mirrors the in-memory cells
//! - **Statistics**: mean, median, mode, sample and population standard
//!   deviation, and linear regression between two columns
//!
//! ## Example
//!
//! ```no_run
//! use rusty_grid::{Deviation, StatisticalTable, TableOptions};
//!
//! # fn main() -> Result<(), rusty_grid::RustyGridError> {
//! let mut table = StatisticalTable::open("measurements.txt", TableOptions::default().with_columns(2))?;
//! table.add_all(&["1", "2.1", "2", "3.9", "3", "6.2"])?;
//! let fit = table.linear_regression(1, 2)?;
//! println!("{table}\nslope = {}, sd = {}", fit.slope, table.standard_deviation(Deviation::Sample)?);
//! # Ok(())
//! # }
//! ```
pub mod codec;
pub mod error;
pub mod grid;
pub mod helpers;
pub mod statistics;
pub mod table;

pub use crate::codec::{parse, FormatError, FormatErrorKind};
pub use crate::error::{ResultMessage, RustyGridError};
pub use crate::grid::{render, LayoutError, Rendering};
pub use crate::statistics::{Deviation, LinearFit, Statistics, StatisticsError};
pub use crate::table::{PersistentTable, StatisticalTable, Table, TableError, TableOptions};
