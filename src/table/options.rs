use crate::grid::{check_columns, LayoutError};
use std::num::NonZeroUsize;

/// Settings for opening a file-backed table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TableOptions {
    /// Maximum number of cells on each row (default: 4)
    pub columns: usize,

    /// Create the backing file when it does not exist yet (default: true)
    pub create_if_missing: bool,
}

impl TableOptions {
    pub const DEFAULT_COLUMNS: usize = 4;

    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_create_if_missing(mut self, create_if_missing: bool) -> Self {
        self.create_if_missing = create_if_missing;
        self
    }

    /// Checks the options before any file is touched.
    pub fn validate(&self) -> Result<NonZeroUsize, LayoutError> {
        check_columns(self.columns)
    }
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            columns: Self::DEFAULT_COLUMNS,
            create_if_missing: true,
        }
    }
}
