use crate::codec::{parse_rows, Row};
use crate::error::{ResultMessage, RustyGridError};
use crate::helpers::file::BackingFile;
use crate::table::{Table, TableError, TableOptions};
use log::debug;
use std::fmt::Display;
use std::path::Path;

/// A [`Table`] mirrored to a backing file.
///
/// The file is loaded once when the table is opened and rewritten in full
/// after every successful mutation. A mutation that fails leaves both the
/// table and the file unchanged.
#[derive(Debug)]
pub struct PersistentTable {
    table: Table,
    file: BackingFile,
}

impl PersistentTable {
    /// Opens the table stored at `path`. A file without content yields an
    /// empty table showing the placeholder layout.
    pub fn open<P: AsRef<Path>>(path: P, options: TableOptions) -> Result<Self, RustyGridError> {
        Self::load(path, options, None, |_| Ok(()))
    }

    /// Opens the table stored at `path`, placing `cells` before the cells
    /// already persisted there.
    pub fn open_with_cells<P, I, S>(path: P, cells: I, options: TableOptions) -> Result<Self, RustyGridError>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cells = cells.into_iter().map(Into::into).collect();
        Self::load(path, options, Some(cells), |_| Ok(()))
    }

    /// Loads the backing file. `inspect` sees the parsed rows before anything
    /// is committed and may reject them; its errors are tagged with the path.
    pub(crate) fn load<P, F>(
        path: P,
        options: TableOptions,
        cells: Option<Vec<String>>,
        mut inspect: F,
    ) -> Result<Self, RustyGridError>
    where
        P: AsRef<Path>,
        F: FnMut(&[Row]) -> Result<(), TableError>,
    {
        let columns = options.validate()?.get();
        let mut table = match cells {
            Some(cells) => Table::with_cells(cells, columns)?,
            None => Table::new(columns)?,
        };

        let file = BackingFile::open(path, options.create_if_missing)?;
        let text = file
            .read_to_string()
            .with_prefix(&format!("Read table file '{}'", file.path().display()))?;
        let rows = parse_rows(&text).map_err(|e| e.with_path(file.path()))?;
        inspect(&rows).map_err(|e| e.with_path(file.path()))?;

        if !rows.is_empty() {
            table.add_all(rows.into_iter().flat_map(|row| row.cells))?;
        }
        debug!(
            "Loaded {} cells from '{}' into {} columns",
            table.size(),
            file.path().display(),
            columns
        );

        let persistent = Self { table, file };
        persistent.flush()?;
        Ok(persistent)
    }

    /// Rewrites the backing file with the current layout.
    fn flush(&self) -> Result<(), RustyGridError> {
        self.file.overwrite(self.table.as_str())
    }

    /// Runs `mutate` on a copy of the table and keeps the copy only once its
    /// layout is in the backing file.
    fn commit<T, F>(&mut self, mutate: F) -> Result<T, RustyGridError>
    where
        F: FnOnce(&mut Table) -> Result<T, RustyGridError>,
    {
        let mut next = self.table.clone();
        let value = mutate(&mut next)?;
        self.file.overwrite(next.as_str())?;
        self.table = next;
        Ok(value)
    }

    /// Appends one cell. See [`Table::add`] for the cells that are accepted.
    pub fn add<S: Into<String>>(&mut self, cell: S) -> Result<(), RustyGridError> {
        self.commit(|table| Ok(table.add(cell)?))
    }

    pub fn add_all<I, S>(&mut self, cells: I) -> Result<(), RustyGridError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.commit(|table| Ok(table.add_all(cells)?))
    }

    pub fn remove(&mut self, index: usize) -> Result<String, RustyGridError> {
        self.commit(|table| Ok(table.remove(index)?))
    }

    pub fn clear(&mut self) -> Result<(), RustyGridError> {
        self.commit(|table| {
            table.clear();
            Ok(())
        })
    }

    pub fn set_columns(&mut self, columns: usize) -> Result<(), RustyGridError> {
        self.commit(|table| Ok(table.set_columns(columns)?))
    }

    /// Appends the cells of `other` without deduplication.
    pub fn merge(&mut self, other: &Table) -> Result<(), RustyGridError> {
        self.commit(|table| {
            table.merge(other);
            Ok(())
        })
    }

    /// Compares cells with `other`; useful as a guard before [`Self::merge`].
    pub fn equals(&self, other: &Table) -> bool {
        self.table == *other
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn columns(&self) -> usize {
        self.table.columns()
    }

    pub fn size(&self) -> usize {
        self.table.size()
    }
}

impl Display for PersistentTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.table)
    }
}
