use crate::error::RustyGridError;
use crate::statistics::{Deviation, LinearFit, Statistics};
use crate::table::{PersistentTable, Table, TableError, TableOptions};
use std::fmt::Display;
use std::path::Path;

/// Parses a cell as a data point. `cell` is the 1-based position of the value
/// in its line or batch, `line` the file line it was read from.
fn to_data_point(value: &str, cell: usize, line: Option<usize>) -> Result<f64, TableError> {
    value.parse::<f64>().map_err(|_| TableError::NumericConversion {
        value: value.to_owned(),
        cell,
        line,
        path: None,
    })
}

fn to_data_points<S: AsRef<str>>(values: &[S]) -> Result<Vec<f64>, TableError> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| to_data_point(value.as_ref(), index + 1, None))
        .collect()
}

/// A file-backed table whose cells are all numbers.
///
/// The numeric view always holds exactly one value per cell. Values that do
/// not parse as `f64` are rejected before the table or file changes.
#[derive(Debug)]
pub struct StatisticalTable {
    table: PersistentTable,
    statistics: Statistics,
}

impl StatisticalTable {
    /// Opens the numeric table stored at `path`.
    ///
    /// # Errors
    ///
    /// Fails with [`TableError::NumericConversion`] naming the cell, line and
    /// file of the first value that is not a number, besides the errors of
    /// [`PersistentTable::open`].
    pub fn open<P: AsRef<Path>>(path: P, options: TableOptions) -> Result<Self, RustyGridError> {
        let mut statistics = Statistics::new();
        let table = PersistentTable::load(path, options, None, |rows| {
            for row in rows {
                for (index, value) in row.cells.iter().enumerate() {
                    statistics.push(to_data_point(value, index + 1, Some(row.line))?);
                }
            }
            Ok(())
        })?;
        Ok(Self { table, statistics })
    }

    pub fn add(&mut self, value: &str) -> Result<(), RustyGridError> {
        let data_point = to_data_point(value, 1, None)?;
        self.table.add(value)?;
        self.statistics.push(data_point);
        Ok(())
    }

    /// Adds every value, or none of them when any fails to parse.
    pub fn add_all<S: AsRef<str>>(&mut self, values: &[S]) -> Result<(), RustyGridError> {
        let data_points = to_data_points(values)?;
        self.table.add_all(values.iter().map(|value| value.as_ref()))?;
        self.statistics.extend(data_points);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<f64, RustyGridError> {
        self.table.remove(index)?;
        let data_point = self.statistics.remove(index).ok_or(TableError::IndexOutOfRange {
            index,
            size: self.statistics.len(),
        })?;
        Ok(data_point)
    }

    pub fn clear(&mut self) -> Result<(), RustyGridError> {
        self.table.clear()?;
        self.statistics.clear();
        Ok(())
    }

    pub fn set_columns(&mut self, columns: usize) -> Result<(), RustyGridError> {
        self.table.set_columns(columns)
    }

    /// Appends the values of `other` without deduplication.
    pub fn merge(&mut self, other: &StatisticalTable) -> Result<(), RustyGridError> {
        self.table.merge(other.table.table())?;
        self.statistics.extend(other.statistics.values().iter().copied());
        Ok(())
    }

    pub fn equals(&self, other: &Table) -> bool {
        self.table.equals(other)
    }

    pub fn table(&self) -> &Table {
        self.table.table()
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn size(&self) -> usize {
        self.table.size()
    }

    pub fn columns(&self) -> usize {
        self.table.columns()
    }

    pub fn mean(&self) -> Result<f64, RustyGridError> {
        Ok(self.statistics.mean()?)
    }

    pub fn median(&self) -> Result<f64, RustyGridError> {
        Ok(self.statistics.median()?)
    }

    pub fn mode(&self) -> Result<f64, RustyGridError> {
        Ok(self.statistics.mode()?)
    }

    pub fn standard_deviation(&self, deviation: Deviation) -> Result<f64, RustyGridError> {
        Ok(self.statistics.standard_deviation(deviation)?)
    }

    /// Fits a line through two 1-based columns of the current layout.
    pub fn linear_regression(&self, x_column: usize, y_column: usize) -> Result<LinearFit, RustyGridError> {
        Ok(self.statistics.linear_regression(x_column, y_column, self.columns())?)
    }
}

impl Display for StatisticalTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::StatisticsError;
    use std::fs;

    fn open(dir: &tempfile::TempDir, columns: usize) -> StatisticalTable {
        let options = TableOptions::default().with_columns(columns);
        StatisticalTable::open(dir.path().join("data.txt"), options).unwrap()
    }

    #[test]
    fn statistics_follow_mutations() {
        let dir = tempfile::tempdir().unwrap();
        let mut table = open(&dir, 2);
        assert!(matches!(
            table.mean(),
            Err(RustyGridError::StatisticsError(StatisticsError::EmptyDataset))
        ));

        table.add_all(&["2", "4", "6"]).unwrap();
        assert_eq!(table.mean().unwrap(), 4.0);
        assert_eq!(table.median().unwrap(), 4.0);

        table.add("4").unwrap();
        assert_eq!(table.mode().unwrap(), 4.0);
        assert_eq!(table.remove(0).unwrap(), 2.0);
        assert_eq!(table.statistics().values(), [4.0, 6.0, 4.0]);
        assert_eq!(table.table().cells(), ["4", "6", "4"]);

        table.clear().unwrap();
        assert!(table.statistics().is_empty());
        assert_eq!(table.size(), 0);
    }

    #[test]
    fn rejected_value_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut table = open(&dir, 2);
        table.add_all(&["1", "2"]).unwrap();
        let before = fs::read_to_string(dir.path().join("data.txt")).unwrap();

        let error = table.add_all(&["3", "x4"]).unwrap_err();
        assert!(matches!(
            error,
            RustyGridError::TableError(TableError::NumericConversion { cell: 2, line: None, .. })
        ));
        assert!(table.add("nope").is_err());
        assert_eq!(table.size(), 2);
        assert_eq!(table.statistics().len(), 2);
        assert_eq!(fs::read_to_string(dir.path().join("data.txt")).unwrap(), before);
    }

    #[test]
    fn remove_out_of_range_keeps_alignment() {
        let dir = tempfile::tempdir().unwrap();
        let mut table = open(&dir, 2);
        table.add_all(&["1", "2"]).unwrap();
        assert!(matches!(
            table.remove(2),
            Err(RustyGridError::TableError(TableError::IndexOutOfRange { index: 2, size: 2 }))
        ));
        assert_eq!(table.statistics().len(), table.size());
    }

    #[test]
    fn reload_restores_data_points() {
        let dir = tempfile::tempdir().unwrap();
        let mut table = open(&dir, 2);
        table.add_all(&["1", "2", "2", "4", "3", "6"]).unwrap();

        let reopened = open(&dir, 2);
        assert_eq!(reopened.statistics().values(), [1.0, 2.0, 2.0, 4.0, 3.0, 6.0]);
        let fit = reopened.linear_regression(1, 2).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!(fit.intercept.abs() < 1e-12);
    }

    #[test]
    fn non_numeric_file_reports_cell_and_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");
        fs::write(&path, "----------\n[ 1 ][ 2 ]\n----------\n[ 3 ][ x ]\n----------").unwrap();

        let error = StatisticalTable::open(&path, TableOptions::default().with_columns(2)).unwrap_err();
        match error {
            RustyGridError::TableError(error @ TableError::NumericConversion { .. }) => {
                assert_eq!(
                    error.to_string(),
                    format!("Cannot convert element 'x' in cell 2 on line 4 of '{}' to double", path.display())
                );
                let TableError::NumericConversion { value, cell, line, path: source } = error else {
                    unreachable!()
                };
                assert_eq!(value, "x");
                assert_eq!(cell, 2);
                assert_eq!(line, Some(4));
                assert_eq!(source.as_deref(), Some(path.as_path()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn failed_flush_keeps_statistics() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");
        let mut table = open(&dir, 2);
        table.add_all(&["1", "2"]).unwrap();

        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        assert!(matches!(table.add("3"), Err(RustyGridError::IoError(_))));
        assert!(table.add_all(&["3", "4"]).is_err());
        assert!(table.remove(0).is_err());
        assert!(table.clear().is_err());
        assert_eq!(table.size(), 2);
        assert_eq!(table.statistics().values(), [1.0, 2.0]);
        assert_eq!(table.mean().unwrap(), 1.5);
    }

    #[test]
    fn regression_uses_current_columns() {
        let dir = tempfile::tempdir().unwrap();
        let mut table = open(&dir, 2);
        table.add_all(&["1", "2", "2", "4", "3", "6"]).unwrap();
        assert!(matches!(
            table.linear_regression(1, 3),
            Err(RustyGridError::StatisticsError(StatisticsError::ColumnRange { .. }))
        ));

        table.set_columns(3).unwrap();
        let fit = table.linear_regression(1, 3).unwrap();
        assert!((fit.slope - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn merge_keeps_values_aligned() {
        let dir = tempfile::tempdir().unwrap();
        let mut table = open(&dir, 2);
        table.add_all(&["1", "2", "3"]).unwrap();

        let other_dir = tempfile::tempdir().unwrap();
        let mut other = open(&other_dir, 2);
        other.add_all(&["5", "5"]).unwrap();

        table.merge(&other).unwrap();
        assert_eq!(table.size(), 5);
        assert_eq!(table.statistics().values(), [1.0, 2.0, 3.0, 5.0, 5.0]);
        assert_eq!(table.mode().unwrap(), 5.0);
        assert!(!table.equals(other.table()));
    }

    #[test]
    fn standard_deviation_by_selector() {
        let dir = tempfile::tempdir().unwrap();
        let mut table = open(&dir, 4);
        table.add_all(&["2", "4", "4", "4", "5", "5", "7", "9"]).unwrap();
        let deviation = Deviation::try_from(1u8).unwrap();
        assert!((table.standard_deviation(deviation).unwrap() - 2.0).abs() < 1e-12);
    }
}
