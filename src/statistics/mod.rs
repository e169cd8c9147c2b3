//! # Statistics Engine
//!
//! Descriptive statistics and a two-column linear regression over the numeric
//! view of a table. Values are kept in the same row-major order as the cells
//! they were parsed from.
pub mod regression;

pub use regression::LinearFit;

use std::str::FromStr;
use thiserror::Error;

/// Errors raised by statistic computations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatisticsError {
    #[error("Cannot perform operation on empty set")]
    EmptyDataset,

    #[error("Column numbers {x_column} and {y_column} should lie between 1 and {columns}")]
    ColumnRange {
        x_column: usize,
        y_column: usize,
        columns: usize,
    },

    #[error("Not enough values, columns might not have equal amount of values or might be empty")]
    InsufficientData,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("All x values are identical, no line can be fitted")]
    ZeroVariance,
}

/// Divisor used when computing the variance.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Deviation {
    /// Divide by `n - 1`
    Sample,
    /// Divide by `n`
    Population,
}

impl TryFrom<u8> for Deviation {
    type Error = StatisticsError;

    /// Maps the numeric selector: 0 for sample, 1 for population.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Sample),
            1 => Ok(Self::Population),
            _ => Err(StatisticsError::InvalidArgument(format!(
                "choose 0 for sample or 1 for population deviation, got {value}"
            ))),
        }
    }
}

impl FromStr for Deviation {
    type Err = StatisticsError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_uppercase().as_str() {
            "SAMPLE" => Ok(Self::Sample),
            "POPULATION" => Ok(Self::Population),
            _ => Err(StatisticsError::InvalidArgument(format!(
                "unknown deviation '{name}', expected 'sample' or 'population'"
            ))),
        }
    }
}

/// Numeric view of a table, one value per cell.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Statistics {
    values: Vec<f64>,
}

impl From<Vec<f64>> for Statistics {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    pub fn extend<I: IntoIterator<Item = f64>>(&mut self, values: I) {
        self.values.extend(values);
    }

    /// Removes the value at `index`, or returns `None` when out of range.
    pub fn remove(&mut self, index: usize) -> Option<f64> {
        (index < self.values.len()).then(|| self.values.remove(index))
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    fn non_empty(&self) -> Result<&[f64], StatisticsError> {
        if self.values.is_empty() {
            Err(StatisticsError::EmptyDataset)
        } else {
            Ok(&self.values)
        }
    }

    /// Arithmetic mean of all values.
    pub fn mean(&self) -> Result<f64, StatisticsError> {
        let values = self.non_empty()?;
        Ok(values.iter().sum::<f64>() / values.len() as f64)
    }

    /// Middle value of the sorted data; the average of the two middle values
    /// for an even count.
    pub fn median(&self) -> Result<f64, StatisticsError> {
        let mut sorted = self.non_empty()?.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let count = sorted.len();
        if count % 2 == 0 {
            Ok((sorted[count / 2 - 1] + sorted[count / 2]) / 2.0)
        } else {
            Ok(sorted[count / 2])
        }
    }

    /// Most frequent value.
    ///
    /// The running winner only changes on a strictly greater count, so the
    /// earliest value wins ties and data without repeats yields its first
    /// element. NaN never equals itself and is only returned when every value
    /// is NaN.
    pub fn mode(&self) -> Result<f64, StatisticsError> {
        let values = self.non_empty()?;
        let mut mode = f64::NAN;
        let mut max_occurrence = 0;
        for &candidate in values {
            let count = values.iter().filter(|&&value| value == candidate).count();
            if count > max_occurrence {
                max_occurrence = count;
                mode = candidate;
            }
        }
        Ok(mode)
    }

    /// Mean squared deviation from the mean.
    pub fn variance(&self, deviation: Deviation) -> Result<f64, StatisticsError> {
        let mean = self.mean()?;
        let count = self.values.len();
        let divisor = match deviation {
            Deviation::Sample if count < 2 => return Err(StatisticsError::InsufficientData),
            Deviation::Sample => (count - 1) as f64,
            Deviation::Population => count as f64,
        };
        let sum_of_squares: f64 = self.values.iter().map(|value| (value - mean).powi(2)).sum();
        Ok(sum_of_squares / divisor)
    }

    pub fn standard_deviation(&self, deviation: Deviation) -> Result<f64, StatisticsError> {
        Ok(self.variance(deviation)?.sqrt())
    }

    /// Fits `y = intercept + slope * x` through two 1-based columns of a grid
    /// laid out with `columns` values per row.
    pub fn linear_regression(&self, x_column: usize, y_column: usize, columns: usize) -> Result<LinearFit, StatisticsError> {
        let points = regression::points(&self.values, x_column, y_column, columns)?;
        regression::fit(&points)
    }
}
