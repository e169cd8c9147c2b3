use crate::statistics::StatisticsError;

/// A point in the cartesian plane taken from two columns of the grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Point {
    pub(crate) x: f64,
    pub(crate) y: f64,
}

/// Result of an ordinary least squares fit, `y = intercept + slope * x`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinearFit {
    pub intercept: f64,
    pub slope: f64,
}

impl LinearFit {
    /// Evaluates the fitted line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Collects points by walking two 1-based columns of a row-major value list.
/// Stops as soon as either column runs past the end of the data.
pub(crate) fn points(values: &[f64], x_column: usize, y_column: usize, columns: usize) -> Result<Vec<Point>, StatisticsError> {
    let in_range = |column: usize| (1..=columns).contains(&column);
    if !in_range(x_column) || !in_range(y_column) {
        return Err(StatisticsError::ColumnRange { x_column, y_column, columns });
    }

    let points: Vec<Point> = (x_column - 1..values.len())
        .step_by(columns)
        .zip((y_column - 1..values.len()).step_by(columns))
        .map(|(x, y)| Point { x: values[x], y: values[y] })
        .collect();

    if points.is_empty() {
        Err(StatisticsError::InsufficientData)
    } else {
        Ok(points)
    }
}

/// Fits a line through `points` by ordinary least squares.
pub(crate) fn fit(points: &[Point]) -> Result<LinearFit, StatisticsError> {
    if points.is_empty() {
        return Err(StatisticsError::InsufficientData);
    }
    let count = points.len() as f64;
    let mean_x = points.iter().map(|point| point.x).sum::<f64>() / count;
    let mean_y = points.iter().map(|point| point.y).sum::<f64>() / count;

    let (numerator, denominator) = points.iter().fold((0.0, 0.0), |(numerator, denominator), point| {
        let dx = point.x - mean_x;
        (numerator + dx * (point.y - mean_y), denominator + dx * dx)
    });
    if denominator == 0.0 {
        return Err(StatisticsError::ZeroVariance);
    }

    let slope = numerator / denominator;
    Ok(LinearFit {
        intercept: mean_y - slope * mean_x,
        slope,
    })
}
