use thiserror::Error;

/// Main error type for the crate.
/// Aggregates errors from the standard library and from every internal module.
#[derive(Error, Debug)]
pub enum RustyGridError {
    #[error("{0}")]
    WithContextError(String),

    // Standard library errors
    #[error("{0}")]
    IoError(#[from] std::io::Error),

    // Grid module errors
    #[error("{0}")]
    LayoutError(#[from] crate::grid::LayoutError),

    // Codec module errors
    #[error("{0}")]
    FormatError(#[from] crate::codec::FormatError),

    // Table module errors
    #[error("{0}")]
    TableError(#[from] crate::table::TableError),

    // Statistics module errors
    #[error("{0}")]
    StatisticsError(#[from] crate::statistics::StatisticsError),
}

pub trait ResultMessage {
    fn with_prefix(self, message: &str) -> Self;
}

impl<T> ResultMessage for Result<T, RustyGridError> {
    fn with_prefix(self, message: &str) -> Self {
        self.map_err(|e| RustyGridError::WithContextError(format!("{}: {}", message, e)))
    }
}
