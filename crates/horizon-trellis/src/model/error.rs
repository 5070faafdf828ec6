//! Error types for the model layer.

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur when operating on a model.
///
/// Every fallible model operation checks its arguments before touching the
/// backing storage or emitting any signal, so an error always means the
/// model is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// A row index was outside the valid range.
    #[error("row {row} is out of range for a model with {len} rows")]
    RowOutOfRange { row: usize, len: usize },

    /// A sorted model's comparator could not order the inserted element.
    #[error("comparator cannot order the inserted element against row {row}")]
    Incomparable { row: usize },
}

impl ModelError {
    /// Create a range error.
    pub fn row_out_of_range(row: usize, len: usize) -> Self {
        Self::RowOutOfRange { row, len }
    }

    /// Create an incomparable-element error.
    pub fn incomparable(row: usize) -> Self {
        Self::Incomparable { row }
    }
}
