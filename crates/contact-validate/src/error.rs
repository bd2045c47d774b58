//! Error types for the partition engine.

use thiserror::Error;

/// Errors that abort a partition run. No partial result is produced.
#[derive(Debug, Error)]
pub enum PartitionError {
    /// A selected field's source column is not in the table.
    #[error("column '{column}' not found in table")]
    MissingColumn { column: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for PartitionError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PartitionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PartitionError::MissingColumn {
            column: "Email".to_string(),
        };
        assert_eq!(err.to_string(), "column 'Email' not found in table");
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("Email".into());
        let err: PartitionError = polars_err.into();
        assert!(matches!(err, PartitionError::DataFrame { .. }));
    }
}
