//! # Error Types

/// Errors from fmtab operations.
///
/// A cell which does not parse as a number is *not* an error;
/// it is the missing-value signal and becomes a placeholder token.
#[derive(Debug, thiserror::Error)]
pub enum FmTabError {
    /// The line sequence had no header line.
    #[error("empty input: no header line")]
    EmptyInput,

    /// A data row does not fit the table layout.
    #[error("malformed row {row}: {reason}")]
    MalformedRow {
        /// The 0-based data row index.
        row: usize,

        /// What was wrong with the row.
        reason: String,
    },

    /// The prediction vector does not line up with the placeholder cells.
    #[error("prediction count mismatch: expected {expected}, got {actual}")]
    PredictionCountMismatch {
        /// The number of placeholder cells in the table.
        expected: usize,

        /// The number of predictions supplied.
        actual: usize,
    },

    /// A prediction source line is not a number.
    #[error("invalid prediction on line {line}: {text:?}")]
    InvalidPrediction {
        /// The 1-based source line.
        line: usize,

        /// The offending text.
        text: String,
    },

    /// A table state whose rows disagree with its recorded placeholder count.
    #[error("inconsistent table state: {recorded} placeholders recorded, {found} missing cells in rows")]
    InconsistentState {
        /// The placeholder count recorded at encode time.
        recorded: usize,

        /// The missing cells found by re-classifying the rows.
        found: usize,
    },

    /// A line source held text that is not UTF-8.
    #[error("line {line} is not valid UTF-8")]
    NotUtf8 {
        /// The 1-based source line.
        line: usize,
    },

    /// The line source or sink could not be used.
    #[error(transparent)]
    IoUnavailable(#[from] std::io::Error),

    /// A persisted table state could not be read or written.
    #[cfg(feature = "serde")]
    #[error("table state format: {0}")]
    StateFormat(#[from] serde_json::Error),
}

/// Result type for fmtab operations.
pub type FTResult<T> = core::result::Result<T, FmTabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FmTabError::EmptyInput.to_string(),
            "empty input: no header line"
        );
        assert_eq!(
            FmTabError::MalformedRow {
                row: 3,
                reason: "expected 2 feature cells, found 1".to_string(),
            }
            .to_string(),
            "malformed row 3: expected 2 feature cells, found 1"
        );
        assert_eq!(
            FmTabError::PredictionCountMismatch {
                expected: 4,
                actual: 3
            }
            .to_string(),
            "prediction count mismatch: expected 4, got 3"
        );
        assert_eq!(
            FmTabError::InconsistentState {
                recorded: 5,
                found: 2
            }
            .to_string(),
            "inconsistent table state: 5 placeholders recorded, 2 missing cells in rows"
        );
        assert_eq!(
            FmTabError::NotUtf8 { line: 2 }.to_string(),
            "line 2 is not valid UTF-8"
        );
    }

    #[test]
    fn test_io_conversion() {
        let err: FmTabError = std::io::Error::other("gone").into();
        assert!(matches!(err, FmTabError::IoUnavailable(_)));
    }
}
