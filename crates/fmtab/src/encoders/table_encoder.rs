//! # Table Encoder

use crate::{
    cells::{CellClass, split_row},
    encoders::{EncodedTable, EncoderOptions, NumericPayload, RowWidthPolicy},
    errors::{FTResult, FmTabError},
    table_state::TableState,
    types::{FeatureToken, build_meta},
};

/// Encodes a tab-separated table into libFM sparse feature tokens.
///
/// The first line is the header; it is retained but not encoded.
/// Each data row at index `r` contributes one token per feature cell:
///
/// * numeric cells become ``<value> r:1 c:1``;
/// * missing cells become placeholders, ``0 r:1 c:1``;
///
/// where `c` counts up from `total_rows`, so row and column
/// identities occupy disjoint index ranges.
///
/// The encoder holds only options; all per-table state is returned
/// in the [`EncodedTable`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableEncoder {
    options: EncoderOptions,
}

impl TableEncoder {
    /// Create a new encoder.
    pub fn new(options: EncoderOptions) -> Self {
        Self { options }
    }

    /// The encoder options.
    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    /// Encode a table.
    ///
    /// ## Arguments
    /// * `lines` - the header line, followed by the data rows.
    ///
    /// ## Returns
    /// The tokens, meta vector, and the state needed for decoding.
    ///
    /// ## Errors
    /// * [`FmTabError::EmptyInput`] if there is no header line.
    /// * [`FmTabError::MalformedRow`] if a row is empty, or (under
    ///   [`RowWidthPolicy::MatchHeader`]) does not match the header width.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn encode<S: AsRef<str>>(
        &self,
        lines: &[S],
    ) -> FTResult<EncodedTable> {
        let (header, data) = lines.split_first().ok_or(FmTabError::EmptyInput)?;
        let header = header.as_ref();
        let header_width = split_row(header).feature_count();
        let total_rows = data.len();

        let mut numeric = Vec::new();
        let mut placeholders = Vec::new();
        let mut rows = Vec::with_capacity(total_rows);
        let mut widest = 0;
        let mut last = 0;

        for (row, line) in data.iter().enumerate() {
            let line = line.as_ref();
            if line.is_empty() {
                return Err(FmTabError::MalformedRow {
                    row,
                    reason: "empty line has no pivot cell".to_string(),
                });
            }

            let cells = split_row(line);
            let width = cells.feature_count();
            if self.options.row_width == RowWidthPolicy::MatchHeader && width != header_width {
                return Err(FmTabError::MalformedRow {
                    row,
                    reason: format!("expected {header_width} feature cells, found {width}"),
                });
            }

            for (position, cell) in cells.classified().enumerate() {
                let column = total_rows + position;
                match cell {
                    CellClass::Numeric { text, literal } => {
                        let value = match self.options.numeric_payload {
                            NumericPayload::Verbatim => text,
                            NumericPayload::Literal => literal,
                        };
                        numeric.push(FeatureToken::new(value, row, column));
                    }
                    CellClass::Missing { .. } => {
                        placeholders.push(FeatureToken::placeholder(row, column));
                    }
                }
            }

            widest = widest.max(width);
            last = width;
            rows.push(line.to_string());
        }

        let num_feature_columns = if total_rows == 0 {
            0
        } else {
            match self.options.row_width {
                RowWidthPolicy::MatchHeader => header_width,
                RowWidthPolicy::Widest => widest,
                RowWidthPolicy::LastRow => last,
            }
        };
        if widest > num_feature_columns {
            log::warn!(
                "{} column indices fall outside the meta vector ({num_feature_columns} columns)",
                widest - num_feature_columns
            );
        }

        log::debug!(
            "encoded {total_rows} rows x {num_feature_columns} columns: {} numeric, {} placeholders",
            numeric.len(),
            placeholders.len()
        );

        let state = TableState::new(
            header.to_string(),
            rows,
            num_feature_columns,
            placeholders.len(),
        );
        Ok(EncodedTable {
            numeric,
            placeholders,
            meta: build_meta(total_rows, num_feature_columns),
            state,
        })
    }
}
