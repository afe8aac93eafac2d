//! # Table Decoder

use crate::{
    cells::{CELL_DELIMITER, CellClass, split_row},
    decoders::DecoderOptions,
    errors::{FTResult, FmTabError},
    table_state::TableState,
};

/// Splices predictions back into the missing cells of an encoded table.
///
/// The decoder re-classifies each retained row with the same routine the
/// encoder used; numeric cells are copied verbatim, and each missing cell
/// takes the next prediction in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableDecoder {
    options: DecoderOptions,
}

/// Count the cells the decoder will substitute.
fn count_missing(state: &TableState) -> usize {
    state
        .rows()
        .iter()
        .map(|line| {
            split_row(line)
                .classified()
                .filter(CellClass::is_missing)
                .count()
        })
        .sum()
}

impl TableDecoder {
    /// Create a new decoder.
    pub fn new(options: DecoderOptions) -> Self {
        Self { options }
    }

    /// The decoder options.
    pub fn options(&self) -> &DecoderOptions {
        &self.options
    }

    /// Rebuild the table with predictions in place of missing cells.
    ///
    /// ## Arguments
    /// * `state` - the state from the matching encode.
    /// * `predictions` - one prediction per placeholder token, in order.
    ///
    /// ## Returns
    /// The header line, then one line per data row.
    ///
    /// ## Errors
    /// * [`FmTabError::InconsistentState`] if the rows of `state` do not
    ///   hold the recorded number of missing cells.
    /// * [`FmTabError::PredictionCountMismatch`] unless there is exactly
    ///   one prediction per placeholder.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn decode(
        &self,
        state: &TableState,
        predictions: &[f64],
    ) -> FTResult<Vec<String>> {
        let expected = state.placeholder_count();
        let found = count_missing(state);
        if found != expected {
            return Err(FmTabError::InconsistentState {
                recorded: expected,
                found,
            });
        }
        let mismatch = || FmTabError::PredictionCountMismatch {
            expected,
            actual: predictions.len(),
        };
        if predictions.len() != expected {
            return Err(mismatch());
        }

        let mut remaining = predictions.iter();
        let mut lines = Vec::with_capacity(state.total_rows() + 1);
        lines.push(state.header().to_string());

        for line in state.rows() {
            let cells = split_row(line);
            let mut out = String::with_capacity(line.len());
            out.push_str(cells.pivot());

            for cell in cells.classified() {
                out.push(CELL_DELIMITER);
                match cell {
                    CellClass::Numeric { text, .. } => out.push_str(text),
                    CellClass::Missing { .. } => {
                        let prediction = remaining.next().ok_or_else(mismatch)?;
                        out.push_str(&self.options.format.render(*prediction));
                    }
                }
            }
            lines.push(out);
        }

        log::debug!(
            "decoded {} rows, substituted {expected} cells",
            state.total_rows()
        );
        Ok(lines)
    }
}
