//! # `TableEncoder` Result Types

use crate::{
    table_state::TableState,
    types::{FeatureToken, IdentitySpace},
};

/// The result of encoding a table.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedTable {
    /// Tokens for numeric cells, row-major.
    pub numeric: Vec<FeatureToken>,

    /// Placeholder tokens for missing cells, row-major.
    ///
    /// This is the order predictions must be supplied in.
    pub placeholders: Vec<FeatureToken>,

    /// The identity-space of each global feature index.
    pub meta: Vec<IdentitySpace>,

    /// The state needed to decode predictions.
    pub state: TableState,
}

fn render_all<T: ToString>(items: &[T]) -> Vec<String> {
    items.iter().map(|t| t.to_string()).collect()
}

impl EncodedTable {
    /// The number of data rows.
    pub fn total_rows(&self) -> usize {
        self.state.total_rows()
    }

    /// The width of the column-identity space.
    pub fn num_feature_columns(&self) -> usize {
        self.state.num_feature_columns()
    }

    /// The total number of tokens.
    pub fn token_count(&self) -> usize {
        self.numeric.len() + self.placeholders.len()
    }

    /// The numeric tokens, as libFM lines.
    pub fn numeric_lines(&self) -> Vec<String> {
        render_all(&self.numeric)
    }

    /// The placeholder tokens, as libFM lines.
    pub fn placeholder_lines(&self) -> Vec<String> {
        render_all(&self.placeholders)
    }

    /// The meta vector, as ``"0"`` / ``"1"`` lines.
    pub fn meta_lines(&self) -> Vec<String> {
        render_all(&self.meta)
    }

    /// Drop the tokens, keeping the decode state.
    pub fn into_state(self) -> TableState {
        self.state
    }
}
