//! # Retained Table State
//!
//! Everything the decoder needs from a prior encode: the header, the
//! verbatim data rows, and the shape of the encoding.

use crate::types::{IdentitySpace, build_meta};

/// The state of one encode -> predict -> decode cycle.
///
/// Produced by [`crate::TableEncoder::encode`], consumed by
/// [`crate::TableDecoder::decode`]. With the ``serde`` feature this can be
/// persisted between the two halves of a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableState {
    header: String,
    rows: Vec<String>,
    num_feature_columns: usize,
    placeholder_count: usize,
}

impl TableState {
    pub(crate) fn new(
        header: String,
        rows: Vec<String>,
        num_feature_columns: usize,
        placeholder_count: usize,
    ) -> Self {
        Self {
            header,
            rows,
            num_feature_columns,
            placeholder_count,
        }
    }

    /// The header line.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// The retained data rows, verbatim and in order.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// The number of data rows; also the first column-identity index.
    pub fn total_rows(&self) -> usize {
        self.rows.len()
    }

    /// The width of the column-identity space.
    pub fn num_feature_columns(&self) -> usize {
        self.num_feature_columns
    }

    /// The number of placeholder tokens; the expected prediction count.
    pub fn placeholder_count(&self) -> usize {
        self.placeholder_count
    }

    /// Rebuild the identity-space meta vector.
    pub fn meta(&self) -> Vec<IdentitySpace> {
        build_meta(self.total_rows(), self.num_feature_columns)
    }
}
