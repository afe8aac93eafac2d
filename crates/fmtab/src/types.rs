//! # Common Types
use core::fmt::{Display, Formatter};

/// The payload of every placeholder token.
///
/// This is a sentinel; it is indistinguishable from a genuine
/// numeric zero, and learners treat placeholder rows as the test set.
pub const PLACEHOLDER_VALUE: &str = "0";

/// A sparse libFM-style feature record.
///
/// Rendered as ``<value> <row>:1 <column>:1``; a one-hot marker for
/// the row identity and one for the column identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeatureToken {
    /// The payload value text.
    pub value: String,

    /// The row-identity index.
    pub row: usize,

    /// The column-identity index.
    pub column: usize,
}

impl FeatureToken {
    /// Build a token carrying `value`.
    pub fn new<S: Into<String>>(
        value: S,
        row: usize,
        column: usize,
    ) -> Self {
        Self {
            value: value.into(),
            row,
            column,
        }
    }

    /// Build a placeholder token for a missing cell.
    pub fn placeholder(
        row: usize,
        column: usize,
    ) -> Self {
        Self::new(PLACEHOLDER_VALUE, row, column)
    }
}

impl Display for FeatureToken {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> core::fmt::Result {
        write!(f, "{} {}:1 {}:1", self.value, self.row, self.column)
    }
}

/// Which identity space a global feature index belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentitySpace {
    /// Indices ``[0, total_rows)``; rendered as ``0``.
    Row,

    /// Indices ``[total_rows, total_rows + columns)``; rendered as ``1``.
    Column,
}

impl IdentitySpace {
    /// The libFM meta group id.
    pub fn flag(self) -> u8 {
        match self {
            IdentitySpace::Row => 0,
            IdentitySpace::Column => 1,
        }
    }
}

impl Display for IdentitySpace {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> core::fmt::Result {
        write!(f, "{}", self.flag())
    }
}

/// Build the identity-space meta vector.
///
/// ## Arguments
/// * `total_rows` - the number of data rows.
/// * `num_feature_columns` - the width of the column-identity space.
///
/// ## Returns
/// `total_rows` [`IdentitySpace::Row`] entries, then
/// `num_feature_columns` [`IdentitySpace::Column`] entries.
pub fn build_meta(
    total_rows: usize,
    num_feature_columns: usize,
) -> Vec<IdentitySpace> {
    let mut meta = Vec::with_capacity(total_rows + num_feature_columns);
    meta.resize(total_rows, IdentitySpace::Row);
    meta.resize(total_rows + num_feature_columns, IdentitySpace::Column);
    meta
}
