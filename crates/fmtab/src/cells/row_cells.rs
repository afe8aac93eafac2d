//! # Row Splitting

use crate::cells::CellClass;

/// The cell delimiter of table lines.
pub const CELL_DELIMITER: char = '\t';

/// A data row split into its pivot cell and its feature cells.
///
/// The pivot is the text before the first tab. Every tab-separated
/// segment after it is a feature cell, including the final segment;
/// so ``"r1\t"`` has one (empty) feature cell, and ``"r1"`` has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCells<'a> {
    pivot: &'a str,
    features: Option<&'a str>,
}

impl<'a> RowCells<'a> {
    /// The pivot (label / key) cell.
    pub fn pivot(&self) -> &'a str {
        self.pivot
    }

    /// Iterate over the feature cells, left to right.
    pub fn features(self) -> impl Iterator<Item = &'a str> {
        self.features
            .into_iter()
            .flat_map(|rest| rest.split(CELL_DELIMITER))
    }

    /// The number of feature cells.
    pub fn feature_count(self) -> usize {
        self.features().count()
    }

    /// Iterate over the classified feature cells, left to right.
    ///
    /// This is the one classification pass shared by encoding and decoding.
    pub fn classified(self) -> impl Iterator<Item = CellClass<'a>> {
        self.features().map(CellClass::of)
    }
}

/// Split a table line into pivot and feature cells.
pub fn split_row(line: &str) -> RowCells<'_> {
    match line.split_once(CELL_DELIMITER) {
        Some((pivot, rest)) => RowCells {
            pivot,
            features: Some(rest),
        },
        None => RowCells {
            pivot: line,
            features: None,
        },
    }
}
