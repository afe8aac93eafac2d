//! # Cell Splitting and Classification
//!
//! Every feature cell is either *numeric* (it starts with a float literal)
//! or *missing* (anything else: empty, ``NA``, a categorical code, ...).
//!
//! Both [`crate::encoders`] and [`crate::decoders`] go through
//! [`RowCells::classified`]; the decoder locates the cells to replace by
//! replaying exactly the decisions the encoder made.
//!
//! ```rust
//! use fmtab::cells::{CellClass, split_row};
//!
//! let row = split_row("r1\t3.5\tcat");
//! let classes: Vec<CellClass> = row.classified().collect();
//! assert_eq!(
//!     classes,
//!     vec![
//!         CellClass::Numeric { text: "3.5", literal: "3.5" },
//!         CellClass::Missing { text: "cat" },
//!     ]
//! );
//! ```

mod numeric;
mod row_cells;

#[doc(inline)]
pub use numeric::*;
#[doc(inline)]
pub use row_cells::*;

use numeric::literal_value;

/// The classification of one feature cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellClass<'a> {
    /// The cell starts with a numeric literal.
    Numeric {
        /// The full cell text.
        text: &'a str,

        /// The leading numeric literal.
        literal: &'a str,
    },

    /// The cell is missing; its value is to be predicted.
    Missing {
        /// The full cell text.
        text: &'a str,
    },
}

impl<'a> CellClass<'a> {
    /// Classify a single cell.
    pub fn of(cell: &'a str) -> Self {
        match numeric_prefix(cell) {
            Some(literal) => CellClass::Numeric {
                text: cell,
                literal,
            },
            None => CellClass::Missing { text: cell },
        }
    }

    /// Is the cell numeric?
    pub fn is_numeric(&self) -> bool {
        matches!(self, CellClass::Numeric { .. })
    }

    /// Is the cell missing?
    pub fn is_missing(&self) -> bool {
        !self.is_numeric()
    }

    /// The original cell text.
    pub fn text(&self) -> &'a str {
        match self {
            CellClass::Numeric { text, .. } | CellClass::Missing { text } => text,
        }
    }

    /// The numeric value of the cell, if it is numeric.
    pub fn value(&self) -> Option<f64> {
        match self {
            CellClass::Numeric { literal, .. } => Some(literal_value(literal)),
            CellClass::Missing { .. } => None,
        }
    }
}
