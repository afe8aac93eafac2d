//! Table Encoder Options
//!
//! Options for building a [`TableEncoder`].

use crate::encoders::TableEncoder;

/// How the column-identity space is sized when rows differ in width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowWidthPolicy {
    /// Every data row must have as many feature cells as the header.
    ///
    /// Any other row is a [`crate::FmTabError::MalformedRow`].
    #[default]
    MatchHeader,

    /// Rows may differ; the widest row sizes the column space.
    Widest,

    /// Rows may differ; the last row sizes the column space.
    ///
    /// Columns of wider rows then fall outside the meta vector.
    LastRow,
}

/// The payload written into numeric tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericPayload {
    /// The full original cell text, trailing content included.
    #[default]
    Verbatim,

    /// Only the leading numeric literal of the cell.
    Literal,
}

/// Options for configuring a [`TableEncoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncoderOptions {
    /// The [`RowWidthPolicy`] to use.
    pub row_width: RowWidthPolicy,

    /// The [`NumericPayload`] to use.
    pub numeric_payload: NumericPayload,
}

impl EncoderOptions {
    /// Get the configured [`RowWidthPolicy`].
    pub fn row_width(&self) -> RowWidthPolicy {
        self.row_width
    }

    /// Set the configured [`RowWidthPolicy`].
    pub fn set_row_width(
        &mut self,
        row_width: RowWidthPolicy,
    ) {
        self.row_width = row_width;
    }

    /// Set the configured [`RowWidthPolicy`] and return the options.
    pub fn with_row_width(
        mut self,
        row_width: RowWidthPolicy,
    ) -> Self {
        self.set_row_width(row_width);
        self
    }

    /// Get the configured [`NumericPayload`].
    pub fn numeric_payload(&self) -> NumericPayload {
        self.numeric_payload
    }

    /// Set the configured [`NumericPayload`].
    pub fn set_numeric_payload(
        &mut self,
        numeric_payload: NumericPayload,
    ) {
        self.numeric_payload = numeric_payload;
    }

    /// Set the configured [`NumericPayload`] and return the options.
    pub fn with_numeric_payload(
        mut self,
        numeric_payload: NumericPayload,
    ) -> Self {
        self.set_numeric_payload(numeric_payload);
        self
    }

    /// Build a [`TableEncoder`] with these options.
    pub fn build(&self) -> TableEncoder {
        TableEncoder::new(*self)
    }
}
