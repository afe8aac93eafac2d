//! Table Decoder Options
//!
//! Options for building a [`TableDecoder`].

use crate::decoders::TableDecoder;

/// How predictions are rendered into reconstructed cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PredictionFormat {
    /// The shortest text that round-trips the value; ``1.2`` -> ``"1.2"``.
    #[default]
    Shortest,

    /// A fixed number of decimal places; ``Fixed(6)`` renders ``1.2`` as ``"1.200000"``.
    Fixed(usize),
}

impl PredictionFormat {
    /// Render a prediction.
    pub fn render(
        &self,
        value: f64,
    ) -> String {
        match *self {
            PredictionFormat::Shortest => format!("{value}"),
            PredictionFormat::Fixed(precision) => format!("{value:.precision$}"),
        }
    }
}

/// Options for configuring a [`TableDecoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecoderOptions {
    /// The [`PredictionFormat`] to use.
    pub format: PredictionFormat,
}

impl DecoderOptions {
    /// Get the configured [`PredictionFormat`].
    pub fn format(&self) -> PredictionFormat {
        self.format
    }

    /// Set the configured [`PredictionFormat`].
    pub fn set_format(
        &mut self,
        format: PredictionFormat,
    ) {
        self.format = format;
    }

    /// Set the configured [`PredictionFormat`] and return the options.
    pub fn with_format(
        mut self,
        format: PredictionFormat,
    ) -> Self {
        self.set_format(format);
        self
    }

    /// Build a [`TableDecoder`] with these options.
    pub fn build(&self) -> TableDecoder {
        TableDecoder::new(*self)
    }
}
