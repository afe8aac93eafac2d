use std::path::PathBuf;

use fmtab::{EncoderOptions, NumericPayload, RowWidthPolicy, io};

use crate::input_output::StreamPath;

/// Numeric tokens; the learner's training set.
pub const TRAIN_FILE: &str = "train.libfm";
/// Placeholder tokens; the learner's test set.
pub const TEST_FILE: &str = "test.libfm";
/// Identity-space groups, one per feature index.
pub const META_FILE: &str = "meta.txt";
/// The retained table state, for `decode`.
pub const STATE_FILE: &str = "state.json";

/// CLI names for [`RowWidthPolicy`].
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum RowWidthArg {
    /// Every row must match the header width.
    MatchHeader,
    /// The widest row sizes the column space.
    Widest,
    /// The last row sizes the column space.
    LastRow,
}

impl From<RowWidthArg> for RowWidthPolicy {
    fn from(arg: RowWidthArg) -> Self {
        match arg {
            RowWidthArg::MatchHeader => RowWidthPolicy::MatchHeader,
            RowWidthArg::Widest => RowWidthPolicy::Widest,
            RowWidthArg::LastRow => RowWidthPolicy::LastRow,
        }
    }
}

/// CLI names for [`NumericPayload`].
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum PayloadArg {
    /// Keep the full cell text.
    Verbatim,
    /// Keep only the leading numeric literal.
    Literal,
}

impl From<PayloadArg> for NumericPayload {
    fn from(arg: PayloadArg) -> Self {
        match arg {
            PayloadArg::Verbatim => NumericPayload::Verbatim,
            PayloadArg::Literal => NumericPayload::Literal,
        }
    }
}

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    /// The input table; "-" reads stdin.
    #[arg(long, default_value = "-")]
    input: StreamPath,

    /// Directory for the encoded files; created if missing.
    #[arg(long)]
    out_dir: PathBuf,

    /// How to size the column space when rows differ in width.
    #[arg(long, value_enum, default_value_t = RowWidthArg::MatchHeader)]
    row_width: RowWidthArg,

    /// What numeric tokens carry as their value.
    #[arg(long, value_enum, default_value_t = PayloadArg::Verbatim)]
    numeric_payload: PayloadArg,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let lines = io::read_lines(self.input.reader()?)?;

        let encoded = EncoderOptions::default()
            .with_row_width(self.row_width.into())
            .with_numeric_payload(self.numeric_payload.into())
            .build()
            .encode(&lines)?;

        std::fs::create_dir_all(&self.out_dir)?;
        io::save_lines(self.out_dir.join(TRAIN_FILE), &encoded.numeric)?;
        io::save_lines(self.out_dir.join(TEST_FILE), &encoded.placeholders)?;
        io::save_lines(self.out_dir.join(META_FILE), &encoded.meta)?;
        io::save_state(self.out_dir.join(STATE_FILE), &encoded.state)?;

        log::info!(
            "encoded {} ({} rows x {} columns) into {}: {} train / {} test tokens",
            self.input,
            encoded.total_rows(),
            encoded.num_feature_columns(),
            self.out_dir.display(),
            encoded.numeric.len(),
            encoded.placeholders.len(),
        );
        Ok(())
    }
}
