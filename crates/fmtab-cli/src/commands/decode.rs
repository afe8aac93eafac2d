use std::path::PathBuf;

use fmtab::{DecoderOptions, PredictionFormat, io};

use crate::input_output::StreamPath;

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    /// The state file written by `encode`.
    #[arg(long)]
    state: PathBuf,

    /// Prediction file, one value per line; "-" reads stdin.
    #[arg(long, default_value = "-")]
    predictions: StreamPath,

    /// The decoded table; "-" writes stdout.
    #[arg(long, default_value = "-")]
    output: StreamPath,

    /// Render predictions with this many decimal places.
    #[arg(long)]
    precision: Option<usize>,
}

impl DecodeArgs {
    /// Run the decode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let state = io::load_state(&self.state)?;
        let predictions = io::read_predictions(self.predictions.reader()?)?;

        let format = match self.precision {
            Some(precision) => PredictionFormat::Fixed(precision),
            None => PredictionFormat::Shortest,
        };
        let lines = DecoderOptions::default()
            .with_format(format)
            .build()
            .decode(&state, &predictions)?;

        let mut writer = self.output.writer()?;
        io::write_lines(&mut writer, &lines)?;

        log::info!(
            "decoded {} rows, filled {} cells",
            state.total_rows(),
            predictions.len()
        );
        Ok(())
    }
}
