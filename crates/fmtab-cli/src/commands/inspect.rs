use std::{io::Write, path::PathBuf};

use fmtab::io;

/// Args for the inspect command.
#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    /// The state file written by `encode`.
    #[arg(long)]
    state: PathBuf,
}

impl InspectArgs {
    /// Run the inspect command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let state = io::load_state(&self.state)?;

        let mut out = std::io::stdout().lock();
        writeln!(out, "rows:            {}", state.total_rows())?;
        writeln!(out, "feature columns: {}", state.num_feature_columns())?;
        writeln!(out, "meta length:     {}", state.meta().len())?;
        writeln!(out, "placeholders:    {}", state.placeholder_count())?;
        Ok(())
    }
}
