mod decode;
mod encode;
mod inspect;

/// Subcommands for fmtab
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Encode a table into libFM train / test / meta files.
    Encode(encode::EncodeArgs),

    /// Splice predictions back into an encoded table.
    Decode(decode::DecodeArgs),

    /// Summarize a saved table state.
    Inspect(inspect::InspectArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Encode(cmd) => cmd.run(),
            Commands::Decode(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
        }
    }
}
