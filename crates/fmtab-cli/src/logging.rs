//! # Logging Flags
//!
//! Records from the library and this binary go to stderr through
//! `stderrlog`. Both crates are named ``fmtab``, so one module filter
//! covers them.

use stderrlog::{LogLevelNum, Timestamp};

/// Verbosity with no ``-v`` flags: errors and warnings.
pub const DEFAULT_VERBOSITY: u8 = 2;

/// The module filter handed to `stderrlog`.
const LOG_MODULE: &str = "fmtab";

fn level_num(verbosity: u8) -> LogLevelNum {
    match verbosity {
        0 => LogLevelNum::Off,
        1 => LogLevelNum::Error,
        2 => LogLevelNum::Warn,
        3 => LogLevelNum::Info,
        4 => LogLevelNum::Debug,
        _ => LogLevelNum::Trace,
    }
}

/// Logging flags shared by every subcommand.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Suppress all log output, warnings included.
    #[arg(short, long)]
    quiet: bool,

    /// Log more: -v for encode / decode summaries, -vv for debug, -vvv for trace.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Prefix log lines with a timestamp.
    #[arg(long)]
    timestamps: bool,
}

impl LogArgs {
    /// The verbosity after applying ``-v`` flags.
    pub fn verbosity(&self) -> u8 {
        DEFAULT_VERBOSITY.saturating_add(self.verbose)
    }

    /// Install the stderr logger.
    pub fn setup_logging(&self) -> Result<(), Box<dyn std::error::Error>> {
        let timestamp = if self.timestamps {
            Timestamp::Second
        } else {
            Timestamp::Off
        };

        stderrlog::new()
            .module(LOG_MODULE)
            .quiet(self.quiet)
            .verbosity(level_num(self.verbosity()))
            .timestamp(timestamp)
            .init()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(clap::Parser, Debug)]
    struct Cli {
        #[command(flatten)]
        logging: LogArgs,
    }

    #[test]
    fn test_verbosity() {
        let parse = |args: &[&str]| Cli::parse_from(args).logging;

        assert_eq!(parse(&["fmtab"]).verbosity(), DEFAULT_VERBOSITY);
        assert_eq!(parse(&["fmtab", "-v"]).verbosity(), 3);
        assert_eq!(parse(&["fmtab", "-vvv"]).verbosity(), 5);

        let quiet = parse(&["fmtab", "-q", "--timestamps"]);
        assert!(quiet.quiet);
        assert!(quiet.timestamps);
    }
}
