//! # Stream Paths
//!
//! Command arguments which name either a file or, as ``-``, a standard stream.

use std::{
    convert::Infallible,
    fmt,
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
    str::FromStr,
};

/// A file path, or ``-`` for stdin / stdout.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StreamPath {
    /// Standard input when reading, standard output when writing.
    #[default]
    Standard,

    /// A file on disk.
    File(PathBuf),
}

impl FromStr for StreamPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "-" => StreamPath::Standard,
            path => StreamPath::File(path.into()),
        })
    }
}

impl fmt::Display for StreamPath {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            StreamPath::Standard => write!(f, "-"),
            StreamPath::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl StreamPath {
    /// Open the path for buffered reading.
    pub fn reader(&self) -> io::Result<Box<dyn BufRead>> {
        Ok(match self {
            StreamPath::Standard => Box::new(BufReader::new(io::stdin().lock())),
            StreamPath::File(path) => Box::new(BufReader::new(File::open(path)?)),
        })
    }

    /// Create (or truncate) the path for buffered writing.
    pub fn writer(&self) -> io::Result<Box<dyn Write>> {
        Ok(match self {
            StreamPath::Standard => Box::new(BufWriter::new(io::stdout().lock())),
            StreamPath::File(path) => Box::new(BufWriter::new(File::create(path)?)),
        })
    }
}
