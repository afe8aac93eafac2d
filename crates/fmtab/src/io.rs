//! # Line Sources and Sinks
//!
//! Thin helpers around the transcoder: loading a table into lines,
//! writing token lists, and reading prediction vectors.

use std::{
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::errors::{FTResult, FmTabError};

/// Read every line from `reader`.
///
/// Line terminators (``\n`` or ``\r\n``) are stripped.
///
/// ## Errors
/// [`FmTabError::NotUtf8`] names the first line that is not UTF-8.
pub fn read_lines<R: BufRead>(mut reader: R) -> FTResult<Vec<String>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }
        let line = String::from_utf8(std::mem::take(&mut buf))
            .map_err(|_| FmTabError::NotUtf8 { line: lines.len() + 1 })?;
        lines.push(line);
    }
    Ok(lines)
}

/// Load a table file into lines.
pub fn load_lines<P: AsRef<Path>>(path: P) -> FTResult<Vec<String>> {
    let path = path.as_ref();
    let lines = read_lines(BufReader::new(File::open(path)?))?;
    log::debug!("loaded {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Write each item on its own line.
pub fn write_lines<W, I>(
    writer: &mut W,
    items: I,
) -> FTResult<()>
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: Display,
{
    for item in items {
        writeln!(writer, "{item}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Write each item on its own line of a new file at `path`.
pub fn save_lines<P, I>(
    path: P,
    items: I,
) -> FTResult<()>
where
    P: AsRef<Path>,
    I: IntoIterator,
    I::Item: Display,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_lines(&mut writer, items)
}

/// Read a prediction vector; one number per line.
///
/// Blank lines are skipped. Unlike table cells, predictions must be
/// complete numbers.
pub fn read_predictions<R: BufRead>(reader: R) -> FTResult<Vec<f64>> {
    let mut predictions = Vec::new();
    for (idx, line) in read_lines(reader)?.iter().enumerate() {
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        let value = text
            .parse::<f64>()
            .map_err(|_| FmTabError::InvalidPrediction {
                line: idx + 1,
                text: text.to_string(),
            })?;
        predictions.push(value);
    }
    Ok(predictions)
}

/// Load a prediction file.
pub fn load_predictions<P: AsRef<Path>>(path: P) -> FTResult<Vec<f64>> {
    read_predictions(BufReader::new(File::open(path)?))
}

#[cfg(feature = "serde")]
mod state_io {
    use std::{
        fs::File,
        io::{BufReader, BufWriter, Read, Write},
        path::Path,
    };

    use crate::{errors::FTResult, table_state::TableState};

    /// Write a [`TableState`] as JSON.
    pub fn write_state<W: Write>(
        writer: W,
        state: &TableState,
    ) -> FTResult<()> {
        serde_json::to_writer_pretty(writer, state)?;
        Ok(())
    }

    /// Read a [`TableState`] from JSON.
    pub fn read_state<R: Read>(reader: R) -> FTResult<TableState> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Save a [`TableState`] to a JSON file.
    pub fn save_state<P: AsRef<Path>>(
        path: P,
        state: &TableState,
    ) -> FTResult<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        write_state(&mut writer, state)?;
        writer.flush()?;
        Ok(())
    }

    /// Load a [`TableState`] from a JSON file.
    pub fn load_state<P: AsRef<Path>>(path: P) -> FTResult<TableState> {
        read_state(BufReader::new(File::open(path)?))
    }
}

#[cfg(feature = "serde")]
#[doc(inline)]
pub use state_io::*;

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use tempdir::TempDir;

    use super::*;

    #[test]
    fn test_read_lines_strips_terminators() {
        let lines = read_lines(Cursor::new("h\tA\r\nr1\t1\nr2\t2")).unwrap();
        assert_eq!(lines, vec!["h\tA", "r1\t1", "r2\t2"]);
    }

    #[test]
    fn test_read_lines_keeps_blank_lines() {
        let lines = read_lines(Cursor::new("h\n\nr1\n")).unwrap();
        assert_eq!(lines, vec!["h", "", "r1"]);
    }

    #[test]
    fn test_read_lines_rejects_non_utf8() {
        match read_lines(Cursor::new(&b"h\tA\nr1\t\xe9\nr2\t1\n"[..])) {
            Err(FmTabError::NotUtf8 { line }) => assert_eq!(line, 2),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_write_lines() {
        let mut buf: Vec<u8> = Vec::new();
        write_lines(&mut buf, ["a", "b"]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a\nb\n");
    }

    #[test]
    fn test_read_predictions() {
        let predictions = read_predictions(Cursor::new("1.2\n 3.4 \n\n-5e-1\n")).unwrap();
        assert_eq!(predictions, vec![1.2, 3.4, -0.5]);
    }

    #[test]
    fn test_read_predictions_rejects_garbage() {
        match read_predictions(Cursor::new("1.0\n2.0x\n")) {
            Err(FmTabError::InvalidPrediction { line, text }) => {
                assert_eq!(line, 2);
                assert_eq!(text, "2.0x");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_file_round_trip() {
        let dir = TempDir::new("fmtab_io").unwrap();
        let path = dir.path().join("table.tsv");

        save_lines(&path, ["h\tA", "r1\tx"]).unwrap();
        assert_eq!(load_lines(&path).unwrap(), vec!["h\tA", "r1\tx"]);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new("fmtab_io").unwrap();
        assert!(matches!(
            load_lines(dir.path().join("nope.tsv")),
            Err(FmTabError::IoUnavailable(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_state_round_trip() {
        use crate::TableEncoder;

        let dir = TempDir::new("fmtab_io").unwrap();
        let path = dir.path().join("state.json");

        let state = TableEncoder::default()
            .encode(&["h\tA\tB", "r1\t3.5\tcat", "r2\tdog\t7.1"])
            .unwrap()
            .into_state();
        save_state(&path, &state).unwrap();
        assert_eq!(load_state(&path).unwrap(), state);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_bad_state() {
        assert!(matches!(
            read_state(Cursor::new("{\"header\": 3}")),
            Err(FmTabError::StateFormat(_))
        ));
    }
}
