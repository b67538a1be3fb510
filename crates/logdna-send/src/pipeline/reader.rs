//! Line Reader: pulls raw lines from the configured input sources.

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use crate::config::InputSource;
use crate::error::SendError;

/// Reads every input source fully, in order, into a single sequence of lines.
///
/// Trailing whitespace is trimmed from each line; leading whitespace is kept
/// so indented continuation lines (stack traces, wrapped JSON) survive
/// merging intact. A source that cannot be opened or read aborts the whole
/// run; there is no per-file skipping.
pub fn read_lines(inputs: &[InputSource]) -> Result<Vec<String>, SendError> {
    let mut lines = Vec::new();

    for input in inputs {
        match input {
            InputSource::Stdin => {
                let stdin = io::stdin();
                collect_lines(stdin.lock(), "-", &mut lines)?;
            }
            InputSource::File(path) => {
                let display = path.display().to_string();
                let file = File::open(path).map_err(|source| SendError::Input {
                    path: display.clone(),
                    source,
                })?;
                collect_lines(BufReader::new(file), &display, &mut lines)?;
            }
        }
    }

    Ok(lines)
}

fn collect_lines<R: BufRead>(
    reader: R,
    path: &str,
    lines: &mut Vec<String>,
) -> Result<(), SendError> {
    for line in reader.lines() {
        let line = line.map_err(|source| SendError::Input {
            path: path.to_string(),
            source,
        })?;
        lines.push(line.trim_end().to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn file_source(file: &tempfile::NamedTempFile) -> InputSource {
        InputSource::File(file.path().to_path_buf())
    }

    #[test]
    fn test_reads_lines_and_trims_trailing_whitespace() {
        let file = write_temp("first   \nsecond\t\n  indented\n");

        let lines = read_lines(&[file_source(&file)]).unwrap();
        assert_eq!(lines, vec!["first", "second", "  indented"]);
    }

    #[test]
    fn test_whitespace_only_line_becomes_blank() {
        let file = write_temp("a\n   \nb\n");

        let lines = read_lines(&[file_source(&file)]).unwrap();
        assert_eq!(lines, vec!["a", "", "b"]);
    }

    #[test]
    fn test_sources_are_concatenated_in_order() {
        let first = write_temp("a\nb\n");
        let second = write_temp("c\n");

        let lines = read_lines(&[file_source(&first), file_source(&second)]).unwrap();
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_file_yields_no_lines() {
        let file = write_temp("");

        let lines = read_lines(&[file_source(&file)]).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let missing = InputSource::File(PathBuf::from("/nonexistent/logdna-send-test.log"));

        let err = read_lines(&[missing]).unwrap_err();
        match err {
            SendError::Input { path, .. } => {
                assert_eq!(path, "/nonexistent/logdna-send-test.log");
            }
            other => panic!("expected input error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_aborts_even_after_readable_sources() {
        let readable = write_temp("a\n");
        let missing = InputSource::File(PathBuf::from("/nonexistent/logdna-send-test.log"));

        assert!(read_lines(&[file_source(&readable), missing]).is_err());
    }
}
