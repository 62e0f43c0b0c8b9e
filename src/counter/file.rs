use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{LocReportError, Result};
use crate::language::Language;

use super::{ParserState, classify_line};

/// Per-file line counters. `total` is the number of lines read; a line with
/// code and a trailing comment increments both `code` and `comment`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineStats {
    pub total: u64,
    pub code: u64,
    pub comment: u64,
    pub blank: u64,
}

impl LineStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            code: 0,
            comment: 0,
            blank: 0,
        }
    }
}

/// Identity and counters for one scanned file, immutable once the scan
/// completes.
#[derive(Debug, Clone)]
pub struct FileMetrics {
    pub path: PathBuf,
    pub language: Language,
    pub stats: LineStats,
}

/// Count lines from a buffered reader, threading classifier state from line
/// to line. Invalid UTF-8 is decoded lossily so a stray byte never aborts
/// the scan.
///
/// # Errors
/// Returns an I/O error if reading from the reader fails.
pub fn count_reader<R: BufRead>(mut reader: R) -> std::io::Result<LineStats> {
    let mut stats = LineStats::new();
    let mut state = ParserState::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        let line = String::from_utf8_lossy(&buf);
        let flags = classify_line(&line, &mut state);

        stats.total += 1;
        if flags.blank {
            stats.blank += 1;
        }
        if flags.code {
            stats.code += 1;
        }
        if flags.comment {
            stats.comment += 1;
        }
    }

    // A block comment left open at end of input counts as one more comment
    // line.
    if state.in_block_comment {
        stats.comment += 1;
    }

    Ok(stats)
}

/// Scan a single file into a [`FileMetrics`] record.
///
/// # Errors
/// Returns [`LocReportError::FileRead`] if the file cannot be opened or
/// read; the caller reports it and skips the file.
pub fn scan_file(path: &Path) -> Result<FileMetrics> {
    let file = File::open(path).map_err(|source| LocReportError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let stats =
        count_reader(BufReader::new(file)).map_err(|source| LocReportError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(FileMetrics {
        path: path.to_path_buf(),
        language: Language::from_path(path),
        stats,
    })
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
