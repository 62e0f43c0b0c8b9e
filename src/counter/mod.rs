mod classify;
mod file;

pub use classify::{LineFlags, ParserState, classify_line};
pub use file::{FileMetrics, LineStats, count_reader, scan_file};
