use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocReportError {
    #[error("File with invalid extension: {path}")]
    InvalidExtension { path: PathBuf },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No valid files found!")]
    NoValidFiles,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LocReportError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
