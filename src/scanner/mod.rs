//! Path collection: resolves CLI arguments into the list of files to scan.

mod directory;
mod filter;

pub use directory::DirectoryScanner;
pub use filter::{ExtensionFilter, FileFilter};

use std::path::PathBuf;

use crate::error::LocReportError;
use crate::language;

/// Files to scan plus the non-fatal conditions hit while collecting them.
#[derive(Debug, Default)]
pub struct Collected {
    pub files: Vec<PathBuf>,
    pub errors: Vec<LocReportError>,
}

/// Resolve each CLI path argument into candidate files.
///
/// Directories are enumerated (recursively when asked) and filtered by
/// extension without per-file diagnostics; an explicit file argument with a
/// disallowed extension is reported. Nonexistent paths contribute nothing
/// and are left to the caller's empty-result check.
#[must_use]
pub fn collect_files(paths: &[PathBuf], recursive: bool) -> Collected {
    let mut collected = Collected::default();
    let scanner = DirectoryScanner::new(ExtensionFilter, recursive);

    for path in paths {
        if !path.exists() {
            continue;
        }
        if path.is_dir() {
            collected.files.extend(scanner.scan(path));
        } else if language::has_allowed_extension(path) {
            collected.files.push(path.clone());
        } else {
            collected.errors.push(LocReportError::InvalidExtension {
                path: path.clone(),
            });
        }
    }

    collected
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
