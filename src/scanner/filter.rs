use std::path::Path;

use crate::language;

/// Decides which files a directory scan keeps.
pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Keeps files whose extension is in the fixed allowed set.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtensionFilter;

impl FileFilter for ExtensionFilter {
    fn should_include(&self, path: &Path) -> bool {
        language::has_allowed_extension(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
