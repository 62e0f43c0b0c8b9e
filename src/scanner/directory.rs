use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::FileFilter;

/// Enumerates regular files under a directory: immediate children only, or
/// the whole tree when recursive.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    recursive: bool,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F, recursive: bool) -> Self {
        Self { filter, recursive }
    }

    #[must_use]
    pub fn scan(&self, root: &Path) -> Vec<PathBuf> {
        let mut walker = WalkDir::new(root);
        if !self.recursive {
            walker = walker.max_depth(1);
        }

        walker
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|entry| {
                entry.file_type().is_file() && self.filter.should_include(entry.path())
            })
            .map(walkdir::DirEntry::into_path)
            .collect()
    }
}
