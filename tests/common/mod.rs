#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Temporary directory with helpers for laying out test source trees.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content, creating parent directories
    /// as needed. Returns the absolute path.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Creates a directory inside the fixture.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Creates a C file with the given number of `int x<i> = <i>;` lines.
    pub fn create_c_file(&self, relative_path: &str, code_lines: usize) -> PathBuf {
        let mut content = String::new();
        for i in 0..code_lines {
            content.push_str(&format!("int x{i} = {i};\n"));
        }
        self.create_file(relative_path, &content)
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
