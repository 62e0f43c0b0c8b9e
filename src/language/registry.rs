use std::ffi::OsStr;
use std::path::Path;

/// File extensions accepted for scanning, matched case-insensitively.
pub const ALLOWED_EXTENSIONS: &[&str] = &["c", "cpp", "h", "hpp", "py"];

static EXTENSION_TABLE: &[(&str, Language)] = &[
    ("c", Language::C),
    ("cpp", Language::Cpp),
    ("h", Language::H),
    ("hpp", Language::Hpp),
    ("py", Language::Python),
];

/// Language label assigned to a scanned file, derived once from its
/// extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Language {
    C,
    Cpp,
    H,
    Hpp,
    Python,
    /// Accepted for processing but absent from the extension table.
    Undef,
}

impl Language {
    #[must_use]
    pub fn from_extension(ext: &str) -> Self {
        let ext = ext.to_ascii_lowercase();
        EXTENSION_TABLE
            .iter()
            .find(|(e, _)| *e == ext)
            .map_or(Self::Undef, |&(_, language)| language)
    }

    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(OsStr::to_str)
            .map_or(Self::Undef, Self::from_extension)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::C => "C",
            Self::Cpp => "CPP",
            Self::H => "H",
            Self::Hpp => "HPP",
            Self::Python => "PYTHON",
            Self::Undef => "UNDEF",
        }
    }
}

/// Whether `path` names a file type the tool scans at all.
#[must_use]
pub fn has_allowed_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            ALLOWED_EXTENSIONS.iter().any(|allowed| *allowed == ext)
        })
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
