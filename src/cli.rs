use std::path::PathBuf;

use clap::Parser;

use crate::output::{SortDirection, SortField, SortSpec};

/// Bundled help text, printed for `-h`/`--help` and for bare invocations.
pub const HELP_TEXT: &str = include_str!("../help.txt");

const SORT_FIELDS_HINT: &str = "(f | t | c | b | s | a)";

#[derive(Parser, Debug)]
#[command(name = "loc-report", disable_help_flag = true)]
pub struct Cli {
    /// File or directory paths to scan.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Print the bundled help text and exit.
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Recurse into subdirectories.
    #[arg(short = 'r')]
    pub recursive: bool,

    /// Sort the report ascending by field (f | t | c | b | s | a).
    #[arg(short = 's', value_name = "FIELD", value_parser = parse_sort_field)]
    pub sort_ascending: Option<SortField>,

    /// Sort the report descending by field (f | t | c | b | s | a).
    #[arg(short = 'S', value_name = "FIELD", value_parser = parse_sort_field)]
    pub sort_descending: Option<SortField>,
}

impl Cli {
    /// The effective sort selection; `-s` wins when both flags are present.
    #[must_use]
    pub const fn sort_spec(&self) -> Option<SortSpec> {
        match (self.sort_ascending, self.sort_descending) {
            (Some(field), _) => Some(SortSpec {
                field,
                direction: SortDirection::Ascending,
            }),
            (None, Some(field)) => Some(SortSpec {
                field,
                direction: SortDirection::Descending,
            }),
            (None, None) => None,
        }
    }

    /// A bare invocation (no arguments at all) prints help like `-h` does.
    #[must_use]
    pub fn is_bare(&self) -> bool {
        self.paths.is_empty()
            && !self.help
            && !self.recursive
            && self.sort_ascending.is_none()
            && self.sort_descending.is_none()
    }
}

fn parse_sort_field(value: &str) -> Result<SortField, String> {
    match value {
        "f" => Ok(SortField::Filename),
        "t" => Ok(SortField::Language),
        "c" => Ok(SortField::Comments),
        "b" => Ok(SortField::Blank),
        "s" => Ok(SortField::Code),
        "a" => Ok(SortField::Total),
        _ => Err(format!("Invalid option! {SORT_FIELDS_HINT}")),
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
