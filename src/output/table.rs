use std::fmt::Write;

use crate::counter::FileMetrics;

const LANGUAGE_WIDTH: usize = 20;
const COUNT_WIDTH: usize = 15;
const MIN_FILENAME_WIDTH: usize = 8;
const SEPARATOR_WIDTH: usize = 139;

/// Renders the fixed-width report table. No side effects; the rendered text
/// is returned as a string.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableFormatter;

impl TableFormatter {
    #[must_use]
    pub fn format(self, metrics: &[FileMetrics]) -> String {
        let name_width = Self::filename_width(metrics);
        let lang_width = LANGUAGE_WIDTH;
        let count_width = COUNT_WIDTH;
        let separator = "-".repeat(SEPARATOR_WIDTH);

        let mut out = String::new();
        let _ = writeln!(out, "Files processed: {}", metrics.len());
        let _ = writeln!(out, "{separator}");
        let _ = writeln!(
            out,
            "{:<name_width$}{:<lang_width$}{:<count_width$}{:<count_width$}{:<count_width$}{:<count_width$}",
            "Filename", "Language", "Comments", "Blank", "Code", "All"
        );
        let _ = writeln!(out, "{separator}");

        for m in metrics {
            let name = m.path.display().to_string();
            let _ = writeln!(
                out,
                "{name:<name_width$}{lang:<lang_width$}{comments:<count_width$}{blank:<count_width$}{code:<count_width$}{total:<count_width$}",
                lang = m.language.label(),
                comments = count_cell(m.stats.comment, m.stats.total),
                blank = count_cell(m.stats.blank, m.stats.total),
                code = count_cell(m.stats.code, m.stats.total),
                total = m.stats.total,
            );
        }

        let _ = writeln!(out, "{separator}");
        out
    }

    /// Filename column width: the longest filename (at least 8) plus padding.
    fn filename_width(metrics: &[FileMetrics]) -> usize {
        let longest = metrics
            .iter()
            .map(|m| m.path.display().to_string().len())
            .max()
            .unwrap_or(0);
        longest.max(MIN_FILENAME_WIDTH) + 2
    }
}

/// A count column cell: the raw count and its share of the file's total
/// lines, e.g. `12 (34.5%)`.
fn count_cell(count: u64, total: u64) -> String {
    format!("{count} {}", percentage(count, total))
}

#[allow(clippy::cast_precision_loss)]
fn percentage(count: u64, total: u64) -> String {
    if total == 0 {
        return "(0%)".to_string();
    }
    let pct = (count as f64 * 100.0) / total as f64;
    format!("({pct:.1}%)")
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
