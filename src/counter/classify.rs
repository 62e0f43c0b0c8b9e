//! Line classification state machine.
//!
//! Decides, byte by byte, whether a line contributes blank, comment, or code
//! counts. Handles `//` line comments, `/* */` block comments spanning line
//! boundaries, and double-quoted string literals that suppress comment
//! detection while open.

/// Carry-over state threaded from one line to the next within a single file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserState {
    pub in_block_comment: bool,
    pub in_string: bool,
}

impl ParserState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            in_block_comment: false,
            in_string: false,
        }
    }
}

/// Per-line classification. A line can be both code and comment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineFlags {
    pub blank: bool,
    pub code: bool,
    pub comment: bool,
}

/// Classify one line and advance the carry-over state.
///
/// Single left-to-right scan with a cursor. A `"` toggles the string flag
/// before any comment check at that position, even inside an active block
/// comment; while the string flag is set, comment markers are inert.
#[must_use]
pub fn classify_line(line: &str, state: &mut ParserState) -> LineFlags {
    let mut flags = LineFlags::default();
    let bytes = line.as_bytes();

    if bytes.iter().all(u8::is_ascii_whitespace) {
        // An open block comment consumes otherwise-blank lines.
        if state.in_block_comment {
            flags.comment = true;
        } else {
            flags.blank = true;
        }
        return flags;
    }

    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'"' {
            state.in_string = !state.in_string;
        }

        if !state.in_string {
            if !state.in_block_comment && bytes[i] == b'/' && i + 1 < bytes.len() {
                if bytes[i + 1] == b'/' {
                    // The rest of the line is comment.
                    flags.comment = true;
                    break;
                }
                if bytes[i + 1] == b'*' {
                    state.in_block_comment = true;
                    flags.comment = true;
                    i += 2;
                    continue;
                }
            }

            if state.in_block_comment {
                if let Some(end) = find_from(bytes, i, b"*/") {
                    state.in_block_comment = false;
                    flags.comment = true;
                    i = end + 2;
                    continue;
                }
                flags.comment = true;
                break;
            }

            if !bytes[i].is_ascii_whitespace() {
                flags.code = true;
            }
        }

        i += 1;
    }

    flags
}

fn find_from(haystack: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| from + pos)
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
