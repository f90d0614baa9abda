//! Indentation transformation for the CLEAN lexer
//!
//! This module rewrites significant leading whitespace into explicit `INDENT` and
//! `UNDENT` marker lines so that the rest of the pipeline can work from markers
//! instead of column counts.
//!
//! # Algorithm
//!
//! 1. Keep a stack of indentation levels, starting with `[0]`
//! 2. For each non-blank line, count its leading spaces:
//!    - Equal to the top of the stack: emit the stripped line
//!    - Greater: push the level, emit `INDENT`, emit the stripped line
//!    - Less: pop (emitting `UNDENT` each time) until the top equals the level;
//!      a level that is not on the stack is an error
//! 3. Blank lines never change the level. They are held back and written after
//!    the markers of the next content line
//! 4. At the end of input, emit `UNDENT` for every level above the base, then
//!    any trailing blank lines
//!
//! # Example
//!
//! ```text
//! 2. There are three signs:          2. There are three signs:
//!   (1) Rock,                        INDENT
//!   (2) Paper, and          ==>      (1) Rock,
//!                                    (2) Paper, and
//! Winner                             UNDENT
//!                                    <blank>
//!                                    Winner
//! ```

use crate::clean::ast::{Position, SourceLocation};
use crate::clean::error::CleanError;

/// Marker line written when a block opens
pub const INDENT_MARKER: &str = "INDENT";

/// Marker line written when a block closes
pub const UNDENT_MARKER: &str = "UNDENT";

/// Where a line of normalized text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineOrigin {
    /// 1-based line number in the raw source
    pub line: usize,
    /// Number of leading spaces stripped from that line
    pub indent: usize,
}

/// Normalized text together with the mapping back to the raw source
#[derive(Debug, Clone)]
pub struct NormalizedSource {
    pub text: String,
    origins: Vec<LineOrigin>,
    location: SourceLocation,
}

impl NormalizedSource {
    /// Map a byte offset in the normalized text to a position in the raw source
    pub fn position(&self, byte_offset: usize) -> Position {
        let (line, column) = self.location.byte_to_line_column(byte_offset);
        match self.origins.get(line) {
            Some(origin) => Position::new(origin.line, origin.indent + column + 1),
            None => self.end_position(),
        }
    }

    /// Position just past the last line of the raw source
    pub fn end_position(&self) -> Position {
        let line = self.origins.last().map(|o| o.line + 1).unwrap_or(1);
        Position::new(line, 1)
    }

    /// Origin of every normalized line, in order
    pub fn origins(&self) -> &[LineOrigin] {
        &self.origins
    }
}

/// Accumulates output lines and their origins
struct Emitter {
    text: String,
    origins: Vec<LineOrigin>,
}

impl Emitter {
    fn push(&mut self, line: &str, origin: LineOrigin) {
        self.text.push_str(line);
        self.text.push('\n');
        self.origins.push(origin);
    }

    fn push_blank_lines(&mut self, pending: &mut Vec<LineOrigin>) {
        for origin in pending.drain(..) {
            self.push("", origin);
        }
    }
}

/// Count the leading spaces of a line
fn leading_spaces(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

/// Transform leading whitespace into explicit marker lines
///
/// Returns the marker-augmented text together with line origins so that later
/// stages can report errors against the raw source.
pub fn normalize_indentation(source: &str) -> Result<NormalizedSource, CleanError> {
    let mut levels: Vec<usize> = vec![0];
    let mut out = Emitter {
        text: String::with_capacity(source.len()),
        origins: Vec::new(),
    };
    let mut pending_blanks: Vec<LineOrigin> = Vec::new();
    let mut last_line = 0;

    for (i, line) in source.lines().enumerate() {
        let line_number = i + 1;
        last_line = line_number;

        if line.trim().is_empty() {
            pending_blanks.push(LineOrigin {
                line: line_number,
                indent: 0,
            });
            continue;
        }

        let level = leading_spaces(line);
        let origin = LineOrigin {
            line: line_number,
            indent: level,
        };
        let current = levels.last().copied().unwrap_or(0);

        if level > current {
            levels.push(level);
            out.push(INDENT_MARKER, origin);
        } else if level < current {
            if !levels.contains(&level) {
                return Err(CleanError::Indentation {
                    line: line_number,
                    indent: level,
                });
            }
            while levels.last().is_some_and(|&top| top != level) {
                levels.pop();
                out.push(UNDENT_MARKER, origin);
            }
        }

        out.push_blank_lines(&mut pending_blanks);
        out.push(&line[level..], origin);
    }

    // Close every block still open at the end of the input
    let closing = LineOrigin {
        line: last_line + 1,
        indent: 0,
    };
    while levels.len() > 1 {
        levels.pop();
        out.push(UNDENT_MARKER, closing);
    }
    out.push_blank_lines(&mut pending_blanks);

    tracing::debug!(
        lines = out.origins.len(),
        source_lines = last_line,
        "normalized indentation"
    );

    let location = SourceLocation::new(&out.text);
    Ok(NormalizedSource {
        text: out.text,
        origins: out.origins,
        location,
    })
}

/// Add explicit indentation markers to a CLEAN document
///
/// Convenience wrapper around [`normalize_indentation`] for callers that only
/// need the text.
pub fn add_explicit_indents(source: &str) -> Result<String, CleanError> {
    normalize_indentation(source).map(|normalized| normalized.text)
}
