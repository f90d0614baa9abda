//! Source location utilities for converting byte offsets to line/column positions
//!
//! Positions in this crate are 1-based so they can be printed in diagnostics
//! as they are.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a position in source code (line and column, both 1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Provides fast conversion from byte offsets to line/column positions
#[derive(Debug, Clone)]
pub struct SourceLocation {
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl SourceLocation {
    /// Create a new SourceLocation from source code
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self { line_starts }
    }

    /// Convert a byte offset to a 0-based (line, column) pair
    pub fn byte_to_line_column(&self, byte_offset: usize) -> (usize, usize) {
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);

        (line, byte_offset - self.line_starts[line])
    }

    /// Convert a byte offset to a 1-based position
    pub fn byte_to_position(&self, byte_offset: usize) -> Position {
        let (line, column) = self.byte_to_line_column(byte_offset);
        Position::new(line + 1, column + 1)
    }

    /// Get the total number of lines in the source
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
