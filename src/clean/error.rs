//! Error types for the CLEAN pipeline
//!
//! Every fatal condition of the pipeline ends up as a [`CleanError`]. Grammar
//! alternatives that fail during parsing are not errors on their own; they only
//! surface here when no alternative matched.

use crate::clean::ast::Position;
use std::fmt;
use thiserror::Error;

/// The broad category of a [`CleanError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Indentation,
    SpanBoundary,
    GrammarMismatch,
    StructuralInvariant,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Indentation => write!(f, "indentation error"),
            ErrorKind::SpanBoundary => write!(f, "span boundary error"),
            ErrorKind::GrammarMismatch => write!(f, "grammar mismatch"),
            ErrorKind::StructuralInvariant => write!(f, "structural invariant violated"),
        }
    }
}

/// What an open span body ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    Indent,
    Undent,
    BlankLine,
    NumberedUnit,
    EndOfDocument,
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boundary::Indent => write!(f, "an indented block"),
            Boundary::Undent => write!(f, "the end of an indented block"),
            Boundary::BlankLine => write!(f, "a blank line"),
            Boundary::NumberedUnit => write!(f, "a numbered unit"),
            Boundary::EndOfDocument => write!(f, "the end of the document"),
        }
    }
}

/// Fatal errors raised while converting a CLEAN document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CleanError {
    /// A line returned to an indentation level that was never opened
    #[error("line {line}: unindent to {indent} spaces, which matches no enclosing block")]
    Indentation { line: usize, indent: usize },

    /// A span body was still open when a structural boundary was reached
    #[error("{position}: span '{name}' is not closed before {boundary}")]
    SpanBoundary {
        position: Position,
        name: String,
        boundary: Boundary,
    },

    /// No grammar alternative matched at a required position
    #[error("{position}: {message}")]
    GrammarMismatch { position: Position, message: String },

    /// A tree violates an invariant the grammar would have enforced
    #[error("{unit}: {message}")]
    StructuralInvariant { unit: String, message: String },
}

impl CleanError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CleanError::Indentation { .. } => ErrorKind::Indentation,
            CleanError::SpanBoundary { .. } => ErrorKind::SpanBoundary,
            CleanError::GrammarMismatch { .. } => ErrorKind::GrammarMismatch,
            CleanError::StructuralInvariant { .. } => ErrorKind::StructuralInvariant,
        }
    }

    /// The source position the error is anchored at, when it has one
    pub fn position(&self) -> Option<Position> {
        match self {
            CleanError::Indentation { line, indent } => Some(Position::new(*line, indent + 1)),
            CleanError::SpanBoundary { position, .. }
            | CleanError::GrammarMismatch { position, .. } => Some(*position),
            CleanError::StructuralInvariant { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CleanError::Indentation { line: 4, indent: 3 };
        assert_eq!(
            err.to_string(),
            "line 4: unindent to 3 spaces, which matches no enclosing block"
        );

        let err = CleanError::SpanBoundary {
            position: Position::new(2, 5),
            name: "def".to_string(),
            boundary: Boundary::BlankLine,
        };
        assert_eq!(
            err.to_string(),
            "2:5: span 'def' is not closed before a blank line"
        );
    }

    #[test]
    fn test_error_kind_and_position() {
        let err = CleanError::GrammarMismatch {
            position: Position::new(7, 1),
            message: "expected a section".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::GrammarMismatch);
        assert_eq!(err.position(), Some(Position::new(7, 1)));

        let err = CleanError::StructuralInvariant {
            unit: "sec_1".to_string(),
            message: "wrapup text without children".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::StructuralInvariant);
        assert_eq!(err.position(), None);
    }
}
