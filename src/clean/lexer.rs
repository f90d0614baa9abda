//! Lexer module for the CLEAN format
//!
//! Lexing runs in three stages:
//!
//! 1. The indentation normalizer rewrites leading whitespace into `INDENT` and
//!    `UNDENT` marker lines ([`indentation_transform`]).
//! 2. A vanilla logos lexer tokenizes the normalized text ([`tokens`]).
//! 3. The line structure transform turns line breaks into `Newline` and
//!    `BlankLine` tokens and absorbs marker line breaks ([`line_structure_transform`]).
//!
//! Keeping indentation out of the logos lexer lets the token definitions stay
//! declarative, and the normalized text is a useful artifact on its own.

pub mod indentation_transform;
pub mod lexer_impl;
pub mod line_structure_transform;
pub mod tokens;

use std::ops::Range;

pub use indentation_transform::{
    add_explicit_indents, normalize_indentation, LineOrigin, NormalizedSource,
};
pub use lexer_impl::{tokenize, tokenize_with_spans};
pub use line_structure_transform::{transform_line_structure, transform_line_structure_tokens};
pub use tokens::Token;

use crate::clean::error::CleanError;

/// Type alias for token with span
pub type TokenSpan = (Token, Range<usize>);

/// A fully lexed document: the normalized text and its token stream
///
/// Token spans are byte ranges in `source.text`; use
/// [`NormalizedSource::position`] to map them back to the raw input.
#[derive(Debug, Clone)]
pub struct Lexed {
    pub source: NormalizedSource,
    pub tokens: Vec<TokenSpan>,
}

/// Main lexer function: normalize, tokenize and apply the line structure transform
pub fn lex(source: &str) -> Result<Lexed, CleanError> {
    let normalized = normalize_indentation(source)?;
    let raw_tokens = tokenize_with_spans(&normalized.text);
    let tokens = transform_line_structure(raw_tokens);

    tracing::debug!(tokens = tokens.len(), "lexed document");

    Ok(Lexed {
        source: normalized,
        tokens,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_nested_block() {
        let lexed = lex("2. Signs:\n  (1) Rock.\n\nWinner\n").unwrap();
        let tokens: Vec<Token> = lexed.tokens.into_iter().map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::SectionNumber("2.".to_string()),
                Token::Text("Signs:".to_string()),
                Token::Newline,
                Token::Indent,
                Token::BracketedNumber("(1)".to_string()),
                Token::Text("Rock.".to_string()),
                Token::Newline,
                Token::Undent,
                Token::BlankLine,
                Token::Text("Winner".to_string()),
                Token::Newline,
            ]
        );
    }

    #[test]
    fn test_lex_reports_indentation_errors() {
        let err = lex("1.\n    (1) a\n  (2) b\n").unwrap_err();
        assert_eq!(err.kind(), crate::clean::error::ErrorKind::Indentation);
    }

    #[test]
    fn test_token_spans_map_to_raw_positions() {
        let lexed = lex("1. a\n    (1) bee\n").unwrap();
        let (token, span) = &lexed.tokens[4];
        assert_eq!(token, &Token::BracketedNumber("(1)".to_string()));
        assert_eq!(
            lexed.source.position(span.start),
            crate::clean::ast::Position::new(2, 5)
        );
    }
}
