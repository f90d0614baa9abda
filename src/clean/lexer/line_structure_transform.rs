//! Line structure transformation for the CLEAN lexer
//!
//! The raw token stream carries one `Newline` per line. This transform rewrites
//! line breaks into the shape the grammar works with:
//!
//! - the line break closing an `INDENT`/`UNDENT` marker line is dropped, so a
//!   marker stands on its own
//! - an empty line becomes a `BlankLine`, and a run of empty lines a single one
//! - the line break closing a content line stays a `Newline`
//!
//! It also demotes `INDENT`/`UNDENT` words that do not open a line back to
//! prose, since only the normalizer's marker lines carry block structure.
//!
//! This transformation is applied after tokenization of normalized text.
//!
//! # Example
//!
//! ```text
//! (1) Rock.\nUNDENT\n\nWinner\n
//! [BracketedNumber, Text, Newline, Undent, BlankLine, Text, Newline]
//! ```

use crate::clean::lexer::tokens::Token;
use std::ops::Range;

/// Rewrite line breaks into `Newline`/`BlankLine` tokens, keeping source spans
///
/// The `BlankLine` of a run of empty lines keeps the span of the first empty
/// line.
pub fn transform_line_structure(
    tokens_with_spans: Vec<(Token, Range<usize>)>,
) -> Vec<(Token, Range<usize>)> {
    let mut result: Vec<(Token, Range<usize>)> = Vec::with_capacity(tokens_with_spans.len());
    let mut at_line_start = true;
    let mut marker_line = false;

    for (token, span) in tokens_with_spans {
        match token {
            Token::Newline => {
                if marker_line {
                    marker_line = false;
                } else if at_line_start {
                    if !matches!(result.last(), Some((Token::BlankLine, _))) {
                        result.push((Token::BlankLine, span));
                    }
                } else {
                    result.push((Token::Newline, span));
                }
                at_line_start = true;
            }
            Token::Indent | Token::Undent if at_line_start => {
                result.push((token, span));
                marker_line = true;
                at_line_start = false;
            }
            Token::Indent | Token::Undent => {
                result.push((Token::Text(token.as_str().to_string()), span));
            }
            other => {
                result.push((other, span));
                at_line_start = false;
            }
        }
    }

    result
}

/// Token-only variant of [`transform_line_structure`]
pub fn transform_line_structure_tokens(tokens: Vec<Token>) -> Vec<Token> {
    transform_line_structure(tokens.into_iter().map(|t| (t, 0..0)).collect())
        .into_iter()
        .map(|(t, _)| t)
        .collect()
}
