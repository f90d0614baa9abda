//! Parser combinator functions shared by the CLEAN grammar.

use chumsky::prelude::*;
use std::ops::Range;

pub(crate) use crate::clean::lexer::TokenSpan;
use crate::clean::lexer::Token;

/// Type alias for parser error
pub(crate) type ParserError = Simple<TokenSpan>;

/// Helper: match a specific token type, ignoring the span
pub(crate) fn token(t: Token) -> impl Parser<TokenSpan, (), Error = ParserError> + Clone {
    filter(move |(tok, _)| tok == &t).ignored()
}

/// Zero or more blank lines
pub(crate) fn blank_lines() -> impl Parser<TokenSpan, (), Error = ParserError> + Clone {
    token(Token::BlankLine).repeated().ignored()
}

/// One or more blank lines
pub(crate) fn blank_lines_at_least_one() -> impl Parser<TokenSpan, (), Error = ParserError> + Clone
{
    token(Token::BlankLine).repeated().at_least(1).ignored()
}

/// A token that reads as prose outside any span
pub(crate) fn prose_token() -> impl Parser<TokenSpan, TokenSpan, Error = ParserError> + Clone {
    filter(|(t, _): &TokenSpan| t.is_prose())
}

/// Lookahead: the next line continues the current run of text
///
/// Blocks, blank lines and lines opening with an index end a run.
pub(crate) fn continuation_ahead() -> impl Parser<TokenSpan, (), Error = ParserError> + Clone {
    filter(|(t, _): &TokenSpan| t.is_prose() && !t.is_index_shaped())
        .rewind()
        .ignored()
}

/// Append a word to `out`, separated by a space unless it touched the previous one
pub(crate) fn push_word(
    out: &mut String,
    last_end: &mut Option<usize>,
    word: &str,
    range: &Range<usize>,
) {
    if !out.is_empty() && *last_end != Some(range.start) {
        out.push(' ');
    }
    out.push_str(word);
    *last_end = Some(range.end);
}

/// Join line tokens into a single whitespace-collapsed string
pub(crate) fn join_words(tokens: &[TokenSpan]) -> String {
    let mut out = String::new();
    let mut last_end = None;
    for (token, range) in tokens {
        push_word(&mut out, &mut last_end, token.as_str(), range);
    }
    out
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_uppercase())
}

/// A full line whose first word starts with an uppercase letter
///
/// Used for the act title and unit headings.
pub(crate) fn capitalized_line() -> impl Parser<TokenSpan, String, Error = ParserError> + Clone {
    filter(|(t, _): &TokenSpan| matches!(t, Token::Text(word) if starts_uppercase(word)))
        .chain(prose_token().repeated())
        .then_ignore(token(Token::Newline))
        .map(|tokens: Vec<TokenSpan>| join_words(&tokens))
}
