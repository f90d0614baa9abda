//! Legal text and inline span grammar
//!
//! Legal text is prose that runs until the next structural boundary: a block
//! marker, a blank line, a line opening with an index, or the end of input.
//! Lines are joined with single spaces.
//!
//! A span is written `[name]{body}` with the four opener tokens touching. The
//! body is legal text again and may contain further spans:
//!
//! ```text
//! [text]{outer has [inner]{nested} in it}
//! ```
//!
//! Span bodies may continue over several lines but must close before any
//! structural boundary. [`check_span_boundaries`] enforces that on the token
//! stream before the grammar runs, so the grammar itself can treat an
//! unterminated opener as plain prose.

use chumsky::prelude::*;
use std::ops::Range;

use super::combinators::{continuation_ahead, push_word, token, ParserError, TokenSpan};
use crate::clean::ast::{LegalText, Span, TextElement};
use crate::clean::error::{Boundary, CleanError};
use crate::clean::lexer::{NormalizedSource, Token};

/// Intermediate pieces collected while parsing a run of text
#[derive(Debug, Clone)]
enum Piece {
    Word(String, Range<usize>),
    Break,
    Span(Span),
}

/// Check whether `name` is a valid span name
pub fn is_span_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Merge pieces into prose runs and spans
fn assemble(pieces: Vec<Piece>) -> LegalText {
    let mut elements = Vec::new();
    let mut run = String::new();
    let mut last_end = None;

    for piece in pieces {
        match piece {
            Piece::Word(word, range) => push_word(&mut run, &mut last_end, &word, &range),
            Piece::Break => last_end = None,
            Piece::Span(span) => {
                if !run.is_empty() {
                    elements.push(TextElement::Prose(std::mem::take(&mut run)));
                }
                elements.push(TextElement::Span(span));
                last_end = None;
            }
        }
    }
    if !run.is_empty() {
        elements.push(TextElement::Prose(run));
    }

    LegalText::new(elements)
}

/// `[name]{` with all four tokens touching
fn span_opener() -> impl Parser<TokenSpan, String, Error = ParserError> + Clone {
    let name = filter(|(t, _): &TokenSpan| matches!(t, Token::Text(name) if is_span_name(name)));

    filter(|(t, _): &TokenSpan| t == &Token::OpenBracket)
        .then(name)
        .then(filter(|(t, _): &TokenSpan| t == &Token::CloseBracket))
        .then(filter(|(t, _): &TokenSpan| t == &Token::OpenBrace))
        .try_map(|(((open, (name, name_range)), close), brace), span| {
            let touching = open.1.end == name_range.start
                && name_range.end == close.1.start
                && close.1.end == brace.1.start;
            if touching {
                Ok(name.as_str().to_string())
            } else {
                Err(Simple::custom(span, "span openers must be written [name]{"))
            }
        })
}

/// A line break followed by a line that continues the text
fn line_break() -> impl Parser<TokenSpan, Piece, Error = ParserError> + Clone {
    token(Token::Newline)
        .then_ignore(continuation_ahead())
        .to(Piece::Break)
}

/// An inline span, possibly containing nested spans
pub(crate) fn inline_span() -> impl Parser<TokenSpan, Span, Error = ParserError> + Clone {
    recursive(|span| {
        let body_word = filter(|(t, _): &TokenSpan| t.is_span_body_prose())
            .map(|(t, range)| Piece::Word(t.as_str().to_string(), range));

        let body = choice((span.map(Piece::Span), body_word, line_break())).repeated();

        span_opener()
            .then(body)
            .then_ignore(token(Token::CloseBrace))
            .map(|(name, pieces)| Span::new(name, assemble(pieces)))
    })
}

/// A run of legal text, consuming the line break that ends it
///
/// Empty input yields an empty [`LegalText`].
pub(crate) fn legal_text() -> impl Parser<TokenSpan, LegalText, Error = ParserError> + Clone {
    let word = filter(|(t, _): &TokenSpan| t.is_prose())
        .map(|(t, range)| Piece::Word(t.as_str().to_string(), range));

    choice((inline_span().map(Piece::Span), word, line_break()))
        .repeated()
        .then_ignore(token(Token::Newline).or_not())
        .map(assemble)
        .labelled("legal text")
}

/// Legal text that opens a line
///
/// An index-shaped first token belongs to the next unit, so it yields empty
/// text instead.
pub(crate) fn line_start_text() -> impl Parser<TokenSpan, LegalText, Error = ParserError> + Clone {
    filter(|(t, _): &TokenSpan| t.is_prose() && !t.is_index_shaped())
        .rewind()
        .ignore_then(legal_text())
        .or_not()
        .map(Option::unwrap_or_default)
}

/// Name of the span opened at `tokens[i]`, if one is
fn opener_at(tokens: &[TokenSpan], i: usize) -> Option<&str> {
    match tokens.get(i..i + 4)? {
        [(Token::OpenBracket, open), (Token::Text(name), name_range), (Token::CloseBracket, close), (Token::OpenBrace, brace)]
            if is_span_name(name)
                && open.end == name_range.start
                && name_range.end == close.start
                && close.end == brace.start =>
        {
            Some(name.as_str())
        }
        _ => None,
    }
}

/// Reject spans that are still open at a structural boundary
///
/// Walks the token stream keeping a stack of open spans. While any span is
/// open, a block marker, a blank line, a line opening with an index or the end
/// of input is a [`CleanError::SpanBoundary`].
pub fn check_span_boundaries(
    tokens: &[TokenSpan],
    source: &NormalizedSource,
) -> Result<(), CleanError> {
    let mut open: Vec<&str> = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        if let Some(name) = opener_at(tokens, i) {
            open.push(name);
            i += 4;
            continue;
        }

        let (token, range) = &tokens[i];
        if let Some(&name) = open.last() {
            let boundary = match token {
                Token::CloseBrace => {
                    open.pop();
                    None
                }
                Token::Indent => Some((Boundary::Indent, range.start)),
                Token::Undent => Some((Boundary::Undent, range.start)),
                Token::BlankLine => Some((Boundary::BlankLine, range.start)),
                Token::Newline => match tokens.get(i + 1) {
                    Some((next, next_range)) if next.is_index_shaped() => {
                        Some((Boundary::NumberedUnit, next_range.start))
                    }
                    _ => None,
                },
                _ => None,
            };

            if let Some((boundary, offset)) = boundary {
                return Err(CleanError::SpanBoundary {
                    position: source.position(offset),
                    name: name.to_string(),
                    boundary,
                });
            }
        }
        i += 1;
    }

    match open.last() {
        Some(name) => Err(CleanError::SpanBoundary {
            position: source.end_position(),
            name: name.to_string(),
            boundary: Boundary::EndOfDocument,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clean::lexer::lex;

    fn parse_text(source: &str) -> LegalText {
        let lexed = lex(source).unwrap();
        legal_text().then_ignore(end()).parse(lexed.tokens).unwrap()
    }

    fn check(source: &str) -> Result<(), CleanError> {
        let lexed = lex(source).unwrap();
        check_span_boundaries(&lexed.tokens, &lexed.source)
    }

    #[test]
    fn test_lines_are_joined_with_spaces() {
        assert_eq!(
            parse_text("The winner of a game\nis the player.\n"),
            LegalText::prose("The winner of a game is the player.")
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_text(""), LegalText::default());
    }

    #[test]
    fn test_nested_spans() {
        let text = parse_text("[text]{outer has [inner]{nested} in it}\n");
        assert_eq!(
            text,
            LegalText::new(vec![TextElement::Span(Span::new(
                "text",
                LegalText::new(vec![
                    TextElement::Prose("outer has".to_string()),
                    TextElement::Span(Span::new("inner", LegalText::prose("nested"))),
                    TextElement::Prose("in it".to_string()),
                ]),
            ))])
        );
    }

    #[test]
    fn test_span_body_over_lines() {
        let text = parse_text("A [def]{term that\ncontinues} here.\n");
        assert_eq!(
            text,
            LegalText::new(vec![
                TextElement::Prose("A".to_string()),
                TextElement::Span(Span::new("def", LegalText::prose("term that continues"))),
                TextElement::Prose("here.".to_string()),
            ])
        );
    }

    #[test]
    fn test_brackets_that_do_not_open_spans_are_prose() {
        assert_eq!(
            parse_text("see [s. 4] {x} and a}\n"),
            LegalText::prose("see [s. 4] {x} and a}")
        );
        assert_eq!(
            parse_text("[a] {spaced}\n"),
            LegalText::prose("[a] {spaced}")
        );
    }

    #[test]
    fn test_index_mid_line_is_prose() {
        assert_eq!(
            parse_text("under section 3. and (a) of it\n"),
            LegalText::prose("under section 3. and (a) of it")
        );
    }

    #[test]
    fn test_text_stops_before_line_start_index() {
        let lexed = lex("first line\n(2) second\n").unwrap();
        let (text, rest) = legal_text()
            .then(any().repeated())
            .then_ignore(end())
            .parse(lexed.tokens)
            .unwrap();
        assert_eq!(text, LegalText::prose("first line"));
        assert_eq!(rest[0].0, Token::BracketedNumber("(2)".to_string()));
    }

    #[test]
    fn test_span_boundaries() {
        assert!(check("[a]{closed}\n").is_ok());
        assert!(check("[a]{over\ntwo lines}\n").is_ok());

        let err = check("[a]{open\n\nmore}\n").unwrap_err();
        assert!(matches!(
            err,
            CleanError::SpanBoundary { boundary: Boundary::BlankLine, .. }
        ));

        let err = check("1. [a]{open\n2. next}\n").unwrap_err();
        assert_eq!(
            err,
            CleanError::SpanBoundary {
                position: crate::clean::ast::Position::new(2, 1),
                name: "a".to_string(),
                boundary: Boundary::NumberedUnit,
            }
        );

        let err = check("1. [a]{open\n  (1) x}\n").unwrap_err();
        assert!(matches!(
            err,
            CleanError::SpanBoundary { boundary: Boundary::Indent, .. }
        ));

        let err = check("[a]{never [b]{closed}\n").unwrap_err();
        assert!(matches!(
            err,
            CleanError::SpanBoundary { boundary: Boundary::EndOfDocument, ref name, .. } if name == "a"
        ));
    }
}
