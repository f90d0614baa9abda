//! Index grammars for the four numbered unit kinds
//!
//! | Kind          | Token              | Base                     |
//! |---------------|--------------------|--------------------------|
//! | section       | `3.` `3.1.`        | digits                   |
//! | sub-section   | `(3)` `(3.1)`      | digits                   |
//! | paragraph     | `(c)` `(c.1)`      | lowercase letters        |
//! | sub-paragraph | `(iv)` `(iv.5)`    | lowercase roman numeral  |
//!
//! The lexer already produces one token per index, so each grammar is a single
//! `filter_map` that strips the delimiters and hands the label to
//! [`Index::parse`]. A token of the right shape whose label is not valid for
//! the kind (`(iivivi)` as a sub-paragraph) fails with a custom error so that
//! diagnostics can name the problem.

use chumsky::prelude::*;

use super::combinators::{ParserError, TokenSpan};
use crate::clean::ast::{Index, IndexKind};
use crate::clean::lexer::Token;

fn strip_parens(raw: &str) -> Option<&str> {
    raw.strip_prefix('(')?.strip_suffix(')')
}

/// The undelimited label of a token, if its shape fits `kind`
fn label_for(kind: IndexKind, token: &Token) -> Option<&str> {
    match (kind, token) {
        (IndexKind::Section, Token::SectionNumber(raw)) => raw.strip_suffix('.'),
        (IndexKind::SubSection, Token::BracketedNumber(raw)) => strip_parens(raw),
        (IndexKind::Paragraph | IndexKind::SubParagraph, Token::BracketedLetters(raw)) => {
            strip_parens(raw)
        }
        _ => None,
    }
}

/// Parse one index token of the given kind
pub(crate) fn index_of(kind: IndexKind) -> impl Parser<TokenSpan, Index, Error = ParserError> + Clone {
    filter_map(move |span, (token, range): TokenSpan| match label_for(kind, &token) {
        Some(label) => {
            Index::parse(kind, label).map_err(|err| Simple::custom(span, err.to_string()))
        }
        None => Err(Simple::expected_input_found(
            span,
            Vec::new(),
            Some((token, range)),
        )),
    })
}

pub(crate) fn section_index() -> impl Parser<TokenSpan, Index, Error = ParserError> + Clone {
    index_of(IndexKind::Section).labelled("section number")
}

pub(crate) fn sub_section_index() -> impl Parser<TokenSpan, Index, Error = ParserError> + Clone {
    index_of(IndexKind::SubSection).labelled("sub-section number")
}

pub(crate) fn paragraph_index() -> impl Parser<TokenSpan, Index, Error = ParserError> + Clone {
    index_of(IndexKind::Paragraph).labelled("paragraph letter")
}

pub(crate) fn sub_paragraph_index() -> impl Parser<TokenSpan, Index, Error = ParserError> + Clone
{
    index_of(IndexKind::SubParagraph).labelled("sub-paragraph numeral")
}

/// Any index, in precedence order: sub-paragraph, paragraph, sub-section, section
pub(crate) fn numbered_part() -> impl Parser<TokenSpan, Index, Error = ParserError> + Clone {
    choice((
        sub_paragraph_index(),
        paragraph_index(),
        sub_section_index(),
        section_index(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clean::lexer::tokenize_with_spans;

    fn parse_with<P>(parser: P, source: &str) -> Result<Index, Vec<ParserError>>
    where
        P: Parser<TokenSpan, Index, Error = ParserError>,
    {
        parser.then_ignore(end()).parse(tokenize_with_spans(source))
    }

    #[test]
    fn test_section_index() {
        let index = parse_with(section_index(), "234.1.2345.").unwrap();
        assert_eq!(index.base, "234");
        assert_eq!(index.insert, vec![1, 2345]);
        assert!(parse_with(section_index(), "(1)").is_err());
    }

    #[test]
    fn test_sub_paragraph_rejects_non_roman_letters() {
        assert!(parse_with(sub_paragraph_index(), "(iv.5)").is_ok());
        let errors = parse_with(sub_paragraph_index(), "(iivivi)").unwrap_err();
        assert!(matches!(
            errors[0].reason(),
            chumsky::error::SimpleReason::Custom(msg) if msg.contains("iivivi")
        ));
    }

    #[test]
    fn test_numbered_part_precedence() {
        assert_eq!(
            parse_with(numbered_part(), "(i)").unwrap().kind,
            IndexKind::SubParagraph
        );
        assert_eq!(
            parse_with(numbered_part(), "(c)").unwrap().kind,
            IndexKind::Paragraph
        );
        assert_eq!(
            parse_with(numbered_part(), "(12)").unwrap().kind,
            IndexKind::SubSection
        );
        assert_eq!(
            parse_with(numbered_part(), "1.2.").unwrap().kind,
            IndexKind::Section
        );
    }
}
