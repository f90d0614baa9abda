//! Numbered unit grammar: sections, sub-sections, paragraphs, sub-paragraphs
//!
//! Every level has the same shape:
//!
//! ```text
//! [heading]            only sections and sub-sections, after a blank line
//! index text
//! INDENT
//!   child+             exactly one child kind per level
//! UNDENT
//! post                 only directly after UNDENT, no blank line between
//! ```
//!
//! A level whose index does not match fails and lets the caller try its next
//! alternative, so a section block offers sub-sections first and paragraphs
//! second.

use chumsky::prelude::*;

use super::combinators::{
    blank_lines, blank_lines_at_least_one, capitalized_line, token, ParserError, TokenSpan,
};
use super::indices::{paragraph_index, section_index, sub_paragraph_index, sub_section_index};
use super::legal_text::{legal_text, line_start_text};
use crate::clean::ast::{
    LegalText, Paragraph, Section, SectionChildren, SubParagraph, SubSection,
};
use crate::clean::lexer::Token;

/// A heading line preceded by at least one blank line, or just blank lines
fn leading_heading() -> impl Parser<TokenSpan, Option<String>, Error = ParserError> + Clone {
    choice((
        blank_lines_at_least_one()
            .ignore_then(capitalized_line())
            .map(Some)
            .labelled("heading"),
        blank_lines().to(None),
    ))
}

/// `INDENT child+ UNDENT` followed by the optional wrapup text
fn sandwich<C, O>(children: C) -> impl Parser<TokenSpan, (Vec<O>, LegalText), Error = ParserError> + Clone
where
    C: Parser<TokenSpan, O, Error = ParserError> + Clone,
{
    blank_lines()
        .ignore_then(token(Token::Indent))
        .ignore_then(children.repeated().at_least(1))
        .then_ignore(blank_lines())
        .then_ignore(token(Token::Undent).labelled("end of indented block"))
        .then(line_start_text())
}

fn non_empty(
    text: LegalText,
    span: std::ops::Range<usize>,
    unit: &str,
) -> Result<LegalText, ParserError> {
    if text.is_empty() {
        Err(Simple::custom(span, format!("{} has no text", unit)))
    } else {
        Ok(text)
    }
}

pub(crate) fn sub_paragraph() -> impl Parser<TokenSpan, SubParagraph, Error = ParserError> + Clone
{
    blank_lines()
        .ignore_then(sub_paragraph_index())
        .then(legal_text())
        .try_map(|(index, text), span| {
            let text = non_empty(text, span, &format!("sub-paragraph ({})", index.label()))?;
            Ok(SubParagraph::new(index, text))
        })
}

pub(crate) fn paragraph() -> impl Parser<TokenSpan, Paragraph, Error = ParserError> + Clone {
    blank_lines()
        .ignore_then(paragraph_index())
        .then(legal_text())
        .then(sandwich(sub_paragraph()).or_not())
        .try_map(|((index, text), block), span| {
            let text = non_empty(text, span, &format!("paragraph ({})", index.label()))?;
            let paragraph = Paragraph::new(index, text);
            Ok(match block {
                Some((sub_paragraphs, post)) => paragraph.with_sub_paragraphs(sub_paragraphs, post),
                None => paragraph,
            })
        })
}

pub(crate) fn sub_section() -> impl Parser<TokenSpan, SubSection, Error = ParserError> + Clone {
    leading_heading()
        .then(sub_section_index())
        .then(legal_text())
        .then(sandwich(paragraph()).or_not())
        .try_map(|(((heading, index), text), block), span| {
            let text = non_empty(text, span, &format!("sub-section ({})", index.label()))?;
            let mut sub_section = SubSection::new(index, text);
            sub_section.heading = heading;
            Ok(match block {
                Some((paragraphs, post)) => sub_section.with_paragraphs(paragraphs, post),
                None => sub_section,
            })
        })
}

pub(crate) fn section() -> impl Parser<TokenSpan, Section, Error = ParserError> + Clone {
    let children = choice((
        sandwich(sub_section()).map(|(units, post)| (SectionChildren::SubSections(units), post)),
        sandwich(paragraph()).map(|(units, post)| (SectionChildren::Paragraphs(units), post)),
    ));

    leading_heading()
        .then(section_index())
        .then(legal_text())
        .then(children.or_not())
        .try_map(|(((heading, index), text), block), span| {
            let may_be_empty = matches!(block, Some((SectionChildren::SubSections(_), _)));
            let text = if may_be_empty {
                text
            } else {
                non_empty(text, span, &format!("section {}", index.label()))?
            };

            let mut section = Section::new(index, text);
            section.heading = heading;
            Ok(match block {
                Some((children, post)) => section.with_children(children, post),
                None => section,
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clean::ast::{Index, IndexKind, TextElement};
    use crate::clean::lexer::lex;

    fn parse_with<P, O>(parser: P, source: &str) -> Result<O, Vec<ParserError>>
    where
        P: Parser<TokenSpan, O, Error = ParserError>,
    {
        parser.then_ignore(end()).parse(lex(source).unwrap().tokens)
    }

    #[test]
    fn test_leaf_sub_section() {
        let unit = parse_with(sub_section(), "(1) Rock,\n").unwrap();
        assert_eq!(unit.index, Index::new(IndexKind::SubSection, "1", vec![]));
        assert_eq!(unit.text, LegalText::prose("Rock,"));
        assert!(unit.paragraphs.is_empty());
        assert!(unit.post.is_empty());
    }

    #[test]
    fn test_sandwich_with_post() {
        let source = "(a) intro\n  (i) one\n  (ii) two\ntarget sandwich\n";
        let unit = parse_with(paragraph(), source).unwrap();
        assert_eq!(unit.sub_paragraphs.len(), 2);
        assert_eq!(unit.post, LegalText::prose("target sandwich"));
    }

    #[test]
    fn test_sibling_index_after_block_is_not_post() {
        let source = "1. Players must:\n  (a) choose,\n  (b) throw, and\n    (i) show it,\n  (c) accept.\n";
        let unit = parse_with(section(), source).unwrap();
        match unit.children {
            Some(SectionChildren::Paragraphs(paras)) => {
                assert_eq!(paras.len(), 3);
                assert_eq!(paras[1].sub_paragraphs.len(), 1);
                assert!(paras[1].post.is_empty());
                assert_eq!(paras[2].text, LegalText::prose("accept."));
            }
            other => panic!("expected paragraphs, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_line_ends_sandwich() {
        let source = "(a) intro\n  (i) one\n\nthis is not sandwich\n";
        let parser = paragraph().then(any().repeated());
        let (unit, rest) = parse_with(parser, source).unwrap();
        assert_eq!(unit.sub_paragraphs.len(), 1);
        assert!(unit.post.is_empty());
        assert_eq!(rest[0].0, Token::BlankLine);
    }

    #[test]
    fn test_first_child_after_indent_is_sub_paragraph() {
        let unit = parse_with(paragraph(), "(b) list:\n  (i) first\n").unwrap();
        assert_eq!(
            unit.sub_paragraphs[0].index,
            Index::new(IndexKind::SubParagraph, "i", vec![])
        );
    }

    #[test]
    fn test_section_with_empty_text_and_sub_sections() {
        let unit = parse_with(section(), "3.\n  (1) Rock beats Scissors,\n").unwrap();
        assert!(unit.text.is_empty());
        assert!(matches!(
            unit.children,
            Some(SectionChildren::SubSections(ref subs)) if subs.len() == 1
        ));
    }

    #[test]
    fn test_section_with_paragraphs() {
        let unit = parse_with(section(), "5. Either:\n  (a) this\n  (b) that\n").unwrap();
        assert!(matches!(
            unit.children,
            Some(SectionChildren::Paragraphs(ref paras)) if paras.len() == 2
        ));
    }

    #[test]
    fn test_empty_leaf_section_is_rejected() {
        assert!(parse_with(section(), "3.\n").is_err());
    }

    #[test]
    fn test_heading_after_blank_line() {
        let unit = parse_with(section(), "\nPlayers\n1. Two players.\n").unwrap();
        assert_eq!(unit.heading.as_deref(), Some("Players"));
        assert_eq!(
            unit.text.elements(),
            &[TextElement::Prose("Two players.".to_string())]
        );
    }

    #[test]
    fn test_sub_section_heading_inside_block() {
        let source = "1. Intro\n  (1) first\n\n  Second Part\n  (2) second\n";
        let unit = parse_with(section(), source).unwrap();
        match unit.children {
            Some(SectionChildren::SubSections(subs)) => {
                assert_eq!(subs[0].heading, None);
                assert_eq!(subs[1].heading.as_deref(), Some("Second Part"));
            }
            other => panic!("expected sub-sections, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_child_kind_is_rejected() {
        assert!(parse_with(paragraph(), "(a) intro\n  (b) not a numeral\n").is_err());
    }
}
