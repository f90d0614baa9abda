//! Document-level parser responsible for parsing a whole act.

use chumsky::prelude::*;

use super::combinators::{blank_lines, capitalized_line, ParserError, TokenSpan};
use super::units::section;
use crate::clean::ast::Act;

/// Parse an act: a title line, then sections, then trailing blank lines
pub fn act() -> impl Parser<TokenSpan, Act, Error = ParserError> + Clone {
    blank_lines()
        .ignore_then(capitalized_line().labelled("title"))
        .then(section().repeated())
        .then_ignore(blank_lines())
        .then_ignore(end())
        .map(|(title, sections)| Act::new(title, sections))
}
