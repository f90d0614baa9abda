//! Public API for the parser.

use chumsky::error::SimpleReason;
use chumsky::prelude::*;

use super::combinators::{ParserError, TokenSpan};
use super::document::act;
use super::indices::{index_of, numbered_part};
use super::legal_text::check_span_boundaries;
use crate::clean::ast::{Act, Index, IndexKind, Position};
use crate::clean::error::CleanError;
use crate::clean::lexer::{lex, tokenize_with_spans, NormalizedSource};

/// The CLEAN grammar, built once and reused for every document
pub struct CleanParser {
    act: BoxedParser<'static, TokenSpan, Act, ParserError>,
}

impl Default for CleanParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CleanParser {
    pub fn new() -> Self {
        Self { act: act().boxed() }
    }

    /// Parse raw CLEAN text into an act
    pub fn parse(&self, source: &str) -> Result<Act, CleanError> {
        let lexed = lex(source)?;
        check_span_boundaries(&lexed.tokens, &lexed.source)?;

        let tokens = lexed.tokens.clone();
        match self.act.parse(lexed.tokens) {
            Ok(act) => {
                tracing::debug!(sections = act.sections.len(), "parsed act");
                Ok(act)
            }
            Err(errors) => {
                let err = grammar_mismatch(errors, &tokens, &lexed.source);
                tracing::debug!(error = %err, "parse failed");
                Err(err)
            }
        }
    }
}

thread_local! {
    static PARSER: CleanParser = CleanParser::new();
}

/// Parse raw CLEAN text into an act with this thread's shared parser
pub fn parse_document(source: &str) -> Result<Act, CleanError> {
    PARSER.with(|parser| parser.parse(source))
}

/// Describe a token the way diagnostics show it
fn describe(token: Option<&TokenSpan>) -> String {
    match token {
        Some((token, _)) => token.to_string(),
        None => "end of input".to_string(),
    }
}

/// Turn the parser's errors into one [`CleanError::GrammarMismatch`]
///
/// Picks the error that got furthest into the token stream and anchors it at
/// that token's position in the raw source.
fn grammar_mismatch(
    errors: Vec<ParserError>,
    tokens: &[TokenSpan],
    source: &NormalizedSource,
) -> CleanError {
    let furthest = errors.into_iter().max_by_key(|err| err.span().start);

    let Some(err) = furthest else {
        return CleanError::GrammarMismatch {
            position: source.end_position(),
            message: "the document does not match the grammar".to_string(),
        };
    };

    let position = match tokens.get(err.span().start) {
        Some((_, range)) => source.position(range.start),
        None => source.end_position(),
    };

    let message = match err.reason() {
        SimpleReason::Custom(message) => message.clone(),
        SimpleReason::Unclosed { delimiter, .. } => {
            format!("unclosed {}", describe(Some(delimiter)))
        }
        SimpleReason::Unexpected => {
            let found = describe(err.found());
            match err.label() {
                Some(label) => format!("expected {}, found {}", label, found),
                None => {
                    let mut expected: Vec<String> =
                        err.expected().map(|token| describe(token.as_ref())).collect();
                    expected.sort();
                    expected.dedup();
                    if expected.is_empty() {
                        format!("unexpected {}", found)
                    } else {
                        format!("expected {}, found {}", expected.join(" or "), found)
                    }
                }
            }
        }
    };

    CleanError::GrammarMismatch { position, message }
}

fn parse_single_index<P>(parser: P, label: &str) -> Result<Index, CleanError>
where
    P: Parser<TokenSpan, Index, Error = ParserError>,
{
    let tokens = tokenize_with_spans(label);
    parser.then_ignore(end()).parse(tokens).map_err(|errors| {
        let message = errors
            .first()
            .map(|err| match err.reason() {
                SimpleReason::Custom(message) => message.clone(),
                _ => format!("'{}' is not an index", label),
            })
            .unwrap_or_else(|| format!("'{}' is not an index", label));
        CleanError::GrammarMismatch {
            position: Position::new(1, 1),
            message,
        }
    })
}

/// Recognize a written index of any kind, such as `(iv.5)` or `3.1.2.`
///
/// When several kinds fit, sub-paragraph wins over paragraph, paragraph over
/// sub-section and sub-section over section.
pub fn parse_index(label: &str) -> Result<Index, CleanError> {
    parse_single_index(numbered_part(), label)
}

/// Recognize a written index of one kind
pub fn parse_index_as(kind: IndexKind, label: &str) -> Result<Index, CleanError> {
    parse_single_index(index_of(kind), label)
}
