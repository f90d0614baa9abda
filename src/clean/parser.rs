//! Parser implementation for the CLEAN format using chumsky
//!
//! This module implements a parser combinator-based parser for CLEAN acts. It
//! runs over the token stream produced by the lexer and builds the tree in
//! [`crate::clean::ast`].
//!
//! The grammar is layered bottom-up:
//!
//! - [`roman`] - canonical lowercase roman numerals
//! - `indices` - the four index kinds with insert suffixes
//! - `legal_text` - prose runs and nested `[name]{...}` spans
//! - `units` - sections, sub-sections, paragraphs and sub-paragraphs
//! - `document` - title and sections
//!
//! Alternatives that do not apply fail softly and let the next one run. Only
//! the conditions in [`crate::clean::error::CleanError`] are fatal.

mod api;
mod combinators;
mod document;
mod indices;
mod legal_text;
pub mod roman;
mod units;

pub use api::{parse_document, parse_index, parse_index_as, CleanParser};
pub use legal_text::{check_span_boundaries, is_span_name};
pub use roman::is_roman_numeral;
