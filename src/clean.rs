//! Main module for the CLEAN converter
//!
//! The pipeline runs normalizer, lexer, parser and generator in that order.
//! [`generate_akn`] runs all of it; the stage modules are public for callers
//! that need an intermediate result.

pub mod ast;
pub mod config;
pub mod error;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod processor;

#[cfg(test)]
pub mod testing;

pub use error::{CleanError, ErrorKind};

/// Convert CLEAN source text to an Akoma Ntoso document
pub fn generate_akn(source: &str) -> Result<String, CleanError> {
    let act = parser::parse_document(source)?;
    formats::generate_act(&act)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_akn_is_deterministic() {
        let source = "Tiny Act\n\n1. Only [term]{words} here.\n";
        let first = generate_akn(source).unwrap();
        assert_eq!(first, generate_akn(source).unwrap());
        assert!(first.contains(r#"<p>Only <span eId="sec_1.term">words</span> here.</p>"#));
    }

    #[test]
    fn test_generate_akn_reports_error_kind() {
        let err = generate_akn("Tiny Act\n\n1. text\n   (1) deeper\n  (2) unknown level\n")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Indentation);
    }
}
