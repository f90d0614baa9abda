//! Token definitions for the CLEAN format
//!
//! This module defines all the tokens that can be produced by the CLEAN lexer.
//! The tokens are defined using the logos derive macro and run over text that has
//! already been through the indentation normalizer, so leading whitespace never
//! reaches the lexer and block structure arrives as `INDENT`/`UNDENT` marker words.
//!
//! Numbered-unit indices are lexed as single tokens (`3.1.`, `(4.1)`, `(iv)`).
//! Whether such a token is an index or ordinary prose is decided by the parser
//! from its position on the line.
use logos::Logos;
use serde::Serialize;
use std::fmt;

/// All possible tokens in the CLEAN format
#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone, Serialize)]
#[logos(skip r"[ \t\r]+")]
pub enum Token {
    // Block markers written by the indentation normalizer
    #[token("INDENT")]
    Indent,
    #[token("UNDENT")]
    Undent,

    // Line breaks
    #[token("\n")]
    Newline,

    /// Synthetic: one or more empty lines. Produced by the line structure
    /// transform, never by logos.
    BlankLine,

    // Span delimiters
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,

    /// Digits with optional insert groups and a closing period: `12.`, `3.1.2.`
    #[regex(r"[0-9]+(\.[0-9]+)*\.", |lex| lex.slice().to_string(), priority = 5)]
    SectionNumber(String),

    /// Bracketed digits with optional insert groups: `(1)`, `(4.1)`
    #[regex(r"\([0-9]+(\.[0-9]+)*\)", |lex| lex.slice().to_string(), priority = 5)]
    BracketedNumber(String),

    /// Bracketed lowercase letters with optional insert groups: `(a)`, `(iv.5)`
    #[regex(r"\([a-z]+(\.[0-9]+)*\)", |lex| lex.slice().to_string(), priority = 5)]
    BracketedLetters(String),

    // Text content (catch-all for non-special characters)
    #[regex(r"[^\s\[\]\{\}]+", |lex| lex.slice().to_string(), priority = 1)]
    Text(String),
}

impl Token {
    /// Check if this token is one of the normalizer's block markers
    pub fn is_marker(&self) -> bool {
        matches!(self, Token::Indent | Token::Undent)
    }

    /// Check if this token can start a numbered unit when it opens a line
    pub fn is_index_shaped(&self) -> bool {
        matches!(
            self,
            Token::SectionNumber(_) | Token::BracketedNumber(_) | Token::BracketedLetters(_)
        )
    }

    /// Check if this token is prose inside a span body.
    ///
    /// A closing brace is excluded because it always closes the innermost span.
    pub fn is_span_body_prose(&self) -> bool {
        matches!(
            self,
            Token::Text(_)
                | Token::SectionNumber(_)
                | Token::BracketedNumber(_)
                | Token::BracketedLetters(_)
                | Token::OpenBracket
                | Token::CloseBracket
                | Token::OpenBrace
        )
    }

    /// Check if this token is prose outside any span
    pub fn is_prose(&self) -> bool {
        self.is_span_body_prose() || matches!(self, Token::CloseBrace)
    }

    /// The source text this token stands for
    pub fn as_str(&self) -> &str {
        match self {
            Token::Indent => "INDENT",
            Token::Undent => "UNDENT",
            Token::Newline | Token::BlankLine => "\n",
            Token::OpenBracket => "[",
            Token::CloseBracket => "]",
            Token::OpenBrace => "{",
            Token::CloseBrace => "}",
            Token::SectionNumber(s)
            | Token::BracketedNumber(s)
            | Token::BracketedLetters(s)
            | Token::Text(s) => s,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Indent => write!(f, "<indent>"),
            Token::Undent => write!(f, "<undent>"),
            Token::Newline => write!(f, "<newline>"),
            Token::BlankLine => write!(f, "<blank-line>"),
            Token::OpenBracket => write!(f, "<open-bracket>"),
            Token::CloseBracket => write!(f, "<close-bracket>"),
            Token::OpenBrace => write!(f, "<open-brace>"),
            Token::CloseBrace => write!(f, "<close-brace>"),
            Token::SectionNumber(s) => write!(f, "<section-number:{}>", s),
            Token::BracketedNumber(s) => write!(f, "<bracketed-number:{}>", s),
            Token::BracketedLetters(s) => write!(f, "<bracketed-letters:{}>", s),
            Token::Text(s) => write!(f, "<text:{}>", s),
        }
    }
}
