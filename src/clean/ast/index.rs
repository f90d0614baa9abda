//! Numbered-unit indices
//!
//! An index is the number that opens a unit: `3.` for a section, `(2)` for a
//! sub-section, `(b)` for a paragraph, `(iv)` for a sub-paragraph. Any index can
//! carry an insert suffix of dotted positive integers (`3.1.2.`, `(iv.5)`),
//! used to place new units between existing ones without renumbering.

use crate::clean::parser::roman::is_roman_numeral;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four kinds of numbered unit, outermost first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IndexKind {
    Section,
    SubSection,
    Paragraph,
    SubParagraph,
}

impl IndexKind {
    /// Prefix used for this kind's segment of an element identifier
    pub fn eid_prefix(&self) -> &'static str {
        match self {
            IndexKind::Section => "sec",
            IndexKind::SubSection => "subsec",
            IndexKind::Paragraph => "para",
            IndexKind::SubParagraph => "subpara",
        }
    }

    /// Check whether `base` is a well-formed base for this kind
    pub fn accepts_base(&self, base: &str) -> bool {
        match self {
            IndexKind::Section | IndexKind::SubSection => {
                !base.is_empty() && base.bytes().all(|b| b.is_ascii_digit())
            }
            IndexKind::Paragraph => !base.is_empty() && base.bytes().all(|b| b.is_ascii_lowercase()),
            IndexKind::SubParagraph => is_roman_numeral(base),
        }
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKind::Section => write!(f, "section"),
            IndexKind::SubSection => write!(f, "sub-section"),
            IndexKind::Paragraph => write!(f, "paragraph"),
            IndexKind::SubParagraph => write!(f, "sub-paragraph"),
        }
    }
}

/// Why a label could not be read as an index of a given kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    InvalidBase { kind: IndexKind, base: String },
    InvalidInsert { component: String },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::InvalidBase { kind, base } => {
                write!(f, "'{}' is not a valid {} number", base, kind)
            }
            IndexError::InvalidInsert { component } => {
                write!(f, "'{}' is not a positive insert number", component)
            }
        }
    }
}

impl std::error::Error for IndexError {}

/// A unit's number: kind, base and insert suffix
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Index {
    pub kind: IndexKind,
    pub base: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub insert: Vec<u32>,
}

impl Index {
    pub fn new(kind: IndexKind, base: impl Into<String>, insert: Vec<u32>) -> Self {
        Self {
            kind,
            base: base.into(),
            insert,
        }
    }

    /// Parse an undelimited label such as `3.1.2` or `iv.5`
    pub fn parse(kind: IndexKind, label: &str) -> Result<Self, IndexError> {
        let mut parts = label.split('.');
        let base = parts.next().unwrap_or_default();
        if !kind.accepts_base(base) {
            return Err(IndexError::InvalidBase {
                kind,
                base: base.to_string(),
            });
        }

        let insert = parts
            .map(|component| match component.parse::<u32>() {
                Ok(n) if n > 0 && component.bytes().all(|b| b.is_ascii_digit()) => Ok(n),
                _ => Err(IndexError::InvalidInsert {
                    component: component.to_string(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(kind, base, insert))
    }

    /// Re-check a possibly hand-built index
    pub fn validate(&self) -> Result<(), IndexError> {
        if !self.kind.accepts_base(&self.base) {
            return Err(IndexError::InvalidBase {
                kind: self.kind,
                base: self.base.clone(),
            });
        }
        match self.insert.iter().find(|&&n| n == 0) {
            Some(n) => Err(IndexError::InvalidInsert {
                component: n.to_string(),
            }),
            None => Ok(()),
        }
    }

    fn joined(&self, separator: &str) -> String {
        let mut out = self.base.clone();
        for n in &self.insert {
            out.push_str(separator);
            out.push_str(&n.to_string());
        }
        out
    }

    /// Human label without delimiters: `3.1.2`, `b`, `iv.5`
    pub fn label(&self) -> String {
        self.joined(".")
    }

    /// Identifier-safe label: `3_1_2`
    pub fn eid_segment(&self) -> String {
        self.joined("_")
    }

    /// Element identifier of a unit with this index under `parent`
    pub fn eid(&self, parent: Option<&str>) -> String {
        let own = format!("{}_{}", self.kind.eid_prefix(), self.eid_segment());
        match parent {
            Some(parent) if self.kind != IndexKind::Section => format!("{}__{}", parent, own),
            _ => own,
        }
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            IndexKind::Section => write!(f, "{}.", self.label()),
            _ => write!(f, "({})", self.label()),
        }
    }
}
