//! Sub-paragraph element definition

use super::super::index::{Index, IndexKind};
use super::super::traits::{AstNode, Children, HierarchicalUnit};
use super::legal_text::{LegalText, EMPTY_TEXT};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The innermost numbered unit, indexed by a roman numeral: `(iv)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubParagraph {
    pub index: Index,
    pub text: LegalText,
}

impl SubParagraph {
    pub fn new(index: Index, text: LegalText) -> Self {
        Self { index, text }
    }
}

impl AstNode for SubParagraph {
    fn node_type(&self) -> &'static str {
        "SubParagraph"
    }
    fn display_label(&self) -> String {
        format!("{} {}", self.index, self.text.plain_text())
    }
}

impl HierarchicalUnit for SubParagraph {
    const KIND: IndexKind = IndexKind::SubParagraph;

    fn index(&self) -> &Index {
        &self.index
    }
    fn text(&self) -> &LegalText {
        &self.text
    }
    fn post(&self) -> &LegalText {
        &EMPTY_TEXT
    }
    fn children(&self) -> Children<'_> {
        Children::None
    }
}

impl fmt::Display for SubParagraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubParagraph({})", self.index)
    }
}
