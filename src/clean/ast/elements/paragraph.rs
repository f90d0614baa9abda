//! Paragraph element definition

use super::super::index::{Index, IndexKind};
use super::super::traits::{AstNode, Children, HierarchicalUnit};
use super::legal_text::LegalText;
use super::sub_paragraph::SubParagraph;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A lettered unit, `(b)`, optionally holding sub-paragraphs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub index: Index,
    pub text: LegalText,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_paragraphs: Vec<SubParagraph>,
    #[serde(default, skip_serializing_if = "LegalText::is_empty")]
    pub post: LegalText,
}

impl Paragraph {
    pub fn new(index: Index, text: LegalText) -> Self {
        Self {
            index,
            text,
            sub_paragraphs: Vec::new(),
            post: LegalText::default(),
        }
    }

    pub fn with_sub_paragraphs(mut self, sub_paragraphs: Vec<SubParagraph>, post: LegalText) -> Self {
        self.sub_paragraphs = sub_paragraphs;
        self.post = post;
        self
    }
}

impl AstNode for Paragraph {
    fn node_type(&self) -> &'static str {
        "Paragraph"
    }
    fn display_label(&self) -> String {
        format!("{} {}", self.index, self.text.plain_text())
    }
}

impl HierarchicalUnit for Paragraph {
    const KIND: IndexKind = IndexKind::Paragraph;

    fn index(&self) -> &Index {
        &self.index
    }
    fn text(&self) -> &LegalText {
        &self.text
    }
    fn post(&self) -> &LegalText {
        &self.post
    }
    fn children(&self) -> Children<'_> {
        if self.sub_paragraphs.is_empty() {
            Children::None
        } else {
            Children::SubParagraphs(&self.sub_paragraphs)
        }
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Paragraph({}, {} sub-paragraphs)",
            self.index,
            self.sub_paragraphs.len()
        )
    }
}
