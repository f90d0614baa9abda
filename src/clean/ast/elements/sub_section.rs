//! Sub-section element definition

use super::super::index::{Index, IndexKind};
use super::super::traits::{AstNode, Children, HierarchicalUnit};
use super::legal_text::LegalText;
use super::paragraph::Paragraph;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A numbered unit inside a section, `(2)`, optionally holding paragraphs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub index: Index,
    pub text: LegalText,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paragraphs: Vec<Paragraph>,
    #[serde(default, skip_serializing_if = "LegalText::is_empty")]
    pub post: LegalText,
}

impl SubSection {
    pub fn new(index: Index, text: LegalText) -> Self {
        Self {
            heading: None,
            index,
            text,
            paragraphs: Vec::new(),
            post: LegalText::default(),
        }
    }

    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    pub fn with_paragraphs(mut self, paragraphs: Vec<Paragraph>, post: LegalText) -> Self {
        self.paragraphs = paragraphs;
        self.post = post;
        self
    }
}

impl AstNode for SubSection {
    fn node_type(&self) -> &'static str {
        "SubSection"
    }
    fn display_label(&self) -> String {
        format!("{} {}", self.index, self.text.plain_text())
    }
}

impl HierarchicalUnit for SubSection {
    const KIND: IndexKind = IndexKind::SubSection;

    fn index(&self) -> &Index {
        &self.index
    }
    fn heading(&self) -> Option<&str> {
        self.heading.as_deref()
    }
    fn text(&self) -> &LegalText {
        &self.text
    }
    fn post(&self) -> &LegalText {
        &self.post
    }
    fn children(&self) -> Children<'_> {
        if self.paragraphs.is_empty() {
            Children::None
        } else {
            Children::Paragraphs(&self.paragraphs)
        }
    }
}

impl fmt::Display for SubSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SubSection({}, {} paragraphs)",
            self.index,
            self.paragraphs.len()
        )
    }
}
