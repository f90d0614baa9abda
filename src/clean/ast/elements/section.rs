//! Section element definition

use super::super::index::{Index, IndexKind};
use super::super::traits::{AstNode, Children, HierarchicalUnit};
use super::legal_text::LegalText;
use super::paragraph::Paragraph;
use super::sub_section::SubSection;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A section's children: either sub-sections or paragraphs, never both
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionChildren {
    SubSections(Vec<SubSection>),
    Paragraphs(Vec<Paragraph>),
}

/// A top-level numbered unit of an act: `3.`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub index: Index,
    pub text: LegalText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<SectionChildren>,
    #[serde(default, skip_serializing_if = "LegalText::is_empty")]
    pub post: LegalText,
}

impl Section {
    pub fn new(index: Index, text: LegalText) -> Self {
        Self {
            heading: None,
            index,
            text,
            children: None,
            post: LegalText::default(),
        }
    }

    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    pub fn with_children(mut self, children: SectionChildren, post: LegalText) -> Self {
        self.children = Some(children);
        self.post = post;
        self
    }
}

impl AstNode for Section {
    fn node_type(&self) -> &'static str {
        "Section"
    }
    fn display_label(&self) -> String {
        match &self.heading {
            Some(heading) => format!("{} {}", self.index, heading),
            None => format!("{} {}", self.index, self.text.plain_text()),
        }
    }
}

impl HierarchicalUnit for Section {
    const KIND: IndexKind = IndexKind::Section;

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
        match &self.children {
            None => Children::None,
            Some(SectionChildren::SubSections(units)) => Children::SubSections(units),
            Some(SectionChildren::Paragraphs(units)) => Children::Paragraphs(units),
        }
    }
    fn allows_empty_text(&self) -> bool {
        matches!(self.children, Some(SectionChildren::SubSections(_)))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Section({}, {} children)", self.index, self.children().len())
    }
}
