//! AST traits - Common interfaces for uniform node access
//!
//! The four numbered unit kinds share one shape: an index, optional heading,
//! leading text, optional children one level down and trailing text. The
//! generator and tree visualizer walk them through [`HierarchicalUnit`].

use super::elements::{LegalText, Paragraph, SubParagraph, SubSection};
use super::index::{Index, IndexKind};

/// Common interface for all AST nodes
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
}

/// The children of a unit, one level down
#[derive(Debug, Clone, Copy)]
pub enum Children<'a> {
    None,
    SubSections(&'a [SubSection]),
    Paragraphs(&'a [Paragraph]),
    SubParagraphs(&'a [SubParagraph]),
}

impl Children<'_> {
    pub fn len(&self) -> usize {
        match self {
            Children::None => 0,
            Children::SubSections(units) => units.len(),
            Children::Paragraphs(units) => units.len(),
            Children::SubParagraphs(units) => units.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Trait for the numbered units: sections, sub-sections, paragraphs and sub-paragraphs
pub trait HierarchicalUnit: AstNode {
    /// The index kind every unit of this type carries
    const KIND: IndexKind;

    fn index(&self) -> &Index;

    fn heading(&self) -> Option<&str> {
        None
    }

    /// Text before the children, or the whole text of a leaf
    fn text(&self) -> &LegalText;

    /// Text after the children
    fn post(&self) -> &LegalText;

    fn children(&self) -> Children<'_>;

    /// Whether this unit may have empty text when it has children
    fn allows_empty_text(&self) -> bool {
        false
    }
}
