//! AST definitions and utilities for the CLEAN format
//!
//! The tree is built once, bottom-up, by the parser and is read-only
//! afterwards.
//!
//! ## Modules
//!
//! - `elements` - Act, the four numbered units and legal text
//! - `index` - Unit indices with insert suffixes and identifier segments
//! - `traits` - Uniform access to numbered units
//! - `position` - Source positions and byte offset conversion

pub mod elements;
pub mod index;
pub mod position;
pub mod traits;

pub use elements::{
    Act, LegalText, Paragraph, Section, SectionChildren, Span, SubParagraph, SubSection,
    TextElement,
};
pub use index::{Index, IndexError, IndexKind};
pub use position::{Position, SourceLocation};
pub use traits::{AstNode, Children, HierarchicalUnit};
