//! Element definitions of the CLEAN tree

pub mod act;
pub mod legal_text;
pub mod paragraph;
pub mod section;
pub mod sub_paragraph;
pub mod sub_section;

pub use act::Act;
pub use legal_text::{LegalText, Span, TextElement};
pub use paragraph::Paragraph;
pub use section::{Section, SectionChildren};
pub use sub_paragraph::SubParagraph;
pub use sub_section::SubSection;
