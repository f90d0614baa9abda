//! Act element definition - the root of the tree

use super::super::traits::{AstNode, Children, HierarchicalUnit};
use super::legal_text::{LegalText, TextElement};
use super::section::Section;
use crate::clean::error::CleanError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A whole enactment: its short title and sections in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Act {
    pub title: String,
    pub sections: Vec<Section>,
}

impl Act {
    pub fn new(title: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            title: title.into(),
            sections,
        }
    }

    /// Check the structural invariants the grammar guarantees for parsed trees
    ///
    /// Trees built by hand or deserialized from JSON can break them.
    pub fn validate(&self) -> Result<(), CleanError> {
        if self.title.trim().is_empty() {
            return Err(invariant("act", "the title is empty"));
        }
        for section in &self.sections {
            validate_unit(section, None)?;
        }
        Ok(())
    }
}

fn invariant(unit: &str, message: impl Into<String>) -> CleanError {
    CleanError::StructuralInvariant {
        unit: unit.to_string(),
        message: message.into(),
    }
}

fn validate_text(eid: &str, text: &LegalText) -> Result<(), CleanError> {
    for element in text.elements() {
        match element {
            TextElement::Prose(prose) if prose.trim().is_empty() => {
                return Err(invariant(eid, "a prose run is empty"));
            }
            TextElement::Span(span) => {
                let valid_name = !span.name.is_empty()
                    && span
                        .name
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
                if !valid_name {
                    return Err(invariant(
                        eid,
                        format!("'{}' is not a valid span name", span.name),
                    ));
                }
                validate_text(eid, &span.body)?;
            }
            TextElement::Prose(_) => {}
        }
    }
    Ok(())
}

/// Validate a unit and everything below it
pub(crate) fn validate_unit<U: HierarchicalUnit>(
    unit: &U,
    parent: Option<&str>,
) -> Result<(), CleanError> {
    let index = unit.index();
    let eid = index.eid(parent);

    if index.kind != U::KIND {
        return Err(invariant(
            &eid,
            format!("a {} index on a {}", index.kind, unit.node_type()),
        ));
    }
    index
        .validate()
        .map_err(|err| invariant(&eid, err.to_string()))?;

    let children = unit.children();
    if children.is_empty() && !unit.post().is_empty() {
        return Err(invariant(&eid, "wrapup text without children"));
    }
    if unit.text().is_empty() && !(unit.allows_empty_text() && !children.is_empty()) {
        return Err(invariant(&eid, "the unit has no text"));
    }
    if let Some(heading) = unit.heading() {
        if heading.trim().is_empty() {
            return Err(invariant(&eid, "the heading is empty"));
        }
    }
    validate_text(&eid, unit.text())?;
    validate_text(&eid, unit.post())?;

    match children {
        Children::None => Ok(()),
        Children::SubSections(units) => units.iter().try_for_each(|u| validate_unit(u, Some(eid.as_str()))),
        Children::Paragraphs(units) => units.iter().try_for_each(|u| validate_unit(u, Some(eid.as_str()))),
        Children::SubParagraphs(units) => {
            units.iter().try_for_each(|u| validate_unit(u, Some(eid.as_str())))
        }
    }
}

impl AstNode for Act {
    fn node_type(&self) -> &'static str {
        "Act"
    }
    fn display_label(&self) -> String {
        self.title.clone()
    }
}

impl fmt::Display for Act {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Act('{}', {} sections)", self.title, self.sections.len())
    }
}
