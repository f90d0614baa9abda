//! Legal text: prose runs and named inline spans

use serde::{Deserialize, Serialize};
use std::fmt;

/// A run of legal text
///
/// Prose runs are whitespace-collapsed. An empty `LegalText` means the unit
/// has no text at that position.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LegalText(pub Vec<TextElement>);

/// Shared empty text for units that never carry one
pub(crate) static EMPTY_TEXT: LegalText = LegalText(Vec::new());

/// One element of a [`LegalText`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextElement {
    Prose(String),
    Span(Span),
}

/// A named inline region whose body is itself legal text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub name: String,
    pub body: LegalText,
}

impl LegalText {
    pub fn new(elements: Vec<TextElement>) -> Self {
        Self(elements)
    }

    /// Single prose run
    pub fn prose(text: impl Into<String>) -> Self {
        Self(vec![TextElement::Prose(text.into())])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn elements(&self) -> &[TextElement] {
        &self.0
    }

    /// The words of this text with span markup removed
    pub fn plain_text(&self) -> String {
        self.0
            .iter()
            .map(|element| match element {
                TextElement::Prose(text) => text.clone(),
                TextElement::Span(span) => span.body.plain_text(),
            })
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Span {
    pub fn new(name: impl Into<String>, body: LegalText) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }
}

impl fmt::Display for LegalText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, element) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match element {
                TextElement::Prose(text) => write!(f, "{}", text)?,
                TextElement::Span(span) => write!(f, "{}", span)?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]{{{}}}", self.name, self.body)
    }
}
