//! Testing utilities for parse tree assertions
//!
//! Parser tests should read sample documents through
//! [`CleanSources`](crate::clean::processor::clean_sources::CleanSources) and check the
//! resulting tree with [`assert_act`]. The fluent API walks a whole hierarchy in one
//! expression:
//!
//! ```rust,ignore
//! assert_act(&act)
//!     .title("Rock Paper Scissors Act")
//!     .section_count(4)
//!     .section(1, |s| {
//!         s.label("2")
//!             .text("There are three signs:")
//!             .sub_section_count(3)
//!             .sub_section(0, |ss| {
//!                 ss.label("1").text("Rock,");
//!             });
//!     });
//! ```
//!
//! Failures name the path to the unit (`sections[1].sub_sections[0]`) so a broken
//! assertion deep in a tree is easy to locate.

use crate::clean::ast::{
    Act, Children, HierarchicalUnit, Paragraph, Section, SubParagraph, SubSection, TextElement,
};

/// How a piece of text should match
#[derive(Debug, Clone)]
pub enum TextMatch {
    Exact(String),
    StartsWith(String),
    Contains(String),
}

impl TextMatch {
    pub fn assert(&self, actual: &str, context: &str) {
        match self {
            TextMatch::Exact(expected) => assert_eq!(
                actual, expected,
                "{}: expected text '{}', found '{}'",
                context, expected, actual
            ),
            TextMatch::StartsWith(prefix) => assert!(
                actual.starts_with(prefix.as_str()),
                "{}: expected text starting with '{}', found '{}'",
                context,
                prefix,
                actual
            ),
            TextMatch::Contains(substring) => assert!(
                actual.contains(substring.as_str()),
                "{}: expected text containing '{}', found '{}'",
                context,
                substring,
                actual
            ),
        }
    }
}

/// Create an assertion builder for an act
pub fn assert_act(act: &Act) -> ActAssertion<'_> {
    ActAssertion { act }
}

pub struct ActAssertion<'a> {
    act: &'a Act,
}

impl<'a> ActAssertion<'a> {
    pub fn title(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.act.title, "title");
        self
    }

    pub fn section_count(self, expected: usize) -> Self {
        let labels: Vec<String> = self.act.sections.iter().map(|s| s.index.label()).collect();
        assert_eq!(
            labels.len(),
            expected,
            "Expected {} sections, found {}: [{}]",
            expected,
            labels.len(),
            labels.join(", ")
        );
        self
    }

    pub fn section<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(UnitAssertion<'a, Section>),
    {
        assert!(
            index < self.act.sections.len(),
            "Section index {} out of bounds (act has {} sections)",
            index,
            self.act.sections.len()
        );
        assertion(UnitAssertion {
            unit: &self.act.sections[index],
            context: format!("sections[{}]", index),
        });
        self
    }
}

/// Assertions shared by every numbered unit
pub struct UnitAssertion<'a, U: HierarchicalUnit> {
    unit: &'a U,
    context: String,
}

impl<'a, U: HierarchicalUnit> UnitAssertion<'a, U> {
    /// Assert the index label (`3.1`, `b`, `iv.5`)
    pub fn label(self, expected: &str) -> Self {
        assert_eq!(
            self.unit.index().label(),
            expected,
            "{}: unexpected index label",
            self.context
        );
        self
    }

    pub fn heading(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.unit.heading(),
            expected,
            "{}: unexpected heading",
            self.context
        );
        self
    }

    /// Assert the plain text (span markup removed)
    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.unit.text().plain_text(), &self.context);
        self
    }

    pub fn text_starts_with(self, prefix: &str) -> Self {
        TextMatch::StartsWith(prefix.to_string())
            .assert(&self.unit.text().plain_text(), &self.context);
        self
    }

    pub fn text_contains(self, substring: &str) -> Self {
        TextMatch::Contains(substring.to_string())
            .assert(&self.unit.text().plain_text(), &self.context);
        self
    }

    /// Assert the span names directly inside the text, in order
    pub fn span_names(self, expected: &[&str]) -> Self {
        let names: Vec<&str> = self
            .unit
            .text()
            .elements()
            .iter()
            .filter_map(|element| match element {
                TextElement::Span(span) => Some(span.name.as_str()),
                TextElement::Prose(_) => None,
            })
            .collect();
        assert_eq!(names, expected, "{}: unexpected spans", self.context);
        self
    }

    pub fn post(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string())
            .assert(&self.unit.post().plain_text(), &format!("{}.post", self.context));
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_eq!(
            self.unit.children().len(),
            expected,
            "{}: unexpected number of children",
            self.context
        );
        self
    }

    pub fn sub_section_count(self, expected: usize) -> Self {
        let count = match self.unit.children() {
            Children::SubSections(units) => units.len(),
            other => panic!("{}: expected sub-sections, found {:?}", self.context, other),
        };
        assert_eq!(count, expected, "{}: unexpected sub-section count", self.context);
        self
    }

    pub fn sub_section<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(UnitAssertion<'a, SubSection>),
    {
        match self.unit.children() {
            Children::SubSections(units) => {
                assertion(child(units, index, &self.context, "sub_sections"))
            }
            other => panic!("{}: expected sub-sections, found {:?}", self.context, other),
        }
        self
    }

    pub fn paragraph<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(UnitAssertion<'a, Paragraph>),
    {
        match self.unit.children() {
            Children::Paragraphs(units) => {
                assertion(child(units, index, &self.context, "paragraphs"))
            }
            other => panic!("{}: expected paragraphs, found {:?}", self.context, other),
        }
        self
    }

    pub fn sub_paragraph<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(UnitAssertion<'a, SubParagraph>),
    {
        match self.unit.children() {
            Children::SubParagraphs(units) => {
                assertion(child(units, index, &self.context, "sub_paragraphs"))
            }
            other => panic!("{}: expected sub-paragraphs, found {:?}", self.context, other),
        }
        self
    }
}

fn child<'a, C: HierarchicalUnit>(
    units: &'a [C],
    index: usize,
    context: &str,
    field: &str,
) -> UnitAssertion<'a, C> {
    assert!(
        index < units.len(),
        "{}: {} index {} out of bounds ({} present)",
        context,
        field,
        index,
        units.len()
    );
    UnitAssertion {
        unit: &units[index],
        context: format!("{}.{}[{}]", context, field, index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clean::parser::parse_document;
    use crate::clean::processor::clean_sources::CleanSources;

    #[test]
    fn test_rps_sample_tree() {
        let source = CleanSources::get_string("rps.clean").unwrap();
        let act = parse_document(&source).unwrap();

        assert_act(&act)
            .title("Rock Paper Scissors Act")
            .section_count(4)
            .section(0, |s| {
                s.label("1")
                    .heading(Some("Players"))
                    .text("A game of rock paper scissors has two players.")
                    .child_count(0);
            })
            .section(1, |s| {
                s.label("2")
                    .heading(None)
                    .text("There are three signs:")
                    .sub_section_count(3)
                    .sub_section(1, |ss| {
                        ss.label("2").text("Paper, and");
                    });
            })
            .section(2, |s| {
                s.heading(Some("Defeating Relationships"))
                    .text("")
                    .sub_section_count(3)
                    .sub_section(2, |ss| {
                        ss.text("Paper beats Rock.");
                    });
            })
            .section(3, |s| {
                s.heading(Some("Winner")).text(
                    "The winner of a game is the player who throws a sign that beats the sign of the other player.",
                );
            });
    }

    #[test]
    fn test_kitchen_sink_sample_tree() {
        let source = CleanSources::get_string("kitchen-sink.clean").unwrap();
        let act = parse_document(&source).unwrap();

        assert_act(&act)
            .title("Kitchen Sink Act")
            .section_count(4)
            .section(0, |s| {
                s.heading(Some("Definitions"))
                    .span_names(&["sign"])
                    .text_starts_with("In this Act a sign is one of the rock, paper")
                    .text_contains("scissors shapes made with one hand.");
            })
            .section(1, |s| {
                s.heading(None)
                    .text("A player must:")
                    .post("unless the game is abandoned.")
                    .child_count(3)
                    .paragraph(1, |p| {
                        p.label("b")
                            .text("throw the sign, and")
                            .post("")
                            .child_count(3)
                            .sub_paragraph(1, |sp| {
                                sp.label("i.1").text("keep it still, and");
                            });
                    })
                    .paragraph(2, |p| {
                        p.label("c").text("accept the result,");
                    });
            })
            .section(2, |s| {
                s.heading(Some("Scoring"))
                    .sub_section_count(3)
                    .sub_section(1, |ss| {
                        ss.label("1.1").heading(None);
                    })
                    .sub_section(2, |ss| {
                        ss.label("2")
                            .heading(Some("Draws"))
                            .text("a draw scores nothing.");
                    });
            })
            .section(3, |s| {
                s.label("3.1").text_contains("under section 3.");
            });
    }

    #[test]
    #[should_panic(expected = "sections[0]: expected sub-sections")]
    fn test_failures_name_the_unit() {
        let act = parse_document("Tiny Act\n\n1. Leaf.\n").unwrap();
        assert_act(&act).section(0, |s| {
            s.sub_section_count(1);
        });
    }
}
