//! Akoma Ntoso serialization
//!
//! Renders an [`Act`] as an Akoma Ntoso 3.0 document. Output is a single line
//! with no insignificant whitespace, and identical trees always produce
//! identical bytes.
//!
//! ## Element identifiers
//!
//! Sections are `sec_<n>`. Each nested unit appends `__subsec_<n>`,
//! `__para_<n>` or `__subpara_<n>` to its parent's identifier, where `<n>` is
//! the index label with dots replaced by underscores. Spans append
//! `.<name>` to the identifier of whatever encloses them:
//!
//! ```text
//! sec_3_1__subsec_2__para_b
//! sec_1.outer.inner
//! ```
//!
//! ## Unit layout
//!
//! ```text
//! <section eId="sec_2"><num>2</num><heading>..</heading>
//!   <intro><p>..</p></intro>          text, when the unit has children
//!   <subSection ..>..</subSection>    children
//!   <wrapup><p>..</p></wrapup>        post, when non-empty
//! </section>
//! ```
//!
//! A unit without children puts its text in `<content><p>..</p></content>`.

use crate::clean::ast::{Act, Children, HierarchicalUnit, IndexKind, LegalText, TextElement};
use crate::clean::error::CleanError;

/// Akoma Ntoso 3.0 namespace
pub const AKN_NAMESPACE: &str = "http://docs.oasis-open.org/legaldocml/ns/akn/3.0";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Escape text for use in XML content and attribute values
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn element_name(kind: IndexKind) -> &'static str {
    match kind {
        IndexKind::Section => "section",
        IndexKind::SubSection => "subSection",
        IndexKind::Paragraph => "paragraph",
        IndexKind::SubParagraph => "subParagraph",
    }
}

/// Serialize an act to an Akoma Ntoso document
///
/// The tree is validated first; a tree that breaks a structural invariant is
/// rejected rather than rendered.
pub fn generate_act(act: &Act) -> Result<String, CleanError> {
    act.validate()?;

    let mut output = String::new();
    output.push_str(XML_DECLARATION);
    output.push_str(&format!(r#"<akomaNtoso xmlns="{}"><act>"#, AKN_NAMESPACE));
    output.push_str(&format!(
        r#"<preface><p class="title"><shortTitle>{}</shortTitle></p></preface>"#,
        escape_xml(&act.title)
    ));
    output.push_str("<body>");
    for section in &act.sections {
        serialize_unit(section, None, &mut output);
    }
    output.push_str("</body></act></akomaNtoso>");

    tracing::debug!(bytes = output.len(), "generated akoma ntoso");
    Ok(output)
}

/// Serialize a unit and its children (recursive)
fn serialize_unit<U: HierarchicalUnit>(unit: &U, parent: Option<&str>, output: &mut String) {
    let index = unit.index();
    let eid = index.eid(parent);
    let tag = element_name(U::KIND);

    output.push_str(&format!(
        r#"<{} eId="{}"><num>{}</num>"#,
        tag,
        escape_xml(&eid),
        escape_xml(&index.label())
    ));
    if let Some(heading) = unit.heading() {
        output.push_str(&format!("<heading>{}</heading>", escape_xml(heading)));
    }

    let children = unit.children();
    if children.is_empty() {
        wrap_text("content", unit.text(), &eid, output);
    } else {
        wrap_text("intro", unit.text(), &eid, output);
        match children {
            Children::None => {}
            Children::SubSections(units) => {
                units.iter().for_each(|u| serialize_unit(u, Some(eid.as_str()), output))
            }
            Children::Paragraphs(units) => {
                units.iter().for_each(|u| serialize_unit(u, Some(eid.as_str()), output))
            }
            Children::SubParagraphs(units) => {
                units.iter().for_each(|u| serialize_unit(u, Some(eid.as_str()), output))
            }
        }
        wrap_text("wrapup", unit.post(), &eid, output);
    }

    output.push_str(&format!("</{}>", tag));
}

/// `<tag><p>text</p></tag>`, or nothing for empty text
fn wrap_text(tag: &str, text: &LegalText, eid: &str, output: &mut String) {
    if text.is_empty() {
        return;
    }
    output.push_str(&format!("<{}><p>", tag));
    serialize_legal_text(text, eid, output);
    output.push_str(&format!("</p></{}>", tag));
}

/// Serialize legal text; spans take their identifier from `prefix`
fn serialize_legal_text(text: &LegalText, prefix: &str, output: &mut String) {
    for (i, element) in text.elements().iter().enumerate() {
        if i > 0 {
            output.push(' ');
        }
        match element {
            TextElement::Prose(prose) => output.push_str(&escape_xml(prose)),
            TextElement::Span(span) => {
                let eid = format!("{}.{}", prefix, span.name);
                output.push_str(&format!(r#"<span eId="{}">"#, escape_xml(&eid)));
                serialize_legal_text(&span.body, &eid, output);
                output.push_str("</span>");
            }
        }
    }
}
