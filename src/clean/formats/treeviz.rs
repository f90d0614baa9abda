//! Treeviz formatter for CLEAN trees

use crate::clean::ast::{Act, AstNode, Children, HierarchicalUnit};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(act: &Act) -> String {
    let mut result = format!("{}: {}\n", act.node_type(), truncate(&act.display_label(), 40));
    append_units(&mut result, &act.sections, "", false);
    result
}

/// `trailing` is set when a wrapup line follows the units
fn append_units<U: HierarchicalUnit>(result: &mut String, units: &[U], prefix: &str, trailing: bool) {
    for (i, unit) in units.iter().enumerate() {
        let is_last = i == units.len() - 1 && !trailing;
        append_unit(result, unit, prefix, is_last);
    }
}

fn append_unit<U: HierarchicalUnit>(result: &mut String, unit: &U, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    result.push_str(&format!(
        "{}{} {}: {}\n",
        prefix,
        connector,
        unit.node_type(),
        truncate(&unit.display_label(), 30)
    ));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let trailing = !unit.post().is_empty();
    match unit.children() {
        Children::None => {}
        Children::SubSections(units) => append_units(result, units, &new_prefix, trailing),
        Children::Paragraphs(units) => append_units(result, units, &new_prefix, trailing),
        Children::SubParagraphs(units) => append_units(result, units, &new_prefix, trailing),
    }
    if trailing {
        result.push_str(&format!(
            "{}└─ Wrapup: {}\n",
            new_prefix,
            truncate(&unit.post().plain_text(), 30)
        ));
    }
}
