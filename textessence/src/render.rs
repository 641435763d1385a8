//! String rendering of the membership table body.
//!
//! Corpus names come from the server, so every name is escaped before it
//! lands in an attribute or a cell.

use std::borrow::Cow;

use crate::panel::MembershipRow;

/// Name of the form field the checkboxes submit under.
pub const CORPORA_FIELD: &str = "corpora";

pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

pub fn table_row(row: &MembershipRow) -> String {
    let source = escape_html(&row.source);
    let checked = if row.checked { " checked" } else { "" };
    format!(
        "<tr><td><input type=\"checkbox\" name=\"{}\"{} value=\"{}\"></td><td>{}</td></tr>",
        CORPORA_FIELD, checked, source, source
    )
}

pub fn table_body(rows: &[MembershipRow]) -> String {
    rows.iter().map(table_row).collect()
}
