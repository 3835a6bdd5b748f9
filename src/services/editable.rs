//! Server-side rendering of in-place editable text.
//!
//! Visitors get a plain element; a logged-in admin gets the same element
//! marked `contenteditable`, with data attributes the page script uses
//! to commit edits back to the content endpoints.

use crate::models::ContentRecord;

/// HTML element an editable field renders as. Paragraph and Block
/// accept multi-line input; the others commit on Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextShape {
    Inline,
    Paragraph,
    Heading,
    Block,
}

impl TextShape {
    fn tag(&self) -> &'static str {
        match self {
            TextShape::Inline => "span",
            TextShape::Paragraph => "p",
            TextShape::Heading => "h2",
            TextShape::Block => "div",
        }
    }

    fn multiline(&self) -> bool {
        matches!(self, TextShape::Paragraph | TextShape::Block)
    }
}

/// One editable text field, bound to its commit endpoint.
pub struct EditableText<'a> {
    pub field: &'a str,
    pub value: &'a str,
    pub shape: TextShape,
    pub class: &'a str,
    pub endpoint: String,
}

impl<'a> EditableText<'a> {
    pub fn from_record(
        record: &'a ContentRecord,
        field: &'a str,
        shape: TextShape,
        class: &'a str,
    ) -> Self {
        Self {
            field,
            value: record.field(field),
            shape,
            class,
            endpoint: format!("/admin/content/{}", record.section),
        }
    }

    pub fn render(&self, is_admin: bool) -> String {
        let tag = self.shape.tag();
        let value = escape_html(self.value);

        if !is_admin {
            return format!(r#"<{tag} class="{}">{value}</{tag}>"#, self.class);
        }

        format!(
            concat!(
                r#"<{tag} class="{class} editable" contenteditable="true" spellcheck="false""#,
                r#" data-edit-url="{url}" data-edit-field="{field}""#,
                r#" data-edit-multiline="{multiline}">{value}</{tag}>"#
            ),
            tag = tag,
            class = self.class,
            url = escape_html(&self.endpoint),
            field = escape_html(self.field),
            multiline = self.shape.multiline(),
            value = value,
        )
    }
}

/// Normalizes an edit before it is stored. Surrounding whitespace is
/// dropped; an edit that leaves the field empty is discarded and the
/// previous value stays.
pub fn commit_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
