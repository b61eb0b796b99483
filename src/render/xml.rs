//! OSF XML writing.
//!
//! Fade In rejects `<tag></tag>` for empty elements, so serialized output
//! goes through [`cleanup_self_closing_elements`] before it is returned.

use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde::Serialize;

use crate::error::Result;
use crate::model::Document;

/// Declaration written at the top of every OSF document.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no" ?>"#;

/// Elements rewritten to the self-closing form when empty.
pub const SELF_CLOSING_ELEMENTS: &[&str] = &[
    "info",
    "settings",
    "styles",
    "style",
    "mark",
    "text",
    "entry",
    "character",
    "location",
    "scene_time",
    "extension",
    "revision_color",
    "tag_category",
    "transition",
    "spelling",
    "user_dictionary",
    "paragraphs",
    "para",
    "locations",
    "titlepage",
];

const INDENT_SIZE: usize = 2;

fn empty_pair_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let names = SELF_CLOSING_ELEMENTS.join("|");
        let pattern = format!(r"<({names})(\s[^<>]*)?></({names})>");
        Regex::new(&pattern).unwrap()
    })
}

/// Convert a document to indented OSF XML.
///
/// # Example
///
/// ```
/// use unosf::{render, Document, Paragraph};
///
/// let mut doc = Document::new("Open Screenplay Format document", "20");
/// doc.add_paragraph(Paragraph::with_text("Hello"));
/// let xml = render::to_xml(&doc).unwrap();
/// assert!(xml.starts_with("<?xml version=\"1.0\""));
/// ```
pub fn to_xml(doc: &Document) -> Result<String> {
    let mut body = String::new();
    let mut ser = quick_xml::se::Serializer::new(&mut body);
    ser.indent(' ', INDENT_SIZE);
    doc.serialize(ser)?;

    let mut output = String::with_capacity(XML_DECLARATION.len() + 1 + body.len());
    output.push_str(XML_DECLARATION);
    output.push('\n');
    output.push_str(&body);

    Ok(cleanup_self_closing_elements(&output))
}

/// Rewrite `<tag ...></tag>` to `<tag .../>` for [`SELF_CLOSING_ELEMENTS`].
///
/// This is a textual substitution over serialized XML, not a tree
/// transform. Applying it twice gives the same result as applying it once.
pub fn cleanup_self_closing_elements(src: &str) -> String {
    empty_pair_regex()
        .replace_all(src, |caps: &Captures| {
            if caps[1] != caps[3] {
                return caps[0].to_string();
            }
            let attrs = caps.get(2).map_or("", |m| m.as_str());
            format!("<{}{}/>", &caps[1], attrs)
        })
        .into_owned()
}
