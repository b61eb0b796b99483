//! Plain text rendering for OSF documents.
//!
//! Runs become their literal text wrapped in markdown-like emphasis
//! markers; paragraphs apply the casing or bracketing of their base style
//! and end with exactly one newline.

use crate::model::{Document, Paragraph, StyleKind, TextRun};

use super::RenderOptions;

/// Convert a document to plain text.
///
/// The title page (if any, and if enabled) comes first, then the body.
/// Rendering cannot fail.
pub fn to_text(doc: &Document, options: &RenderOptions) -> String {
    let mut output = String::new();

    if options.include_title_page {
        if let Some(ref title_page) = doc.title_page {
            push_paragraphs(&mut output, &title_page.items);
        }
    }
    push_paragraphs(&mut output, &doc.paragraphs.items);

    if options.trailing_newline {
        output.push('\n');
    }

    output
}

fn push_paragraphs(output: &mut String, paragraphs: &[Paragraph]) {
    for para in paragraphs {
        output.push_str(&render_paragraph(para));
    }
}

/// Render one paragraph, including its trailing newline.
pub fn render_paragraph(para: &Paragraph) -> String {
    let joined: String = para.runs.iter().map(render_run).collect();

    let mut text = match para.kind() {
        Some(kind) => apply_style(&kind, joined),
        None => joined,
    };
    text.push('\n');
    text
}

/// Render one text run with its emphasis markers.
///
/// Whitespace-only runs come back unchanged. Otherwise the wrapping order is
/// underline, italic, bold, then all-caps, then strikethrough, each step
/// applied to the result of the previous one.
pub fn render_run(run: &TextRun) -> String {
    let mut s = run.text.clone();
    if s.trim().is_empty() {
        return s;
    }

    if run.is_underline() {
        s = format!("_{}_", s);
    }
    if run.is_italic() {
        s = format!("*{}*", s);
    }
    if run.is_bold() {
        s = format!("**{}**", s);
    }
    if run.is_all_caps() {
        s = s.to_uppercase();
    }
    if run.is_strikethrough() {
        s = format!("~~{}~~", s);
    }
    s
}

/// Paragraph-level transform for a base style. Never adds the newline.
fn apply_style(kind: &StyleKind, text: String) -> String {
    match kind {
        StyleKind::SceneHeading | StyleKind::Character | StyleKind::Transition => {
            text.to_uppercase()
        }
        // Only wrapped when both brackets are missing.
        StyleKind::Parenthetical if !text.starts_with('(') && !text.ends_with(')') => {
            format!("({})", text)
        }
        StyleKind::Singing => format!("~{}~", text),
        StyleKind::NormalText
        | StyleKind::Action
        | StyleKind::Dialogue
        | StyleKind::Parenthetical
        | StyleKind::CastList
        | StyleKind::Shot
        | StyleKind::Other(_) => text,
    }
}

impl Document {
    /// Render the document to plain text with default options.
    pub fn render(&self) -> String {
        to_text(self, &RenderOptions::default())
    }
}
