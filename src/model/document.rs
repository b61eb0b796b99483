//! Document-level types.

use super::{Lists, Paragraph, Style};
use serde::{Deserialize, Serialize};

/// A parsed OSF document (`<document>`).
///
/// The document owns its whole tree. It is built by the parser (or by hand
/// for writing) and is never mutated by rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "document")]
pub struct Document {
    /// Document type (the `type` attribute), e.g. "Open Screenplay Format document"
    #[serde(rename = "@type")]
    pub document_type: String,

    /// Format version (the `version` attribute), e.g. "20"
    #[serde(rename = "@version")]
    pub format_version: String,

    /// Title and authorship information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<Info>,

    /// Page setup and numbering settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,

    /// Style definitions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<Styles>,

    /// Screenplay body
    #[serde(default)]
    pub paragraphs: Paragraphs,

    /// Spell checker settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spelling: Option<Spelling>,

    /// Auxiliary reference lists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lists: Option<Lists>,

    /// Title page, rendered before the body
    #[serde(rename = "titlepage", default, skip_serializing_if = "Option::is_none")]
    pub title_page: Option<TitlePage>,
}

impl Document {
    /// Create a new empty document.
    pub fn new(document_type: impl Into<String>, format_version: impl Into<String>) -> Self {
        Self {
            document_type: document_type.into(),
            format_version: format_version.into(),
            ..Self::default()
        }
    }

    /// Add a paragraph to the body.
    pub fn add_paragraph(&mut self, para: Paragraph) {
        self.paragraphs.items.push(para);
    }

    /// Add a paragraph to the title page, creating it if needed.
    pub fn add_title_paragraph(&mut self, para: Paragraph) {
        self.title_page
            .get_or_insert_with(TitlePage::default)
            .items
            .push(para);
    }

    /// Get the number of body paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.items.len()
    }

    /// Check if the document has neither body nor title page paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.items.is_empty()
            && self
                .title_page
                .as_ref()
                .map_or(true, |tp| tp.items.is_empty())
    }

    /// Screenplay title from the info block.
    pub fn title(&self) -> Option<&str> {
        self.info.as_ref().and_then(|i| i.title.as_deref())
    }

    /// Author credit from the info block.
    pub fn written_by(&self) -> Option<&str> {
        self.info.as_ref().and_then(|i| i.written_by.as_deref())
    }
}

/// Title and authorship information (`<info>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "info")]
pub struct Info {
    #[serde(rename = "@uuid", default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,

    #[serde(rename = "@title", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(rename = "@title_format", default, skip_serializing_if = "Option::is_none")]
    pub title_format: Option<String>,

    #[serde(rename = "@written_by", default, skip_serializing_if = "Option::is_none")]
    pub written_by: Option<String>,

    #[serde(rename = "@copyright", default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,

    #[serde(rename = "@contact", default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,

    #[serde(rename = "@drafts", default, skip_serializing_if = "Option::is_none")]
    pub drafts: Option<String>,

    #[serde(rename = "@pagecount", default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<String>,
}

/// Page setup, continuation texts, and numbering (`<settings>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "settings")]
pub struct Settings {
    #[serde(rename = "@page_width", default, skip_serializing_if = "Option::is_none")]
    pub page_width: Option<String>,

    #[serde(rename = "@page_height", default, skip_serializing_if = "Option::is_none")]
    pub page_height: Option<String>,

    #[serde(rename = "@margin_top", default, skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<String>,

    #[serde(rename = "@margin_bottom", default, skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<String>,

    #[serde(rename = "@margin_left", default, skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<String>,

    #[serde(rename = "@margin_right", default, skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<String>,

    #[serde(rename = "@normal_linesperinch", default, skip_serializing_if = "Option::is_none")]
    pub normal_lines_per_inch: Option<String>,

    #[serde(rename = "@dialogue_continues", default, skip_serializing_if = "Option::is_none")]
    pub dialogue_continues: Option<String>,

    #[serde(rename = "@cont_text", default, skip_serializing_if = "Option::is_none")]
    pub cont_text: Option<String>,

    #[serde(rename = "@more_text", default, skip_serializing_if = "Option::is_none")]
    pub more_text: Option<String>,

    #[serde(rename = "@continued_text", default, skip_serializing_if = "Option::is_none")]
    pub continued_text: Option<String>,

    #[serde(rename = "@omitted_text", default, skip_serializing_if = "Option::is_none")]
    pub omitted_text: Option<String>,

    #[serde(rename = "@pagenumber_format", default, skip_serializing_if = "Option::is_none")]
    pub page_number_format: Option<String>,

    #[serde(rename = "@pagenumber_start", default, skip_serializing_if = "Option::is_none")]
    pub page_number_start: Option<String>,

    #[serde(rename = "@pagenumber_first", default, skip_serializing_if = "Option::is_none")]
    pub page_number_first: Option<String>,

    #[serde(rename = "@revision", default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,

    #[serde(rename = "@show_revisions", default, skip_serializing_if = "Option::is_none")]
    pub show_revisions: Option<String>,

    #[serde(rename = "@scene_numbering", default, skip_serializing_if = "Option::is_none")]
    pub scene_numbering: Option<String>,

    #[serde(rename = "@scenes_locked", default, skip_serializing_if = "Option::is_none")]
    pub scenes_locked: Option<String>,

    #[serde(rename = "@page_numbering", default, skip_serializing_if = "Option::is_none")]
    pub page_numbering: Option<String>,

    #[serde(rename = "@pages_locked", default, skip_serializing_if = "Option::is_none")]
    pub pages_locked: Option<String>,
}

/// Style definitions (`<styles>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "styles")]
pub struct Styles {
    #[serde(rename = "style", default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Style>,
}

impl Styles {
    /// Find a style definition by name.
    pub fn get(&self, name: &str) -> Option<&Style> {
        self.items.iter().find(|s| s.name.as_deref() == Some(name))
    }
}

/// The screenplay body (`<paragraphs>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "paragraphs")]
pub struct Paragraphs {
    #[serde(rename = "para", default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Paragraph>,
}

/// The title page (`<titlepage>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "titlepage")]
pub struct TitlePage {
    #[serde(rename = "para", default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Paragraph>,
}

/// Spell checker settings (`<spelling>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "spelling")]
pub struct Spelling {
    #[serde(rename = "@language", default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_dictionary: Option<UserDictionary>,
}

/// Words added to the user's dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "user_dictionary")]
pub struct UserDictionary {
    #[serde(rename = "entry", default, skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<Entry>,
}

/// A user dictionary entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "entry")]
pub struct Entry {
    // The format spells this attribute "work".
    #[serde(rename = "@work", default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_new() {
        let doc = Document::new("Open Screenplay Format document", "20");
        assert!(doc.is_empty());
        assert_eq!(doc.paragraph_count(), 0);
        assert_eq!(doc.title(), None);
    }

    #[test]
    fn test_add_paragraphs() {
        let mut doc = Document::default();
        doc.add_paragraph(Paragraph::with_text("body"));
        doc.add_title_paragraph(Paragraph::with_text("title"));
        doc.add_title_paragraph(Paragraph::with_text("by"));

        assert_eq!(doc.paragraph_count(), 1);
        assert_eq!(doc.title_page.as_ref().map(|tp| tp.items.len()), Some(2));
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_info_accessors() {
        let mut doc = Document::default();
        doc.info = Some(Info {
            title: Some("Brick".to_string()),
            written_by: Some("R. Johnson".to_string()),
            ..Info::default()
        });

        assert_eq!(doc.title(), Some("Brick"));
        assert_eq!(doc.written_by(), Some("R. Johnson"));
    }

    #[test]
    fn test_styles_lookup() {
        let mut action = Style::based_on("Action");
        action.name = Some("Action".to_string());
        let styles = Styles { items: vec![action] };

        assert!(styles.get("Action").is_some());
        assert!(styles.get("Dialogue").is_none());
    }
}
