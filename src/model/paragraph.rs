//! Paragraph, text run, and style types.

use serde::{Deserialize, Serialize};

/// Attribute value that switches a text run flag on.
///
/// OSF stores run flags as strings; only this exact value means "set".
pub const FLAG_ON: &str = "1";

fn flag_is_on(flag: &Option<String>) -> bool {
    flag.as_deref() == Some(FLAG_ON)
}

/// A paragraph (`<para>`) of the screenplay body or title page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "para")]
pub struct Paragraph {
    /// Page number hint
    #[serde(rename = "@page_number", default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<String>,

    /// Bookmark label
    #[serde(rename = "@bookmark", default, skip_serializing_if = "Option::is_none")]
    pub bookmark: Option<String>,

    /// Paragraph style
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,

    /// Text runs in the paragraph
    #[serde(rename = "text", default, skip_serializing_if = "Vec::is_empty")]
    pub runs: Vec<TextRun>,

    /// Revision marks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marks: Option<Marks>,
}

impl Paragraph {
    /// Create a new empty paragraph without a style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty paragraph whose style has the given base style name.
    pub fn with_style(base_style_name: impl Into<String>) -> Self {
        Self {
            style: Some(Style::based_on(base_style_name)),
            ..Self::default()
        }
    }

    /// Create an unstyled paragraph holding one plain run.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_run(TextRun::new(text));
        p
    }

    /// Add a text run.
    pub fn add_run(&mut self, run: TextRun) {
        self.runs.push(run);
    }

    /// Builder form of [`Paragraph::add_run`].
    pub fn run(mut self, run: TextRun) -> Self {
        self.add_run(run);
        self
    }

    /// The kind of paragraph, from the style's base style name.
    ///
    /// `None` when the paragraph carries no style.
    pub fn kind(&self) -> Option<StyleKind> {
        self.style.as_ref().map(Style::kind)
    }

    /// Literal text of all runs, without any formatting applied.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check if the paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.plain_text().trim().is_empty()
    }
}

/// A run of text (`<text>`) with its own emphasis flags.
///
/// Flags keep the raw attribute value so documents round-trip exactly;
/// use the `is_*` accessors to test them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "text")]
pub struct TextRun {
    #[serde(rename = "@underline", default, skip_serializing_if = "Option::is_none")]
    pub underline: Option<String>,

    #[serde(rename = "@italic", default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<String>,

    #[serde(rename = "@bold", default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<String>,

    #[serde(rename = "@strikethrough", default, skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<String>,

    #[serde(rename = "@allcaps", default, skip_serializing_if = "Option::is_none")]
    pub all_caps: Option<String>,

    /// The literal text content
    #[serde(rename = "$text", default)]
    pub text: String,
}

impl TextRun {
    /// Create a new text run with no flags set.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_underline(mut self) -> Self {
        self.underline = Some(FLAG_ON.to_string());
        self
    }

    pub fn with_italic(mut self) -> Self {
        self.italic = Some(FLAG_ON.to_string());
        self
    }

    pub fn with_bold(mut self) -> Self {
        self.bold = Some(FLAG_ON.to_string());
        self
    }

    pub fn with_strikethrough(mut self) -> Self {
        self.strikethrough = Some(FLAG_ON.to_string());
        self
    }

    pub fn with_all_caps(mut self) -> Self {
        self.all_caps = Some(FLAG_ON.to_string());
        self
    }

    pub fn is_underline(&self) -> bool {
        flag_is_on(&self.underline)
    }

    pub fn is_italic(&self) -> bool {
        flag_is_on(&self.italic)
    }

    pub fn is_bold(&self) -> bool {
        flag_is_on(&self.bold)
    }

    pub fn is_strikethrough(&self) -> bool {
        flag_is_on(&self.strikethrough)
    }

    pub fn is_all_caps(&self) -> bool {
        flag_is_on(&self.all_caps)
    }

    /// Check if any emphasis flag is on.
    pub fn has_styling(&self) -> bool {
        self.is_underline()
            || self.is_italic()
            || self.is_bold()
            || self.is_strikethrough()
            || self.is_all_caps()
    }
}

/// A named paragraph style (`<style>`).
///
/// Only [`Style::base_style_name`] affects text rendering; the layout
/// attributes are kept for round-tripping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "style")]
pub struct Style {
    #[serde(rename = "@name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "@builtin", default, skip_serializing_if = "Option::is_none")]
    pub builtin: Option<String>,

    #[serde(rename = "@builtin_index", default, skip_serializing_if = "Option::is_none")]
    pub builtin_index: Option<String>,

    #[serde(rename = "@label", default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Semantic paragraph category, see [`StyleKind`]
    #[serde(rename = "@basestylename", default, skip_serializing_if = "Option::is_none")]
    pub base_style_name: Option<String>,

    #[serde(rename = "@style_enter", default, skip_serializing_if = "Option::is_none")]
    pub style_enter: Option<String>,

    #[serde(rename = "@font", default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,

    #[serde(rename = "@size", default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    #[serde(rename = "@spacebefore", default, skip_serializing_if = "Option::is_none")]
    pub space_before: Option<String>,

    #[serde(rename = "@style_tab", default, skip_serializing_if = "Option::is_none")]
    pub style_tab: Option<String>,

    #[serde(rename = "@keepwithnext", default, skip_serializing_if = "Option::is_none")]
    pub keep_with_next: Option<String>,

    #[serde(rename = "@effects", default, skip_serializing_if = "Option::is_none")]
    pub effects: Option<String>,

    #[serde(rename = "@leftindent", default, skip_serializing_if = "Option::is_none")]
    pub left_indent: Option<String>,

    #[serde(rename = "@rightindent", default, skip_serializing_if = "Option::is_none")]
    pub right_indent: Option<String>,

    #[serde(rename = "@align", default, skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
}

impl Style {
    /// Create a style with only a base style name.
    pub fn based_on(base_style_name: impl Into<String>) -> Self {
        Self {
            base_style_name: Some(base_style_name.into()),
            ..Self::default()
        }
    }

    /// The semantic kind of this style.
    pub fn kind(&self) -> StyleKind {
        StyleKind::from_name(self.base_style_name.as_deref().unwrap_or_default())
    }

    /// Parsed alignment, if the attribute holds a known value.
    pub fn alignment(&self) -> Option<Alignment> {
        self.align.as_deref().and_then(Alignment::from_name)
    }
}

/// Closed set of base style names that drive text rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StyleKind {
    /// "Normal Text"
    NormalText,
    /// "Scene Heading"
    SceneHeading,
    /// "Action"
    Action,
    /// "Character"
    Character,
    /// "Dialogue"
    Dialogue,
    /// "Parenthetical"
    Parenthetical,
    /// "Transition"
    Transition,
    /// "Cast List"
    CastList,
    /// "Shot"
    Shot,
    /// "Singing"
    Singing,
    /// Any other base style name, kept verbatim
    Other(String),
}

impl StyleKind {
    /// Map a base style name to its kind. Matching is exact.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Normal Text" => StyleKind::NormalText,
            "Scene Heading" => StyleKind::SceneHeading,
            "Action" => StyleKind::Action,
            "Character" => StyleKind::Character,
            "Dialogue" => StyleKind::Dialogue,
            "Parenthetical" => StyleKind::Parenthetical,
            "Transition" => StyleKind::Transition,
            "Cast List" => StyleKind::CastList,
            "Shot" => StyleKind::Shot,
            "Singing" => StyleKind::Singing,
            other => StyleKind::Other(other.to_string()),
        }
    }

    /// The base style name as written in OSF.
    pub fn as_str(&self) -> &str {
        match self {
            StyleKind::NormalText => "Normal Text",
            StyleKind::SceneHeading => "Scene Heading",
            StyleKind::Action => "Action",
            StyleKind::Character => "Character",
            StyleKind::Dialogue => "Dialogue",
            StyleKind::Parenthetical => "Parenthetical",
            StyleKind::Transition => "Transition",
            StyleKind::CastList => "Cast List",
            StyleKind::Shot => "Shot",
            StyleKind::Singing => "Singing",
            StyleKind::Other(name) => name,
        }
    }
}

impl std::fmt::Display for StyleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Paragraph alignment values used by the `align` style attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Parse an OSF alignment value.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Left" => Some(Alignment::Left),
            "Center" => Some(Alignment::Center),
            "Right" => Some(Alignment::Right),
            _ => None,
        }
    }
}

/// Revision marks attached to a paragraph. Not rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "marks")]
pub struct Marks {
    #[serde(rename = "mark", default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Mark>,
}

/// A single revision mark.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "mark")]
pub struct Mark {
    #[serde(rename = "@at", default, skip_serializing_if = "Option::is_none")]
    pub at: Option<String>,

    #[serde(rename = "@revision", default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
}
