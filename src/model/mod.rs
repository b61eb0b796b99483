//! Document model types for OSF content representation.
//!
//! This module mirrors the element and attribute shape of an Open
//! Screenplay Format 2.0 document closely enough to round-trip through
//! XML. Attribute values are kept as raw strings; typed views such as
//! [`StyleKind`] and the `TextRun::is_*` flag accessors sit on top.

mod document;
mod lists;
mod paragraph;

pub use document::{
    Document, Entry, Info, Paragraphs, Settings, Spelling, Styles, TitlePage, UserDictionary,
};
pub use lists::{
    Character, Characters, Extension, Extensions, Lists, Location, Locations, RevisionColor,
    RevisionColors, SceneIntro, SceneIntros, SceneTime, SceneTimes, TagCategories, TagCategory,
    Transition, Transitions,
};
pub use paragraph::{Alignment, Mark, Marks, Paragraph, Style, StyleKind, TextRun, FLAG_ON};
