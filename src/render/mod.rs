//! Rendering module for converting documents to plain text and OSF XML.

mod options;
mod text;
mod xml;

pub use options::RenderOptions;
pub use text::{render_paragraph, render_run, to_text};
pub use xml::{cleanup_self_closing_elements, to_xml, SELF_CLOSING_ELEMENTS, XML_DECLARATION};
