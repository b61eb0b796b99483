//! # unosf
//!
//! Open Screenplay Format (OSF) extraction library for Rust.
//!
//! This library reads OSF 2.0 XML documents, either flat or packaged
//! inside a Fade In `.fadein` project file, and renders them to readable
//! plain text. Documents can also be written back to OSF XML in the form
//! Fade In accepts.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unosf::{parse_file, render};
//!
//! fn main() -> unosf::Result<()> {
//!     // Parse a Fade In project (or an .osf file)
//!     let doc = parse_file("screenplay.fadein")?;
//!
//!     // Convert to plain text
//!     let options = render::RenderOptions::default();
//!     let text = render::to_text(&doc, &options);
//!     println!("{}", text);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Container detection**: `.fadein` zip packages and flat OSF XML
//! - **Screenplay-aware text**: scene headings, characters, and transitions
//!   upper-cased, parentheticals bracketed, emphasis as `*`, `**`, `_`, `~~`
//! - **Round-tripping**: the document model writes back to OSF XML

pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use detect::{detect_format_from_path, is_package, ContainerFormat};
pub use error::{Error, Result};
pub use model::{
    Document, Info, Lists, Paragraph, Paragraphs, Settings, Style, StyleKind, TextRun, TitlePage,
};
pub use parser::OsfParser;
pub use render::RenderOptions;

use std::io::Read;
use std::path::Path;

/// Parse an OSF file or Fade In package and return a structured document.
///
/// # Arguments
///
/// * `path` - Path to a `.fadein` package or a flat OSF XML file
///
/// # Example
///
/// ```no_run
/// use unosf::parse_file;
///
/// let doc = parse_file("screenplay.osf").unwrap();
/// println!("Paragraphs: {}", doc.paragraph_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let parser = OsfParser::open(path)?;
    parser.parse()
}

/// Parse flat OSF XML from bytes.
///
/// # Example
///
/// ```
/// use unosf::parse_bytes;
///
/// let xml = br#"<document type="Open Screenplay Format document" version="20"/>"#;
/// let doc = parse_bytes(xml).unwrap();
/// assert_eq!(doc.format_version, "20");
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    parser::parse_xml(data)
}

/// Parse flat OSF XML from a reader.
///
/// # Example
///
/// ```no_run
/// use unosf::parse_reader;
///
/// let doc = parse_reader(std::io::stdin()).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    let parser = OsfParser::from_reader(reader)?;
    parser.parse()
}

/// Extract plain text from an OSF file or Fade In package.
///
/// # Example
///
/// ```no_run
/// use unosf::extract_text;
///
/// let text = extract_text("screenplay.fadein").unwrap();
/// println!("{}", text);
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    Ok(doc.render())
}

/// Convert an OSF file or Fade In package to plain text with options.
pub fn to_text<P: AsRef<Path>>(path: P, options: &RenderOptions) -> Result<String> {
    let doc = parse_file(path)?;
    Ok(render::to_text(&doc, options))
}

/// Re-serialize an OSF file or Fade In package as flat OSF XML.
///
/// # Example
///
/// ```no_run
/// use unosf::to_xml;
///
/// let xml = to_xml("screenplay.fadein").unwrap();
/// std::fs::write("screenplay.osf", xml).unwrap();
/// ```
pub fn to_xml<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_xml(&doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Edge Case Tests ====================

    #[test]
    fn test_parse_bytes_empty_data() {
        let result = parse_bytes(&[]);
        assert!(matches!(result, Err(Error::MalformedXml(_))));
    }

    #[test]
    fn test_parse_bytes_not_xml() {
        let result = parse_bytes(b"INT. OFFICE - DAY");
        assert!(matches!(result, Err(Error::MalformedXml(_))));
    }

    #[test]
    fn test_parse_bytes_missing_version() {
        let result = parse_bytes(br#"<document type="Open Screenplay Format document"/>"#);
        assert!(matches!(result, Err(Error::MalformedXml(_))));
    }

    #[test]
    fn test_parse_bytes_missing_type() {
        let result = parse_bytes(br#"<document version="20"/>"#);
        assert!(matches!(result, Err(Error::MalformedXml(_))));
    }

    #[test]
    fn test_parse_bytes_minimal() {
        let doc = parse_bytes(br#"<document type="t" version="20"></document>"#).unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.render(), "");
    }

    #[test]
    fn test_parse_file_missing() {
        let result = parse_file("definitely/not/here.osf");
        assert!(matches!(result, Err(Error::Io(_))));

        let result = parse_file("definitely/not/here.fadein");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_parse_reader() {
        let xml: &[u8] = br#"<document type="t" version="20"><paragraphs><para><text>Hi</text></para></paragraphs></document>"#;
        let doc = parse_reader(xml).unwrap();
        assert_eq!(doc.render(), "Hi\n");
    }
}
