//! Container format detection for OSF input.
//!
//! OSF documents come either as flat XML (`.osf`, `.xml`, or a stream) or
//! packaged inside a Fade In project file, a zip archive whose
//! `document.xml` member holds the OSF XML. Selection is by file extension
//! only; the content is never sniffed.

use std::path::Path;

/// File extension (without the dot) of packaged Fade In projects.
pub const PACKAGE_EXTENSION: &str = "fadein";

/// Name of the archive member holding the OSF XML inside a package.
pub const PACKAGE_DOCUMENT_MEMBER: &str = "document.xml";

/// How the OSF XML is framed in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContainerFormat {
    /// Plain OSF XML bytes.
    #[default]
    FlatXml,
    /// Zip archive with the XML in a `document.xml` member.
    Package,
}

impl std::fmt::Display for ContainerFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContainerFormat::FlatXml => write!(f, "OSF XML"),
            ContainerFormat::Package => write!(f, "Fade In package"),
        }
    }
}

/// Detect the container format from a file path.
///
/// The extension is compared case-insensitively against
/// [`PACKAGE_EXTENSION`]; anything else, including no extension at all,
/// is flat XML.
///
/// # Example
/// ```
/// use unosf::detect::{detect_format_from_path, ContainerFormat};
///
/// assert_eq!(detect_format_from_path("draft.FadeIn"), ContainerFormat::Package);
/// assert_eq!(detect_format_from_path("draft.osf"), ContainerFormat::FlatXml);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> ContainerFormat {
    match path.as_ref().extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case(PACKAGE_EXTENSION) => ContainerFormat::Package,
        _ => ContainerFormat::FlatXml,
    }
}

/// Check if a path names a packaged Fade In project.
pub fn is_package<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path) == ContainerFormat::Package
}

/// Check if a path carries a non-empty extension.
///
/// Callers use this to choose between reading a named file (framing known
/// from the extension) and reading a stream of unknown framing, which is
/// always treated as flat XML.
pub fn has_extension<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .map(|e| !e.is_empty())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_package_case_insensitive() {
        assert_eq!(detect_format_from_path("a.fadein"), ContainerFormat::Package);
        assert_eq!(detect_format_from_path("a.FADEIN"), ContainerFormat::Package);
        assert_eq!(detect_format_from_path("dir/a.FadeIn"), ContainerFormat::Package);
    }

    #[test]
    fn test_detect_flat_xml() {
        assert_eq!(detect_format_from_path("a.osf"), ContainerFormat::FlatXml);
        assert_eq!(detect_format_from_path("a.xml"), ContainerFormat::FlatXml);
        assert_eq!(detect_format_from_path("a"), ContainerFormat::FlatXml);
        assert_eq!(detect_format_from_path("fadein"), ContainerFormat::FlatXml);
    }

    #[test]
    fn test_is_package() {
        assert!(is_package("script.fadein"));
        assert!(!is_package("script.fadein.xml"));
    }

    #[test]
    fn test_has_extension() {
        assert!(has_extension("screenplay.osf"));
        assert!(!has_extension("screenplay"));
        assert!(!has_extension(""));
    }

    #[test]
    fn test_display() {
        assert_eq!(ContainerFormat::FlatXml.to_string(), "OSF XML");
        assert_eq!(ContainerFormat::Package.to_string(), "Fade In package");
    }
}
