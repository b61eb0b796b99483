//! OSF document parser using the quick-xml serde binding.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::detect::{detect_format_from_path, ContainerFormat};
use crate::error::Result;
use crate::model::Document;

use super::{package, runs};

/// OSF document parser.
///
/// Holds the raw OSF XML, already unwrapped from its container, until
/// [`OsfParser::parse`] decodes it.
pub struct OsfParser {
    source: Vec<u8>,
    format: ContainerFormat,
}

impl OsfParser {
    /// Open an OSF file or Fade In package.
    ///
    /// The container is chosen from the extension: `.fadein` (any case) is
    /// opened as a zip archive and its `document.xml` member is used,
    /// anything else is read as flat XML.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let format = detect_format_from_path(path);
        log::debug!("Opening {} as {}", path.display(), format);

        let source = match format {
            ContainerFormat::Package => package::read_package_file(path)?,
            ContainerFormat::FlatXml => fs::read(path)?,
        };

        Ok(Self { source, format })
    }

    /// Parse flat OSF XML from bytes.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self {
            source: data.to_vec(),
            format: ContainerFormat::FlatXml,
        }
    }

    /// Parse a Fade In package held in memory.
    pub fn from_package_bytes(data: &[u8]) -> Result<Self> {
        Ok(Self {
            source: package::read_package_bytes(data)?,
            format: ContainerFormat::Package,
        })
    }

    /// Parse flat OSF XML from a reader.
    ///
    /// Streams have no extension to inspect, so they are always flat XML.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(Self {
            source: data,
            format: ContainerFormat::FlatXml,
        })
    }

    /// Container the XML was read from.
    pub fn format(&self) -> ContainerFormat {
        self.format
    }

    /// The raw OSF XML bytes.
    pub fn source(&self) -> &[u8] {
        &self.source
    }

    /// Parse the document and return a structured Document.
    pub fn parse(&self) -> Result<Document> {
        let doc = parse_xml(&self.source)?;
        log::debug!(
            "Parsed OSF {} document: {} paragraphs, title page: {}",
            doc.format_version,
            doc.paragraph_count(),
            doc.title_page.is_some()
        );
        Ok(doc)
    }
}

/// Decode flat OSF XML.
///
/// Unknown elements and attributes are skipped by the binding; missing
/// required attributes, invalid UTF-8, and ill-formed XML are
/// `Error::MalformedXml`. Run text is then restored byte-exact from a
/// second, untrimmed pass.
pub(crate) fn parse_xml(data: &[u8]) -> Result<Document> {
    let text = std::str::from_utf8(data)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut doc: Document = quick_xml::de::from_str(text)?;
    runs::restore_run_text(&mut doc, runs::read_run_texts(text)?);
    Ok(doc)
}
