//! Error types for unosf library.

use std::io;
use thiserror::Error;

/// Result type alias for unosf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during OSF processing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when opening or reading files and archives.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not well-formed XML or does not have the OSF shape.
    #[error("Malformed OSF XML: {0}")]
    MalformedXml(String),

    /// Error while writing a document back to XML.
    #[error("XML serialization error: {0}")]
    Serialize(String),
}

impl From<quick_xml::DeError> for Error {
    fn from(err: quick_xml::DeError) -> Self {
        Error::MalformedXml(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::MalformedXml(err.to_string())
    }
}

impl From<quick_xml::SeError> for Error {
    fn from(err: quick_xml::SeError) -> Self {
        Error::Serialize(err.to_string())
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::MalformedXml(format!("invalid UTF-8: {}", err))
    }
}

// Archive failures are reported as I/O: the container could not be opened or read.
impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            other => Error::Io(io::Error::new(io::ErrorKind::InvalidData, other)),
        }
    }
}

impl Error {
    /// Check if this is an I/O (file or archive) error.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Check if this is a malformed XML error.
    pub fn is_malformed_xml(&self) -> bool {
        matches!(self, Error::MalformedXml(_))
    }
}
