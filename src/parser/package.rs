//! Fade In package (zip archive) handling.

use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

use zip::result::ZipError;
use zip::ZipArchive;

use crate::detect::PACKAGE_DOCUMENT_MEMBER;
use crate::error::Result;

/// Upper bound on the buffer reserved up front from a member's declared size.
const MAX_PREALLOCATION: usize = 8 * 1024 * 1024;

/// Read the OSF XML member out of a package file on disk.
pub fn read_package_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(BufReader::new(file))?;
    read_document_member(&mut archive)
}

/// Read the OSF XML member out of an in-memory package.
pub fn read_package_bytes(data: &[u8]) -> Result<Vec<u8>> {
    let mut archive = ZipArchive::new(Cursor::new(data))?;
    read_document_member(&mut archive)
}

/// Read the full contents of the `document.xml` member.
///
/// A package without that member yields empty bytes rather than an error;
/// the XML decoder then reports the problem.
pub fn read_document_member<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<Vec<u8>> {
    let entries = archive.len();
    let mut member = match archive.by_name(PACKAGE_DOCUMENT_MEMBER) {
        Ok(member) => member,
        Err(ZipError::FileNotFound) => {
            log::warn!(
                "Package has no {} member ({} entries)",
                PACKAGE_DOCUMENT_MEMBER,
                entries
            );
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut data = Vec::with_capacity(capacity_hint(member.size()));
    member.read_to_end(&mut data)?;
    log::debug!("Read {} bytes from {}", data.len(), PACKAGE_DOCUMENT_MEMBER);
    Ok(data)
}

/// Initial buffer size for a member, capped at [`MAX_PREALLOCATION`].
fn capacity_hint(declared: u64) -> usize {
    usize::try_from(declared)
        .unwrap_or(usize::MAX)
        .min(MAX_PREALLOCATION)
}
