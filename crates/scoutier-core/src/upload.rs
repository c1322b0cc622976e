//! Uploaded file acceptance and reading.
//!
//! This is the boundary in front of the ingestion pipeline: files are
//! checked by name or MIME type and read fully into memory before any
//! scanning starts.

use std::path::Path;

use tracing::debug;

use crate::{Error, Result};

/// UTF-8 byte order mark.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Accepted file name suffixes.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = [".csv", ".xlsx", ".txt"];

/// Accepted MIME types.
pub const ACCEPTED_MIME_TYPES: [&str; 4] = [
    "text/csv",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "text/plain",
];

/// Returns true if a file with this name and optional MIME type may be
/// imported.
#[must_use]
pub fn is_accepted(name: &str, mime: Option<&str>) -> bool {
    mime.is_some_and(|mime| ACCEPTED_MIME_TYPES.contains(&mime))
        || ACCEPTED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// A file's display name and full text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Display name.
    pub name: String,
    /// Decoded content.
    pub text: String,
}

impl SourceFile {
    /// Creates a source file from already decoded text.
    #[must_use]
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Checks the format and decodes raw bytes as UTF-8, replacing invalid
    /// sequences. A leading byte order mark is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] if the file is not accepted.
    pub fn from_bytes(name: impl Into<String>, mime: Option<&str>, bytes: &[u8]) -> Result<Self> {
        let name = name.into();
        if !is_accepted(&name, mime) {
            return Err(Error::UnsupportedFormat(name));
        }

        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        Ok(Self {
            text: String::from_utf8_lossy(bytes).into_owned(),
            name,
        })
    }

    /// Checks the format and reads the file at `path`.
    ///
    /// The display name is the last path component.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] if the file is not accepted, or
    /// [`Error::ReadFailure`] if it cannot be read.
    pub async fn read(path: &Path, mime: Option<&str>) -> Result<Self> {
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

        if !is_accepted(&name, mime) {
            return Err(Error::UnsupportedFormat(name));
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| Error::ReadFailure {
                name: name.clone(),
                source,
            })?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());

        Self::from_bytes(name, mime, &bytes)
    }
}
