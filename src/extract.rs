//! Plain-text extraction from uploaded documents.
//!
//! Turns a TXT, PDF, or DOCX file into the single string the segmenter reads.
//!
//! | Format | Source | Notes |
//! |--------|--------|-------|
//! | TXT | raw bytes | UTF-8, falling back to Latin-1 |
//! | PDF | per-page text | blank pages skipped, pages joined by `\n` |
//! | DOCX | `word/document.xml` | non-blank paragraphs joined by `\n` |
//!
//! The result is trimmed. Two failures are kept apart so callers can word
//! them differently: [`Error::UnsupportedFormat`] for an unknown extension and
//! [`Error::NoExtractableText`] for a file that parsed but held no text.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::docx::extract_docx;
use crate::{Error, Result};

/// Default upload size limit: 10 MiB.
pub const DEFAULT_MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    /// Plain text.
    Txt,
    /// Portable Document Format.
    Pdf,
    /// Office Open XML word processing document.
    Docx,
}

impl DocumentFormat {
    /// Detect the format from a file extension, with or without the leading dot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] for anything but txt, pdf, docx.
    ///
    /// ```rust
    /// use booksplit::DocumentFormat;
    ///
    /// assert_eq!(DocumentFormat::from_extension(".PDF").unwrap(), DocumentFormat::Pdf);
    /// assert!(DocumentFormat::from_extension("doc").is_err());
    /// ```
    pub fn from_extension(ext: &str) -> Result<Self> {
        let ext = ext.trim_start_matches('.');
        match ext.to_ascii_lowercase().as_str() {
            "txt" => Ok(Self::Txt),
            "pdf" => Ok(Self::Pdf),
            "docx" => Ok(Self::Docx),
            _ => Err(Error::UnsupportedFormat(ext.to_string())),
        }
    }

    /// Detect the format from a path's extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] if the path has no supported extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_extension(ext)
    }

    /// The canonical lowercase extension, without the dot.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Extraction settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Inputs larger than this are rejected before parsing.
    pub max_file_bytes: u64,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
        }
    }
}

/// Extracts plain text from documents.
///
/// ```rust
/// use booksplit::{DocumentFormat, ExtractConfig, Extractor};
///
/// let extractor = Extractor::new(ExtractConfig { max_file_bytes: 1024 });
/// let text = extractor.extract_bytes(b"  A short book.\n", DocumentFormat::Txt).unwrap();
/// assert_eq!(text, "A short book.");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor {
    config: ExtractConfig,
}

impl Extractor {
    /// Create an extractor with the given settings.
    #[must_use]
    pub const fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    /// The active settings.
    #[must_use]
    pub const fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Extract text from a file, detecting the format from its extension.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedFormat`], [`Error::FileTooLarge`], [`Error::Io`],
    /// the format-specific parse errors, or [`Error::NoExtractableText`].
    pub fn extract_path(&self, path: &Path) -> Result<String> {
        let format = DocumentFormat::from_path(path)?;
        let size = std::fs::metadata(path)?.len();
        self.check_size(size)?;

        debug!(path = %path.display(), %format, size, "extracting document text");
        let bytes = std::fs::read(path)?;
        self.extract_bytes(&bytes, format)
    }

    /// Extract text from in-memory document bytes.
    ///
    /// # Errors
    ///
    /// [`Error::FileTooLarge`], the format-specific parse errors, or
    /// [`Error::NoExtractableText`].
    pub fn extract_bytes(&self, bytes: &[u8], format: DocumentFormat) -> Result<String> {
        self.check_size(bytes.len() as u64)?;

        let raw = match format {
            DocumentFormat::Txt => decode_txt(bytes),
            DocumentFormat::Pdf => extract_pdf(bytes)?,
            DocumentFormat::Docx => extract_docx(bytes)?,
        };

        let text = raw.trim();
        if text.is_empty() {
            return Err(Error::NoExtractableText);
        }
        Ok(text.to_string())
    }

    fn check_size(&self, size: u64) -> Result<()> {
        if size > self.config.max_file_bytes {
            return Err(Error::FileTooLarge {
                size,
                limit: self.config.max_file_bytes,
            });
        }
        Ok(())
    }
}

/// Extract text from a file with the default settings.
///
/// # Errors
///
/// See [`Extractor::extract_path`].
pub fn extract_text(path: impl AsRef<Path>) -> Result<String> {
    Extractor::default().extract_path(path.as_ref())
}

/// Decode UTF-8, falling back to Latin-1 on invalid input.
fn decode_txt(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.strip_prefix('\u{feff}').unwrap_or(s).to_string(),
        Err(e) => {
            warn!(error = %e, "text is not valid UTF-8, decoding as Latin-1");
            bytes.iter().map(|&b| char::from(b)).collect()
        }
    }
}

fn extract_pdf(bytes: &[u8]) -> Result<String> {
    match pdf_extract::extract_text_from_mem_by_pages(bytes) {
        Ok(pages) => {
            let text = join_pages(&pages);
            if !text.is_empty() {
                debug!(pages = pages.len(), "extracted pdf text by page");
                return Ok(text);
            }
            debug!("no text found page by page, retrying whole document");
        }
        Err(e) => warn!(error = %e, "per-page pdf extraction failed, retrying whole document"),
    }

    pdf_extract::extract_text_from_mem(bytes).map_err(|e| Error::Pdf(e.to_string()))
}

/// Join trimmed page texts with newlines, skipping pages with no text.
fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    pages
        .iter()
        .map(|p| p.as_ref().trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
