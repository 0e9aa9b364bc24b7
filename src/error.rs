//! Error types for booksplit.

/// Errors that can occur while extracting or chunking a document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid word budget (must be > 0).
    #[error("invalid word budget: {0} (must be > 0)")]
    InvalidWordBudget(usize),

    /// The file extension is not one of txt, pdf, docx.
    #[error("unsupported format: {0:?}")]
    UnsupportedFormat(String),

    /// Extraction succeeded but produced only whitespace.
    #[error("no extractable text found")]
    NoExtractableText,

    /// The input is larger than the configured limit.
    #[error("file size {size} bytes exceeds limit of {limit} bytes")]
    FileTooLarge {
        /// Size of the rejected input.
        size: u64,
        /// The configured limit.
        limit: u64,
    },

    /// Reading the source file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The PDF could not be parsed.
    #[error("pdf error: {0}")]
    Pdf(String),

    /// The DOCX container or its document part could not be read.
    #[error("docx error: {0}")]
    Docx(String),
}

/// Result type for booksplit operations.
pub type Result<T> = std::result::Result<T, Error>;
