//! # booksplit
//!
//! Sentence-preserving chunking of book-length documents for summarization.
//!
//! ## The Problem
//!
//! A summarization model cannot read a whole book at once. The book has to be
//! cut into pieces small enough for the model, and each piece is summarized on
//! its own before the summaries are combined.
//!
//! Where you cut matters:
//!
//! - A chunk that ends mid-sentence hands the model half a thought
//! - A chunk that is too large gets truncated by the model
//! - Chunks must come back in reading order to build the final summary
//!
//! ## The Pipeline
//!
//! ```text
//! file.pdf ──extract──> "It was... ever." ──segment──> ["It was...", ..., "ever."]
//!                                                              │
//!                                                            pack (max_words)
//!                                                              │
//!                                    ["It was... best.", ..., "... ever."]  (chunks)
//!                                       chunk_index 0          chunk_index n
//! ```
//!
//! 1. **Extract** (`extract` feature): TXT, PDF, or DOCX to one trimmed string.
//! 2. **Segment**: split at `.`, `!`, or `?` followed by whitespace.
//! 3. **Pack**: greedily group consecutive sentences up to `max_words` words.
//!
//! Packing never splits a sentence. A single sentence longer than the budget
//! becomes a chunk on its own, which is the only way a chunk exceeds
//! `max_words`.
//!
//! ## Quick Start
//!
//! ```rust
//! use booksplit::{chunk_text, pack, segment};
//!
//! let text = "Hello world. This is great! Is it?";
//!
//! let sentences = segment(text);
//! assert_eq!(sentences, vec!["Hello world.", "This is great!", "Is it?"]);
//!
//! let chunks = pack(&sentences, 5);
//! assert_eq!(chunks, vec!["Hello world. This is great!", "Is it?"]);
//!
//! // Or in one step
//! assert_eq!(chunk_text(text, 5), chunks);
//! ```
//!
//! ## With Source Spans
//!
//! [`WordBudgetChunker`] implements [`Chunker`] and returns [`Slab`]s, which
//! carry each chunk's byte span in the source alongside the chunk text:
//!
//! ```rust
//! use booksplit::{Chunker, WordBudget, WordBudgetChunker};
//!
//! let chunker = WordBudgetChunker::new(WordBudget::default()); // 500 words
//! let slabs = chunker.chunk("Short book.\n\nThe end.");
//!
//! assert_eq!(slabs.len(), 1);
//! assert_eq!(slabs[0].text, "Short book. The end.");
//! assert_eq!(slabs[0].span(), 0..21);
//! ```
//!
//! ## From a File
//!
//! Requires the `extract` feature (on by default).
//!
//! ```rust,no_run
//! # #[cfg(feature = "extract")]
//! # fn main() -> booksplit::Result<()> {
//! use booksplit::{chunk_file, ChunkStore, MemoryChunkStore, WordBudget};
//!
//! let chunks = chunk_file("uploads/moby-dick.pdf", WordBudget::default())?;
//!
//! let mut store = MemoryChunkStore::new();
//! store.store_chunks(1, &chunks)?;
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "extract"))]
//! # fn main() {}
//! ```
//!
//! ## Concurrency
//!
//! Segmenting and packing are pure functions of their input: no I/O, no
//! shared state, no locks. Run one pipeline per document on as many threads
//! as you like.

mod budget;
mod error;
mod packer;
mod sentence;
mod slab;
mod store;

#[cfg(feature = "extract")]
mod docx;
#[cfg(feature = "extract")]
mod extract;

pub use budget::{WordBudget, DEFAULT_MAX_WORDS};
pub use error::{Error, Result};
pub use packer::{pack, word_count, WordBudgetChunker};
pub use sentence::{segment, sentences, Sentence, Sentences};
pub use slab::Slab;
pub use store::{ChunkRecord, ChunkStore, MemoryChunkStore};

#[cfg(feature = "extract")]
pub use extract::{
    extract_text, DocumentFormat, ExtractConfig, Extractor, DEFAULT_MAX_FILE_BYTES,
};

/// A text chunking strategy.
///
/// ```rust
/// use booksplit::{Chunker, WordBudgetChunker};
///
/// fn chunk_document(chunker: &dyn Chunker, text: &str) -> Vec<booksplit::Slab> {
///     chunker.chunk(text)
/// }
///
/// let chunker = WordBudgetChunker::with_max_words(100);
/// let slabs = chunk_document(&chunker, "Hello world. This is a test.");
/// assert_eq!(slabs.len(), 1);
/// ```
pub trait Chunker: Send + Sync {
    /// Split text into chunks.
    ///
    /// Each chunk is a [`Slab`] containing the text and its byte offsets
    /// in the original document.
    fn chunk(&self, text: &str) -> Vec<Slab>;

    /// Estimate the number of chunks for a given text length.
    ///
    /// Useful for pre-allocation. May be approximate.
    fn estimate_chunks(&self, text_len: usize) -> usize {
        // Conservative default
        (text_len / 500).max(1)
    }
}

/// Segment `text` and pack the sentences into chunks of at most `max_words`.
///
/// # Panics
///
/// Panics if `max_words == 0`.
#[must_use]
pub fn chunk_text(text: &str, max_words: usize) -> Vec<String> {
    pack(&segment(text), max_words)
}

/// Extract a document and chunk its text.
///
/// Extraction failures are returned before any chunking happens.
///
/// # Errors
///
/// Any error from [`extract_text`].
#[cfg(feature = "extract")]
pub fn chunk_file(path: impl AsRef<std::path::Path>, budget: WordBudget) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = extract_text(path)?;
    let chunks = chunk_text(&text, budget.max_words());

    tracing::info!(
        path = %path.display(),
        bytes = text.len(),
        chunks = chunks.len(),
        max_words = budget.max_words(),
        "chunked document"
    );
    Ok(chunks)
}
