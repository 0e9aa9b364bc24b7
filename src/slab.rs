//! The Slab type: a packed chunk with position metadata.

use crate::packer::word_count;

/// A chunk of sentences with its position in the original document.
///
/// ## Text vs. Span
///
/// `text` is the chunk as handed to summarization: its sentences joined with
/// a single space. `start` and `end` are byte offsets into the original text
/// covering the first byte of the first sentence through the last byte of the
/// last sentence. When sentences were separated by a single space the two
/// agree exactly:
///
/// ```rust
/// use booksplit::Slab;
///
/// let text = "Hello world. Bye now.";
/// let slab = Slab::new("Hello world. Bye now.", 0, 21, 0);
///
/// assert_eq!(&text[slab.span()], slab.text);
/// ```
///
/// With newlines or runs of spaces between sentences, `text` is the
/// normalized form and the span still locates the chunk in the source:
///
/// ```text
/// Original: "One.\n\nTwo."
/// Slab 0:   text "One. Two."   span [0..10]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slab {
    /// The chunk text.
    pub text: String,
    /// Byte offset where this chunk starts in the original document.
    pub start: usize,
    /// Byte offset where this chunk ends (exclusive) in the original document.
    pub end: usize,
    /// Zero-based index of this chunk in the sequence.
    pub index: usize,
}

impl Slab {
    /// Create a new slab.
    #[must_use]
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }

    /// The length of this chunk in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether this chunk is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of whitespace-delimited words in the chunk.
    #[must_use]
    pub fn word_count(&self) -> usize {
        word_count(&self.text)
    }

    /// The byte span of this chunk in the original document.
    #[must_use]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl std::fmt::Display for Slab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Slab {{ index: {}, span: {}..{}, words: {} }}",
            self.index,
            self.start,
            self.end,
            self.word_count()
        )
    }
}

impl From<Slab> for String {
    fn from(slab: Slab) -> Self {
        slab.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_and_display() {
        let slab = Slab::new("One. Two three.", 0, 16, 3);
        assert_eq!(slab.word_count(), 3);
        assert_eq!(slab.to_string(), "Slab { index: 3, span: 0..16, words: 3 }");
    }

    #[test]
    fn test_into_string() {
        let s: String = Slab::new("Done.", 4, 9, 0).into();
        assert_eq!(s, "Done.");
    }
}
