//! Sentence segmentation.
//!
//! Splits text into sentences at terminal punctuation followed by whitespace.
//!
//! ## The Rule
//!
//! A boundary sits wherever `.`, `!`, or `?` is immediately followed by one or
//! more whitespace characters. The punctuation stays with the sentence before
//! it; the whitespace run is dropped.
//!
//! ```text
//! "Hello world. This is great! Is it?"
//!              ^              ^
//!              boundaries (punctuation + whitespace)
//!
//! ["Hello world.", "This is great!", "Is it?"]
//! ```
//!
//! Pieces are trimmed and empty pieces are skipped, so stray punctuation runs
//! and trailing whitespace never produce empty sentences.
//!
//! ## What It Does Not Do
//!
//! There is no abbreviation handling and no locale awareness:
//!
//! ```text
//! "Dr. Smith arrived."  ->  ["Dr.", "Smith arrived."]
//! "3.14 is pi."         ->  ["3.14 is pi."]          (no whitespace after '.')
//! ```
//!
//! That keeps segmentation total, linear, and fully predictable, which is what
//! the downstream packer and its reassembly guarantees rely on.

use std::iter::FusedIterator;

/// A trimmed sentence borrowed from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// Byte offset of the first character of the sentence in the source.
    pub start: usize,
    /// The sentence text, trimmed and non-empty.
    pub text: &'a str,
}

impl Sentence<'_> {
    /// Byte offset one past the last character of the sentence.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Iterator over the sentences of a text, in reading order.
///
/// Created by [`sentences`].
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Sentences<'a> {
    type Item = Sentence<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.text.len() {
            let piece_start = self.pos;
            let rest = &self.text[piece_start..];

            let piece = match find_boundary(rest) {
                Some((end, next)) => {
                    self.pos += next;
                    &rest[..end]
                }
                None => {
                    self.pos = self.text.len();
                    rest
                }
            };

            let trimmed = piece.trim();
            if !trimmed.is_empty() {
                let leading = piece.len() - piece.trim_start().len();
                return Some(Sentence {
                    start: piece_start + leading,
                    text: trimmed,
                });
            }
        }
        None
    }
}

impl FusedIterator for Sentences<'_> {}

/// Find the first boundary in `s`.
///
/// Returns `(piece_end, next_start)`: the piece ends right after the
/// punctuation and the next piece starts after the whitespace run.
fn find_boundary(s: &str) -> Option<(usize, usize)> {
    for (i, c) in s.char_indices() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let after = i + c.len_utf8();
        let tail = &s[after..];
        if tail.starts_with(char::is_whitespace) {
            let ws = tail.len() - tail.trim_start().len();
            return Some((after, after + ws));
        }
    }
    None
}

/// Iterate over the sentences of `text` with their byte offsets.
///
/// ## Example
///
/// ```rust
/// use booksplit::sentences;
///
/// let text = "One.  Two!";
/// let spans: Vec<_> = sentences(text).map(|s| (s.start, s.text)).collect();
///
/// assert_eq!(spans, vec![(0, "One."), (6, "Two!")]);
/// ```
#[must_use]
pub fn sentences(text: &str) -> Sentences<'_> {
    Sentences { text, pos: 0 }
}

/// Split `text` into trimmed, non-empty sentences in reading order.
///
/// Total over all strings: empty or whitespace-only input gives an empty
/// vector, and input without terminal punctuation is a single sentence.
///
/// ## Example
///
/// ```rust
/// use booksplit::segment;
///
/// assert_eq!(
///     segment("Hello world. This is great! Is it?"),
///     vec!["Hello world.", "This is great!", "Is it?"]
/// );
/// assert!(segment("   ").is_empty());
/// ```
#[must_use]
pub fn segment(text: &str) -> Vec<&str> {
    sentences(text).map(|s| s.text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_sentences() {
        let text = "Hello world. How are you? I am fine.";
        assert_eq!(
            segment(text),
            vec!["Hello world.", "How are you?", "I am fine."]
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn test_whitespace_only() {
        assert!(segment("   \n\t  ").is_empty());
    }

    #[test]
    fn test_no_terminal_punctuation() {
        assert_eq!(segment("  no punctuation here \n"), vec!["no punctuation here"]);
    }

    #[test]
    fn test_punctuation_without_whitespace_does_not_split() {
        assert_eq!(segment("Pi is 3.14.Really?Yes"), vec!["Pi is 3.14.Really?Yes"]);
    }

    #[test]
    fn test_newlines_and_runs_of_whitespace() {
        let text = "First line.\n\nSecond   line!\t\tThird?   ";
        assert_eq!(segment(text), vec!["First line.", "Second   line!", "Third?"]);
    }

    #[test]
    fn test_repeated_punctuation() {
        assert_eq!(segment("Wait... What?! Ok."), vec!["Wait...", "What?!", "Ok."]);
        assert_eq!(segment("a! ? b"), vec!["a!", "?", "b"]);
    }

    #[test]
    fn test_abbreviations_split() {
        assert_eq!(segment("Dr. Smith arrived."), vec!["Dr.", "Smith arrived."]);
    }

    #[test]
    fn test_unicode_whitespace_and_text() {
        let text = "Привет мир.\u{3000}日本語です! done";
        assert_eq!(segment(text), vec!["Привет мир.", "日本語です!", "done"]);
    }

    #[test]
    fn test_offsets_point_into_source() {
        let text = "  One.\n Two two!  Three ";
        for s in sentences(text) {
            assert_eq!(&text[s.start..s.end()], s.text);
        }
        let starts: Vec<usize> = sentences(text).map(|s| s.start).collect();
        assert_eq!(starts, vec![2, 8, 18]);
    }

    #[test]
    fn test_iterator_is_fused() {
        let mut iter = sentences("Only.");
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }
}
