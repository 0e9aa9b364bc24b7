//! Greedy word-budget packing.
//!
//! Groups consecutive sentences into chunks of at most `max_words` words,
//! never splitting a sentence.
//!
//! ## The Algorithm
//!
//! One pass, keeping a running chunk and its word count:
//!
//! ```text
//! for each sentence s with w words:
//!     if running + w > max_words and running chunk is non-empty:
//!         flush running chunk
//!     append s, running += w
//! flush running chunk if non-empty
//! ```
//!
//! Because an empty running chunk is never flushed, a sentence with more than
//! `max_words` words lands alone in its own chunk. That is the only way a
//! chunk can exceed the budget.
//!
//! ## Exact Fit
//!
//! The comparison is strict: a chunk may reach exactly `max_words`.
//!
//! ```text
//! max_words = 3
//! ["Hello world." (2), "This is great!" (3), "Is it?" (2)]
//!
//! 0 + 2 <= 3  -> running = 2
//! 2 + 3 >  3  -> flush "Hello world.",   running = 3
//! 3 + 2 >  3  -> flush "This is great!", running = 2
//! end         -> flush "Is it?"
//! ```

use std::ops::Range;

use tracing::debug;

use crate::sentence::{sentences, Sentence};
use crate::{Chunker, Slab, WordBudget};

/// Count whitespace-delimited words.
///
/// ```rust
/// assert_eq!(booksplit::word_count("  two\twords\n"), 2);
/// assert_eq!(booksplit::word_count(""), 0);
/// ```
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Group sentences by their word counts into index ranges.
///
/// Every range is non-empty and the ranges tile `0..word_counts.len()`.
fn group_by_budget(word_counts: &[usize], budget: WordBudget) -> Vec<Range<usize>> {
    let mut groups = Vec::new();
    let mut start = 0;
    let mut running = 0usize;

    for (i, &words) in word_counts.iter().enumerate() {
        if i > start && budget.would_overflow(running, words) {
            groups.push(start..i);
            start = i;
            running = 0;
        }
        if words > budget.max_words() {
            debug!(
                sentence = i,
                words,
                max_words = budget.max_words(),
                "sentence exceeds word budget, keeping it whole"
            );
        }
        running = running.saturating_add(words);
    }

    if start < word_counts.len() {
        groups.push(start..word_counts.len());
    }
    groups
}

fn join_sentences<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let mut joined = String::new();
    for part in parts {
        if !joined.is_empty() {
            joined.push(' ');
        }
        joined.push_str(part);
    }
    joined
}

/// Pack sentences into chunks of at most `max_words` words.
///
/// Sentences are joined with a single space. The output is empty iff
/// `sentences` is empty, and no chunk is ever empty.
///
/// # Panics
///
/// Panics if `max_words == 0`. Validate untrusted budgets with
/// [`WordBudget::new`] first.
///
/// ## Example
///
/// ```rust
/// use booksplit::pack;
///
/// let chunks = pack(&["One two.", "Three.", "Four five six."], 3);
/// assert_eq!(chunks, vec!["One two. Three.", "Four five six."]);
/// ```
#[must_use]
pub fn pack<S: AsRef<str>>(sentences: &[S], max_words: usize) -> Vec<String> {
    assert!(max_words > 0, "max_words must be > 0");
    let budget = WordBudget::new(max_words).unwrap_or_default();

    let counts: Vec<usize> = sentences.iter().map(|s| word_count(s.as_ref())).collect();

    group_by_budget(&counts, budget)
        .into_iter()
        .map(|range| join_sentences(sentences[range].iter().map(AsRef::as_ref)))
        .collect()
}

/// Sentence-preserving chunker with a word budget.
///
/// Segments text into sentences and packs them greedily. Slab texts are
/// identical to `pack(&segment(text), max_words)`; the slabs additionally
/// carry the source span of each chunk.
///
/// ## Example
///
/// ```rust
/// use booksplit::{Chunker, WordBudget, WordBudgetChunker};
///
/// let chunker = WordBudgetChunker::new(WordBudget::new(5).unwrap());
/// let text = "First sentence here. Second one. Third sentence is long.";
/// let slabs = chunker.chunk(text);
///
/// assert_eq!(slabs.len(), 2);
/// assert_eq!(slabs[0].text, "First sentence here. Second one.");
/// assert_eq!(&text[slabs[1].span()], "Third sentence is long.");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WordBudgetChunker {
    budget: WordBudget,
}

impl WordBudgetChunker {
    /// Create a new chunker with the given budget.
    #[must_use]
    pub const fn new(budget: WordBudget) -> Self {
        Self { budget }
    }

    /// Create a chunker from a raw word count.
    ///
    /// # Panics
    ///
    /// Panics if `max_words == 0`.
    #[must_use]
    pub fn with_max_words(max_words: usize) -> Self {
        assert!(max_words > 0, "max_words must be > 0");
        Self::new(WordBudget::new(max_words).unwrap_or_default())
    }

    /// The configured budget.
    #[must_use]
    pub const fn budget(&self) -> WordBudget {
        self.budget
    }
}

impl Chunker for WordBudgetChunker {
    fn chunk(&self, text: &str) -> Vec<Slab> {
        let sents: Vec<Sentence<'_>> = sentences(text).collect();
        if sents.is_empty() {
            return vec![];
        }

        let counts: Vec<usize> = sents.iter().map(|s| word_count(s.text)).collect();

        group_by_budget(&counts, self.budget)
            .into_iter()
            .enumerate()
            .map(|(index, range)| {
                let group = &sents[range];
                let start = group.first().map_or(0, |s| s.start);
                let end = group.last().map_or(start, Sentence::end);
                Slab::new(
                    join_sentences(group.iter().map(|s| s.text)),
                    start,
                    end,
                    index,
                )
            })
            .collect()
    }

    fn estimate_chunks(&self, text_len: usize) -> usize {
        if text_len == 0 {
            return 0;
        }
        // Rough estimate: ~6 bytes per English word including the space
        let estimated_words = text_len / 6;
        estimated_words.div_ceil(self.budget.max_words()).max(1)
    }
}
